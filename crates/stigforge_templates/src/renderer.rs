//! Template rendering.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};

/// Renders `{{variable}}` placeholders against a flat value mapping.
///
/// A placeholder with no binding is a hard error: a template must
/// never emit configuration text with an unreplaced variable.
pub struct Renderer {
    variable_pattern: Regex,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}")
                .expect("valid placeholder pattern"),
        }
    }

    /// Substitute every placeholder in `content`.
    pub fn render(
        &self,
        content: &str,
        variables: &HashMap<String, String>,
    ) -> TemplateResult<String> {
        let mut output = String::with_capacity(content.len());
        let mut last = 0;
        for caps in self.variable_pattern.captures_iter(content) {
            let Some(whole) = caps.get(0) else { continue };
            let name = &caps[1];
            let value = variables
                .get(name)
                .ok_or_else(|| TemplateError::UndefinedVariable(name.to_string()))?;
            output.push_str(&content[last..whole.start()]);
            output.push_str(value);
            last = whole.end();
        }
        output.push_str(&content[last..]);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_bound_variables() {
        let renderer = Renderer::new();
        let out = renderer
            .render(
                "hostname {{hostname}}\nntp server {{NTP_1}} prefer\n",
                &vars(&[("hostname", "HQ-RTR1"), ("NTP_1", "172.19.1.1")]),
            )
            .unwrap();
        assert_eq!(out, "hostname HQ-RTR1\nntp server 172.19.1.1 prefer\n");
    }

    #[test]
    fn tolerates_padding_inside_braces() {
        let renderer = Renderer::new();
        let out = renderer
            .render("snmp-server contact {{ snmp_contact }}", &vars(&[("snmp_contact", "HQ")]))
            .unwrap();
        assert_eq!(out, "snmp-server contact HQ");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let renderer = Renderer::new();
        let err = renderer.render("{{missing}}", &vars(&[])).unwrap_err();
        match err {
            TemplateError::UndefinedVariable(name) => assert_eq!(name, "missing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let renderer = Renderer::new();
        let content = "no service pad\nservice password-encryption\n";
        let out = renderer.render(content, &vars(&[])).unwrap();
        assert_eq!(out, content);
    }
}
