//! Platform template registry.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use stigforge_resolver::TemplateId;
use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};

const ALL_TEMPLATES: [TemplateId; 3] = [TemplateId::Ios, TemplateId::Nexus, TemplateId::Asa];

/// The set of platform templates found in a templates directory.
///
/// Templates are plain text files with `{{variable}}` placeholders,
/// one per platform family group. A template file may legitimately be
/// absent (the ASA template ships as a stub); requesting an absent
/// template is the error, not loading past it.
pub struct TemplateSet {
    dir: PathBuf,
    templates: HashMap<TemplateId, String>,
}

impl TemplateSet {
    /// Load whichever platform templates exist under `dir`.
    pub fn load(dir: impl Into<PathBuf>) -> TemplateResult<Self> {
        let dir = dir.into();
        let mut templates = HashMap::new();

        for id in ALL_TEMPLATES {
            let path = dir.join(id.file_name());
            if path.is_file() {
                let content = fs::read_to_string(&path)?;
                debug!("Loaded template {:?} ({} bytes)", path, content.len());
                templates.insert(id, content);
            }
        }
        info!("Loaded {} platform templates from {:?}", templates.len(), dir);
        Ok(Self { dir, templates })
    }

    /// The template text for `id`.
    pub fn get(&self, id: TemplateId) -> TemplateResult<&str> {
        self.templates
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| TemplateError::NotFound(self.dir.join(id.file_name())))
    }

    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    fn path_of(&self, id: TemplateId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Check the directory for the templates the generator can select.
    ///
    /// Returns the paths of missing non-gated templates, for a
    /// preflight diagnostic.
    pub fn missing_required(&self) -> Vec<PathBuf> {
        [TemplateId::Ios, TemplateId::Nexus]
            .into_iter()
            .filter(|id| !self.contains(*id))
            .map(|id| self.path_of(id))
            .collect()
    }
}

impl std::fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateSet")
            .field("dir", &self.dir)
            .field("loaded", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_present_templates_only() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("platform_IOS.tmpl"), "hostname {{hostname}}\n").unwrap();

        let set = TemplateSet::load(temp.path()).unwrap();
        assert!(set.contains(TemplateId::Ios));
        assert!(!set.contains(TemplateId::Nexus));
        assert_eq!(set.get(TemplateId::Ios).unwrap(), "hostname {{hostname}}\n");
    }

    #[test]
    fn absent_template_errors_with_path() {
        let temp = tempdir().unwrap();
        let set = TemplateSet::load(temp.path()).unwrap();

        let err = set.get(TemplateId::Nexus).unwrap_err();
        match err {
            TemplateError::NotFound(path) => {
                assert!(path.ends_with("platform_NEXUS.tmpl"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_missing_required_templates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("platform_NEXUS.tmpl"), "x").unwrap();

        let set = TemplateSet::load(temp.path()).unwrap();
        let missing = set.missing_required();
        assert_eq!(missing.len(), 1);
        assert!(missing[0].ends_with("platform_IOS.tmpl"));
    }
}
