//! Platform template selection.

use thiserror::Error;

use crate::model::PlatformFamily;

/// Identifier of a platform configuration template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Ios,
    Nexus,
    Asa,
}

impl TemplateId {
    /// File name of the template under the templates directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::Ios => "platform_IOS.tmpl",
            TemplateId::Nexus => "platform_NEXUS.tmpl",
            TemplateId::Asa => "platform_ASA.tmpl",
        }
    }
}

/// Errors from template selection.
#[derive(Error, Debug)]
pub enum SelectError {
    /// The platform is recognized but its template is deliberately
    /// gated off until it is production-ready. Distinct from a true
    /// error: the input was valid.
    #[error("Config generation for {0} platforms is not yet supported")]
    NotYetSupported(PlatformFamily),
}

/// Map a platform family to its template.
///
/// ASA platforms are recognized but rejected until the ASA template is
/// complete.
pub fn select_template(platform: PlatformFamily) -> Result<TemplateId, SelectError> {
    match platform {
        PlatformFamily::Router | PlatformFamily::SwitchNonNexus => Ok(TemplateId::Ios),
        PlatformFamily::SwitchNexus => Ok(TemplateId::Nexus),
        PlatformFamily::AsaTraditional
        | PlatformFamily::AsaFirepower21xx
        | PlatformFamily::AsaFirepower41xx => Err(SelectError::NotYetSupported(platform)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ios_template_for_routers_and_switches() {
        assert_eq!(select_template(PlatformFamily::Router).unwrap(), TemplateId::Ios);
        assert_eq!(select_template(PlatformFamily::SwitchNonNexus).unwrap(), TemplateId::Ios);
    }

    #[test]
    fn nexus_template_for_nexus_switches() {
        assert_eq!(select_template(PlatformFamily::SwitchNexus).unwrap(), TemplateId::Nexus);
    }

    #[test]
    fn asa_platforms_are_gated() {
        for platform in [
            PlatformFamily::AsaTraditional,
            PlatformFamily::AsaFirepower21xx,
            PlatformFamily::AsaFirepower41xx,
        ] {
            assert!(matches!(
                select_template(platform),
                Err(SelectError::NotYetSupported(_))
            ));
        }
    }
}
