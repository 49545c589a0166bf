//! CLI settings.
//!
//! Directory locations default to the conventional layout and can be
//! overridden by a `stigforge.yaml` settings file or per-run flags
//! (flags win).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::SharedArgs;

pub const DEFAULT_SETTINGS_FILE: &str = "stigforge.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the reference tables.
    pub reference_dir: PathBuf,
    /// Directory holding the platform templates.
    pub templates_dir: PathBuf,
    /// Directory generated configurations are written to.
    pub output_dir: PathBuf,
    /// File-name prefix for generated configurations.
    pub file_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_dir: PathBuf::from("reference"),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("generated_configs"),
            file_prefix: stigforge_templates::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, then apply flag overrides.
    ///
    /// An explicitly passed settings file must exist; the default
    /// `stigforge.yaml` is optional.
    pub fn resolve(shared: &SharedArgs) -> Result<Self> {
        let mut settings = match &shared.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_SETTINGS_FILE);
                if default.is_file() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(dir) = &shared.reference_dir {
            settings.reference_dir = dir.clone();
        }
        if let Some(dir) = &shared.templates_dir {
            settings.templates_dir = dir.clone();
        }
        if let Some(dir) = &shared.output_dir {
            settings.output_dir = dir.clone();
        }
        debug!("Settings: {settings:?}");
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {path:?}"))?;
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid settings file {path:?}"))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_conventional_layout() {
        let settings = Settings::default();
        assert_eq!(settings.reference_dir, PathBuf::from("reference"));
        assert_eq!(settings.file_prefix, "STIG_Config_");
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("stigforge.yaml");
        fs::write(&path, "reference_dir: /srv/refdata\nfile_prefix: Hardened_\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.reference_dir, PathBuf::from("/srv/refdata"));
        assert_eq!(settings.file_prefix, "Hardened_");
        // Unlisted keys keep their defaults.
        assert_eq!(settings.output_dir, PathBuf::from("generated_configs"));
    }
}
