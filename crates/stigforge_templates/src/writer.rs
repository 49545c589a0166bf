//! Output artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::TemplateResult;

/// Default file-name prefix for generated configurations.
pub const DEFAULT_PREFIX: &str = "STIG_Config_";

/// Writes rendered configurations into the output directory.
///
/// Artifacts are named `<prefix><hostname>`; an existing file of the
/// same name is overwritten.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
    prefix: String,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    /// The artifact path a hostname maps to.
    pub fn path_for(&self, hostname: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}", self.prefix, hostname))
    }

    /// Write one rendered configuration, creating the output directory
    /// if needed. Returns the artifact path.
    pub fn write(&self, hostname: &str, content: &str) -> TemplateResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(hostname);
        fs::write(&path, content)?;
        info!("Saved generated config to {:?}", path);
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
