//! Error types for template handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(PathBuf),

    #[error("Template references an undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
