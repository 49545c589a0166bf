//! # stigforge_templates
//!
//! Platform template handling for stigforge: a flat-file template
//! registry, a `{{variable}}` renderer, the render-context contract
//! between resolution and the templates, and output-artifact writing.

pub mod context;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod writer;

pub use context::RenderValues;
pub use error::{TemplateError, TemplateResult};
pub use registry::TemplateSet;
pub use renderer::Renderer;
pub use writer::{OutputWriter, DEFAULT_PREFIX};
