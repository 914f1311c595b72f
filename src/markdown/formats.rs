//! Output format implementations
//!
//! This module contains the named serializers for a parsed forest:
//! - Rendered output (html, text) driven by the tree walker
//! - Data formats (json, yaml) driven by serde
//! - Debug views (treeviz)

pub mod html;
pub mod registry;
pub mod serde_formats;
pub mod text;
pub mod treeviz;

pub use html::HtmlFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
