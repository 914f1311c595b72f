//! Named output formats
//!
//! A [`FormatRegistry`] maps a format name to the [`Formatter`] that writes a parsed
//! forest in that format. The built-in set covers rendered output (`html`, `text`),
//! data (`json`, `yaml`) and a tree view (`treeviz`).
//!
//! Link attributes are the one rendering option a format carries. The registry takes
//! them at construction, either directly or from a loaded [`MarkdownConfig`], and hands
//! them to the `html` formatter.

use std::collections::BTreeMap;
use std::fmt;

use super::{HtmlFormatter, JsonFormatter, TextFormatter, TreevizFormatter, YamlFormatter};
use crate::markdown::ast::Node;
use crate::markdown::config::MarkdownConfig;
use crate::markdown::parsing::parse;
use crate::markdown::rendering::LinkAttributes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No formatter is registered under `name`.
    UnknownFormat {
        name: String,
        available: Vec<&'static str>,
    },
    /// The formatter could not write the forest.
    Serialization {
        format: &'static str,
        message: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "unknown format '{name}' (available: {})",
                available.join(", ")
            ),
            FormatError::Serialization { format, message } => {
                write!(f, "could not write {format}: {message}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Writes a parsed forest as a string.
pub trait Formatter: Send + Sync {
    /// Name the format is selected by, e.g. `"html"`.
    fn name(&self) -> &'static str;

    /// One-line summary shown by `list-formats`.
    fn description(&self) -> &'static str;

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError>;
}

/// Formatters by name, iterated in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all.
    pub fn empty() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// The built-in formats, with `html` links carrying `link_attributes`.
    pub fn with_link_attributes(link_attributes: LinkAttributes) -> Self {
        let mut registry = Self::empty();
        registry.register(HtmlFormatter::new(link_attributes));
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry.register(TreevizFormatter);
        registry.register(TextFormatter);
        registry
    }

    /// The built-in formats, with link attributes taken from `config`.
    pub fn from_config(config: &MarkdownConfig) -> Self {
        Self::with_link_attributes(config.links.attributes())
    }

    /// Adds `formatter`, returning the one it replaces under the same name.
    pub fn register<F: Formatter + 'static>(
        &mut self,
        formatter: F,
    ) -> Option<Box<dyn Formatter>> {
        self.formatters.insert(formatter.name(), Box::new(formatter))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|formatter| formatter.as_ref())
    }

    /// Registered formatters in name order.
    pub fn formats(&self) -> impl Iterator<Item = &dyn Formatter> + '_ {
        self.formatters.values().map(|formatter| formatter.as_ref())
    }

    /// Writes an already parsed forest in `format`.
    pub fn serialize(&self, nodes: &[Node], format: &str) -> Result<String, FormatError> {
        let formatter = self.lookup(format)?;
        tracing::debug!(format, nodes = nodes.len(), "serializing nodes");
        formatter.serialize(nodes)
    }

    /// Parses `markdown` and writes the result in `format`.
    ///
    /// An unknown format is reported before any parsing happens.
    pub fn render(&self, markdown: &str, format: &str) -> Result<String, FormatError> {
        let formatter = self.lookup(format)?;
        let nodes = parse(markdown);
        tracing::debug!(format, nodes = nodes.len(), bytes = markdown.len(), "rendering");
        formatter.serialize(&nodes)
    }

    fn lookup(&self, format: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(format).ok_or_else(|| FormatError::UnknownFormat {
            name: format.to_string(),
            available: self.formatters.keys().copied().collect(),
        })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_link_attributes(LinkAttributes::default())
    }
}
