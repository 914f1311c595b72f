//! HTML formatter

use super::registry::{FormatError, Formatter};
use crate::markdown::ast::Node;
use crate::markdown::rendering::{render, HtmlRenderer, LinkAttributes};

/// Renders the forest with the default HTML handlers.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    renderer: HtmlRenderer,
}

impl HtmlFormatter {
    pub fn new(link_attributes: LinkAttributes) -> Self {
        Self {
            renderer: HtmlRenderer::with_link_attributes(link_attributes),
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(render(nodes, &self.renderer).concat())
    }

    fn description(&self) -> &'static str {
        "HTML fragment (b, i, a, p)"
    }
}
