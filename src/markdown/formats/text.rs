//! Plain text formatter

use super::registry::{FormatError, Formatter};
use crate::markdown::ast::{Node, NodeKind};
use crate::markdown::rendering::{render, PlainTextRenderer};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        let paragraphs = nodes.iter().any(|node| node.kind() == NodeKind::Paragraph);
        let outputs = render(nodes, &PlainTextRenderer);
        Ok(PlainTextRenderer::join(&outputs, paragraphs))
    }

    fn description(&self) -> &'static str {
        "Readable text with markup removed"
    }
}
