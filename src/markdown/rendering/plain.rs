//! Plain text rendering: markup dropped, readable text kept.

use super::Renderer;

/// Flattens nodes to their text. Paragraphs are separated by a blank line when the
/// outputs are joined with [`PlainTextRenderer::join`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub const PARAGRAPH_SEPARATOR: &'static str = "\n\n";

    /// Join top-level outputs, separating paragraphs.
    pub fn join(outputs: &[String], paragraphs: bool) -> String {
        if paragraphs {
            outputs.join(Self::PARAGRAPH_SEPARATOR)
        } else {
            outputs.concat()
        }
    }
}

impl Renderer for PlainTextRenderer {
    type Output = String;

    fn text(&self, value: &str) -> String {
        value.to_string()
    }

    fn strong(&self, children: Vec<String>) -> String {
        children.concat()
    }

    fn emphasis(&self, children: Vec<String>) -> String {
        children.concat()
    }

    fn link(&self, _url: &str, children: Vec<String>) -> String {
        children.concat()
    }

    fn paragraph(&self, children: Vec<String>) -> String {
        children.concat()
    }
}
