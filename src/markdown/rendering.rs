//! Tree walker and render dispatch
//!
//!     A [`Renderer`] supplies one handler per node kind and picks its own output type.
//!     [`render`] walks the forest depth first: children are rendered before their
//!     parent, and the parent's handler receives the finished child outputs (plus the
//!     url, for links). Outputs come back in sibling order, one per top-level node.
//!
//!     Built-in renderers:
//!
//!         [`HtmlRenderer`]: the default handler table, producing HTML strings
//!         [`PlainTextRenderer`]: flattens the forest to its readable text
//!
//!     [`Handlers`] layers per-kind closures over any base renderer, so callers can
//!     override a subset of kinds and inherit the rest.
//!
//!     The walker holds no state between calls; rendering the same forest twice with
//!     the same renderer yields the same outputs.

pub mod handlers;
pub mod html;
pub mod plain;

use crate::markdown::ast::Node;
use crate::markdown::parsing::parse;

pub use handlers::Handlers;
pub use html::{escape_html, to_html, HtmlRenderer, LinkAttributes};
pub use plain::PlainTextRenderer;

/// One handler per node kind.
pub trait Renderer {
    type Output;

    fn text(&self, value: &str) -> Self::Output;

    fn strong(&self, children: Vec<Self::Output>) -> Self::Output;

    fn emphasis(&self, children: Vec<Self::Output>) -> Self::Output;

    fn link(&self, url: &str, children: Vec<Self::Output>) -> Self::Output;

    fn paragraph(&self, children: Vec<Self::Output>) -> Self::Output;
}

/// Render each node of the forest, in order.
pub fn render<R>(nodes: &[Node], renderer: &R) -> Vec<R::Output>
where
    R: Renderer + ?Sized,
{
    nodes.iter().map(|node| render_node(node, renderer)).collect()
}

/// Render a single node and its subtree.
pub fn render_node<R>(node: &Node, renderer: &R) -> R::Output
where
    R: Renderer + ?Sized,
{
    match node {
        Node::Text { value } => renderer.text(value),
        Node::Strong { children } => renderer.strong(render(children, renderer)),
        Node::Emphasis { children } => renderer.emphasis(render(children, renderer)),
        Node::Link { url, children } => renderer.link(url, render(children, renderer)),
        Node::Paragraph { children } => renderer.paragraph(render(children, renderer)),
    }
}

/// Parse `markdown` once and render the result. Empty input renders nothing.
pub fn render_markdown<R>(markdown: &str, renderer: &R) -> Vec<R::Output>
where
    R: Renderer + ?Sized,
{
    if markdown.is_empty() {
        return Vec::new();
    }
    render(&parse(markdown), renderer)
}
