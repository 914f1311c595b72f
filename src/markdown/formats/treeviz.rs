//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, one line per node, which makes it
//! quick to scan how a piece of markdown was understood.
//!
//! It encodes the node structure as indentation, with 2 white spaces per level of nesting.
//!
//! So the format is :
//! <indentation>(per level) <icon><space><label> (truncated to 30 characters)
//!
//! Example, for `Hi *there*, see [the _docs_](https://x.y)`:
//!
//! ◦ Hi
//! 𝐁 there
//!   ◦ there
//! ◦ , see
//! ⊕ https://x.y
//!   ◦ the
//!   𝐼 docs
//!     ◦ docs
//!
//! Icons
//!     Paragraph: ¶
//!     Text: ◦
//!     Strong: 𝐁
//!     Emphasis: 𝐼
//!     Link: ⊕
//!
//! Links are labelled with their url, every other container with its text content.

use super::registry::{FormatError, Formatter};
use crate::markdown::ast::{Node, NodeKind};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node kind
fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Paragraph => "¶",
        NodeKind::Text => "◦",
        NodeKind::Strong => "𝐁",
        NodeKind::Emphasis => "𝐼",
        NodeKind::Link => "⊕",
    }
}

fn label(node: &Node) -> String {
    let raw = match node {
        Node::Text { value } => value.clone(),
        Node::Link { url, .. } => url.clone(),
        _ => node.text_content(),
    };
    truncate(raw.replace('\n', "↵").trim(), MAX_LABEL_CHARS)
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(get_icon(node.kind()));
    out.push(' ');
    out.push_str(&label(node));
    out.push('\n');
    for child in node.children() {
        write_node(child, depth + 1, out);
    }
}

/// Render the forest as a treeviz string.
pub fn to_treeviz_str(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, 0, &mut out);
    }
    out
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes))
    }

    fn description(&self) -> &'static str {
        "One line per node, indented by depth"
    }
}
