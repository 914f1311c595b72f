//! AST nodes produced by the parser
//!
//!     A parse yields a forest: an ordered sequence of top-level [`Node`]s. Container
//!     nodes own their children outright, there are no back references, and nothing
//!     is shared between two parses. The forest is built once, handed to a renderer,
//!     and can be dropped afterwards.
//!
//!     Node kinds:
//!
//!         Text: literal run of characters (leaf)
//!         Strong: `*bold*`
//!         Emphasis: `_italic_`
//!         Link: `[label](url)`, the url is kept verbatim
//!         Paragraph: one blank-line separated block
//!
//!     Every container's children are a full parse result of the container's raw
//!     content, so any kind can nest inside any other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence of nodes, in source order.
pub type Nodes = Vec<Node>;

/// A single AST node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Literal, unformatted text.
    Text { value: String },
    /// Bold span delimited by `*`.
    Strong { children: Nodes },
    /// Italic span delimited by `_`.
    Emphasis { children: Nodes },
    /// Hyperlink written as `[label](url)`.
    Link { url: String, children: Nodes },
    /// A blank-line separated block.
    Paragraph { children: Nodes },
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Strong,
    Emphasis,
    Link,
    Paragraph,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Text,
        NodeKind::Strong,
        NodeKind::Emphasis,
        NodeKind::Link,
        NodeKind::Paragraph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Text => "Text",
            NodeKind::Strong => "Strong",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Link => "Link",
            NodeKind::Paragraph => "Paragraph",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn strong(children: Nodes) -> Self {
        Node::Strong { children }
    }

    pub fn emphasis(children: Nodes) -> Self {
        Node::Emphasis { children }
    }

    pub fn link(url: impl Into<String>, children: Nodes) -> Self {
        Node::Link {
            url: url.into(),
            children,
        }
    }

    pub fn paragraph(children: Nodes) -> Self {
        Node::Paragraph { children }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text { .. } => NodeKind::Text,
            Node::Strong { .. } => NodeKind::Strong,
            Node::Emphasis { .. } => NodeKind::Emphasis,
            Node::Link { .. } => NodeKind::Link,
            Node::Paragraph { .. } => NodeKind::Paragraph,
        }
    }

    /// Returns the children of container nodes; text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } => &[],
            Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Link { children, .. }
            | Node::Paragraph { children } => children,
        }
    }

    /// Returns the literal value when this node is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the raw url when this node is a link.
    pub fn url(&self) -> Option<&str> {
        match self {
            Node::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Human readable text of this node with all markup dropped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { value } => out.push_str(value),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Concatenated text content of a whole forest.
pub fn text_content(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.collect_text(&mut out);
    }
    out
}

/// Counts nodes of `kind` anywhere in the forest, nested ones included.
pub fn count_kind(nodes: &[Node], kind: NodeKind) -> usize {
    nodes
        .iter()
        .map(|node| usize::from(node.kind() == kind) + count_kind(node.children(), kind))
        .sum()
}
