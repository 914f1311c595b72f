//! Fluent assertion API for parsed nodes
//!
//!     Tests should assert on the whole shape of a parse, not just on counts. The
//!     assertions here walk the forest by index and report the path of the failing
//!     node, so a mismatch deep inside a link reads `nodes[1].children[0]` instead
//!     of a bare "assertion failed".
//!
//!     ```rust,ignore
//!     use inline_markdown::markdown::testing::assert_nodes;
//!
//!     let nodes = parse("[*A* B](url)");
//!     assert_nodes(&nodes).count(1).node(0, |link| {
//!         link.is_link("url")
//!             .child_count(2)
//!             .child(0, |strong| {
//!                 strong.is_strong().text_content("A");
//!             })
//!             .child(1, |text| {
//!                 text.is_text(" B");
//!             });
//!     });
//!     ```

use crate::markdown::ast::{Node, NodeKind};

/// Create an assertion builder for a forest
pub fn assert_nodes(nodes: &[Node]) -> NodesAssertion<'_> {
    NodesAssertion {
        nodes,
        context: "nodes".to_string(),
    }
}

pub struct NodesAssertion<'a> {
    nodes: &'a [Node],
    context: String,
}

impl<'a> NodesAssertion<'a> {
    /// Assert the number of nodes at this level
    pub fn count(self, expected: usize) -> Self {
        let actual = self.nodes.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} nodes, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.nodes)
        );
        self
    }

    /// Assert on a specific node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.nodes.len(),
            "{}: index {} out of bounds ({} nodes: [{}])",
            self.context,
            index,
            self.nodes.len(),
            summarize(self.nodes)
        );
        assertion(NodeAssertion {
            node: &self.nodes[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the kinds of all nodes at this level, in order
    pub fn kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<NodeKind> = self.nodes.iter().map(Node::kind).collect();
        assert_eq!(actual, expected, "{}: kinds differ", self.context);
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: expected {}, found {}",
            self.context,
            expected,
            summarize(std::slice::from_ref(self.node))
        );
        self
    }

    /// Assert a text node with exactly this value
    pub fn is_text(self, expected: &str) -> Self {
        let this = self.kind(NodeKind::Text);
        assert_eq!(
            this.node.as_text(),
            Some(expected),
            "{}: text differs",
            this.context
        );
        this
    }

    pub fn is_strong(self) -> Self {
        self.kind(NodeKind::Strong)
    }

    pub fn is_emphasis(self) -> Self {
        self.kind(NodeKind::Emphasis)
    }

    pub fn is_paragraph(self) -> Self {
        self.kind(NodeKind::Paragraph)
    }

    /// Assert a link node with exactly this url
    pub fn is_link(self, url: &str) -> Self {
        let this = self.kind(NodeKind::Link);
        assert_eq!(this.node.url(), Some(url), "{}: url differs", this.context);
        this
    }

    /// Assert the flattened text of this node
    pub fn text_content(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text_content(),
            expected,
            "{}: text content differs",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert on a child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Switch to assertions over all children
    pub fn children(self) -> NodesAssertion<'a> {
        NodesAssertion {
            nodes: self.node.children(),
            context: format!("{}.children", self.context),
        }
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            Node::Text { value } => format!("Text({value:?})"),
            Node::Link { url, .. } => format!("Link({url})"),
            other => other.kind().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_nested_nodes() {
        let nodes = vec![Node::link(
            "url",
            vec![Node::strong(vec![Node::text("A")]), Node::text(" B")],
        )];
        assert_nodes(&nodes).count(1).node(0, |link| {
            link.is_link("url")
                .child_count(2)
                .child(0, |strong| {
                    strong.is_strong().text_content("A");
                })
                .child(1, |text| {
                    text.is_text(" B");
                });
        });
    }

    #[test]
    #[should_panic(expected = "nodes[0]: expected Strong, found Text(\"x\")")]
    fn reports_path_on_mismatch() {
        let nodes = vec![Node::text("x")];
        assert_nodes(&nodes).node(0, |node| {
            node.is_strong();
        });
    }

    #[test]
    fn kinds_checks_order() {
        let nodes = vec![Node::text("a"), Node::emphasis(vec![])];
        assert_nodes(&nodes).kinds(&[NodeKind::Text, NodeKind::Emphasis]);
    }
}
