//! Parsing of markdown source into nodes
//!
//!     Parsing runs in two nested passes over the logos token stream.
//!
//!     Pass 1, paragraph segmentation:
//!         The stream is split at blank lines (see [paragraphs]). With two or more
//!         content segments, each one is inline-parsed and wrapped in a `Paragraph`.
//!         With fewer, the whole stream goes to pass 2 as is and no `Paragraph` is
//!         produced.
//!
//!     Pass 2, inline span scanning:
//!         A cursor finds the leftmost complete span, emits the text before it, and
//!         recurses into the span's content with the full two-pass parse (see
//!         [inlines]).
//!
//!     Parsing is total: every string, the empty one included, parses, and malformed
//!     markup comes back as text.

pub mod inlines;
pub mod paragraphs;

use crate::markdown::ast::{Node, Nodes};
use crate::markdown::lexing::{tokenize, Spanned};

pub use inlines::parse_inlines;
pub use paragraphs::split_paragraphs;

/// Parse a markdown string into a forest of nodes.
pub fn parse(markdown: &str) -> Nodes {
    let tokens = tokenize(markdown);
    parse_tokens(markdown, &tokens)
}

/// Run both passes over a token slice of `source`.
pub(crate) fn parse_tokens(source: &str, tokens: &[Spanned]) -> Nodes {
    let segments = split_paragraphs(tokens);
    if segments.len() < 2 {
        return parse_inlines(source, tokens);
    }

    tracing::debug!(paragraphs = segments.len(), "split source into paragraphs");
    segments
        .into_iter()
        .map(|segment| Node::paragraph(parse_inlines(source, segment)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ast::{count_kind, NodeKind};

    #[test]
    fn empty_input_yields_no_nodes() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn plain_text_is_one_text_node() {
        assert_eq!(parse("Hello there"), vec![Node::text("Hello there")]);
    }

    #[test]
    fn link_with_nested_strong() {
        assert_eq!(
            parse("[*A* B](url)"),
            vec![Node::link(
                "url",
                vec![Node::strong(vec![Node::text("A")]), Node::text(" B")]
            )]
        );
    }

    #[test]
    fn strong_with_nested_link() {
        assert_eq!(
            parse("*a [b](u) c*"),
            vec![Node::strong(vec![
                Node::text("a "),
                Node::link("u", vec![Node::text("b")]),
                Node::text(" c"),
            ])]
        );
    }

    #[test]
    fn italic_with_nested_link_with_nested_strong() {
        assert_eq!(
            parse("_see [the *docs*](d)_"),
            vec![Node::emphasis(vec![
                Node::text("see "),
                Node::link(
                    "d",
                    vec![Node::text("the "), Node::strong(vec![Node::text("docs")])]
                ),
            ])]
        );
    }

    #[test]
    fn sibling_spans_stay_separate() {
        assert_eq!(
            parse("*a* b *c*"),
            vec![
                Node::strong(vec![Node::text("a")]),
                Node::text(" b "),
                Node::strong(vec![Node::text("c")]),
            ]
        );
    }

    #[test]
    fn multiple_links() {
        let nodes = parse(
            "Hello [google](https://google.com)! This is my [website](https://example.com).",
        );
        assert_eq!(count_kind(&nodes, NodeKind::Link), 2);
        assert_eq!(nodes[1].url(), Some("https://google.com"));
        assert_eq!(nodes[3].url(), Some("https://example.com"));
        assert_eq!(nodes[4], Node::text("."));
    }

    #[test]
    fn one_separator_gives_two_paragraphs() {
        assert_eq!(
            parse("First *bold*.\n\nSecond _it_."),
            vec![
                Node::paragraph(vec![
                    Node::text("First "),
                    Node::strong(vec![Node::text("bold")]),
                    Node::text("."),
                ]),
                Node::paragraph(vec![
                    Node::text("Second "),
                    Node::emphasis(vec![Node::text("it")]),
                    Node::text("."),
                ]),
            ]
        );
    }

    #[test]
    fn single_paragraph_is_not_wrapped() {
        assert_eq!(parse("line one\nline two"), vec![Node::text("line one\nline two")]);
        assert_eq!(parse("trailing\n\n"), vec![Node::text("trailing\n\n")]);
    }

    #[test]
    fn unclosed_delimiters_are_text() {
        assert_eq!(parse("prefix *text"), vec![Node::text("prefix *text")]);
        assert_eq!(parse("_"), vec![Node::text("_")]);
        assert_eq!(parse("[label](url"), vec![Node::text("[label](url")]);
    }
}
