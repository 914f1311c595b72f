//! Property-based tests for the parser and tree walker
//!
//! These tests ensure parsing is total, that well-formed spans are all recognized,
//! and that rendering is a pure function of the AST.

use inline_markdown::markdown::ast::{count_kind, text_content, NodeKind};
use inline_markdown::markdown::formats::{Formatter, JsonFormatter};
use inline_markdown::{parse, render, HtmlRenderer, Node, Nodes};
use proptest::prelude::*;

/// Text with no markup characters and no line breaks
fn plain_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?:;'/-]{0,40}"
}

/// Span content: words separated by single spaces
fn words_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,2}"
}

/// Arbitrary input biased towards markup characters
fn noisy_strategy() -> impl Strategy<Value = String> {
    "[*_\\[\\]() ab\n\t]{0,60}"
}

/// One inline segment as (source, readable text)
fn segment_strategy() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        words_strategy().prop_map(|w| (w.clone(), w)),
        words_strategy().prop_map(|w| (format!("*{w}*"), w)),
        words_strategy().prop_map(|w| (format!("_{w}_"), w)),
        (words_strategy(), "[a-z]{1,8}")
            .prop_map(|(w, url)| (format!("[{w}](https://{url}.test)"), w)),
    ]
}

fn document_strategy() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|segments| {
        let source = segments.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>().join(" ");
        let text = segments.iter().map(|(_, t)| t.as_str()).collect::<Vec<_>>().join(" ");
        (source, text)
    })
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_plain_text_is_single_text_node(source in plain_strategy()) {
            let nodes = parse(&source);
            if source.is_empty() {
                prop_assert!(nodes.is_empty());
            } else {
                prop_assert_eq!(nodes, vec![Node::text(source.clone())]);
            }
        }

        #[test]
        fn test_every_bold_pair_is_recognized(
            spans in prop::collection::vec(words_strategy(), 1..6),
        ) {
            let source = spans
                .iter()
                .map(|w| format!("*{w}*"))
                .collect::<Vec<_>>()
                .join(" and ");
            prop_assert_eq!(count_kind(&parse(&source), NodeKind::Strong), spans.len());
        }

        #[test]
        fn test_readable_text_survives((source, text) in document_strategy()) {
            prop_assert_eq!(text_content(&parse(&source)), text);
        }

        #[test]
        fn test_paragraph_count_with_indentation(
            paragraphs in prop::collection::vec(words_strategy(), 2..5),
            indents in prop::collection::vec("[ \t]{0,3}", 4),
            trailing in "[ \t]{0,3}",
        ) {
            let mut source = paragraphs[0].clone();
            for (paragraph, indent) in paragraphs[1..].iter().zip(&indents) {
                source.push_str(&trailing);
                source.push_str("\n\n");
                source.push_str(indent);
                source.push_str(paragraph);
            }
            let nodes = parse(&source);
            prop_assert_eq!(nodes.len(), paragraphs.len());
            prop_assert!(nodes.iter().all(|n| n.kind() == NodeKind::Paragraph));
            let texts: Vec<String> = nodes
                .iter()
                .map(|n| n.text_content().trim().to_string())
                .collect();
            prop_assert_eq!(texts, paragraphs);
        }

        #[test]
        fn test_paragraph_count(paragraphs in prop::collection::vec(words_strategy(), 2..5)) {
            let source = paragraphs.join("\n\n");
            let nodes = parse(&source);
            prop_assert_eq!(nodes.len(), paragraphs.len());
            prop_assert!(nodes.iter().all(|n| n.kind() == NodeKind::Paragraph));
        }

        #[test]
        fn test_parse_is_total(source in noisy_strategy()) {
            let nodes = parse(&source);
            // Markup is only ever removed, never invented.
            prop_assert!(text_content(&nodes).len() <= source.len());
            prop_assert_eq!(parse(&source), nodes);
        }

        #[test]
        fn test_no_empty_text_nodes(source in noisy_strategy()) {
            fn check(nodes: &[Node]) -> bool {
                nodes.iter().all(|n| match n {
                    Node::Text { value } => !value.is_empty(),
                    other => check(other.children()),
                })
            }
            prop_assert!(check(&parse(&source)));
        }

        #[test]
        fn test_rendering_is_idempotent(source in noisy_strategy()) {
            let nodes = parse(&source);
            let renderer = HtmlRenderer::new();
            prop_assert_eq!(render(&nodes, &renderer), render(&nodes, &renderer));
        }

        #[test]
        fn test_json_round_trip(source in noisy_strategy()) {
            let nodes = parse(&source);
            let json = JsonFormatter.serialize(&nodes).unwrap();
            let back: Nodes = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, nodes);
        }
    }
}
