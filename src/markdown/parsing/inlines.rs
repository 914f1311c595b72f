//! Inline span scanning
//!
//!     A cursor walks the token stream once. At each position it asks whether a complete
//!     span starts there; the first position that answers yes wins (leftmost-first), and
//!     its closer is the nearest valid one (lazy). Positions that don't open a span are
//!     literal text and the cursor moves on by one token.
//!
//!     Span shapes:
//!
//!         Strong:     `*` content `*`
//!         Emphasis:   `_` content `_`
//!         Link:       `[` label `](` url `)`
//!
//!     Content, label and url each hold at least one character and never cross a line
//!     break. Content and label are parsed again from scratch to produce children, so
//!     spans nest freely. A url is kept as the raw source slice.
//!
//!     There is no error path. An opener without a closer is a literal character, which
//!     is how malformed markup degrades to text.

use std::ops::Range;

use super::parse_tokens;
use crate::markdown::ast::{Node, Nodes};
use crate::markdown::lexing::{Spanned, Token};

/// Parse inline nodes from a token stream over `source`.
pub fn parse_inlines(source: &str, tokens: &[Spanned]) -> Nodes {
    let mut scanner = Scanner::new(tokens);
    let mut builder = InlineBuilder::new(source);

    let mut cursor = 0;
    while cursor < tokens.len() {
        match scanner.match_at(cursor) {
            Some(matched) => {
                cursor = matched.end;
                builder.push_node(matched.into_node(source, tokens));
            }
            None => {
                builder.push_literal(&tokens[cursor].1);
                cursor += 1;
            }
        }
    }

    builder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Strong,
    Emphasis,
    Link,
}

/// A complete span found at some cursor position. All fields are token indices.
#[derive(Debug)]
struct SpanMatch {
    kind: SpanKind,
    content: Range<usize>,
    url: Range<usize>,
    end: usize,
}

impl SpanMatch {
    fn into_node(self, source: &str, tokens: &[Spanned]) -> Node {
        let children = parse_tokens(source, &tokens[self.content]);
        match self.kind {
            SpanKind::Strong => Node::strong(children),
            SpanKind::Emphasis => Node::emphasis(children),
            SpanKind::Link => {
                let start = tokens[self.url.start].1.start;
                let end = tokens[self.url.end - 1].1.end;
                Node::link(&source[start..end], children)
            }
        }
    }
}

struct Scanner<'t> {
    tokens: &'t [Spanned],
    lookahead: Lookahead,
}

impl<'t> Scanner<'t> {
    fn new(tokens: &'t [Spanned]) -> Self {
        Self {
            tokens,
            lookahead: Lookahead::default(),
        }
    }

    /// Tries bold, then italic, then link at `index`.
    fn match_at(&mut self, index: usize) -> Option<SpanMatch> {
        match self.tokens[index].0 {
            Token::Star => self.delimited(index, SpanKind::Strong, Token::Star),
            Token::Underscore => self.delimited(index, SpanKind::Emphasis, Token::Underscore),
            Token::OpenBracket => self.link(index),
            _ => None,
        }
    }

    fn delimited(&mut self, open: usize, kind: SpanKind, delimiter: Token) -> Option<SpanMatch> {
        let close = self.find_closer(open + 1, delimiter)?;
        Some(SpanMatch {
            kind,
            content: open + 1..close,
            url: 0..0,
            end: close + 1,
        })
    }

    fn link(&mut self, open: usize) -> Option<SpanMatch> {
        let label_end = self.find_closer(open + 1, Token::LabelEnd)?;
        let close = self.find_closer(label_end + 1, Token::CloseParen)?;
        Some(SpanMatch {
            kind: SpanKind::Link,
            content: open + 1..label_end,
            url: label_end + 1..close,
            end: close + 1,
        })
    }

    /// Finds the nearest `wanted` token after `content_start`, leaving at least one
    /// content token, without crossing a line break.
    fn find_closer(&mut self, content_start: usize, wanted: Token) -> Option<usize> {
        match self.tokens.get(content_start) {
            Some((token, _)) if !token.is_line_break() => {
                self.next_on_line(content_start + 1, wanted)
            }
            _ => None,
        }
    }

    /// First `wanted` token at or after `from` that comes before the end of the line.
    fn next_on_line(&mut self, from: usize, wanted: Token) -> Option<usize> {
        if let Some(outcome) = self.lookahead.answer(wanted, from) {
            return outcome;
        }

        let mut index = from;
        let found = loop {
            match self.tokens.get(index) {
                Some((token, _)) if *token == wanted => break true,
                Some((token, _)) if !token.is_line_break() => index += 1,
                _ => break false,
            }
        };

        let search = Search {
            from,
            stop: index,
            found,
        };
        self.lookahead.record(wanted, search);
        found.then_some(index)
    }
}

/// One closer search: no `wanted` token and no line break in `from..stop`, and at
/// `stop` either the `wanted` token (`found`) or the end of the line.
#[derive(Debug, Clone, Copy)]
struct Search {
    from: usize,
    stop: usize,
    found: bool,
}

impl Search {
    /// Any later search starting inside `from..=stop` ends at the same place.
    fn answer(&self, from: usize) -> Option<Option<usize>> {
        (self.from <= from && from <= self.stop).then(|| self.found.then_some(self.stop))
    }
}

/// Remembers the last closer search per closer kind.
///
/// Openers on one line ask for the same closer again and again: a row of `[` all
/// look for the same `](`, a row of `*` with no partner all run to the line end.
/// Reusing the last search answers each of them without a rescan, which keeps the
/// scanner linear in the length of the line.
#[derive(Debug, Default)]
struct Lookahead {
    star: Option<Search>,
    underscore: Option<Search>,
    label_end: Option<Search>,
    close_paren: Option<Search>,
}

impl Lookahead {
    fn slot(&mut self, token: Token) -> Option<&mut Option<Search>> {
        match token {
            Token::Star => Some(&mut self.star),
            Token::Underscore => Some(&mut self.underscore),
            Token::LabelEnd => Some(&mut self.label_end),
            Token::CloseParen => Some(&mut self.close_paren),
            _ => None,
        }
    }

    fn answer(&mut self, token: Token, from: usize) -> Option<Option<usize>> {
        match self.slot(token) {
            Some(Some(search)) => search.answer(from),
            _ => None,
        }
    }

    fn record(&mut self, token: Token, search: Search) {
        if let Some(slot) = self.slot(token) {
            *slot = Some(search);
        }
    }
}

/// Collects output nodes, merging adjacent literal tokens into one text node.
struct InlineBuilder<'s> {
    source: &'s str,
    pending: Option<Range<usize>>,
    children: Nodes,
}

impl<'s> InlineBuilder<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            pending: None,
            children: Vec::new(),
        }
    }

    fn push_literal(&mut self, span: &Range<usize>) {
        if let Some(pending) = self.pending.as_mut() {
            if pending.end == span.start {
                pending.end = span.end;
                return;
            }
        }
        self.flush();
        self.pending = Some(span.clone());
    }

    fn push_node(&mut self, node: Node) {
        self.flush();
        self.children.push(node);
    }

    fn flush(&mut self) {
        if let Some(range) = self.pending.take() {
            if !range.is_empty() {
                self.children.push(Node::text(&self.source[range]));
            }
        }
    }

    fn finish(mut self) -> Nodes {
        self.flush();
        self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::lexing::tokenize;

    fn inlines(source: &str) -> Nodes {
        parse_inlines(source, &tokenize(source))
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(inlines("hello world"), vec![Node::text("hello world")]);
    }

    #[test]
    fn merges_literal_runs() {
        assert_eq!(inlines("a ] b ( c ) d"), vec![Node::text("a ] b ( c ) d")]);
    }

    #[test]
    fn nearest_closer_wins() {
        assert_eq!(
            inlines("*a * b*"),
            vec![Node::strong(vec![Node::text("a ")]), Node::text(" b*")]
        );
    }

    #[test]
    fn empty_content_is_not_a_span() {
        assert_eq!(inlines("** __"), vec![Node::text("** __")]);
        assert_eq!(inlines("**a*"), vec![Node::strong(vec![Node::text("*a")])]);
    }

    #[test]
    fn spans_stop_at_line_breaks() {
        assert_eq!(inlines("*a\nb*"), vec![Node::text("*a\nb*")]);
        assert_eq!(inlines("[a\n](b)"), vec![Node::text("[a\n](b)")]);
        assert_eq!(inlines("[a](b\n)"), vec![Node::text("[a](b\n)")]);
    }

    #[test]
    fn spans_stop_at_indented_continuation_lines() {
        assert_eq!(inlines("*a\n b*"), vec![Node::text("*a\n b*")]);
        assert_eq!(inlines("_a  \nb_"), vec![Node::text("_a  \nb_")]);
        assert_eq!(inlines("*a\r\n b*"), vec![Node::text("*a\r\n b*")]);
    }

    #[test]
    fn unmatched_opener_resumes_scanning() {
        assert_eq!(
            inlines("*a _b_"),
            vec![Node::text("*a "), Node::emphasis(vec![Node::text("b")])]
        );
    }

    #[test]
    fn link_needs_adjacent_url() {
        assert_eq!(inlines("[a] (b)"), vec![Node::text("[a] (b)")]);
        assert_eq!(inlines("[](b)"), vec![Node::text("[](b)")]);
        assert_eq!(inlines("[a]()"), vec![Node::text("[a]()")]);
    }

    #[test]
    fn link_label_ends_at_first_label_end() {
        assert_eq!(
            inlines("[a] x [b](c)"),
            vec![Node::link("c", vec![Node::text("a] x [b")])]
        );
    }

    #[test]
    fn url_is_raw_slice() {
        assert_eq!(
            inlines("[x](http://a.b/*c*_d_)"),
            vec![Node::link("http://a.b/*c*_d_", vec![Node::text("x")])]
        );
    }

    #[test]
    fn misses_do_not_hide_later_lines() {
        assert_eq!(
            inlines("*a\n*b*"),
            vec![Node::text("*a\n"), Node::strong(vec![Node::text("b")])]
        );
    }

    #[test]
    fn openers_share_one_closer_search() {
        let source = format!("{}a](", "[".repeat(20_000));
        assert_eq!(inlines(&source), vec![Node::text(&source)]);

        let tokens = tokenize(&source);
        let mut scanner = Scanner::new(&tokens);
        assert!(scanner.match_at(0).is_none());
        let first = scanner.lookahead.label_end.expect("label end search recorded");
        assert!(first.found);
        for open in 1..20_000 {
            assert!(scanner.match_at(open).is_none());
        }
        let last = scanner.lookahead.label_end.expect("label end search recorded");
        assert_eq!(last.from, first.from);
        assert_eq!(last.stop, first.stop);
    }

    #[test]
    fn closer_search_is_reused_for_later_openers() {
        assert_eq!(
            inlines("_a_ _b_"),
            vec![
                Node::emphasis(vec![Node::text("a")]),
                Node::text(" "),
                Node::emphasis(vec![Node::text("b")]),
            ]
        );
        assert_eq!(
            inlines("[[a](b)"),
            vec![Node::link("b", vec![Node::text("[a")])]
        );
        assert_eq!(
            inlines("**a**"),
            vec![Node::strong(vec![Node::text("*a")]), Node::text("*")]
        );
    }
}
