//! Paragraph segmentation
//!
//!     A paragraph separator is a run of blank tokens (whitespace and newlines) that
//!     holds at least two newlines. The run starts at the whitespace trailing the last
//!     content line and stops at its final newline, so the indentation of the next line
//!     stays with the next segment. Separators are dropped, and so are segments holding
//!     nothing but whitespace, which is what leading or trailing blank lines leave behind.

use crate::markdown::lexing::{Spanned, Token};

/// Returns the paragraph content segments of `tokens`, in source order.
pub fn split_paragraphs(tokens: &[Spanned]) -> Vec<&[Spanned]> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut index = 0;

    while index < tokens.len() {
        let run_end = blank_run_end(tokens, index);
        match separator_end(&tokens[index..run_end]) {
            Some(end) => {
                segments.push(&tokens[segment_start..index]);
                segment_start = index + end;
                index = segment_start;
            }
            None => index = run_end.max(index + 1),
        }
    }
    segments.push(&tokens[segment_start..]);

    segments.retain(|segment| has_content(segment));
    segments
}

/// End of the blank run starting at `start` (equal to `start` when there is none).
fn blank_run_end(tokens: &[Spanned], start: usize) -> usize {
    tokens[start..]
        .iter()
        .position(|(token, _)| !token.is_blank())
        .map_or(tokens.len(), |offset| start + offset)
}

/// Length of the separator at the head of a blank run, up to and including its last
/// newline, when the run holds two newlines or more.
fn separator_end(run: &[Spanned]) -> Option<usize> {
    let newlines = run.iter().filter(|(token, _)| token.is_line_break()).count();
    if newlines < 2 {
        return None;
    }
    run.iter()
        .rposition(|(token, _)| token.is_line_break())
        .map(|last| last + 1)
}

fn has_content(segment: &[Spanned]) -> bool {
    segment.iter().any(|(token, _)| !token.is_blank())
}
