//! Tokenization of markdown source
//!
//!     The logos lexer turns the source into a flat stream of tokens, each paired with
//!     its byte span. Every byte of input belongs to exactly one token, so text nodes
//!     are sliced straight out of the source by span and nothing is lost.
//!
//!     Markup tokens are single characters, with one exception: `](` is lexed as a
//!     single [`Token::LabelEnd`] because a link label only ends where the url starts.
//!     A lone `]` or `(` is ordinary text.
//!
//!     Every `\n` is its own [`Token::Newline`] and the spaces or tabs around it are
//!     plain [`Token::Whitespace`]. No token pattern continues past a newline, so the
//!     lexer never has to give back input it already consumed. Blank lines are not a
//!     token: paragraph segmentation groups runs of newlines itself. No span may cross
//!     a newline.

use logos::{Logos, Span};

/// Core tokens produced by the logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("*")]
    Star,

    #[token("_")]
    Underscore,

    #[token("[")]
    OpenBracket,

    #[token("](")]
    LabelEnd,

    #[token("]")]
    CloseBracket,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("\n")]
    Newline,

    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"[^*_\[\]()\n \t\r\f]+")]
    Text,
}

/// A token paired with its byte range in the source.
pub type Spanned = (Token, Span);

impl Token {
    /// Line breaks end every span that is still open.
    pub fn is_line_break(self) -> bool {
        self == Token::Newline
    }

    /// Whitespace and line breaks, the tokens a blank line is made of.
    pub fn is_blank(self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }
}

/// Tokenize source with location information
///
/// The token set covers every character, so lexer errors are not expected. Should one
/// occur, its bytes are kept as [`Token::Text`] and a warning is logged, so the stream
/// still covers the whole input.
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = match result {
            Ok(token) => token,
            Err(()) => {
                tracing::warn!(span = ?lexer.span(), "unrecognized input kept as text");
                Token::Text
            }
        };
        tokens.push((token, lexer.span()));
    }

    tracing::trace!(tokens = tokens.len(), bytes = source.len(), "tokenized source");
    tokens
}
