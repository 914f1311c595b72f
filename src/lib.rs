//! # inline-markdown
//!
//! A parser and renderer for a small, non-standard subset of inline markdown:
//! `*bold*`, `_italic_`, `[label](url)` and blank-line separated paragraphs.
//!
//! File Layout
//!
//!     src/markdown
//!       ├── ast         The node forest produced by parsing
//!       ├── lexing      logos token stream over the source
//!       ├── parsing     Paragraph segmentation and inline span scanning
//!       ├── rendering   Per-kind handlers and the tree walker
//!       ├── formats     Named serializers (html, json, yaml, treeviz, text)
//!       ├── config      Layered configuration loading
//!       └── testing     Fluent AST assertions
//!
//!     The contract is simple: a string goes in, a forest of nodes comes out, and a
//!     renderer turns that forest into whatever output the caller wants.

pub mod markdown;

pub use markdown::ast::{Node, NodeKind, Nodes};
pub use markdown::parsing::parse;
pub use markdown::rendering::{
    render, render_markdown, Handlers, HtmlRenderer, LinkAttributes, PlainTextRenderer, Renderer,
};
