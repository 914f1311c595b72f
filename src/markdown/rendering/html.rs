//! Default HTML handlers
//!
//!     Strong becomes `<b>`, Emphasis `<i>`, Paragraph `<p>`, and Link an `<a>` carrying
//!     the captured url plus the [`LinkAttributes`], which by default open the target
//!     in a new browsing context without exposing the referring page:
//!     `target="_blank" rel="noopener noreferrer"`.
//!
//!     Text and attribute values are escaped; nothing else is altered.

use super::{render_markdown, Renderer};

/// Extra attributes placed on every rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributes {
    pub target: Option<String>,
    pub rel: Option<String>,
}

impl LinkAttributes {
    pub const DEFAULT_TARGET: &'static str = "_blank";
    pub const DEFAULT_REL: &'static str = "noopener noreferrer";

    /// Links carry only their `href`.
    pub fn none() -> Self {
        Self {
            target: None,
            rel: None,
        }
    }
}

impl Default for LinkAttributes {
    fn default() -> Self {
        Self {
            target: Some(Self::DEFAULT_TARGET.to_string()),
            rel: Some(Self::DEFAULT_REL.to_string()),
        }
    }
}

/// Renders nodes to HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    link_attributes: LinkAttributes,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_attributes(link_attributes: LinkAttributes) -> Self {
        Self { link_attributes }
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn text(&self, value: &str) -> String {
        escape_html(value)
    }

    fn strong(&self, children: Vec<String>) -> String {
        wrap("b", children)
    }

    fn emphasis(&self, children: Vec<String>) -> String {
        wrap("i", children)
    }

    fn link(&self, url: &str, children: Vec<String>) -> String {
        let mut out = format!("<a href=\"{}\"", escape_html(url));
        if let Some(target) = &self.link_attributes.target {
            out.push_str(&format!(" target=\"{}\"", escape_html(target)));
        }
        if let Some(rel) = &self.link_attributes.rel {
            out.push_str(&format!(" rel=\"{}\"", escape_html(rel)));
        }
        out.push('>');
        out.push_str(&children.concat());
        out.push_str("</a>");
        out
    }

    fn paragraph(&self, children: Vec<String>) -> String {
        wrap("p", children)
    }
}

fn wrap(tag: &str, children: Vec<String>) -> String {
    format!("<{tag}>{}</{tag}>", children.concat())
}

/// Render markdown straight to an HTML string with the default handlers.
pub fn to_html(markdown: &str) -> String {
    render_markdown(markdown, &HtmlRenderer::new()).concat()
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
