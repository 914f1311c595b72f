//! Partial handler overrides
//!
//!     [`Handlers`] holds a base renderer plus an optional closure per node kind. A
//!     kind with a closure uses it; every other kind falls through to the base. This is
//!     a shallow merge over a fixed key set, built fresh per call site, so there is no
//!     global handler table to mutate.
//!
//!     ```rust,ignore
//!     let handlers = Handlers::new(HtmlRenderer::new())
//!         .on_link(|url, children| format!("{} link: {url}", children.concat()));
//!     let html = render_markdown("Hello [here](http://example.com) I am.", &handlers);
//!     ```

use std::fmt;

use super::Renderer;

type TextFn<'a, O> = Box<dyn Fn(&str) -> O + 'a>;
type ContainerFn<'a, O> = Box<dyn Fn(Vec<O>) -> O + 'a>;
type LinkFn<'a, O> = Box<dyn Fn(&str, Vec<O>) -> O + 'a>;

/// A base renderer with per-kind overrides layered on top.
pub struct Handlers<'a, R: Renderer> {
    base: R,
    text: Option<TextFn<'a, R::Output>>,
    strong: Option<ContainerFn<'a, R::Output>>,
    emphasis: Option<ContainerFn<'a, R::Output>>,
    link: Option<LinkFn<'a, R::Output>>,
    paragraph: Option<ContainerFn<'a, R::Output>>,
}

impl<'a, R: Renderer> Handlers<'a, R> {
    pub fn new(base: R) -> Self {
        Self {
            base,
            text: None,
            strong: None,
            emphasis: None,
            link: None,
            paragraph: None,
        }
    }

    pub fn on_text(mut self, handler: impl Fn(&str) -> R::Output + 'a) -> Self {
        self.text = Some(Box::new(handler));
        self
    }

    pub fn on_strong(mut self, handler: impl Fn(Vec<R::Output>) -> R::Output + 'a) -> Self {
        self.strong = Some(Box::new(handler));
        self
    }

    pub fn on_emphasis(mut self, handler: impl Fn(Vec<R::Output>) -> R::Output + 'a) -> Self {
        self.emphasis = Some(Box::new(handler));
        self
    }

    pub fn on_link(mut self, handler: impl Fn(&str, Vec<R::Output>) -> R::Output + 'a) -> Self {
        self.link = Some(Box::new(handler));
        self
    }

    pub fn on_paragraph(mut self, handler: impl Fn(Vec<R::Output>) -> R::Output + 'a) -> Self {
        self.paragraph = Some(Box::new(handler));
        self
    }
}

impl<R: Renderer + Default> Default for Handlers<'_, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Renderer> Renderer for Handlers<'_, R> {
    type Output = R::Output;

    fn text(&self, value: &str) -> R::Output {
        match &self.text {
            Some(handler) => handler(value),
            None => self.base.text(value),
        }
    }

    fn strong(&self, children: Vec<R::Output>) -> R::Output {
        match &self.strong {
            Some(handler) => handler(children),
            None => self.base.strong(children),
        }
    }

    fn emphasis(&self, children: Vec<R::Output>) -> R::Output {
        match &self.emphasis {
            Some(handler) => handler(children),
            None => self.base.emphasis(children),
        }
    }

    fn link(&self, url: &str, children: Vec<R::Output>) -> R::Output {
        match &self.link {
            Some(handler) => handler(url, children),
            None => self.base.link(url, children),
        }
    }

    fn paragraph(&self, children: Vec<R::Output>) -> R::Output {
        match &self.paragraph {
            Some(handler) => handler(children),
            None => self.base.paragraph(children),
        }
    }
}

impl<R: Renderer + fmt::Debug> fmt::Debug for Handlers<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("base", &self.base)
            .field("text", &self.text.is_some())
            .field("strong", &self.strong.is_some())
            .field("emphasis", &self.emphasis.is_some())
            .field("link", &self.link.is_some())
            .field("paragraph", &self.paragraph.is_some())
            .finish()
    }
}
