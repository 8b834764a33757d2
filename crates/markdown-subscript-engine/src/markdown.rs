//! # Markdown
//!
//! The host that extensions plug into. A [`Markdown`] holds two ordered
//! lists, inline rules and node renderers, each entry tagged with a
//! priority. Lower priorities run first; equal priorities keep the order
//! they were added in.
//!
//! ```
//! use markdown_subscript_engine::{Markdown, StrikethroughExtension, SubscriptExtension};
//!
//! let md = Markdown::new().with_extensions([
//!     &SubscriptExtension as &dyn markdown_subscript_engine::Extender,
//!     &StrikethroughExtension,
//! ]);
//! assert_eq!(md.convert("H~2~O"), "<p>H<sub>2</sub>O</p>\n");
//! ```

use xi_rope::Rope;

use crate::{
    parsing::{
        ParsedDoc,
        inline::{CODE_SPAN_RULE, InlineParser, InlineRule},
        parse_document,
    },
    render::{CODE_SPAN_RENDERER, HtmlRenderer, NodeRenderer, TEXT_RENDERER},
};

/// Priority of the host's own code span rule and built-in renderers.
pub const DEFAULT_PRIORITY: u16 = 100;

/// A value with the priority it was registered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prioritized<T> {
    pub value: T,
    pub priority: u16,
}

impl<T> Prioritized<T> {
    pub fn new(value: T, priority: u16) -> Self {
        Self { value, priority }
    }
}

/// Something that registers rules and renderers on a [`Markdown`].
pub trait Extender {
    fn extend(&self, md: &mut Markdown);
}

/// Parser and renderer configuration.
///
/// Holds only `fn` pointers and plain data, so a built instance can be
/// shared across threads and used concurrently.
#[derive(Debug, Clone)]
pub struct Markdown {
    rules: Vec<Prioritized<InlineRule>>,
    renderers: Vec<Prioritized<NodeRenderer>>,
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Markdown {
    /// Code spans and plain text only; tildes are literal until an
    /// extension claims them.
    pub fn new() -> Self {
        let mut md = Self::bare();
        md.add_inline_rule(CODE_SPAN_RULE, DEFAULT_PRIORITY);
        md.add_renderer(TEXT_RENDERER, DEFAULT_PRIORITY);
        md.add_renderer(CODE_SPAN_RENDERER, DEFAULT_PRIORITY);
        md
    }

    /// No rules and no renderers at all.
    pub fn bare() -> Self {
        Self {
            rules: vec![],
            renderers: vec![],
        }
    }

    #[must_use]
    pub fn with_extensions<'a>(mut self, extensions: impl IntoIterator<Item = &'a dyn Extender>) -> Self {
        for ext in extensions {
            ext.extend(&mut self);
        }
        self
    }

    pub fn add_inline_rule(&mut self, rule: InlineRule, priority: u16) {
        insert_sorted(&mut self.rules, Prioritized::new(rule, priority));
    }

    pub fn add_renderer(&mut self, renderer: NodeRenderer, priority: u16) {
        insert_sorted(&mut self.renderers, Prioritized::new(renderer, priority));
    }

    pub fn inline_rules(&self) -> &[Prioritized<InlineRule>] {
        &self.rules
    }

    pub fn renderers(&self) -> &[Prioritized<NodeRenderer>] {
        &self.renderers
    }

    pub fn inline_parser(&self) -> InlineParser {
        InlineParser::new(self.rules.iter().map(|p| p.value))
    }

    pub fn html_renderer(&self) -> HtmlRenderer {
        HtmlRenderer::new(self.renderers.iter().map(|p| p.value))
    }

    pub fn parse(&self, rope: &Rope) -> ParsedDoc {
        parse_document(rope, &self.inline_parser())
    }

    pub fn render(&self, rope: &Rope, doc: &ParsedDoc) -> String {
        self.html_renderer().render_document(rope, doc)
    }

    /// Parses and renders `src` in one go.
    pub fn convert(&self, src: &str) -> String {
        let rope = Rope::from(src);
        let doc = self.parse(&rope);
        self.render(&rope, &doc)
    }
}

/// Inserts after every entry with a priority `<=` the new one's.
fn insert_sorted<T>(list: &mut Vec<Prioritized<T>>, item: Prioritized<T>) {
    let at = list.partition_point(|p| p.priority <= item.priority);
    list.insert(at, item);
}
