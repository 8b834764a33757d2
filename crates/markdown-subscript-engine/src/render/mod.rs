//! # HTML Rendering
//!
//! Walks parsed paragraphs and dispatches each inline node to the renderer
//! registered for its [`NodeKind`].
//!
//! - **`writer`**: `HtmlWriter`, the output buffer with escaping helpers
//! - **`html`**: renderers for the built-in kinds

pub mod html;
pub mod writer;

use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    inline::{InlineNode, NodeKind},
};

pub use html::{CODE_SPAN_RENDERER, STRIKETHROUGH_RENDERER, SUBSCRIPT_RENDERER, TEXT_RENDERER};
pub use writer::HtmlWriter;

/// Signature of a node renderer. Called on entry and again on exit.
pub type RenderFn = fn(&mut HtmlWriter, &Rope, &InlineNode, bool);

#[derive(Debug, Clone, Copy)]
pub struct NodeRenderer {
    pub kind: NodeKind,
    pub render: RenderFn,
}

/// Renders documents with a fixed set of node renderers.
///
/// When several renderers claim one kind, the first one given wins.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    renderers: Vec<NodeRenderer>,
}

impl HtmlRenderer {
    pub fn new(renderers: impl IntoIterator<Item = NodeRenderer>) -> Self {
        Self {
            renderers: renderers.into_iter().collect(),
        }
    }

    fn lookup(&self, kind: NodeKind) -> Option<RenderFn> {
        self.renderers
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.render)
    }

    /// `<p>…</p>\n` per paragraph.
    pub fn render_document(&self, rope: &Rope, doc: &ParsedDoc) -> String {
        let mut w = HtmlWriter::new();
        for p in &doc.paragraphs {
            w.write_str("<p>");
            self.render_inlines(&mut w, rope, &p.inlines);
            w.write_str("</p>\n");
        }
        w.into_string()
    }

    pub fn render_inlines(&self, w: &mut HtmlWriter, rope: &Rope, nodes: &[InlineNode]) {
        for node in nodes {
            self.render_node(w, rope, node);
        }
    }

    fn render_node(&self, w: &mut HtmlWriter, rope: &Rope, node: &InlineNode) {
        match self.lookup(node.kind()) {
            Some(render) => {
                render(w, rope, node, true);
                self.render_inlines(w, rope, node.children());
                render(w, rope, node, false);
            }
            None => {
                log::warn!("no renderer for {:?} at {:?}", node.kind(), node.span());
                self.render_inlines(w, rope, node.children());
            }
        }
    }
}
