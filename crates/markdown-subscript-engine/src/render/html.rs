//! Node renderers for the built-in inline kinds.
//!
//! Every renderer is called twice per node, `entering` then leaving. Leaf
//! kinds do all their work on entry.

use xi_rope::Rope;

use crate::{
    attributes::SUBSCRIPT_ATTRIBUTE_FILTER,
    parsing::{inline::InlineNode, inline::NodeKind, rope::slice_to_string},
};

use super::{NodeRenderer, writer::HtmlWriter};

pub const TEXT_RENDERER: NodeRenderer = NodeRenderer {
    kind: NodeKind::Text,
    render: render_text,
};

pub const CODE_SPAN_RENDERER: NodeRenderer = NodeRenderer {
    kind: NodeKind::CodeSpan,
    render: render_code_span,
};

pub const STRIKETHROUGH_RENDERER: NodeRenderer = NodeRenderer {
    kind: NodeKind::Strikethrough,
    render: render_strikethrough,
};

pub const SUBSCRIPT_RENDERER: NodeRenderer = NodeRenderer {
    kind: NodeKind::Subscript,
    render: render_subscript,
};

pub fn render_text(w: &mut HtmlWriter, rope: &Rope, node: &InlineNode, entering: bool) {
    if let (InlineNode::Text(sp), true) = (node, entering) {
        w.write_text(&slice_to_string(rope, *sp));
    }
}

/// `<code>` with the content escaped but otherwise untouched.
pub fn render_code_span(w: &mut HtmlWriter, rope: &Rope, node: &InlineNode, entering: bool) {
    if let (InlineNode::CodeSpan { inner, .. }, true) = (node, entering) {
        w.write_str("<code>");
        w.write_escaped(&slice_to_string(rope, *inner));
        w.write_str("</code>");
    }
}

pub fn render_strikethrough(w: &mut HtmlWriter, _rope: &Rope, _node: &InlineNode, entering: bool) {
    w.write_str(if entering { "<del>" } else { "</del>" });
}

/// `<sub>` plus any attributes the subscript filter allows.
///
/// The text child is rendered by the text renderer between the two calls.
pub fn render_subscript(w: &mut HtmlWriter, _rope: &Rope, node: &InlineNode, entering: bool) {
    if !entering {
        w.write_str("</sub>");
        return;
    }
    w.write_str("<sub");
    if let InlineNode::Subscript(sub) = node
        && let Some(attrs) = sub.attributes()
    {
        w.write_attributes(attrs, &SUBSCRIPT_ATTRIBUTE_FILTER);
    }
    w.write_str(">");
}
