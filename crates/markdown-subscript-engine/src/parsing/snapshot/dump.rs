use std::fmt::Write;

use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    inline::InlineNode,
    rope::{slice::preview, span::Span},
};

const PREVIEW: usize = 60;

/// Dumps `doc` as one line per node, children indented by two spaces.
///
/// ```text
/// Paragraph 0..5 "H~2~O"
///   Text 0..1 "H"
///   Subscript 1..4 "~2~" content=2..3
///     Text 2..3 "2"
///   Text 4..5 "O"
/// ```
pub fn dump(rope: &Rope, doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for p in &doc.paragraphs {
        line(&mut out, 0, "Paragraph", rope, p.span);
        out.push('\n');
        for node in &p.inlines {
            dump_node(&mut out, rope, node, 1);
        }
    }
    out
}

fn dump_node(out: &mut String, rope: &Rope, node: &InlineNode, depth: usize) {
    match node {
        InlineNode::Text(sp) => line(out, depth, "Text", rope, *sp),
        InlineNode::CodeSpan { full, inner } => {
            line(out, depth, "CodeSpan", rope, *full);
            let _ = write!(out, " inner={}", range(*inner));
        }
        InlineNode::Strikethrough { full, inner, .. } => {
            line(out, depth, "Strikethrough", rope, *full);
            let _ = write!(out, " inner={}", range(*inner));
        }
        InlineNode::Subscript(sub) => {
            line(out, depth, "Subscript", rope, sub.full());
            let _ = write!(out, " content={}", range(sub.content()));
            for (name, value) in sub.attributes().into_iter().flat_map(|a| a.iter()) {
                let _ = write!(out, " {name}={value:?}");
            }
        }
    }
    out.push('\n');
    for child in node.children() {
        dump_node(out, rope, child, depth + 1);
    }
}

fn line(out: &mut String, depth: usize, kind: &str, rope: &Rope, sp: Span) {
    let _ = write!(
        out,
        "{:indent$}{kind} {} {:?}",
        "",
        range(sp),
        preview(rope, sp, PREVIEW),
        indent = depth * 2
    );
}

fn range(sp: Span) -> String {
    format!("{}..{}", sp.start, sp.end)
}
