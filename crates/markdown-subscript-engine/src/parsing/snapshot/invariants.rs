use xi_rope::Rope;

use crate::parsing::{ParsedDoc, inline::InlineNode, rope::span::Span};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All spans are within rope bounds and paragraphs do not overlap
/// - Child spans are ordered and contained within their parent's inner span
/// - Every subscript has non-empty, whitespace-free content directly
///   between its two tildes, covered by exactly one text child
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &ParsedDoc) {
    let n = rope.len();
    let mut prev_end = 0;
    for p in &doc.paragraphs {
        assert_in_bounds(p.span, n, "paragraph");
        assert!(
            p.span.start >= prev_end,
            "paragraph {:?} overlaps previous paragraph ending at {prev_end}",
            p.span
        );
        prev_end = p.span.end;
        check_children(rope, p.span, &p.inlines);
    }
}

fn check_children(rope: &Rope, parent: Span, nodes: &[InlineNode]) {
    let mut prev_end = parent.start;
    for node in nodes {
        let sp = node.span();
        assert_in_bounds(sp, rope.len(), "inline");
        assert!(
            sp.start >= prev_end && sp.end <= parent.end,
            "inline span {sp:?} not ordered within parent {parent:?}"
        );
        prev_end = sp.end;

        match node {
            InlineNode::Text(_) => {}
            InlineNode::CodeSpan { full, inner } => assert_inner(*full, *inner),
            InlineNode::Strikethrough {
                full,
                inner,
                children,
            } => {
                assert_inner(*full, *inner);
                check_children(rope, *inner, children);
            }
            InlineNode::Subscript(sub) => {
                let (full, content) = (sub.full(), sub.content());
                assert!(!content.is_empty(), "subscript {full:?} has empty content");
                assert!(
                    content.start == full.start + 1 && content.end + 1 == full.end,
                    "subscript content {content:?} not directly inside {full:?}"
                );
                let text = rope.slice_to_cow(content.start..content.end);
                assert!(
                    !text.chars().any(char::is_whitespace),
                    "subscript content {text:?} contains whitespace"
                );
                assert_eq!(
                    sub.children(),
                    &[InlineNode::Text(content)],
                    "subscript {full:?} must have one text child"
                );
            }
        }
    }
}

fn assert_in_bounds(sp: Span, n: usize, what: &str) {
    assert!(
        sp.start <= sp.end && sp.end <= n,
        "{what} span out of bounds: {sp:?} (rope len: {n})"
    );
}

fn assert_inner(full: Span, inner: Span) {
    assert!(
        full.contains(inner) && inner.start > full.start && inner.end < full.end,
        "inner span {inner:?} not strictly inside {full:?}"
    );
}
