//! Integration tests for the parsing module.
//!
//! Paragraph splitting is checked with plain assertions; whole-document
//! shape is pinned with inline `insta` snapshots of the text dump.


use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    inline::{CODE_SPAN_RULE, InlineNode, InlineParser, STRIKETHROUGH_RULE, SUBSCRIPT_RULE},
    parse_document,
    rope::Span,
    snapshot,
};

fn parse(src: &str) -> (Rope, ParsedDoc) {
    let rope = Rope::from(src);
    let parser = InlineParser::new([CODE_SPAN_RULE, SUBSCRIPT_RULE, STRIKETHROUGH_RULE]);
    let doc = parse_document(&rope, &parser);
    snapshot::invariants(&rope, &doc);
    (rope, doc)
}

fn spans(doc: &ParsedDoc) -> Vec<Span> {
    doc.paragraphs.iter().map(|p| p.span).collect()
}

#[test]
fn dump_chemistry() {
    let (rope, doc) = parse("H~2~O\n\nC~6~H~12~O~6~\n");
    insta::assert_snapshot!(snapshot::dump(&rope, &doc), @r#"
Paragraph 0..5 "H~2~O"
  Text 0..1 "H"
  Subscript 1..4 "~2~" content=2..3
    Text 2..3 "2"
  Text 4..5 "O"
Paragraph 7..20 "C~6~H~12~O~6~"
  Text 7..8 "C"
  Subscript 8..11 "~6~" content=9..10
    Text 9..10 "6"
  Text 11..12 "H"
  Subscript 12..16 "~12~" content=13..15
    Text 13..15 "12"
  Text 16..17 "O"
  Subscript 17..20 "~6~" content=18..19
    Text 18..19 "6"
"#);
}

#[test]
fn dump_subscript_beside_strikethrough() {
    let (rope, doc) = parse("NH~4~ with ~~strike~~");
    insta::assert_snapshot!(snapshot::dump(&rope, &doc), @r#"
Paragraph 0..21 "NH~4~ with ~~strike~~"
  Text 0..2 "NH"
  Subscript 2..5 "~4~" content=3..4
    Text 3..4 "4"
  Text 5..11 " with "
  Strikethrough 11..21 "~~strike~~" inner=13..19
    Text 13..19 "strike"
"#);
}

#[test]
fn paragraphs_split_on_blank_lines() {
    let (_, doc) = parse("  indented\ncontinued\n\n\n last");
    assert_eq!(spans(&doc), vec![Span::new(2, 20), Span::new(24, 28)]);
}

#[test]
fn crlf_is_not_paragraph_content() {
    let (_, doc) = parse("H~2~O\r\n");
    assert_eq!(spans(&doc), vec![Span::new(0, 5)]);
}

#[test]
fn whitespace_only_lines_separate_paragraphs() {
    let (_, doc) = parse("a\n   \n\t\nb\n");
    assert_eq!(spans(&doc), vec![Span::new(0, 1), Span::new(8, 9)]);
}

/// A subscript must close on the line it opened on, even inside one paragraph.
#[test]
fn subscript_stays_on_its_line() {
    let (_, doc) = parse("H~2\n~O\n");
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].inlines, vec![InlineNode::Text(Span::new(0, 6))]);
}

/// Test that slicing any span from the rope reproduces exact text.
#[test]
fn lossless_span_invariant() {
    let (rope, doc) = parse("Water is H~2~O.");
    let sub = &doc.paragraphs[0].inlines[1];
    let InlineNode::Subscript(node) = sub else {
        panic!("expected Subscript, got {sub:?}");
    };
    assert_eq!(rope.slice_to_cow(node.full().start..node.full().end), "~2~");
    assert_eq!(rope.slice_to_cow(node.content().start..node.content().end), "2");
}

/// Test that raw zones (code spans) don't produce subscripts.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let (_, doc) = parse("`H~2~O`");
    let inlines = &doc.paragraphs[0].inlines;
    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let (_, doc) = parse("H~2 and `also unclosed");
    assert_eq!(doc.paragraphs[0].inlines, vec![InlineNode::Text(Span::new(0, 22))]);
}

/// Test empty document produces no paragraphs.
#[test]
fn empty_document() {
    let (_, doc) = parse("");
    assert!(doc.paragraphs.is_empty());
}

/// Test blank lines don't produce paragraphs.
#[test]
fn blank_lines_only() {
    let (_, doc) = parse("\n\n\n");
    assert!(doc.paragraphs.is_empty());
}
