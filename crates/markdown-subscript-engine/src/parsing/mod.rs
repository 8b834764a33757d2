//! # Parsing
//!
//! Splits a rope into paragraphs and runs the inline parser over each.
//!
//! Block structure is deliberately thin: consecutive non-blank lines form a
//! paragraph and blank lines separate them. Everything interesting happens in
//! [`inline`].

pub mod inline;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use inline::{InlineNode, InlineParser};
use rope::{LineRef, Span, lines_with_spans, slice::slice_to_string};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub paragraphs: Vec<Paragraph>,
}

/// One paragraph: its content span and the inline nodes parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// From the first non-indent byte to the last content byte, line
    /// endings of the final line excluded.
    pub span: Span,
    pub inlines: Vec<InlineNode>,
}

pub fn parse_document(rope: &Rope, parser: &InlineParser) -> ParsedDoc {
    let mut paragraphs = vec![];
    let mut open: Option<Span> = None;

    let close = |span: Span, out: &mut Vec<Paragraph>| {
        let text = slice_to_string(rope, span);
        out.push(Paragraph {
            span,
            inlines: parser.parse(span.start, &text),
        });
    };

    for lr in lines_with_spans(rope) {
        if lr.is_blank() {
            if let Some(span) = open.take() {
                close(span, &mut paragraphs);
            }
            continue;
        }
        match open.as_mut() {
            Some(span) => span.end = lr.content_end(),
            None => open = Some(paragraph_start(&lr)),
        }
    }
    if let Some(span) = open.take() {
        close(span, &mut paragraphs);
    }

    log::debug!("parsed {} paragraph(s) from {} bytes", paragraphs.len(), rope.len());
    ParsedDoc { paragraphs }
}

fn paragraph_start(lr: &LineRef) -> Span {
    Span::new(lr.span.start + lr.indent(), lr.content_end())
}

#[cfg(test)]
mod tests;
