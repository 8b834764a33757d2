use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    delimiters::{self, Piece},
    kinds::{CodeSpan, DelimiterRun, Strikethrough, Subscript},
    types::{InlineNode, SubscriptNode},
};

/// Signature of an inline rule: inspect the cursor, never move it.
pub type RuleFn = fn(&Cursor<'_>) -> Option<Parsed>;

/// An inline rule and the byte that triggers it.
#[derive(Debug, Clone, Copy)]
pub struct InlineRule {
    pub name: &'static str,
    pub trigger: u8,
    pub parse: RuleFn,
}

/// What a rule recognized at the cursor.
#[derive(Debug, Clone)]
pub enum Parsed {
    /// A finished node spanning `len` bytes from the cursor.
    Node { node: InlineNode, len: usize },
    /// A delimiter run to be paired after the paragraph is scanned.
    Delimiter(DelimiterRun),
}

impl Parsed {
    fn len(&self) -> usize {
        match self {
            Parsed::Node { len, .. } => *len,
            Parsed::Delimiter(run) => run.len(),
        }
    }

    fn into_piece(self) -> Piece {
        match self {
            Parsed::Node { node, .. } => Piece::Node(node),
            Parsed::Delimiter(run) => Piece::Delimiter(run),
        }
    }
}

pub const CODE_SPAN_RULE: InlineRule = InlineRule {
    name: "code_span",
    trigger: CodeSpan::TICK,
    parse: try_parse_code_span,
};

pub const SUBSCRIPT_RULE: InlineRule = InlineRule {
    name: "subscript",
    trigger: Subscript::TILDE,
    parse: try_parse_subscript,
};

pub const STRIKETHROUGH_RULE: InlineRule = InlineRule {
    name: "strikethrough",
    trigger: Strikethrough::TILDE,
    parse: try_parse_strikethrough,
};

/// Runs inline rules over paragraph text.
///
/// Rules are tried in the order given; at each byte the first rule whose
/// trigger matches and which recognizes something wins. Bytes no rule
/// claims are plain text.
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    rules: Vec<InlineRule>,
}

impl InlineParser {
    pub fn new(rules: impl IntoIterator<Item = InlineRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rules(&self) -> &[InlineRule] {
        &self.rules
    }

    /// Parses inline content into a sequence of [`InlineNode`]s.
    ///
    /// # Arguments
    /// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
    /// - `s`: The paragraph text to parse
    ///
    /// # Escapes
    /// A backslash before ASCII punctuation keeps the punctuation literal:
    /// `H\~2~O` never opens at the first tilde. Both bytes stay in the text
    /// node; the text renderer drops the backslash.
    ///
    /// # Returns
    /// A vector of inline nodes covering the entire input. Text between special
    /// constructs is emitted as `InlineNode::Text`.
    pub fn parse(&self, base: usize, s: &str) -> Vec<InlineNode> {
        let mut cur = Cursor::new(s, base);
        let mut pieces = vec![];
        let mut text_start = cur.pos();

        fn flush_text(out: &mut Vec<Piece>, start: usize, end: usize) {
            if end > start {
                out.push(Piece::Node(InlineNode::Text(Span { start, end })));
            }
        }

        'scan: while let Some(b) = cur.peek() {
            if b == b'\\' && cur.peek_at(1).is_some_and(|n| n.is_ascii_punctuation()) {
                cur.bump_n(2);
                continue;
            }
            for rule in self.rules.iter().filter(|r| r.trigger == b) {
                let Some(parsed) = (rule.parse)(&cur) else {
                    continue;
                };
                flush_text(&mut pieces, text_start, cur.pos());
                cur.bump_n(parsed.len());
                pieces.push(parsed.into_piece());
                text_start = cur.pos();
                continue 'scan;
            }
            cur.bump();
        }

        flush_text(&mut pieces, text_start, cur.pos());
        delimiters::resolve(pieces)
    }
}

/// Parses with the default rule set: code spans, subscript, strikethrough.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    InlineParser::new([CODE_SPAN_RULE, SUBSCRIPT_RULE, STRIKETHROUGH_RULE]).parse(base, s)
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
fn try_parse_code_span(cur: &Cursor<'_>) -> Option<Parsed> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let mut scan = cur.clone();
    let start = scan.pos();
    scan.bump(); // `
    let inner_start = scan.pos();

    while !scan.eof() && scan.peek() != Some(CodeSpan::TICK) {
        scan.bump();
    }
    let inner_end = scan.pos();

    if scan.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    scan.bump(); // closing `
    let end = scan.pos();

    Some(Parsed::Node {
        node: InlineNode::CodeSpan {
            full: Span { start, end },
            inner: Span {
                start: inner_start,
                end: inner_end,
            },
        },
        len: end - start,
    })
}

/// Attempts to parse a subscript on the rest of the current line.
fn try_parse_subscript(cur: &Cursor<'_>) -> Option<Parsed> {
    let m = Subscript::try_match(cur.line_buffer())?.offset(cur.pos());
    Some(Parsed::Node {
        node: InlineNode::Subscript(SubscriptNode::new(m)),
        len: m.consumed,
    })
}

/// Records a tilde run for later pairing.
///
/// Declines runs longer than two tildes and runs that directly follow
/// another tilde; the host then emits one literal `~` and moves on, so the
/// next tilde is offered to every rule again. Runs that can neither open nor
/// close are consumed whole as literal text.
fn try_parse_strikethrough(cur: &Cursor<'_>) -> Option<Parsed> {
    if cur.peek() != Some(Strikethrough::TILDE) {
        return None;
    }
    if cur.preceding_char() == Some(char::from(Strikethrough::TILDE)) {
        return None;
    }
    let run = DelimiterRun::scan(cur);
    if run.len() > Strikethrough::MAX_RUN {
        return None;
    }
    if !(run.can_open || run.can_close) {
        return Some(Parsed::Node {
            node: InlineNode::Text(run.span),
            len: run.len(),
        });
    }
    Some(Parsed::Delimiter(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::kinds::SubscriptMatch;
    use pretty_assertions::assert_eq;

    fn sub((start, end): (usize, usize)) -> InlineNode {
        InlineNode::Subscript(SubscriptNode::new(SubscriptMatch {
            start,
            content: Span::new(start + 1, end - 1),
            consumed: end - start,
        }))
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn parse_subscript() {
        let nodes = parse_inline(0, "H~2~O");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(0, 1)),
                sub((1, 4)),
                InlineNode::Text(Span::new(4, 5)),
            ]
        );
    }

    #[test]
    fn spans_are_absolute() {
        let nodes = parse_inline(100, "H~2~O");
        assert_eq!(nodes[1].span(), Span::new(101, 104));
    }

    #[test]
    fn adjacent_subscripts() {
        let nodes = parse_inline(0, "H~2~~O~");
        assert_eq!(
            nodes,
            vec![InlineNode::Text(Span::new(0, 1)), sub((1, 4)), sub((4, 7))]
        );
    }

    #[test]
    fn nearest_closer_then_literal_tail() {
        let nodes = parse_inline(0, "Test~abc~def~end");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(0, 4)),
                sub((4, 9)),
                InlineNode::Text(Span::new(9, 16)),
            ]
        );
    }

    #[test]
    fn double_tilde_without_content_is_text() {
        assert_eq!(parse_inline(0, "Test~~end"), vec![InlineNode::Text(Span::new(0, 9))]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span::new(0, 6),
                inner: Span::new(1, 5),
            }]
        );
    }

    #[test]
    fn code_span_suppresses_subscript() {
        let nodes = parse_inline(0, "`H~2~O`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        let nodes = parse_inline(0, "`unclosed H~2~O");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(0, 11)),
                sub((11, 14)),
                InlineNode::Text(Span::new(14, 15)),
            ]
        );
    }

    #[test]
    fn escaped_tilde_never_opens() {
        // only the unescaped tilde could open, and it has no closer
        let nodes = parse_inline(0, r"H\~2~O");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 6))]);
    }

    #[test]
    fn subscript_does_not_cross_soft_break() {
        let nodes = parse_inline(0, "H~2\n~O");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 6))]);
    }

    #[test]
    fn strikethrough_wraps_subscript() {
        let nodes = parse_inline(0, "~H~2~O~");
        assert_eq!(
            nodes,
            vec![InlineNode::Strikethrough {
                full: Span::new(0, 7),
                inner: Span::new(1, 6),
                children: vec![
                    InlineNode::Text(Span::new(1, 2)),
                    sub((2, 5)),
                    InlineNode::Text(Span::new(5, 6)),
                ],
            }]
        );
    }

    #[test]
    fn long_run_leaves_later_tildes_to_subscript() {
        // only the first two tildes are literal; the third opens `~x~`
        assert_eq!(
            parse_inline(0, "a~~~x~"),
            vec![InlineNode::Text(Span::new(0, 3)), sub((3, 6))]
        );
        assert_eq!(
            parse_inline(0, "a~~~~x~"),
            vec![InlineNode::Text(Span::new(0, 4)), sub((4, 7))]
        );
    }

    #[test]
    fn run_after_tilde_never_delimits() {
        // `~~` right after a closer stays literal instead of closing `~~NH`
        assert_eq!(
            parse_inline(0, "~~NH~4~~~"),
            vec![InlineNode::Text(Span::new(0, 4)), sub((4, 7)), InlineNode::Text(Span::new(7, 9))]
        );
        assert_eq!(
            parse_inline(0, "x~a~~b c~"),
            vec![InlineNode::Text(Span::new(0, 1)), sub((1, 4)), InlineNode::Text(Span::new(4, 9))]
        );
    }

    #[test]
    fn run_of_three_is_literal_without_subscript() {
        let nodes = InlineParser::new([STRIKETHROUGH_RULE]).parse(0, "a ~~~b~~~");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 9))]);
    }

    #[test]
    fn stranded_run_is_consumed_whole() {
        // `~~` between spaces can neither open nor close; its second tilde
        // must not be re-scanned as a closer for the later `~x~`
        let nodes = parse_inline(0, "6 ~~ ~x~");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(0, 5)),
                InlineNode::Strikethrough {
                    full: Span::new(5, 8),
                    inner: Span::new(6, 7),
                    children: vec![InlineNode::Text(Span::new(6, 7))],
                },
            ]
        );
    }

    #[test]
    fn rule_order_decides() {
        // strikethrough alone claims what subscript would have
        let nodes = InlineParser::new([STRIKETHROUGH_RULE]).parse(0, "H~2~O");
        assert!(matches!(nodes[1], InlineNode::Strikethrough { .. }));

        // without strikethrough nothing consumes the `~~` run, so the
        // second tilde of it opens a subscript
        let nodes = InlineParser::new([SUBSCRIPT_RULE]).parse(0, "a ~~b~~");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(0, 3)),
                sub((3, 6)),
                InlineNode::Text(Span::new(6, 7)),
            ]
        );
    }

    #[test]
    fn no_rules_means_all_text() {
        let nodes = InlineParser::default().parse(0, "H~2~O `x`");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 9))]);
    }
}
