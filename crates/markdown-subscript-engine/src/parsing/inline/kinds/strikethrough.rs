use crate::parsing::{inline::cursor::Cursor, rope::span::Span};

/// Strikethrough (`~~del~~`, and `~del~` when no subscript claims it).
///
/// Recognized as delimiter runs that are paired once the whole paragraph has
/// been scanned; see `delimiters::resolve`.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: u8 = b'~';
    /// Longer runs are literal text.
    pub const MAX_RUN: usize = 2;
}

/// A run of tildes with its flanking facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    /// Absolute span of the run.
    pub span: Span,
    pub can_open: bool,
    pub can_close: bool,
}

impl DelimiterRun {
    /// Measures the tilde run under the cursor and classifies it.
    ///
    /// Left-flanking runs can open and right-flanking runs can close. The
    /// start and end of the input count as whitespace.
    pub fn scan(cur: &Cursor<'_>) -> Self {
        let len = cur
            .rest()
            .bytes()
            .take_while(|&b| b == Strikethrough::TILDE)
            .count();
        let before = cur.preceding_char().unwrap_or('\n');
        let after = cur.char_after(len).unwrap_or('\n');

        let left_flanking = !after.is_whitespace()
            && (!is_punctuation(after) || before.is_whitespace() || is_punctuation(before));
        let right_flanking = !before.is_whitespace()
            && (!is_punctuation(before) || after.is_whitespace() || is_punctuation(after));

        Self {
            span: Span::new(cur.pos(), cur.pos() + len),
            can_open: left_flanking,
            can_close: right_flanking,
        }
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// ASCII punctuation only; Unicode punctuation such as `«` or `—` counts as
/// an ordinary character when deciding flanking.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}
