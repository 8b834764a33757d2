//! Single-tilde subscript: `H~2~O`.
//!
//! Shares its delimiter with strikethrough (`~~del~~`). The scanner runs
//! before the strikethrough rule and only claims a position when all of the
//! following hold, checked in this order:
//!
//! 1. at least two bytes remain on the line
//! 2. the tilde is not at line start and does not follow whitespace
//! 3. the next byte is not another tilde (that run belongs to strikethrough)
//! 4. a closing tilde exists later on the same line (the first one wins)
//! 5. the content between the tildes is not empty
//! 6. the content contains no whitespace
//!
//! Anything else is left untouched for the next rule.

use crate::parsing::{inline::cursor::LineBuffer, rope::span::Span};

pub struct Subscript;

impl Subscript {
    /// The byte that opens and closes a subscript.
    pub const TILDE: u8 = b'~';

    /// Scans `buf` for a subscript starting at its first byte.
    ///
    /// `buf.rest` must start with [`Subscript::TILDE`]. Offsets in the
    /// returned match are relative to `buf.rest`.
    pub fn try_match(buf: LineBuffer<'_>) -> Option<SubscriptMatch> {
        match Self::scan(buf) {
            Ok(m) => Some(m),
            Err(reason) => {
                log::trace!("subscript rejected at {:?}: {reason:?}", buf.rest);
                None
            }
        }
    }

    /// Like [`Subscript::try_match`], but reports which check failed.
    pub fn scan(buf: LineBuffer<'_>) -> Result<SubscriptMatch, NoMatch> {
        let bytes = buf.as_bytes();
        debug_assert_eq!(bytes.first(), Some(&Self::TILDE));

        if bytes.len() < 2 {
            return Err(NoMatch::TooShort);
        }
        if buf.follows_whitespace() {
            return Err(match buf.preceding {
                None => NoMatch::LineStart,
                Some(_) => NoMatch::AfterWhitespace,
            });
        }
        if bytes[1] == Self::TILDE {
            return Err(NoMatch::DoubleTilde);
        }

        let close = bytes[1..]
            .iter()
            .position(|&b| b == Self::TILDE)
            .map(|i| i + 1)
            .ok_or(NoMatch::Unclosed)?;
        if close == 1 {
            return Err(NoMatch::Empty);
        }

        // Both ends sit next to an ASCII tilde, so they are char boundaries.
        if buf.rest[1..close].chars().any(char::is_whitespace) {
            return Err(NoMatch::Whitespace);
        }

        Ok(SubscriptMatch {
            start: 0,
            content: Span::new(1, close),
            consumed: close + 1,
        })
    }
}

/// A recognized subscript, as offsets into the scanned text.
///
/// `content` never includes the delimiters and is never empty;
/// `content.start == start + 1` and `start + consumed == content.end + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptMatch {
    /// Offset of the opening tilde.
    pub start: usize,
    /// Bytes between the two tildes.
    pub content: Span,
    /// Bytes to advance past, both tildes included.
    pub consumed: usize,
}

impl SubscriptMatch {
    /// Span of the whole construct, tildes included.
    pub fn full(self) -> Span {
        Span::new(self.start, self.start + self.consumed)
    }

    /// Rebases every offset by `base`.
    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            content: self.content.offset(base),
            consumed: self.consumed,
        }
    }
}

/// Why a position did not open a subscript. Not an error: the host falls
/// through to its next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatch {
    TooShort,
    LineStart,
    AfterWhitespace,
    DoubleTilde,
    Unclosed,
    Empty,
    Whitespace,
}
