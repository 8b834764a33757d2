/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original rope (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. No bounds check; callers pass lengths they scanned.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// The unconsumed input, including the byte under the cursor.
    ///
    /// Only valid at char boundaries; rules are triggered on ASCII bytes so
    /// that always holds where it is called.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// The character just before the cursor, `None` at the start of input.
    pub fn preceding_char(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    /// The character just after the next `n` bytes, `None` at end of input.
    pub fn char_after(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n..)?.chars().next()
    }

    /// A read-only view of the rest of the current line for single-line rules.
    pub fn line_buffer(&self) -> LineBuffer<'a> {
        let rest = self.rest();
        let line = match rest.find('\n') {
            Some(nl) => &rest[..nl],
            None => rest,
        };
        LineBuffer::new(line, self.preceding_char())
    }
}

/// The not-yet-consumed text of the current line plus the character that
/// precedes it.
///
/// `rest` starts at the byte under the cursor and stops before the line
/// ending. `preceding` is `None` at the start of a paragraph; after a soft
/// line break it is the `\n` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBuffer<'a> {
    pub rest: &'a str,
    pub preceding: Option<char>,
}

impl<'a> LineBuffer<'a> {
    pub fn new(rest: &'a str, preceding: Option<char>) -> Self {
        Self { rest, preceding }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest.as_bytes()
    }

    /// True at line start or right after whitespace.
    pub fn follows_whitespace(&self) -> bool {
        self.preceding.is_none_or(char::is_whitespace)
    }
}
