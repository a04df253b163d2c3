//! Byte cursor for the scanner.
//!
//! Reads never bounds-check against the source length: the buffer behind a
//! cursor always ends in a zero byte plus two more zeros, so looking up to
//! two bytes past the current one is always in range.
//!
//! A zero byte is end of input only once `pos` reaches the source length.
//! Before that it is an ordinary NUL in the source and scans as `Unknown`.

/// Position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// Cheap to copy; the scanner snapshots it freely.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by the zero terminator and padding.
    buf: &'a [u8],
    pos: u32,
    /// Offset of the zero terminator.
    end: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], end: u32) -> Self {
        debug_assert!(
            (end as usize) + 2 < buf.len(),
            "buffer needs a terminator and two lookahead bytes"
        );
        debug_assert!(buf[end as usize] == 0, "terminator at {end} must be zero");
        Self { buf, pos: 0, end }
    }

    /// Byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(2)
    }

    #[inline]
    fn byte_at(&self, ahead: u32) -> u8 {
        self.buf[(self.pos + ahead) as usize]
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Move `n` bytes ahead. Callers keep the cursor on a character
    /// boundary; only [`advance_char`](Self::advance_char) is public.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Bytes not yet consumed, excluding the terminator.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let from = self.pos.min(self.end) as usize;
        &self.buf[from..self.end as usize]
    }

    /// Source text between two byte offsets, or `None` if the range leaves
    /// the source or splits a character.
    pub fn text(&self, start: u32, end: u32) -> Option<&'a str> {
        if start > end || end > self.end {
            return None;
        }
        std::str::from_utf8(self.buf.get(start as usize..end as usize)?).ok()
    }

    /// Source text between two byte offsets, unchecked.
    ///
    /// Offsets must lie on character boundaries within the source. Token
    /// boundaries always do: the scanner stops only before ASCII bytes or
    /// after complete characters.
    #[allow(
        unsafe_code,
        reason = "buffer contents were copied from a &str; boundaries are checked in debug builds"
    )]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.end, "bad slice {start}..{end}");
        let bytes = &self.buf[start as usize..end as usize];
        debug_assert!(std::str::from_utf8(bytes).is_ok(), "slice {start}..{end} splits a character");
        // SAFETY: `buf[..self.end]` is a copy of a `&str`, and both offsets
        // sit on character boundaries.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Skip bytes while `pred` holds. `pred(0)` must be `false`, or the
    /// loop runs past the terminator.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.advance();
        }
    }

    /// Encoded length of the character whose first byte is `lead`.
    /// Continuation and invalid lead bytes count as one.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead.leading_ones() {
            n @ 2..=4 => n,
            _ => 1,
        }
    }

    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// Decode the character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        let from = self.pos as usize;
        let to = (from + Self::utf8_char_width(self.current()) as usize).min(self.end as usize);
        std::str::from_utf8(self.buf.get(from..to)?)
            .ok()?
            .chars()
            .next()
    }

    /// Jump to `offset` bytes ahead if `found`, else to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets come from searches within rest(), bounded by a u32 length"
    )]
    fn jump(&mut self, found: Option<usize>) -> bool {
        match found {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => {
                self.pos = self.end;
                false
            }
        }
    }

    /// Move onto the next `\n`, or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.jump(memchr::memchr(b'\n', self.rest()));
    }

    /// Move onto the next `quote` or backslash and return it. Returns `0`
    /// (and stops at end of input) when neither occurs.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        if self.jump(memchr::memchr2(quote, b'\\', self.rest())) {
            self.current()
        } else {
            0
        }
    }

    /// Move past the next `*/`. Returns `false`, at end of input, if there
    /// is none.
    pub fn eat_through_block_comment_end(&mut self) -> bool {
        let found = self.jump(memchr::memmem::find(self.rest(), b"*/"));
        if found {
            self.advance_n(2);
        }
        found
    }

    /// Skip ASCII whitespace, vertical tab and form feed included.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_ascii_whitespace);
    }
}

/// Whitespace bytes skipped between tokens. Wider than
/// `u8::is_ascii_whitespace`, which leaves out vertical tab.
#[inline]
pub(crate) fn is_ascii_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
