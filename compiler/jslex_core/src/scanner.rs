//! Hand-written finite-state scanner producing classified [`Token`]s.
//!
//! The scanner runs over a sentinel-terminated [`Cursor`] and never
//! allocates. It classifies text only; keyword lookup and literal values are
//! left to callers. Malformed input is never an error: every irregular
//! construct becomes a best-effort token and scanning continues to EOF.
//!
//! # Design
//!
//! Each call to [`Scanner::next_token`] starts in [`ScanState::Start`],
//! picks the next state from the current byte (and at most two bytes of
//! lookahead), then runs that state to its boundary and emits exactly one
//! token. Whitespace is skipped in `Start` and never emitted.

use crate::cursor::{is_ascii_whitespace, Cursor};
use crate::operators::match_operator;
use crate::{Span, Token, TokenKind};

/// Scanner state.
///
/// `Start` is the only state that survives between tokens; every other
/// state runs to completion and emits one token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Between tokens. Whitespace is consumed here.
    Start,
    /// Letter, `_` or `$` seen.
    InIdentifier,
    /// Digit (or `.` followed by a digit) seen.
    InNumber,
    /// Opening quote seen; carries the quote byte that closes the string.
    InString(u8),
    /// `//` seen.
    InLineComment,
    /// `/*` seen.
    InBlockComment,
    /// Operator or punctuation character seen.
    InOperatorPunct,
    /// Character with no other classification.
    Unknown,
}

/// Lazy, forward-only token stream over one source.
///
/// Implements [`Iterator`]; once it returns `None` it keeps returning
/// `None`. Create a fresh scanner to scan again.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next unscanned byte.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let start = self.cursor.pos();
            let token = match self.next_state()? {
                ScanState::Start => {
                    self.skip_whitespace();
                    continue;
                }
                ScanState::InIdentifier => self.identifier(start),
                ScanState::InNumber => self.number(start),
                ScanState::InString(quote) => self.string(start, quote),
                ScanState::InLineComment => self.line_comment(start),
                ScanState::InBlockComment => self.block_comment(start),
                ScanState::InOperatorPunct => self.operator_or_punct(start),
                ScanState::Unknown => self.unknown(start),
            };
            return Some(token);
        }
    }

    /// Decide the state for the byte under the cursor.
    ///
    /// Returns `None` at EOF and `Some(ScanState::Start)` on whitespace.
    /// Does not move the cursor.
    fn next_state(&self) -> Option<ScanState> {
        let state = match self.cursor.current() {
            0 if self.cursor.is_eof() => return None,
            b if is_ascii_whitespace(b) => ScanState::Start,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => ScanState::InIdentifier,
            b'0'..=b'9' => ScanState::InNumber,
            b'.' if self.cursor.peek().is_ascii_digit() => ScanState::InNumber,
            quote @ (b'\'' | b'"' | b'`') => ScanState::InString(quote),
            b'/' => match self.cursor.peek() {
                b'/' => ScanState::InLineComment,
                b'*' => ScanState::InBlockComment,
                _ => ScanState::InOperatorPunct,
            },
            0x80..=0xFF => match self.cursor.current_char() {
                Some(c) if is_unicode_whitespace(c) => ScanState::Start,
                Some(c) if c.is_alphabetic() => ScanState::InIdentifier,
                _ => ScanState::Unknown,
            },
            b if is_punctuation(b) || match_operator(self.cursor.rest()).is_some() => {
                ScanState::InOperatorPunct
            }
            _ => ScanState::Unknown,
        };
        Some(state)
    }

    fn token(&self, kind: TokenKind, start: u32, end: u32) -> Token<'a> {
        Token::new(kind, self.cursor.slice(start, end), Span::new(start, end))
    }

    fn token_to_cursor(&self, kind: TokenKind, start: u32) -> Token<'a> {
        self.token(kind, start, self.cursor.pos())
    }

    // ─── Whitespace ────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        loop {
            self.cursor.eat_whitespace();
            match self.cursor.current_char() {
                Some(c) if !c.is_ascii() && is_unicode_whitespace(c) => {
                    self.cursor.advance_char();
                }
                _ => break,
            }
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance_char(); // first char, already classified
        loop {
            self.cursor.eat_while(is_ident_continue);
            match self.cursor.current_char() {
                Some(c) if !c.is_ascii() && is_unicode_ident_continue(c) => {
                    self.cursor.advance_char();
                }
                _ => break,
            }
        }
        self.token_to_cursor(TokenKind::Identifier, start)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> Token<'a> {
        let first = self.cursor.current();
        if first == b'.' {
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            self.eat_exponent();
            return self.token_to_cursor(TokenKind::Number, start);
        }

        self.cursor.advance();
        if first == b'0' && self.radix_prefixed_number() {
            self.eat_bigint_suffix();
            return self.token_to_cursor(TokenKind::Number, start);
        }

        self.eat_decimal_digits();
        let mut is_integer = true;
        if self.cursor.current() == b'.' {
            self.cursor.advance(); // the one decimal point
            self.eat_decimal_digits();
            is_integer = false;
        }
        if self.eat_exponent() {
            is_integer = false;
        }
        if is_integer {
            self.eat_bigint_suffix();
        }
        self.token_to_cursor(TokenKind::Number, start)
    }

    /// After a leading `0`: consume `x`/`o`/`b` and its digits if at least
    /// one digit of that radix follows. Returns `false` (consuming nothing)
    /// otherwise, so `0x` alone scans as `0` then `x`.
    fn radix_prefixed_number(&mut self) -> bool {
        let is_digit: fn(u8) -> bool = match self.cursor.current() {
            b'x' | b'X' => |b: u8| b.is_ascii_hexdigit(),
            b'o' | b'O' => |b: u8| matches!(b, b'0'..=b'7'),
            b'b' | b'B' => |b: u8| matches!(b, b'0' | b'1'),
            _ => return false,
        };
        if !is_digit(self.cursor.peek()) {
            return false;
        }
        self.cursor.advance(); // consume radix letter
        self.cursor.eat_while(|b| is_digit(b) || b == b'_');
        true
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// Consume `e`/`E`, an optional sign, and digits, but only when at least
    /// one digit is present. Returns `true` if an exponent was consumed.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let signed = matches!(self.cursor.peek(), b'+' | b'-');
        let first_digit = if signed {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if !first_digit.is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(if signed { 2 } else { 1 });
        self.eat_decimal_digits();
        true
    }

    fn eat_bigint_suffix(&mut self) {
        if self.cursor.current() == b'n' {
            self.cursor.advance();
        }
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// Scan to the matching unescaped `quote`. A backslash escapes whatever
    /// character follows it, newlines included. At EOF the consumed text is
    /// emitted as-is.
    fn string(&mut self, start: u32, quote: u8) -> Token<'a> {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => break, // EOF: unterminated
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char(); // escaped char, may be multi-byte
                    }
                }
                _ => {
                    self.cursor.advance(); // consume closing quote
                    break;
                }
            }
        }
        self.token_to_cursor(TokenKind::String, start)
    }

    // ─── Comments ──────────────────────────────────────────────────

    /// `//` to end of line. The newline ends the comment and is consumed
    /// with it, but is not part of the token text; neither is the `\r` of a
    /// `\r\n` pair.
    fn line_comment(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance_n(2); // consume '//'
        self.cursor.eat_until_newline_or_eof();
        let mut end = self.cursor.pos();
        if self.cursor.current() == b'\n' {
            if self.cursor.slice(start, end).ends_with('\r') {
                end -= 1;
            }
            self.cursor.advance();
        }
        self.token(TokenKind::Comment, start, end)
    }

    /// `/*` through the first `*/`, across any number of lines. At EOF the
    /// consumed text is emitted as-is.
    fn block_comment(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance_n(2); // consume '/*'
        self.cursor.eat_through_block_comment_end();
        self.token_to_cursor(TokenKind::Comment, start)
    }

    // ─── Operators & Punctuation ───────────────────────────────────

    fn operator_or_punct(&mut self, start: u32) -> Token<'a> {
        if let Some(len) = match_operator(self.cursor.rest()) {
            self.cursor.advance_n(len);
            return self.token_to_cursor(TokenKind::Operator, start);
        }
        self.cursor.advance();
        self.token_to_cursor(TokenKind::Punctuation, start)
    }

    // ─── Unknown ───────────────────────────────────────────────────

    fn unknown(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance_char();
        self.token_to_cursor(TokenKind::Unknown, start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// 256-byte lookup table for ASCII identifier continuation bytes:
/// letters, digits, `_` and `$`. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Non-ASCII identifier continuation: alphanumerics plus the zero-width
/// joiners that may appear inside identifiers.
fn is_unicode_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\u{200C}' | '\u{200D}')
}

/// Whitespace beyond ASCII, including the byte-order mark.
fn is_unicode_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'{' | b'}' | b'[' | b']' | b';' | b':' | b',' | b'.' | b'@' | b'#'
    )
}

/// Tokenize a source string and collect every token.
///
/// Token texts borrow from `source`. For lazy access, build a
/// [`SourceBuffer`](crate::SourceBuffer) and iterate a [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let buf = crate::SourceBuffer::new(source);
    Scanner::new(buf.cursor())
        .map(|tok| Token::new(tok.kind, &source[tok.span.to_range()], tok.span))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
