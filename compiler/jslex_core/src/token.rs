//! Scanned tokens.

use std::fmt;

use crate::{Span, TokenKind};

/// A classified slice of source text.
///
/// `text` borrows from the source the scanner was built over, so a token is
/// only as long-lived as that source. `text` is always exactly
/// `&source[span.to_range()]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Byte offset where the token starts.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.span.start
    }

    /// Byte offset one past the token's last byte.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.span.end
    }

    /// `true` if the token text spans more than one physical line.
    pub fn is_multiline(&self) -> bool {
        memchr::memchr(b'\n', self.text.as_bytes()).is_some()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}
