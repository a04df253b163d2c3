//! Token classification.
//!
//! The scanner assigns exactly one [`TokenKind`] to every token it emits.
//! Keywords are not a separate kind: `if` and `count` are both
//! [`TokenKind::Identifier`]. See [`keywords`](crate::keywords) for a
//! post-pass lookup.

use std::fmt;
use std::str::FromStr;

/// Classification of a scanned token.
///
/// `#[repr(u8)]` with dense discriminants so a kind can index a bit set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Names: keywords, variables, functions, properties.
    Identifier = 0,
    /// Numeric literal, including radix prefixes and exponents.
    Number = 1,
    /// Quoted literal delimited by `'`, `"` or `` ` ``.
    String = 2,
    /// Line (`//`) or block (`/* */`) comment.
    Comment = 3,
    /// Operator from the fixed operator table.
    Operator = 4,
    /// One of `( ) { } [ ] ; : , . @ #`.
    Punctuation = 5,
    /// Any character the scanner does not recognize.
    Unknown = 6,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Unknown,
    ];

    /// Lowercase label used on the command line and in debug output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a label does not name any [`TokenKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    label: String,
}

impl ParseKindError {
    /// The label that failed to parse.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token kind '{}'", self.label)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for TokenKind {
    type Err = ParseKindError;

    /// Parse a kind label, case-insensitively. Accepts plurals and the
    /// short aliases `name`, `symbol`, `op`, `punct`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "identifier" | "identifiers" | "ident" | "name" | "names" | "symbol" | "symbols" => {
                TokenKind::Identifier
            }
            "number" | "numbers" => TokenKind::Number,
            "string" | "strings" => TokenKind::String,
            "comment" | "comments" => TokenKind::Comment,
            "operator" | "operators" | "op" => TokenKind::Operator,
            "punctuation" | "punct" => TokenKind::Punctuation,
            "unknown" => TokenKind::Unknown,
            _ => {
                return Err(ParseKindError {
                    label: s.to_string(),
                })
            }
        };
        Ok(kind)
    }
}
