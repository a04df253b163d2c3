//! Low-level scanner for C-family scripting languages.
//!
//! Turns source text into a lazy stream of classified [`Token`]s without
//! validating grammar. The stream is lossless over position: every byte of
//! the source is either inside exactly one token or is skipped whitespace.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer (sentinel-terminated copy)
//!              │
//!              ▼
//!          Cursor ──► Scanner ──► Token { kind, text, span }
//! ```
//!
//! The scanner never fails. Malformed constructs (unterminated strings and
//! block comments, stray characters) become best-effort tokens.
//!
//! # Usage
//!
//! ```
//! use jslex_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("var n = 10;");
//! let kinds: Vec<TokenKind> = Scanner::new(buf.cursor()).map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Identifier);
//! assert_eq!(kinds.len(), 5);
//! ```

mod cursor;
pub mod keywords;
mod kind;
mod line_table;
mod operators;
mod scanner;
mod source_buffer;
mod span;
mod token;

pub use cursor::Cursor;
pub use kind::{ParseKindError, TokenKind};
pub use line_table::LineTable;
pub use operators::{match_operator, OPERATORS};
pub use scanner::{tokenize, ScanState, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use token::Token;
