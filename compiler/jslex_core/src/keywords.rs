//! Reserved words, as a lookup over scanned identifiers.
//!
//! The scanner classifies `if` and `function` as plain identifiers. Callers
//! that care run [`is_keyword`] over `Identifier` tokens afterwards.

/// Reserved and contextual words, sorted for binary search.
pub const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "of", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns `true` if `text` is exactly one of [`KEYWORDS`]. Case-sensitive.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}
