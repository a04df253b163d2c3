//! Token selection: kind set, ignore list, substring search.

use bitflags::bitflags;
use jslex_core::keywords::is_keyword;
use jslex_core::{ParseKindError, Token, TokenKind};
use rustc_hash::FxHashSet;

bitflags! {
    /// Set of [`TokenKind`]s, one bit per kind.
    ///
    /// The empty set is never used for filtering; [`TokenFilter`] treats it
    /// as "every kind".
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct KindSet: u8 {
        const IDENTIFIER = 1 << TokenKind::Identifier as u8;
        const NUMBER = 1 << TokenKind::Number as u8;
        const STRING = 1 << TokenKind::String as u8;
        const COMMENT = 1 << TokenKind::Comment as u8;
        const OPERATOR = 1 << TokenKind::Operator as u8;
        const PUNCTUATION = 1 << TokenKind::Punctuation as u8;
        const UNKNOWN = 1 << TokenKind::Unknown as u8;
    }
}

impl KindSet {
    /// Single-kind set.
    pub const fn of(kind: TokenKind) -> Self {
        Self::from_bits_retain(1 << kind as u8)
    }

    pub const fn has(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Parse a comma-separated list of kind labels (`"names,comments"`).
    /// Blank entries are skipped.
    pub fn parse_list(list: &str) -> Result<Self, ParseKindError> {
        list.split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .try_fold(Self::empty(), |set, label| {
                Ok(set | Self::of(label.parse::<TokenKind>()?))
            })
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        Self::of(kind)
    }
}

/// Decides which scanned tokens reach the output.
///
/// A token passes when its kind is selected, its text is not ignored, its
/// text contains the search string (if any), and, with keyword skipping on,
/// it is not a keyword identifier.
#[derive(Clone, Debug)]
pub struct TokenFilter {
    kinds: KindSet,
    ignore: FxHashSet<String>,
    search: Option<String>,
    skip_keywords: bool,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(KindSet::all())
    }
}

impl TokenFilter {
    /// Filter that passes every token whose kind is in `kinds`. An empty set
    /// selects every kind.
    pub fn new(kinds: KindSet) -> Self {
        let kinds = if kinds.is_empty() { KindSet::all() } else { kinds };
        Self {
            kinds,
            ignore: FxHashSet::default(),
            search: None,
            skip_keywords: false,
        }
    }

    /// Drop tokens whose text equals any of `texts`. Empty entries are
    /// ignored.
    #[must_use]
    pub fn with_ignore<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(
            texts
                .into_iter()
                .map(Into::into)
                .filter(|text: &String| !text.is_empty()),
        );
        self
    }

    /// Keep only tokens containing `needle`. An empty needle matches
    /// everything.
    #[must_use]
    pub fn with_search(mut self, needle: Option<String>) -> Self {
        self.search = needle.filter(|n| !n.is_empty());
        self
    }

    #[must_use]
    pub fn skip_keywords(mut self, skip: bool) -> Self {
        self.skip_keywords = skip;
        self
    }

    pub fn kinds(&self) -> KindSet {
        self.kinds
    }

    pub fn accepts(&self, token: &Token<'_>) -> bool {
        if !self.kinds.has(token.kind) || self.ignore.contains(token.text) {
            return false;
        }
        if self
            .search
            .as_deref()
            .is_some_and(|needle| !token.text.contains(needle))
        {
            return false;
        }
        !(self.skip_keywords && token.kind == TokenKind::Identifier && is_keyword(token.text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
