use pretty_assertions::assert_eq;

use super::{KindSet, TokenFilter};
use jslex_core::{tokenize, TokenKind};

fn select<'a>(filter: &TokenFilter, source: &'a str) -> Vec<&'a str> {
    tokenize(source)
        .into_iter()
        .filter(|t| filter.accepts(t))
        .map(|t| t.text)
        .collect()
}

const PROGRAM: &str = "// add two\nfunction add(a, b) { return a + b * 2; } /* done */";

// === KindSet ===

#[test]
fn one_bit_per_kind() {
    let mut seen = KindSet::empty();
    for kind in TokenKind::ALL {
        let bit = KindSet::of(kind);
        assert_eq!(bit.bits().count_ones(), 1);
        assert!(!seen.intersects(bit), "{kind} shares a bit");
        seen |= bit;
    }
    assert_eq!(seen, KindSet::all());
}

#[test]
fn has_checks_membership() {
    let set = KindSet::IDENTIFIER | KindSet::COMMENT;
    assert!(set.has(TokenKind::Identifier));
    assert!(set.has(TokenKind::Comment));
    assert!(!set.has(TokenKind::String));
}

#[test]
fn parse_list_accepts_aliases() {
    assert_eq!(
        KindSet::parse_list("names, Comments,op").unwrap(),
        KindSet::IDENTIFIER | KindSet::COMMENT | KindSet::OPERATOR
    );
    assert_eq!(KindSet::parse_list("").unwrap(), KindSet::empty());
    assert_eq!(KindSet::parse_list("string,,").unwrap(), KindSet::STRING);
}

#[test]
fn parse_list_rejects_unknown_labels() {
    let err = KindSet::parse_list("names,regex").unwrap_err();
    assert_eq!(err.label(), "regex");
}

// === TokenFilter ===

#[test]
fn default_passes_everything() {
    let tokens = tokenize(PROGRAM);
    assert_eq!(select(&TokenFilter::default(), PROGRAM).len(), tokens.len());
}

#[test]
fn empty_kind_set_means_all() {
    assert_eq!(TokenFilter::new(KindSet::empty()).kinds(), KindSet::all());
}

#[test]
fn names_only() {
    let filter = TokenFilter::new(KindSet::IDENTIFIER);
    assert_eq!(
        select(&filter, PROGRAM),
        ["function", "add", "a", "b", "return", "a", "b"]
    );
}

#[test]
fn comments_only() {
    let filter = TokenFilter::new(KindSet::COMMENT);
    assert_eq!(select(&filter, PROGRAM), ["// add two", "/* done */"]);
}

#[test]
fn kinds_combine_as_union() {
    let filter = TokenFilter::new(KindSet::COMMENT | KindSet::NUMBER);
    assert_eq!(select(&filter, PROGRAM), ["// add two", "2", "/* done */"]);
}

#[test]
fn ignore_is_exact_match() {
    let filter = TokenFilter::new(KindSet::IDENTIFIER).with_ignore(["a", "return", ""]);
    assert_eq!(select(&filter, PROGRAM), ["function", "add", "b", "b"]);
}

#[test]
fn search_is_substring_match() {
    let filter = TokenFilter::default().with_search(Some("dd".to_string()));
    assert_eq!(select(&filter, PROGRAM), ["// add two", "add"]);
}

#[test]
fn empty_search_matches_everything() {
    let filter = TokenFilter::default().with_search(Some(String::new()));
    assert_eq!(select(&filter, PROGRAM).len(), tokenize(PROGRAM).len());
}

#[test]
fn keyword_skipping_only_affects_identifiers() {
    let filter = TokenFilter::default().skip_keywords(true);
    let source = "if (x) return 'if'; // if";
    assert_eq!(select(&filter, source), ["(", "x", ")", "'if'", ";", "// if"]);
}

#[test]
fn all_conditions_must_hold() {
    let filter = TokenFilter::new(KindSet::IDENTIFIER)
        .with_ignore(["add"])
        .with_search(Some("a".to_string()));
    assert_eq!(select(&filter, PROGRAM), ["a", "a"]);
}

// === Property Tests ===

mod proptest_filter {
    use super::{KindSet, TokenFilter};
    use jslex_core::tokenize;
    use proptest::prelude::*;

    const SOURCE: &str = "var n = 10; /* c */ if (n >= 10) { s = 'x' + `y`; } // z\n\\";

    proptest! {
        #[test]
        fn kind_filter_selects_exactly_matching_kinds(bits in 1u8..=0x7F) {
            let set = KindSet::from_bits_truncate(bits);
            let filter = TokenFilter::new(set);
            let all = tokenize(SOURCE);
            let kept: Vec<_> = all.iter().filter(|t| filter.accepts(t)).collect();
            let expected: Vec<_> = all.iter().filter(|t| set.has(t.kind)).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn ignored_texts_never_pass(ignore in proptest::sample::subsequence(
            vec!["var", "n", "=", "10", ";", "if", "(", ")", "{", "}"], 0..10)) {
            let filter = TokenFilter::default().with_ignore(ignore.iter().copied());
            for tok in tokenize(SOURCE) {
                prop_assert_eq!(filter.accepts(&tok), !ignore.contains(&tok.text));
            }
        }
    }
}
