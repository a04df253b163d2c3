use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::{CliOptions, USAGE};
use crate::filter::KindSet;
use crate::input::Input;
use crate::output::OutputMode;
use crate::CliError;

fn parse(args: &[&str]) -> Result<CliOptions, CliError> {
    let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    CliOptions::parse(&args)
}

fn path(p: &str) -> Input {
    Input::Path(PathBuf::from(p))
}

// === Defaults ===

#[test]
fn no_args_reads_stdin_with_everything_selected() {
    let options = parse(&[]).unwrap();
    assert_eq!(options.inputs, vec![Input::Stdin]);
    assert_eq!(options.kinds, KindSet::empty());
    assert_eq!(options.filter().kinds(), KindSet::all());
    assert_eq!(options.output_mode(), OutputMode::Plain);
}

#[test]
fn files_in_order() {
    let options = parse(&["a.js", "-", "b.js"]).unwrap();
    assert_eq!(options.inputs, vec![path("a.js"), Input::Stdin, path("b.js")]);
}

// === Kind Flags ===

#[test]
fn names_and_comments_union() {
    let options = parse(&["-n", "--comments", "--strings"]).unwrap();
    assert_eq!(
        options.kinds,
        KindSet::IDENTIFIER | KindSet::COMMENT | KindSet::STRING
    );
}

#[test]
fn kind_list_forms() {
    let forms: [&[&str]; 5] = [
        &["--kind=number,op"],
        &["--kind", "number,op"],
        &["-k", "number,op"],
        &["-knumber,op"],
        &["-k=number,op"],
    ];
    for args in forms {
        assert_eq!(
            parse(args).unwrap().kinds,
            KindSet::NUMBER | KindSet::OPERATOR,
            "args {args:?}"
        );
    }
}

#[test]
fn unknown_kind_is_usage_error() {
    let err = parse(&["--kind=regex"]).unwrap_err();
    assert!(matches!(err, CliError::UnknownKind(_)));
    assert_eq!(err.exit_code(), 2);
}

// === Value Flags ===

#[test]
fn ignore_accumulates_and_skips_blanks() {
    let options = parse(&["-i", "a,,b", "--ignore=c"]).unwrap();
    assert_eq!(options.ignore, vec!["a", "b", "c"]);
}

#[test]
fn search_last_wins() {
    assert_eq!(
        parse(&["-s", "foo", "--search=bar"]).unwrap().search.as_deref(),
        Some("bar")
    );
    assert_eq!(parse(&["--search="]).unwrap().search, None);
}

#[test]
fn value_may_start_with_dash() {
    let options = parse(&["-s", "-", "x.js"]).unwrap();
    assert_eq!(options.search.as_deref(), Some("-"));
    assert_eq!(options.inputs, vec![path("x.js")]);
}

#[test]
fn missing_value() {
    let err = parse(&["--kind"]).unwrap_err();
    assert!(matches!(err, CliError::MissingValue { ref option } if option == "--kind"));
    assert_eq!(err.exit_code(), 2);
    assert!(matches!(
        parse(&["-ns"]).unwrap_err(),
        CliError::MissingValue { ref option } if option == "--search"
    ));
}

// === Clusters & Separators ===

#[test]
fn short_flags_cluster() {
    let options = parse(&["-ncN"]).unwrap();
    assert_eq!(options.kinds, KindSet::IDENTIFIER | KindSet::COMMENT);
    assert!(options.nice);
}

#[test]
fn cluster_ends_at_value_flag() {
    let options = parse(&["-nsfoo"]).unwrap();
    assert_eq!(options.kinds, KindSet::IDENTIFIER);
    assert_eq!(options.search.as_deref(), Some("foo"));
}

#[test]
fn double_dash_ends_options() {
    let options = parse(&["-n", "--", "-c", "--nice"]).unwrap();
    assert_eq!(options.kinds, KindSet::IDENTIFIER);
    assert!(!options.nice);
    assert_eq!(options.inputs, vec![path("-c"), path("--nice")]);
}

// === Errors ===

#[test]
fn unknown_long_option() {
    let err = parse(&["--verbose"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--verbose'");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_short_option() {
    let err = parse(&["-nx"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '-x'");
}

#[test]
fn boolean_flag_rejects_value() {
    let err = parse(&["--nice=yes"]).unwrap_err();
    assert_eq!(err.to_string(), "option '--nice' does not take a value");
}

#[test]
fn nice_and_positions_conflict() {
    let err = parse(&["-N", "-p"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

// === Modes ===

#[test]
fn output_modes() {
    assert_eq!(parse(&["-N"]).unwrap().output_mode(), OutputMode::Nice);
    assert_eq!(parse(&["--positions"]).unwrap().output_mode(), OutputMode::Positions);
}

#[test]
fn help_and_version() {
    let options = parse(&["-h", "--version"]).unwrap();
    assert!(options.help);
    assert!(options.version);
}

#[test]
fn usage_mentions_every_long_option() {
    for option in [
        "--names",
        "--comments",
        "--strings",
        "--kind",
        "--ignore",
        "--search",
        "--no-keywords",
        "--nice",
        "--positions",
        "--help",
        "--version",
    ] {
        assert!(USAGE.contains(option), "usage text lacks {option}");
    }
}

#[test]
fn filter_reflects_options() {
    let options = parse(&["-n", "--no-keywords", "-i", "b"]).unwrap();
    let filter = options.filter();
    let kept: Vec<&str> = jslex_core::tokenize("if (a) b = c;")
        .into_iter()
        .filter(|t| filter.accepts(t))
        .map(|t| t.text)
        .collect();
    assert_eq!(kept, ["a", "c"]);
}
