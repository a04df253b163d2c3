//! Command-line parsing.
//!
//! Hand-rolled: long options take `--opt=value` or `--opt value`; short
//! options cluster (`-nc`) and a value-taking short option consumes the rest
//! of its cluster or the next argument (`-kstring`, `-k string`). `--` ends
//! option parsing. A lone `-` is stdin.

use crate::filter::{KindSet, TokenFilter};
use crate::input::Input;
use crate::output::OutputMode;
use crate::CliError;

pub const USAGE: &str = "\
Usage: jslex [OPTIONS] [FILE...]

Print the tokens of JavaScript-like source files, one per line.
With no FILE, or when FILE is -, read standard input.

Options:
  -n, --names             Print identifier tokens only
  -c, --comments          Print comment tokens only
      --strings           Print string tokens only
  -k, --kind <KINDS>      Print only these kinds (comma separated):
                          identifier, number, string, comment,
                          operator, punctuation, unknown
  -i, --ignore <TEXTS>    Skip tokens equal to any of these (comma separated)
  -s, --search <TEXT>     Print only tokens containing TEXT
      --no-keywords       Skip keyword identifiers (if, function, ...)
  -N, --nice              Reflow output into readable lines
  -p, --positions         Prefix each token with line:col and its kind
  -h, --help              Print this help
  -V, --version           Print version

Kind options combine: -n -c prints identifiers and comments.

Environment:
  RUST_LOG                Enable diagnostics on stderr (e.g. RUST_LOG=debug)
  JSLEX_LOG_TREE=1        Render diagnostics as an indented tree
";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Selected kinds; empty selects every kind.
    pub kinds: KindSet,
    pub ignore: Vec<String>,
    pub search: Option<String>,
    pub no_keywords: bool,
    pub nice: bool,
    pub positions: bool,
    pub help: bool,
    pub version: bool,
    /// Sources in command-line order. Never empty after parsing.
    pub inputs: Vec<Input>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flag {
    Names,
    Comments,
    Strings,
    Kind,
    Ignore,
    Search,
    NoKeywords,
    Nice,
    Positions,
    Help,
    Version,
}

impl Flag {
    fn from_long(name: &str) -> Option<Self> {
        let flag = match name {
            "names" => Flag::Names,
            "comments" => Flag::Comments,
            "strings" => Flag::Strings,
            "kind" => Flag::Kind,
            "ignore" => Flag::Ignore,
            "search" => Flag::Search,
            "no-keywords" => Flag::NoKeywords,
            "nice" => Flag::Nice,
            "positions" => Flag::Positions,
            "help" => Flag::Help,
            "version" => Flag::Version,
            _ => return None,
        };
        Some(flag)
    }

    fn from_short(c: char) -> Option<Self> {
        let flag = match c {
            'n' => Flag::Names,
            'c' => Flag::Comments,
            'k' => Flag::Kind,
            'i' => Flag::Ignore,
            's' => Flag::Search,
            'N' => Flag::Nice,
            'p' => Flag::Positions,
            'h' => Flag::Help,
            'V' => Flag::Version,
            _ => return None,
        };
        Some(flag)
    }

    fn takes_value(self) -> bool {
        matches!(self, Flag::Kind | Flag::Ignore | Flag::Search)
    }

    /// Canonical spelling for error messages.
    fn long_name(self) -> &'static str {
        match self {
            Flag::Names => "--names",
            Flag::Comments => "--comments",
            Flag::Strings => "--strings",
            Flag::Kind => "--kind",
            Flag::Ignore => "--ignore",
            Flag::Search => "--search",
            Flag::NoKeywords => "--no-keywords",
            Flag::Nice => "--nice",
            Flag::Positions => "--positions",
            Flag::Help => "--help",
            Flag::Version => "--version",
        }
    }
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = CliOptions::default();
        let mut rest = args.iter();
        let mut only_inputs = false;

        while let Some(arg) = rest.next() {
            if only_inputs || arg == "-" || !arg.starts_with('-') {
                options.inputs.push(Input::from_arg(arg));
            } else if arg == "--" {
                only_inputs = true;
            } else if let Some(long) = arg.strip_prefix("--") {
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };
                let flag = Flag::from_long(name)
                    .ok_or_else(|| CliError::Usage(format!("unknown option '--{name}'")))?;
                let value = match (flag.takes_value(), inline) {
                    (true, Some(value)) => Some(value),
                    (true, None) => Some(next_value(flag, &mut rest)?),
                    (false, None) => None,
                    (false, Some(_)) => {
                        return Err(CliError::Usage(format!(
                            "option '{}' does not take a value",
                            flag.long_name()
                        )))
                    }
                };
                options.apply(flag, value)?;
            } else {
                options.parse_short_cluster(&arg[1..], &mut rest)?;
            }
        }

        if options.inputs.is_empty() {
            options.inputs.push(Input::Stdin);
        }
        if options.nice && options.positions {
            return Err(CliError::Usage(
                "'--nice' and '--positions' cannot be used together".to_string(),
            ));
        }
        Ok(options)
    }

    fn parse_short_cluster<'a>(
        &mut self,
        cluster: &'a str,
        rest: &mut impl Iterator<Item = &'a String>,
    ) -> Result<(), CliError> {
        for (i, c) in cluster.char_indices() {
            let flag = Flag::from_short(c)
                .ok_or_else(|| CliError::Usage(format!("unknown option '-{c}'")))?;
            if !flag.takes_value() {
                self.apply(flag, None)?;
                continue;
            }
            let attached = &cluster[i + c.len_utf8()..];
            let attached = attached.strip_prefix('=').unwrap_or(attached);
            let value = if attached.is_empty() {
                next_value(flag, rest)?
            } else {
                attached
            };
            return self.apply(flag, Some(value));
        }
        Ok(())
    }

    fn apply(&mut self, flag: Flag, value: Option<&str>) -> Result<(), CliError> {
        let value = value.unwrap_or_default();
        match flag {
            Flag::Names => self.kinds |= KindSet::IDENTIFIER,
            Flag::Comments => self.kinds |= KindSet::COMMENT,
            Flag::Strings => self.kinds |= KindSet::STRING,
            Flag::Kind => self.kinds |= KindSet::parse_list(value)?,
            Flag::Ignore => self.ignore.extend(
                value
                    .split(',')
                    .filter(|text| !text.is_empty())
                    .map(str::to_string),
            ),
            Flag::Search => {
                self.search = Some(value.to_string()).filter(|s| !s.is_empty());
            }
            Flag::NoKeywords => self.no_keywords = true,
            Flag::Nice => self.nice = true,
            Flag::Positions => self.positions = true,
            Flag::Help => self.help = true,
            Flag::Version => self.version = true,
        }
        Ok(())
    }

    /// Token filter described by these options.
    pub fn filter(&self) -> TokenFilter {
        TokenFilter::new(self.kinds)
            .with_ignore(self.ignore.iter().map(String::as_str))
            .with_search(self.search.clone())
            .skip_keywords(self.no_keywords)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.nice {
            OutputMode::Nice
        } else if self.positions {
            OutputMode::Positions
        } else {
            OutputMode::Plain
        }
    }
}

fn next_value<'a>(
    flag: Flag,
    rest: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a str, CliError> {
    rest.next()
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingValue {
            option: flag.long_name().to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
