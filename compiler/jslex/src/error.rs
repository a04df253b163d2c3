//! Errors surfaced by the command-line front end.

use std::io;

use jslex_core::ParseKindError;
use thiserror::Error;

/// Exit status for usage errors (bad flags, unknown kind labels).
pub const EXIT_USAGE: u8 = 2;
/// Exit status for I/O failures.
pub const EXIT_IO: u8 = 1;

/// Everything that can stop a `jslex` run.
///
/// Malformed source is never an error; the scanner always produces tokens.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),

    #[error("option '{option}' requires a value")]
    MissingValue { option: String },

    #[error("{}", describe_read(.path, .source))]
    Read { path: String, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::UnknownKind(_) | CliError::MissingValue { .. } => {
                EXIT_USAGE
            }
            CliError::Read { .. } | CliError::Write(_) => EXIT_IO,
        }
    }

    /// `true` when stdout was closed by the reader, which ends output
    /// without failing the run.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

fn describe_read(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {error}"),
    }
}
