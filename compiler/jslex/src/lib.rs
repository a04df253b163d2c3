//! Command-line front end for `jslex_core`.
//!
//! Reads one or more sources, scans each with a fresh [`Scanner`], filters
//! the tokens, and writes them out one per line (or reflowed with
//! `--nice`, or prefixed with positions).

mod error;
pub mod filter;
pub mod input;
pub mod logging;
pub mod nice;
pub mod options;
pub mod output;

use std::io::{self, BufWriter, Write};

use jslex_core::{LineTable, Scanner, SourceBuffer};
use tracing::{debug, instrument};

pub use error::{CliError, EXIT_IO, EXIT_USAGE};
pub use filter::{KindSet, TokenFilter};
pub use input::Input;
pub use options::{CliOptions, USAGE};
pub use output::{OutputMode, TokenWriter};

/// Scan every input in `options` and write selected tokens to stdout.
///
/// A reader that closes stdout early ends the run successfully.
pub fn run(options: &CliOptions) -> Result<(), CliError> {
    let stdout = io::stdout();
    allow_closed_stdout(scan_inputs(options, BufWriter::new(stdout.lock())).map(drop))
}

/// Write `text` to stdout, as for `--help` and `--version`.
pub fn print_text(text: &str) -> Result<(), CliError> {
    allow_closed_stdout(write_text(io::stdout().lock(), text))
}

/// Write all of `text` to `out` and flush it.
pub fn write_text<W: Write>(mut out: W, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn allow_closed_stdout(result: Result<(), CliError>) -> Result<(), CliError> {
    match result {
        Err(err) if err.is_broken_pipe() => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

/// Scan every input in order and write selected tokens to `out`.
///
/// Stops at the first input that cannot be read. Returns the writer after
/// flushing it.
pub fn scan_inputs<W: Write>(options: &CliOptions, out: W) -> Result<W, CliError> {
    let filter = options.filter();
    let mut writer = TokenWriter::new(out, options.output_mode());
    for input in &options.inputs {
        let buf = input.load()?;
        scan_source(input, &buf, &filter, &mut writer)?;
    }
    Ok(writer.finish()?)
}

#[instrument(level = "debug", skip_all, fields(input = %input))]
fn scan_source<W: Write>(
    input: &Input,
    buf: &SourceBuffer,
    filter: &TokenFilter,
    writer: &mut TokenWriter<W>,
) -> Result<(), CliError> {
    let lines = (writer.mode() == OutputMode::Positions).then(|| LineTable::build(buf.as_str()));
    let mut scanned = 0usize;
    let mut written = 0usize;

    for token in Scanner::new(buf.cursor()) {
        scanned += 1;
        if !filter.accepts(&token) {
            continue;
        }
        written += 1;
        match &lines {
            Some(table) => writer.write_positioned(table.line_col(token.start()), &token)?,
            None => writer.write_token(&token)?,
        }
    }

    debug!(bytes = buf.len(), scanned, written, "scanned");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test fixtures are known to exist")]
mod tests;
