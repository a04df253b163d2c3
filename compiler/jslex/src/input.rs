//! Reading sources from files or stdin.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

use jslex_core::SourceBuffer;
use tracing::warn;

use crate::CliError;

/// Where one source comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `-` names stdin; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, CliError> {
        let result = match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes).map(|_| bytes)
            }
            Input::Path(path) => std::fs::read(path),
        };
        result.map_err(|source| CliError::Read {
            path: self.to_string(),
            source,
        })
    }

    /// Read and decode this input, logging any encoding irregularities.
    pub fn load(&self) -> Result<SourceBuffer, CliError> {
        let bytes = self.read_bytes()?;
        let buf = SourceBuffer::from_bytes(&bytes);
        report_encoding_issues(self, &buf);
        if buf.was_truncated() {
            warn!(
                input = %self,
                bytes = bytes.len(),
                kept = buf.len(),
                "input exceeds 4 GiB; only the first {} bytes are scanned",
                buf.len()
            );
        }
        Ok(buf)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn report_encoding_issues(input: &Input, buf: &SourceBuffer) {
    for issue in buf.encoding_issues() {
        warn!(
            input = %input,
            pos = issue.pos,
            len = issue.len,
            "{}",
            issue.kind.description()
        );
    }
    if buf.was_lossy() {
        warn!(input = %input, "invalid UTF-8 replaced with U+FFFD; offsets follow the decoded text");
    }
}
