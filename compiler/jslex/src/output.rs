//! Writing selected tokens in the chosen format.

use std::io::{self, Write};

use jslex_core::Token;

use crate::nice::NiceBuffer;

/// Output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One token text per line.
    #[default]
    Plain,
    /// `line:col kind text`, one token per line.
    Positions,
    /// Tokens buffered and reflowed into readable lines at the end.
    Nice,
}

/// Writes tokens to `out` according to an [`OutputMode`].
///
/// Call [`TokenWriter::finish`] when done; nice output is only written
/// there, and buffered writers are flushed.
pub struct TokenWriter<W: Write> {
    out: W,
    mode: OutputMode,
    nice: NiceBuffer,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            nice: NiceBuffer::default(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write one token. In positions mode use [`Self::write_positioned`]
    /// instead; this falls back to plain output there.
    pub fn write_token(&mut self, token: &Token<'_>) -> io::Result<()> {
        match self.mode {
            OutputMode::Nice => {
                self.nice.push(token.text);
                Ok(())
            }
            OutputMode::Plain | OutputMode::Positions => writeln!(self.out, "{}", token.text),
        }
    }

    /// Write one token prefixed with its 1-based `(line, col)` and kind.
    pub fn write_positioned(&mut self, (line, col): (u32, u32), token: &Token<'_>) -> io::Result<()> {
        writeln!(self.out, "{line}:{col} {} {}", token.kind, token.text)
    }

    /// Emit any buffered nice output, flush, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.mode == OutputMode::Nice {
            let text = std::mem::take(&mut self.nice).finish();
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
