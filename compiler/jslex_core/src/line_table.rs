//! Byte offset to line/column conversion.
//!
//! Tokens carry byte spans. Humans want `line:col`. [`LineTable`] records
//! where each line starts once, then answers lookups by binary search.

use crate::Span;

/// Line start offsets for one source text.
///
/// Lines are split on `\n` only; a `\r` before it belongs to the earlier
/// line. Lines and columns are 1-based, and columns count characters, not
/// bytes.
///
/// ```
/// use jslex_core::LineTable;
///
/// let table = LineTable::build("let a;\nlet \u{3bb} = a;");
/// assert_eq!(table.line_col(0), (1, 1));
/// assert_eq!(table.line_col(7), (2, 1));
/// assert_eq!(table.line_col(14), (2, 7));
/// ```
#[derive(Clone, Debug)]
pub struct LineTable<'src> {
    source: &'src str,
    /// `starts[i]` is the byte offset where line `i + 1` begins.
    starts: Vec<u32>,
}

impl<'src> LineTable<'src> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is bounded by u32 spans"
    )]
    pub fn build(source: &'src str) -> Self {
        let mut starts = vec![0u32];
        starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| (i + 1) as u32));
        Self { source, starts }
    }

    /// 1-based line containing `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds source length"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32 + 1
    }

    /// 1-based `(line, column)` for `offset`. Offsets past the end clamp to
    /// the end of the source.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.starts[(line - 1) as usize] as usize;
        let end = (offset as usize).min(self.source.len());
        let col = self
            .source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Position of the first byte of `span`.
    pub fn span_start(&self, span: Span) -> (u32, u32) {
        self.line_col(span.start)
    }

    /// Byte offset where 1-based `line` begins, or `None` if out of range.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.starts.get(idx as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
