//! Owned, zero-terminated copy of the text being scanned.
//!
//! Scanning code reads `buf[pos]`, `buf[pos + 1]` and `buf[pos + 2]` without
//! comparing against the length first. That is sound because the copy is
//! followed by a zero terminator and at least two more zero bytes; the
//! allocation is then rounded up to a whole number of 64-byte lines.
//!
//! # Encoding Irregularities
//!
//! While copying, the buffer notes anything suggesting the input is not
//! plain UTF-8 script text: byte-order marks (UTF-8, or UTF-16 in raw
//! input), NUL bytes, and invalid UTF-8 (raw input only). These become
//! [`EncodingIssue`]s for the caller to report. None of them stops scanning.

use crate::Cursor;

/// Allocation granularity.
const CACHE_LINE: usize = 64;

/// Zero bytes required after the terminator so two-byte lookahead from the
/// terminator itself stays in bounds.
const LOOKAHEAD: usize = 2;

/// Longest text a buffer holds; offsets are `u32`.
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Zero-terminated, zero-padded source text.
///
/// ```text
/// | source text ... | 0 | 0 0 ... 0 |
/// 0                 len             multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    /// Source length; `buf[source_len]` is the terminator.
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
    truncated: bool,
}

/// One irregularity found while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte offset into the input.
    pub pos: u32,
    /// Length of the offending bytes.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// `EF BB BF` at offset 0.
    Utf8Bom,
    /// `FF FE` at offset 0.
    Utf16LeBom,
    /// `FE FF` at offset 0.
    Utf16BeBom,
    /// A `0x00` byte inside the text.
    InteriorNull,
    /// Bytes that do not decode as UTF-8; scanned as U+FFFD.
    InvalidUtf8,
}

impl EncodingIssueKind {
    /// Short phrase for log messages.
    pub const fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::Utf16LeBom => "UTF-16 (little-endian) byte order mark",
            EncodingIssueKind::Utf16BeBom => "UTF-16 (big-endian) byte order mark",
            EncodingIssueKind::InteriorNull => "null byte",
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8 sequence",
        }
    }
}

impl SourceBuffer {
    /// Copy `source` into a new buffer.
    ///
    /// Inputs over 4 GiB are cut at the last character boundary that fits;
    /// see [`was_truncated`](Self::was_truncated).
    pub fn new(source: &str) -> Self {
        let mut issues = Vec::new();
        detect_bom(source.as_bytes(), &mut issues);
        detect_interior_nulls(source.as_bytes(), &mut issues);
        Self::from_text(source, issues)
    }

    /// Decode raw bytes, replacing invalid UTF-8 with U+FFFD.
    ///
    /// Issue offsets refer to `bytes`. Once a replacement has happened they
    /// no longer line up with offsets into the decoded text; see
    /// [`was_lossy`](Self::was_lossy).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut issues = Vec::new();
        detect_bom(bytes, &mut issues);
        detect_invalid_utf8(bytes, &mut issues);
        detect_interior_nulls(bytes, &mut issues);
        issues.sort_by_key(|issue| issue.pos);
        Self::from_text(&String::from_utf8_lossy(bytes), issues)
    }

    fn from_text(text: &str, encoding_issues: Vec<EncodingIssue>) -> Self {
        Self::from_text_within(text, encoding_issues, MAX_SOURCE_LEN)
    }

    fn from_text_within(text: &str, encoding_issues: Vec<EncodingIssue>, limit: usize) -> Self {
        let len = cut_point(text, limit);
        let capacity = (len + 1 + LOOKAHEAD).next_multiple_of(CACHE_LINE);
        let mut buf = vec![0u8; capacity];
        buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self {
            buf,
            source_len: u32::try_from(len).unwrap_or(0),
            encoding_issues,
            truncated: len < text.len(),
        }
    }

    /// `true` if the input was longer than 4 GiB and only a prefix is kept.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// `true` if invalid UTF-8 was replaced during decoding.
    pub fn was_lossy(&self) -> bool {
        self.encoding_issues
            .iter()
            .any(|issue| issue.kind == EncodingIssueKind::InvalidUtf8)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Decoded text, without the terminator.
    pub fn as_str(&self) -> &str {
        self.cursor().slice(0, self.source_len)
    }

    /// Text, terminator and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Irregularities found during construction, ordered by offset.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

/// Length of the longest prefix of `text` no longer than `limit` that ends
/// on a character boundary.
fn cut_point(text: &str, limit: usize) -> usize {
    if text.len() <= limit {
        return text.len();
    }
    (0..=limit)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

/// UTF-16 marks only show up in raw input; a `&str` never starts with
/// `0xFF` or `0xFE`.
fn detect_bom(input: &[u8], issues: &mut Vec<EncodingIssue>) {
    const MARKS: [(&[u8], EncodingIssueKind); 3] = [
        (&[0xEF, 0xBB, 0xBF], EncodingIssueKind::Utf8Bom),
        (&[0xFF, 0xFE], EncodingIssueKind::Utf16LeBom),
        (&[0xFE, 0xFF], EncodingIssueKind::Utf16BeBom),
    ];
    if let Some((mark, kind)) = MARKS.iter().find(|(mark, _)| input.starts_with(mark)) {
        issues.push(EncodingIssue {
            kind: *kind,
            pos: 0,
            len: u32::try_from(mark.len()).unwrap_or(0),
        });
    }
}

/// Record every maximal invalid UTF-8 sequence, the way
/// `String::from_utf8_lossy` splits them into replacement characters.
fn detect_invalid_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while offset < source.len() {
        let Err(err) = std::str::from_utf8(&source[offset..]) else {
            break;
        };
        let bad_start = offset + err.valid_up_to();
        let bad_len = err.error_len().unwrap_or(source.len() - bad_start);
        if let (Ok(pos), Ok(len)) = (u32::try_from(bad_start), u32::try_from(bad_len)) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InvalidUtf8,
                pos,
                len,
            });
        }
        offset = bad_start + bad_len;
    }
}

fn detect_interior_nulls(input: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(
        memchr::memchr_iter(0, input)
            .filter_map(|offset| u32::try_from(offset).ok())
            .map(|pos| EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            }),
    );
}
