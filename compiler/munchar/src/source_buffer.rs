//! The owned input every [`Cursor`] points into.
//!
//! Content is copied into a zero-filled allocation at least one byte longer
//! than the source, so there is always a `0x00` sentinel after the last
//! content byte and reading the byte under a cursor at EOF never panics.
//! The allocation is a whole number of 64-byte cache lines.
//!
//! EOF comes from the recorded length, not from finding a `0x00`. Input with
//! embedded NULs therefore matches exactly as if it were length-delimited.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// U+FEFF in UTF-8.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Source text plus sentinel and padding.
///
/// ```text
///  content        sentinel   padding
/// [b0 b1 ... bn-1][0x00]     [0x00 ...]   total: multiple of 64
///                  ^ source_len
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    has_bom: bool,
}

impl SourceBuffer {
    /// Copy `source` into a fresh sentinel-terminated buffer.
    ///
    /// Offsets are `u32`. A source of 4 GiB or more still builds, but its
    /// visible length saturates at `u32::MAX`; the Tritium lexer rejects such
    /// input before getting here.
    pub fn new(source: &str) -> Self {
        let content = source.as_bytes();
        let capacity = (content.len() + 1).next_multiple_of(CACHE_LINE);

        let mut buf = vec![0u8; capacity];
        buf[..content.len()].copy_from_slice(content);

        SourceBuffer {
            buf,
            source_len: u32::try_from(content.len()).unwrap_or(u32::MAX),
            has_bom: content.starts_with(&UTF8_BOM),
        }
    }

    /// The content, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// A cursor at the first byte after a leading BOM, if any.
    pub fn content_cursor(&self) -> Cursor<'_> {
        let mut cursor = self.cursor();
        if self.has_bom {
            cursor.advance_n(3);
        }
        cursor
    }

    /// Content length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Whether the content opens with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    /// 1-based `(line, column)` of `offset`, counting columns in characters.
    ///
    /// Offsets past the end clamp to the end. Linear in `offset`; meant for
    /// diagnostics, not per-lexeme bookkeeping.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both counts are at most source_len, a u32"
    )]
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let prefix = &self.as_bytes()[..offset.min(self.source_len) as usize];
        let line = memchr::memchr_iter(b'\n', prefix).count() + 1;
        let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
        // Count lead bytes only; continuation bytes are 0b10xx_xxxx.
        let column = prefix[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count()
            + 1;
        (line as u32, column as u32)
    }
}
