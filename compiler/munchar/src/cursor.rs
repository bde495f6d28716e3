//! Positions into a [`SourceBuffer`](crate::SourceBuffer).
//!
//! A matcher receives a cursor and hands back a later one. The buffer never
//! changes, so a cursor is just a pointer to it plus an offset, and it is
//! `Copy`: an alternative that fails drops its copy while the caller keeps
//! the one it started from. Backtracking needs no API.
//!
//! End of input is `pos >= source_len`. The byte there is the `0x00`
//! sentinel, so reading [`Cursor::current`] at EOF is always in bounds, but
//! a NUL inside the content reads the same way. Test [`Cursor::is_eof`]
//! before trusting a `0x00`.

/// A read position in a sentinel-terminated buffer.
///
/// Only [`SourceBuffer`](crate::SourceBuffer) creates cursors, which upholds
/// `buf[source_len] == 0x00` with zero padding after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

// Fat slice pointer plus two offsets.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len() && buf[source_len as usize] == 0,
            "buffer must end in a 0x00 sentinel"
        );
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte under the cursor; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Whether the content byte under the cursor is `byte`.
    ///
    /// Unlike comparing [`current`](Self::current), never true at EOF, so
    /// `is_at(0)` finds only interior NULs.
    #[inline]
    pub fn is_at(&self, byte: u8) -> bool {
        !self.is_eof() && self.current() == byte
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Byte offset from the start of the buffer.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Content from the cursor to EOF.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Whether the remaining content begins with `bytes`. Empty `bytes`
    /// match anywhere, EOF included.
    #[inline]
    pub fn starts_with(&self, bytes: &[u8]) -> bool {
        self.remaining().starts_with(bytes)
    }

    /// Move one byte forward.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Move `n` bytes forward.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Move past the UTF-8 character whose lead byte is under the cursor.
    ///
    /// A lead byte promising more bytes than remain stops at EOF. A stray
    /// continuation or invalid byte counts as one character.
    #[inline]
    pub fn advance_char(&mut self) {
        let end = self.pos + Self::utf8_char_width(self.current());
        self.pos = end.min(self.source_len.max(self.pos));
    }

    /// A copy moved past one character. See [`advance_char`](Self::advance_char).
    #[inline]
    #[must_use]
    pub fn next_char(mut self) -> Self {
        self.advance_char();
        self
    }

    /// Width in bytes of the UTF-8 character that `lead` starts.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xF0..=0xF7 => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        }
    }
}
