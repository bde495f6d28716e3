//! Byte ranges into the lexed source.

use std::fmt;
use std::ops::Range;

use munchar::Cursor;

/// Half-open byte range `start..end` of the source a lexeme covers.
///
/// Offsets are absolute, so a lexeme after a byte order mark starts at 3 or
/// later.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Empty span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// The input a matcher consumed going from `start` to `end`.
    #[inline]
    pub fn between(start: Cursor<'_>, end: Cursor<'_>) -> Self {
        debug_assert!(start.pos() <= end.pos(), "matchers never move backwards");
        Span::new(start.pos(), end.pos())
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The text this span covers in `source`.
    ///
    /// `None` if the span runs past the end or splits a character, which
    /// means `source` is not the text the span came from.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.to_range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
