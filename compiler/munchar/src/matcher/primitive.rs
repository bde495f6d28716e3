//! Atomic recognizers.
//!
//! Every consuming primitive treats EOF as ordinary failure. The
//! single-character primitives ([`AnyChar`], [`Char`], [`Class`],
//! [`Predicate`]) test the byte under the cursor and, on success, step over
//! the whole UTF-8 character it starts, so matches always end on a
//! character boundary.

use super::Matcher;
use crate::Cursor;

/// Always succeeds without consuming.
#[derive(Clone, Copy, Debug, Default)]
pub struct Success;

impl Matcher for Success {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        Some(cursor)
    }
}

/// Always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct Failure;

impl Matcher for Failure {
    #[inline]
    fn munch<'a>(&self, _cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        None
    }
}

/// Any single character.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyChar;

impl Matcher for AnyChar {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (!cursor.is_eof()).then(|| cursor.next_char())
    }
}

/// Exactly the byte `c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Char(pub u8);

impl Matcher for Char {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        cursor.is_at(self.0).then(|| cursor.next_char())
    }
}

/// Exactly the byte string `s`.
///
/// Fails without partial consumption if the buffer ends first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal<S>(pub S);

impl<S: AsRef<[u8]>> Matcher for Literal<S> {
    #[inline]
    fn munch<'a>(&self, mut cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let bytes = self.0.as_ref();
        if !cursor.starts_with(bytes) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "a literal that matched is no longer than the source, which fits in u32"
        )]
        let len = bytes.len() as u32;
        cursor.advance_n(len);
        Some(cursor)
    }
}

/// Any one byte from the set `s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Class<S>(pub S);

impl<S: AsRef<[u8]>> Matcher for Class<S> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        if cursor.is_eof() {
            return None;
        }
        memchr::memchr(cursor.current(), self.0.as_ref()).map(|_| cursor.next_char())
    }
}

/// Any character whose lead byte satisfies `p`.
#[derive(Clone, Copy, Debug)]
pub struct Predicate<F = fn(u8) -> bool>(pub F);

impl<F: Fn(u8) -> bool> Matcher for Predicate<F> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (!cursor.is_eof() && (self.0)(cursor.current())).then(|| cursor.next_char())
    }
}

/// Always succeed. See [`Success`].
pub const fn succeed() -> Success {
    Success
}

/// Always fail. See [`Failure`].
pub const fn fail() -> Failure {
    Failure
}

/// Any character. See [`AnyChar`].
pub const fn any_char() -> AnyChar {
    AnyChar
}

/// Exactly the byte `c`. See [`Char`].
pub const fn chr(c: u8) -> Char {
    Char(c)
}

/// Exactly `s`. See [`Literal`].
pub const fn lit<S: AsRef<[u8]>>(s: S) -> Literal<S> {
    Literal(s)
}

/// One byte from `set`. See [`Class`].
pub const fn class<S: AsRef<[u8]>>(set: S) -> Class<S> {
    Class(set)
}

/// One character whose lead byte satisfies `p`. See [`Predicate`].
pub const fn pred<F: Fn(u8) -> bool>(p: F) -> Predicate<F> {
    Predicate(p)
}
