//! Sequencing, ordered choice, and zero-width assertions.

use super::primitive::Success;
use super::Matcher;
use crate::Cursor;

/// `L` then `R` from where `L` stopped.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<L, R> {
    left: L,
    right: R,
}

impl<L, R> Sequence<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Matcher, R: Matcher> Matcher for Sequence<L, R> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        self.right.munch(self.left.munch(cursor)?)
    }
}

/// Ordered choice: `L`, or else `R` from the original position.
///
/// Left-biased and unmemoized. If `L` succeeds its result stands even when
/// `R` would have matched more; there is no longest-match arbitration.
#[derive(Clone, Copy, Debug)]
pub struct Alternation<L, R> {
    left: L,
    right: R,
}

impl<L, R> Alternation<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Matcher, R: Matcher> Matcher for Alternation<L, R> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        self.left.munch(cursor).or_else(|| self.right.munch(cursor))
    }
}

/// `M` if it matches, otherwise the empty match. Never fails.
pub type Optional<M> = Alternation<M, Success>;

/// Zero-width: succeeds iff `M` fails here.
#[derive(Clone, Copy, Debug)]
pub struct Negation<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for Negation<M> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        match self.matcher.munch(cursor) {
            Some(_) => None,
            None => Some(cursor),
        }
    }
}

/// Zero-width: succeeds iff `M` matches here.
#[derive(Clone, Copy, Debug)]
pub struct Lookahead<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for Lookahead<M> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        self.matcher.munch(cursor).map(|_| cursor)
    }
}

/// `left` followed by `right`. For longer chains use [`seq!`](crate::seq!).
pub const fn seq<L: Matcher, R: Matcher>(left: L, right: R) -> Sequence<L, R> {
    Sequence::new(left, right)
}

/// `left`, or else `right`. For longer chains use [`alt!`](crate::alt!).
pub const fn alt<L: Matcher, R: Matcher>(left: L, right: R) -> Alternation<L, R> {
    Alternation::new(left, right)
}

/// Optionally `m`.
pub const fn opt<M: Matcher>(m: M) -> Optional<M> {
    Alternation::new(m, Success)
}

/// Succeed without consuming iff `m` does not match.
pub const fn negate<M: Matcher>(m: M) -> Negation<M> {
    Negation { matcher: m }
}

/// Succeed without consuming iff `m` matches.
pub const fn lookahead<M: Matcher>(m: M) -> Lookahead<M> {
    Lookahead { matcher: m }
}

#[cfg(test)]
mod tests;
