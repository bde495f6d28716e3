//! The matcher algebra.
//!
//! A [`Matcher`] is a pure function from a [`Cursor`] to either an advanced
//! cursor (success) or `None` (failure). Matchers hold only the parameters
//! of their own test (a literal, a class, a predicate, or sub-matchers), so
//! they are reentrant and can be shared by any number of concurrent scans.
//!
//! Composition always yields another `Matcher`, so grammars of arbitrary
//! depth are built by nesting:
//!
//! ```
//! use munchar::{alt, chr, class, one_or_more, opt, seq, zero_or_more, Matcher};
//! use munchar::lexemes::digit;
//!
//! let number = seq![
//!     opt(class("+-")),
//!     alt![
//!         seq![zero_or_more(digit()), chr(b'.'), one_or_more(digit())],
//!         one_or_more(digit()),
//!     ],
//! ];
//! assert_eq!(number.match_prefix("-12.5em"), Some("-12.5"));
//! ```
//!
//! Concrete combinator types monomorphize, so a grammar assembled from them
//! compiles to straight-line code. When rules of different shapes must live
//! side by side (a dispatch table, a struct of rules), [`Matcher::boxed`]
//! erases the type into a [`Rule`].

use std::sync::Arc;

use crate::{Cursor, SourceBuffer};

mod combinator;
mod primitive;
mod repeat;

pub use combinator::{
    alt, lookahead, negate, opt, seq, Alternation, Lookahead, Negation, Optional, Sequence,
};
pub use primitive::{
    any_char, chr, class, fail, lit, pred, succeed, AnyChar, Char, Class, Failure, Literal,
    Predicate, Success,
};
pub use repeat::{
    at_least, at_most, between, exactly, fewer_than, more_than, one_or_more, zero_or_more, Repeat,
};

/// A recognizer over a sentinel-terminated buffer.
///
/// # Contract
///
/// - On success the returned cursor is never behind the input cursor.
/// - Failure is `None`; no failing matcher consumes anything from the
///   caller's point of view (the caller still holds its own cursor).
/// - Repeated application to the same cursor yields the same result.
pub trait Matcher {
    /// Try to match at `cursor`, returning the cursor just past the match.
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>>;

    /// Match against the start of `source`, returning the matched prefix.
    ///
    /// Builds a throwaway [`SourceBuffer`]; for repeated scanning over one
    /// input, create the buffer once and call [`munch`](Self::munch).
    fn match_prefix<'s>(&self, source: &'s str) -> Option<&'s str> {
        let buf = SourceBuffer::new(source);
        let end = self.munch(buf.cursor())?.pos();
        source.get(..end as usize)
    }

    /// `self` followed by `next`. See [`seq`].
    fn then<R: Matcher>(self, next: R) -> Sequence<Self, R>
    where
        Self: Sized,
    {
        Sequence::new(self, next)
    }

    /// `self`, or else `other` from the same position. See [`alt`].
    fn or<R: Matcher>(self, other: R) -> Alternation<Self, R>
    where
        Self: Sized,
    {
        Alternation::new(self, other)
    }

    /// Erase the concrete type so heterogeneous rules can share a container.
    fn boxed(self) -> Rule
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased, thread-shareable matcher.
pub type Rule = Box<dyn Matcher + Send + Sync>;

impl<M: Matcher + ?Sized> Matcher for &M {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (**self).munch(cursor)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (**self).munch(cursor)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (**self).munch(cursor)
    }
}

/// Adapter turning a function or closure into a [`Matcher`].
///
/// For recognizers that are clearer written by hand than composed, such as
/// a region with balanced nesting.
#[derive(Clone, Copy, Debug)]
pub struct FnMatcher<F> {
    f: F,
}

/// Wrap a function of a cursor as a matcher.
pub fn from_fn<F>(f: F) -> FnMatcher<F>
where
    F: for<'a> Fn(Cursor<'a>) -> Option<Cursor<'a>>,
{
    FnMatcher { f }
}

impl<F> Matcher for FnMatcher<F>
where
    F: for<'a> Fn(Cursor<'a>) -> Option<Cursor<'a>>,
{
    #[inline]
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        (self.f)(cursor)
    }
}
