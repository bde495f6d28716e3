//! Composable matchers for hand-assembled lexers.
//!
//! `munchar` recognizes lexemes by composing small matchers: primitives
//! (a byte, a literal, a class, a predicate) combined with sequence, ordered
//! choice, repetition, and zero-width assertions. A matcher only answers
//! "does this match here, and where does it end?"; driving the scan,
//! classifying lexemes, and reporting errors belong to the lexer built on
//! top.
//!
//! # Architecture
//!
//! - [`SourceBuffer`] owns a sentinel-terminated copy of the input.
//! - [`Cursor`] is a `Copy` position into that buffer. Matchers take a
//!   cursor and return an advanced one, so backtracking is just keeping the
//!   old cursor.
//! - [`Matcher`] is the single trait every recognizer implements. Concrete
//!   combinator types monomorphize; [`Rule`] erases them when needed.
//! - [`lexemes`] collects rules most grammars start from.

mod cursor;
pub mod lexemes;
mod matcher;
mod source_buffer;

pub use cursor::Cursor;
pub use matcher::{
    alt, any_char, at_least, at_most, between, chr, class, exactly, fail, fewer_than, from_fn,
    lit, lookahead, more_than, negate, one_or_more, opt, pred, seq, succeed, zero_or_more,
    Alternation, AnyChar, Char, Class, Failure, FnMatcher, Literal, Lookahead, Matcher, Negation,
    Optional, Predicate, Repeat, Rule, Sequence, Success,
};
pub use source_buffer::SourceBuffer;

/// Sequence of two or more matchers, nested to the right.
///
/// `seq![a, b, c]` is `seq(a, seq(b, c))`.
#[macro_export]
macro_rules! seq {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Sequence::new($first, $crate::seq!($($rest),+))
    };
}

/// Ordered choice among two or more matchers, tried left to right.
///
/// `alt![a, b, c]` is `alt(a, alt(b, c))`.
#[macro_export]
macro_rules! alt {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Alternation::new($first, $crate::alt!($($rest),+))
    };
}
