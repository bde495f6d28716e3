//! Greedy bounded and unbounded repetition.
//!
//! Every repetition form is one [`Repeat`] with a `[min, max]` window.
//! Matching is greedy and never backtracks into fewer repetitions: it takes
//! as many as it can (up to `max`) and then succeeds iff it took at least
//! `min`.

use super::Matcher;
use crate::Cursor;

/// Upper bound meaning "no limit".
const UNBOUNDED: u32 = u32::MAX;

/// `M` applied between `min` and `max` times, greedily.
///
/// A repetition that succeeds without consuming ends the loop and counts
/// for all remaining repetitions: the matcher is deterministic, so every
/// further application would produce the same empty match.
#[derive(Clone, Copy, Debug)]
pub struct Repeat<M> {
    matcher: M,
    min: u32,
    max: u32,
}

impl<M> Repeat<M> {
    /// Fewest repetitions accepted.
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Most repetitions attempted, or `None` if unbounded.
    pub const fn max(&self) -> Option<u32> {
        if self.max == UNBOUNDED {
            None
        } else {
            Some(self.max)
        }
    }
}

impl<M: Matcher> Matcher for Repeat<M> {
    fn munch<'a>(&self, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
        let mut current = cursor;
        let mut count = 0u32;
        while count < self.max {
            match self.matcher.munch(current) {
                Some(next) if next.pos() == current.pos() => return Some(current),
                Some(next) => {
                    current = next;
                    count += 1;
                }
                None => break,
            }
        }
        (count >= self.min).then_some(current)
    }
}

const fn repeat<M: Matcher>(matcher: M, min: u32, max: u32) -> Repeat<M> {
    Repeat { matcher, min, max }
}

/// `*m`: as many as possible, possibly none. Never fails.
pub const fn zero_or_more<M: Matcher>(m: M) -> Repeat<M> {
    repeat(m, 0, UNBOUNDED)
}

/// `+m`: at least one, then as many as possible.
pub const fn one_or_more<M: Matcher>(m: M) -> Repeat<M> {
    repeat(m, 1, UNBOUNDED)
}

/// Exactly `n` times.
pub const fn exactly<M: Matcher>(m: M, n: u32) -> Repeat<M> {
    repeat(m, n, n)
}

/// `n` or more times.
pub const fn at_least<M: Matcher>(m: M, n: u32) -> Repeat<M> {
    repeat(m, n, UNBOUNDED)
}

/// More than `n` times (at least `n + 1`).
pub const fn more_than<M: Matcher>(m: M, n: u32) -> Repeat<M> {
    repeat(m, n.saturating_add(1), UNBOUNDED)
}

/// Up to `n` times. Never fails.
pub const fn at_most<M: Matcher>(m: M, n: u32) -> Repeat<M> {
    repeat(m, 0, n)
}

/// Fewer than `n` times (at most `n - 1`).
///
/// `fewer_than(m, 0)` can never be satisfied and always fails.
pub const fn fewer_than<M: Matcher>(m: M, n: u32) -> Repeat<M> {
    match n {
        0 => repeat(m, 1, 0),
        _ => repeat(m, 0, n - 1),
    }
}

/// Between `a` and `b` times inclusive, in either order.
pub const fn between<M: Matcher>(m: M, a: u32, b: u32) -> Repeat<M> {
    if a <= b {
        repeat(m, a, b)
    } else {
        repeat(m, b, a)
    }
}
