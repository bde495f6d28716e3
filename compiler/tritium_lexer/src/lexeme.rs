//! Lexemes and the stream a tokenization pass produces.

use std::fmt::{self, Write as _};

use crate::{Span, TokenKind};

/// One token: a kind and the span of source it covers.
///
/// A lexeme does not own its text; slice it out of the source it was
/// produced from with [`text`](Self::text).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub span: Span,
}

const _: () = assert!(std::mem::size_of::<Lexeme>() == 12);

impl Lexeme {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Lexeme { kind, span }
    }

    /// The lexeme's text in `source`.
    ///
    /// Empty if `source` is not the text this lexeme was produced from.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source).unwrap_or_default()
    }

    /// Debug rendering: `[KIND, text]`.
    pub fn render(&self, source: &str) -> String {
        format!("[{}, {}]", self.kind, self.text(source))
    }
}

/// The ordered lexemes of one tokenization pass.
///
/// Spans are non-empty, strictly increasing, and non-overlapping.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct LexemeStream {
    lexemes: Vec<Lexeme>,
}

impl LexemeStream {
    /// Create a new empty stream.
    #[inline]
    pub fn new() -> Self {
        LexemeStream {
            lexemes: Vec::new(),
        }
    }

    /// Create a new stream with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        LexemeStream {
            lexemes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, lexeme: Lexeme) {
        debug_assert!(!lexeme.span.is_empty(), "lexemes are never empty");
        debug_assert!(
            self.lexemes
                .last()
                .map_or(true, |prev| prev.span.end <= lexeme.span.start),
            "lexemes are emitted in order"
        );
        self.lexemes.push(lexeme);
    }

    /// Get the number of lexemes.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Get lexeme at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Lexeme> {
        self.lexemes.get(index)
    }

    /// Get a slice of all lexemes.
    #[inline]
    pub fn as_slice(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// Iterate over lexemes.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Lexeme> {
        self.lexemes.iter()
    }

    /// Iterate over just the kinds.
    #[inline]
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.lexemes.iter().map(|l| l.kind)
    }

    /// Consume into Vec.
    #[inline]
    pub fn into_vec(self) -> Vec<Lexeme> {
        self.lexemes
    }

    /// One `[KIND, text]` line per lexeme, each ending in `\n`.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::with_capacity(self.lexemes.len() * 16);
        for lexeme in &self.lexemes {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "[{}, {}]", lexeme.kind, lexeme.text(source));
        }
        out
    }
}

impl fmt::Debug for LexemeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LexemeStream({} lexemes)", self.lexemes.len())
    }
}

impl std::ops::Index<usize> for LexemeStream {
    type Output = Lexeme;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.lexemes[index]
    }
}

impl IntoIterator for LexemeStream {
    type Item = Lexeme;
    type IntoIter = std::vec::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}

impl<'a> IntoIterator for &'a LexemeStream {
    type Item = &'a Lexeme;
    type IntoIter = std::slice::Iter<'a, Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.iter()
    }
}
