//! Lexer error types.
//!
//! Errors follow the WHERE+WHAT shape:
//! - WHERE: `span` plus 1-based `line`/`column` locating the failure
//! - WHAT: `kind` describing what went wrong
//!
//! An `excerpt` of the unconsumed input rides along for diagnostics.
//! Lexing stops at the first error; there is no recovery.

use munchar::SourceBuffer;

use crate::Span;

/// Most characters of unconsumed input carried in an error.
pub const EXCERPT_CHARS: usize = 10;

/// A fatal lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{line}:{column}: {kind}")]
pub struct LexError {
    /// WHERE the error occurred: the offending position, extended over
    /// whatever a failed candidate had started to consume.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column (in characters) of `span.start`.
    pub column: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// Up to [`EXCERPT_CHARS`] characters of input starting at `span.start`.
    pub excerpt: String,
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A quote opened a string that never closes.
    #[error("unterminated string")]
    UnterminatedString,
    /// `/` started neither a comment nor a regular expression, or a
    /// backquoted regular expression never closes.
    #[error("malformed comment or regular expression")]
    MalformedRegexOrComment,
    /// `@` followed by something other than a known directive.
    #[error("unrecognized directive")]
    UnrecognizedDirective,
    /// `%` not followed by a name.
    #[error("malformed local variable name")]
    MalformedLocalVariable,
    /// No rule matches here.
    #[error("unrecognized lexeme")]
    UnrecognizedLexeme,
    /// The input is too long for 32-bit offsets.
    #[error("source too large ({len} bytes); at most {max} bytes are supported", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    fn at(buf: &SourceBuffer, span: Span, kind: LexErrorKind) -> Self {
        let (line, column) = buf.line_col(span.start);
        LexError {
            span,
            line,
            column,
            kind,
            excerpt: excerpt(buf.as_bytes(), span.start),
        }
    }

    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(buf: &SourceBuffer, span: Span) -> Self {
        Self::at(buf, span, LexErrorKind::UnterminatedString)
    }

    /// Create a malformed comment/regex error.
    #[cold]
    pub fn malformed_regex_or_comment(buf: &SourceBuffer, span: Span) -> Self {
        Self::at(buf, span, LexErrorKind::MalformedRegexOrComment)
    }

    /// Create an unrecognized directive error.
    #[cold]
    pub fn unrecognized_directive(buf: &SourceBuffer, span: Span) -> Self {
        Self::at(buf, span, LexErrorKind::UnrecognizedDirective)
    }

    /// Create a malformed local variable error.
    #[cold]
    pub fn malformed_local_variable(buf: &SourceBuffer, span: Span) -> Self {
        Self::at(buf, span, LexErrorKind::MalformedLocalVariable)
    }

    /// Create an unrecognized lexeme error.
    #[cold]
    pub fn unrecognized_lexeme(buf: &SourceBuffer, span: Span) -> Self {
        Self::at(buf, span, LexErrorKind::UnrecognizedLexeme)
    }

    /// Create a source-too-large error. Reported before any scanning, so it
    /// has no meaningful position.
    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::point(0),
            line: 1,
            column: 1,
            kind: LexErrorKind::SourceTooLarge { len },
            excerpt: String::new(),
        }
    }
}

/// Up to [`EXCERPT_CHARS`] characters of `bytes` from `offset`.
fn excerpt(bytes: &[u8], offset: u32) -> String {
    let start = (offset as usize).min(bytes.len());
    // A UTF-8 character is at most 4 bytes.
    let end = (start + EXCERPT_CHARS * 4).min(bytes.len());
    String::from_utf8_lossy(&bytes[start..end])
        .chars()
        .take(EXCERPT_CHARS)
        .collect()
}
