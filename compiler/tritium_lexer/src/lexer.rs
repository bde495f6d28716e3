//! The tokenizer driver.
//!
//! One forward cursor walks the buffer. The byte under it selects a small
//! dispatch branch; within a branch, candidate rules are tried in a fixed
//! order and the first match is committed. Whitespace, `;`, and (by default)
//! comments are consumed without emitting anything. If nothing in the branch
//! matches, the pass stops with a [`LexError`]: there is no recovery and no
//! partial result.

use std::fmt;
use std::sync::OnceLock;

use munchar::{Cursor, Matcher, SourceBuffer};

use crate::grammar::{first_match, Grammar};
use crate::{CommentPolicy, LexError, Lexeme, LexemeStream, LexerConfig, Span, TokenKind};

/// A configured Tritium tokenizer.
///
/// The grammar is built once in [`Lexer::new`] and never mutated, so one
/// lexer can tokenize any number of inputs, from any number of threads.
pub struct Lexer {
    config: LexerConfig,
    grammar: Grammar,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        Lexer {
            config,
            grammar: Grammar::new(config.strings),
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenize `source` completely, or report the first lexical error.
    ///
    /// A leading UTF-8 byte order mark is skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn tokenize(&self, source: &str) -> Result<LexemeStream, LexError> {
        if u32::try_from(source.len()).is_err() {
            let err = LexError::source_too_large(source.len());
            tracing::debug!(kind = ?err.kind, "lex error");
            return Err(err);
        }

        let buf = SourceBuffer::new(source);
        let mut scan = Scan {
            lexer: self,
            buf: &buf,
            cursor: buf.content_cursor(),
            // Tritium averages well over four bytes per lexeme.
            stream: LexemeStream::with_capacity(source.len() / 4),
            awaiting_import_operand: false,
        };

        while !scan.cursor.is_eof() {
            if let Err(err) = scan.step() {
                tracing::debug!(kind = ?err.kind, offset = err.span.start, "lex error");
                return Err(err);
            }
        }

        tracing::debug!(lexemes = scan.stream.len(), "tokenized");
        Ok(scan.stream)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(LexerConfig::default())
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Tokenize with the default configuration.
///
/// The default lexer is built on first use and shared afterwards.
pub fn tokenize(source: &str) -> Result<LexemeStream, LexError> {
    static DEFAULT: OnceLock<Lexer> = OnceLock::new();
    DEFAULT.get_or_init(Lexer::default).tokenize(source)
}

/// State of one tokenization pass.
struct Scan<'l, 'b> {
    lexer: &'l Lexer,
    buf: &'b SourceBuffer,
    cursor: Cursor<'b>,
    stream: LexemeStream,
    /// The last lexeme was `@import` and only whitespace has followed.
    awaiting_import_operand: bool,
}

impl<'b> Scan<'_, 'b> {
    /// Consume exactly one lexeme, or one run of skippable input.
    fn step(&mut self) -> Result<(), LexError> {
        let start = self.cursor;
        let lexer = self.lexer;
        let g = &lexer.grammar;
        let byte = start.current();

        if self.awaiting_import_operand && !is_blank(byte) {
            self.awaiting_import_operand = false;
            if let Some(end) = self.import_path(start) {
                self.emit(TokenKind::Path, start, end);
                return Ok(());
            }
        }

        match byte {
            b';' => self.skip_byte(),

            b if is_blank(b) => self.skip_to(g.spaces.munch(start)),

            b'/' => {
                if let Some(end) = g
                    .line_comment
                    .munch(start)
                    .or_else(|| g.block_comment.munch(start))
                {
                    self.comment(start, end);
                } else if let Some(end) = g.slash_regexp.munch(start) {
                    self.emit(TokenKind::Regexp, start, end);
                } else {
                    return Err(LexError::malformed_regex_or_comment(
                        self.buf,
                        self.rest_span(start),
                    ));
                }
            }

            b'#' => match g.hash_comment.munch(start) {
                Some(end) => self.comment(start, end),
                None => return Err(LexError::unrecognized_lexeme(self.buf, char_span(start))),
            },

            b'@' => match first_match(&g.directives, start) {
                Some((kind, end)) => {
                    self.emit(kind, start, end);
                    self.awaiting_import_operand =
                        kind == TokenKind::Import && lexer.config.import_paths;
                }
                None => {
                    return Err(LexError::unrecognized_directive(self.buf, char_span(start)));
                }
            },

            b'"' | b'\'' => match g.string.munch(start) {
                Some(end) => self.emit(TokenKind::String, start, end),
                None => {
                    return Err(LexError::unterminated_string(self.buf, self.rest_span(start)));
                }
            },

            b'`' => match g.backquote_regexp.munch(start) {
                Some(end) => self.emit(TokenKind::Regexp, start, end),
                None => {
                    return Err(LexError::malformed_regex_or_comment(
                        self.buf,
                        self.rest_span(start),
                    ));
                }
            },

            b'+' => self.single(TokenKind::Plus),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'.' => self.single(TokenKind::Dot),
            b',' => self.single(TokenKind::Comma),
            b'=' => self.single(TokenKind::Equal),

            b'$' => {
                if let Some(end) = g.global_var.munch(start) {
                    self.emit(TokenKind::GVar, start, end);
                } else if let Some(end) = g.identifier.munch(start) {
                    // A bare run of `$`.
                    self.emit(TokenKind::Id, start, end);
                } else {
                    return Err(LexError::unrecognized_lexeme(self.buf, char_span(start)));
                }
            }

            b'%' => match g.local_var.munch(start) {
                Some(end) => self.emit(TokenKind::LVar, start, end),
                None => {
                    return Err(LexError::malformed_local_variable(self.buf, char_span(start)));
                }
            },

            _ => match first_match(&g.fallback, start) {
                Some((kind, end)) => self.emit(kind, start, end),
                None => return Err(LexError::unrecognized_lexeme(self.buf, char_span(start))),
            },
        }
        Ok(())
    }

    /// An unquoted `@import` operand, unless it opens a string or comment.
    fn import_path(&self, start: Cursor<'b>) -> Option<Cursor<'b>> {
        let opens_other = matches!(start.current(), b'"' | b'\'')
            || start.starts_with(b"//")
            || start.starts_with(b"/*");
        if opens_other {
            return None;
        }
        self.lexer.grammar.path.munch(start)
    }

    fn emit(&mut self, kind: TokenKind, start: Cursor<'b>, end: Cursor<'b>) {
        let span = Span::between(start, end);
        tracing::trace!(kind = %kind, start = span.start, end = span.end, "lexeme");
        self.stream.push(Lexeme::new(kind, span));
        self.cursor = end;
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.cursor;
        self.emit(kind, start, start.next_char());
    }

    /// Skip a comment, or emit it without its line break.
    fn comment(&mut self, start: Cursor<'b>, end: Cursor<'b>) {
        match self.lexer.config.comments {
            CommentPolicy::Discard => self.cursor = end,
            CommentPolicy::Emit => {
                let text = &self.buf.as_bytes()[start.pos() as usize..end.pos() as usize];
                let trimmed = text
                    .strip_suffix(b"\r\n")
                    .or_else(|| text.strip_suffix(b"\n"))
                    .unwrap_or(text);
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "a comment is no longer than the source, which fits in u32"
                )]
                let span = Span::new(start.pos(), start.pos() + trimmed.len() as u32);
                tracing::trace!(kind = %TokenKind::Comment, start = span.start, end = span.end, "lexeme");
                self.stream.push(Lexeme::new(TokenKind::Comment, span));
                self.cursor = end;
            }
        }
    }

    fn skip_byte(&mut self) {
        self.cursor.advance();
    }

    fn skip_to(&mut self, end: Option<Cursor<'b>>) {
        match end {
            Some(end) => self.cursor = end,
            None => self.cursor.advance(),
        }
    }

    /// From `start` to the end of input: how far an unclosed construct runs.
    fn rest_span(&self, start: Cursor<'b>) -> Span {
        Span::new(start.pos(), self.buf.len())
    }
}

/// Whitespace that separates lexemes.
#[inline]
fn is_blank(byte: u8) -> bool {
    munchar::lexemes::is_whitespace(byte)
}

/// The character at `start`.
fn char_span(start: Cursor<'_>) -> Span {
    Span::between(start, start.next_char())
}

#[cfg(test)]
mod tests;
