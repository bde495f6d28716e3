//! Tritium lexer.
//!
//! Turns Tritium source text into a flat [`LexemeStream`] of
//! `(`[`TokenKind`]`, `[`Span`]`)` pairs, or fails with the first
//! [`LexError`]. Built entirely from [`munchar`] matchers: [`grammar`] holds
//! the Tritium rules, and [`scss`] holds the Sass/CSS token rules, which a
//! Sass parser uses directly without a driver.
//!
//! # Example
//!
//! ```
//! use tritium_lexer::{tokenize, TokenKind};
//!
//! let source = "$x = \"y\"";
//! let stream = tokenize(source).unwrap();
//! let kinds: Vec<TokenKind> = stream.kinds().collect();
//! assert_eq!(kinds, [TokenKind::GVar, TokenKind::Equal, TokenKind::String]);
//! assert_eq!(stream[0].text(source), "$x");
//! ```

mod config;
pub mod grammar;
mod lex_error;
mod lexeme;
mod lexer;
pub mod scss;
mod span;
mod token_kind;

pub use config::{CommentPolicy, LexerConfig, StringStyle};
pub use lex_error::{LexError, LexErrorKind, EXCERPT_CHARS};
pub use lexeme::{Lexeme, LexemeStream};
pub use lexer::{tokenize, Lexer};
pub use span::Span;
pub use token_kind::TokenKind;
