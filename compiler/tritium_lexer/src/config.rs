//! Lexer configuration.

/// What happens to comments.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CommentPolicy {
    /// Skip comments like whitespace.
    #[default]
    Discard,
    /// Emit each comment as a [`TokenKind::Comment`](crate::TokenKind::Comment)
    /// lexeme.
    Emit,
}

/// Which quoted-string grammar to use.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum StringStyle {
    /// Backslash escapes only. The first unescaped matching quote closes the
    /// string.
    #[default]
    Plain,
    /// Also treat `#{ ... }` as a balanced region in which quotes and braces
    /// do not close the string.
    Interpolated,
}

/// Options fixed when a [`Lexer`](crate::Lexer) is built.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    pub comments: CommentPolicy,
    pub strings: StringStyle,
    /// Lex an unquoted operand of `@import` as a single
    /// [`TokenKind::Path`](crate::TokenKind::Path).
    pub import_paths: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            comments: CommentPolicy::Discard,
            strings: StringStyle::Plain,
            import_paths: true,
        }
    }
}

impl LexerConfig {
    /// Set the comment policy.
    #[must_use]
    pub fn with_comments(mut self, comments: CommentPolicy) -> Self {
        self.comments = comments;
        self
    }

    /// Set the string style.
    #[must_use]
    pub fn with_strings(mut self, strings: StringStyle) -> Self {
        self.strings = strings;
        self
    }

    /// Enable or disable `@import` path lexing.
    #[must_use]
    pub fn with_import_paths(mut self, import_paths: bool) -> Self {
        self.import_paths = import_paths;
        self
    }
}
