//! The closed set of Tritium lexeme kinds.

use std::fmt;

/// What a [`Lexeme`](crate::Lexeme) is.
///
/// Numeric literals have no kind of their own: Tritium treats them as string
/// values, so the lexer emits them as [`TokenKind::String`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Delimiters and operators ===
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Equal,
    /// `+`
    Plus,

    // === Literals ===
    /// Quoted string, or a bare number.
    String,
    /// `/.../` or `` `...` `` with optional modifiers.
    Regexp,

    // === Keywords and names ===
    /// `top`, `bottom`, `before`, `after`.
    Pos,
    /// `$name`
    GVar,
    /// `%name`
    LVar,
    /// Attribute name with its trailing colon: `class:`.
    Kwd,
    /// Plain identifier, or a run of `$`.
    Id,
    /// Capitalised type name: `Text`.
    Type,
    /// Unquoted `@import` operand: `scripts/main.ts`.
    Path,

    // === Directives ===
    /// `@namespace`
    Ns,
    /// `@open`
    Open,
    /// `@func`
    Func,
    /// `@import`
    Import,
    /// `@optional`
    Optional,
    /// `read`
    Read,

    // === Trivia ===
    /// Any comment form, when comments are emitted.
    Comment,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 24] = [
        Self::LParen,
        Self::RParen,
        Self::LBrace,
        Self::RBrace,
        Self::Comma,
        Self::Dot,
        Self::Equal,
        Self::Plus,
        Self::String,
        Self::Regexp,
        Self::Pos,
        Self::GVar,
        Self::LVar,
        Self::Kwd,
        Self::Id,
        Self::Type,
        Self::Path,
        Self::Ns,
        Self::Open,
        Self::Func,
        Self::Import,
        Self::Optional,
        Self::Read,
        Self::Comment,
    ];

    /// Upper-case name used in the `[KIND, text]` debug rendering.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Equal => "EQUAL",
            Self::Plus => "PLUS",
            Self::String => "STRING",
            Self::Regexp => "REGEXP",
            Self::Pos => "POS",
            Self::GVar => "GVAR",
            Self::LVar => "LVAR",
            Self::Kwd => "KWD",
            Self::Id => "ID",
            Self::Type => "TYPE",
            Self::Path => "PATH",
            Self::Ns => "NS",
            Self::Open => "OPEN",
            Self::Func => "FUNC",
            Self::Import => "IMPORT",
            Self::Optional => "OPTIONAL",
            Self::Read => "READ",
            Self::Comment => "COMMENT",
        }
    }

    /// `@`-directives.
    pub const fn is_directive(self) -> bool {
        matches!(
            self,
            Self::Ns | Self::Open | Self::Func | Self::Import | Self::Optional
        )
    }

    /// Kinds whose text is always exactly one character.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::LParen
                | Self::RParen
                | Self::LBrace
                | Self::RBrace
                | Self::Comma
                | Self::Dot
                | Self::Equal
                | Self::Plus
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
