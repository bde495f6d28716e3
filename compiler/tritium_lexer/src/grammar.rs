//! Tritium lexical rules.
//!
//! Each rule is a plain matcher over the generic [`munchar::lexemes`]
//! building blocks. The driver in [`crate::Lexer`] picks which rules to try
//! from the character under the cursor; the rules themselves know nothing
//! about dispatch.
//!
//! Keywords are a literal followed by a negative lookahead, so `topmost`
//! is an identifier rather than `top` followed by `most`.

use munchar::lexemes::{
    block_comment, escape_seq, hash_comment, id_body, id_start, interpolated, line_comment,
    number, string, ws_char,
};
use munchar::{
    alt, any_char, chr, class, lit, negate, one_or_more, pred, seq, zero_or_more, Matcher, Rule,
};

use crate::{StringStyle, TokenKind};

/// Regular expression modifier letters.
const REGEX_MODIFIERS: &str = "imxouesn";

/// Characters besides `id_body` allowed in an import path.
const PATH_PUNCTUATION: &str = "-+.*?:\\/";

fn directive(name: &'static str) -> impl Matcher + Copy {
    seq(lit(name), negate(id_body()))
}

/// `@import`
pub fn import_kwd() -> impl Matcher + Copy {
    directive("@import")
}

/// `@optional`
pub fn optional_kwd() -> impl Matcher + Copy {
    directive("@optional")
}

/// `@func`
pub fn func_kwd() -> impl Matcher + Copy {
    directive("@func")
}

/// `@namespace`
pub fn namespace_kwd() -> impl Matcher + Copy {
    directive("@namespace")
}

/// `@open`
pub fn open_kwd() -> impl Matcher + Copy {
    directive("@open")
}

/// A keyword must not run on into a name or an attribute colon.
fn keyword_end() -> impl Matcher + Copy {
    negate(alt(id_body(), chr(b':')))
}

/// `read`
pub fn read_kwd() -> impl Matcher + Copy {
    seq(lit("read"), keyword_end())
}

/// `top`, `bottom`, `before`, or `after`.
pub fn position_kwd() -> impl Matcher + Copy {
    seq(
        munchar::alt![lit("top"), lit("bottom"), lit("before"), lit("after")],
        keyword_end(),
    )
}

/// A run of `$`, or `id_start` followed by name characters and `$`.
pub fn identifier() -> impl Matcher + Copy {
    alt(
        one_or_more(chr(b'$')),
        seq(id_start(), zero_or_more(alt(id_body(), chr(b'$')))),
    )
}

/// An attribute name including its trailing colon: `class:`, `data-x.y:`.
pub fn attr_name() -> impl Matcher + Copy {
    munchar::seq![
        alt(id_start(), chr(b':')),
        zero_or_more(alt(id_body(), class("-."))),
        chr(b':'),
    ]
}

/// Upper-case letter followed by name characters.
pub fn type_name() -> impl Matcher + Copy {
    seq(pred(|b: u8| b.is_ascii_uppercase()), zero_or_more(id_body()))
}

/// `$name`
pub fn global_var() -> impl Matcher + Copy {
    seq(chr(b'$'), one_or_more(id_body()))
}

/// `%name`
pub fn local_var() -> impl Matcher + Copy {
    seq(chr(b'%'), one_or_more(id_body()))
}

/// An unquoted file path.
pub fn path() -> impl Matcher + Copy {
    one_or_more(alt(id_body(), class(PATH_PUNCTUATION)))
}

fn delimited_regexp(delim: u8) -> impl Matcher + Copy {
    munchar::seq![
        chr(delim),
        zero_or_more(alt(escape_seq(), seq(negate(class([delim, b'\\'])), any_char()))),
        chr(delim),
        zero_or_more(class(REGEX_MODIFIERS)),
    ]
}

/// `/pattern/mods`
pub fn slash_regexp() -> impl Matcher + Copy {
    delimited_regexp(b'/')
}

/// `` `pattern`mods ``
pub fn backquote_regexp() -> impl Matcher + Copy {
    delimited_regexp(b'`')
}

/// A non-empty run of whitespace.
pub fn spaces() -> impl Matcher + Copy {
    one_or_more(ws_char())
}

/// The string rule for `style`.
pub fn string_literal(style: StringStyle) -> Rule {
    match style {
        StringStyle::Plain => string().boxed(),
        StringStyle::Interpolated => alt(interpolated(b'"'), interpolated(b'\'')).boxed(),
    }
}

/// An ordered list of candidates; the first that matches wins.
pub(crate) type Candidates<const N: usize> = [(TokenKind, Rule); N];

/// Every rule the driver dispatches to, built once per lexer.
pub(crate) struct Grammar {
    pub(crate) spaces: Rule,
    pub(crate) line_comment: Rule,
    pub(crate) block_comment: Rule,
    pub(crate) hash_comment: Rule,
    pub(crate) slash_regexp: Rule,
    pub(crate) backquote_regexp: Rule,
    pub(crate) string: Rule,
    pub(crate) global_var: Rule,
    pub(crate) local_var: Rule,
    pub(crate) identifier: Rule,
    pub(crate) path: Rule,
    /// Tried after `@`.
    pub(crate) directives: Candidates<5>,
    /// Tried when no other branch claims the character.
    pub(crate) fallback: Candidates<6>,
}

impl Grammar {
    pub(crate) fn new(strings: StringStyle) -> Self {
        Grammar {
            spaces: spaces().boxed(),
            line_comment: line_comment().boxed(),
            block_comment: block_comment().boxed(),
            hash_comment: hash_comment().boxed(),
            slash_regexp: slash_regexp().boxed(),
            backquote_regexp: backquote_regexp().boxed(),
            string: string_literal(strings),
            global_var: global_var().boxed(),
            local_var: local_var().boxed(),
            identifier: identifier().boxed(),
            path: path().boxed(),
            directives: [
                (TokenKind::Import, import_kwd().boxed()),
                (TokenKind::Optional, optional_kwd().boxed()),
                (TokenKind::Func, func_kwd().boxed()),
                (TokenKind::Ns, namespace_kwd().boxed()),
                (TokenKind::Open, open_kwd().boxed()),
            ],
            fallback: [
                (TokenKind::Kwd, attr_name().boxed()),
                (TokenKind::Pos, position_kwd().boxed()),
                (TokenKind::Type, type_name().boxed()),
                (TokenKind::Read, read_kwd().boxed()),
                (TokenKind::Id, identifier().boxed()),
                (TokenKind::String, number().boxed()),
            ],
        }
    }
}

/// Try `candidates` in order at `cursor`.
#[inline]
pub(crate) fn first_match<'a>(
    candidates: &[(TokenKind, Rule)],
    cursor: munchar::Cursor<'a>,
) -> Option<(TokenKind, munchar::Cursor<'a>)> {
    candidates
        .iter()
        .find_map(|(kind, rule)| rule.munch(cursor).map(|end| (*kind, end)))
}
