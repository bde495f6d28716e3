//! Sass/CSS token rules.
//!
//! Matchers for the lexical categories a Sass parser needs, following the
//! CSS 2.1 tokenization grammar (`h`, `nl`, `nmstart`, `nmchar`, ...) with
//! the Sass additions: variables, `#{` interpolation markers, and "static"
//! values and selectors that contain no interpolation at all.
//!
//! There is no driver here. A parser calls these at the positions where it
//! expects the category.

use munchar::lexemes::{
    alphanumeric, block_comment, digit, escape_seq, id_start, is_whitespace, line_comment,
};
use munchar::{
    alt, any_char, between, chr, class, from_fn, lit, negate, one_or_more, opt, pred, seq,
    zero_or_more, Cursor, Matcher,
};

/// CSS whitespace characters.
const CSS_SPACE: &str = " \t\r\n\x0C";

/// Hexadecimal digit.
pub fn h() -> impl Matcher + Copy {
    pred(|b: u8| b.is_ascii_hexdigit())
}

/// Newline: `\n`, `\r\n`, `\r`, or form feed.
pub fn nl() -> impl Matcher + Copy {
    munchar::alt![chr(b'\n'), lit("\r\n"), chr(b'\r'), chr(0x0C)]
}

/// `\` followed by 1 to 6 hex digits and an optional whitespace character.
pub fn unicode() -> impl Matcher + Copy {
    munchar::seq![chr(b'\\'), between(h(), 1, 6), opt(class(CSS_SPACE))]
}

/// Any non-ASCII character.
pub fn nonascii() -> impl Matcher + Copy {
    pred(|b: u8| b > 127)
}

/// A unicode escape, or `\` and any character.
pub fn escape() -> impl Matcher + Copy {
    alt(unicode(), escape_seq())
}

pub fn nmstart() -> impl Matcher + Copy {
    munchar::alt![id_start(), nonascii(), escape()]
}

pub fn nmchar() -> impl Matcher + Copy {
    munchar::alt![alphanumeric(), class("_-"), nonascii(), escape()]
}

/// Identifier, optionally with one leading `-`.
pub fn ident() -> impl Matcher + Copy {
    munchar::seq![opt(chr(b'-')), nmstart(), zero_or_more(nmchar())]
}

pub fn name() -> impl Matcher + Copy {
    one_or_more(nmchar())
}

/// Unsigned decimal: `12`, `1.5`, `.5`.
pub fn num() -> impl Matcher + Copy {
    alt(
        munchar::seq![zero_or_more(digit()), chr(b'.'), one_or_more(digit())],
        one_or_more(digit()),
    )
}

/// A number with an optional unit: `12px`, `50%`, `1.5em`.
pub fn number() -> impl Matcher + Copy {
    seq(num(), opt(alt(ident(), chr(b'%'))))
}

/// A single- or double-quoted string with backslash escapes.
pub use munchar::lexemes::string;

/// Possibly empty whitespace.
pub fn w() -> impl Matcher + Copy {
    zero_or_more(class(CSS_SPACE))
}

/// Non-empty whitespace.
pub fn s() -> impl Matcher + Copy {
    one_or_more(class(CSS_SPACE))
}

/// `$name`
pub fn variable() -> impl Matcher + Copy {
    seq(chr(b'$'), ident())
}

/// `/* ... */`
pub fn comment() -> impl Matcher + Copy {
    block_comment()
}

/// One or more `//` comments separated only by whitespace.
pub fn single_line_comment() -> impl Matcher + Copy {
    seq(line_comment(), zero_or_more(seq(w(), line_comment())))
}

pub fn cdo() -> impl Matcher + Copy {
    lit("<!--")
}

pub fn cdc() -> impl Matcher + Copy {
    lit("-->")
}

/// `~=`
pub fn includes() -> impl Matcher + Copy {
    lit("~=")
}

/// `|=`
pub fn dashmatch() -> impl Matcher + Copy {
    lit("|=")
}

/// `^=`
pub fn prefixmatch() -> impl Matcher + Copy {
    lit("^=")
}

/// `$=`
pub fn suffixmatch() -> impl Matcher + Copy {
    lit("$=")
}

/// `*=`
pub fn substringmatch() -> impl Matcher + Copy {
    lit("*=")
}

/// `#name`
pub fn hash() -> impl Matcher + Copy {
    seq(chr(b'#'), name())
}

/// `!important`, with optional whitespace after the `!`.
pub fn important() -> impl Matcher + Copy {
    munchar::seq![chr(b'!'), w(), lit("important")]
}

/// `!optional`, with optional whitespace after the `!`.
pub fn optional() -> impl Matcher + Copy {
    munchar::seq![chr(b'!'), w(), lit("optional")]
}

/// The body of `url(...)`, up to but not including the closing paren.
///
/// A quoted body is just the string; the caller matches the `)`. An
/// unquoted body may contain escapes and whitespace but no quote or `(`.
pub fn url() -> impl Matcher + Copy {
    from_fn(munch_url)
}

fn munch_url(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    let mut pos = w().munch(cursor)?;
    if !pos.is_eof() && matches!(pos.current(), b'"' | b'\'') {
        return string().munch(pos);
    }
    while !pos.is_eof() && pos.current() != b')' {
        match pos.current() {
            b if is_whitespace(b) => pos.advance(),
            b'\\' => pos = escape().munch(pos)?,
            b'"' | b'\'' | b'(' => return None,
            _ => pos.advance_char(),
        }
    }
    Some(pos)
}

/// `url(...)`
pub fn uri() -> impl Matcher + Copy {
    munchar::seq![lit("url("), url(), chr(b')')]
}

/// A function call's name and opening paren: `rgba(`.
pub fn function() -> impl Matcher + Copy {
    seq(ident(), chr(b'('))
}

/// 1 to 6 hex digits or `?` wildcards.
pub fn range() -> impl Matcher + Copy {
    between(alt(h(), chr(b'?')), 1, 6)
}

/// `u+0025-00FF` or `u+4??`.
pub fn unicode_range() -> impl Matcher + Copy {
    seq(
        lit("u+"),
        alt(
            munchar::seq![between(h(), 1, 6), chr(b'-'), between(h(), 1, 6)],
            range(),
        ),
    )
}

/// Adjacent-sibling combinator, with leading whitespace.
pub fn plus() -> impl Matcher + Copy {
    seq(w(), chr(b'+'))
}

/// Child combinator, with leading whitespace.
pub fn greater() -> impl Matcher + Copy {
    seq(w(), chr(b'>'))
}

/// General-sibling combinator, with leading whitespace.
pub fn tilde() -> impl Matcher + Copy {
    seq(w(), chr(b'~'))
}

pub fn css_not() -> impl Matcher + Copy {
    lit(":not(")
}

fn url_call(prefix: &'static str) -> impl Matcher + Copy {
    munchar::seq![lit(prefix), w(), alt(string(), url()), w(), chr(b')')]
}

/// `url-prefix(...)` in `@-moz-document`.
pub fn url_prefix() -> impl Matcher + Copy {
    url_call("url-prefix(")
}

/// `domain(...)` in `@-moz-document`.
pub fn domain() -> impl Matcher + Copy {
    url_call("domain(")
}

/// `#` and hex digits. Length is not checked.
pub fn hex_color() -> impl Matcher + Copy {
    seq(chr(b'#'), one_or_more(h()))
}

pub fn interp_start() -> impl Matcher + Copy {
    lit("#{")
}

/// `-#{`, an interpolation glued to a leading hyphen.
pub fn ident_hyphen_interp() -> impl Matcher + Copy {
    lit("-#{")
}

/// `:any(` or a vendor-prefixed form like `:-moz-any(`.
pub fn any() -> impl Matcher + Copy {
    munchar::seq![
        chr(b':'),
        opt(munchar::seq![
            chr(b'-'),
            one_or_more(alt(alphanumeric(), chr(b'_'))),
            chr(b'-'),
        ]),
        lit("any("),
    ]
}

/// A string delimited by `q` that must not contain `#{`.
///
/// A `#` not followed by `{` is ordinary content; a backslash may escape a
/// newline. Fails outright at an interpolation, so a parser knows the
/// string needs evaluating.
fn quoted_no_interp(q: u8) -> impl Matcher + Copy {
    let plain = class([b'\n', b'\r', 0x0C, b'\\', q, b'#']);
    munchar::seq![
        chr(q),
        zero_or_more(munchar::alt![
            seq(negate(plain), any_char()),
            seq(chr(b'#'), negate(chr(b'{'))),
            seq(chr(b'\\'), nl()),
            escape(),
        ]),
        chr(q),
    ]
}

pub fn string1_no_interp() -> impl Matcher + Copy {
    quoted_no_interp(b'"')
}

pub fn string2_no_interp() -> impl Matcher + Copy {
    quoted_no_interp(b'\'')
}

pub fn string_no_interp() -> impl Matcher + Copy {
    alt(string1_no_interp(), string2_no_interp())
}

/// One piece of a value that needs no evaluation.
pub fn static_component() -> impl Matcher + Copy {
    munchar::alt![
        ident(),
        string_no_interp(),
        hex_color(),
        seq(opt(class("+-")), number()),
        important(),
    ]
}

/// A whole property value made of static components, separated by
/// whitespace, `,`, or `/`, and ending at `;` or `}` (included).
pub fn static_value() -> impl Matcher + Copy {
    munchar::seq![
        static_component(),
        zero_or_more(munchar::seq![w(), opt(class(",/")), w(), static_component()]),
        class(";}"),
    ]
}

/// A selector of at most 50 plain characters, up to and including `{`.
pub fn static_selector() -> impl Matcher + Copy {
    seq(
        between(
            munchar::alt![
                nmchar(),
                class(" \t"),
                class(",>+*"),
                seq(class(":#."), nmstart()),
            ],
            1,
            50,
        ),
        chr(b'{'),
    )
}

#[cfg(test)]
mod tests;
