//! Reusable lexical rules.
//!
//! Building blocks shared by most C-family and scripting-language lexers.
//! Each function returns a small `Copy` matcher; call it wherever the rule is
//! needed, or box it once into a [`Rule`](crate::Rule) for a dispatch table.
//!
//! Character tests follow the C locale: only ASCII letters, digits, and
//! whitespace qualify. Non-ASCII characters are never letters here.

use crate::{
    alt, any_char, chr, class, from_fn, lit, negate, one_or_more, opt, pred, seq, zero_or_more,
    Cursor, Matcher,
};

// Lead-byte predicates

/// ASCII letter.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII letter or digit.
#[inline]
pub fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII hexadecimal digit.
#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Space, tab, newline, vertical tab, form feed, or carriage return.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab counts.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

/// ASCII letter or `_`.
#[inline]
pub fn is_id_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// ASCII letter, digit, or `_`.
#[inline]
pub fn is_id_body(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// Character rules

pub fn letter() -> impl Matcher + Copy {
    pred(is_letter)
}

pub fn alphanumeric() -> impl Matcher + Copy {
    pred(is_alphanumeric)
}

pub fn digit() -> impl Matcher + Copy {
    pred(is_digit)
}

pub fn hex_digit() -> impl Matcher + Copy {
    pred(is_hex_digit)
}

pub fn ws_char() -> impl Matcher + Copy {
    pred(is_whitespace)
}

/// A possibly empty run of whitespace. Never fails.
pub fn whitespace() -> impl Matcher + Copy {
    zero_or_more(ws_char())
}

/// `+` or `-`.
pub fn sign() -> impl Matcher + Copy {
    class("+-")
}

pub fn id_start() -> impl Matcher + Copy {
    pred(is_id_start)
}

pub fn id_body() -> impl Matcher + Copy {
    pred(is_id_body)
}

/// `id_start` followed by any number of `id_body`.
pub fn identifier() -> impl Matcher + Copy {
    seq(id_start(), zero_or_more(id_body()))
}

// Numbers

/// Optionally signed run of digits.
pub fn integer() -> impl Matcher + Copy {
    seq(opt(sign()), one_or_more(digit()))
}

/// Optionally signed decimal: `12`, `-1.5`, `.25`. A trailing `.` with no
/// fraction digits is not consumed.
pub fn number_no_exponent() -> impl Matcher + Copy {
    seq(
        opt(sign()),
        alt(
            crate::seq![zero_or_more(digit()), chr(b'.'), one_or_more(digit())],
            one_or_more(digit()),
        ),
    )
}

/// Decimal with an optional `e`/`E` exponent: `-123.456e-3`.
pub fn number() -> impl Matcher + Copy {
    seq(
        number_no_exponent(),
        opt(crate::seq![class("eE"), opt(sign()), one_or_more(digit())]),
    )
}

// Strings

/// A backslash and the character it escapes.
pub fn escape_seq() -> impl Matcher + Copy {
    seq(chr(b'\\'), any_char())
}

/// A string delimited by `q` with backslash escapes. No interpolation.
pub fn quoted(q: u8) -> impl Matcher + Copy {
    crate::seq![
        chr(q),
        zero_or_more(alt(escape_seq(), seq(negate(class([q, b'\\'])), any_char()))),
        chr(q),
    ]
}

pub fn dq_string() -> impl Matcher + Copy {
    quoted(b'"')
}

pub fn sq_string() -> impl Matcher + Copy {
    quoted(b'\'')
}

/// Double- or single-quoted string.
pub fn string() -> impl Matcher + Copy {
    alt(dq_string(), sq_string())
}

/// A string delimited by `q` that may contain `#{ ... }` interpolations.
///
/// Inside an interpolation, braces nest and quotes open inner strings, so
/// neither terminates the outer string. An interpolation left open at EOF
/// fails the whole string.
pub fn interpolated(q: u8) -> impl Matcher + Copy {
    from_fn(move |cursor| munch_interpolated(q, cursor))
}

/// A `#{ ... }` region with balanced braces.
pub fn interpolation() -> impl Matcher + Copy {
    from_fn(munch_interpolation)
}

fn munch_interpolated(q: u8, mut cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    if cursor.is_eof() || cursor.current() != q {
        return None;
    }
    cursor.advance();
    loop {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b if b == q => {
                cursor.advance();
                return Some(cursor);
            }
            b'\\' => skip_escape(&mut cursor),
            b'#' if cursor.starts_with(b"#{") => cursor = munch_interpolation(cursor)?,
            _ => cursor.advance_char(),
        }
    }
}

fn munch_interpolation(mut cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    if !cursor.starts_with(b"#{") {
        return None;
    }
    cursor.advance_n(2);
    let mut depth = 1u32;
    loop {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b'{' => {
                depth += 1;
                cursor.advance();
            }
            b'}' => {
                depth -= 1;
                cursor.advance();
                if depth == 0 {
                    return Some(cursor);
                }
            }
            q @ (b'"' | b'\'') => cursor = munch_interpolated(q, cursor)?,
            b'\\' => skip_escape(&mut cursor),
            _ => cursor.advance_char(),
        }
    }
}

/// Step over `\` and the character after it, if any.
#[inline]
fn skip_escape(cursor: &mut Cursor<'_>) {
    cursor.advance();
    if !cursor.is_eof() {
        cursor.advance_char();
    }
}

// Line structure and comments

/// `\n` or `\r\n`.
pub fn eol() -> impl Matcher + Copy {
    alt(chr(b'\n'), lit("\r\n"))
}

fn rest_of_line() -> impl Matcher + Copy {
    seq(zero_or_more(seq(negate(eol()), any_char())), opt(eol()))
}

/// `// ...` through the end of the line, including the line break.
pub fn line_comment() -> impl Matcher + Copy {
    seq(lit("//"), rest_of_line())
}

/// `/* ... */`. Does not nest: the first `*/` closes it.
pub fn block_comment() -> impl Matcher + Copy {
    crate::seq![
        lit("/*"),
        zero_or_more(seq(negate(lit("*/")), any_char())),
        lit("*/"),
    ]
}

/// `# ...` through the end of the line, including the line break.
pub fn hash_comment() -> impl Matcher + Copy {
    seq(chr(b'#'), rest_of_line())
}
