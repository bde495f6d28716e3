use crate::lexemes::{alphanumeric, digit, letter};
use crate::{
    alt, any_char, chr, lit, lookahead, negate, one_or_more, opt, seq, zero_or_more, Matcher,
    SourceBuffer,
};

// === Sequence ===

#[test]
fn sequence_concatenates() {
    assert_eq!(seq(lit("foo"), lit("bar")).match_prefix("foobarhux"), Some("foobar"));
    assert_eq!(seq(letter(), digit()).match_prefix("a1 blah"), Some("a1"));
    assert_eq!(
        crate::seq![lit("foo"), lit("bar"), lit("hux")].match_prefix("foobarhuxbaz"),
        Some("foobarhux")
    );
}

#[test]
fn sequence_fails_if_either_side_fails() {
    let foobar = seq(lit("foo"), lit("bar"));
    assert_eq!(foobar.match_prefix("foobah"), None);
    assert_eq!(foobar.match_prefix("foob"), None);
    assert_eq!(foobar.match_prefix("boof"), None);
    assert_eq!(foobar.match_prefix(""), None);
    assert_eq!(
        crate::seq![lit("foo"), lit("bar"), lit("hux")].match_prefix("foobar"),
        None
    );
    assert_eq!(seq(letter(), digit()).match_prefix("a"), None);
    assert_eq!(seq(letter(), digit()).match_prefix("1a"), None);
}

#[test]
fn then_is_sequence() {
    assert_eq!(lit("foo").then(lit("bar")).match_prefix("foobar!"), Some("foobar"));
}

// === Alternation ===

#[test]
fn alternation_tries_in_order() {
    assert_eq!(alt(lit("foo"), lit("bar")).match_prefix("foobarhux"), Some("foo"));
    assert_eq!(alt(lit("foo"), lit("bar")).match_prefix("barfoohux"), Some("bar"));
    assert_eq!(
        crate::alt![lit("foo"), lit("bar"), lit("hux")].match_prefix("huxleberry"),
        Some("hux")
    );
    assert_eq!(alt(letter(), digit()).match_prefix("a1 blah"), Some("a"));
    assert_eq!(alt(letter(), digit()).match_prefix("1a blah"), Some("1"));
}

#[test]
fn alternation_fails_when_all_fail() {
    let foo_or_bar = alt(lit("foo"), lit("bar"));
    assert_eq!(foo_or_bar.match_prefix("bahfoo"), None);
    assert_eq!(foo_or_bar.match_prefix("boofoo"), None);
    assert_eq!(foo_or_bar.match_prefix("boof"), None);
    assert_eq!(foo_or_bar.match_prefix(""), None);
    assert_eq!(
        crate::alt![lit("foo"), lit("bar"), lit("hux")].match_prefix("huckleberry"),
        None
    );
    assert_eq!(alt(letter(), digit()).match_prefix("."), None);
}

#[test]
fn alternation_is_left_biased_not_longest() {
    // Both sides match; the shorter left one wins.
    assert_eq!(alt(lit("read"), lit("readme")).match_prefix("readme"), Some("read"));
    assert_eq!(lit("a").or(lit("ab")).match_prefix("ab"), Some("a"));
}

#[test]
fn alternation_retries_from_original_position() {
    // Left consumes "ab" before failing; right must still see "abd".
    let m = alt(lit("abc"), lit("abd"));
    assert_eq!(m.match_prefix("abd"), Some("abd"));
}

// === Optional ===

#[test]
fn optional_never_fails() {
    let m = opt(alt(lit("foo"), lit("bar")));
    assert_eq!(m.match_prefix("barhux"), Some("bar"));
    assert_eq!(m.match_prefix("bludge"), Some(""));
    assert_eq!(m.match_prefix(""), Some(""));
}

// === Negation ===

#[test]
fn negation_is_zero_width() {
    assert_eq!(negate(digit()).match_prefix("abc123"), Some(""));
    assert_eq!(negate(digit()).match_prefix(""), Some(""));
    assert_eq!(negate(digit()).match_prefix("123abc"), None);
}

#[test]
fn negative_lookahead_guards_a_sequence() {
    let not_a_then_letters = seq(negate(chr(b'a')), zero_or_more(letter()));
    assert_eq!(not_a_then_letters.match_prefix("bcd123"), Some("bcd"));
    assert_eq!(not_a_then_letters.match_prefix(""), Some(""));
    assert_eq!(not_a_then_letters.match_prefix("abcd123"), None);
    assert_eq!(
        seq(negate(chr(b'a')), one_or_more(letter())).match_prefix(""),
        None
    );
}

#[test]
fn keyword_boundary_via_negation() {
    let kwd = seq(lit("top"), negate(alphanumeric()));
    assert_eq!(kwd.match_prefix("top "), Some("top"));
    assert_eq!(kwd.match_prefix("top"), Some("top"));
    assert_eq!(kwd.match_prefix("topmost"), None);
}

// === Lookahead ===

#[test]
fn lookahead_is_zero_width() {
    assert_eq!(lookahead(one_or_more(digit())).match_prefix("123abc"), Some(""));
    assert_eq!(lookahead(one_or_more(digit())).match_prefix("abc"), None);
    assert_eq!(lookahead(one_or_more(digit())).match_prefix(""), None);
}

#[test]
fn zero_width_assertions_never_move_cursor() {
    let buf = SourceBuffer::new("abc");
    let start = buf.cursor();
    assert_eq!(lookahead(any_char()).munch(start), Some(start));
    assert_eq!(negate(digit()).munch(start), Some(start));
}
