#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::enum_glob_use,
    reason = "Tests can panic"
)]

use pretty_assertions::assert_eq;

use super::{tokenize, Lexer};
use crate::{CommentPolicy, LexErrorKind, LexerConfig, Span, StringStyle, TokenKind};

use TokenKind::*;

fn lex_with(config: LexerConfig, source: &str) -> Vec<(TokenKind, &str)> {
    let stream = Lexer::new(config)
        .tokenize(source)
        .unwrap_or_else(|e| panic!("lexing {source:?} failed: {e}"));
    stream.iter().map(|l| (l.kind, l.text(source))).collect()
}

fn lex(source: &str) -> Vec<(TokenKind, &str)> {
    lex_with(LexerConfig::default(), source)
}

fn error_kind(source: &str) -> LexErrorKind {
    tokenize(source).expect_err("expected a lexical error").kind
}

// === Scenarios ===

#[test]
fn import_with_bare_path() {
    assert_eq!(lex("@import foo.bar"), vec![(Import, "@import"), (Path, "foo.bar")]);
}

#[test]
fn import_without_path_mode_lexes_parts() {
    let config = LexerConfig::default().with_import_paths(false);
    assert_eq!(
        lex_with(config, "@import foo.bar"),
        vec![(Import, "@import"), (Id, "foo"), (Dot, "."), (Id, "bar")]
    );
}

#[test]
fn import_with_quoted_operand_is_a_string() {
    assert_eq!(
        lex("@import \"scripts/main.ts\""),
        vec![(Import, "@import"), (String, "\"scripts/main.ts\"")]
    );
}

#[test]
fn import_path_mode_ends_after_operand() {
    assert_eq!(
        lex("@import a/b.ts\nfoo.bar"),
        vec![(Import, "@import"), (Path, "a/b.ts"), (Id, "foo"), (Dot, "."), (Id, "bar")]
    );
}

#[test]
fn import_followed_by_comment_is_not_a_path() {
    assert_eq!(lex("@import // later\n\"x\""), vec![(Import, "@import"), (String, "\"x\"")]);
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(error_kind("/* never closes"), LexErrorKind::MalformedRegexOrComment);
}

#[test]
fn unterminated_block_comment_emits_nothing() {
    assert!(Lexer::default().tokenize("$x /* never closes").is_err());
}

// === Dispatch branches ===

#[test]
fn punctuation() {
    assert_eq!(
        lex("(){},.=+"),
        vec![
            (LParen, "("),
            (RParen, ")"),
            (LBrace, "{"),
            (RBrace, "}"),
            (Comma, ","),
            (Dot, "."),
            (Equal, "="),
            (Plus, "+"),
        ]
    );
}

#[test]
fn whitespace_and_semicolons_are_skipped() {
    assert_eq!(lex(" \t\r\n\x0B\x0C;;x ; "), vec![(Id, "x")]);
    assert_eq!(lex(""), vec![]);
    assert_eq!(lex("  ;\n"), vec![]);
}

#[test]
fn directives() {
    assert_eq!(
        lex("@func @optional @namespace @open"),
        vec![(Func, "@func"), (Optional, "@optional"), (Ns, "@namespace"), (Open, "@open")]
    );
}

#[test]
fn unknown_directive() {
    assert_eq!(error_kind("@media screen"), LexErrorKind::UnrecognizedDirective);
    assert_eq!(error_kind("@imports"), LexErrorKind::UnrecognizedDirective);
}

#[test]
fn variables() {
    assert_eq!(
        lex("$path %local $ $$"),
        vec![(GVar, "$path"), (LVar, "%local"), (Id, "$"), (Id, "$$")]
    );
}

#[test]
fn malformed_local_variable() {
    assert_eq!(error_kind("% x"), LexErrorKind::MalformedLocalVariable);
}

#[test]
fn strings_and_numbers() {
    assert_eq!(
        lex("'a\\'b' \"c\" 12.5 -3"),
        vec![(String, "'a\\'b'"), (String, "\"c\""), (String, "12.5"), (String, "-3")]
    );
}

#[test]
fn leading_dot_is_punctuation_not_a_number() {
    assert_eq!(lex(".25"), vec![(Dot, "."), (String, "25")]);
}

#[test]
fn unterminated_string() {
    let err = tokenize("x = \"abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(4, 8));
    assert_eq!(err.excerpt, "\"abc");
}

#[test]
fn regular_expressions() {
    assert_eq!(
        lex("match(/a\\/b/i, `c`)"),
        vec![
            (Id, "match"),
            (LParen, "("),
            (Regexp, "/a\\/b/i"),
            (Comma, ","),
            (Regexp, "`c`"),
            (RParen, ")"),
        ]
    );
}

#[test]
fn malformed_regular_expressions() {
    assert_eq!(error_kind("/abc"), LexErrorKind::MalformedRegexOrComment);
    assert_eq!(error_kind("`abc"), LexErrorKind::MalformedRegexOrComment);
}

#[test]
fn keywords_and_names() {
    assert_eq!(
        lex("insert(top, \"x\") read(\"f\") Text class: topmost reader"),
        vec![
            (Id, "insert"),
            (LParen, "("),
            (Pos, "top"),
            (Comma, ","),
            (String, "\"x\""),
            (RParen, ")"),
            (Read, "read"),
            (LParen, "("),
            (String, "\"f\""),
            (RParen, ")"),
            (Type, "Text"),
            (Kwd, "class:"),
            (Id, "topmost"),
            (Id, "reader"),
        ]
    );
}

#[test]
fn unrecognized_lexeme_reports_position() {
    let err = tokenize("abc\n  ~oops").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedLexeme);
    assert_eq!((err.line, err.column), (2, 3));
    assert_eq!(err.span, Span::new(6, 7));
    assert_eq!(err.excerpt, "~oops");
}

#[test]
fn non_ascii_outside_strings_is_unrecognized() {
    let err = tokenize("x \u{00E9}").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedLexeme);
    assert_eq!(err.span, Span::new(2, 4));
}

#[test]
fn non_ascii_inside_strings_is_fine() {
    assert_eq!(lex("\"caf\u{00E9}\""), vec![(String, "\"caf\u{00E9}\"")]);
}

#[test]
fn interior_nul_is_unrecognized() {
    assert_eq!(error_kind("x\0y"), LexErrorKind::UnrecognizedLexeme);
}

#[test]
fn byte_order_mark_is_skipped() {
    let source = "\u{FEFF}$x";
    let stream = tokenize(source).unwrap();
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].span, Span::new(3, 5));
    assert_eq!(stream[0].text(source), "$x");
}

// === Comments ===

#[test]
fn comments_are_discarded_by_default() {
    assert_eq!(lex("a // one\nb /* two */ c # three\nd"), vec![(Id, "a"), (Id, "b"), (Id, "c"), (Id, "d")]);
}

#[test]
fn comments_can_be_emitted() {
    let config = LexerConfig::default().with_comments(CommentPolicy::Emit);
    assert_eq!(
        lex_with(config, "a // one\r\nb /* two */ # three"),
        vec![
            (Id, "a"),
            (Comment, "// one"),
            (Id, "b"),
            (Comment, "/* two */"),
            (Comment, "# three"),
        ]
    );
}

// === Strings ===

#[test]
fn interpolated_strings() {
    let source = "\"a #{\"b\"} c\"";
    assert_eq!(
        lex(source),
        vec![(String, "\"a #{\""), (Id, "b"), (String, "\"} c\"")]
    );

    let config = LexerConfig::default().with_strings(StringStyle::Interpolated);
    assert_eq!(lex_with(config, source), vec![(String, source)]);
}

// === Realistic input ===

#[test]
fn tritium_script() {
    let source = r#"
# rewrite the header
@import "helpers.ts"
$("/html/body") {
  insert_top("div", class: "banner") {
    text(concat($name, %suffix))
  }
  remove(".//script[contains(@src, 'ads')]")
  match($path, /^\/products/i) {
    log("matched")
  }
}
"#;
    let kinds: Vec<TokenKind> = tokenize(source).unwrap().kinds().collect();
    assert_eq!(
        kinds,
        vec![
            Import, String, Id, LParen, String, RParen, LBrace, Id, LParen, String, Comma, Kwd,
            String, RParen, LBrace, Id, LParen, Id, LParen, GVar, Comma, LVar, RParen, RParen,
            RBrace, Id, LParen, String, RParen, Id, LParen, GVar, Comma, Regexp, RParen, LBrace,
            Id, LParen, String, RParen, RBrace, RBrace,
        ]
    );
}

#[test]
fn render_matches_debug_format() {
    let source = "@func Text.foo(%x) { }";
    let stream = tokenize(source).unwrap();
    assert_eq!(
        stream.render(source),
        "[FUNC, @func]\n[TYPE, Text]\n[DOT, .]\n[ID, foo]\n[LPAREN, (]\n[LVAR, %x]\n[RPAREN, )]\n[LBRACE, {]\n[RBRACE, }]\n"
    );
}

#[test]
fn lexer_is_reusable() {
    let lexer = Lexer::new(LexerConfig::default());
    let first = lexer.tokenize("a b").unwrap();
    let second = lexer.tokenize("a b").unwrap();
    assert_eq!(first, second);
    assert_eq!(lexer.config(), &LexerConfig::default());
}

#[test]
fn lexer_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Lexer>();
}
