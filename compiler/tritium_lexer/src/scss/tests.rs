use munchar::Matcher;

use super::*;

#[test]
fn strings_without_interpolation() {
    assert_eq!(
        string_no_interp().match_prefix("'hello this is a string' blah"),
        Some("'hello this is a string'")
    );
    assert_eq!(
        string_no_interp().match_prefix("\"hello this is a {string}\" blah"),
        Some("\"hello this is a {string}\"")
    );
    assert_eq!(
        string_no_interp().match_prefix("\"color #fff\""),
        Some("\"color #fff\"")
    );
}

#[test]
fn interpolation_rejects_static_string() {
    let input = "'here\\'s an interpolant: #{2+2} blah'";
    assert_eq!(string_no_interp().match_prefix(input), None);
    assert_eq!(munchar::lexemes::string().match_prefix(input), Some(input));
}

#[test]
fn escaped_newline_in_static_string() {
    assert_eq!(string1_no_interp().match_prefix("\"a\\\nb\""), Some("\"a\\\nb\""));
    assert_eq!(string1_no_interp().match_prefix("\"a\nb\""), None);
}

#[test]
fn uris() {
    assert_eq!(uri().match_prefix("url(index.html)blah blah"), Some("url(index.html)"));
    assert_eq!(
        uri().match_prefix("url(http://www.hcatlin.com/index.html?foo=bar) blah"),
        Some("url(http://www.hcatlin.com/index.html?foo=bar)")
    );
    assert_eq!(
        uri().match_prefix("url(Hey, here\\'s an obnoxious url; suck it up!.html) blah"),
        Some("url(Hey, here\\'s an obnoxious url; suck it up!.html)")
    );
}

#[test]
fn quoted_uris() {
    assert_eq!(uri().match_prefix("url( 'a b.png')"), Some("url( 'a b.png')"));
    assert_eq!(uri().match_prefix("url(\"x\" )"), None);
    assert_eq!(uri().match_prefix("url()"), Some("url()"));
}

#[test]
fn uri_rejects_stray_quote_or_paren() {
    assert_eq!(uri().match_prefix("url(a'b)"), None);
    assert_eq!(uri().match_prefix("url(a(b))"), None);
    assert_eq!(uri().match_prefix("url(abc"), None);
}

#[test]
fn moz_document_functions() {
    assert_eq!(
        url_prefix().match_prefix("url-prefix( http://x/ ) {"),
        Some("url-prefix( http://x/ )")
    );
    assert_eq!(domain().match_prefix("domain('x.org')"), Some("domain('x.org')"));
}

#[test]
fn identifiers_and_names() {
    assert_eq!(ident().match_prefix("-moz-box x"), Some("-moz-box"));
    assert_eq!(ident().match_prefix("caf\u{00E9}:"), Some("caf\u{00E9}"));
    assert_eq!(ident().match_prefix("\\31 0px"), Some("\\31 0px"));
    assert_eq!(ident().match_prefix("--x"), None);
    assert_eq!(ident().match_prefix("9a"), None);
    assert_eq!(name().match_prefix("9a-b "), Some("9a-b"));
    assert_eq!(variable().match_prefix("$base-color:"), Some("$base-color"));
    assert_eq!(function().match_prefix("rgba(0"), Some("rgba("));
}

#[test]
fn numbers_with_units() {
    assert_eq!(number().match_prefix("12px;"), Some("12px"));
    assert_eq!(number().match_prefix("50%"), Some("50%"));
    assert_eq!(number().match_prefix("1.5em"), Some("1.5em"));
    assert_eq!(number().match_prefix(".5"), Some(".5"));
    assert_eq!(number().match_prefix("px"), None);
}

#[test]
fn colors_and_hashes() {
    assert_eq!(hex_color().match_prefix("#fFf;"), Some("#fFf"));
    assert_eq!(hex_color().match_prefix("#ggg"), None);
    assert_eq!(hash().match_prefix("#ggg"), Some("#ggg"));
    assert_eq!(interp_start().match_prefix("#{$x}"), Some("#{"));
    assert_eq!(ident_hyphen_interp().match_prefix("-#{$x}"), Some("-#{"));
}

#[test]
fn flags() {
    assert_eq!(important().match_prefix("! important;"), Some("! important"));
    assert_eq!(optional().match_prefix("!optional"), Some("!optional"));
    assert_eq!(important().match_prefix("!default"), None);
}

#[test]
fn attribute_operators() {
    let ops = [
        (includes().match_prefix("~=x"), "~="),
        (dashmatch().match_prefix("|=x"), "|="),
        (prefixmatch().match_prefix("^=x"), "^="),
        (suffixmatch().match_prefix("$=x"), "$="),
        (substringmatch().match_prefix("*=x"), "*="),
        (cdo().match_prefix("<!-- x"), "<!--"),
        (cdc().match_prefix("--> x"), "-->"),
    ];
    for (found, op) in ops {
        assert_eq!(found, Some(op));
    }
}

#[test]
fn combinators_take_leading_whitespace() {
    assert_eq!(plus().match_prefix("  + a"), Some("  +"));
    assert_eq!(greater().match_prefix(">a"), Some(">"));
    assert_eq!(tilde().match_prefix("\n~ a"), Some("\n~"));
    assert_eq!(greater().match_prefix("  a"), None);
}

#[test]
fn unicode_ranges() {
    assert_eq!(unicode_range().match_prefix("u+0025-00FF,"), Some("u+0025-00FF"));
    assert_eq!(unicode_range().match_prefix("u+4??"), Some("u+4??"));
    assert_eq!(unicode_range().match_prefix("u+26"), Some("u+26"));
    assert_eq!(unicode_range().match_prefix("U+26"), None);
}

#[test]
fn pseudo_selectors() {
    assert_eq!(css_not().match_prefix(":not(.a)"), Some(":not("));
    assert_eq!(any().match_prefix(":any(p)"), Some(":any("));
    assert_eq!(any().match_prefix(":-moz-any(p)"), Some(":-moz-any("));
    assert_eq!(any().match_prefix(":anything"), None);
}

#[test]
fn comments() {
    assert_eq!(comment().match_prefix("/* a */ x"), Some("/* a */"));
    assert_eq!(comment().match_prefix("/* a\n * b */"), Some("/* a\n * b */"));
    assert_eq!(comment().match_prefix("// a\nb"), None);
    assert_eq!(comment().match_prefix("/* open"), None);
}

#[test]
fn runs_of_line_comments() {
    assert_eq!(
        single_line_comment().match_prefix("// a\n  // b\nx"),
        Some("// a\n  // b\n")
    );
    assert_eq!(single_line_comment().match_prefix("// a\nb"), Some("// a\n"));
    assert_eq!(single_line_comment().match_prefix("// a\n\n/* b */"), Some("// a\n"));
    assert_eq!(single_line_comment().match_prefix("/* a */"), None);
}

#[test]
fn whitespace() {
    assert_eq!(w().match_prefix("x"), Some(""));
    assert_eq!(s().match_prefix("x"), None);
    assert_eq!(s().match_prefix(" \x0C\r\nx"), Some(" \x0C\r\n"));
    assert_eq!(nl().match_prefix("\r\nx"), Some("\r\n"));
    assert_eq!(nl().match_prefix("\rx"), Some("\r"));
}

#[test]
fn static_values() {
    assert_eq!(static_value().match_prefix("1px solid #fff;"), Some("1px solid #fff;"));
    assert_eq!(static_value().match_prefix("a, b / c}"), Some("a, b / c}"));
    assert_eq!(static_value().match_prefix("-2em !important;"), Some("-2em !important;"));
    assert_eq!(static_value().match_prefix("\"x\" 'y';"), Some("\"x\" 'y';"));
}

#[test]
fn values_needing_evaluation_are_not_static() {
    assert_eq!(static_value().match_prefix("1px #{$x};"), None);
    assert_eq!(static_value().match_prefix("$x;"), None);
    assert_eq!(static_value().match_prefix("1px + 2px;"), None);
    assert_eq!(static_value().match_prefix("1px"), None);
}

#[test]
fn static_selectors() {
    assert_eq!(
        static_selector().match_prefix("div.foo > a:hover { color: red }"),
        Some("div.foo > a:hover {")
    );
    assert_eq!(static_selector().match_prefix("#main, *{"), Some("#main, *{"));
    assert_eq!(static_selector().match_prefix("#{$sel} {"), None);
    assert_eq!(static_selector().match_prefix("{"), None);

    let long = format!("{}{{", "a".repeat(51));
    assert_eq!(static_selector().match_prefix(&long), None);
}
