use alloc::borrow::Cow;

use crate::{JavaScriptEncoder, UnicodeRange};

#[test]
fn newline_and_backslash_use_short_forms() {
    let js = JavaScriptEncoder::default();
    assert_eq!(js.encode("a\nb\\c"), "a\\nb\\\\c");
    assert_eq!(js.encode("\u{8}\t\u{c}\r"), "\\b\\t\\f\\r");
}

#[test]
fn default_escapes_quote_as_unicode_form() {
    let js = JavaScriptEncoder::default();
    assert_eq!(js.encode("say \"hi\""), "say \\u0022hi\\u0022");
}

#[test]
fn html_sensitive_characters_are_escaped() {
    let js = JavaScriptEncoder::default();
    assert_eq!(js.encode("<&>'+`"), "\\u003C\\u0026\\u003E\\u0027\\u002B\\u0060");
}

#[test]
fn astral_scalars_become_surrogate_pair_escapes() {
    let js = JavaScriptEncoder::default();
    assert_eq!(js.encode("😀"), "\\uD83D\\uDE00");
}

#[test]
fn non_ascii_is_escaped_under_default_ranges() {
    let js = JavaScriptEncoder::default();
    assert_eq!(js.encode("é"), "\\u00E9");
    let js = JavaScriptEncoder::with_ranges(&[
        UnicodeRange::BASIC_LATIN,
        UnicodeRange::LATIN_1_SUPPLEMENT,
    ]);
    assert_eq!(js.encode("é"), "é");
}

#[test]
fn relaxed_variant_allows_most_of_the_bmp() {
    let relaxed = JavaScriptEncoder::relaxed();
    let input = "héllo 水 привет";
    assert!(matches!(relaxed.encode(input), Cow::Borrowed(s) if s == input));
    // Quote gets the minimal form.
    assert_eq!(relaxed.encode("\"x\""), "\\\"x\\\"");
    // Backslash, backtick, and HTML-sensitive characters stay escaped.
    assert_eq!(relaxed.encode("\\"), "\\\\");
    assert_eq!(relaxed.encode("`"), "\\u0060");
    assert_eq!(relaxed.encode("<"), "\\u003C");
    // Astral scalars are outside the bitmap and still escape.
    assert_eq!(relaxed.encode("😀"), "\\uD83D\\uDE00");
}

#[test]
fn controls_always_escape() {
    for js in [JavaScriptEncoder::default(), JavaScriptEncoder::relaxed()] {
        assert_eq!(js.encode("\u{0}"), "\\u0000");
        assert_eq!(js.encode("\u{1F}"), "\\u001F");
        assert_eq!(js.encode("\n"), "\\n");
    }
}

#[test]
fn max_output_bound_is_declared() {
    assert_eq!(
        JavaScriptEncoder::default().max_output_units_per_input_unit(),
        12
    );
}
