use alloc::borrow::Cow;

use crate::{UnicodeRange, UrlEncoder};

#[test]
fn space_becomes_percent_20() {
    let url = UrlEncoder::default();
    assert_eq!(url.encode("a b"), "a%20b");
}

#[test]
fn multibyte_scalars_encode_their_utf8_bytes() {
    let url = UrlEncoder::default();
    assert_eq!(url.encode("é"), "%C3%A9");
    assert_eq!(url.encode("☃"), "%E2%98%83");
    assert_eq!(url.encode("😀"), "%F0%9F%98%80");
}

#[test]
fn unreserved_ascii_passes_through() {
    let url = UrlEncoder::default();
    let input = "AZaz09-._~!()*,;@$";
    assert!(matches!(url.encode(input), Cow::Borrowed(s) if s == input));
}

#[test]
fn reserved_delimiters_are_escaped() {
    let url = UrlEncoder::default();
    assert_eq!(url.encode("/"), "%2F");
    assert_eq!(url.encode("?"), "%3F");
    assert_eq!(url.encode("#"), "%23");
    assert_eq!(url.encode("%"), "%25");
    assert_eq!(url.encode("["), "%5B");
    assert_eq!(url.encode("]"), "%5D");
    assert_eq!(url.encode("{"), "%7B");
    assert_eq!(url.encode("}"), "%7D");
    assert_eq!(url.encode("|"), "%7C");
    assert_eq!(url.encode("^"), "%5E");
    assert_eq!(url.encode(":"), "%3A");
    assert_eq!(url.encode("="), "%3D");
    assert_eq!(url.encode("\\"), "%5C");
    assert_eq!(url.encode("`"), "%60");
}

#[test]
fn html_sensitive_characters_are_escaped_too() {
    let url = UrlEncoder::default();
    assert_eq!(url.encode("a+b&c"), "a%2Bb%26c");
    assert_eq!(url.encode("<'>\""), "%3C%27%3E%22");
}

#[test]
fn allowed_ranges_extend_pass_through() {
    let url = UrlEncoder::with_ranges(&[
        UnicodeRange::BASIC_LATIN,
        UnicodeRange::LATIN_1_SUPPLEMENT,
    ]);
    assert_eq!(url.encode("é"), "é");
    // Delimiters stay escaped regardless of ranges.
    assert_eq!(url.encode("é/è"), "é%2Fè");
}

#[test]
fn query_string_example() {
    let url = UrlEncoder::default();
    assert_eq!(
        url.encode("name=张三 100%"),
        "name%3D%E5%BC%A0%E4%B8%89%20100%25"
    );
}

#[test]
fn max_output_bound_is_declared() {
    assert_eq!(UrlEncoder::default().max_output_units_per_input_unit(), 12);
}
