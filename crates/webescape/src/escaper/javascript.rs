//! JavaScript / JSON string-literal escape strategy.

use super::EscapeBuf;
use crate::scalar::ScalarValue;

/// Escapes scalars for JavaScript and JSON string literals.
///
/// Control characters with conventional short forms use them (`\b \t \n
/// \f \r`), as does the backslash. With `minimal_json` set (the relaxed
/// variant), the double quote also uses its short form `\"`. Every other
/// disallowed scalar becomes `\uHHHH`, or two `\uHHHH` sequences for the
/// UTF-16 surrogate pair of an astral scalar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JavaScriptEscaper {
    minimal_json: bool,
}

impl JavaScriptEscaper {
    pub(crate) fn new() -> Self {
        Self {
            minimal_json: false,
        }
    }

    pub(crate) fn minimal_json() -> Self {
        Self { minimal_json: true }
    }

    /// Worst case is an astral surrogate pair, `\uHHHH\uHHHH`.
    pub(crate) fn max_output_units(&self) -> usize {
        12
    }

    pub(crate) fn render(&self, value: ScalarValue) -> EscapeBuf {
        let mut buf = EscapeBuf::new();
        match value.value() {
            0x08 => buf.extend(b"\\b"),
            0x09 => buf.extend(b"\\t"),
            0x0A => buf.extend(b"\\n"),
            0x0C => buf.extend(b"\\f"),
            0x0D => buf.extend(b"\\r"),
            0x5C => buf.extend(b"\\\\"),
            0x22 if self.minimal_json => buf.extend(b"\\\""),
            _ if value.is_bmp() => {
                buf.extend(b"\\u");
                buf.push_hex4(value.value() as u16);
            }
            _ => {
                let (hi, lo) = value.to_surrogate_pair();
                buf.extend(b"\\u");
                buf.push_hex4(hi);
                buf.extend(b"\\u");
                buf.push_hex4(lo);
            }
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::JavaScriptEscaper;
    use crate::scalar::ScalarValue;

    fn render(e: JavaScriptEscaper, c: char) -> alloc::string::String {
        let buf = e.render(ScalarValue::from(c));
        core::str::from_utf8(buf.as_slice()).unwrap().into()
    }

    #[test]
    fn short_forms() {
        let e = JavaScriptEscaper::new();
        assert_eq!(render(e, '\u{8}'), "\\b");
        assert_eq!(render(e, '\t'), "\\t");
        assert_eq!(render(e, '\n'), "\\n");
        assert_eq!(render(e, '\u{c}'), "\\f");
        assert_eq!(render(e, '\r'), "\\r");
        assert_eq!(render(e, '\\'), "\\\\");
    }

    #[test]
    fn quote_depends_on_minimal_mode() {
        assert_eq!(render(JavaScriptEscaper::new(), '"'), "\\u0022");
        assert_eq!(render(JavaScriptEscaper::minimal_json(), '"'), "\\\"");
    }

    #[test]
    fn bmp_and_astral_unicode_forms() {
        let e = JavaScriptEscaper::new();
        assert_eq!(render(e, '\u{0}'), "\\u0000");
        assert_eq!(render(e, '<'), "\\u003C");
        assert_eq!(render(e, '\u{FFFD}'), "\\uFFFD");
        assert_eq!(render(e, '😀'), "\\uD83D\\uDE00");
    }
}
