//! HTML escape strategy.

use super::EscapeBuf;
use crate::scalar::ScalarValue;

/// Escapes scalars for HTML element and attribute content.
///
/// The four characters with dedicated named entities use them; everything
/// else becomes a numeric character reference `&#xHHHH;` in uppercase hex
/// with no superfluous leading zeros. The apostrophe has no named form
/// here; it falls through to the numeric path as `&#x27;`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HtmlEscaper;

impl HtmlEscaper {
    /// Worst case is an astral numeric reference, `&#x10FFFF;`.
    pub(crate) fn max_output_units(&self) -> usize {
        10
    }

    pub(crate) fn render(&self, value: ScalarValue) -> EscapeBuf {
        let mut buf = EscapeBuf::new();
        match value.value() {
            0x3C => buf.extend(b"&lt;"),
            0x3E => buf.extend(b"&gt;"),
            0x26 => buf.extend(b"&amp;"),
            0x22 => buf.extend(b"&quot;"),
            cp => {
                buf.extend(b"&#x");
                buf.push_hex(cp);
                buf.push(b';');
            }
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::HtmlEscaper;
    use crate::scalar::ScalarValue;

    fn render(c: char) -> alloc::string::String {
        let e = HtmlEscaper;
        let buf = e.render(ScalarValue::from(c));
        core::str::from_utf8(buf.as_slice()).unwrap().into()
    }

    #[test]
    fn named_entities() {
        assert_eq!(render('<'), "&lt;");
        assert_eq!(render('>'), "&gt;");
        assert_eq!(render('&'), "&amp;");
        assert_eq!(render('"'), "&quot;");
    }

    #[test]
    fn numeric_fallback_is_uppercase_minimal_hex() {
        assert_eq!(render('\''), "&#x27;");
        assert_eq!(render('\u{9}'), "&#x9;");
        assert_eq!(render('\u{FFFD}'), "&#xFFFD;");
        assert_eq!(render('😀'), "&#x1F600;");
    }

    #[test]
    fn output_never_exceeds_declared_maximum() {
        let e = HtmlEscaper;
        for cp in [0u32, 0x27, 0xFFFF, 0x10FFFF] {
            let v = ScalarValue::new(cp).unwrap();
            assert!(e.render(v).as_slice().len() <= e.max_output_units());
        }
    }
}
