//! URL component escape strategy.

use super::{EscapeBuf, HEX_UPPER};
use crate::scalar::ScalarValue;

/// Percent-encodes scalars for URL components.
///
/// Encoding operates on the scalar's UTF-8 representation, not the scalar
/// value itself: each of the 1–4 bytes becomes `%XX` with uppercase hex.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UrlEscaper;

impl UrlEscaper {
    /// Worst case is a four-byte UTF-8 sequence, `%XX%XX%XX%XX`.
    pub(crate) fn max_output_units(&self) -> usize {
        12
    }

    pub(crate) fn render(&self, value: ScalarValue) -> EscapeBuf {
        let mut utf8 = [0u8; 4];
        // A 4-byte buffer always fits a scalar's UTF-8 form.
        let len = value.encode_utf8(&mut utf8).unwrap_or(0);
        let mut buf = EscapeBuf::new();
        for &byte in &utf8[..len] {
            buf.push(b'%');
            buf.push(HEX_UPPER[usize::from(byte >> 4)]);
            buf.push(HEX_UPPER[usize::from(byte & 0xF)]);
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::UrlEscaper;
    use crate::scalar::ScalarValue;

    fn render(c: char) -> alloc::string::String {
        let buf = UrlEscaper.render(ScalarValue::from(c));
        core::str::from_utf8(buf.as_slice()).unwrap().into()
    }

    #[test]
    fn percent_encodes_the_utf8_bytes() {
        assert_eq!(render(' '), "%20");
        assert_eq!(render('é'), "%C3%A9");
        assert_eq!(render('☃'), "%E2%98%83");
        assert_eq!(render('😀'), "%F0%9F%98%80");
    }
}
