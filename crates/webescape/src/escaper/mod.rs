//! Per-context escape strategies.
//!
//! Each strategy renders one disallowed [`ScalarValue`] as an escape
//! sequence. The set of contexts is closed (HTML, JavaScript, URL), so
//! dispatch is a tagged variant rather than an open trait object. All
//! strategies are pure: output depends only on the scalar and the
//! destination capacity, so a strategy can be shared freely across calls
//! and threads.

mod html;
mod javascript;
mod url;

pub(crate) use html::HtmlEscaper;
pub(crate) use javascript::JavaScriptEscaper;
pub(crate) use url::UrlEscaper;

use crate::scalar::ScalarValue;

pub(crate) const HEX_UPPER: [u8; 16] = *b"0123456789ABCDEF";

/// A fully rendered escape sequence.
///
/// Escape output is always ASCII, so a byte buffer serves both the UTF-8
/// and UTF-16 destinations (the latter by widening). The longest sequence
/// any context produces is 12 units (`\uHHHH\uHHHH`, `%XX%XX%XX%XX`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct EscapeBuf {
    bytes: [u8; 12],
    len: u8,
}

impl EscapeBuf {
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0; 12],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes[usize::from(self.len)] = byte;
        self.len += 1;
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// Appends `value` as minimal-width uppercase hex.
    pub(crate) fn push_hex(&mut self, value: u32) {
        let digits = (32 - value.leading_zeros()).div_ceil(4).max(1);
        for shift in (0..digits).rev() {
            self.push(HEX_UPPER[((value >> (shift * 4)) & 0xF) as usize]);
        }
    }

    /// Appends `value` as exactly four uppercase hex digits.
    pub(crate) fn push_hex4(&mut self, value: u16) {
        for shift in (0..4u32).rev() {
            self.push(HEX_UPPER[((u32::from(value) >> (shift * 4)) & 0xF) as usize]);
        }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

/// The closed set of escape strategies.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Escaper {
    Html(HtmlEscaper),
    JavaScript(JavaScriptEscaper),
    Url(UrlEscaper),
}

impl Escaper {
    /// Upper bound on output units per input character; every render is
    /// checked against it by the encoder facades.
    pub(crate) fn max_output_units(&self) -> usize {
        match self {
            Escaper::Html(e) => e.max_output_units(),
            Escaper::JavaScript(e) => e.max_output_units(),
            Escaper::Url(e) => e.max_output_units(),
        }
    }

    pub(crate) fn render(&self, value: ScalarValue) -> EscapeBuf {
        match self {
            Escaper::Html(e) => e.render(value),
            Escaper::JavaScript(e) => e.render(value),
            Escaper::Url(e) => e.render(value),
        }
    }

    /// Renders `value` into a UTF-8 destination.
    ///
    /// Returns the bytes written, or `None` if `dst` is too small. `None`
    /// never means "cannot escape"; the caller retries with more space.
    pub(crate) fn encode_utf8(&self, value: ScalarValue, dst: &mut [u8]) -> Option<usize> {
        let buf = self.render(value);
        let seq = buf.as_slice();
        if dst.len() < seq.len() {
            return None;
        }
        dst[..seq.len()].copy_from_slice(seq);
        Some(seq.len())
    }

    /// Renders `value` into a UTF-16 destination (escapes are ASCII, so the
    /// bytes widen one-to-one).
    pub(crate) fn encode_utf16(&self, value: ScalarValue, dst: &mut [u16]) -> Option<usize> {
        let buf = self.render(value);
        let seq = buf.as_slice();
        if dst.len() < seq.len() {
            return None;
        }
        for (d, &b) in dst.iter_mut().zip(seq) {
            *d = u16::from(b);
        }
        Some(seq.len())
    }
}
