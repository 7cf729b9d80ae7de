//! Unicode scalar values and incremental UTF-8 / UTF-16 decoding.
//!
//! A [`ScalarValue`] is a validated code point: an integer in
//! `[0, 0x10FFFF]` that is not a surrogate. The decode functions work over
//! caller-supplied slices and distinguish *truncated* input (more data may
//! arrive) from *malformed* input, which the encoders substitute with
//! U+FFFD and escape.

use thiserror::Error;

/// Error returned when constructing a [`ScalarValue`] from an integer that
/// is out of range or inside the surrogate block.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("0x{0:X} is not a Unicode scalar value")]
pub struct InvalidScalar(/** The rejected value. */ pub u32);

/// A validated Unicode scalar value.
///
/// Unlike [`char`], a `ScalarValue` is constructed from untrusted integers
/// and from raw UTF-16 code-unit streams, so the surrogate/range checks are
/// explicit rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScalarValue(u32);

/// Outcome of decoding one scalar from the front of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarDecode {
    /// A scalar was decoded from `consumed` leading units.
    Done {
        /// The decoded scalar.
        value: ScalarValue,
        /// Code units (or bytes) consumed from the source.
        consumed: usize,
    },
    /// The slice ends with a valid prefix of a longer sequence; supply more
    /// input and retry. Only returned for non-final blocks.
    NeedMoreData,
    /// The leading `consumed` units are malformed. The caller substitutes
    /// [`ScalarValue::REPLACEMENT`].
    Invalid {
        /// Units to skip past the malformed prefix (always at least 1 for
        /// non-empty input).
        consumed: usize,
    },
}

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Expected total length of a UTF-8 sequence given its lead byte, or 1 for
/// bytes that cannot start a multi-byte sequence.
#[inline]
fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

impl ScalarValue {
    /// U+FFFD REPLACEMENT CHARACTER, substituted for malformed input.
    pub const REPLACEMENT: Self = Self(0xFFFD);

    /// Validates `value` as a Unicode scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScalar`] if `value` exceeds U+10FFFF or falls in the
    /// surrogate block `[0xD800, 0xDFFF]`.
    pub fn new(value: u32) -> Result<Self, InvalidScalar> {
        if value > 0x0010_FFFF || (0xD800..=0xDFFF).contains(&value) {
            Err(InvalidScalar(value))
        } else {
            Ok(Self(value))
        }
    }

    /// The scalar as a plain integer.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether the scalar is in the ASCII range.
    #[must_use]
    pub fn is_ascii(self) -> bool {
        self.0 <= 0x7F
    }

    /// Whether the scalar is in the Basic Multilingual Plane.
    #[must_use]
    pub fn is_bmp(self) -> bool {
        self.0 <= 0xFFFF
    }

    /// Length of the scalar's UTF-8 encoding in bytes (1–4).
    #[must_use]
    pub fn len_utf8(self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    /// Length of the scalar's UTF-16 encoding in code units (1–2).
    #[must_use]
    pub fn len_utf16(self) -> usize {
        if self.is_bmp() { 1 } else { 2 }
    }

    /// The UTF-16 surrogate pair for a supplementary-plane scalar.
    ///
    /// Only meaningful when `!self.is_bmp()`.
    #[must_use]
    pub(crate) fn to_surrogate_pair(self) -> (u16, u16) {
        let v = self.0 - 0x10000;
        (0xD800 + (v >> 10) as u16, 0xDC00 + (v & 0x3FF) as u16)
    }

    /// Decodes one scalar from the front of a UTF-16 code-unit slice.
    ///
    /// A lone high surrogate at the end of the slice is reported as
    /// [`ScalarDecode::NeedMoreData`] unless `is_final_block` is set, in
    /// which case it is malformed. An empty slice is `NeedMoreData`.
    #[must_use]
    pub fn decode_from_utf16(src: &[u16], is_final_block: bool) -> ScalarDecode {
        let Some(&first) = src.first() else {
            return ScalarDecode::NeedMoreData;
        };

        if is_high_surrogate(first) {
            return match src.get(1) {
                Some(&second) if is_low_surrogate(second) => {
                    let hi = u32::from(first) - 0xD800;
                    let lo = u32::from(second) - 0xDC00;
                    ScalarDecode::Done {
                        value: Self(0x10000 + ((hi << 10) | lo)),
                        consumed: 2,
                    }
                }
                Some(_) => ScalarDecode::Invalid { consumed: 1 },
                None if is_final_block => ScalarDecode::Invalid { consumed: 1 },
                None => ScalarDecode::NeedMoreData,
            };
        }
        if is_low_surrogate(first) {
            return ScalarDecode::Invalid { consumed: 1 };
        }
        ScalarDecode::Done {
            value: Self(u32::from(first)),
            consumed: 1,
        }
    }

    /// Decodes one scalar from the front of a UTF-8 byte slice.
    ///
    /// Overlong encodings, surrogate encodings, and out-of-range sequences
    /// are malformed; their maximal invalid prefix is consumed. A sequence
    /// truncated by the end of a non-final block is `NeedMoreData`; the same
    /// truncation in a final block consumes the whole tail as malformed.
    #[must_use]
    pub fn decode_from_utf8(src: &[u8], is_final_block: bool) -> ScalarDecode {
        let (ch, size) = bstr::decode_utf8(src);
        match ch {
            Some(c) => ScalarDecode::Done {
                value: Self::from(c),
                consumed: size,
            },
            None if size == 0 => ScalarDecode::NeedMoreData,
            None => {
                // `decode_utf8` consumed the maximal valid prefix. If that
                // prefix runs to the end of the slice and the lead byte
                // promises more, the sequence may still complete.
                if !is_final_block && size == src.len() && utf8_sequence_len(src[0]) > size {
                    ScalarDecode::NeedMoreData
                } else {
                    ScalarDecode::Invalid { consumed: size }
                }
            }
        }
    }

    /// Writes the scalar's UTF-16 encoding into `dst`.
    ///
    /// Returns the number of code units written, or `None` if `dst` is too
    /// small. Never fails for any other reason.
    #[must_use]
    pub fn encode_utf16(self, dst: &mut [u16]) -> Option<usize> {
        if self.is_bmp() {
            *dst.first_mut()? = self.0 as u16;
            Some(1)
        } else {
            if dst.len() < 2 {
                return None;
            }
            let (hi, lo) = self.to_surrogate_pair();
            dst[0] = hi;
            dst[1] = lo;
            Some(2)
        }
    }

    /// Writes the scalar's UTF-8 encoding into `dst`.
    ///
    /// Returns the number of bytes written, or `None` if `dst` is too small.
    #[must_use]
    pub fn encode_utf8(self, dst: &mut [u8]) -> Option<usize> {
        let len = self.len_utf8();
        if dst.len() < len {
            return None;
        }
        let v = self.0;
        match len {
            1 => dst[0] = v as u8,
            2 => {
                dst[0] = 0xC0 | (v >> 6) as u8;
                dst[1] = 0x80 | (v as u8 & 0x3F);
            }
            3 => {
                dst[0] = 0xE0 | (v >> 12) as u8;
                dst[1] = 0x80 | ((v >> 6) as u8 & 0x3F);
                dst[2] = 0x80 | (v as u8 & 0x3F);
            }
            _ => {
                dst[0] = 0xF0 | (v >> 18) as u8;
                dst[1] = 0x80 | ((v >> 12) as u8 & 0x3F);
                dst[2] = 0x80 | ((v >> 6) as u8 & 0x3F);
                dst[3] = 0x80 | (v as u8 & 0x3F);
            }
        }
        Some(len)
    }
}

impl From<char> for ScalarValue {
    fn from(c: char) -> Self {
        Self(u32::from(c))
    }
}

impl TryFrom<u32> for ScalarValue {
    type Error = InvalidScalar;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
