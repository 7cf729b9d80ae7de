//! The shared incremental scan/copy/escape loop.
//!
//! The engine is not a state machine with named states; each call consumes a
//! maximal prefix of the source that fits the destination, byte-copying
//! allowed scalars and escaping disallowed ones, and always stops cleanly at
//! a scalar boundary. Reported counts cover only fully committed scalars, so
//! a caller can resume with more input or a fresh destination at any time.

use crate::{
    bitmap::AllowedBmpBitmap,
    escaper::Escaper,
    scalar::{ScalarDecode, ScalarValue},
    settings::TextEncoderSettings,
};

/// Status of one `encode_*` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// The entire source was consumed.
    Done,
    /// The destination filled before the source was exhausted. Retry the
    /// remaining source with a fresh destination.
    DestinationTooSmall,
    /// A non-final source ends mid-sequence. Retry once more input has been
    /// appended. Never returned when `is_final_block` is set.
    NeedMoreData,
}

/// Outcome of one `encode_*` call: status plus committed counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeResult {
    /// Why the call stopped.
    pub status: OperationStatus,
    /// Source units (bytes or UTF-16 code units) fully consumed.
    pub consumed: usize,
    /// Destination units written.
    pub written: usize,
}

impl EncodeResult {
    fn new(status: OperationStatus, consumed: usize, written: usize) -> Self {
        Self {
            status,
            consumed,
            written,
        }
    }
}

/// A pre-rendered decision for one ASCII code point: pass through
/// (`len == 0`) or emit the packed escape sequence.
#[derive(Debug, Clone, Copy)]
struct AsciiEscape {
    bytes: [u8; 8],
    len: u8,
}

impl AsciiEscape {
    const PASS_THROUGH: Self = Self {
        bytes: [0; 8],
        len: 0,
    };
}

/// One configured encoder: bitmap snapshot, escape strategy, and the ASCII
/// fast-path tables. Immutable after construction and freely shareable.
pub(crate) struct EncoderEngine {
    bitmap: AllowedBmpBitmap,
    escaper: Escaper,
    /// 128-bit allow mask so the hot path tests one bit instead of probing
    /// the full bitmap.
    ascii_allowed: [u64; 2],
    ascii_escapes: [AsciiEscape; 128],
}

impl EncoderEngine {
    pub(crate) fn new(
        escaper: Escaper,
        settings: &TextEncoderSettings,
        forbid_html_characters: bool,
        extra_chars_to_forbid: &[char],
    ) -> Self {
        let mut bitmap = settings.snapshot();
        bitmap.forbid_undefined_code_points();
        if forbid_html_characters {
            bitmap.forbid_html_characters();
        }
        for &c in extra_chars_to_forbid {
            bitmap.forbid_char(c);
        }

        let mut ascii_allowed = [0u64; 2];
        let mut ascii_escapes = [AsciiEscape::PASS_THROUGH; 128];
        for cp in 0..128u32 {
            if bitmap.is_code_point_allowed(cp) {
                ascii_allowed[(cp >> 6) as usize] |= 1 << (cp & 63);
            } else {
                // Invariant: ASCII escapes fit the packed table. All three
                // strategies emit at most 6 units for an ASCII input.
                let rendered = escaper.render(ScalarValue::new(cp).unwrap_or(ScalarValue::REPLACEMENT));
                let seq = rendered.as_slice();
                let mut entry = AsciiEscape::PASS_THROUGH;
                entry.bytes[..seq.len()].copy_from_slice(seq);
                entry.len = seq.len() as u8;
                ascii_escapes[cp as usize] = entry;
            }
        }

        Self {
            bitmap,
            escaper,
            ascii_allowed,
            ascii_escapes,
        }
    }

    pub(crate) fn escaper(&self) -> &Escaper {
        &self.escaper
    }

    #[inline]
    fn is_ascii_allowed(&self, cp: u32) -> bool {
        self.ascii_allowed[(cp >> 6) as usize] & (1 << (cp & 63)) != 0
    }

    /// Whether `value` would be escaped rather than passed through.
    #[inline]
    pub(crate) fn will_encode(&self, value: ScalarValue) -> bool {
        !value.is_bmp() || !self.bitmap.is_code_point_allowed(value.value())
    }

    /// Encodes UTF-16 source units into a UTF-16 destination.
    pub(crate) fn encode_utf16(
        &self,
        src: &[u16],
        dst: &mut [u16],
        is_final_block: bool,
    ) -> EncodeResult {
        let mut read = 0;
        let mut written = 0;

        while read < src.len() {
            let unit = src[read];
            if unit < 0x80 {
                let cp = u32::from(unit);
                if self.is_ascii_allowed(cp) {
                    if written >= dst.len() {
                        return EncodeResult::new(OperationStatus::DestinationTooSmall, read, written);
                    }
                    dst[written] = unit;
                    written += 1;
                    read += 1;
                    continue;
                }
                let entry = &self.ascii_escapes[cp as usize];
                let n = usize::from(entry.len);
                if dst.len() - written < n {
                    return EncodeResult::new(OperationStatus::DestinationTooSmall, read, written);
                }
                for (d, &b) in dst[written..written + n].iter_mut().zip(&entry.bytes[..n]) {
                    *d = u16::from(b);
                }
                written += n;
                read += 1;
                continue;
            }

            match ScalarValue::decode_from_utf16(&src[read..], is_final_block) {
                ScalarDecode::NeedMoreData => {
                    return EncodeResult::new(OperationStatus::NeedMoreData, read, written);
                }
                ScalarDecode::Invalid { consumed } => {
                    match self.escaper.encode_utf16(ScalarValue::REPLACEMENT, &mut dst[written..]) {
                        Some(n) => {
                            written += n;
                            read += consumed;
                        }
                        None => {
                            return EncodeResult::new(
                                OperationStatus::DestinationTooSmall,
                                read,
                                written,
                            );
                        }
                    }
                }
                ScalarDecode::Done { value, consumed } => {
                    if self.will_encode(value) {
                        match self.escaper.encode_utf16(value, &mut dst[written..]) {
                            Some(n) => written += n,
                            None => {
                                return EncodeResult::new(
                                    OperationStatus::DestinationTooSmall,
                                    read,
                                    written,
                                );
                            }
                        }
                    } else {
                        if dst.len() - written < consumed {
                            return EncodeResult::new(
                                OperationStatus::DestinationTooSmall,
                                read,
                                written,
                            );
                        }
                        dst[written..written + consumed]
                            .copy_from_slice(&src[read..read + consumed]);
                        written += consumed;
                    }
                    read += consumed;
                }
            }
        }

        EncodeResult::new(OperationStatus::Done, read, written)
    }

    /// Encodes UTF-8 source bytes into a UTF-8 destination.
    pub(crate) fn encode_utf8(
        &self,
        src: &[u8],
        dst: &mut [u8],
        is_final_block: bool,
    ) -> EncodeResult {
        let mut read = 0;
        let mut written = 0;

        while read < src.len() {
            let byte = src[read];
            if byte < 0x80 {
                let cp = u32::from(byte);
                if self.is_ascii_allowed(cp) {
                    if written >= dst.len() {
                        return EncodeResult::new(OperationStatus::DestinationTooSmall, read, written);
                    }
                    dst[written] = byte;
                    written += 1;
                    read += 1;
                    continue;
                }
                let entry = &self.ascii_escapes[cp as usize];
                let n = usize::from(entry.len);
                if dst.len() - written < n {
                    return EncodeResult::new(OperationStatus::DestinationTooSmall, read, written);
                }
                dst[written..written + n].copy_from_slice(&entry.bytes[..n]);
                written += n;
                read += 1;
                continue;
            }

            match ScalarValue::decode_from_utf8(&src[read..], is_final_block) {
                ScalarDecode::NeedMoreData => {
                    return EncodeResult::new(OperationStatus::NeedMoreData, read, written);
                }
                ScalarDecode::Invalid { consumed } => {
                    match self.escaper.encode_utf8(ScalarValue::REPLACEMENT, &mut dst[written..]) {
                        Some(n) => {
                            written += n;
                            read += consumed;
                        }
                        None => {
                            return EncodeResult::new(
                                OperationStatus::DestinationTooSmall,
                                read,
                                written,
                            );
                        }
                    }
                }
                ScalarDecode::Done { value, consumed } => {
                    if self.will_encode(value) {
                        match self.escaper.encode_utf8(value, &mut dst[written..]) {
                            Some(n) => written += n,
                            None => {
                                return EncodeResult::new(
                                    OperationStatus::DestinationTooSmall,
                                    read,
                                    written,
                                );
                            }
                        }
                    } else {
                        if dst.len() - written < consumed {
                            return EncodeResult::new(
                                OperationStatus::DestinationTooSmall,
                                read,
                                written,
                            );
                        }
                        dst[written..written + consumed]
                            .copy_from_slice(&src[read..read + consumed]);
                        written += consumed;
                    }
                    read += consumed;
                }
            }
        }

        EncodeResult::new(OperationStatus::Done, read, written)
    }

    /// Index of the first UTF-16 code unit that cannot pass through, or
    /// `None` when the whole slice is clean.
    ///
    /// Surrogates always stop the scan here: either half of a valid pair
    /// denotes a supplementary-plane scalar, which is always escaped.
    pub(crate) fn find_first_unit_to_encode(&self, src: &[u16]) -> Option<usize> {
        #[inline]
        fn allowed(engine: &EncoderEngine, unit: u16) -> bool {
            engine.bitmap.is_code_point_allowed(u32::from(unit))
        }

        let mut i = 0;
        // Unrolled 8-wide scan; the tail loop below preserves identical
        // results for the remainder.
        while src.len() - i >= 8 {
            if !allowed(self, src[i]) {
                return Some(i);
            }
            if !allowed(self, src[i + 1]) {
                return Some(i + 1);
            }
            if !allowed(self, src[i + 2]) {
                return Some(i + 2);
            }
            if !allowed(self, src[i + 3]) {
                return Some(i + 3);
            }
            if !allowed(self, src[i + 4]) {
                return Some(i + 4);
            }
            if !allowed(self, src[i + 5]) {
                return Some(i + 5);
            }
            if !allowed(self, src[i + 6]) {
                return Some(i + 6);
            }
            if !allowed(self, src[i + 7]) {
                return Some(i + 7);
            }
            i += 8;
        }
        while i < src.len() {
            if !allowed(self, src[i]) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Byte index of the first UTF-8 scalar that cannot pass through, or
    /// `None` when the whole slice is clean. Treats the slice as final:
    /// malformed or truncated sequences need encoding at their start.
    pub(crate) fn find_first_byte_to_encode(&self, src: &[u8]) -> Option<usize> {
        let mut i = 0;
        while i < src.len() {
            let byte = src[i];
            if byte < 0x80 {
                if !self.is_ascii_allowed(u32::from(byte)) {
                    return Some(i);
                }
                i += 1;
                continue;
            }
            match ScalarValue::decode_from_utf8(&src[i..], true) {
                ScalarDecode::Done { value, consumed } if !self.will_encode(value) => {
                    i += consumed;
                }
                _ => return Some(i),
            }
        }
        None
    }
}
