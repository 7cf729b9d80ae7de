//! Fixed bitset over the Basic Multilingual Plane.
//!
//! One bit per BMP code point: set means "passes through unescaped".
//! Supplementary-plane scalars are never representable here and always test
//! as disallowed; the engine escapes them unconditionally.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

const WORDS: usize = 0x1_0000 / 32;

/// Allow-set over code points `0..=0xFFFF`.
///
/// Mutated only while an encoder is being configured; the engine takes a
/// clone at construction, after which the set is read-only.
#[derive(Clone)]
pub(crate) struct AllowedBmpBitmap {
    bits: [u32; WORDS],
}

impl AllowedBmpBitmap {
    /// An empty set: every code point is escaped.
    pub(crate) fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    pub(crate) fn allow_char(&mut self, c: char) {
        self.allow_code_point(u32::from(c));
    }

    pub(crate) fn forbid_char(&mut self, c: char) {
        self.forbid_code_point(u32::from(c));
    }

    /// Sets the bit for `code_point`. Code points outside the BMP are not
    /// representable and are ignored.
    pub(crate) fn allow_code_point(&mut self, code_point: u32) {
        if code_point <= 0xFFFF {
            self.bits[(code_point >> 5) as usize] |= 1 << (code_point & 31);
        }
    }

    pub(crate) fn forbid_code_point(&mut self, code_point: u32) {
        if code_point <= 0xFFFF {
            self.bits[(code_point >> 5) as usize] &= !(1 << (code_point & 31));
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Clears every code point that is not defined in Unicode.
    ///
    /// Unassigned, surrogate, private-use, and control code points are
    /// always escaped no matter what an allow-list says; letting them
    /// through silently is a robustness hazard.
    pub(crate) fn forbid_undefined_code_points(&mut self) {
        for word in 0..WORDS {
            if self.bits[word] == 0 {
                continue;
            }
            for bit in 0..32 {
                let cp = (word as u32) << 5 | bit;
                if self.bits[word] & (1 << bit) != 0 && !is_code_point_defined(cp) {
                    self.bits[word] &= !(1 << bit);
                }
            }
        }
    }

    /// Clears the characters with special meaning in HTML contexts:
    /// `< > & ' " +`.
    pub(crate) fn forbid_html_characters(&mut self) {
        for c in ['<', '>', '&', '\'', '"', '+'] {
            self.forbid_char(c);
        }
    }

    #[inline]
    pub(crate) fn is_char_allowed(&self, c: char) -> bool {
        self.is_code_point_allowed(u32::from(c))
    }

    /// The hot-path membership test. Code points above the BMP always test
    /// false.
    #[inline]
    pub(crate) fn is_code_point_allowed(&self, code_point: u32) -> bool {
        code_point <= 0xFFFF
            && self.bits[(code_point >> 5) as usize] & (1 << (code_point & 31)) != 0
    }
}

/// Whether `code_point` is assigned a non-control, non-private-use meaning
/// by the Unicode character database.
pub(crate) fn is_code_point_defined(code_point: u32) -> bool {
    // Surrogates are not `char`s, so the category lookup can't see them.
    if (0xD800..=0xDFFF).contains(&code_point) {
        return false;
    }
    let Some(c) = char::from_u32(code_point) else {
        return false;
    };
    !matches!(
        c.general_category(),
        GeneralCategory::Unassigned
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Control
    )
}
