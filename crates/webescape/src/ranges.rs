//! Contiguous ranges of BMP code points used to configure allow-lists.

use thiserror::Error;

/// Error returned when a [`UnicodeRange`] would extend past the BMP.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("range starting at 0x{first:X} with length {len} does not fit in the BMP")]
pub struct InvalidRange {
    /// First code point of the rejected range.
    pub first: u32,
    /// Requested length.
    pub len: u32,
}

/// A contiguous range of code points within the Basic Multilingual Plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeRange {
    first: u32,
    len: u32,
}

impl UnicodeRange {
    /// Basic Latin (ASCII), U+0000–U+007F.
    pub const BASIC_LATIN: Self = Self { first: 0x0000, len: 0x80 };
    /// Latin-1 Supplement, U+0080–U+00FF.
    pub const LATIN_1_SUPPLEMENT: Self = Self { first: 0x0080, len: 0x80 };
    /// Latin Extended-A, U+0100–U+017F.
    pub const LATIN_EXTENDED_A: Self = Self { first: 0x0100, len: 0x80 };
    /// Latin Extended-B, U+0180–U+024F.
    pub const LATIN_EXTENDED_B: Self = Self { first: 0x0180, len: 0xD0 };
    /// Greek and Coptic, U+0370–U+03FF.
    pub const GREEK_AND_COPTIC: Self = Self { first: 0x0370, len: 0x90 };
    /// Cyrillic, U+0400–U+04FF.
    pub const CYRILLIC: Self = Self { first: 0x0400, len: 0x100 };
    /// Hiragana, U+3040–U+309F.
    pub const HIRAGANA: Self = Self { first: 0x3040, len: 0x60 };
    /// Katakana, U+30A0–U+30FF.
    pub const KATAKANA: Self = Self { first: 0x30A0, len: 0x60 };
    /// CJK Unified Ideographs, U+4E00–U+9FFF.
    pub const CJK_UNIFIED_IDEOGRAPHS: Self = Self { first: 0x4E00, len: 0x5200 };
    /// The entire Basic Multilingual Plane, U+0000–U+FFFF.
    pub const ALL: Self = Self { first: 0x0000, len: 0x1_0000 };

    /// Builds a range of `len` code points starting at `first`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if any part of the range would fall outside
    /// the BMP. A range may span the surrogate block; the undefined-code-
    /// point mask keeps surrogates escaped regardless.
    pub fn new(first: u32, len: u32) -> Result<Self, InvalidRange> {
        if first > 0xFFFF || u64::from(first) + u64::from(len) > 0x1_0000 {
            Err(InvalidRange { first, len })
        } else {
            Ok(Self { first, len })
        }
    }

    /// First code point in the range.
    #[must_use]
    pub fn first(self) -> u32 {
        self.first
    }

    /// Number of code points in the range.
    #[must_use]
    pub fn len(self) -> u32 {
        self.len
    }

    /// Whether the range is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Iterates the code points in the range.
    pub(crate) fn code_points(self) -> impl Iterator<Item = u32> {
        self.first..self.first + self.len
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidRange, UnicodeRange};

    #[test]
    fn rejects_ranges_past_the_bmp() {
        assert!(UnicodeRange::new(0x1_0000, 1).is_err());
        assert_eq!(
            UnicodeRange::new(0xFFFF, 2),
            Err(InvalidRange { first: 0xFFFF, len: 2 })
        );
        assert!(UnicodeRange::new(0xFFFF, 1).is_ok());
        assert!(UnicodeRange::new(0, 0x1_0000).is_ok());
    }

    #[test]
    fn named_ranges_cover_expected_bounds() {
        assert_eq!(UnicodeRange::BASIC_LATIN.code_points().last(), Some(0x7F));
        assert_eq!(UnicodeRange::ALL.len(), 0x1_0000);
        assert_eq!(UnicodeRange::CJK_UNIFIED_IDEOGRAPHS.code_points().last(), Some(0x9FFF));
    }
}
