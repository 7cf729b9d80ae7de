//! Builder-style configuration for the concrete encoders.

use crate::{bitmap::AllowedBmpBitmap, ranges::UnicodeRange};

/// Configures which code points an encoder lets through unescaped.
///
/// A settings value is a builder: it is mutated freely while an encoder is
/// being assembled, and the encoder snapshots it at construction. Mutating
/// the settings afterwards never affects an already-built encoder.
///
/// Settings start empty: nothing is allowed until ranges or characters are
/// added. Note that encoders additionally forbid undefined code points and
/// (per context) HTML-sensitive characters, so allowing a character here is
/// necessary but not always sufficient for pass-through.
///
/// # Examples
///
/// ```
/// use webescape::{HtmlEncoder, TextEncoderSettings, UnicodeRange};
///
/// let mut settings = TextEncoderSettings::new();
/// settings.allow_range(UnicodeRange::BASIC_LATIN);
/// settings.allow_range(UnicodeRange::LATIN_1_SUPPLEMENT);
/// let encoder = HtmlEncoder::new(&settings);
/// assert_eq!(encoder.encode("café"), "café");
/// ```
#[derive(Clone)]
pub struct TextEncoderSettings {
    bitmap: AllowedBmpBitmap,
}

impl TextEncoderSettings {
    /// Creates settings with no code points allowed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bitmap: AllowedBmpBitmap::new(),
        }
    }

    /// Creates settings allowing exactly the given ranges.
    #[must_use]
    pub fn with_ranges(ranges: &[UnicodeRange]) -> Self {
        let mut settings = Self::new();
        settings.allow_ranges(ranges);
        settings
    }

    /// Allows a single character.
    pub fn allow_char(&mut self, c: char) {
        self.bitmap.allow_char(c);
    }

    /// Allows each character in `chars`.
    pub fn allow_chars(&mut self, chars: &[char]) {
        for &c in chars {
            self.bitmap.allow_char(c);
        }
    }

    /// Allows a single code point. Code points outside the BMP cannot be
    /// allow-listed and are ignored.
    pub fn allow_code_point(&mut self, code_point: u32) {
        self.bitmap.allow_code_point(code_point);
    }

    /// Allows every code point in `range`.
    pub fn allow_range(&mut self, range: UnicodeRange) {
        for cp in range.code_points() {
            self.bitmap.allow_code_point(cp);
        }
    }

    /// Allows every code point in each of `ranges`.
    pub fn allow_ranges(&mut self, ranges: &[UnicodeRange]) {
        for &range in ranges {
            self.allow_range(range);
        }
    }

    /// Forbids a single character.
    pub fn forbid_char(&mut self, c: char) {
        self.bitmap.forbid_char(c);
    }

    /// Forbids each character in `chars`.
    pub fn forbid_chars(&mut self, chars: &[char]) {
        for &c in chars {
            self.bitmap.forbid_char(c);
        }
    }

    /// Resets the settings to the empty state.
    pub fn clear(&mut self) {
        self.bitmap.clear();
    }

    /// Iterates every allowed code point in ascending order.
    ///
    /// The sequence is finite (it scans `0..=0xFFFF`) and restartable.
    pub fn allowed_code_points(&self) -> impl Iterator<Item = u32> + '_ {
        (0..=0xFFFFu32).filter(|&cp| self.bitmap.is_code_point_allowed(cp))
    }

    /// Snapshot of the underlying bitmap, taken by engine construction.
    pub(crate) fn snapshot(&self) -> AllowedBmpBitmap {
        self.bitmap.clone()
    }
}

impl Default for TextEncoderSettings {
    fn default() -> Self {
        Self::new()
    }
}
