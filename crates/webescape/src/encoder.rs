//! The public encoder facades: [`HtmlEncoder`], [`JavaScriptEncoder`], and
//! [`UrlEncoder`].
//!
//! Each facade owns one configured [`EncoderEngine`] and is immutable after
//! construction: a single encoder can be shared across threads and call
//! sites with no locking, because every call works over caller-provided
//! buffers and the engine holds no per-call state.

use alloc::{borrow::Cow, string::String};
use core::{fmt, ops::Range};

use crate::{
    engine::{EncodeResult, EncoderEngine},
    error::EncodeError,
    escaper::{Escaper, HtmlEscaper, JavaScriptEscaper, UrlEscaper},
    ranges::UnicodeRange,
    scalar::ScalarValue,
    settings::TextEncoderSettings,
};

/// Scratch size for the streaming writer path. Comfortably above the
/// largest single escape sequence (12 units).
const WRITER_CHUNK: usize = 1024;

fn chunk_as_str(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        // The engine commits whole scalars and ASCII escapes only.
        Err(_) => unreachable!("encoded output is always valid UTF-8"),
    }
}

/// Whole-string encode: borrow when clean, otherwise prefix-copy and run
/// the engine over the remainder with a fixed scratch chunk.
fn encode_cow<'a>(engine: &EncoderEngine, input: &'a str) -> Cow<'a, str> {
    let bytes = input.as_bytes();
    let Some(first) = engine.find_first_byte_to_encode(bytes) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    let mut remaining = &bytes[first..];
    let mut chunk = [0u8; 256];
    while !remaining.is_empty() {
        let res = engine.encode_utf8(remaining, &mut chunk, true);
        check_progress(engine, &res);
        out.push_str(chunk_as_str(&chunk[..res.written]));
        remaining = &remaining[res.consumed..];
    }
    Cow::Owned(out)
}

fn encode_to_fmt<W: fmt::Write>(
    engine: &EncoderEngine,
    writer: &mut W,
    text: &str,
) -> fmt::Result {
    let bytes = text.as_bytes();
    let Some(first) = engine.find_first_byte_to_encode(bytes) else {
        return writer.write_str(text);
    };

    writer.write_str(&text[..first])?;
    let mut remaining = &bytes[first..];
    let mut chunk = [0u8; WRITER_CHUNK];
    while !remaining.is_empty() {
        let res = engine.encode_utf8(remaining, &mut chunk, true);
        check_progress(engine, &res);
        writer.write_str(chunk_as_str(&chunk[..res.written]))?;
        remaining = &remaining[res.consumed..];
    }
    Ok(())
}

fn encode_range_to_fmt<W: fmt::Write>(
    engine: &EncoderEngine,
    writer: &mut W,
    text: &str,
    range: Range<usize>,
) -> Result<(), EncodeError> {
    let Range { start, end } = range;
    if start > end || end > text.len() {
        return Err(EncodeError::RangeOutOfBounds {
            start,
            end,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return Err(EncodeError::NotCharBoundary { start, end });
    }
    encode_to_fmt(engine, writer, &text[start..end])?;
    Ok(())
}

/// Configuration sanity check, not a recoverable runtime condition: with a
/// scratch buffer far larger than any declared maximum, a call that makes
/// no progress means an escaper broke its output-length contract.
fn check_progress(engine: &EncoderEngine, res: &EncodeResult) {
    assert!(
        res.consumed != 0 || res.written != 0,
        "escaper made no progress; its declared maximum of {} output units per input character is violated",
        engine.escaper().max_output_units()
    );
}

macro_rules! encoder_common_api {
    ($ty:ident) => {
        impl $ty {
            /// Encodes `input`, returning it unchanged (and unallocated)
            /// when no character needs escaping.
            ///
            /// The result is never partially escaped: it is either the
            /// borrowed input or a fully encoded owned string.
            ///
            /// # Panics
            ///
            /// Panics if the escape strategy violates its declared
            /// [maximum output length](Self::max_output_units_per_input_unit);
            /// this indicates encoder misconfiguration, not bad input.
            #[must_use]
            pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
                encode_cow(&self.engine, input)
            }

            /// Streams the encoded form of `text` into `writer` in bounded
            /// chunks, without building the whole output in memory.
            ///
            /// # Errors
            ///
            /// Propagates write failures from the sink.
            pub fn encode_to_writer<W: fmt::Write>(
                &self,
                writer: &mut W,
                text: &str,
            ) -> fmt::Result {
                encode_to_fmt(&self.engine, writer, text)
            }

            /// Streams the encoded form of `text[range]` into `writer`.
            ///
            /// # Errors
            ///
            /// Fails with [`EncodeError::RangeOutOfBounds`] or
            /// [`EncodeError::NotCharBoundary`] before anything is written
            /// if the range is invalid, and propagates sink failures as
            /// [`EncodeError::Fmt`].
            pub fn encode_range_to_writer<W: fmt::Write>(
                &self,
                writer: &mut W,
                text: &str,
                range: Range<usize>,
            ) -> Result<(), EncodeError> {
                encode_range_to_fmt(&self.engine, writer, text, range)
            }

            /// Raw resumable entry point over UTF-16 buffers.
            ///
            /// Consumes a maximal prefix of `src` that fits `dst`, stopping
            /// at a scalar boundary. Malformed input is replaced with
            /// U+FFFD and escaped, never surfaced as an error.
            pub fn encode_utf16(
                &self,
                src: &[u16],
                dst: &mut [u16],
                is_final_block: bool,
            ) -> EncodeResult {
                self.engine.encode_utf16(src, dst, is_final_block)
            }

            /// Raw resumable entry point over UTF-8 buffers.
            pub fn encode_utf8(
                &self,
                src: &[u8],
                dst: &mut [u8],
                is_final_block: bool,
            ) -> EncodeResult {
                self.engine.encode_utf8(src, dst, is_final_block)
            }

            /// Byte index of the first character of `input` that would be
            /// escaped, or `None` when `encode` would pass the whole string
            /// through.
            #[must_use]
            pub fn find_first_char_to_encode(&self, input: &str) -> Option<usize> {
                self.engine.find_first_byte_to_encode(input.as_bytes())
            }

            /// Index of the first UTF-16 code unit that would be escaped.
            #[must_use]
            pub fn find_first_utf16_unit_to_encode(&self, src: &[u16]) -> Option<usize> {
                self.engine.find_first_unit_to_encode(src)
            }

            /// Whether `c` would be escaped rather than passed through.
            #[must_use]
            pub fn will_encode(&self, c: char) -> bool {
                self.engine.will_encode(ScalarValue::from(c))
            }

            /// Upper bound on output units (UTF-16 code units or UTF-8
            /// bytes) produced per input character. Every escape sequence
            /// this encoder emits satisfies the bound.
            #[must_use]
            pub fn max_output_units_per_input_unit(&self) -> usize {
                self.engine.escaper().max_output_units()
            }
        }
    };
}

/// Encodes text for HTML element and attribute content.
///
/// `< > & "` use their named entities; every other escaped character uses a
/// numeric reference such as `&#x27;`. The default encoder allows only
/// Basic Latin.
pub struct HtmlEncoder {
    engine: EncoderEngine,
}

impl HtmlEncoder {
    /// Builds an HTML encoder from explicit settings. Undefined code points
    /// and HTML-sensitive characters are forbidden on top of the settings.
    #[must_use]
    pub fn new(settings: &TextEncoderSettings) -> Self {
        Self {
            engine: EncoderEngine::new(Escaper::Html(HtmlEscaper), settings, true, &[]),
        }
    }

    /// Builds an HTML encoder allowing exactly the given ranges.
    #[must_use]
    pub fn with_ranges(ranges: &[UnicodeRange]) -> Self {
        Self::new(&TextEncoderSettings::with_ranges(ranges))
    }
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::with_ranges(&[UnicodeRange::BASIC_LATIN])
    }
}

encoder_common_api!(HtmlEncoder);

/// Characters the JavaScript context always escapes on top of the
/// HTML-sensitive set.
const JS_EXTRA_FORBIDDEN: [char; 2] = ['\\', '`'];

/// Encodes text for JavaScript and JSON string literals.
///
/// The default encoder allows only Basic Latin and escapes `"` as
/// `\u0022`; the [relaxed](Self::relaxed) variant allows nearly the whole
/// BMP and uses the minimal `\"` form.
pub struct JavaScriptEncoder {
    engine: EncoderEngine,
}

impl JavaScriptEncoder {
    /// Builds a JavaScript encoder from explicit settings. Undefined code
    /// points, HTML-sensitive characters, backslash, and backtick are
    /// forbidden on top of the settings.
    #[must_use]
    pub fn new(settings: &TextEncoderSettings) -> Self {
        Self {
            engine: EncoderEngine::new(
                Escaper::JavaScript(JavaScriptEscaper::new()),
                settings,
                true,
                &JS_EXTRA_FORBIDDEN,
            ),
        }
    }

    /// Builds a JavaScript encoder allowing exactly the given ranges.
    #[must_use]
    pub fn with_ranges(ranges: &[UnicodeRange]) -> Self {
        Self::new(&TextEncoderSettings::with_ranges(ranges))
    }

    /// The relaxed JSON variant: allows the whole BMP except undefined
    /// code points, HTML-sensitive characters, backslash, and backtick,
    /// and escapes `"` minimally as `\"`.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            engine: EncoderEngine::new(
                Escaper::JavaScript(JavaScriptEscaper::minimal_json()),
                &TextEncoderSettings::with_ranges(&[UnicodeRange::ALL]),
                true,
                &JS_EXTRA_FORBIDDEN,
            ),
        }
    }
}

impl Default for JavaScriptEncoder {
    fn default() -> Self {
        Self::with_ranges(&[UnicodeRange::BASIC_LATIN])
    }
}

encoder_common_api!(JavaScriptEncoder);

/// Characters the URL context escapes beyond the HTML-sensitive set:
/// delimiters and other reserved or unsafe URL characters.
const URL_EXTRA_FORBIDDEN: [char; 15] = [
    ' ', '#', '%', '/', ':', '=', '?', '[', '\\', ']', '^', '`', '{', '|', '}',
];

/// Percent-encodes text for URL components (query strings, path segments).
///
/// Escaping operates on each character's UTF-8 bytes: `é` becomes
/// `%C3%A9`. The default encoder allows only Basic Latin.
pub struct UrlEncoder {
    engine: EncoderEngine,
}

impl UrlEncoder {
    /// Builds a URL encoder from explicit settings. Undefined code points,
    /// HTML-sensitive characters, and URL delimiters are forbidden on top
    /// of the settings.
    #[must_use]
    pub fn new(settings: &TextEncoderSettings) -> Self {
        Self {
            engine: EncoderEngine::new(
                Escaper::Url(UrlEscaper),
                settings,
                true,
                &URL_EXTRA_FORBIDDEN,
            ),
        }
    }

    /// Builds a URL encoder allowing exactly the given ranges.
    #[must_use]
    pub fn with_ranges(ranges: &[UnicodeRange]) -> Self {
        Self::new(&TextEncoderSettings::with_ranges(ranges))
    }
}

impl Default for UrlEncoder {
    fn default() -> Self {
        Self::with_ranges(&[UnicodeRange::BASIC_LATIN])
    }
}

encoder_common_api!(UrlEncoder);
