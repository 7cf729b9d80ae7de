//! Contextual text encoding for HTML, JavaScript/JSON, and URL output.
//!
//! Given a stream of text (UTF-8 bytes or UTF-16 code units) and a target
//! context, the encoders replace every code point that would be unsafe or
//! ambiguous in that context with a context-appropriate escape sequence and
//! pass everything else through unchanged.
//!
//! The work happens incrementally: the raw [`encode_utf8`] /
//! [`encode_utf16`] entry points consume as much input as fits the supplied
//! destination, stop cleanly at scalar boundaries, and report
//! consumed/written counts so the caller can resume with more buffer or
//! more data. Malformed input (split surrogate pairs, invalid UTF-8) never
//! raises an error from those paths; it degrades to U+FFFD and is escaped.
//!
//! Encoders are immutable once built and safe to share across threads.
//!
//! ```
//! use webescape::HtmlEncoder;
//!
//! let html = HtmlEncoder::default();
//! assert_eq!(
//!     html.encode("<script>alert('x')</script>"),
//!     "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
//! );
//! // Clean input is returned borrowed, with no allocation.
//! assert!(matches!(html.encode("plain text"), std::borrow::Cow::Borrowed(_)));
//! ```
//!
//! [`encode_utf8`]: HtmlEncoder::encode_utf8
//! [`encode_utf16`]: HtmlEncoder::encode_utf16

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bitmap;
mod encoder;
mod engine;
mod error;
mod escaper;
mod ranges;
mod scalar;
mod settings;

#[cfg(test)]
mod chunk_utils;
#[cfg(test)]
mod tests;

pub use encoder::{HtmlEncoder, JavaScriptEncoder, UrlEncoder};
pub use engine::{EncodeResult, OperationStatus};
pub use error::EncodeError;
pub use ranges::{InvalidRange, UnicodeRange};
pub use scalar::{InvalidScalar, ScalarDecode, ScalarValue};
pub use settings::TextEncoderSettings;
