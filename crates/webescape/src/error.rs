//! Errors for the streaming encode paths.
//!
//! Malformed input is never an error (it degrades to U+FFFD and is
//! escaped), and buffer exhaustion is a status, not an error. The only
//! failures surfaced as `Err` are caller mistakes caught up front and sink
//! write failures.

use thiserror::Error;

/// Error from the range-validated streaming encode path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The requested byte range does not fit the input.
    #[error("range {start}..{end} is out of bounds for input of length {len}")]
    RangeOutOfBounds {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
        /// Length of the input the range was applied to.
        len: usize,
    },
    /// The requested byte range splits a UTF-8 sequence.
    #[error("range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
    },
    /// The output sink reported a failure.
    #[error("output sink failure")]
    Fmt(#[from] core::fmt::Error),
}
