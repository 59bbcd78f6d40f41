//! # Error Types
//!
//! Errors raised while interpreting HSN codes. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Code errors are recoverable. `HsnCode` construction rejects blanks
//!   (the loader skips those rows) and the classifier maps a non-numeric
//!   prefix to the default rate, logging the reason.
//! - Rate parse errors are surfaced to callers that parse user-supplied
//!   rate strings (configuration, fixtures).

use thiserror::Error;

/// Error interpreting the numeric prefix of an HSN code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The code is empty after trimming.
    #[error("HSN code is empty")]
    Empty,

    /// The first four characters of the padded code are not an integer.
    #[error("HSN code prefix {prefix:?} is not numeric")]
    NonNumericPrefix {
        /// The prefix that failed to parse.
        prefix: String,
    },
}

/// Error parsing a GST rate string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown GST rate: {0:?}")]
pub struct RateParseError(pub String);
