//! # HSN Code Newtype
//!
//! `HsnCode` wraps the textual form of a tariff classification code.
//! Codes are compared and looked up as strings so that leading zeros
//! survive (`"0101"` and `"101"` are different keys). Numeric parsing only
//! happens inside the classifier, on the first four characters.
//!
//! Construction trims surrounding whitespace and rejects empty codes. The
//! digit-only shape is expected but not enforced: source sheets carry the
//! occasional odd code and it must still be indexable.

use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// Width that short codes are left-padded to before classification and
/// padded lookup.
pub const CODE_PAD_WIDTH: usize = 4;

/// A trimmed, non-empty HSN code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HsnCode(String);

impl HsnCode {
    /// Build a code from raw input, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Empty`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, CodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false: empty codes cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the code is shorter than [`CODE_PAD_WIDTH`] and therefore
    /// eligible for padded lookup.
    pub fn is_short(&self) -> bool {
        self.len() < CODE_PAD_WIDTH
    }

    /// The code left-padded with zeros to [`CODE_PAD_WIDTH`].
    pub fn padded(&self) -> String {
        zero_pad(&self.0, CODE_PAD_WIDTH)
    }
}

/// Left-pad `code` with `'0'` to `width` characters.
///
/// Codes already at or beyond `width` are returned unchanged; nothing is
/// ever truncated. A leading `+` or `-` stays in front of the padding
/// (`"-1"` → `"-001"`), so the padded form still parses as the same number.
pub fn zero_pad(code: &str, width: usize) -> String {
    let len = code.chars().count();
    if len >= width {
        return code.to_string();
    }
    let (sign, digits) = match code.chars().next() {
        Some('+' | '-') => code.split_at(1),
        _ => ("", code),
    };
    let mut padded = String::with_capacity(width);
    padded.push_str(sign);
    padded.push_str(&"0".repeat(width - len));
    padded.push_str(digits);
    padded
}

impl std::fmt::Display for HsnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HsnCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for HsnCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HsnCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<HsnCode> for String {
    fn from(code: HsnCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for HsnCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
