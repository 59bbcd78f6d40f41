//! # Resolver
//!
//! Answers a code query against an [`HsnIndex`] in three stages:
//!
//! 1. **Exact**: the trimmed input is a key.
//! 2. **Padded**: the input is shorter than four characters and its
//!    zero-padded form is a key (`"101"` → `"0101"`).
//! 3. **Suffix**: some key ends with the input, which catches inputs whose
//!    leading digits were dropped. Several keys can share a suffix;
//!    [`SuffixTieBreak`] decides which one answers.
//!
//! Stage 3 also runs when stage 2 was tried and missed. Blank input goes
//! through stages 1 and 2 (it pads to `"0000"`) but never reaches stage 3,
//! since every key would match it.

use hsn_core::{zero_pad, CODE_PAD_WIDTH};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::index::{ClassificationRecord, HsnIndex};

/// Policy for choosing among several keys sharing the queried suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixTieBreak {
    /// Shortest matching code, then the lexicographically smallest.
    /// Independent of source order.
    #[default]
    Shortest,
    /// First matching code in source order.
    InsertionOrder,
}

/// How a query was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The input is a key.
    Exact,
    /// The zero-padded input is a key.
    Padded,
    /// A key ends with the input.
    Suffix,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The matched record.
    pub record: &'a ClassificationRecord,
    /// Which stage matched.
    pub kind: MatchKind,
    /// The caller's input, untrimmed.
    pub input: String,
}

impl<'a> Resolution<'a> {
    fn new(record: &'a ClassificationRecord, kind: MatchKind, input: &str) -> Self {
        Self {
            record,
            kind,
            input: input.to_string(),
        }
    }

    /// Human-readable report for the caller.
    ///
    /// Exact matches read `HSN Code {code}: {description}. Applicable GST:
    /// {rate}.`; fallback matches append a note citing the matched code and
    /// the original input.
    pub fn report(&self) -> String {
        let record = self.record;
        let base = format!(
            "HSN Code {}: {}. Applicable GST: {}.",
            record.code, record.description, record.rate
        );
        match self.kind {
            MatchKind::Exact => base,
            MatchKind::Padded => format!(
                "{base} (Note: Matched with padded code {} for your input {})",
                record.code, self.input
            ),
            MatchKind::Suffix => format!(
                "{base} (Note: Found similar code {} for your input {})",
                record.code, self.input
            ),
        }
    }
}

impl std::fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.report())
    }
}

impl HsnIndex {
    /// Resolve `input` with the exact → padded → suffix fallback.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] carrying the untrimmed input when no stage
    /// matches.
    pub fn resolve(&self, input: &str) -> Result<Resolution<'_>, LookupError> {
        let code = input.trim();

        if let Some(record) = self.get(code) {
            return Ok(Resolution::new(record, MatchKind::Exact, input));
        }

        if code.chars().count() < CODE_PAD_WIDTH {
            let padded = zero_pad(code, CODE_PAD_WIDTH);
            if let Some(record) = self.get(&padded) {
                tracing::debug!(input, matched = %record.code, "resolved by zero padding");
                return Ok(Resolution::new(record, MatchKind::Padded, input));
            }
        }

        if code.is_empty() {
            tracing::debug!(input, "blank input, skipping suffix stage");
            return Err(LookupError::NotFound {
                input: input.to_string(),
            });
        }

        if let Some(record) = self.suffix_match(code) {
            tracing::debug!(
                input,
                matched = %record.code,
                tie_break = ?self.tie_break(),
                "resolved by suffix"
            );
            return Ok(Resolution::new(record, MatchKind::Suffix, input));
        }

        tracing::debug!(input, "no HSN match");
        Err(LookupError::NotFound {
            input: input.to_string(),
        })
    }

    fn suffix_match(&self, code: &str) -> Option<&ClassificationRecord> {
        let mut candidates = self
            .iter()
            .filter(|record| record.code.as_str().ends_with(code));
        match self.tie_break() {
            SuffixTieBreak::InsertionOrder => candidates.next(),
            SuffixTieBreak::Shortest => candidates.min_by(|a, b| {
                a.code
                    .len()
                    .cmp(&b.code.len())
                    .then_with(|| a.code.as_str().cmp(b.code.as_str()))
            }),
        }
    }
}
