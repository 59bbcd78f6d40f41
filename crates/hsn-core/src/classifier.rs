//! # Rate Classifier
//!
//! Maps an HSN code to a [`GstRate`]. The classifier is total: every input,
//! including empty and non-numeric strings, yields a rate.
//!
//! ## Algorithm
//!
//! 1. Exact lookup in [`RATE_EXCEPTIONS`] on the raw input.
//! 2. Left-pad to [`CODE_PAD_WIDTH`] with zeros (never truncates).
//! 3. Exception lookup again on the padded code.
//! 4. Parse the first four characters of the padded code as an integer and
//!    walk [`RATE_BANDS`] in order; the first band containing it wins.
//! 5. No band (the value 1000 sits between the first two bands) or a
//!    parse failure falls back to [`GstRate::DEFAULT`].
//!
//! The gap at 1000 is part of the published rate table and is kept as is.

use serde::Serialize;

use crate::code::{zero_pad, CODE_PAD_WIDTH};
use crate::error::CodeError;
use crate::rate::GstRate;

/// Exact-code overrides, checked before any range rule.
pub const RATE_EXCEPTIONS: &[(&str, GstRate)] = &[
    // Live animals
    ("01", GstRate::Zero),
    // Live horses, asses, mules and hinnies
    ("0101", GstRate::Zero),
    // Live bovine animals
    ("0102", GstRate::Zero),
];

/// An inclusive range of four-digit prefixes sharing a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateBand {
    /// Lowest prefix in the band.
    pub min: i32,
    /// Highest prefix in the band.
    pub max: i32,
    /// Rate applied to the band.
    pub rate: GstRate,
    /// Short description of the goods in the band.
    pub label: &'static str,
}

impl RateBand {
    /// True if `prefix` falls inside the band.
    pub fn contains(&self, prefix: i32) -> bool {
        self.min <= prefix && prefix <= self.max
    }
}

/// Range rules, evaluated in order.
pub const RATE_BANDS: &[RateBand] = &[
    RateBand { min: i32::MIN, max: 999, rate: GstRate::Zero, label: "live animals and produce" },
    RateBand { min: 1001, max: 2200, rate: GstRate::Five, label: "agricultural products" },
    RateBand { min: 2201, max: 2400, rate: GstRate::TwentyEight, label: "beverages and tobacco" },
    RateBand { min: 2401, max: 4000, rate: GstRate::Eighteen, label: "manufactured goods" },
    RateBand { min: 4001, max: 5000, rate: GstRate::Five, label: "textiles" },
    RateBand { min: 5001, max: 7000, rate: GstRate::Twelve, label: "other manufactured goods" },
    RateBand { min: 7001, max: 9000, rate: GstRate::Eighteen, label: "machinery and electronics" },
    RateBand { min: 9001, max: i32::MAX, rate: GstRate::Eighteen, label: "services and other" },
];

/// Why a code received its rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum RateBasis {
    /// Matched an entry of [`RATE_EXCEPTIONS`].
    Exception {
        /// The exception key that matched.
        key: &'static str,
    },
    /// The numeric prefix fell in a band.
    Range {
        /// Parsed four-character prefix.
        prefix: i32,
        /// The band that matched.
        band: RateBand,
    },
    /// The prefix parsed but no band covers it.
    Unbanded {
        /// Parsed four-character prefix.
        prefix: i32,
    },
    /// The prefix could not be parsed.
    Unparseable {
        /// Rendered parse error.
        reason: String,
    },
}

/// A rate together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The applicable rate.
    pub rate: GstRate,
    /// The rule that produced it.
    #[serde(flatten)]
    pub basis: RateBasis,
}

/// Classify `code` into a GST rate.
pub fn classify(code: &str) -> GstRate {
    explain(code).rate
}

/// Classify `code` and report which rule applied.
pub fn explain(code: &str) -> Classification {
    if let Some((key, rate)) = exception_rate(code) {
        return Classification { rate, basis: RateBasis::Exception { key } };
    }

    let padded = zero_pad(code, CODE_PAD_WIDTH);
    if let Some((key, rate)) = exception_rate(&padded) {
        return Classification { rate, basis: RateBasis::Exception { key } };
    }

    let prefix = match numeric_prefix(&padded) {
        Ok(prefix) => prefix,
        Err(err) => {
            tracing::debug!(code, error = %err, "falling back to default GST rate");
            return Classification {
                rate: GstRate::DEFAULT,
                basis: RateBasis::Unparseable { reason: err.to_string() },
            };
        }
    };

    match band_for_prefix(prefix) {
        Some(band) => Classification {
            rate: band.rate,
            basis: RateBasis::Range { prefix, band: *band },
        },
        None => Classification {
            rate: GstRate::DEFAULT,
            basis: RateBasis::Unbanded { prefix },
        },
    }
}

/// Look `code` up in [`RATE_EXCEPTIONS`].
pub fn exception_rate(code: &str) -> Option<(&'static str, GstRate)> {
    RATE_EXCEPTIONS
        .iter()
        .find(|(key, _)| *key == code)
        .copied()
}

/// Parse the first [`CODE_PAD_WIDTH`] characters of an already padded code.
///
/// Surrounding whitespace inside the prefix and a leading sign are
/// tolerated, matching ordinary integer parsing.
///
/// # Errors
///
/// Returns [`CodeError::NonNumericPrefix`] if the prefix is not an integer.
pub fn numeric_prefix(padded: &str) -> Result<i32, CodeError> {
    let prefix: String = padded.chars().take(CODE_PAD_WIDTH).collect();
    prefix
        .trim()
        .parse::<i32>()
        .map_err(|_| CodeError::NonNumericPrefix { prefix })
}

/// The first band in [`RATE_BANDS`] containing `prefix`.
pub fn band_for_prefix(prefix: i32) -> Option<&'static RateBand> {
    RATE_BANDS.iter().find(|band| band.contains(prefix))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn is_exception(code: &str) -> bool {
        exception_rate(code).is_some()
    }

    proptest! {
        /// Any string classifies to one of the fixed slabs.
        #[test]
        fn classify_is_total(code in ".{0,24}") {
            let rate = classify(&code);
            prop_assert!(GstRate::all_rates().contains(&rate));
        }

        /// Padding a short code first does not change its rate.
        #[test]
        fn padding_is_idempotent(code in "[0-9]{0,4}") {
            let padded = zero_pad(&code, CODE_PAD_WIDTH);
            prop_assume!(!is_exception(&code));
            prop_assert_eq!(classify(&code), classify(&padded));
        }

        /// Trailing digits beyond the fourth never affect non-exception codes.
        #[test]
        fn only_prefix_matters(prefix in "[1-9][0-9]{3}", tail in "[0-9]{1,6}") {
            let long = format!("{prefix}{tail}");
            prop_assert_eq!(classify(&long), classify(&prefix));
        }
    }
}
