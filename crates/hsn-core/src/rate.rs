//! # GST Rate Taxonomy
//!
//! Defines the `GstRate` enum: the fixed set of GST slabs an HSN code can
//! be classified into. Every `match` on `GstRate` is exhaustive, so adding
//! a slab forces every consumer to handle it.
//!
//! | Slab | Display |
//! |------|---------|
//! | `Zero` | `0%` |
//! | `Five` | `5%` |
//! | `Twelve` | `12%` |
//! | `Eighteen` | `18%` |
//! | `TwentyEight` | `28%` |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RateParseError;

/// A GST slab.
///
/// Ordering follows the percentage, so a `BTreeMap<GstRate, _>` iterates
/// from the lowest slab to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GstRate {
    /// Nil-rated goods.
    #[serde(rename = "0%")]
    Zero,
    /// Essential goods and agricultural produce.
    #[serde(rename = "5%")]
    Five,
    /// Standard rate, lower band.
    #[serde(rename = "12%")]
    Twelve,
    /// Standard rate, upper band. Also the fallback for unclassifiable codes.
    #[serde(rename = "18%")]
    Eighteen,
    /// Demerit goods.
    #[serde(rename = "28%")]
    TwentyEight,
}

/// Total number of GST slabs.
pub const GST_RATE_COUNT: usize = 5;

impl GstRate {
    /// The rate applied when a code cannot be classified.
    pub const DEFAULT: GstRate = GstRate::Eighteen;

    /// Returns all slabs in ascending order.
    pub fn all_rates() -> &'static [GstRate] {
        &[
            Self::Zero,
            Self::Five,
            Self::Twelve,
            Self::Eighteen,
            Self::TwentyEight,
        ]
    }

    /// Returns the percentage string for this slab, e.g. `"18%"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "0%",
            Self::Five => "5%",
            Self::Twelve => "12%",
            Self::Eighteen => "18%",
            Self::TwentyEight => "28%",
        }
    }

    /// Returns the rate as whole percentage points.
    pub fn percent(&self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Five => 5,
            Self::Twelve => 12,
            Self::Eighteen => 18,
            Self::TwentyEight => 28,
        }
    }
}

impl Default for GstRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GstRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for GstRate {
    type Err = RateParseError;

    /// Parse a slab from its percentage string. Accepts the strings
    /// produced by [`GstRate::as_str()`] with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0%" => Ok(Self::Zero),
            "5%" => Ok(Self::Five),
            "12%" => Ok(Self::Twelve),
            "18%" => Ok(Self::Eighteen),
            "28%" => Ok(Self::TwentyEight),
            other => Err(RateParseError(other.to_string())),
        }
    }
}
