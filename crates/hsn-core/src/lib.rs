//! # hsn-core: Foundational Types for the HSN Lookup Stack
//!
//! Defines the primitives every other crate in the workspace builds on:
//!
//! 1. **`HsnCode` newtype.** Codes are text, not numbers. Leading zeros are
//!    significant and survive every lookup path.
//!
//! 2. **Single `GstRate` enum.** The five GST slabs, with exhaustive `match`
//!    everywhere. Rates never travel as bare strings inside the stack; the
//!    `"18%"` form only appears at the edges (reports, serde).
//!
//! 3. **Total classifier.** [`classify`] never fails. Malformed codes
//!    degrade to [`GstRate::DEFAULT`], and [`explain`] says which rule fired
//!    so degraded classifications stay visible in logs and tests.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hsn-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod classifier;
pub mod code;
pub mod error;
pub mod rate;

// Re-export primary types for ergonomic imports.
pub use classifier::{classify, explain, Classification, RateBand, RateBasis, RATE_BANDS, RATE_EXCEPTIONS};
pub use code::{zero_pad, HsnCode, CODE_PAD_WIDTH};
pub use error::{CodeError, RateParseError};
pub use rate::{GstRate, GST_RATE_COUNT};
