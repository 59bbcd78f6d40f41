//! # hsn-cli: HSN Lookup Command-Line Interface
//!
//! ## Subcommands
//!
//! - `lookup`: exact / padded / suffix lookup of one code
//! - `classify`: GST rate and the rule behind it, no data file needed
//! - `stats`: summary of the loaded sheet
//! - `tool`: JSON-lines `get_info` adapter for agent hosts
//! - `describe`: tool descriptor for agent host registration
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handler functions delegate to `hsn-index` and `hsn-core`.
//! - Logs go to stderr; answers go to stdout.

pub mod classify;
pub mod context;
pub mod lookup;
pub mod stats;
pub mod tool;
