//! # hsn-index: HSN Code Index & Resolver
//!
//! Turns an HSN sheet into a queryable index and answers lookups:
//!
//! - **Table** (`table.rs`): CSV → named columns and string cells; locates
//!   the code and description columns by name.
//!
//! - **Index** (`index.rs`): code → [`ClassificationRecord`], with rates
//!   from `hsn_core::classify`. Built once, read-only afterwards.
//!
//! - **Resolver** (`resolve.rs`): exact → zero-padded → suffix fallback,
//!   with a configurable tie-break for the suffix stage.
//!
//! - **Tool** (`tool.rs`): the `get_info` contract agent hosts call.
//!
//! - **Config** (`config.rs`): data path and tie-break policy.
//!
//! ## Failure Model
//!
//! [`HsnIndex::load`] returns typed [`LoadError`]s. [`HsnIndex::load_or_empty`]
//! logs them and serves an empty index, so a bad data file turns every
//! lookup into a not-found answer instead of a crash.

pub mod config;
pub mod error;
pub mod index;
pub mod resolve;
pub mod table;
pub mod tool;

pub use config::{HsnConfig, DATA_PATH_ENV};
pub use error::{ConfigError, LoadError, LookupError, SchemaError};
pub use index::{BuildStats, ClassificationRecord, HsnIndex};
pub use resolve::{MatchKind, Resolution, SuffixTieBreak};
pub use table::{ColumnMap, Table};
pub use tool::{descriptor, get_info, handle_line, ToolDescriptor, ToolRequest, ToolResponse, TOOL_NAME};
