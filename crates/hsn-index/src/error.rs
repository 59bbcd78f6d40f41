//! # Error Types
//!
//! One enum per failure class so that a degraded startup can say exactly
//! what went wrong:
//!
//! - [`LoadError`]: the data source could not be read (I/O, CSV syntax)
//!   or did not have the expected shape ([`SchemaError`]).
//! - [`ConfigError`]: the configuration file or data path is unusable.
//! - [`LookupError`]: a query matched nothing. This is the only error an
//!   end consumer ever sees.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading the HSN data source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the data source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The table does not have the required columns.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// The table is readable but lacks a required column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No column name contains the required fragment.
    #[error("no column containing {needle:?} (case-insensitive); found {columns:?}")]
    MissingColumn {
        /// Fragment searched for, lowercase.
        needle: &'static str,
        /// Column names present in the table.
        columns: Vec<String>,
    },
}

/// Error assembling runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`crate::HsnConfig`].
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No data path was given by flag, environment, or config file.
    #[error("no HSN data file configured; pass --data or set {env}")]
    MissingDataPath {
        /// Environment variable consulted.
        env: &'static str,
    },
}

/// A query that matched no record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No exact, padded, or suffix match.
    #[error("No data found for HSN code '{input}'. Please verify the code.")]
    NotFound {
        /// The caller's input, untrimmed.
        input: String,
    },
}
