//! # Tabular Source
//!
//! A [`Table`] is the in-memory form of the HSN sheet: named columns and
//! string cells. It is what the index is built from, so any loader that can
//! produce one (CSV today) plugs into [`crate::HsnIndex::from_table`].
//!
//! Column selection is by case-insensitive substring: the first column whose
//! name contains `"hsn"` supplies codes, the first containing `"desc"`
//! supplies descriptions. Column order is whatever the source declares.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, SchemaError};

/// Fragment identifying the code column.
pub const CODE_COLUMN_NEEDLE: &str = "hsn";

/// Fragment identifying the description column.
pub const DESCRIPTION_COLUMN_NEEDLE: &str = "desc";

/// Rows of string cells under named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Positions of the code and description columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index of the code column.
    pub code: usize,
    /// Index of the description column.
    pub description: usize,
}

impl Table {
    /// Build a table from column names and rows.
    ///
    /// Rows may be shorter or longer than the header; missing cells read as
    /// empty.
    pub fn new<C, R>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().collect(),
        }
    }

    /// Read a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be opened, [`LoadError::Csv`] if
    /// a record cannot be parsed.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Read CSV with a header row from any reader.
    ///
    /// # Errors
    ///
    /// [`LoadError::Csv`] if the header or a record cannot be parsed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in source order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the first column whose lowercased name contains `needle`.
    pub fn find_column(&self, needle: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|name| name.to_lowercase().contains(needle))
    }

    /// Locate the code and description columns.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingColumn`] naming the first column that could
    /// not be found.
    pub fn locate_columns(&self) -> Result<ColumnMap, SchemaError> {
        let code = self.require_column(CODE_COLUMN_NEEDLE)?;
        let description = self.require_column(DESCRIPTION_COLUMN_NEEDLE)?;
        Ok(ColumnMap { code, description })
    }

    fn require_column(&self, needle: &'static str) -> Result<usize, SchemaError> {
        self.find_column(needle).ok_or_else(|| SchemaError::MissingColumn {
            needle,
            columns: self.columns.clone(),
        })
    }
}

/// Read cell `index` of `row`, treating a missing cell as empty.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
