//! # HSN Index
//!
//! The code → (description, rate) mapping. Built once from a [`Table`],
//! immutable afterwards, and passed by reference to whoever answers
//! queries. It is `Send + Sync`; concurrent readers need no locking.
//!
//! Records keep source order. When a code appears twice, the later row's
//! description replaces the earlier one and the code keeps its first
//! position, so "first in source order" stays well defined for the
//! suffix fallback.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use hsn_core::{classify, GstRate, HsnCode};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, SchemaError};
use crate::resolve::SuffixTieBreak;
use crate::table::{cell, Table, CODE_COLUMN_NEEDLE, DESCRIPTION_COLUMN_NEEDLE};

/// One indexed HSN code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// The code, trimmed.
    pub code: HsnCode,
    /// Description from the source sheet.
    pub description: String,
    /// Rate assigned by the classifier.
    pub rate: GstRate,
}

impl ClassificationRecord {
    /// Build a record, classifying `code`.
    pub fn new(code: HsnCode, description: impl Into<String>) -> Self {
        let rate = classify(code.as_str());
        Self {
            code,
            description: description.into(),
            rate,
        }
    }
}

/// Outcome counters from building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Data rows read from the source.
    pub rows: usize,
    /// Rows skipped because the code cell was blank.
    pub skipped_blank: usize,
    /// Rows whose code was already indexed.
    pub duplicates: usize,
}

/// Code-keyed index of classification records.
#[derive(Debug, Clone, Default)]
pub struct HsnIndex {
    records: Vec<ClassificationRecord>,
    positions: HashMap<String, usize>,
    tie_break: SuffixTieBreak,
    stats: BuildStats,
}

impl HsnIndex {
    /// An index with no records. Every lookup is not-found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from records in source order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ClassificationRecord>,
    {
        let mut index = Self::default();
        for record in records {
            index.stats.rows += 1;
            index.insert(record);
        }
        index
    }

    /// Build from a table, locating the code and description columns by
    /// name. Rows with a blank code are skipped.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingColumn`] if either column is absent.
    pub fn from_table(table: &Table) -> Result<Self, SchemaError> {
        let columns = table.locate_columns()?;
        tracing::debug!(
            code_column = %table.columns()[columns.code],
            description_column = %table.columns()[columns.description],
            "located HSN columns"
        );

        let mut index = Self::default();
        for (line, row) in table.rows().iter().enumerate() {
            index.stats.rows += 1;
            let code = match HsnCode::new(cell(row, columns.code)) {
                Ok(code) => code,
                Err(_) => {
                    index.stats.skipped_blank += 1;
                    tracing::debug!(row = line + 1, "skipping row with blank HSN code");
                    continue;
                }
            };
            let description = cell(row, columns.description).trim();
            index.insert(ClassificationRecord::new(code, description));
        }
        Ok(index)
    }

    /// Load a CSV data source.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]: unreadable file, malformed CSV, or missing column.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let table = Table::from_csv_path(path)?;
        let index = Self::from_table(&table)?;
        tracing::info!(
            path = %path.display(),
            records = index.len(),
            skipped_blank = index.stats.skipped_blank,
            duplicates = index.stats.duplicates,
            "loaded HSN index"
        );
        Ok(index)
    }

    /// Load a CSV data source, degrading to an empty index on failure.
    ///
    /// The failure is logged; lookups against the result report not-found
    /// instead of taking the host process down.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load HSN data; serving an empty index. \
                     The file needs columns containing '{CODE_COLUMN_NEEDLE}' and '{DESCRIPTION_COLUMN_NEEDLE}'"
                );
                Self::empty()
            }
        }
    }

    /// Set the suffix fallback tie-break policy.
    pub fn with_tie_break(mut self, tie_break: SuffixTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The active suffix fallback tie-break policy.
    pub fn tie_break(&self) -> SuffixTieBreak {
        self.tie_break
    }

    /// Counters from the build.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by code text.
    pub fn get(&self, code: &str) -> Option<&ClassificationRecord> {
        self.positions.get(code).map(|&i| &self.records[i])
    }

    /// Records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassificationRecord> {
        self.records.iter()
    }

    /// Number of codes per rate. Rates with no codes are omitted.
    pub fn rate_histogram(&self) -> BTreeMap<GstRate, usize> {
        let mut histogram = BTreeMap::new();
        for record in &self.records {
            *histogram.entry(record.rate).or_insert(0) += 1;
        }
        histogram
    }

    fn insert(&mut self, record: ClassificationRecord) {
        match self.positions.get(record.code.as_str()) {
            Some(&i) => {
                self.stats.duplicates += 1;
                tracing::debug!(code = %record.code, "duplicate HSN code; later row wins");
                self.records[i] = record;
            }
            None => {
                self.positions
                    .insert(record.code.as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_table() -> Table {
        Table::new(
            ["S.No", "HSN Code", "Description of Goods"],
            vec![
                row(&["1", "0101", "Live horses"]),
                row(&["2", "  ", "Orphan description"]),
                row(&["3", " 8471 ", "  Computers  "]),
                row(&["4", "2203", "Beer"]),
            ],
        )
    }

    #[test]
    fn from_table_skips_blank_codes() {
        let index = HsnIndex::from_table(&sample_table()).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.iter().all(|r| r.description != "Orphan description"));
        assert_eq!(index.stats().skipped_blank, 1);
        assert_eq!(index.stats().rows, 4);
    }

    #[test]
    fn from_table_trims_and_classifies() {
        let index = HsnIndex::from_table(&sample_table()).unwrap();
        let record = index.get("8471").unwrap();
        assert_eq!(record.description, "Computers");
        assert_eq!(record.rate, GstRate::Eighteen);
        assert_eq!(index.get("0101").unwrap().rate, GstRate::Zero);
        assert_eq!(index.get("2203").unwrap().rate, GstRate::TwentyEight);
        assert!(index.get(" 8471 ").is_none());
    }

    #[test]
    fn from_table_missing_column() {
        let table = Table::new(["Code", "Description"], vec![row(&["0101", "Horses"])]);
        assert!(HsnIndex::from_table(&table).is_err());
    }

    #[test]
    fn duplicates_keep_position_and_take_last_value() {
        let table = Table::new(
            ["hsn", "desc"],
            vec![
                row(&["0101", "first"]),
                row(&["0102", "cattle"]),
                row(&["0101", "second"]),
            ],
        );
        let index = HsnIndex::from_table(&table).unwrap();
        let order: Vec<&str> = index.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(order, ["0101", "0102"]);
        assert_eq!(index.get("0101").unwrap().description, "second");
        assert_eq!(index.stats().duplicates, 1);
    }

    #[test]
    fn rate_histogram_counts() {
        let index = HsnIndex::from_table(&sample_table()).unwrap();
        let histogram = index.rate_histogram();
        assert_eq!(histogram.get(&GstRate::Zero), Some(&1));
        assert_eq!(histogram.get(&GstRate::Eighteen), Some(&1));
        assert_eq!(histogram.get(&GstRate::TwentyEight), Some(&1));
        assert_eq!(histogram.get(&GstRate::Five), None);
    }

    #[test]
    fn load_or_empty_on_missing_file() {
        let index = HsnIndex::load_or_empty(Path::new("/nonexistent/HSN_SAC.csv"));
        assert!(index.is_empty());
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HsnIndex>();
    }
}
