//! # Run Context
//!
//! Global flags resolved in `main` for the subcommands that read the HSN
//! sheet: the loaded configuration and the optional `--data` override.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use hsn_index::{HsnConfig, HsnIndex};

/// Resolved global options.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Configuration from `--config`, or defaults.
    pub config: HsnConfig,
    /// Data file from `--data`.
    pub data: Option<PathBuf>,
}

impl RunContext {
    /// Build the context from the global flags.
    pub fn from_flags(config: Option<&Path>, data: Option<PathBuf>) -> Result<Self> {
        let config = match config {
            Some(path) => HsnConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => HsnConfig::default(),
        };
        Ok(Self { config, data })
    }

    /// The data file, by flag, environment, or config.
    pub fn data_path(&self) -> Result<PathBuf> {
        Ok(self.config.data_path(self.data.as_deref())?)
    }

    /// Load the index, degrading to an empty one if the file is unusable.
    pub fn index_or_empty(&self) -> Result<HsnIndex> {
        let path = self.data_path()?;
        Ok(HsnIndex::load_or_empty(&path).with_tie_break(self.config.suffix_tie_break))
    }

    /// Load the index, failing on any load error.
    pub fn index_strict(&self) -> Result<HsnIndex> {
        let path = self.data_path()?;
        let index = HsnIndex::load(&path)
            .with_context(|| format!("loading HSN data from {}", path.display()))?;
        Ok(index.with_tie_break(self.config.suffix_tie_break))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsn_index::SuffixTieBreak;

    #[test]
    fn from_flags_without_config_uses_defaults() {
        let ctx = RunContext::from_flags(None, Some(PathBuf::from("x.csv"))).unwrap();
        assert_eq!(ctx.config, HsnConfig::default());
        assert_eq!(ctx.data_path().unwrap(), PathBuf::from("x.csv"));
    }

    #[test]
    fn tie_break_comes_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("hsn.csv");
        std::fs::write(&csv, "HSN,Description\n990101,A\n20101,B\n").unwrap();
        let yaml = dir.path().join("hsn.yaml");
        std::fs::write(&yaml, "suffix_tie_break: insertion_order\n").unwrap();

        let ctx = RunContext::from_flags(Some(&yaml), Some(csv)).unwrap();
        let index = ctx.index_strict().unwrap();
        assert_eq!(index.tie_break(), SuffixTieBreak::InsertionOrder);
        assert_eq!(index.resolve("0101").unwrap().record.code.as_str(), "990101");
    }

    #[test]
    fn strict_load_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bad.csv");
        std::fs::write(&csv, "Code,Text\n1,x\n").unwrap();
        let ctx = RunContext::from_flags(None, Some(csv)).unwrap();

        assert!(ctx.index_strict().is_err());
        assert!(ctx.index_or_empty().unwrap().is_empty());
    }
}
