//! # Configuration
//!
//! Where the data file lives and how suffix ties are broken. Read from an
//! optional YAML file:
//!
//! ```yaml
//! data_path: data/HSN_SAC.csv
//! suffix_tie_break: shortest   # or insertion_order
//! ```
//!
//! The data path resolves with precedence: explicit flag, then the
//! [`DATA_PATH_ENV`] environment variable, then the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolve::SuffixTieBreak;

/// Environment variable naming the data file.
pub const DATA_PATH_ENV: &str = "HSN_DATA_PATH";

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HsnConfig {
    /// CSV data file.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Suffix fallback tie-break.
    #[serde(default)]
    pub suffix_tie_break: SuffixTieBreak,
}

impl HsnConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Yaml`] on syntax errors or unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file. Relative `data_path` values are taken
    /// relative to the file's directory.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Yaml`]
    /// if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&text)?;
        if let (Some(data), Some(dir)) = (config.data_path.as_ref(), path.parent()) {
            if data.is_relative() {
                config.data_path = Some(dir.join(data));
            }
        }
        Ok(config)
    }

    /// Resolve the data path from the flag, the process environment, and
    /// this config, in that order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingDataPath`] if none of them supplies one.
    pub fn data_path(&self, flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let env = std::env::var_os(DATA_PATH_ENV).map(PathBuf::from);
        self.data_path_with(flag, env)
    }

    /// [`HsnConfig::data_path`] with the environment value passed in.
    pub fn data_path_with(
        &self,
        flag: Option<&Path>,
        env: Option<PathBuf>,
    ) -> Result<PathBuf, ConfigError> {
        flag.map(Path::to_path_buf)
            .or(env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| self.data_path.clone())
            .ok_or(ConfigError::MissingDataPath { env: DATA_PATH_ENV })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = HsnConfig::from_yaml_str(
            "data_path: /srv/hsn.csv\nsuffix_tie_break: insertion_order\n",
        )
        .unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/hsn.csv")));
        assert_eq!(config.suffix_tie_break, SuffixTieBreak::InsertionOrder);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = HsnConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, HsnConfig::default());
        assert_eq!(config.suffix_tie_break, SuffixTieBreak::Shortest);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = HsnConfig::from_yaml_str("datapath: x.csv\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn data_path_precedence() {
        let config = HsnConfig {
            data_path: Some(PathBuf::from("from-config.csv")),
            ..HsnConfig::default()
        };
        let flag = PathBuf::from("from-flag.csv");
        let env = Some(PathBuf::from("from-env.csv"));

        assert_eq!(
            config.data_path_with(Some(&flag), env.clone()).unwrap(),
            flag
        );
        assert_eq!(
            config.data_path_with(None, env).unwrap(),
            PathBuf::from("from-env.csv")
        );
        assert_eq!(
            config.data_path_with(None, Some(PathBuf::new())).unwrap(),
            PathBuf::from("from-config.csv")
        );
    }

    #[test]
    fn missing_data_path() {
        let err = HsnConfig::default().data_path_with(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDataPath { env: "HSN_DATA_PATH" }));
    }

    #[test]
    fn from_path_resolves_relative_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hsn.yaml");
        std::fs::write(&path, "data_path: sheets/hsn.csv\n").unwrap();
        let config = HsnConfig::from_path(&path).unwrap();
        assert_eq!(config.data_path, Some(dir.path().join("sheets/hsn.csv")));
    }
}
