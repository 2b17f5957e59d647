//! Configuration file loading for the scenario runner.
//!
//! The runner reads `chess-runner.toml` from the working directory, or the
//! file given with `--config`. Every key is optional.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or querying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested suite size has no configured range.
    #[error("Unknown suite size: {0}")]
    UnknownSuite(String),
}

/// An inclusive range of scenario numbers.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SuiteRange {
    pub start: u32,
    pub end: u32,
}

impl SuiteRange {
    /// Creates a range, swapping the bounds if they are reversed.
    pub fn new(start: u32, end: u32) -> Self {
        SuiteRange {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Iterates over the scenario numbers in the range.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        let SuiteRange { start, end } = SuiteRange::new(self.start, self.end);
        start..=end
    }
}

/// Scenario runner configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Prefix of scenario file names in suite mode:
    /// `<prefix>_<size>_<number>.txt`. Defaults to `part2`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Whether to print the board after each scenario. Defaults to true.
    #[serde(default = "default_print_board")]
    pub print_board: bool,
    /// Scenario ranges per board size, keyed like `"8x8"`.
    #[serde(default = "default_suites")]
    pub suites: BTreeMap<String, SuiteRange>,
}

fn default_file_prefix() -> String {
    "part2".to_string()
}

fn default_print_board() -> bool {
    true
}

fn default_suites() -> BTreeMap<String, SuiteRange> {
    BTreeMap::from([
        ("4x4".to_string(), SuiteRange::new(1, 8)),
        ("6x6".to_string(), SuiteRange::new(1, 8)),
        ("8x8".to_string(), SuiteRange::new(1, 19)),
    ])
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            file_prefix: default_file_prefix(),
            print_board: default_print_board(),
            suites: default_suites(),
        }
    }
}

impl RunnerConfig {
    /// Loads the configuration from [`Self::config_path()`], falling back
    /// to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from the given file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess-runner.toml")
    }

    /// Retrieves the scenario range for a board size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSuite`] if no range is configured.
    pub fn suite(&self, size: &str) -> Result<SuiteRange, ConfigError> {
        self.suites
            .get(size)
            .copied()
            .ok_or_else(|| ConfigError::UnknownSuite(size.to_string()))
    }

    /// Returns the path of scenario `number` of the `size` suite in `dir`.
    pub fn scenario_path(&self, dir: &Path, size: &str, number: u32) -> PathBuf {
        dir.join(format!("{}_{}_{}.txt", self.file_prefix, size, number))
    }
}
