//! Configuration models for tmdsgen.
//!
//! All I^R (resolvable ignorance) is parameterized here.
//! Every field has a default, so an absent file or an empty table yields the
//! published limited-range table.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for tmdsgen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input range and sampling
    #[serde(default)]
    pub table: TableConfig,

    /// DC-balance neighbor search
    #[serde(default)]
    pub balance: BalanceConfig,

    /// Rendering of the generated table
    #[serde(default)]
    pub output: OutputConfig,

    /// Round-trip check bound
    #[serde(default)]
    pub check: CheckConfig,
}

/// Input range and sample count.
///
/// K_i: Values are bytes, so the range can never leave 0..=255.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Lowest value in the range (inclusive)
    #[serde(default = "default_min")]
    pub min: u8,

    /// Highest value in the range (inclusive)
    #[serde(default = "default_max")]
    pub max: u8,

    /// Number of evenly spaced sample points
    #[serde(default = "default_points")]
    pub points: usize,
}

fn default_min() -> u8 {
    16
}

fn default_max() -> u8 {
    235
}

fn default_points() -> usize {
    32
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            points: default_points(),
        }
    }
}

/// Neighbor search for codewords closer to an even ones/zeros split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Substitute a neighboring value's codeword when it is better balanced
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Popcount considered balanced
    #[serde(default = "default_target_ones")]
    pub target_ones: u32,

    /// How far from the source value the search may go
    #[serde(default = "default_radius")]
    pub radius: u8,
}

fn default_true() -> bool {
    true
}

fn default_target_ones() -> u32 {
    5
}

fn default_radius() -> u8 {
    2
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            target_ones: default_target_ones(),
            radius: default_radius(),
        }
    }
}

/// Round-trip check settings.
///
/// K_i: The bound is independent of the balance radius, so a radius wider
/// than the bound shows up as violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Largest accepted distance between a value and its decoded codeword
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
}

fn default_tolerance() -> u8 {
    1
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

/// How the table is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One annotated literal per line, ready to paste into an initializer
    #[default]
    Literals,
    /// A complete `pub const` array declaration
    Rust,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Constant name used by the `rust` format
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "TMDS_LIMITED".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            name: default_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// B_i(file exists) → Result
    /// B_i(file is valid TOML) → Result
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.min > self.table.max {
            return Err(ConfigError::Invalid(format!(
                "table.min ({}) is greater than table.max ({})",
                self.table.min, self.table.max
            )));
        }

        if self.table.points < 2 {
            return Err(ConfigError::Invalid(format!(
                "table.points must be at least 2, got {}",
                self.table.points
            )));
        }

        if self.balance.target_ones > crate::models::CODEWORD_BITS as u32 {
            return Err(ConfigError::Invalid(format!(
                "balance.target_ones must be at most 10, got {}",
                self.balance.target_ones
            )));
        }

        if !is_identifier(&self.output.name) {
            return Err(ConfigError::Invalid(format!(
                "output.name '{}' is not a valid constant name",
                self.output.name
            )));
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Configuration errors.
///
/// Epistemic origin:
/// - B_i falsified: File not found, parse error
/// - K_i violated: Fields that contradict each other
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
