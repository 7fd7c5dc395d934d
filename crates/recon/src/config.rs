use serde::Deserialize;

use crate::error::ReconError;

pub const DEFAULT_LIMIT: usize = 5810;
pub const DEFAULT_OUTPUT_NAME: &str = "matched-winners.csv";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Comparison settings. Every field has a default, so an empty TOML
/// document is a valid config.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// File name of the matched table, placed beside the winners list.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// Field delimiter for the reconciled table and the matched table.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            output_name: default_output_name(),
            delimiter: default_delimiter(),
            columns: ColumnMapping::default(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_output_name() -> String {
    DEFAULT_OUTPUT_NAME.into()
}

fn default_delimiter() -> char {
    ','
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Reconciled table header names. Matched after trimming and lowercasing
/// both sides.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMapping {
    #[serde(default = "default_rank_column")]
    pub rank: String,
    #[serde(default = "default_bidder_column")]
    pub bidder: String,
    #[serde(default = "default_amount_column")]
    pub amount: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            rank: default_rank_column(),
            bidder: default_bidder_column(),
            amount: default_amount_column(),
        }
    }
}

fn default_rank_column() -> String {
    "rank".into()
}

fn default_bidder_column() -> String {
    "bidder".into()
}

fn default_amount_column() -> String {
    "boostedAmount".into()
}

impl ColumnMapping {
    /// Column names as configured, in rank/bidder/amount order.
    pub fn names(&self) -> [String; 3] {
        [self.rank.clone(), self.bidder.clone(), self.amount.clone()]
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CompareConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: CompareConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if !self.delimiter.is_ascii() {
            return Err(ReconError::ConfigValidation(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        if self.output_name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("output_name must not be empty".into()));
        }

        for (field, name) in [
            ("rank", &self.columns.rank),
            ("bidder", &self.columns.bidder),
            ("amount", &self.columns.amount),
        ] {
            if name.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "columns.{field} must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// The delimiter as the single byte the `csv` crate expects.
    /// `validate` guarantees it is ASCII.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
