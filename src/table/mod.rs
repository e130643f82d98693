//! Table module - sampling, generation and rendering.
//!
//! Flow:
//! Range → SampleSchedule → Encoder → Table → TableRenderer → stdout

mod render;
mod report;
mod sampler;

pub use render::*;
pub use report::*;
pub use sampler::*;

use crate::encoder::Encoder;
use crate::models::{Codeword, Result, TableConfig, TmdsgenError};
use tracing::info;

/// One generated row: where it was sampled and what it encodes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub sample: Sample,
    pub codeword: Codeword,
}

/// A generated codeword table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    entries: Vec<TableEntry>,
}

impl Table {
    /// Sample the configured range and encode every sample.
    pub fn generate(config: &TableConfig, encoder: &Encoder) -> Result<Self> {
        let entries: Vec<TableEntry> = SampleSchedule::from_config(config)
            .map(|sample| TableEntry {
                sample,
                codeword: encoder.encode(sample.value),
            })
            .collect();

        if entries.is_empty() {
            return Err(TmdsgenError::EmptyTable {
                min: config.min,
                max: config.max,
            });
        }

        info!(
            entries = entries.len(),
            min = config.min,
            max = config.max,
            reach = encoder.reach(),
            "Generated table"
        );
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw codeword values, in table order.
    pub fn codewords(&self) -> Vec<u16> {
        self.entries.iter().map(|e| e.codeword.raw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{decode, BalanceSearch};

    #[test]
    fn test_generate_default() {
        let encoder = Encoder::balanced(BalanceSearch::default());
        let table = Table::generate(&TableConfig::default(), &encoder).unwrap();
        assert_eq!(table.len(), 32);
        assert!(!table.is_empty());

        let first = table.entries()[0];
        assert_eq!(first.sample.value, 16);
        assert_eq!(first.codeword.literal(), "0b0111110000");

        for entry in table.entries() {
            let decoded = decode(entry.codeword).unwrap();
            assert!(decoded.abs_diff(entry.sample.value) <= encoder.reach());
        }
    }

    #[test]
    fn test_plain_table_decodes_exactly() {
        let table = Table::generate(&TableConfig::default(), &Encoder::plain()).unwrap();
        for entry in table.entries() {
            assert_eq!(decode(entry.codeword).unwrap(), entry.sample.value);
        }
    }

    #[test]
    fn test_codewords_in_order() {
        let config = TableConfig {
            min: 0,
            max: 255,
            points: 2,
        };
        let table = Table::generate(&config, &Encoder::plain()).unwrap();
        assert_eq!(table.codewords(), vec![0b01_0000_0000, 0b01_0101_0101]);
    }

    #[test]
    fn test_zero_points_is_error() {
        let config = TableConfig {
            points: 0,
            ..TableConfig::default()
        };
        assert!(matches!(
            Table::generate(&config, &Encoder::plain()),
            Err(TmdsgenError::EmptyTable { .. })
        ));
    }
}
