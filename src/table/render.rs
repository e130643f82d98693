//! Text rendering of a generated table.

use super::{Table, TableEntry};
use crate::models::{OutputFormat, Result, TmdsgenError};
use std::io::Write;

/// Render one entry as `0b0111110000,  /*  16 (5 ones) */`.
pub fn format_entry(entry: &TableEntry) -> String {
    format!(
        "{:<12},  /* {:>3} ({} ones) */",
        entry.codeword.literal(),
        entry.sample.annotation(),
        entry.codeword.count_ones()
    )
}

/// Writes tables in one of the supported output formats.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    format: OutputFormat,
    name: String,
}

impl TableRenderer {
    pub fn new(format: OutputFormat, name: impl Into<String>) -> Self {
        Self {
            format,
            name: name.into(),
        }
    }

    pub fn write_to<W: Write>(&self, table: &Table, out: &mut W) -> Result<()> {
        self.write_lines(table, out)
            .map_err(|e| TmdsgenError::io("writing table", e))
    }

    pub fn render(&self, table: &Table) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(table, &mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            TmdsgenError::io(
                "rendering table",
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    fn write_lines<W: Write>(&self, table: &Table, out: &mut W) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Literals => {
                for entry in table.entries() {
                    writeln!(out, "{}", format_entry(entry))?;
                }
            }
            OutputFormat::Rust => {
                writeln!(out, "pub const {}: [u16; {}] = [", self.name, table.len())?;
                for entry in table.entries() {
                    writeln!(out, "    {}", format_entry(entry))?;
                }
                writeln!(out, "];")?;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;
    use crate::models::{BalanceConfig, TableConfig};

    fn default_table() -> Table {
        Table::generate(
            &TableConfig::default(),
            &Encoder::from_config(&BalanceConfig::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_format_entry() {
        let table = default_table();
        assert_eq!(
            format_entry(&table.entries()[0]),
            "0b0111110000,  /*  16 (5 ones) */"
        );
        assert_eq!(
            format_entry(&table.entries()[16]),
            "0b0111010101,  /* 129 (6 ones) */"
        );
    }

    #[test]
    fn test_literals_format() {
        let table = default_table();
        let text = TableRenderer::new(OutputFormat::Literals, "X")
            .render(&table)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines[0].contains("/*  16 (5 ones) */"));
        assert_eq!(lines[31], "0b0101011001,  /* 234 (5 ones) */");
    }

    #[test]
    fn test_rust_format() {
        let table = default_table();
        let text = TableRenderer::new(OutputFormat::Rust, "TMDS_LIMITED")
            .render(&table)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 34);
        assert_eq!(lines[0], "pub const TMDS_LIMITED: [u16; 32] = [");
        assert_eq!(lines[1], "    0b0111110000,  /*  16 (5 ones) */");
        assert_eq!(lines[33], "];");
    }
}
