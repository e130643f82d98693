//! Round-trip check of an encoder over a whole range.
//!
//! K_i: Every value must decode back within the requested tolerance.
//! Anything outside it is reported, never silently dropped. The tolerance
//! is separate from the encoder's search radius: the default radius of 2
//! breaks the usual ±1 bound for some values, and this is where that shows.

use crate::encoder::{decode, Encoder};
use crate::models::{Result, TmdsgenError, CODEWORD_BITS};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// A value whose codeword decodes too far away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub value: u8,
    pub decoded: u8,
    pub codeword: u16,
}

/// Result of encoding and decoding every value in a range.
#[derive(Debug, Clone, Serialize)]
pub struct RoundTripReport {
    pub min: u8,
    pub max: u8,
    pub tolerance: u8,
    /// Values whose codeword decodes to a different value
    pub substituted: usize,
    pub max_deviation: u8,
    /// Count of codewords per popcount, indexed 0..=10
    pub popcount_histogram: [usize; CODEWORD_BITS + 1],
    pub violations: Vec<Violation>,
}

impl RoundTripReport {
    pub fn run(encoder: &Encoder, min: u8, max: u8, tolerance: u8) -> Result<Self> {
        if min > max {
            return Err(TmdsgenError::InvalidRange { min, max });
        }

        let mut report = Self {
            min,
            max,
            tolerance,
            substituted: 0,
            max_deviation: 0,
            popcount_histogram: [0; CODEWORD_BITS + 1],
            violations: Vec::new(),
        };

        for value in min..=max {
            let codeword = encoder.encode(value);
            let decoded = decode(codeword)?;
            let deviation = decoded.abs_diff(value);

            report.popcount_histogram[codeword.count_ones() as usize] += 1;
            report.max_deviation = report.max_deviation.max(deviation);
            if deviation > 0 {
                report.substituted += 1;
            }
            if deviation > tolerance {
                warn!(value, decoded, tolerance, "Round trip outside tolerance");
                report.violations.push(Violation {
                    value,
                    decoded,
                    codeword: codeword.raw(),
                });
            }
        }

        Ok(report)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of values checked.
    pub fn total(&self) -> usize {
        usize::from(self.max.saturating_sub(self.min)) + 1
    }

    /// Turn violations into an error.
    pub fn into_result(self) -> Result<Self> {
        match self.violations.first() {
            None => Ok(self),
            Some(first) => Err(TmdsgenError::ToleranceExceeded {
                count: self.violations.len(),
                tolerance: self.tolerance,
                first: first.value,
                decoded: first.decoded,
            }),
        }
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Round Trip Check ===")?;
        writeln!(f, "Range:       {}..={}", self.min, self.max)?;
        writeln!(f, "Values:      {}", self.total())?;
        writeln!(f, "Substituted: {}", self.substituted)?;
        writeln!(f, "Max dev:     {} (tolerance ±{})", self.max_deviation, self.tolerance)?;
        writeln!(f, "Violations:  {}", self.violations.len())?;
        writeln!(f, "Popcount histogram:")?;
        for (ones, &count) in self.popcount_histogram.iter().enumerate() {
            if count > 0 {
                writeln!(f, "  {ones:>2} ones: {count}")?;
            }
        }
        Ok(())
    }
}
