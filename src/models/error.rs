//! Error types for tmdsgen.
//!
//! Epistemic taxonomy:
//! - B_i falsified: Expected failures (bad config, malformed literal)
//! - K_i violated: Table invariants that did not hold

use thiserror::Error;

/// Top-level error type for tmdsgen.
#[derive(Debug, Error)]
pub enum TmdsgenError {
    // ═══════════════════════════════════════════════════════════════════
    // B_i FALSIFIED — Belief proven wrong (expected failures)
    // ═══════════════════════════════════════════════════════════════════

    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Codeword error: {0}")]
    Codeword(#[from] CodewordError),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════
    // K_i VIOLATED — Invariant broken
    // ═══════════════════════════════════════════════════════════════════

    #[error("{count} value(s) decode outside the ±{tolerance} tolerance (first: {first} -> {decoded})")]
    ToleranceExceeded {
        count: usize,
        tolerance: u8,
        first: u8,
        decoded: u8,
    },

    #[error("Invalid range {min}..={max}: min is greater than max")]
    InvalidRange { min: u8, max: u8 },

    #[error("Sample schedule produced no entries for range {min}..={max}")]
    EmptyTable { min: u8, max: u8 },
}

/// Errors from building, parsing or decoding a single codeword.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodewordError {
    #[error("value {0:#b} does not fit in 10 bits")]
    TooWide(u16),

    #[error("invalid binary literal: '{0}'")]
    InvalidLiteral(String),

    #[error("codeword {0} has bit 8 clear")]
    MissingMarker(String),

    #[error("codeword {0} has bit 9 set")]
    HighBitSet(String),
}

impl TmdsgenError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for tmdsgen.
pub type Result<T> = std::result::Result<T, TmdsgenError>;
