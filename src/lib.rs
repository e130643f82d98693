//! tmdsgen - DC-balanced TMDS-style codeword tables for limited-range video.
//!
//! ## Architecture
//!
//! - **Models**: Codewords, configuration and errors
//! - **Encoder**: Running-parity 8b/10b transform plus neighbor balance search
//! - **Table**: Sample schedule, generation, rendering and round-trip report
//!
//! ## Epistemic Design
//!
//! - K_i (Knowledge): Codeword width and control bits enforced by types
//! - B_i (Beliefs): Parsing and decoding return Result
//! - I^R (Resolvable): Range, sample count and balance policy from config

pub mod encoder;
pub mod models;
pub mod table;

// Re-exports for convenience
pub use encoder::{decode, encode, BalanceSearch, Encoder};
pub use models::{Codeword, CodewordError, Config, Result, TmdsgenError};
pub use table::{RoundTripReport, Table, TableRenderer};
