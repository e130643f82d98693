//! Core data models for tmdsgen.
//!
//! Epistemic mapping:
//! - K_i (Knowledge): Fixed-width codewords with compile-time widths
//! - B_i (Beliefs): Parsing and decoding wrapped in Result
//! - I^R (Resolvable): Range, sampling and balance parameters in config

mod codeword;
mod config;
mod error;

pub use codeword::*;
pub use config::*;
pub use error::*;
