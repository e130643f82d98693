//! Encoder module - codeword encoding, decoding and balance policy.
//!
//! Provides:
//! - `encode` / `decode`: The exact running-parity transform
//! - `BalanceSearch`: Neighbor substitution toward a target popcount
//! - `Encoder`: The policy a table is generated with

mod balance;
mod tmds;

pub use balance::*;
pub use tmds::*;

use crate::models::{BalanceConfig, Codeword};

/// Encoding policy: plain, or balanced by neighbor search.
///
/// K_i: `decode(encoder.encode(x))` is within `reach()` of `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    balance: Option<BalanceSearch>,
}

impl Encoder {
    /// Exact encoder with no substitution.
    pub fn plain() -> Self {
        Self { balance: None }
    }

    pub fn balanced(search: BalanceSearch) -> Self {
        Self {
            balance: Some(search),
        }
    }

    pub fn from_config(config: &BalanceConfig) -> Self {
        Self {
            balance: BalanceSearch::from_config(config),
        }
    }

    pub fn balance(&self) -> Option<&BalanceSearch> {
        self.balance.as_ref()
    }

    pub fn encode(&self, value: u8) -> Codeword {
        match &self.balance {
            Some(search) => search.encode(value),
            None => encode(value),
        }
    }

    /// Largest distance the encoder can put between a value and the decode
    /// of its codeword.
    pub fn reach(&self) -> u8 {
        self.balance.map_or(0, |search| search.radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_encoder() {
        let encoder = Encoder::plain();
        assert_eq!(encoder.reach(), 0);
        assert_eq!(encoder.encode(23), encode(23));
        assert!(encoder.balance().is_none());
    }

    #[test]
    fn test_from_config() {
        let encoder = Encoder::from_config(&BalanceConfig::default());
        assert_eq!(encoder.reach(), 2);
        assert_eq!(encoder.encode(23).literal(), "0b0111110010");

        let disabled = BalanceConfig {
            enabled: false,
            ..BalanceConfig::default()
        };
        assert_eq!(Encoder::from_config(&disabled), Encoder::plain());
    }
}
