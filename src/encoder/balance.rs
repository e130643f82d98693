//! DC-balance neighbor search.
//!
//! When a value's own codeword is not balanced, the codeword of a nearby
//! value is used instead. The decoded value may then be off by up to the
//! search radius.

use super::encode;
use crate::models::{BalanceConfig, Codeword, CODEWORD_BITS};
use tracing::debug;

/// Search for the best balanced codeword within `radius` of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSearch {
    target_ones: u32,
    radius: u8,
}

impl BalanceSearch {
    pub fn new(target_ones: u32, radius: u8) -> Self {
        Self {
            target_ones,
            radius,
        }
    }

    /// Build from config. `None` when balancing is disabled.
    pub fn from_config(config: &BalanceConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.target_ones, config.radius))
    }

    pub fn target_ones(&self) -> u32 {
        self.target_ones
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Distance of a codeword's popcount from the target.
    pub fn imbalance(&self, codeword: Codeword) -> u32 {
        self.target_ones.abs_diff(codeword.count_ones())
    }

    /// Encode `value`, substituting a neighbor's codeword when it is closer
    /// to the target popcount.
    ///
    /// Candidates are ranked by `(imbalance, q[0..10])`, the bit sequence
    /// compared lexicographically from `q[0]`.
    pub fn encode(&self, value: u8) -> Codeword {
        let own = encode(value);
        if own.count_ones() == self.target_ones {
            return own;
        }

        let best = self
            .candidates(value)
            .map(|candidate| {
                let codeword = encode(candidate);
                (self.imbalance(codeword), codeword.bits(), candidate, codeword)
            })
            .min_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        match best {
            Some((imbalance, _, candidate, codeword)) => {
                if candidate != value {
                    debug!(
                        value,
                        substitute = candidate,
                        ones = codeword.count_ones(),
                        imbalance,
                        "Substituted neighbor codeword"
                    );
                }
                codeword
            }
            None => own,
        }
    }

    /// Every byte in `value - radius ..= value + radius`.
    fn candidates(&self, value: u8) -> impl Iterator<Item = u8> {
        let low = value.saturating_sub(self.radius);
        let high = value.saturating_add(self.radius);
        low..=high
    }
}

impl Default for BalanceSearch {
    fn default() -> Self {
        Self::new((CODEWORD_BITS / 2) as u32, 2)
    }
}
