//! Bit-level types for the 8b/10b table.
//!
//! K_i: A codeword is exactly 10 bits wide. Anything wider is rejected at
//! construction, so every other module can index `q[0..10]` freely.

use super::CodewordError;
use std::fmt;
use std::str::FromStr;

/// Number of bits in a data word.
pub const DATA_BITS: usize = 8;

/// Number of bits in a codeword.
pub const CODEWORD_BITS: usize = 10;

/// Bit 8 is always set in a data codeword.
pub const MARKER_BIT: usize = 8;

/// Bit 9 is always clear in a data codeword.
pub const HIGH_BIT: usize = 9;

const CODEWORD_MASK: u16 = (1 << CODEWORD_BITS) - 1;

/// Split a value into its bits, least significant first.
pub fn data_bits(value: u8) -> [u8; DATA_BITS] {
    let mut bits = [0u8; DATA_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> i) & 1;
    }
    bits
}

/// Inverse of [`data_bits`].
pub fn value_from_bits(bits: &[u8; DATA_BITS]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << i))
}

/// A 10-bit codeword. Bit `i` of the integer is element `q[i]` of the
/// transmitted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword(u16);

impl Codeword {
    /// Build a codeword from its bit sequence `q[0..10]`.
    pub fn from_bits(bits: &[u8; CODEWORD_BITS]) -> Self {
        let raw = bits
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, &bit)| acc | (u16::from(bit & 1) << i));
        Self(raw)
    }

    /// The codeword as its bit sequence, `q[0]` first.
    pub fn bits(self) -> [u8; CODEWORD_BITS] {
        let mut bits = [0u8; CODEWORD_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = ((self.0 >> i) & 1) as u8;
        }
        bits
    }

    /// Whether bit `index` is set.
    pub fn bit(self, index: usize) -> bool {
        index < CODEWORD_BITS && self.0 & (1 << index) != 0
    }

    /// Raw 10-bit value.
    pub fn raw(self) -> u16 {
        self.0
    }

    /// Population count.
    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Binary literal, most significant bit first, e.g. `0b0111110000`.
    pub fn literal(self) -> String {
        format!("{:#012b}", self.0)
    }
}

impl TryFrom<u16> for Codeword {
    type Error = CodewordError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        if raw & !CODEWORD_MASK != 0 {
            return Err(CodewordError::TooWide(raw));
        }
        Ok(Self(raw))
    }
}

impl From<Codeword> for u16 {
    fn from(codeword: Codeword) -> Self {
        codeword.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#012b}", self.0)
    }
}

impl FromStr for Codeword {
    type Err = CodewordError;

    /// Parse a binary literal. The `0b` prefix and `_` separators are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(',');
        let digits = trimmed
            .strip_prefix("0b")
            .or_else(|| trimmed.strip_prefix("0B"))
            .unwrap_or(trimmed)
            .replace('_', "");

        if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(CodewordError::InvalidLiteral(s.to_string()));
        }

        let significant = digits.trim_start_matches('0');
        if significant.len() > CODEWORD_BITS {
            return Err(CodewordError::InvalidLiteral(s.to_string()));
        }

        let raw = u16::from_str_radix(&digits[digits.len() - significant.len().max(1)..], 2)
            .map_err(|_| CodewordError::InvalidLiteral(s.to_string()))?;
        Self::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bits_lsb_first() {
        assert_eq!(data_bits(16), [0, 0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(data_bits(0b1000_0001), [1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_value_from_bits_inverts_data_bits() {
        for value in 0..=u8::MAX {
            assert_eq!(value_from_bits(&data_bits(value)), value);
        }
    }

    #[test]
    fn test_literal_is_ten_digits() {
        let codeword = Codeword::try_from(0b01_1111_0000_u16).unwrap();
        assert_eq!(codeword.literal(), "0b0111110000");
        assert_eq!(codeword.to_string(), "0b0111110000");
        assert_eq!(codeword.count_ones(), 5);

        let zero = Codeword::try_from(0_u16).unwrap();
        assert_eq!(zero.literal(), "0b0000000000");
    }

    #[test]
    fn test_bits_roundtrip_and_order() {
        let codeword = Codeword::try_from(0b01_0000_0001_u16).unwrap();
        let bits = codeword.bits();
        assert_eq!(bits, [1, 0, 0, 0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(Codeword::from_bits(&bits), codeword);
        assert!(codeword.bit(MARKER_BIT));
        assert!(!codeword.bit(HIGH_BIT));
        assert!(!codeword.bit(42));
    }

    #[test]
    fn test_rejects_wide_values() {
        assert!(matches!(
            Codeword::try_from(0b100_0000_0000_u16),
            Err(CodewordError::TooWide(_))
        ));
    }

    #[test]
    fn test_parse_literal() {
        let parsed: Codeword = "0b0111110010".parse().unwrap();
        assert_eq!(parsed.raw(), 0b01_1111_0010);

        let bare: Codeword = "1_0000_0000".parse().unwrap();
        assert_eq!(bare.raw(), 0b01_0000_0000);

        let pasted: Codeword = "0b0101011001,".parse().unwrap();
        assert_eq!(pasted.raw(), 0b01_0101_1001);

        assert!("0b".parse::<Codeword>().is_err());
        assert!("0b0121".parse::<Codeword>().is_err());
        assert!("0b11111111111".parse::<Codeword>().is_err());
    }

    #[test]
    fn test_parse_leading_zeros_beyond_width() {
        let parsed: Codeword = "0b000111".parse().unwrap();
        assert_eq!(parsed.raw(), 0b111);

        let all_zero: Codeword = "0b000000000000".parse().unwrap();
        assert_eq!(all_zero.raw(), 0);
    }
}
