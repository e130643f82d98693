//! Running-parity 8b/10b encoding.
//!
//! `q[0] = d[0]`, `q[i] = q[i-1] ^ d[i]`, then bit 8 set and bit 9 clear.

use crate::models::{
    data_bits, value_from_bits, Codeword, CodewordError, CODEWORD_BITS, DATA_BITS, HIGH_BIT,
    MARKER_BIT,
};

/// Encode a byte into its codeword.
pub fn encode(value: u8) -> Codeword {
    let d = data_bits(value);
    let mut q = [0u8; CODEWORD_BITS];

    q[0] = d[0];
    for i in 1..DATA_BITS {
        q[i] = q[i - 1] ^ d[i];
    }
    q[MARKER_BIT] = 1;
    q[HIGH_BIT] = 0;

    Codeword::from_bits(&q)
}

/// Decode a codeword back into its byte.
///
/// B_i(codeword carries the fixed control bits) → Result
pub fn decode(codeword: Codeword) -> Result<u8, CodewordError> {
    if !codeword.bit(MARKER_BIT) {
        return Err(CodewordError::MissingMarker(codeword.literal()));
    }
    if codeword.bit(HIGH_BIT) {
        return Err(CodewordError::HighBitSet(codeword.literal()));
    }

    let q = codeword.bits();
    let mut d = [0u8; DATA_BITS];
    d[0] = q[0];
    for i in 1..DATA_BITS {
        d[i] = q[i] ^ q[i - 1];
    }

    Ok(value_from_bits(&d))
}
