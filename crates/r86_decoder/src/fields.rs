//! Fixed-width bit field extraction. Bit indices count from the most
//! significant bit, so the `w` bit of an op code byte is index 7 and the `mod`
//! field of a mod/reg/rm byte starts at index 0.

use crate::{DecodeError, Result};

/// Extract `width` bits starting at `index`, most significant bit first.
pub fn bits(byte: u8, index: u32, width: u32) -> Result<u8> {
    if width == 0 || width > 8 || index > 7 || index + width > 8 {
        return Err(DecodeError::MalformedBitField { index, width });
    }

    let mask = ((1u16 << width) - 1) as u8;
    Ok((byte >> (8 - index - width)) & mask)
}

/// Extract the single bit at `index`.
pub fn bit(byte: u8, index: u32) -> Result<u8> {
    bits(byte, index, 1)
}

/// Reconstruct a 16-bit value from a little-endian byte pair.
pub fn word(low: u8, high: u8) -> u16 {
    u16::from_le_bytes([low, high])
}
