//! Decodes raw 8086 machine code into [r86_instruction::Instruction] values.
//!
//! The entry points are [decode_instruction] for a single instruction at a
//! known offset and [InstructionStream] for walking a whole buffer.

mod decode;
mod errors;
mod fields;
mod modrm;
mod opcode;
mod reader;

pub use decode::{decode_instruction, Decoded, InstructionStream};
pub use errors::{DecodeError, Result};
pub use modrm::{ModRegRM, RegisterOrMemory};
pub use opcode::{classify, InstructionVariant};
pub use reader::ByteReader;

use r86_instruction::{OperandSize, RegisterEncoding};

/// Decoding for the small fixed-width fields that are packed into op code and
/// mod/reg/rm bytes.
trait TryFromEncoding<T> {
    fn try_from_encoding(encoding: u8) -> Result<T>;
}

impl TryFromEncoding<Self> for RegisterEncoding {
    fn try_from_encoding(encoding: u8) -> Result<Self> {
        match encoding {
            0b000 => Ok(RegisterEncoding::AlAx),
            0b001 => Ok(RegisterEncoding::ClCx),
            0b010 => Ok(RegisterEncoding::DlDx),
            0b011 => Ok(RegisterEncoding::BlBx),
            0b100 => Ok(RegisterEncoding::AhSp),
            0b101 => Ok(RegisterEncoding::ChBp),
            0b110 => Ok(RegisterEncoding::DhSi),
            0b111 => Ok(RegisterEncoding::BhDi),
            _ => Err(DecodeError::InvalidRegisterEncoding(encoding)),
        }
    }
}

impl TryFromEncoding<Self> for OperandSize {
    fn try_from_encoding(encoding: u8) -> Result<Self> {
        match encoding {
            0b0 => Ok(OperandSize::Byte),
            0b1 => Ok(OperandSize::Word),
            _ => Err(DecodeError::InvalidOperandSize(encoding)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_three_bit_value_names_a_register() {
        for encoding in 0b000..=0b111 {
            assert!(RegisterEncoding::try_from_encoding(encoding).is_ok());
        }

        assert_eq!(
            RegisterEncoding::try_from_encoding(0b1000),
            Err(DecodeError::InvalidRegisterEncoding(0b1000))
        );
    }

    #[test]
    fn operand_size_is_a_single_bit() {
        assert_eq!(OperandSize::try_from_encoding(0), Ok(OperandSize::Byte));
        assert_eq!(OperandSize::try_from_encoding(1), Ok(OperandSize::Word));
        assert_eq!(
            OperandSize::try_from_encoding(2),
            Err(DecodeError::InvalidOperandSize(2))
        );
    }
}
