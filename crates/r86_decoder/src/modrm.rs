//! Resolution of the mod/reg/rm byte into operands, including the extra
//! displacement or direct address bytes the `mod` field promises.

use crate::reader::ByteReader;
use crate::{fields, DecodeError, Result, TryFromEncoding};
use r86_instruction::{
    AddressingMode, Displacement, Operand, OperandSize, RegisterEncoding, SizedRegisterEncoding,
};

impl TryFromEncoding<Self> for AddressingMode {
    fn try_from_encoding(encoding: u8) -> Result<Self> {
        use AddressingMode::*;

        match encoding {
            0b000 => Ok(BxSi),
            0b001 => Ok(BxDi),
            0b010 => Ok(BpSi),
            0b011 => Ok(BpDi),
            0b100 => Ok(Si),
            0b101 => Ok(Di),
            0b110 => Ok(Bp),
            0b111 => Ok(Bx),
            _ => Err(DecodeError::InvalidIndirectMemoryEncoding(encoding)),
        }
    }
}

/// The second operand of a mod/reg/rm encoded instruction, as selected by the
/// `mod` and `rm` fields.
#[derive(Debug, PartialEq)]
pub enum RegisterOrMemory {
    Direct(u16),
    Indirect(AddressingMode),
    DisplacementByte(AddressingMode, i8),
    DisplacementWord(AddressingMode, i16),
    Register(RegisterEncoding),
}

impl RegisterOrMemory {
    /// Resolve the `mod` and `rm` fields of `mrrm_byte`, pulling displacement
    /// or direct address bytes from `reader` as the mode requires.
    ///
    /// `mod = 00` with `rm = 110` does not mean `[bp]`; the 8086 redefines
    /// that combination as a bare 16-bit direct address read from the next
    /// two bytes, little-endian.
    pub fn try_from_mrrm(mrrm_byte: u8, reader: &mut ByteReader) -> Result<Self> {
        let mode = fields::bits(mrrm_byte, 0, 2)?;
        let rm = fields::bits(mrrm_byte, 5, 3)?;

        match mode {
            0b00 => match rm {
                0b110 => Ok(RegisterOrMemory::Direct(reader.read_u16()?)),
                _ => Ok(RegisterOrMemory::Indirect(
                    AddressingMode::try_from_encoding(rm)?,
                )),
            },

            0b01 => Ok(RegisterOrMemory::DisplacementByte(
                AddressingMode::try_from_encoding(rm)?,
                reader.read_u8()? as i8,
            )),

            0b10 => Ok(RegisterOrMemory::DisplacementWord(
                AddressingMode::try_from_encoding(rm)?,
                reader.read_u16()? as i16,
            )),

            0b11 => Ok(RegisterOrMemory::Register(
                RegisterEncoding::try_from_encoding(rm)?,
            )),

            _ => unreachable!("a two bit field can not exceed 0b11"),
        }
    }

    pub fn into_operand(self, operand_size: OperandSize) -> Operand {
        match self {
            RegisterOrMemory::Direct(address) => Operand::Direct(address),
            RegisterOrMemory::Indirect(addressing_mode) => {
                Operand::Indirect(addressing_mode, Displacement::None)
            }
            RegisterOrMemory::DisplacementByte(addressing_mode, displacement) => {
                Operand::Indirect(addressing_mode, Displacement::Byte(displacement))
            }
            RegisterOrMemory::DisplacementWord(addressing_mode, displacement) => {
                Operand::Indirect(addressing_mode, Displacement::Word(displacement))
            }
            RegisterOrMemory::Register(register) => {
                Operand::Register(SizedRegisterEncoding(register, operand_size))
            }
        }
    }
}

fn encoding_for_register(register: RegisterEncoding) -> u8 {
    use RegisterEncoding::*;

    match register {
        AlAx => 0b000,
        ClCx => 0b001,
        DlDx => 0b010,
        BlBx => 0b011,
        AhSp => 0b100,
        ChBp => 0b101,
        DhSi => 0b110,
        BhDi => 0b111,
    }
}

fn encoding_for_addressing_mode(addressing_mode: AddressingMode) -> u8 {
    use AddressingMode::*;

    match addressing_mode {
        BxSi => 0b000,
        BxDi => 0b001,
        BpSi => 0b010,
        BpDi => 0b011,
        Si => 0b100,
        Di => 0b101,
        Bp => 0b110,
        Bx => 0b111,
    }
}

#[derive(Debug)]
pub struct ModRegRM {
    pub register: RegisterEncoding,
    pub register_or_memory: RegisterOrMemory,
}

impl ModRegRM {
    pub fn new(register: RegisterEncoding, register_or_memory: RegisterOrMemory) -> Self {
        Self {
            register,
            register_or_memory,
        }
    }

    pub fn try_from_byte(mrrm_byte: u8, reader: &mut ByteReader) -> Result<Self> {
        let register = RegisterEncoding::try_from_encoding(fields::bits(mrrm_byte, 2, 3)?)?;
        let register_or_memory = RegisterOrMemory::try_from_mrrm(mrrm_byte, reader)?;

        Ok(ModRegRM {
            register,
            register_or_memory,
        })
    }

    /// Re-encode the mod/reg/rm byte. Displacement and direct address bytes
    /// are not included.
    pub fn as_byte(&self) -> u8 {
        let mut byte: u8 = match self.register_or_memory {
            RegisterOrMemory::Direct(_) => 0b00,
            RegisterOrMemory::Indirect(_) => 0b00,
            RegisterOrMemory::DisplacementByte(_, _) => 0b01,
            RegisterOrMemory::DisplacementWord(_, _) => 0b10,
            RegisterOrMemory::Register(_) => 0b11,
        } << 6;

        byte |= encoding_for_register(self.register) << 3;

        byte |= match self.register_or_memory {
            RegisterOrMemory::Direct(_) => 0b110,
            RegisterOrMemory::Indirect(addressing_mode)
            | RegisterOrMemory::DisplacementByte(addressing_mode, _)
            | RegisterOrMemory::DisplacementWord(addressing_mode, _) => {
                encoding_for_addressing_mode(addressing_mode)
            }
            RegisterOrMemory::Register(register) => encoding_for_register(register),
        };

        byte
    }
}
