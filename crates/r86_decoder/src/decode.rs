use crate::modrm::ModRegRM;
use crate::opcode::{classify, InstructionVariant};
use crate::reader::ByteReader;
use crate::{fields, DecodeError, Result, TryFromEncoding};
use r86_instruction::{
    Instruction, Operand, OperandSet, OperandSize, Operation, RegisterEncoding,
    SizedRegisterEncoding,
};

/// One decoded instruction together with the exact number of bytes its
/// encoding occupied in the stream.
#[derive(Debug, PartialEq)]
pub struct Decoded {
    pub instruction: Instruction,
    pub length: usize,
}

/// Decode the single instruction starting at `offset`. The returned length is
/// always the precise number of bytes consumed, so `offset + length` is the
/// start of the next instruction.
pub fn decode_instruction(data: &[u8], offset: usize) -> Result<Decoded> {
    let mut reader = ByteReader::new(data, offset);

    let op_code = reader.read_u8()?;

    let instruction = match classify(op_code, offset)? {
        InstructionVariant::RegToFromReg => reg_to_from_reg(op_code, &mut reader)?,

        InstructionVariant::ImmediateToReg => immediate_to_reg(op_code, &mut reader)?,

        InstructionVariant::MemToAcc => accumulator_transfer(op_code, false, &mut reader)?,

        InstructionVariant::AccToMem => accumulator_transfer(op_code, true, &mut reader)?,

        variant @ (InstructionVariant::ImmediateToRegMemory
        | InstructionVariant::RegToSegment
        | InstructionVariant::SegmentToReg) => {
            return Err(DecodeError::UnsupportedVariant { offset, variant })
        }
    };

    Ok(Decoded {
        instruction,
        length: reader.consumed(),
    })
}

// 1 0 0 0 1 0 d w | mod reg r/m | (disp lo) | (disp hi)
fn reg_to_from_reg(op_code: u8, reader: &mut ByteReader) -> Result<Instruction> {
    let operand_size = OperandSize::try_from_encoding(fields::bit(op_code, 7)?)?;
    let reg_is_destination = fields::bit(op_code, 6)? == 1;

    let mrrm_byte = reader.read_u8()?;
    let mrrm = ModRegRM::try_from_byte(mrrm_byte, reader)?;

    let reg = Operand::Register(SizedRegisterEncoding(mrrm.register, operand_size));
    let reg_mem = mrrm.register_or_memory.into_operand(operand_size);

    Ok(Instruction::new(
        Operation::MOV,
        if reg_is_destination {
            OperandSet::DestinationAndSource(reg, reg_mem)
        } else {
            OperandSet::DestinationAndSource(reg_mem, reg)
        },
    ))
}

// 1 0 1 1 w reg | data | (data if w = 1)
fn immediate_to_reg(op_code: u8, reader: &mut ByteReader) -> Result<Instruction> {
    let operand_size = OperandSize::try_from_encoding(fields::bit(op_code, 4)?)?;
    let register = RegisterEncoding::try_from_encoding(fields::bits(op_code, 5, 3)?)?;

    let destination = SizedRegisterEncoding(register, operand_size).into();
    let source = reader.read_immediate(operand_size)?.into();

    Ok(Instruction::new(
        Operation::MOV,
        OperandSet::DestinationAndSource(destination, source),
    ))
}

// 1 0 1 0 0 0 0 w | addr       (memory to accumulator)
// 1 0 1 0 0 0 1 w | addr       (accumulator to memory)
//
// The w bit selects the width of the address itself; the register operand is
// the word accumulator either way.
fn accumulator_transfer(
    op_code: u8,
    direct_is_destination: bool,
    reader: &mut ByteReader,
) -> Result<Instruction> {
    let address = match OperandSize::try_from_encoding(fields::bit(op_code, 7)?)? {
        OperandSize::Byte => reader.read_u8()? as u16,
        OperandSize::Word => reader.read_u16()?,
    };

    let accumulator = Operand::Register(SizedRegisterEncoding(
        RegisterEncoding::AlAx,
        OperandSize::Word,
    ));
    let direct = Operand::Direct(address);

    Ok(Instruction::new(
        Operation::MOV,
        if direct_is_destination {
            OperandSet::DestinationAndSource(direct, accumulator)
        } else {
            OperandSet::DestinationAndSource(accumulator, direct)
        },
    ))
}

enum StreamState {
    Running(usize),
    Done,
}

/// Walks a buffer from offset 0, yielding one [Decoded] per instruction.
///
/// Every instruction starts exactly where the previous one ended; there is no
/// backtracking and no resynchronization. The first error ends the stream.
pub struct InstructionStream<'a> {
    data: &'a [u8],
    state: StreamState,
}

impl<'a> InstructionStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            state: StreamState::Running(0),
        }
    }
}

impl Iterator for InstructionStream<'_> {
    type Item = Result<Decoded>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = match self.state {
            StreamState::Running(offset) if offset < self.data.len() => offset,
            _ => {
                self.state = StreamState::Done;
                return None;
            }
        };

        match decode_instruction(self.data, offset) {
            Ok(decoded) => {
                self.state = StreamState::Running(offset + decoded.length);
                Some(Ok(decoded))
            }
            Err(err) => {
                self.state = StreamState::Done;
                Some(Err(err))
            }
        }
    }
}
