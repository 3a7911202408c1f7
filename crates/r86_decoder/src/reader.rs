use crate::{fields, DecodeError, Result};
use r86_instruction::{Displacement, Immediate, OperandSize};

/// Reads successive bytes of one instruction out of a shared buffer. The
/// buffer is only ever borrowed; the reader tracks how many bytes the current
/// instruction has consumed so the driver can advance by exactly that amount.
pub struct ByteReader<'a> {
    data: &'a [u8],
    start: usize,
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], start: usize) -> Self {
        Self {
            data,
            start,
            position: start,
        }
    }

    /// The number of bytes consumed since the start of the instruction.
    pub fn consumed(&self) -> usize {
        self.position - self.start
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        match self.data.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(DecodeError::TruncatedStream { offset: self.start }),
        }
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let low = self.read_u8()?;
        let high = self.read_u8()?;
        Ok(fields::word(low, high))
    }

    pub fn read_immediate(&mut self, operand_size: OperandSize) -> Result<Immediate> {
        Ok(match operand_size {
            OperandSize::Byte => Immediate::Byte(self.read_u8()?),
            OperandSize::Word => Immediate::Word(self.read_u16()?),
        })
    }

    pub fn read_displacement(&mut self, operand_size: OperandSize) -> Result<Displacement> {
        Ok(match operand_size {
            OperandSize::Byte => Displacement::Byte(self.read_u8()? as i8),
            OperandSize::Word => Displacement::Word(self.read_u16()? as i16),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_tracks_consumed_bytes() {
        let data = [0x01, 0x12, 0x34, 0x56];
        let mut reader = ByteReader::new(&data, 1);

        assert_eq!(reader.consumed(), 0);
        assert_eq!(reader.read_u8(), Ok(0x12));
        assert_eq!(reader.read_u16(), Ok(0x5634));
        assert_eq!(reader.consumed(), 3);
    }

    #[test]
    fn reading_past_the_end_reports_the_instruction_offset() {
        let data = [0x8B, 0x80, 0x01];
        let mut reader = ByteReader::new(&data, 0);

        reader.read_u8().unwrap();
        reader.read_u8().unwrap();
        assert_eq!(
            reader.read_u16(),
            Err(DecodeError::TruncatedStream { offset: 0 })
        );
    }

    #[test]
    fn displacements_are_sign_extended() {
        let data = [0xFF];
        let mut reader = ByteReader::new(&data, 0);

        assert_eq!(
            reader.read_displacement(OperandSize::Byte),
            Ok(Displacement::Byte(-1))
        );
    }
}
