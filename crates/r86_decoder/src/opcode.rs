//! Classification of the first instruction byte. The 8086 op code space is
//! not a single fixed-width table; encodings claim a leading bit pattern of
//! 4 to 8 bits, so classification is a prefix match against an ordered table.

use crate::{DecodeError, Result};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InstructionVariant {
    RegToFromReg,
    ImmediateToRegMemory,
    ImmediateToReg,
    MemToAcc,
    AccToMem,
    RegToSegment,
    SegmentToReg,
}

impl Display for InstructionVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use InstructionVariant::*;

        match self {
            RegToFromReg => write!(f, "register to/from register or memory"),
            ImmediateToRegMemory => write!(f, "immediate to register or memory"),
            ImmediateToReg => write!(f, "immediate to register"),
            MemToAcc => write!(f, "memory to accumulator"),
            AccToMem => write!(f, "accumulator to memory"),
            RegToSegment => write!(f, "register or memory to segment register"),
            SegmentToReg => write!(f, "segment register to register or memory"),
        }
    }
}

struct Pattern {
    bits: u8,
    width: u32,
    variant: InstructionVariant,
}

impl Pattern {
    fn matches(&self, byte: u8) -> bool {
        byte >> (8 - self.width) == self.bits
    }
}

/// The leading bit pattern of each MOV encoding. The table must stay
/// prefix-free: no entry may be a leading substring of a byte another entry
/// also matches.
const PATTERNS: [Pattern; 7] = [
    Pattern {
        bits: 0b100010,
        width: 6,
        variant: InstructionVariant::RegToFromReg,
    },
    Pattern {
        bits: 0b1100011,
        width: 7,
        variant: InstructionVariant::ImmediateToRegMemory,
    },
    Pattern {
        bits: 0b1011,
        width: 4,
        variant: InstructionVariant::ImmediateToReg,
    },
    Pattern {
        bits: 0b1010000,
        width: 7,
        variant: InstructionVariant::MemToAcc,
    },
    Pattern {
        bits: 0b1010001,
        width: 7,
        variant: InstructionVariant::AccToMem,
    },
    Pattern {
        bits: 0b10001110,
        width: 8,
        variant: InstructionVariant::RegToSegment,
    },
    Pattern {
        bits: 0b10001100,
        width: 8,
        variant: InstructionVariant::SegmentToReg,
    },
];

/// Match `byte` against the encoding table. Exactly one pattern must match:
/// no match means the op code is outside the supported set, more than one
/// means the table itself is broken.
pub fn classify(byte: u8, offset: usize) -> Result<InstructionVariant> {
    let mut matched = None;

    for pattern in &PATTERNS {
        if pattern.matches(byte) {
            if matched.is_some() {
                return Err(DecodeError::AmbiguousOpCode { offset, byte });
            }
            matched = Some(pattern.variant);
        }
    }

    matched.ok_or(DecodeError::UnrecognizedOpCode { offset, byte })
}
