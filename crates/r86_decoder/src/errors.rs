use crate::opcode::InstructionVariant;
use thiserror::Error;

/// Everything that can go wrong while decoding. All of these are fatal to the
/// stream; malformed input can not self-correct, so there is no best-effort
/// continuation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("no instruction encoding matches op code {byte:#04x} at offset {offset}")]
    UnrecognizedOpCode { offset: usize, byte: u8 },

    /// The encoding table is prefix-free, so this indicates a defect in the
    /// table itself, never a property of the input.
    #[error("op code {byte:#04x} at offset {offset} matches more than one instruction encoding")]
    AmbiguousOpCode { offset: usize, byte: u8 },

    #[error("instruction at offset {offset} needs more bytes than the stream holds")]
    TruncatedStream { offset: usize },

    #[error("{variant} instructions are recognized but have no decode path (offset {offset})")]
    UnsupportedVariant {
        offset: usize,
        variant: InstructionVariant,
    },

    #[error("invalid operand size encoding ({0:#03b})")]
    InvalidOperandSize(u8),

    #[error("invalid register encoding ({0:#05b})")]
    InvalidRegisterEncoding(u8),

    #[error("invalid indirect memory encoding ({0:#05b})")]
    InvalidIndirectMemoryEncoding(u8),

    /// A bit field request that does not fit inside a byte. Always a logic
    /// fault in the decoder, never an input error.
    #[error("bit field of width {width} at index {index} does not fit in a byte")]
    MalformedBitField { index: u32, width: u32 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
