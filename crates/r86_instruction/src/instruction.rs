use crate::Operand;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    MOV,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::MOV => write!(f, "mov"),
        }
    }
}

/// Operand order is already resolved when the set is built; the direction bit
/// never survives into the representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandSet {
    DestinationAndSource(Operand, Operand),
}

impl Display for OperandSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSet::DestinationAndSource(destination, source) => {
                write!(f, "{}, {}", destination, source)
            }
        }
    }
}

/// Representation of a single decoded 8086 instruction.
///
/// ```rust
/// use r86_instruction::*;
///
/// // mov ax, [bx+si+8]
/// let i = Instruction::new(
///     Operation::MOV,
///     OperandSet::DestinationAndSource(
///         Operand::Register(SizedRegisterEncoding(
///             RegisterEncoding::AlAx,
///             OperandSize::Word,
///         )),
///         Operand::Indirect(AddressingMode::BxSi, Displacement::Byte(8)),
///     ),
/// );
/// assert_eq!(i.to_string(), "mov ax, [bx+si+8]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction {
    pub operation: Operation,
    pub operands: OperandSet,
}

impl Instruction {
    /// Create a new instruction with the given [Operation] and [OperandSet].
    pub fn new(operation: Operation, operands: OperandSet) -> Self {
        Self {
            operation,
            operands,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.operation, self.operands)
    }
}
