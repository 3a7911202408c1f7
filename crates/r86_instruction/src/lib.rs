//! This crate holds the structs and constants to represent a decoded 8086
//! instruction, along with its canonical assembly text rendering.

mod instruction;
mod operand;
mod register;

pub use instruction::{Instruction, OperandSet, Operation};
pub use operand::{AddressingMode, Displacement, Immediate, Operand, OperandSize};
pub use register::{RegisterEncoding, SizedRegisterEncoding};
