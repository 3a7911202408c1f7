use crate::SizedRegisterEncoding;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandSize {
    Byte,
    Word,
}

/// The base register combination of a memory operand, selected by the `rm`
/// field when `mod` is not register mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddressingMode {
    BxSi,
    BxDi,
    BpSi,
    BpDi,
    Si,
    Di,
    Bp,
    Bx,
}

impl Display for AddressingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use AddressingMode::*;

        match self {
            BxSi => write!(f, "bx+si"),
            BxDi => write!(f, "bx+di"),
            BpSi => write!(f, "bp+si"),
            BpDi => write!(f, "bp+di"),
            Si => write!(f, "si"),
            Di => write!(f, "di"),
            Bp => write!(f, "bp"),
            Bx => write!(f, "bx"),
        }
    }
}

/// A signed offset added to the base register combination. `None` means the
/// encoding carried no displacement bytes at all; a present displacement is
/// always rendered, even when its value is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Displacement {
    None,
    Byte(i8),
    Word(i16),
}

impl Display for Displacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Displacement::None => Ok(()),
            Displacement::Byte(offset) => write!(f, "{:+}", offset),
            Displacement::Word(offset) => write!(f, "{:+}", offset),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Immediate {
    Byte(u8),
    Word(u16),
}

impl Display for Immediate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Immediate::Byte(value) => write!(f, "{}", value),
            Immediate::Word(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// A bare 16-bit absolute address, the `mod = 00`, `rm = 110` exception.
    Direct(u16),
    Indirect(AddressingMode, Displacement),
    Register(SizedRegisterEncoding),
    Immediate(Immediate),
}

impl From<SizedRegisterEncoding> for Operand {
    fn from(register: SizedRegisterEncoding) -> Self {
        Operand::Register(register)
    }
}

impl From<Immediate> for Operand {
    fn from(immediate: Immediate) -> Self {
        Operand::Immediate(immediate)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Direct(address) => write!(f, "[{}]", address),
            Operand::Indirect(encoding, displacement) => {
                write!(f, "[{}{}]", encoding, displacement)
            }
            Operand::Register(register) => register.fmt(f),
            Operand::Immediate(value) => value.fmt(f),
        }
    }
}
