use crate::OperandSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegisterEncoding {
    AlAx,
    ClCx,
    DlDx,
    BlBx,
    AhSp,
    ChBp,
    DhSi,
    BhDi,
}

/// A register encoding paired with the operand size that selects between the
/// 8-bit and 16-bit halves of the register file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizedRegisterEncoding(pub RegisterEncoding, pub OperandSize);

impl std::fmt::Display for SizedRegisterEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RegisterEncoding::*;

        match self.1 {
            OperandSize::Byte => match self.0 {
                AlAx => write!(f, "al"),
                ClCx => write!(f, "cl"),
                DlDx => write!(f, "dl"),
                BlBx => write!(f, "bl"),
                AhSp => write!(f, "ah"),
                ChBp => write!(f, "ch"),
                DhSi => write!(f, "dh"),
                BhDi => write!(f, "bh"),
            },

            OperandSize::Word => match self.0 {
                AlAx => write!(f, "ax"),
                ClCx => write!(f, "cx"),
                DlDx => write!(f, "dx"),
                BlBx => write!(f, "bx"),
                AhSp => write!(f, "sp"),
                ChBp => write!(f, "bp"),
                DhSi => write!(f, "si"),
                BhDi => write!(f, "di"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_names_follow_operand_size() {
        assert_eq!(
            SizedRegisterEncoding(RegisterEncoding::ClCx, OperandSize::Byte).to_string(),
            "cl"
        );
        assert_eq!(
            SizedRegisterEncoding(RegisterEncoding::ClCx, OperandSize::Word).to_string(),
            "cx"
        );
        assert_eq!(
            SizedRegisterEncoding(RegisterEncoding::AhSp, OperandSize::Word).to_string(),
            "sp"
        );
        assert_eq!(
            SizedRegisterEncoding(RegisterEncoding::BhDi, OperandSize::Byte).to_string(),
            "bh"
        );
    }
}
