//! Bytecode opcodes for the expression VM.

/// A single bytecode instruction tag.
///
/// The discriminants are the serialized encoding and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Push the operand cell that follows onto the stack.
    PushNumber = 0,
    Negate = 1,

    // --- Arithmetic ---
    Sum = 2,
    Subtract = 3,
    Multiply = 4,
    Divide = 5,
    Modulo = 6,
    Exponentiate = 7,

    /// Stop and pop the result.
    Halt = 8,
}

impl OpCode {
    /// Decode a bytecode cell. Only the exact integers 0..=8 are opcodes.
    pub fn from_cell(cell: f64) -> Option<OpCode> {
        if cell.fract() != 0.0 || !(0.0..=8.0).contains(&cell) {
            return None;
        }
        match cell as u8 {
            0 => Some(OpCode::PushNumber),
            1 => Some(OpCode::Negate),
            2 => Some(OpCode::Sum),
            3 => Some(OpCode::Subtract),
            4 => Some(OpCode::Multiply),
            5 => Some(OpCode::Divide),
            6 => Some(OpCode::Modulo),
            7 => Some(OpCode::Exponentiate),
            8 => Some(OpCode::Halt),
            _ => None,
        }
    }

    pub fn as_cell(self) -> f64 {
        f64::from(self as u8)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::PushNumber => "PUSH_NUMBER",
            OpCode::Negate => "NEGATE",
            OpCode::Sum => "SUM",
            OpCode::Subtract => "SUBTRACT",
            OpCode::Multiply => "MULTIPLY",
            OpCode::Divide => "DIVIDE",
            OpCode::Modulo => "MODULO",
            OpCode::Exponentiate => "EXPONENTIATE",
            OpCode::Halt => "HALT",
        }
    }
}
