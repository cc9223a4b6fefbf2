//! Bytecode chunk: a flat sequence of numeric cells plus line info.

use super::opcode::OpCode;

/// A chunk of bytecode.
///
/// Cells are opcodes, except that every `PushNumber` is followed by exactly
/// one raw operand cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chunk {
    /// The bytecode cells.
    pub code: Vec<f64>,
    /// Source line numbers, parallel to `code`.
    pub lines: Vec<usize>,
}

impl Chunk {
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Emit an opcode and record its source line.
    pub fn emit(&mut self, op: OpCode, line: usize) -> usize {
        let offset = self.code.len();
        self.code.push(op.as_cell());
        self.lines.push(line);
        offset
    }

    /// Emit a push of `value`: the opcode followed by its operand cell.
    pub fn emit_number(&mut self, value: f64, line: usize) -> usize {
        let offset = self.emit(OpCode::PushNumber, line);
        self.code.push(value);
        self.lines.push(line);
        offset
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn into_code(self) -> Vec<f64> {
        self.code
    }
}
