//! Bytecode disassembler for debug output.

use super::chunk::Chunk;
use super::opcode::OpCode;

/// Disassemble a chunk, with source lines, to a human-readable string.
pub fn disassemble(chunk: &Chunk) -> String {
    let mut out = String::from("== <expression> ==\n");
    disassemble_cells(&chunk.code, Some(&chunk.lines), &mut out);
    out
}

/// Disassemble a bare cell sequence with no line information.
pub fn disassemble_code(code: &[f64]) -> String {
    let mut out = String::from("== <bytecode> ==\n");
    disassemble_cells(code, None, &mut out);
    out
}

fn disassemble_cells(code: &[f64], lines: Option<&[usize]>, out: &mut String) {
    let mut offset = 0;
    let mut previous_line = None;

    while offset < code.len() {
        let line_str = match lines.and_then(|l| l.get(offset).copied()) {
            Some(line) if previous_line == Some(line) => "   |".to_string(),
            Some(line) => {
                previous_line = Some(line);
                format!("{:4}", line)
            }
            None => "   ?".to_string(),
        };
        out.push_str(&format!("{:04} {} ", offset, line_str));
        offset = disassemble_op(code, offset, out);
        out.push('\n');
    }
}

/// Write one instruction and return the offset of the next.
fn disassemble_op(code: &[f64], offset: usize, out: &mut String) -> usize {
    let cell = code[offset];
    match OpCode::from_cell(cell) {
        Some(OpCode::PushNumber) => {
            let mnemonic = OpCode::PushNumber.mnemonic();
            match code.get(offset + 1) {
                Some(value) => out.push_str(&format!("{:<13}{}", mnemonic, value)),
                None => out.push_str(&format!("{:<13}<missing operand>", mnemonic)),
            }
            offset + 2
        }
        Some(op) => {
            out.push_str(op.mnemonic());
            offset + 1
        }
        None => {
            out.push_str(&format!("UNKNOWN      {}", cell));
            offset + 1
        }
    }
}
