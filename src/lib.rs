//! Calcvm: compiles arithmetic expressions to flat bytecode and runs them
//! on a stack machine.
//!
//! # Pipeline
//!
//! ```text
//! source -> lexer -> tokens -> compiler (Pratt) -> bytecode -> vm -> f64
//! ```
//!
//! The compiler emits postfix bytecode directly while parsing; there is no
//! syntax tree. Bytecode is a `Vec<f64>` of opcodes (see [`OpCode`]) where
//! every push is followed by its raw operand cell.

pub mod bytecode;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod repl;

use tracing::{debug, trace};

pub use bytecode::{disassemble, disassemble_code, Chunk, OpCode, Vm};
pub use compiler::Compiler;
pub use error::{CalcError, LexError, ParseError, RuntimeError};
pub use lexer::{Token, TokenKind};

/// Split source text into tokens, dropping whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = lexer::tokenize(source)?;
    trace!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Compile source text to a chunk, keeping the line table.
pub fn compile_chunk(source: &str) -> Result<Chunk, CalcError> {
    let tokens = tokenize(source)?;
    let chunk = Compiler::compile(&tokens)?;
    debug!(cells = chunk.len(), "compiled");
    Ok(chunk)
}

/// Compile source text to bytecode cells.
pub fn compile(source: &str) -> Result<Vec<f64>, CalcError> {
    Ok(compile_chunk(source)?.into_code())
}

/// Execute bytecode cells on a fresh VM.
pub fn execute(code: &[f64]) -> Result<f64, RuntimeError> {
    let result = Vm::new().execute(code)?;
    debug!(result, "executed");
    Ok(result)
}

/// Compile and execute source text.
pub fn run(source: &str) -> Result<f64, CalcError> {
    let code = compile(source)?;
    Ok(execute(&code)?)
}
