//! Bytecode module for the expression VM.
//!
//! # Architecture
//!
//! - `opcode`: OpCode definitions and their fixed numeric encoding
//! - `chunk`: Flat cell sequences with a parallel line table
//! - `vm`: Stack-based virtual machine for executing bytecode
//! - `disassembler`: Debug output for bytecode inspection

pub mod chunk;
pub mod disassembler;
pub mod opcode;
pub mod vm;

pub use chunk::Chunk;
pub use disassembler::{disassemble, disassemble_code};
pub use opcode::OpCode;
pub use vm::Vm;
