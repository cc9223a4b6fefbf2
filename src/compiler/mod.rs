//! Compiler module: token stream to bytecode in a single pass.

mod core;
mod precedence;


pub use self::core::{CompileResult, Compiler, MAX_DEPTH};
pub use self::precedence::{get_rule, ParseRule, Precedence};
