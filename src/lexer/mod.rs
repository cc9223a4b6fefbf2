//! Lexer module for arithmetic expressions.

pub mod scanner;
pub mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
