//! Error types for all pipeline phases.

use thiserror::Error;

use crate::lexer::TokenKind;

/// Lexer errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Unexpected symbol \"{lexeme}\" at line {line}")]
    UnexpectedSymbol { lexeme: String, line: usize },

    /// More than one recognizer alternative matched at the same position.
    #[error("Ambiguous token match at line {line}")]
    AmbiguousMatch { line: usize },

    /// The recognizer produced a match with no alternative attached.
    #[error("No token alternative matched at offset {offset}")]
    NoMatch { offset: usize },
}

impl LexError {
    pub fn unexpected_symbol(lexeme: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedSymbol {
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedSymbol { line, .. } => Some(*line),
            Self::AmbiguousMatch { line } => Some(*line),
            Self::NoMatch { .. } => None,
        }
    }
}

/// Parser errors.
///
/// `found` holds the offending lexeme, or `end of input` when the token
/// stream ran out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expression expected, found '{found}' at line {line}")]
    ExpressionExpected { found: String, line: usize },

    #[error("Right parenthesis required after group, found '{found}' at line {line}")]
    UnclosedGroup { found: String, line: usize },

    #[error("Operator expected, found '{found}' at line {line}")]
    OperatorExpected { found: String, line: usize },

    #[error("Invalid number '{lexeme}' at line {line}")]
    InvalidNumber { lexeme: String, line: usize },

    #[error("Expression nested too deeply at line {line}")]
    TooDeep { line: usize },
}

impl ParseError {
    pub fn expression_expected(found: impl Into<String>, line: usize) -> Self {
        Self::ExpressionExpected {
            found: found.into(),
            line,
        }
    }

    pub fn unclosed_group(found: impl Into<String>, line: usize) -> Self {
        Self::UnclosedGroup {
            found: found.into(),
            line,
        }
    }

    pub fn operator_expected(found: impl Into<String>, line: usize) -> Self {
        Self::OperatorExpected {
            found: found.into(),
            line,
        }
    }

    pub fn invalid_number(lexeme: impl Into<String>, line: usize) -> Self {
        Self::InvalidNumber {
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn too_deep(line: usize) -> Self {
        Self::TooDeep { line }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::ExpressionExpected { line, .. } => *line,
            Self::UnclosedGroup { line, .. } => *line,
            Self::OperatorExpected { line, .. } => *line,
            Self::InvalidNumber { line, .. } => *line,
            Self::TooDeep { line } => *line,
        }
    }
}

/// Runtime errors.
///
/// `offset` is the cell index of the instruction that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Empty bytecode")]
    EmptyBytecode,

    #[error("Stack underflow at offset {offset}")]
    StackUnderflow { offset: usize },

    #[error("Unknown opcode {cell} at offset {offset}")]
    UnknownOpcode { cell: f64, offset: usize },

    #[error("Missing operand for push at offset {offset}")]
    MissingOperand { offset: usize },

    #[error("Bytecode ended without halt")]
    MissingHalt,

    /// An operator token reached the emitter with no opcode mapped to it.
    #[error("No opcode for operator '{operator}'")]
    UnmappedOperator { operator: TokenKind },
}

impl RuntimeError {
    pub fn stack_underflow(offset: usize) -> Self {
        Self::StackUnderflow { offset }
    }

    pub fn unmapped_operator(operator: TokenKind) -> Self {
        Self::UnmappedOperator { operator }
    }
}

/// A unified error type for all phases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Source line of the failure, when one is known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(err) => err.line(),
            Self::Parse(err) => Some(err.line()),
            Self::Runtime(_) => None,
        }
    }
}
