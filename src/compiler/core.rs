//! Pratt parser that emits bytecode directly, with no intermediate tree.

use crate::bytecode::{Chunk, OpCode};
use crate::error::{CalcError, ParseError, RuntimeError};
use crate::lexer::{Token, TokenKind};

use super::precedence::{get_rule, is_right_associative, Precedence};

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CalcError>;

/// Deepest allowed nesting of sub-expressions (groups, unary operands,
/// right operands).
pub const MAX_DEPTH: usize = 256;

const END_OF_INPUT: &str = "end of input";

/// The compiler: a forward-only cursor over the tokens and the chunk
/// being emitted.
pub struct Compiler<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize,
    chunk: Chunk,
}

impl<'a> Compiler<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            chunk: Chunk::new(),
        }
    }

    /// Compile one expression followed by `Halt`.
    ///
    /// Tokens after the expression are never read.
    pub fn compile(tokens: &'a [Token]) -> CompileResult<Chunk> {
        let mut compiler = Compiler::new(tokens);
        compiler.expression(Precedence::Unit)?;
        let line = compiler.last_line();
        compiler.chunk.emit(OpCode::Halt, line);
        Ok(compiler.chunk)
    }

    /// Parse an expression whose infix operators bind at least as tightly
    /// as `min`.
    pub(crate) fn expression(&mut self, min: Precedence) -> CompileResult<()> {
        if self.depth >= MAX_DEPTH {
            let line = self.peek().map_or_else(|| self.last_line(), |t| t.line);
            return Err(ParseError::too_deep(line).into());
        }
        self.depth += 1;
        let result = self.parse_precedence(min);
        self.depth -= 1;
        result
    }

    fn parse_precedence(&mut self, min: Precedence) -> CompileResult<()> {
        let Some(left) = self.advance() else {
            return Err(ParseError::expression_expected(END_OF_INPUT, self.last_line()).into());
        };
        let Some(prefix) = get_rule(left.kind).prefix else {
            return Err(ParseError::expression_expected(&left.lexeme, left.line).into());
        };
        prefix(self, left)?;

        while let Some(next) = self.peek() {
            let rule = get_rule(next.kind);
            if rule.precedence == Precedence::None || rule.precedence < min {
                break;
            }
            self.current += 1;
            let Some(infix) = rule.infix else {
                return Err(ParseError::operator_expected(&next.lexeme, next.line).into());
            };
            infix(self, next)?;
        }

        Ok(())
    }

    // ===== Prefix handlers =====

    pub(crate) fn number(&mut self, token: &'a Token) -> CompileResult<()> {
        let value: f64 = token
            .lexeme
            .parse()
            .map_err(|_| ParseError::invalid_number(&token.lexeme, token.line))?;
        self.chunk.emit_number(value, token.line);
        Ok(())
    }

    pub(crate) fn group(&mut self, _open: &'a Token) -> CompileResult<()> {
        self.expression(Precedence::Unit)?;
        match self.advance() {
            Some(close) if close.kind == TokenKind::RightParen => Ok(()),
            Some(other) => Err(ParseError::unclosed_group(&other.lexeme, other.line).into()),
            None => Err(ParseError::unclosed_group(END_OF_INPUT, self.last_line()).into()),
        }
    }

    pub(crate) fn unary(&mut self, operator: &'a Token) -> CompileResult<()> {
        self.expression(Precedence::Unary)?;
        match operator.kind {
            TokenKind::Minus => {
                self.chunk.emit(OpCode::Negate, operator.line);
                Ok(())
            }
            other => Err(RuntimeError::unmapped_operator(other).into()),
        }
    }

    // ===== Infix handlers =====

    pub(crate) fn binary(&mut self, operator: &'a Token) -> CompileResult<()> {
        let precedence = get_rule(operator.kind).precedence;
        let right_min = if is_right_associative(operator.kind) {
            precedence
        } else {
            precedence.next()
        };
        self.expression(right_min)?;

        let op = match operator.kind {
            TokenKind::StarStar => OpCode::Exponentiate,
            TokenKind::Star => OpCode::Multiply,
            TokenKind::Slash => OpCode::Divide,
            TokenKind::Percent => OpCode::Modulo,
            TokenKind::Plus => OpCode::Sum,
            TokenKind::Minus => OpCode::Subtract,
            other => return Err(RuntimeError::unmapped_operator(other).into()),
        };
        self.chunk.emit(op, operator.line);
        Ok(())
    }

    // ===== Token cursor =====

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }
}
