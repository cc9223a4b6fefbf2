//! Binding powers and the per-token parse rule table.

use crate::lexer::{Token, TokenKind};

use super::core::{Compiler, CompileResult};

/// Binding power levels (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None = 0,
    Unit = 1,
    Term = 2,           // + -
    Factor = 3,         // * / %
    Exponentiation = 4, // **
    Unary = 5,          // -
}

impl Precedence {
    pub fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Unit,
            Precedence::Unit => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Exponentiation,
            Precedence::Exponentiation => Precedence::Unary,
            Precedence::Unary => Precedence::Unary,
        }
    }
}

/// Handler invoked with the token that triggered it, already consumed.
pub type ParseFn<'a> = fn(&mut Compiler<'a>, &'a Token) -> CompileResult<()>;

/// How a token kind starts and continues an expression.
#[derive(Clone, Copy)]
pub struct ParseRule<'a> {
    pub prefix: Option<ParseFn<'a>>,
    pub infix: Option<ParseFn<'a>>,
    /// `Precedence::None` means the kind is not an infix operator.
    pub precedence: Precedence,
}

impl<'a> ParseRule<'a> {
    fn new(
        prefix: Option<ParseFn<'a>>,
        infix: Option<ParseFn<'a>>,
        precedence: Precedence,
    ) -> Self {
        Self {
            prefix,
            infix,
            precedence,
        }
    }
}

pub fn get_rule<'a>(kind: TokenKind) -> ParseRule<'a> {
    match kind {
        TokenKind::Number => ParseRule::new(Some(Compiler::number), None, Precedence::None),
        TokenKind::LeftParen => ParseRule::new(Some(Compiler::group), None, Precedence::None),
        TokenKind::Minus => ParseRule::new(
            Some(Compiler::unary),
            Some(Compiler::binary),
            Precedence::Term,
        ),
        TokenKind::Plus => ParseRule::new(None, Some(Compiler::binary), Precedence::Term),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
            ParseRule::new(None, Some(Compiler::binary), Precedence::Factor)
        }
        TokenKind::StarStar => {
            ParseRule::new(None, Some(Compiler::binary), Precedence::Exponentiation)
        }
        TokenKind::RightParen | TokenKind::Whitespace | TokenKind::AnythingElse => {
            ParseRule::new(None, None, Precedence::None)
        }
    }
}

/// Whether the right operand of `kind` recurses at the same binding power.
pub fn is_right_associative(kind: TokenKind) -> bool {
    kind == TokenKind::StarStar
}
