//! Token definitions for the expression lexer.

/// All token kinds the recognizer distinguishes.
///
/// `Whitespace` and `AnythingElse` never reach the compiler: whitespace is
/// dropped by the scanner and anything else is a lex error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,

    // Operators
    StarStar,
    Star,
    Slash,
    Percent,
    Plus,
    Minus,

    // Delimiters
    LeftParen,
    RightParen,

    // Filtered before parsing
    Whitespace,
    AnythingElse,
}

impl TokenKind {
    /// Recognizer alternatives in priority order.
    ///
    /// `**` is listed before `*` so an exponentiation is never split into two
    /// multiplications.
    pub const ALTERNATIVES: [TokenKind; 11] = [
        TokenKind::Number,
        TokenKind::StarStar,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Whitespace,
        TokenKind::AnythingElse,
    ];

    /// Capture group name used in the combined recognizer.
    pub fn group_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::StarStar => "star_star",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Percent => "percent",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::Whitespace => "whitespace",
            TokenKind::AnythingElse => "anything_else",
        }
    }

    /// Pattern recognizing this kind.
    pub fn pattern(self) -> &'static str {
        match self {
            TokenKind::Number => r"[0-9]+(?:\.[0-9]+)?",
            TokenKind::StarStar => r"\*\*",
            TokenKind::Star => r"\*",
            TokenKind::Slash => r"/",
            TokenKind::Percent => r"%",
            TokenKind::Plus => r"\+",
            TokenKind::Minus => r"-",
            TokenKind::LeftParen => r"\(",
            TokenKind::RightParen => r"\)",
            TokenKind::Whitespace => r"\s+",
            TokenKind::AnythingElse => r"\S+",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::StarStar => write!(f, "**"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Percent => write!(f, "%"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::AnythingElse => write!(f, "symbol"),
        }
    }
}

/// A token with its kind, exact source text and 1-based line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
