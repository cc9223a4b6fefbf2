//! Scanner for expression source text.
//!
//! All token patterns are joined into one alternation, tried in the fixed
//! priority order of [`TokenKind::ALTERNATIVES`]. Every input position is
//! covered by some alternative because the last two are `\s+` and `\S+`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::LexError;
use crate::lexer::token::{Token, TokenKind};

lazy_static! {
    static ref RECOGNIZER: Regex = {
        let pattern = TokenKind::ALTERNATIVES
            .iter()
            .map(|kind| format!("(?P<{}>{})", kind.group_name(), kind.pattern()))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&pattern).expect("token patterns form a valid regex")
    };
}

/// Tokenize a whole source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan_tokens()
}

/// The lexer transforms source text into a stream of tokens.
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset up to which newlines have been counted.
    line_offset: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_offset: 0,
            line: 1,
        }
    }

    /// Scan all tokens from the source, dropping whitespace.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let source = self.source;
        let mut tokens = Vec::new();

        for caps in RECOGNIZER.captures_iter(source) {
            let (kind, lexeme, start) = self.classify(&caps)?;

            match kind {
                TokenKind::Whitespace => continue,
                TokenKind::AnythingElse => {
                    let line = self.line_at(start);
                    return Err(LexError::unexpected_symbol(lexeme, line));
                }
                _ => {
                    let line = self.line_at(start);
                    tokens.push(Token::new(kind, lexeme, line));
                }
            }
        }

        Ok(tokens)
    }

    /// Find the single alternative that produced this match.
    fn classify<'c>(
        &mut self,
        caps: &Captures<'c>,
    ) -> Result<(TokenKind, &'c str, usize), LexError> {
        let mut matched = TokenKind::ALTERNATIVES
            .iter()
            .filter_map(|kind| caps.name(kind.group_name()).map(|m| (*kind, m)));

        let whole_start = caps.get(0).map_or(0, |m| m.start());
        let Some((kind, m)) = matched.next() else {
            return Err(LexError::NoMatch {
                offset: whole_start,
            });
        };
        if matched.next().is_some() {
            let line = self.line_at(m.start());
            return Err(LexError::AmbiguousMatch { line });
        }

        Ok((kind, m.as_str(), m.start()))
    }

    /// 1-based line at `offset`. Offsets must be non-decreasing across calls.
    fn line_at(&mut self, offset: usize) -> usize {
        let end = offset.min(self.source.len());
        if end > self.line_offset {
            self.line += self.source.as_bytes()[self.line_offset..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.line_offset = end;
        }
        self.line
    }
}
