use crate::{Token, TokenKind};
use std::fmt;

/// What the parser was looking for when it hit the offending token.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expected {
    /// A token of `kind`, optionally with an exact lexeme.
    Token {
        kind: TokenKind,
        lexeme: Option<&'static str>,
    },
    /// The start of a declaration, assignment or `if`.
    Statement,
    /// An integer, identifier or parenthesized expression.
    Factor,
    /// Parentheses or `if` bodies nested no deeper than `limit`.
    Nesting { limit: usize },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token { lexeme: Some(lexeme), .. } => write!(f, "'{}'", lexeme),
            Expected::Token { kind, lexeme: None } => write!(f, "{}", kind),
            Expected::Statement => f.write_str("statement"),
            Expected::Factor => f.write_str("expression"),
            Expected::Nesting { limit } => write!(f, "at most {} levels of nesting", limit),
        }
    }
}

/// Raised on the first grammar violation. Carries the token where parsing stopped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SyntaxError {
    pub token: Token,
    pub expected: Expected,
}

impl SyntaxError {
    pub fn new(token: Token, expected: Expected) -> Self {
        SyntaxError { token, expected }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syntax error at {}:{}: expected {}, found {} {:?}",
            self.token.line, self.token.column, self.expected, self.token.kind, self.token.lexeme
        )
    }
}

impl std::error::Error for SyntaxError {}
