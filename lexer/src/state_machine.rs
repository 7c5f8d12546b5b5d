use model::{Token, TokenKind};
use crate::keywords::is_keyword;

const OPERATOR_CHARS: [char; 9] = ['+', '-', '*', '/', '%', '=', '<', '>', '!'];
const DOUBLE_OPERATORS: [&str; 4] = ["==", "!=", "<=", ">="];
const SIGN_CHARS: [char; 5] = [';', '(', ')', '{', '}'];

/// Digits are Unicode numerics, so `1٣` stays a single integer run.
fn is_digit(c: char) -> bool {
    c.is_numeric()
}

pub struct StateMachineLexer<'a> {
    input: &'a str,
    pos: usize,
    token_start: usize,
    line: usize,
    column: usize,
}

impl<'a> StateMachineLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole input. Always ends with exactly one EOF token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.lex_next_token() {
            tokens.push(token);
        }

        tokens.push(Token::eof(self.line, self.column));
        tokens
    }

    fn lex_next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = self.current_char()?;
        self.token_start = self.pos;
        let (line, column) = (self.line, self.column);

        let kind = match ch {
            c if c.is_alphabetic() || c == '_' => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c if OPERATOR_CHARS.contains(&c) => self.lex_operator(),
            c if SIGN_CHARS.contains(&c) => {
                self.bump();
                TokenKind::Sign
            }
            _ => {
                // Unrecognized characters resync one character at a time
                self.bump();
                TokenKind::Unknown
            }
        };

        Some(Token::new(kind, self.current_slice(), line, column))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn current_slice(&self) -> &'a str {
        &self.input[self.token_start..self.pos]
    }

    /// Consumes one character, keeping line/column in step.
    fn bump(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn bump_while(&mut self, accept: impl Fn(char) -> bool) {
        while self.current_char().is_some_and(&accept) {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        self.bump_while(char::is_whitespace);
    }

    fn lex_identifier(&mut self) -> TokenKind {
        self.bump_while(|c| c.is_alphanumeric() || c == '_');

        if is_keyword(self.current_slice()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    fn lex_number(&mut self) -> TokenKind {
        // No fraction handling: a trailing '.' is left for the next token
        self.bump_while(is_digit);
        TokenKind::Integer
    }

    fn lex_operator(&mut self) -> TokenKind {
        let first = self.bump();
        if let (Some(first), Some(next)) = (first, self.current_char()) {
            let mut pair = String::with_capacity(2);
            pair.push(first);
            pair.push(next);
            if DOUBLE_OPERATORS.contains(&pair.as_str()) {
                self.bump();
            }
        }
        TokenKind::Operator
    }
}
