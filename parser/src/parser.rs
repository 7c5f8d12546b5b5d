use model::{Expected, Program, SyntaxError, Token, TokenKind};
use crate::statements::StatementParser;

/// Deepest parenthesis or `if` nesting accepted before giving up.
pub(crate) const MAX_NESTING: usize = 256;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0, depth: 0 }
    }

    /// program = statement* EOF
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }

        Ok(Program { statements })
    }

    /// True on the EOF marker, or past the last token if the caller left it off.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_none_or(|t| t.kind == TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the current token and moves past it. Never moves past EOF.
    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn check<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Token) -> bool,
    {
        self.peek().is_some_and(predicate)
    }

    pub(crate) fn match_token<F>(&mut self, predicate: F) -> Option<&'a Token>
    where
        F: Fn(&Token) -> bool,
    {
        if self.check(predicate) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes a token of `kind` (and `lexeme`, if given) or fails on the current token.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        lexeme: Option<&'static str>,
    ) -> Result<&'a Token, SyntaxError> {
        let matches = |t: &Token| t.kind == kind && lexeme.is_none_or(|l| t.lexeme == l);
        self.match_token(matches)
            .ok_or_else(|| self.error(Expected::Token { kind, lexeme }))
    }

    pub(crate) fn expect_sign(&mut self, sign: &'static str) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Sign, Some(sign))
    }

    /// Runs `rule` one nesting level deeper, failing on the current token past `MAX_NESTING`.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(Expected::Nesting { limit: MAX_NESTING }));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Syntax error on the current token.
    pub(crate) fn error(&self, expected: Expected) -> SyntaxError {
        SyntaxError::new(self.current_or_eof(), expected)
    }

    fn current_or_eof(&self) -> Token {
        match self.peek() {
            Some(tok) => tok.clone(),
            None => match self.tokens.last() {
                Some(last) => Token::eof(last.line, last.column),
                None => Token::eof(1, 1),
            },
        }
    }
}
