use model::{BinaryOp, Expected, Expr, SyntaxError, TokenKind};
use crate::parser::Parser;

/// Expression parsing functionality using precedence climbing
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, SyntaxError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    /// expression = term ( ("+"|"-"|"<"|">"|"==") term )*
    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_term()?;

        while let Some(op) = self.match_operator(BinaryOp::additive) {
            let right = self.parse_term()?;
            expr = Expr::binary(op, expr, right);
        }

        Ok(expr)
    }
}

impl<'a> Parser<'a> {
    // Multiplicative (* /)
    fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_factor()?;

        while let Some(op) = self.match_operator(BinaryOp::multiplicative) {
            let right = self.parse_factor()?;
            expr = Expr::binary(op, expr, right);
        }

        Ok(expr)
    }

    /// factor = INTEGER | IDENTIFIER | "(" expression ")"
    fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(tok) = self.match_token(|t| t.kind == TokenKind::Integer) {
            return Ok(Expr::number(tok.lexeme.as_str()));
        }

        if let Some(tok) = self.match_token(|t| t.kind == TokenKind::Identifier) {
            return Ok(Expr::identifier(tok.lexeme.as_str()));
        }

        if self.check(|t| t.is(TokenKind::Sign, "(")) {
            return self.nested(|p| {
                p.advance();
                let expr = p.parse_expr()?;
                p.expect_sign(")")?;
                Ok(expr)
            });
        }

        Err(self.error(Expected::Factor))
    }

    /// Consumes the current operator if `classify` places it on this tier.
    fn match_operator(&mut self, classify: fn(&str) -> Option<BinaryOp>) -> Option<BinaryOp> {
        let op = self
            .peek()
            .filter(|t| t.kind == TokenKind::Operator)
            .and_then(|t| classify(&t.lexeme))?;
        self.advance();
        Some(op)
    }
}
