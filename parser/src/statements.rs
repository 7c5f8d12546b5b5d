use model::{Expected, Stmt, SyntaxError, Token, TokenKind, TypeName};
use crate::parser::Parser;
use crate::expressions::ExpressionParser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError>;
}

fn is_type_keyword(t: &Token) -> bool {
    t.kind == TokenKind::Keyword && TypeName::from_keyword(&t.lexeme).is_some()
}

impl<'a> Parser<'a> {
    /// declaration = ("int"|"float"|"double") IDENTIFIER [ "=" expression ] ";"
    fn parse_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        let type_tok = self.expect(TokenKind::Keyword, None)?;
        let type_name = TypeName::from_keyword(&type_tok.lexeme)
            .ok_or_else(|| SyntaxError::new(type_tok.clone(), Expected::Statement))?;
        let identifier = self.expect(TokenKind::Identifier, None)?.lexeme.clone();

        let initializer = if self.match_token(|t| t.is(TokenKind::Operator, "=")).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };

        self.expect_sign(";")?;
        Ok(Stmt::Declaration {
            type_name,
            identifier,
            initializer,
        })
    }

    /// assignment = IDENTIFIER "=" expression ";"
    fn parse_assignment(&mut self) -> Result<Stmt, SyntaxError> {
        let identifier = self.expect(TokenKind::Identifier, None)?.lexeme.clone();
        self.expect(TokenKind::Operator, Some("="))?;
        let value = self.parse_expr()?;
        self.expect_sign(";")?;
        Ok(Stmt::Assignment { identifier, value })
    }

    /// if_statement = "if" "(" expression ")" statement
    fn parse_if_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.nested(|p| {
            p.expect(TokenKind::Keyword, Some("if"))?;
            p.expect_sign("(")?;
            let condition = p.parse_expr()?;
            p.expect_sign(")")?;
            let body = Box::new(p.parse_stmt()?);
            Ok(Stmt::If { condition, body })
        })
    }
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        // Dispatch on the current token only; no backtracking
        if self.check(is_type_keyword) {
            return self.parse_declaration();
        }

        if self.check(|t| t.is(TokenKind::Keyword, "if")) {
            return self.parse_if_stmt();
        }

        if self.check(|t| t.kind == TokenKind::Identifier) {
            return self.parse_assignment();
        }

        Err(self.error(Expected::Statement))
    }
}
