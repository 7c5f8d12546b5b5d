// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token cursor and top-level program loop
// - statements.rs: Declarations, assignments and if statements
// - expressions.rs: Two-tier precedence climbing down to factors

mod parser;
mod expressions;
mod statements;

use model::{Program, SyntaxError, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer, normally ending in `EOF`
///
/// # Returns
/// * `Ok(Program)` - The parsed statements, in source order
/// * `Err(SyntaxError)` - The first token that does not fit the grammar
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
