//! Display of tokens and ASTs as nested tagged tuples.
//!
//! Tokens render as `('KIND', 'lexeme', line, column)`, statements and
//! expressions as `('TAG', field, ...)` with `None` for an absent initializer.

use model::{Expr, Program, Stmt, Token};

/// Quotes a string the way a tuple field is shown: single quotes unless the
/// text itself contains one, with backslashes and control characters escaped.
fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

pub fn format_token(token: &Token) -> String {
    format!(
        "({}, {}, {}, {})",
        quote(token.kind.as_str()),
        quote(&token.lexeme),
        token.line,
        token.column
    )
}

pub fn format_program(program: &Program) -> String {
    let statements: Vec<String> = program.statements.iter().map(format_stmt).collect();
    format!("('PROGRAM', [{}])", statements.join(", "))
}

pub fn format_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Declaration { type_name, identifier, initializer } => {
            let init = initializer.as_ref().map_or_else(|| "None".to_string(), format_expr);
            format!(
                "('DECLARATION', {}, {}, {})",
                quote(type_name.as_str()),
                quote(identifier),
                init
            )
        }
        Stmt::Assignment { identifier, value } => {
            format!("('ASSIGNMENT', {}, {})", quote(identifier), format_expr(value))
        }
        Stmt::If { condition, body } => {
            format!("('IF', {}, {})", format_expr(condition), format_stmt(body))
        }
    }
}

pub fn format_expr(expr: &Expr) -> String {
    match expr {
        Expr::Number(text) => format!("('NUMBER', {})", quote(text)),
        Expr::Identifier(name) => format!("('IDENTIFIER', {})", quote(name)),
        Expr::Binary { op, left, right } => format!(
            "('BIN_OP', {}, {}, {})",
            quote(op.as_str()),
            format_expr(left),
            format_expr(right)
        ),
    }
}
