mod error;

pub use error::{Expected, SyntaxError};

use std::fmt;

/// Classification of a lexeme. Closed set; `Eof` only ever appears once,
/// as the last token of a stream.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Operator,
    Sign,
    Unknown,
    Eof,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Sign => "SIGN",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, positioned piece of source text.
///
/// `line` and `column` are 1-based and point at the first character of the lexeme.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// End-of-input marker (empty lexeme).
    pub fn eof(line: usize, column: usize) -> Self {
        Token::new(TokenKind::Eof, "", line, column)
    }

    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

/// Type keywords accepted at the start of a declaration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeName {
    Int,
    Float,
    Double,
}

impl TypeName {
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "int" => Some(TypeName::Int),
            "float" => Some(TypeName::Float),
            "double" => Some(TypeName::Double),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Double => "double",
        }
    }
}

/// Operators the grammar can fold into a binary node.
///
/// `Less`, `Greater` and `EqualEqual` sit on the same tier as `Add`/`Sub`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Less,
    Greater,
    EqualEqual,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operators of the `expression` tier.
    pub fn additive(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "<" => Some(BinaryOp::Less),
            ">" => Some(BinaryOp::Greater),
            "==" => Some(BinaryOp::EqualEqual),
            _ => None,
        }
    }

    /// Operators of the `term` tier.
    pub fn multiplicative(lexeme: &str) -> Option<Self> {
        match lexeme {
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::EqualEqual => "==",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Declaration {
        type_name: TypeName,
        identifier: String,
        initializer: Option<Expr>,
    },
    Assignment {
        identifier: String,
        value: Expr,
    },
    If {
        condition: Expr,
        body: Box<Stmt>, // exactly one statement, never a block
    },
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    /// Integer literal, kept as its source text.
    Number(String),
    Identifier(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

// Long operator chains build left-deep trees; unwind them with an explicit
// stack instead of recursing once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr, &mut pending);
        }
    }
}

fn take_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Binary { left, right, .. } = expr {
        pending.push(std::mem::replace(left.as_mut(), Expr::Number(String::new())));
        pending.push(std::mem::replace(right.as_mut(), Expr::Number(String::new())));
    }
}
