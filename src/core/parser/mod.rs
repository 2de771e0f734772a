mod r#impl;

use std::fmt;

use crate::config::ParserConfig;
use crate::core::{
    ast::{Expression, Program},
    lexer::Lexer,
    token::{Token, TokenKind},
};

type ParseResult<T = Expression> = std::result::Result<T, ErrorKind>;
type PrefixParseFn<S> = fn(&mut Parser<S>) -> ParseResult;

/// 前缀运算符最大嵌套层数，超出即报错
pub const MAX_PREFIX_DEPTH: usize = 256;

/// 语法分析器，持有当前Token与预读Token
#[derive(Debug)]
pub struct Parser<S = Lexer> {
    source: S,
    token: Token,
    peek_token: Token,
    config: ParserConfig,
    errors: Vec<ParserError>,
}

/// 解析结果，程序可能不完整，附带所有错误
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<ParserError>,
}

impl Parsed {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Let,
    Return,
    Expression,
}

impl StatementKind {
    fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Let => StatementKind::Let,
            TokenKind::Return => StatementKind::Return,
            _ => StatementKind::Expression,
        }
    }
}

/// 解析错误类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// 期待的类别，实际的Token
    Expected(TokenKind, Token),
    /// 该Token不能开始一个表达式
    ExpectedExpression(Token),
    /// 整数字面量超出i64范围
    ParseInt(String),
    /// 连续前缀运算符的层数
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    pub statement: StatementKind,
    pub kind: ErrorKind,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatementKind::Let => write!(f, "let statement"),
            StatementKind::Return => write!(f, "return statement"),
            StatementKind::Expression => write!(f, "expression statement"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Expected(want, have) => write!(
                f,
                "expected {} `{}`, have {} `{}`",
                want.describe(),
                want,
                have.kind.describe(),
                have
            ),
            ErrorKind::ExpectedExpression(have) => write!(
                f,
                "expected expression, have {} `{}`",
                have.kind.describe(),
                have
            ),
            ErrorKind::ParseInt(literal) => {
                write!(f, "could not parse `{}` as a 64-bit integer", literal)
            }
            ErrorKind::TooDeep(depth) => write!(
                f,
                "{} nested prefix operators, at most {} allowed",
                depth, MAX_PREFIX_DEPTH
            ),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.statement, self.kind)
    }
}

impl std::error::Error for ParserError {}

impl From<&str> for Parser<Lexer> {
    /// 从字符串构建Parser
    fn from(input: &str) -> Self {
        Parser::new(Lexer::new(input))
    }
}
