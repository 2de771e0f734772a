use crate::config::ParserConfig;

pub mod config;
pub mod core;
pub mod repl;

pub use crate::core::ast;
pub use crate::core::lexer::{Lexer, TokenSource, TokenStream};
pub use crate::core::parser::{
    ErrorKind, Parsed, Parser, ParserError, StatementKind, MAX_PREFIX_DEPTH,
};
pub use crate::core::token::{Token, TokenKind};

/// 以默认分号策略解析`input`
pub fn parse(input: &str) -> Parsed {
    parse_with_config(input, ParserConfig::default())
}

pub fn parse_with_config(input: &str, config: ParserConfig) -> Parsed {
    Parser::with_config(Lexer::new(input), config).parse()
}
