use crate::core::token::Token;

mod r#impl;
mod test;

pub const EOF: char = '\u{0}';

/// 词法分析器，逐个产出Token
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    /// 当前字符位置
    position: usize,
    ch: char,
    /// 已经产出过Eof，迭代器不再返回
    finished: bool,
}

/// Token源，Parser从中逐个读取Token
///
/// 输入耗尽后必须一直返回[`TokenKind::Eof`](crate::core::token::TokenKind::Eof)
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// 把现成的Token序列适配为[`TokenSource`]，序列结束后补Eof
#[derive(Debug)]
pub struct TokenStream<I> {
    tokens: I,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}

fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
