use crate::core::lexer::{is_digit, is_letter, Lexer, EOF};
use crate::core::token::{Token, TokenKind};

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            ch: EOF,
            finished: false,
        };
        lexer.ch = lexer.char_at(0);
        lexer
    }
    /// 读取Token，输入结束后一直返回Eof
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        if self.at_end() {
            return Token::eof();
        }
        let token = match self.ch {
            '(' => self.single(TokenKind::Lparen),
            ')' => self.single(TokenKind::Rparen),
            '{' => self.single(TokenKind::Lbrace),
            '}' => self.single(TokenKind::Rbrace),

            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),

            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            '!' => self.peek_is_eat_or('=', TokenKind::NotEq, TokenKind::Bang),
            '=' => self.peek_is_eat_or('=', TokenKind::Eq, TokenKind::Assign),
            c => {
                return if is_letter(c) {
                    //标识符或关键字
                    let id = self.read_while(is_letter);
                    Token::lookup_id(&id)
                } else if is_digit(c) {
                    //数字，字面量原样保留
                    let num = self.read_while(is_digit);
                    Token::new(TokenKind::Int, num)
                } else {
                    //非法字符
                    let token = Token::new(TokenKind::Illegal, c.to_string());
                    self.read_char();
                    token
                };
            }
        };
        self.read_char();
        token
    }
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.ch.to_string())
    }
    //读取连续满足条件的字符
    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let position = self.position;
        while !self.at_end() && accept(self.ch) {
            self.read_char();
        }
        self.chars[position..self.position].iter().collect()
    }
    //忽略空格
    fn skip_whitespace(&mut self) {
        while self.ch == ' ' || self.ch == '\r' || self.ch == '\t' || self.ch == '\n' {
            self.read_char();
        }
    }
    //读取一个字符
    fn read_char(&mut self) {
        if !self.at_end() {
            self.position += 1;
        }
        self.ch = self.char_at(self.position);
    }
    //查看下一个字符
    fn peek_char(&self) -> char {
        self.char_at(self.position + 1)
    }
    fn char_at(&self, position: usize) -> char {
        self.chars.get(position).copied().unwrap_or(EOF)
    }
    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }
    //预检下个字符是否为期待字符，是则吃掉并返回组合Token，否则返回单字符Token
    fn peek_is_eat_or(&mut self, c: char, expect_kind: TokenKind, default_kind: TokenKind) -> Token {
        if self.peek_char() == c {
            let first = self.ch;
            self.read_char();
            Token::new(expect_kind, format!("{}{}", first, self.ch))
        } else {
            self.single(default_kind)
        }
    }
}

/// 依次产出Eof之前的所有Token，之后一直返回None
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer {}
