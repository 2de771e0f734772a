use std::fmt;

/// 词法单元类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 非法字符
    Illegal,
    /// End Of File
    Eof,
    //标识符和字面量
    Ident,
    Int,
    //分隔符
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    Lparen,
    /// )
    Rparen,
    /// {
    Lbrace,
    /// }
    Rbrace,
    //操作符
    /// =
    Assign,
    /// +
    Plus,
    /// -
    Minus,
    /// !
    Bang,
    /// *
    Asterisk,
    /// /
    Slash,
    /// <
    Lt,
    /// >
    Gt,
    /// ==
    Eq,
    /// !=
    NotEq,
    //关键字
    /// fn
    Function,
    /// let
    Let,
    /// true
    True,
    /// false
    False,
    /// if
    If,
    /// else
    Else,
    /// return
    Return,
}

impl TokenKind {
    /// 关键字查询
    pub fn lookup_keyword(key: &str) -> Option<Self> {
        match key {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// 错误信息中使用的类别名称
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Lparen => "left parenthesis",
            TokenKind::Rparen => "right parenthesis",
            TokenKind::Lbrace => "left brace",
            TokenKind::Rbrace => "right brace",
            TokenKind::Assign => "assignment",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Bang => "bang",
            TokenKind::Asterisk => "asterisk",
            TokenKind::Slash => "slash",
            TokenKind::Lt => "less than",
            TokenKind::Gt => "greater than",
            TokenKind::Eq => "equality",
            TokenKind::NotEq => "inequality",
            TokenKind::Function => "keyword fn",
            TokenKind::Let => "keyword let",
            TokenKind::True => "keyword true",
            TokenKind::False => "keyword false",
            TokenKind::If => "keyword if",
            TokenKind::Else => "keyword else",
            TokenKind::Return => "keyword return",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Lparen => write!(f, "("),
            TokenKind::Rparen => write!(f, ")"),
            TokenKind::Lbrace => write!(f, "{{"),
            TokenKind::Rbrace => write!(f, "}}"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Bang => write!(f, "!"),
            TokenKind::Asterisk => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Eq => write!(f, "=="),
            TokenKind::NotEq => write!(f, "!="),
            TokenKind::Function => write!(f, "FUNCTION"),
            TokenKind::Let => write!(f, "LET"),
            TokenKind::True => write!(f, "TRUE"),
            TokenKind::False => write!(f, "FALSE"),
            TokenKind::If => write!(f, "IF"),
            TokenKind::Else => write!(f, "ELSE"),
            TokenKind::Return => write!(f, "RETURN"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    /// 关键字或标识符
    pub fn lookup_id(id: &str) -> Self {
        let kind = TokenKind::lookup_keyword(id).unwrap_or(TokenKind::Ident);
        Token::new(kind, id)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{}({})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.literal),
        }
    }
}
