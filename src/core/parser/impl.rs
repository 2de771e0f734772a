use crate::config::{ParserConfig, SemicolonPolicy};
use crate::core::{
    ast::{
        Expression, ExpressionStatement, Identifier, IntegerLiteral, LetStatement, PrefixExpression,
        PrefixOperator, Program, ReturnStatement, Statement,
    },
    lexer::TokenSource,
    parser::{
        ErrorKind, ParseResult, Parsed, Parser, ParserError, PrefixParseFn, StatementKind,
        MAX_PREFIX_DEPTH,
    },
    token::{Token, TokenKind},
};

impl<S: TokenSource> Parser<S> {
    // 从Token源构建Parser
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParserConfig::default())
    }
    pub fn with_config(source: S, config: ParserConfig) -> Self {
        let mut parser = Parser {
            source,
            token: Token::eof(),
            peek_token: Token::eof(),
            config,
            errors: vec![],
        };
        parser.next_token();
        parser.next_token();
        parser
    }
    /// 解析程序
    ///
    /// 出错的语句被丢弃，错误被记录，然后从下一个Token继续
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];
        while self.has_next() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => self.errors.push(err),
            }
            self.next_token();
        }
        Program { statements }
    }
    /// 解析剩余全部Token，返回语法树与错误
    pub fn parse(mut self) -> Parsed {
        let program = self.parse_program();
        Parsed {
            program,
            errors: self.errors,
        }
    }
    /// 读取下一个Token
    pub fn next_token(&mut self) {
        let next = self.source.next_token();
        self.token = std::mem::replace(&mut self.peek_token, next);
    }
    /// 解析语句
    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let statement = StatementKind::of(&self.token);
        let result = match statement {
            StatementKind::Let => self.parse_let_statement(),
            StatementKind::Return => self.parse_return_statement(),
            StatementKind::Expression => self.parse_expression_statement(),
        };
        result.map_err(|kind| ParserError { statement, kind })
    }
    /// 解析let语句
    ///
    /// let identifier = expression;
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        // cur_token is let
        let token = self.token.clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = self.parse_identifier_node()?;
        self.expect_peek(TokenKind::Assign)?;
        self.next_token(); //eat =
        let value = self.parse_expression()?;
        self.end_statement(self.config.let_semicolon)?;
        Ok(Statement::Let(LetStatement { token, name, value }))
    }
    /// 解析return语句
    ///
    /// return expr;
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let token = self.token.clone();
        self.next_token(); //eat return
        let value = self.parse_expression()?;
        self.end_statement(self.config.return_semicolon)?;
        Ok(Statement::Return(ReturnStatement { token, value }))
    }
    /// 解析表达式语句
    ///
    /// expr;
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let token = self.token.clone();
        let expression = self.parse_expression()?;
        self.end_statement(self.config.expression_semicolon)?;
        Ok(Statement::Expression(ExpressionStatement { token, expression }))
    }
    /// 语句结尾的分号
    fn end_statement(&mut self, policy: SemicolonPolicy) -> ParseResult<()> {
        match policy {
            SemicolonPolicy::Required => self.expect_peek(TokenKind::Semicolon),
            SemicolonPolicy::Optional => {
                if self.peek_token.is(TokenKind::Semicolon) {
                    self.next_token(); //eat ;
                }
                Ok(())
            }
        }
    }
    /// 解析表达式
    fn parse_expression(&mut self) -> ParseResult {
        let prefix = self
            .prefix_parse_fn()
            .ok_or_else(|| ErrorKind::ExpectedExpression(self.token.clone()))?;
        prefix(self)
    }
    /// 前缀表达式函数
    fn prefix_parse_fn(&self) -> Option<PrefixParseFn<S>> {
        match self.token.kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            _ => None,
        }
    }
    /// 解析前缀表达式
    ///
    /// 先收集连续的运算符，再解析操作数，最后由内向外组装，不随嵌套层数递归
    fn parse_prefix_expression(&mut self) -> ParseResult {
        let mut operators = vec![];
        while let Some(operator) = prefix_operator(self.token.kind) {
            operators.push((self.token.clone(), operator));
            self.next_token(); //eat op
        }
        if operators.len() > MAX_PREFIX_DEPTH {
            // 整个表达式只报一次错
            let _ = self.parse_expression();
            return Err(ErrorKind::TooDeep(operators.len()));
        }
        let mut expression = self.parse_expression()?;
        for (token, operator) in operators.into_iter().rev() {
            expression = Expression::Prefix(PrefixExpression {
                token,
                operator,
                operand: Box::new(expression),
            });
        }
        Ok(expression)
    }
    /// 解析标识符
    fn parse_identifier(&mut self) -> ParseResult {
        self.parse_identifier_node().map(Expression::Identifier)
    }
    fn parse_identifier_node(&mut self) -> ParseResult<Identifier> {
        if self.token.is(TokenKind::Ident) {
            Ok(Identifier {
                token: self.token.clone(),
                value: self.token.literal.clone(),
            })
        } else {
            Err(ErrorKind::Expected(TokenKind::Ident, self.token.clone()))
        }
    }
    /// 解析整型字面量，溢出即报错
    fn parse_integer_literal(&mut self) -> ParseResult {
        if !self.token.is(TokenKind::Int) {
            return Err(ErrorKind::Expected(TokenKind::Int, self.token.clone()));
        }
        match self.token.literal.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerLiteral {
                token: self.token.clone(),
                value,
            })),
            Err(_) => Err(ErrorKind::ParseInt(self.token.literal.clone())),
        }
    }
    /// 断言下一个Token为期待值，是则前进
    fn expect_peek(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.peek_token.is(expected) {
            self.next_token();
            Ok(())
        } else {
            Err(ErrorKind::Expected(expected, self.peek_token.clone()))
        }
    }
    /// 判断是否还有Token
    fn has_next(&self) -> bool {
        !self.token.is(TokenKind::Eof)
    }
    /// 返回错误信息
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }
}

fn prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Not),
        TokenKind::Minus => Some(PrefixOperator::Neg),
        _ => None,
    }
}
