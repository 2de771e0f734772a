#[cfg(test)]
mod tests {
    use crate::core::lexer::{Lexer, TokenSource, TokenStream};
    use crate::core::token::{Token, TokenKind};
    use TokenKind::*;

    fn tk(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal)
    }

    #[test]
    fn test_next_token() {
        let input = r#"
    let five = 5;

    let ten = 10;

    let add = fn(x, y) {
        x + y;
    };

    let result = add(five, ten);
    !-/*5;
    5 < 10 > 5;

    if (5 < 10) {
        return true;
    } else {
        return false;
    }

    10 == 10
    10 != 9
"#;
        let tests = [
            tk(Let, "let"),
            tk(Ident, "five"),
            tk(Assign, "="),
            tk(Int, "5"),
            tk(Semicolon, ";"),
            tk(Let, "let"),
            tk(Ident, "ten"),
            tk(Assign, "="),
            tk(Int, "10"),
            tk(Semicolon, ";"),
            tk(Let, "let"),
            tk(Ident, "add"),
            tk(Assign, "="),
            tk(Function, "fn"),
            tk(Lparen, "("),
            tk(Ident, "x"),
            tk(Comma, ","),
            tk(Ident, "y"),
            tk(Rparen, ")"),
            tk(Lbrace, "{"),
            tk(Ident, "x"),
            tk(Plus, "+"),
            tk(Ident, "y"),
            tk(Semicolon, ";"),
            tk(Rbrace, "}"),
            tk(Semicolon, ";"),
            tk(Let, "let"),
            tk(Ident, "result"),
            tk(Assign, "="),
            tk(Ident, "add"),
            tk(Lparen, "("),
            tk(Ident, "five"),
            tk(Comma, ","),
            tk(Ident, "ten"),
            tk(Rparen, ")"),
            tk(Semicolon, ";"),
            tk(Bang, "!"),
            tk(Minus, "-"),
            tk(Slash, "/"),
            tk(Asterisk, "*"),
            tk(Int, "5"),
            tk(Semicolon, ";"),
            tk(Int, "5"),
            tk(Lt, "<"),
            tk(Int, "10"),
            tk(Gt, ">"),
            tk(Int, "5"),
            tk(Semicolon, ";"),
            tk(If, "if"),
            tk(Lparen, "("),
            tk(Int, "5"),
            tk(Lt, "<"),
            tk(Int, "10"),
            tk(Rparen, ")"),
            tk(Lbrace, "{"),
            tk(Return, "return"),
            tk(True, "true"),
            tk(Semicolon, ";"),
            tk(Rbrace, "}"),
            tk(Else, "else"),
            tk(Lbrace, "{"),
            tk(Return, "return"),
            tk(False, "false"),
            tk(Semicolon, ";"),
            tk(Rbrace, "}"),
            tk(Int, "10"),
            tk(Eq, "=="),
            tk(Int, "10"),
            tk(Int, "10"),
            tk(NotEq, "!="),
            tk(Int, "9"),
            tk(Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, expected_token) in tests.iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(&token, expected_token, "tests[{}] - token", i);
        }
    }

    #[test]
    fn test_single_symbols() {
        let tests = [
            (",", Comma),
            (";", Semicolon),
            ("(", Lparen),
            (")", Rparen),
            ("{", Lbrace),
            ("}", Rbrace),
            ("=", Assign),
            ("+", Plus),
            ("-", Minus),
            ("!", Bang),
            ("*", Asterisk),
            ("/", Slash),
            ("<", Lt),
            (">", Gt),
            ("==", Eq),
            ("!=", NotEq),
        ];
        for (input, kind) in tests.iter() {
            let mut lexer = Lexer::new(input);
            assert_eq!(lexer.next_token(), tk(*kind, input), "input {:?}", input);
            assert_eq!(lexer.next_token(), Token::eof(), "input {:?}", input);
        }
    }

    #[test]
    fn test_two_char_operator_needs_adjacent_equals() {
        let kinds: Vec<TokenKind> = Lexer::new("= = ! = =!").map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Assign, Assign, Bang, Assign, Assign, Bang]);
    }

    #[test]
    fn test_keywords() {
        let tests = [
            ("fn", Function),
            ("let", Let),
            ("true", True),
            ("false", False),
            ("if", If),
            ("else", Else),
            ("return", Return),
        ];
        for (input, kind) in tests.iter() {
            assert_eq!(Lexer::new(input).next_token(), tk(*kind, input));
        }
    }

    #[test]
    fn test_identifiers() {
        for input in ["foo", "_", "snake_case", "CamelCase", "lets", "fnord", "Let", "iff"] {
            assert_eq!(Lexer::new(input).next_token(), tk(Ident, input));
        }
    }

    #[test]
    fn test_identifier_stops_at_digit() {
        let tokens: Vec<Token> = Lexer::new("foo1").collect();
        assert_eq!(tokens, vec![tk(Ident, "foo"), tk(Int, "1")]);
    }

    #[test]
    fn test_integer_literal_kept_verbatim() {
        for input in ["0", "5", "007", "4930", "99999999999999999999999"] {
            let mut lexer = Lexer::new(input);
            assert_eq!(lexer.next_token(), tk(Int, input));
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_illegal_characters() {
        let tokens: Vec<Token> = Lexer::new("@ # é \u{0} $").collect();
        assert_eq!(
            tokens,
            vec![
                tk(Illegal, "@"),
                tk(Illegal, "#"),
                tk(Illegal, "é"),
                tk(Illegal, "\u{0}"),
                tk(Illegal, "$"),
            ]
        );
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), tk(Ident, "x"));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
        }

        let mut empty = Lexer::new(" \t\r\n ");
        assert_eq!(empty.next_token(), Token::eof());
        assert_eq!(empty.next_token(), Token::eof());
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let mut lexer = Lexer::new("let x");
        assert_eq!(lexer.next(), Some(tk(Let, "let")));
        assert_eq!(lexer.next(), Some(tk(Ident, "x")));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_token_stream_pads_with_eof() {
        let mut source = TokenStream::new(vec![tk(Int, "1")]);
        assert_eq!(source.next_token(), tk(Int, "1"));
        assert_eq!(source.next_token(), Token::eof());
        assert_eq!(source.next_token(), Token::eof());
    }
}
