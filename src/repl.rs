use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::core::lexer::Lexer;

const PROMPT: &str = ">> ";
const EXIT: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 打印该行的每个Token
    Tokens,
    /// 解析该行并打印程序
    Ast,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Tokens => write!(f, "token mode"),
            Mode::Ast => write!(f, "ast mode"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" | "token" => Ok(Mode::Tokens),
            "ast" => Ok(Mode::Ast),
            other => Err(format!("unknown mode `{}`, expected `tokens` or `ast`", other)),
        }
    }
}

/// 逐行读取`input`，直到输入结束或遇到`exit`，每行的结果写到`output`
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mode: Mode,
    config: &ParserConfig,
) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        let mut line = String::new();

        let i = input.read_line(&mut line)?;
        if i == 0 || line.trim_end() == EXIT {
            writeln!(output, "Bye!")?;
            return Ok(());
        }

        match mode {
            Mode::Tokens => echo_tokens(&line, &mut output)?,
            Mode::Ast => echo_program(&line, &mut output, config)?,
        }
    }
}

fn echo_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    for token in Lexer::new(line) {
        writeln!(output, "{:?}", token)?;
    }
    Ok(())
}

fn echo_program<W: Write>(line: &str, output: &mut W, config: &ParserConfig) -> io::Result<()> {
    let parsed = crate::parse_with_config(line, *config);
    if !parsed.is_ok() {
        writeln!(output, "parser errors:")?;
        for err in &parsed.errors {
            writeln!(output, "\t{}", err)?;
        }
    } else if !parsed.program.is_empty() {
        writeln!(output, "{}", parsed.program)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, mode: Mode) -> String {
        let mut output = vec![];
        start(Cursor::new(input), &mut output, mode, &ParserConfig::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_echo_tokens() {
        let out = run("let x = 5;\n", Mode::Tokens);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], r#">> Token { kind: Let, literal: "let" }"#);
        assert_eq!(lines[1], r#"Token { kind: Ident, literal: "x" }"#);
        assert_eq!(lines[2], r#"Token { kind: Assign, literal: "=" }"#);
        assert_eq!(lines[3], r#"Token { kind: Int, literal: "5" }"#);
        assert_eq!(lines[4], r#"Token { kind: Semicolon, literal: ";" }"#);
        assert_eq!(lines[5], ">> Bye!");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_each_line_gets_a_fresh_lexer() {
        let out = run("a\nb\n", Mode::Tokens);
        assert_eq!(out.matches(">> ").count(), 3);
        assert!(out.contains(r#"literal: "a""#));
        assert!(out.contains(r#"literal: "b""#));
    }

    #[test]
    fn test_exit_stops_reading() {
        let out = run("exit\r\nlet y = 1;\n", Mode::Tokens);
        assert_eq!(out, ">> Bye!\n");
    }

    #[test]
    fn test_echo_program() {
        let out = run("let x = -5;\nreturn !x;\n", Mode::Ast);
        assert_eq!(out, ">> let x = -5;\n>> return !x;\n>> Bye!\n");
    }

    #[test]
    fn test_echo_expression_statement() {
        let out = run("-x\n", Mode::Ast);
        assert_eq!(out, ">> -x;\n>> Bye!\n");
    }

    #[test]
    fn test_config_is_shared_across_lines() {
        let config = ParserConfig::lenient();
        let mut output = vec![];
        let input = Cursor::new("let x = 5\nreturn x\n");
        start(input, &mut output, Mode::Ast, &config).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert_eq!(out, ">> let x = 5;\n>> return x;\n>> Bye!\n");
    }

    #[test]
    fn test_echo_parser_errors() {
        let out = run("let foo 5;\n", Mode::Ast);
        assert!(out.starts_with(">> parser errors:\n\tlet statement: expected assignment"));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("tokens".parse::<Mode>(), Ok(Mode::Tokens));
        assert_eq!("ast".parse::<Mode>(), Ok(Mode::Ast));
        assert!("eval".parse::<Mode>().is_err());
    }
}
