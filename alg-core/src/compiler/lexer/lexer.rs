//! 计算器词法分析器
//!
//! 一次处理一行源码。数字只由 ASCII 数字和最多一个小数点组成，
//! 必须以数字开头（`.5` 是非法字符，`5.` 等于 5.0）。

use super::token_kind::{is_identifier_char, AlgTokenKind};
use crate::kit::lexer::{CharCursor, ErrorKind, LexerError, SourcePosition, SourceSpan, Token};
use tracing::{trace, warn};

pub struct Lexer<'a> {
    cursor: CharCursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: CharCursor::new(source),
        }
    }

    /// 从指定行开始计数，错误位置会带上真实行号
    pub fn with_line(source: &'a str, line: usize) -> Self {
        Self {
            cursor: CharCursor::starting_at(source, SourcePosition::at_line(line)),
        }
    }

    /// 获取下一个 Token，输入结束时返回 None
    pub fn next_token(&mut self) -> Option<Result<Token<AlgTokenKind>, LexerError>> {
        self.cursor.advance_while(char::is_whitespace);

        let start = self.cursor.position();
        let c = self.cursor.peek()?;

        let result = if c.is_ascii_digit() {
            Ok(self.scan_number(start))
        } else if is_identifier_char(c) {
            self.cursor.advance_while(is_identifier_char);
            Ok(self.token_from(AlgTokenKind::Identifier, start))
        } else if let Some(kind) = AlgTokenKind::from_symbol(c) {
            self.cursor.advance();
            Ok(self.token_from(kind, start))
        } else {
            self.cursor.advance();
            warn!(target: "alg::lexer", line = start.line, column = start.column, "invalid character {:?}", c);
            Err(LexerError::at(ErrorKind::InvalidChar(c), start))
        };

        if let Ok(token) = &result {
            trace!(
                target: "alg::lexer",
                "produced token: kind={:?}, text={:?}, line={}, column={}",
                token.kind,
                token.text,
                token.span.start.line,
                token.span.start.column
            );
        }
        Some(result)
    }

    /// 将剩余输入全部切分为 Token，遇到第一个错误即停止
    pub fn tokenize(mut self) -> Result<Vec<Token<AlgTokenKind>>, LexerError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token?);
        }
        Ok(tokens)
    }

    fn scan_number(&mut self, start: SourcePosition) -> Token<AlgTokenKind> {
        let mut seen_period = false;
        self.cursor.advance_while(|c| match c {
            '0'..='9' => true,
            '.' if !seen_period => {
                seen_period = true;
                true
            }
            _ => false,
        });
        self.token_from(AlgTokenKind::Number, start)
    }

    fn token_from(&self, kind: AlgTokenKind, start: SourcePosition) -> Token<AlgTokenKind> {
        let text = self.cursor.slice_from(start);
        Token::new(kind, SourceSpan::range(start, self.cursor.position()), text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token<AlgTokenKind>, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<(AlgTokenKind, String)> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = lex_all("x = 5 + 2");
        assert_eq!(
            tokens,
            vec![
                (AlgTokenKind::Identifier, "x".to_string()),
                (AlgTokenKind::Equal, "=".to_string()),
                (AlgTokenKind::Number, "5".to_string()),
                (AlgTokenKind::Plus, "+".to_string()),
                (AlgTokenKind::Number, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        let kinds: Vec<_> = lex_all("(a-b)*c/d^2").into_iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![
                AlgTokenKind::LeftParenthesis,
                AlgTokenKind::Identifier,
                AlgTokenKind::Minus,
                AlgTokenKind::Identifier,
                AlgTokenKind::RightParenthesis,
                AlgTokenKind::Asterisk,
                AlgTokenKind::Identifier,
                AlgTokenKind::Slash,
                AlgTokenKind::Identifier,
                AlgTokenKind::Caret,
                AlgTokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_number_with_single_period() {
        assert_eq!(lex_all("3.25")[0].1, "3.25");
        assert_eq!(lex_all("5.")[0].1, "5.");
    }

    #[test]
    fn test_second_period_is_invalid() {
        let mut lexer = Lexer::new("1.2.3");
        let first = lexer.next_token().unwrap().unwrap();
        assert_eq!(first.text, "1.2");
        let err = lexer.next_token().unwrap().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar('.'));
        assert_eq!(err.column(), 4);
    }

    #[test]
    fn test_digits_split_identifiers() {
        let tokens = lex_all("x1");
        assert_eq!(tokens[0], (AlgTokenKind::Identifier, "x".to_string()));
        assert_eq!(tokens[1], (AlgTokenKind::Number, "1".to_string()));
    }

    #[test]
    fn test_invalid_char_position() {
        let err = Lexer::with_line("y = 2 $ 3", 4).tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar('$'));
        assert_eq!(err.line(), 4);
        assert_eq!(err.column(), 7);
    }

    #[test]
    fn test_position_tracking() {
        let tokens = Lexer::with_line("ab + 1", 2).tokenize().unwrap();
        assert_eq!(tokens[0].start().line, 2);
        assert_eq!(tokens[1].start().column, 4);
        assert_eq!(tokens[2].end().byte_offset, 6);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(lex_all("").is_empty());
        assert!(lex_all(" \t ").is_empty());
    }
}
