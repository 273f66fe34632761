//! 前端：词法分析与语句解析

pub mod lexer;
pub mod parser;

use crate::kit::lexer::LexerError;
use alg_config::LimitConfig;
use lexer::build_lexer_at_line;
use parser::{Parser, ParserError, Statement};

/// 前端错误：词法或语法
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("{0}")]
    Lexer(#[from] LexerError),
    #[error("{0}")]
    Parser(#[from] ParserError),
}

/// 解析一行源码，`line` 为 1-based 行号
pub fn parse_statement(
    source: &str,
    line: usize,
    limits: &LimitConfig,
) -> Result<Statement, CompileError> {
    let tokens = build_lexer_at_line(source, line).tokenize()?;
    let statement = Parser::new(source, tokens)
        .with_line(line)
        .with_max_depth(limits.max_expression_depth)
        .parse_statement()?;
    Ok(statement)
}

/// 逐行解析整段源码，跳过空行；遇到第一个错误即返回
pub fn parse_lines(source: &str, limits: &LimitConfig) -> Result<Vec<Statement>, CompileError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| parse_statement(text, index + 1, limits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::parser::{ParserErrorKind, StatementKind};

    #[test]
    fn test_parse_lines_skips_blank_lines() {
        let source = "a = 1\n\n   \nb = a + 1\nb\n";
        let statements = parse_lines(source, &LimitConfig::default()).unwrap();
        assert_eq!(statements.len(), 3);
        assert_eq!(statements[1].line, 4);
        assert_eq!(statements[2].kind, StatementKind::Query);
    }

    #[test]
    fn test_parse_lines_reports_line() {
        let source = "a = 1\nb = (a\n";
        let err = parse_lines(source, &LimitConfig::default()).unwrap_err();
        match err {
            CompileError::Parser(err) => {
                assert_eq!(err.kind, ParserErrorKind::MissingRightParen);
                assert_eq!(err.line(), Some(2));
            }
            other => panic!("expected parser error, got {other:?}"),
        }
    }

    #[test]
    fn test_lexer_error_surfaces() {
        let err = parse_statement("x = 2 # 3", 3, &LimitConfig::default()).unwrap_err();
        match err {
            CompileError::Lexer(err) => {
                assert_eq!(err.line(), 3);
                assert_eq!(err.column(), 7);
            }
            other => panic!("expected lexer error, got {other:?}"),
        }
    }

    #[test]
    fn test_depth_limit_from_config() {
        let limits = LimitConfig {
            max_expression_depth: 3,
        };
        let err = parse_statement("x = ((((1))))", 1, &limits).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parser(ParserError {
                kind: ParserErrorKind::NestingTooDeep { limit: 3 },
                ..
            })
        ));
    }
}
