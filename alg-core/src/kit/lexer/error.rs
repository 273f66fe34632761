//! Lexer 错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型和位置。

use super::position::SourcePosition;

/// 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// 非法字符
    InvalidChar(char),
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的位置
    pub position: SourcePosition,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::InvalidChar(ch) => write!(f, "unexpected token '{ch}'"),
        }
    }
}

impl std::error::Error for LexerError {}
