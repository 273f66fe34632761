//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use std::path::PathBuf;
use thiserror::Error;

use alg_core::compiler::CompileError;

/// 词法错误（结构化）
pub use alg_core::kit::lexer::LexerError;

/// 语法错误（结构化）
pub use alg_core::compiler::parser::ParserError;

/// 运行时错误
pub use alg_core::RuntimeError;

/// alg 错误类型
#[derive(Error, Debug)]
pub enum AlgError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// 语法分析错误（结构化）
    #[error("{0}")]
    Parser(#[from] ParserError),

    /// 运行时错误，带所在行（命令行绑定没有行号）
    #[error("{source}")]
    Runtime {
        line: Option<usize>,
        source: RuntimeError,
    },

    /// 命令行 `name=value` 绑定格式错误
    #[error("invalid binding '{0}', expected NAME=VALUE")]
    Binding(String),

    /// 读取源文件失败
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 写出结果失败
    #[error("cannot write output: {0}")]
    Output(std::io::Error),

    /// 配置错误
    #[error("{0}")]
    Config(String),
}

impl From<CompileError> for AlgError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::Lexer(e) => AlgError::Lexer(e),
            CompileError::Parser(e) => AlgError::Parser(e),
        }
    }
}

impl AlgError {
    pub(crate) fn runtime(line: Option<usize>, source: RuntimeError) -> Self {
        AlgError::Runtime { line, source }
    }

    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            AlgError::Lexer(e) => Some(e.line()),
            AlgError::Parser(e) => e.line(),
            AlgError::Runtime { line, .. } => *line,
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            AlgError::Lexer(e) => Some(e.column()),
            AlgError::Parser(e) => e.column(),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            AlgError::Lexer(_) => "lexer",
            AlgError::Parser(_) => "parser",
            AlgError::Runtime { .. } => "runtime",
            AlgError::Binding(_) => "binding",
            AlgError::Io { .. } | AlgError::Output(_) => "io",
            AlgError::Config(_) => "config",
        }
    }

    fn error_kind(&self) -> String {
        match self {
            AlgError::Lexer(e) => format!("{:?}", e.kind),
            AlgError::Parser(e) => format!("{:?}", e.kind),
            AlgError::Runtime { source, .. } => match source {
                RuntimeError::UnknownVariable(_) => "UnknownVariable".to_string(),
                RuntimeError::AssignConstant(_) => "AssignConstant".to_string(),
            },
            AlgError::Binding(_) => "InvalidBinding".to_string(),
            AlgError::Io { .. } => "ReadFailed".to_string(),
            AlgError::Output(_) => "WriteFailed".to_string(),
            AlgError::Config(_) => "InvalidConfig".to_string(),
        }
    }

    /// 转换为结构化错误报告
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            error_kind: self.error_kind(),
            message: self.to_string(),
        }
    }
}

/// 结构化错误报告
///
/// 上层应用可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// 错误阶段: lexer, parser, runtime, binding, io, config
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            (Some(line), None) => write!(f, "[{}] {} error: {}", line, self.phase, self.message),
            _ => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
