use crate::kit::lexer::Coordinate;

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// 错误类型
    pub kind: ParserErrorKind,
    /// 错误发生的位置
    pub location: ErrorLocation,
}

/// 错误位置信息
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLocation {
    /// 特定位置
    At(Coordinate),
    /// 在某个token之后
    After(Coordinate),
    /// 输入为空
    Eof,
}

/// 语法错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorKind {
    /// 意外的token
    UnexpectedToken { found: String },
    /// 表达式不完整或多出操作数
    InvalidExpression(String),
    /// 无效的数字格式
    InvalidNumberFormat(String),
    /// 缺少右括号
    MissingRightParen,
    /// 对常量赋值
    AssignConstant(String),
    /// `=` 左侧不是单个标识符
    InvalidTarget(String),
    /// 嵌套层数超过限制
    NestingTooDeep { limit: usize },
}

impl ParserError {
    /// 在指定位置创建错误
    pub fn at(kind: ParserErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            location: ErrorLocation::At(Coordinate { line, column }),
        }
    }

    /// 在当前位置创建错误（从token获取位置）
    pub fn here(kind: ParserErrorKind, coordinate: Coordinate) -> Self {
        Self {
            kind,
            location: ErrorLocation::At(coordinate),
        }
    }

    /// 在某个位置之后创建错误（输入提前结束）
    pub fn after(kind: ParserErrorKind, coordinate: Coordinate) -> Self {
        Self {
            kind,
            location: ErrorLocation::After(coordinate),
        }
    }

    pub fn at_eof(kind: ParserErrorKind) -> Self {
        Self {
            kind,
            location: ErrorLocation::Eof,
        }
    }

    /// 获取行号（如果可用）
    pub fn line(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(coord) | ErrorLocation::After(coord) => Some(coord.line),
            ErrorLocation::Eof => None,
        }
    }

    /// 获取列号（如果可用）
    pub fn column(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(coord) | ErrorLocation::After(coord) => Some(coord.column),
            ErrorLocation::Eof => None,
        }
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParserErrorKind::UnexpectedToken { found } => write!(f, "unexpected token '{found}'"),
            ParserErrorKind::InvalidExpression(expr) => write!(f, "invalid expression '{expr}'"),
            ParserErrorKind::InvalidNumberFormat(s) => write!(f, "invalid number format '{s}'"),
            ParserErrorKind::MissingRightParen => write!(f, "missing ')'"),
            ParserErrorKind::AssignConstant(name) => {
                write!(f, "cannot assign to constant '{name}'")
            }
            ParserErrorKind::InvalidTarget(target) => {
                write!(f, "invalid assignment target '{target}'")
            }
            ParserErrorKind::NestingTooDeep { limit } => {
                write!(f, "expression nested too deeply (limit {limit})")
            }
        }
    }
}

impl std::error::Error for ParserError {}

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParserError>;
