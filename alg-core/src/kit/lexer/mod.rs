//! 词法分析基础设施
//!
//! 与具体语法无关的部分：位置追踪、字符游标、Token 结构和词法错误。
//! 计算器的 Token 种类和扫描规则在 `compiler::lexer` 中。

pub mod cursor;
pub mod error;
pub mod position;
pub mod token;

pub use cursor::CharCursor;
pub use error::{ErrorKind, LexerError};
pub use position::{Coordinate, SourcePosition, SourceSpan};
pub use token::Token;
