//! 通用工具（与计算器语法无关）

pub mod lexer;
