//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use alg_core::compiler::parse_lines;
use alg_core::{Interpreter, LimitConfig};

pub const TOLERANCE: f64 = 1e-12;

/// 执行错误
#[derive(Debug)]
pub enum ExecError {
    Compile(String),
    Runtime(String),
}

/// 执行多行源码，返回最终的解释器（完整流程：先解析全部行，再逐条执行）
pub fn run_code(code: &str) -> Result<Interpreter, ExecError> {
    let statements = parse_lines(code, &LimitConfig::default())
        .map_err(|e| ExecError::Compile(e.to_string()))?;

    let mut interpreter = Interpreter::new();
    interpreter
        .run_all(&statements)
        .map_err(|e| ExecError::Runtime(e.to_string()))?;
    Ok(interpreter)
}

/// 执行源码并读取变量
pub fn get_value(code: &str, name: &str) -> f64 {
    let interpreter = run_code(code).unwrap();
    interpreter
        .get(name)
        .unwrap_or_else(|| panic!("variable '{name}' not bound"))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
