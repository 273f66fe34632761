//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use alg::{format_binding, run_source, AlgError, Environment, RunConfig};

/// 执行程序并返回每行输出（`name = value`）
pub fn run_program(source: &str) -> Result<Vec<String>, AlgError> {
    run_with(source, Environment::new(), &RunConfig::default())
}

pub fn run_with(
    source: &str,
    env: Environment,
    config: &RunConfig,
) -> Result<Vec<String>, AlgError> {
    let results = run_source(source, env, config)?;
    Ok(results
        .iter()
        .map(|binding| format_binding(binding, config.precision))
        .collect())
}
