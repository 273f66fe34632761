//! 交互式会话
//!
//! 每次输入一行，环境在多次调用间保留。错误不会终止会话，
//! 出错的行也不会修改环境。

use alg_core::{Binding, Environment, Interpreter};

use crate::config::RunConfig;
use crate::error::AlgError;
use crate::compile_line;

pub struct Session {
    interpreter: Interpreter,
    config: RunConfig,
    /// 已读入的行数，用作错误行号
    line: usize,
}

impl Session {
    pub fn new(config: RunConfig) -> Self {
        Self::with_environment(Environment::new(), config)
    }

    pub fn with_environment(env: Environment, config: RunConfig) -> Self {
        Self {
            interpreter: Interpreter::with_environment(env),
            config,
            line: 0,
        }
    }

    /// 执行一行；空行返回 `None`
    pub fn eval_line(&mut self, source: &str) -> Result<Option<Binding>, AlgError> {
        self.line += 1;
        let Some(statement) = compile_line(source, self.line, &self.config)? else {
            return Ok(None);
        };

        let binding = self
            .interpreter
            .run(&statement)
            .map_err(|e| AlgError::runtime(Some(statement.line), e))?;
        Ok(Some(binding))
    }

    /// 按名字顺序列出全部变量（含常量）
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.interpreter.environment().iter()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        self.interpreter.environment()
    }
}
