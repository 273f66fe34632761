use super::environment::Environment;
use super::error::RuntimeResult;
use super::eval::evaluate;
use crate::compiler::parser::Statement;
use tracing::debug;

/// 一条语句的执行结果：输出名和值
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: f64,
}

/// 语句解释器，持有变量环境
#[derive(Debug, Default)]
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    /// 执行一条语句；只有赋值语句写回环境
    pub fn run(&mut self, statement: &Statement) -> RuntimeResult<Binding> {
        let value = evaluate(&statement.expr, &self.env)?;
        if statement.binds() {
            self.env.define(statement.target.as_str(), value)?;
        }

        debug!(
            target: "alg::interpreter",
            line = statement.line,
            "{} = {}",
            statement.target,
            value
        );
        Ok(Binding {
            name: statement.target.clone(),
            value,
        })
    }

    /// 按顺序执行，遇到第一个错误即停止
    pub fn run_all<'s>(
        &mut self,
        statements: impl IntoIterator<Item = &'s Statement>,
    ) -> RuntimeResult<Vec<Binding>> {
        statements
            .into_iter()
            .map(|statement| self.run(statement))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.env.get(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }
}
