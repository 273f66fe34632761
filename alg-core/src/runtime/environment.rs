use super::error::{RuntimeError, RuntimeResult};
use std::collections::BTreeMap;
use std::f64::consts;

/// 预定义常量，不可重新赋值
pub const CONSTANTS: [(&str, f64); 4] = [
    ("pi", consts::PI),
    ("PI", consts::PI),
    ("e", consts::E),
    ("E", consts::E),
];

pub fn is_constant(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

/// 只读访问变量，求值只需要这一部分
pub trait EnvironmentReader {
    fn get(&self, name: &str) -> Option<f64>;
}

/// 变量环境
///
/// 以名字排序存储，`iter` 的输出顺序稳定。
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    values: BTreeMap<String, f64>,
}

impl Environment {
    /// 创建只含常量的环境
    pub fn new() -> Self {
        let values = CONSTANTS
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        Self { values }
    }

    /// 创建环境并依次定义给定变量
    pub fn with_variables<I, S>(variables: I) -> RuntimeResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut env = Self::new();
        for (name, value) in variables {
            env.define(name, value)?;
        }
        Ok(env)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// 定义或覆盖变量；常量名被拒绝
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> RuntimeResult<()> {
        let name = name.into();
        if is_constant(&name) {
            return Err(RuntimeError::AssignConstant(name));
        }
        self.values.insert(name, value);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// 按名字顺序遍历全部绑定（含常量）
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentReader for Environment {
    fn get(&self, name: &str) -> Option<f64> {
        Environment::get(self, name)
    }
}
