use super::expr::Expr;

/// 语句类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `name = expr`：求值并绑定
    Assign,
    /// 单独的变量名：读取并回显
    Query,
    /// 没有 `=` 的表达式：求值并以源码文本作为标签回显，不绑定
    Evaluate,
}

/// 一行源码对应一条语句
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    /// 输出变量名（Evaluate 时为表达式原文）
    pub target: String,
    pub expr: Expr,
    /// 所在行号（1-based）
    pub line: usize,
}

impl Statement {
    pub fn assign(target: impl Into<String>, expr: Expr, line: usize) -> Self {
        Self {
            kind: StatementKind::Assign,
            target: target.into(),
            expr,
            line,
        }
    }

    pub fn query(target: impl Into<String>, expr: Expr, line: usize) -> Self {
        Self {
            kind: StatementKind::Query,
            target: target.into(),
            expr,
            line,
        }
    }

    pub fn evaluate(label: impl Into<String>, expr: Expr, line: usize) -> Self {
        Self {
            kind: StatementKind::Evaluate,
            target: label.into(),
            expr,
            line,
        }
    }

    pub fn output_variable(&self) -> &str {
        &self.target
    }

    /// 执行后是否写入环境
    pub fn binds(&self) -> bool {
        self.kind == StatementKind::Assign
    }
}
