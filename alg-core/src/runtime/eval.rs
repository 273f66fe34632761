use super::environment::EnvironmentReader;
use super::error::{RuntimeError, RuntimeResult};
use crate::compiler::parser::{Expr, ExprKind};

/// 对表达式求值
///
/// 浮点运算遵循 IEEE 754：除以零得到无穷，定义域之外得到 NaN，都不是错误。
pub fn evaluate(expr: &Expr, env: &impl EnvironmentReader) -> RuntimeResult<f64> {
    match expr.as_ref() {
        ExprKind::Number(value) => Ok(*value),
        ExprKind::Variable(name) => env
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable(name.clone())),
        ExprKind::Binary(bin) => {
            let left = evaluate(&bin.left, env)?;
            let right = evaluate(&bin.right, env)?;
            Ok(bin.op.apply(left, right))
        }
        ExprKind::Negate(operand) => Ok(-evaluate(operand, env)?),
        ExprKind::Call(call) => Ok(call.function.apply(evaluate(&call.argument, env)?)),
    }
}
