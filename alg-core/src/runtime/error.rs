/// 运行时错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("cannot assign to constant '{0}'")]
    AssignConstant(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
