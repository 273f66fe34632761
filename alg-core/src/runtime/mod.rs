//! 解释器：环境、求值、语句执行

pub mod environment;
pub mod error;
pub mod eval;
pub mod interpreter;

pub use environment::{is_constant, Environment, EnvironmentReader, CONSTANTS};
pub use error::{RuntimeError, RuntimeResult};
pub use eval::evaluate;
pub use interpreter::{Binding, Interpreter};
