//! alg Core - Calculator core (pure logic, no IO)
//!
//! Contains the lexer, the statement parser, and the interpreter.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod compiler;
pub mod kit;
pub mod runtime;

// Re-export common types
pub use compiler::parser::{Statement, StatementKind};
pub use runtime::{Binding, Environment, Interpreter, RuntimeError};

// Re-export config types from alg-config
pub use alg_config::{LimitConfig, Phase};
