pub mod error;
pub mod expr;
pub mod parser;
pub mod stmt;
mod utils;

pub use error::{ErrorLocation, ParseResult, ParserError, ParserErrorKind};
pub use expr::{Binary, BinaryOp, Builtin, Call, Expr, ExprKind};
pub use parser::{Parser, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use stmt::{Statement, StatementKind};
