pub mod builder;
pub mod lexer;
pub mod token_kind;

pub use builder::{build_lexer, build_lexer_at_line, tokenize};
pub use lexer::Lexer;
pub use token_kind::AlgTokenKind;
