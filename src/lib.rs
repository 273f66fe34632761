//! alg - A line-oriented algebraic calculator
//!
//! Each line is either an assignment (`name = expression`), a variable query
//! (`name`), or a bare expression. Expressions support `+ - * / ^`, unary
//! minus, parentheses, the constants `pi`/`PI`/`e`/`E` and the builtins
//! `sin cos tan log ln sqrt`.
//!
//! # Architecture
//!
//! ```text
//! alg-config/  - Pure configuration data (no logic)
//! alg-core/    - Lexer, parser and interpreter (no IO)
//! alg-api/     - Sessions, file runs, unified errors
//! alg-cli/     - `alg` binary: REPL and file runner
//! ```
//!
//! # Quick Start
//!
//! ```
//! use alg::{run_source, Environment, RunConfig};
//!
//! let results = run_source("r = 2\narea = pi * r ^ 2", Environment::new(), &RunConfig::default()).unwrap();
//! assert_eq!(results[0].value, 2.0);
//! ```

pub use alg_api::*;
