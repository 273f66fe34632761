//! alg API - Execution orchestration layer
//!
//! Provides a unified execution interface, including:
//! - Line and file execution (`Session`, `run_source`, `run_file`)
//! - Configuration abstraction (`RunConfig`)
//! - Unified error handling (`AlgError`)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run_source(source, env, &config)` API.

use std::path::Path;

use alg_core::compiler::{parse_lines, parse_statement};
use alg_core::compiler::lexer::token_kind::is_identifier_char;
use tracing::info;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from alg_config
pub use alg_config::{AlgConfig, LimitConfig, LogLevel, Phase};

pub mod error;
pub mod format;
pub mod session;
pub use error::{AlgError, ErrorReport, LexerError, ParserError, RuntimeError};
pub use format::{format_binding, format_value};
pub use session::Session;

// Re-export core types
pub use alg_config;
pub use alg_core::{Binding, Environment, Statement, StatementKind};

/// Parse one line. Blank lines yield `None`.
pub fn compile_line(
    source: &str,
    line: usize,
    config: &RunConfig,
) -> Result<Option<Statement>, AlgError> {
    if source.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_statement(source, line, &config.limits)?))
}

/// Parse every non-blank line of `source`; the first error aborts.
pub fn compile_source(source: &str, config: &RunConfig) -> Result<Vec<Statement>, AlgError> {
    Ok(parse_lines(source, &config.limits)?)
}

/// Parse a command-line `NAME=VALUE` binding
pub fn parse_binding(arg: &str) -> Result<(String, f64), AlgError> {
    let invalid = || AlgError::Binding(arg.to_string());

    let (name, value) = arg.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(is_identifier_char) {
        return Err(invalid());
    }
    let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}

/// Build an environment from initial variables. Constants cannot be overridden.
pub fn environment_from<I, S>(variables: I) -> Result<Environment, AlgError>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    Environment::with_variables(variables).map_err(|e| AlgError::runtime(None, e))
}

/// Execute a whole program with explicit configuration.
///
/// All lines are parsed before anything runs, so a syntax error anywhere
/// produces no output. Each result is handed to `emit` as soon as it is
/// computed; a runtime error stops execution after the results already emitted.
pub fn run_source_with<F>(
    source: &str,
    env: Environment,
    config: &RunConfig,
    mut emit: F,
) -> Result<Environment, AlgError>
where
    F: FnMut(&Binding) -> std::io::Result<()>,
{
    let statements = compile_source(source, config)?;
    info!(target: "alg::interpreter", statements = statements.len(), "program parsed");

    let mut interpreter = alg_core::Interpreter::with_environment(env);
    for statement in &statements {
        let binding = interpreter
            .run(statement)
            .map_err(|e| AlgError::runtime(Some(statement.line), e))?;
        emit(&binding).map_err(AlgError::Output)?;
    }

    info!(target: "alg::interpreter", "program finished");
    Ok(interpreter.into_environment())
}

/// Execute a whole program and collect its results
pub fn run_source(
    source: &str,
    env: Environment,
    config: &RunConfig,
) -> Result<Vec<Binding>, AlgError> {
    let mut results = Vec::new();
    run_source_with(source, env, config, |binding| {
        results.push(binding.clone());
        Ok(())
    })?;
    Ok(results)
}

/// Read and execute a program file
pub fn run_file<F>(
    path: &Path,
    env: Environment,
    config: &RunConfig,
    emit: F,
) -> Result<Environment, AlgError>
where
    F: FnMut(&Binding) -> std::io::Result<()>,
{
    let source = std::fs::read_to_string(path).map_err(|source| AlgError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(target: "alg::interpreter", path = %path.display(), "running file");
    run_source_with(&source, env, config, emit)
}

/// Quick evaluation with the global config and a fresh environment
pub fn quick_eval(source: &str) -> Result<Vec<Binding>, AlgError> {
    run_source(source, Environment::new(), get_config())
}
