//! alg Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all alg crates.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of decimals used when printing a binding (same as `%f`)
pub const DEFAULT_PRECISION: usize = 6;

/// Default REPL prompt
pub const DEFAULT_PROMPT: &str = "> ";

/// Log verbosity, ordered from most to least verbose
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name. `silent` is accepted and means errors only.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

/// Configuration for evaluation limits
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum nesting of parentheses / unary operators in one expression
    pub max_expression_depth: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_expression_depth: 256,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
    Interpreter,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Interpreter => "interpreter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.as_str() == name)
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("alg::{}", self.as_str())
    }

    pub const ALL: [Phase; 3] = [Phase::Lexer, Phase::Parser, Phase::Interpreter];
}

/// Settings loaded from an `alg.json` file
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlgConfig {
    /// Decimals printed for each result
    pub precision: usize,
    /// REPL prompt
    pub prompt: String,
    /// Global log level
    pub log_level: LogLevel,
    /// Variables defined before the first statement runs
    pub variables: BTreeMap<String, f64>,
    /// Evaluation limits
    pub limits: LimitConfig,
}

impl Default for AlgConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: LogLevel::default(),
            variables: BTreeMap::new(),
            limits: LimitConfig::default(),
        }
    }
}
