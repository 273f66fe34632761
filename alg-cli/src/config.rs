//! CLI 配置
//!
//! 包含 CLI 特有的配置：配置文件读取、日志配置和运行配置的组合

use std::path::Path;

use alg_api::{AlgConfig, AlgError, LogLevel, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub parser: Option<Level>,
    pub interpreter: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl LogConfig {
    pub fn new(global: LogLevel) -> Self {
        Self {
            global: to_tracing_level(global),
            lexer: None,
            parser: None,
            interpreter: None,
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        let level = match phase {
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
            Phase::Interpreter => self.interpreter,
        };
        level.unwrap_or(self.global)
    }

    pub fn set_phase(&mut self, phase: Phase, level: LogLevel) {
        let level = Some(to_tracing_level(level));
        match phase {
            Phase::Lexer => self.lexer = level,
            Phase::Parser => self.parser = level,
            Phase::Interpreter => self.interpreter = level,
        }
    }

    /// Apply a `PHASE=LEVEL` override from the command line
    pub fn apply_override(&mut self, arg: &str) -> Result<(), AlgError> {
        let invalid = || AlgError::Config(format!("invalid log override '{arg}', expected PHASE=LEVEL"));

        let (phase, level) = arg.split_once('=').ok_or_else(invalid)?;
        let phase = Phase::from_name(phase.trim()).ok_or_else(invalid)?;
        let level = parse_log_level(level.trim())?;
        self.set_phase(phase, level);
        Ok(())
    }
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Parse log level string
pub fn parse_log_level(name: &str) -> Result<LogLevel, AlgError> {
    LogLevel::from_name(name).ok_or_else(|| AlgError::Config(format!("unknown log level '{name}'")))
}

/// 读取 JSON 配置文件；未指定时使用默认值
pub fn load_config(path: Option<&Path>) -> Result<AlgConfig, AlgError> {
    let Some(path) = path else {
        return Ok(AlgConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| AlgError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| AlgError::Config(format!("cannot parse '{}': {}", path.display(), e)))
}
