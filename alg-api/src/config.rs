//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use alg_config::{AlgConfig, LimitConfig, DEFAULT_PRECISION, DEFAULT_PROMPT};
use once_cell::sync::OnceCell;

use crate::error::AlgError;

/// Execution configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Decimals printed for each binding
    pub precision: usize,
    /// REPL prompt
    pub prompt: String,
    /// Parser limits
    pub limits: LimitConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            prompt: DEFAULT_PROMPT.to_string(),
            limits: LimitConfig::default(),
        }
    }
}

impl RunConfig {
    /// Take the execution-relevant part of a loaded config file
    pub fn from_alg_config(config: &AlgConfig) -> Self {
        Self {
            precision: config.precision,
            prompt: config.prompt.clone(),
            limits: config.limits.clone(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration. Fails if it was already set.
pub fn init(config: RunConfig) -> Result<(), AlgError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| AlgError::Config("config already initialized".to_string()))
}

/// Get global config reference, falling back to defaults if `init` was never called
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
