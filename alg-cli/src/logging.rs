//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 只输出计算结果。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use alg_api::Phase;
use tracing::debug;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按阶段构建过滤规则
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase))
        })
        .with_target("alg::cli", log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统；指定文件时同时追加写入文件
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> io::Result<()> {
    let targets = build_targets(log_config);

    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let file_layer = match file {
        Some(path) => {
            let handle = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets),
            )
        }
        None => None,
    };

    // 已有全局 subscriber 时保留原来的
    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        debug!(target: "alg::cli", error = %e, "keeping existing tracing subscriber");
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
