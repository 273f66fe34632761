//! alg CLI - Command line interface
//!
//! Without a file, starts an interactive REPL on stdin. With a file, runs it
//! line by line after defining any `NAME=VALUE` bindings given after it.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod logging;
mod platform;
mod repl;
mod runner;

use crate::config::{load_config, parse_log_level, LogConfig};
use crate::logging::LogFormat;
use crate::platform::CliError;
use crate::repl::Repl;
use alg_api::{
    environment_from, init_config, parse_binding, AlgConfig, AlgError, RunConfig, Session,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "alg", about = "Line-oriented algebraic calculator", version)]
struct Cli {
    /// Program file to run (starts the REPL when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Variables defined before the file runs
    #[arg(value_name = "NAME=VALUE", requires = "file")]
    bindings: Vec<String>,

    /// Decimals printed for each result
    #[arg(long, value_name = "N")]
    precision: Option<usize>,

    /// REPL prompt
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Per-phase log level, e.g. `parser=debug` (repeatable)
    #[arg(long = "log-phase", value_name = "PHASE=LEVEL")]
    log_phases: Vec<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = e.report(&mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file_config = load_config(cli.config.as_deref())?;

    let log_config = build_log_config(&cli, &file_config)?;
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref()).map_err(
        |source| AlgError::Io {
            path: cli.log_file.clone().unwrap_or_default(),
            source,
        },
    )?;
    debug!(target: "alg::cli", ?log_config, "logging initialized");

    let run_config = build_run_config(&cli, &file_config);
    init_config(run_config.clone())?;

    // 命令行绑定覆盖配置文件中的同名变量
    let mut variables = file_config.variables;
    for arg in &cli.bindings {
        let (name, value) = parse_binding(arg)?;
        variables.insert(name, value);
    }
    let env = environment_from(variables)?;

    match &cli.file {
        Some(path) => {
            let mut out = BufWriter::new(io::stdout().lock());
            let result = runner::run_file(path, env, &run_config, &mut out);
            out.flush().map_err(AlgError::Output)?;
            result
        }
        None => {
            let session = Session::with_environment(env, run_config);
            Repl::new(io::stdin().lock(), io::stdout(), session)
                .run()
                .map_err(|e| CliError::from(AlgError::Output(e)))
        }
    }
}

fn build_log_config(cli: &Cli, file_config: &AlgConfig) -> Result<LogConfig, AlgError> {
    let level = match &cli.log_level {
        Some(name) => parse_log_level(name)?,
        None => file_config.log_level,
    };

    let mut log_config = LogConfig::new(level);
    for arg in &cli.log_phases {
        log_config.apply_override(arg)?;
    }
    Ok(log_config)
}

/// 命令行参数覆盖配置文件
fn build_run_config(cli: &Cli, file_config: &AlgConfig) -> RunConfig {
    let mut config = RunConfig::from_alg_config(file_config);
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    config
}
