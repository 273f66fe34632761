//! 终端相关的输出

mod cli;

pub use cli::CliError;
