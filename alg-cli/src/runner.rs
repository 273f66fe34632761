//! 文件执行
//!
//! 源文件先整体解析，再按顺序执行，每条语句的结果立即输出。

use std::io::Write;
use std::path::Path;

use alg_api::{format_binding, run_source_with, AlgError, Environment, RunConfig};
use tracing::info;

use crate::platform::CliError;

pub fn run_file<W: Write>(
    path: &Path,
    env: Environment,
    config: &RunConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| AlgError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(target: "alg::cli", path = %path.display(), "running file");
    run_source(&source, env, config, out)
}

pub fn run_source<W: Write>(
    source: &str,
    env: Environment,
    config: &RunConfig,
    out: &mut W,
) -> Result<(), CliError> {
    run_source_with(source, env, config, |binding| {
        writeln!(out, "{}", format_binding(binding, config.precision))
    })
    .map(|_| ())
    .map_err(|e| CliError::with_source(e, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (String, Option<CliError>) {
        let mut out = Vec::new();
        let result = run_source(source, Environment::new(), &RunConfig::default(), &mut out);
        (String::from_utf8(out).unwrap(), result.err())
    }

    #[test]
    fn test_prints_each_statement() {
        let (output, err) = run("x = 3\ny = 2\nz = sin((10 - x) * pi / y ^ 2)\n");
        assert!(err.is_none());
        assert_eq!(output, "x = 3.000000\ny = 2.000000\nz = -0.707107\n");
    }

    #[test]
    fn test_parse_error_prints_nothing() {
        let (output, err) = run("x = 1\ny = 2 2\n");
        assert_eq!(output, "");
        let err = err.unwrap();
        assert_eq!(err.error.to_string(), "invalid expression '2 2'");
        assert_eq!(err.error.line(), Some(2));
    }

    #[test]
    fn test_runtime_error_stops_execution() {
        let (output, err) = run("a = 1\nb = missing\nc = 2\n");
        assert_eq!(output, "a = 1.000000\n");
        assert_eq!(err.unwrap().error.to_string(), "unknown variable 'missing'");
    }

    #[test]
    fn test_run_file_with_bindings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "area = w * h").unwrap();

        let env = alg_api::environment_from([("w", 3.0), ("h", 4.0)]).unwrap();
        let mut out = Vec::new();
        run_file(file.path(), env, &RunConfig::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "area = 12.000000\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run_file(
            &dir.path().join("nope.alg"),
            Environment::new(),
            &RunConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(err.source.is_none());
        assert!(matches!(err.error, AlgError::Io { .. }));
    }
}
