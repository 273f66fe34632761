//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use alg_api::AlgError;
use std::io::{self, Write};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 5;

/// 命令行失败：错误本身，以及出错时正在执行的源码（如果有）
#[derive(Debug)]
pub struct CliError {
    pub error: AlgError,
    pub source: Option<String>,
}

impl CliError {
    pub fn with_source(error: AlgError, source: impl Into<String>) -> Self {
        Self {
            error,
            source: Some(source.into()),
        }
    }

    /// 写出 `Error: <message>`，有位置时附带源码上下文
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.source {
            Some(source) => print_error_with_source(out, &self.error, source),
            None => writeln!(out, "Error: {}", self.error),
        }
    }
}

impl From<AlgError> for CliError {
    fn from(error: AlgError) -> Self {
        Self {
            error,
            source: None,
        }
    }
}

/// 打印错误并显示源代码上下文
pub fn print_error_with_source<W: Write>(out: &mut W, e: &AlgError, source: &str) -> io::Result<()> {
    writeln!(out, "Error: {}", e)?;

    match e.line() {
        Some(line) => print_source_context(out, source, line, e.column()),
        None => Ok(()),
    }
}

/// 打印源代码上下文（显示错误行前后几行），有列号时在错误行下方标出 `^`
pub fn print_source_context<W: Write>(
    out: &mut W,
    source: &str,
    error_line: usize,
    error_col: Option<usize>,
) -> io::Result<()> {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return Ok(());
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号宽度，用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    writeln!(out, "{}|--", separator)?;
    for line_idx in start_line..=end_line {
        writeln!(out, "{:>width$} | {}", line_idx, lines[line_idx - 1])?;

        if line_idx == error_line {
            if let Some(col) = error_col {
                let marker = " ".repeat(col.saturating_sub(1));
                writeln!(out, "{:width$} | {}^", "", marker)?;
            }
        }
    }
    writeln!(out, "{}|--", separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alg_api::{compile_source, RunConfig};

    fn render(e: &AlgError, source: &str) -> String {
        let mut out = Vec::new();
        print_error_with_source(&mut out, e, source).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_marker_under_error_column() {
        let source = "a = 1\nb = (a + 2\nc = 3";
        let err = compile_source(source, &RunConfig::default()).unwrap_err();
        let text = render(&err, source);

        assert_eq!(
            text,
            "Error: missing ')'\n\
             --|--\n\
             1 | a = 1\n\
             2 | b = (a + 2\n\
             \x20 |           ^\n\
             3 | c = 3\n\
             --|--\n"
        );
    }

    #[test]
    fn test_context_is_limited() {
        let source: String = (1..=20).map(|i| format!("v{i} = {i}\n")).collect();
        let mut out = Vec::new();
        print_source_context(&mut out, &source, 10, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(" 5 | "));
        assert!(text.contains("15 | "));
        assert!(!text.contains(" 4 | "));
        assert!(!text.contains("16 | "));
        assert!(!text.contains('^'));
    }

    #[test]
    fn test_error_without_location() {
        let err = CliError::from(AlgError::Binding("x".into()));
        let mut out = Vec::new();
        err.report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: invalid binding 'x', expected NAME=VALUE\n"
        );
    }
}
