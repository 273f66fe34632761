//! 集成测试 - 端到端执行测试

mod common;
use alg::{environment_from, parse_binding, AlgError, Environment, RunConfig, Session};
use common::{run_program, run_with};

#[test]
fn test_program_output() {
    let output = run_program("x = 5 + 2\ny = x ^ 2\ny\ny / 2").unwrap();
    assert_eq!(
        output,
        [
            "x = 7.000000",
            "y = 49.000000",
            "y = 49.000000",
            "y / 2 = 24.500000"
        ]
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let output = run_program("\na = 1\n\n   \nb = a + 1\n").unwrap();
    assert_eq!(output, ["a = 1.000000", "b = 2.000000"]);
}

#[test]
fn test_special_values() {
    let output = run_program("a = 1 / 0\nb = -1 / 0\nc = sqrt(-1)").unwrap();
    assert_eq!(output, ["a = Infinity", "b = -Infinity", "c = NaN"]);
}

#[test]
fn test_precision() {
    let config = RunConfig {
        precision: 3,
        ..RunConfig::default()
    };
    let output = run_with("p = pi", Environment::new(), &config).unwrap();
    assert_eq!(output, ["p = 3.142"]);
}

#[test]
fn test_command_line_bindings() {
    let bindings = ["w=2.5", "h=4"]
        .iter()
        .map(|arg| parse_binding(arg))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let env = environment_from(bindings).unwrap();
    let output = run_with("a = w * h", env, &RunConfig::default()).unwrap();
    assert_eq!(output, ["a = 10.000000"]);
}

#[test]
fn test_syntax_error_located() {
    let err = run_program("a = 1\nb = 2 * (a + 1\n").unwrap_err();
    let report = err.to_report();
    assert_eq!(report.phase, "parser");
    assert_eq!(report.line, Some(2));
    assert_eq!(report.message, "missing ')'");
}

#[test]
fn test_lexer_error_located() {
    let err = run_program("a = 1\n\nb = a % 2").unwrap_err();
    assert!(matches!(err, AlgError::Lexer(_)));
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.column(), Some(7));
    assert_eq!(err.to_string(), "unexpected token '%'");
}

#[test]
fn test_constant_cannot_be_assigned() {
    let err = run_program("e = 2").unwrap_err();
    assert_eq!(err.to_string(), "cannot assign to constant 'e'");
}

#[test]
fn test_session_round_trip() {
    let mut session = Session::new(RunConfig::default());
    session.eval_line("base = 10").unwrap();
    let binding = session.eval_line("log(base ^ 3)").unwrap().unwrap();
    assert_eq!(binding.name, "log(base ^ 3)");
    assert!((binding.value - 3.0).abs() < 1e-12);
}
