//! 交互式 REPL
//!
//! 读写端都是泛型参数，测试时可以用内存缓冲区代替终端。

use std::io::{self, BufRead, Write};

use alg_api::{format_binding, format_value, Session};
use tracing::{debug, info};

const HELP: &str = "commands:\n\
                    \tenv - print all existing variables and their values\n\
                    \thelp - print this message\n\
                    \texit - exit the interactive repl\n";

pub struct Repl<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// 运行到 `exit` 或输入结束
    pub fn run(&mut self) -> io::Result<()> {
        info!(target: "alg::cli", "starting repl");
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.session.config().prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!(target: "alg::cli", "end of input");
                return Ok(());
            }

            match line.trim() {
                "exit" => return Ok(()),
                "env" => self.print_env()?,
                "help" => self.output.write_all(HELP.as_bytes())?,
                source => self.eval(source)?,
            }
        }
    }

    fn eval(&mut self, source: &str) -> io::Result<()> {
        let precision = self.session.config().precision;
        match self.session.eval_line(source) {
            Ok(Some(binding)) => writeln!(self.output, "{}", format_binding(&binding, precision)),
            Ok(None) => Ok(()),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn print_env(&mut self) -> io::Result<()> {
        let precision = self.session.config().precision;
        for (name, value) in self.session.variables() {
            writeln!(self.output, "{} = {}", name, format_value(value, precision))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alg_api::{environment_from, RunConfig};
    use std::io::Cursor;

    fn run_repl(input: &str, config: RunConfig) -> String {
        let session = Session::new(config);
        let mut repl = Repl::new(Cursor::new(input.to_string()), Vec::new(), session);
        repl.run().unwrap();
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[test]
    fn test_assignments_and_queries() {
        let output = run_repl("x = 5 + 2\nx\nx / 2\nexit\n", RunConfig::default());
        assert_eq!(
            output,
            "> x = 7.000000\n> x = 7.000000\n> x / 2 = 3.500000\n> "
        );
    }

    #[test]
    fn test_env_lists_sorted_variables() {
        let config = RunConfig {
            precision: 2,
            ..RunConfig::default()
        };
        let output = run_repl("b = 2\na = 1\nenv\n", config);
        assert_eq!(
            output,
            "> b = 2.00\n> a = 1.00\n> E = 2.72\nPI = 3.14\na = 1.00\nb = 2.00\ne = 2.72\npi = 3.14\n> "
        );
    }

    #[test]
    fn test_errors_keep_session_alive() {
        let output = run_repl("y = z\npi = 1\n1 +\ny = 1\n", RunConfig::default());
        assert_eq!(
            output,
            "> Error: unknown variable 'z'\n\
             > Error: cannot assign to constant 'pi'\n\
             > Error: invalid expression '1 +'\n\
             > y = 1.000000\n\
             > "
        );
    }

    #[test]
    fn test_help_and_blank_lines() {
        let output = run_repl("\n   \nhelp\nexit\nx = 1\n", RunConfig::default());
        assert_eq!(output, format!("> > > {HELP}> "));
    }

    #[test]
    fn test_custom_prompt_and_environment() {
        let config = RunConfig {
            prompt: "alg> ".to_string(),
            ..RunConfig::default()
        };
        let env = environment_from([("g", 9.5)]).unwrap();
        let session = Session::with_environment(env, config);
        let mut repl = Repl::new(Cursor::new("g * 2\n"), Vec::new(), session);
        repl.run().unwrap();
        let output = String::from_utf8(repl.into_output()).unwrap();
        assert_eq!(output, "alg> g * 2 = 19.000000\nalg> ");
    }
}
