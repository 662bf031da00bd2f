use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::Parser;
use numcalc::{Config, Expression};
use tracing::instrument;

use super::{OutputFormat, terminal::Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "Evaluate expressions read from stdin, one per line")]
pub struct Repl {
    /// Stop at the first line that fails to evaluate
    #[arg(long)]
    fail_fast: bool,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl Repl {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let failures = self.process(
            config,
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr().lock(),
        )?;

        if failures > 0 {
            anyhow::bail!("{failures} line(s) failed to evaluate");
        }
        Ok(())
    }

    /// Evaluate every line of `input`, returning the number of failed lines.
    ///
    /// Blank lines are skipped. Results go to `out`, diagnostics to `err`.
    /// A line that is not valid UTF-8 counts as a failed line; only I/O errors
    /// end the loop early.
    fn process(
        &self,
        config: &Config,
        input: impl BufRead,
        mut out: impl Write,
        mut err: impl Write,
    ) -> anyhow::Result<usize> {
        let bounds = config.operand_bounds();
        let mut failures = 0;

        for (index, bytes) in input.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let number = index + 1;

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    failures += 1;
                    let message = format!("invalid UTF-8: {}", e.utf8_error());
                    if self.report(&mut err, number, "<binary>", &message)? {
                        break;
                    }
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match Expression::parse(&line, &bounds).and_then(|expression| expression.evaluate()) {
                Ok(evaluation) => {
                    self.output.write(&mut out, &line, &evaluation)?;
                    out.flush()?;
                }
                Err(e) => {
                    failures += 1;
                    if self.report(&mut err, number, line.trim(), &e)? {
                        break;
                    }
                }
            }
        }

        Ok(failures)
    }

    /// Write a diagnostic for a failed line. Returns `true` if processing
    /// should stop.
    fn report(
        &self,
        mut err: impl Write,
        number: usize,
        input: &str,
        error: &dyn fmt::Display,
    ) -> io::Result<bool> {
        tracing::info!(line = number, input, error = %error, "evaluation failed");
        writeln!(err, "{}", format!("line {number}: {error}").error())?;

        if self.fail_fast {
            writeln!(err, "{}", "Stopping at first error (--fail-fast)".dim())?;
        }
        Ok(self.fail_fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(repl: &Repl, input: &str) -> (usize, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = repl
            .process(&Config::default(), input.as_bytes(), &mut out, &mut err)
            .unwrap();
        (
            failures,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn evaluates_each_line() {
        let (failures, out, err) = run(&Repl::default(), "III + IV\n2 * 5\nx / ii\n");
        assert_eq!(failures, 0);
        assert_eq!(out, "VII\n10\nV\n");
        assert!(err.is_empty());
    }

    #[test]
    fn reports_errors_and_continues() {
        let (failures, out, err) = run(&Repl::default(), "5 + V\n1 + 1\nI - V\n3 - 1\n");
        assert_eq!(failures, 2);
        assert_eq!(out, "2\n2\n");
        assert!(err.contains("line 1: Operands should have the same numeral system"));
        assert!(err.contains("line 3: -4 is beyond the Roman boundaries"));
    }

    #[test]
    fn fail_fast_stops_at_first_error() {
        let repl = Repl {
            fail_fast: true,
            ..Repl::default()
        };
        let (failures, out, err) = run(&repl, "1 + 1\n1 +\n2 + 2\n");
        assert_eq!(failures, 1);
        assert_eq!(out, "2\n");
        assert!(err.contains("line 2: Must be a binary operation"));
        assert!(err.contains("--fail-fast"));
    }

    #[test]
    fn skips_blank_lines() {
        let (failures, out, _) = run(&Repl::default(), "\n   \nI + I\n\n");
        assert_eq!(failures, 0);
        assert_eq!(out, "II\n");
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = Repl::default()
            .process(&Config::default(), &b"\xff + 1\n1 + 1\n"[..], &mut out, &mut err)
            .unwrap();
        assert_eq!(failures, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
        assert!(String::from_utf8(err).unwrap().contains("line 1: invalid UTF-8"));
    }

    #[test]
    fn crlf_line_endings() {
        let (failures, out, _) = run(&Repl::default(), "II + II\r\n3 * 3\r\n");
        assert_eq!(failures, 0);
        assert_eq!(out, "IV\n9\n");
    }

    #[test]
    fn zero_divisor_rejected_by_default_bounds() {
        let (failures, out, err) = run(&Repl::default(), "10 / 0\n");
        assert_eq!(failures, 1);
        assert!(out.is_empty());
        assert!(err.contains("line 1: Operand 0 must be in boundaries [1; 10]"));
    }

    #[test]
    fn division_by_zero_produces_no_output() {
        let config = Config::new(0, 10).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = Repl::default()
            .process(&config, "10 / 0\n".as_bytes(), &mut out, &mut err)
            .unwrap();
        assert_eq!(failures, 1);
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().contains("Could not divide by 0"));
    }

    #[test]
    fn json_output() {
        let repl = Repl {
            output: OutputFormat::Json,
            ..Repl::default()
        };
        let (_, out, _) = run(&repl, "6 / 4\n");
        let record: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(record["input"], "6 / 4");
        assert_eq!(record["value"], 1);
        assert_eq!(record["system"], "arabic");
        assert_eq!(record["result"], "1");
    }
}
