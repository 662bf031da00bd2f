use std::{io::Write, path::PathBuf};

mod convert;
mod eval;
mod repl;
mod terminal;

use clap::ArgAction;
use convert::{FromRoman, ToRoman};
use eval::Eval;
use numcalc::{Config, Evaluation, Roman};
use repl::Repl;
use serde::Serialize;

/// Parse a Roman numeral from a string, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input
/// and normalizes it before parsing.
fn parse_roman(s: &str) -> Result<Roman, String> {
    s.to_uppercase().parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
            None => Config::default(),
        };
        tracing::debug!(?config, "loaded configuration");

        self.command
            .unwrap_or_else(|| Command::Repl(Repl::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries results only
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Evaluate expressions read from stdin, one per line (default)
    ///
    /// Failing lines are reported on stderr and processing continues.
    Repl(Repl),

    /// Evaluate a single expression
    Eval(Eval),

    /// Convert an integer to a Roman numeral
    ToRoman(ToRoman),

    /// Convert a Roman numeral to an integer
    FromRoman(FromRoman),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Repl(command) => command.run(config)?,
            Self::Eval(command) => command.run(config)?,
            Self::ToRoman(command) => command.run()?,
            Self::FromRoman(command) => command.run()?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
}

impl OutputFormat {
    fn write(self, mut out: impl Write, input: &str, evaluation: &Evaluation) -> anyhow::Result<()> {
        match self {
            Self::Text => writeln!(out, "{}", evaluation.result)?,
            Self::Json => {
                let record = Record {
                    input: input.trim(),
                    evaluation,
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
        Ok(())
    }
}
