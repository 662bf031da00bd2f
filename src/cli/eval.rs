use std::io;

use clap::Parser;
use numcalc::{Config, Expression};
use tracing::instrument;

use super::OutputFormat;

#[derive(Debug, Parser)]
#[command(about = "Evaluate a single expression")]
pub struct Eval {
    /// The expression, e.g. 'III + IV'
    ///
    /// May be given as one quoted argument or as separate words.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    expression: Vec<String>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl Eval {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let line = self.expression.join(" ");
        let evaluation = Expression::parse(&line, &config.operand_bounds())?.evaluate()?;
        self.output.write(io::stdout().lock(), &line, &evaluation)
    }
}
