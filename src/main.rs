//! `calc`: evaluate Arabic and Roman numeral expressions from the command line.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
