use clap::Parser;
use numcalc::Roman;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Convert an integer to a Roman numeral")]
pub struct ToRoman {
    /// The value to convert, between 1 and 3999
    #[arg(allow_negative_numbers = true)]
    value: i64,
}

impl ToRoman {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let roman = Roman::new(self.value)?;
        println!("{roman}");
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(about = "Convert a Roman numeral to an integer")]
pub struct FromRoman {
    /// The numeral to convert (case-insensitive)
    #[clap(value_parser = super::parse_roman)]
    numeral: Roman,
}

impl FromRoman {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.numeral.value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_roman_parses_lower_case() {
        let command = FromRoman::try_parse_from(["from-roman", "xlii"]).unwrap();
        assert_eq!(command.numeral.value(), 42);
    }

    #[test]
    fn from_roman_rejects_invalid_numeral() {
        let error = FromRoman::try_parse_from(["from-roman", "IC"]).unwrap_err();
        assert!(error.to_string().contains("Invalid digit order in 'IC'"));
    }

    #[test]
    fn to_roman_accepts_negative_values_for_reporting() {
        let command = ToRoman::try_parse_from(["to-roman", "-1"]).unwrap();
        assert_eq!(command.value, -1);
        assert!(command.run().is_err());
    }
}
