//! Numeral systems and operand classification.
//!
//! An operand token is either an Arabic integer or a Roman numeral. The
//! system is detected per token and remembered alongside the value, so a
//! result can be rendered back in the system its operands were written in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Roman numeral decoding and encoding.
pub mod roman;

/// The numeral system an operand was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// Base-10 integers such as `7` or `-12`.
    Arabic,
    /// Roman numerals such as `VII`.
    Roman,
}

impl NumeralSystem {
    /// Render a value in this numeral system.
    ///
    /// # Errors
    ///
    /// Returns [`roman::Error::OutOfRange`] when rendering a Roman value
    /// outside 1..=3999. Arabic rendering never fails.
    pub fn render(self, value: i64) -> Result<String, roman::Error> {
        match self {
            Self::Arabic => Ok(value.to_string()),
            Self::Roman => roman::encode(value),
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Arabic => f.write_str("arabic"),
            Self::Roman => f.write_str("roman"),
        }
    }
}

/// A classified operand: its value and the system it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// The numeric value.
    pub value: i64,
    /// The numeral system of the source token.
    pub system: NumeralSystem,
}

/// Error returned when a token is neither an Arabic nor a Roman numeral.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Undefined numeral system for '{0}'")]
pub struct UndefinedNumeralSystem(pub String);

/// Classify a token as an Arabic or Roman numeral.
///
/// Arabic parsing is tried first (base 10, optional leading sign), then Roman
/// decoding. The two cannot overlap since Roman digits are letters.
///
/// # Errors
///
/// Returns [`UndefinedNumeralSystem`] if neither parse succeeds.
pub fn classify(token: &str) -> Result<Operand, UndefinedNumeralSystem> {
    if let Ok(value) = token.parse::<i64>() {
        tracing::trace!(token, value, "classified as arabic");
        return Ok(Operand {
            value,
            system: NumeralSystem::Arabic,
        });
    }

    match roman::decode(token) {
        Ok(value) => {
            tracing::trace!(token, value, "classified as roman");
            Ok(Operand {
                value: i64::from(value),
                system: NumeralSystem::Roman,
            })
        }
        Err(e) => {
            tracing::debug!(token, error = %e, "token is not a roman numeral");
            Err(UndefinedNumeralSystem(token.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("5", 5; "plain")]
    #[test_case("+5", 5; "explicit sign")]
    #[test_case("-3", -3; "negative")]
    #[test_case("007", 7; "leading zeros")]
    fn classify_arabic(token: &str, value: i64) {
        assert_eq!(
            classify(token).unwrap(),
            Operand {
                value,
                system: NumeralSystem::Arabic
            }
        );
    }

    #[test_case("V", 5)]
    #[test_case("X", 10)]
    #[test_case("MCMXCIV", 1994)]
    fn classify_roman(token: &str, value: i64) {
        assert_eq!(
            classify(token).unwrap(),
            Operand {
                value,
                system: NumeralSystem::Roman
            }
        );
    }

    #[test_case("IIII"; "invalid roman")]
    #[test_case("5V"; "mixed")]
    #[test_case("v"; "lower case roman")]
    #[test_case("1.5"; "decimal")]
    #[test_case("99999999999999999999"; "overflowing integer")]
    fn classify_undefined(token: &str) {
        assert_eq!(
            classify(token),
            Err(UndefinedNumeralSystem(token.to_string()))
        );
    }

    #[test]
    fn render_in_each_system() {
        assert_eq!(NumeralSystem::Arabic.render(-4).unwrap(), "-4");
        assert_eq!(NumeralSystem::Roman.render(7).unwrap(), "VII");
        assert_eq!(
            NumeralSystem::Roman.render(-4),
            Err(roman::Error::out_of_range(-4))
        );
    }

    #[test]
    fn system_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NumeralSystem::Roman).unwrap(),
            "\"roman\""
        );
    }
}
