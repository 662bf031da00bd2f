use std::{ops::RangeInclusive, path::Path};

use serde::{Deserialize, Serialize};

/// Configuration for the calculator.
///
/// Controls which operand values are accepted. The defaults accept operands
/// from 1 to 10 inclusive, in either numeral system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The smallest accepted operand, inclusive.
    min_operand: i64,

    /// The largest accepted operand, inclusive.
    max_operand: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_operand: default_min_operand(),
            max_operand: default_max_operand(),
        }
    }
}

impl Config {
    /// Creates a configuration with the given operand bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_operand` is greater than `max_operand`.
    pub fn new(min_operand: i64, max_operand: i64) -> Result<Self, String> {
        let config = Self {
            min_operand,
            max_operand,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the TOML content is
    /// invalid, or if the operand bounds are inverted.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    fn validate(&self) -> Result<(), String> {
        if self.min_operand > self.max_operand {
            return Err(format!(
                "Invalid operand bounds: min_operand ({}) is greater than max_operand ({})",
                self.min_operand, self.max_operand
            ));
        }
        Ok(())
    }

    /// Returns the accepted operand range.
    #[must_use]
    pub const fn operand_bounds(&self) -> RangeInclusive<i64> {
        self.min_operand..=self.max_operand
    }
}

const fn default_min_operand() -> i64 {
    1
}

const fn default_max_operand() -> i64 {
    10
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_min_operand")]
        min_operand: i64,

        #[serde(default = "default_max_operand")]
        max_operand: i64,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                min_operand,
                max_operand,
            } => Self {
                min_operand,
                max_operand,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            min_operand: config.min_operand,
            max_operand: config.max_operand,
        }
    }
}
