//! Binary expressions of the form `operand operator operand`.

use std::{fmt, ops::RangeInclusive};

use serde::Serialize;

use crate::numeral::{self, NumeralSystem, Operand, UndefinedNumeralSystem, roman};

mod operator;
pub use operator::Operator;

/// Errors that can occur while parsing or evaluating an expression.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The line did not split into exactly three tokens.
    #[error("Must be a binary operation 'operand operator operand', got {0} token(s)")]
    TokenCount(usize),

    /// An operand is neither Arabic nor Roman.
    #[error(transparent)]
    Numeral(#[from] UndefinedNumeralSystem),

    /// An operand is outside the configured bounds.
    #[error("Operand {value} must be in boundaries [{min}; {max}]")]
    OperandOutOfBounds {
        /// The rejected operand value.
        value: i64,
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },

    /// The operands were written in different numeral systems.
    #[error("Operands should have the same numeral system, got {lhs} and {rhs}")]
    MixedNumeralSystems {
        /// System of the left operand.
        lhs: NumeralSystem,
        /// System of the right operand.
        rhs: NumeralSystem,
    },

    /// The operator symbol is not one of `+ - * /`.
    #[error("Operation '{0}' not found")]
    UnknownOperator(String),

    /// The divisor is zero.
    #[error("Could not divide by 0")]
    DivisionByZero,

    /// The result does not fit in an `i64`.
    #[error("Integer overflow evaluating {lhs} {operator} {rhs}")]
    Overflow {
        /// Left operand.
        lhs: i64,
        /// The operator applied.
        operator: Operator,
        /// Right operand.
        rhs: i64,
    },

    /// The result cannot be written in the operands' numeral system.
    #[error(transparent)]
    Render(#[from] roman::Error),
}

/// A parsed and validated binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    lhs: Operand,
    operator: Operator,
    rhs: Operand,
}

impl Expression {
    /// Parse a line into an expression.
    ///
    /// The line is upper-cased and split on whitespace. Both operands must lie
    /// within `bounds` and share a numeral system.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not exactly three tokens, an operand
    /// cannot be classified or is out of bounds, the operands use different
    /// numeral systems, or the operator is unknown.
    pub fn parse(line: &str, bounds: &RangeInclusive<i64>) -> Result<Self, Error> {
        let line = line.to_uppercase();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [lhs, operator, rhs] = tokens.as_slice() else {
            return Err(Error::TokenCount(tokens.len()));
        };

        let lhs = Self::operand(lhs, bounds)?;
        let rhs = Self::operand(rhs, bounds)?;

        if lhs.system != rhs.system {
            return Err(Error::MixedNumeralSystems {
                lhs: lhs.system,
                rhs: rhs.system,
            });
        }

        let operator = operator.parse()?;

        Ok(Self { lhs, operator, rhs })
    }

    fn operand(token: &str, bounds: &RangeInclusive<i64>) -> Result<Operand, Error> {
        let operand = numeral::classify(token)?;
        if !bounds.contains(&operand.value) {
            return Err(Error::OperandOutOfBounds {
                value: operand.value,
                min: *bounds.start(),
                max: *bounds.end(),
            });
        }
        Ok(operand)
    }

    /// The numeral system shared by both operands.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        self.lhs.system
    }

    /// The operator.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Compute the result and render it in the operands' numeral system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] or [`Error::Overflow`] from the
    /// arithmetic, or [`Error::Render`] if a Roman result is outside 1..=3999.
    pub fn evaluate(&self) -> Result<Evaluation, Error> {
        let value = self.operator.apply(self.lhs.value, self.rhs.value)?;
        let system = self.system();
        let result = system.render(value)?;
        tracing::debug!(expression = %self, value, %result, "evaluated");
        Ok(Evaluation {
            value,
            system,
            result,
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.lhs.value, self.operator, self.rhs.value
        )
    }
}

/// The outcome of evaluating an [`Expression`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The numeric result.
    pub value: i64,
    /// The numeral system the result is rendered in.
    pub system: NumeralSystem,
    /// The rendered result.
    pub result: String,
}
