use std::{fmt, str::FromStr};

use super::Error;

/// A binary integer operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, truncating toward zero
    Divide,
}

impl Operator {
    /// The symbol this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// # Errors
    ///
    /// - [`Error::DivisionByZero`] if dividing by zero
    /// - [`Error::Overflow`] if the result does not fit in an `i64`
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, Error> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(Error::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(Error::Overflow {
            lhs,
            operator: self,
            rhs,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Operator::Add, 3, 4, 7; "add")]
    #[test_case(Operator::Subtract, 3, 4, -1; "subtract")]
    #[test_case(Operator::Multiply, 3, 4, 12; "multiply")]
    #[test_case(Operator::Divide, 9, 2, 4; "divide truncates")]
    #[test_case(Operator::Divide, -9, 2, -4; "divide truncates toward zero")]
    fn apply(operator: Operator, lhs: i64, rhs: i64, expected: i64) {
        assert_eq!(operator.apply(lhs, rhs).unwrap(), expected);
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(Operator::Divide.apply(10, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            Operator::Multiply.apply(i64::MAX, 2),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            Operator::Divide.apply(i64::MIN, -1),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn parse_round_trips_symbol() {
        for operator in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(operator.symbol().parse::<Operator>().unwrap(), operator);
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "%".parse::<Operator>(),
            Err(Error::UnknownOperator("%".to_string()))
        );
    }
}
