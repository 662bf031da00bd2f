//! Arabic and Roman Numeral Calculator
//!
//! Evaluates binary expressions such as `III + IV` or `6 / 4`. Each operand's
//! numeral system is detected, both operands must share it, and the result is
//! rendered back in that system.

/// Numeral systems, operand classification and the Roman codec.
pub mod numeral;
pub use numeral::{NumeralSystem, Operand, classify, roman::Roman};

/// Expression parsing and evaluation.
pub mod expression;
pub use expression::{Evaluation, Expression, Operator};

mod config;
pub use config::Config;
