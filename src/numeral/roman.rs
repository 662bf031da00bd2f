//! Roman numeral codec.
//!
//! Numerals are read most-significant atom first. Subtractive pairs (`CM`,
//! `CD`, `XC`, `XL`, `IX`, `IV`) are atoms of their own in [`DIGITS`], so
//! both directions reduce to a walk over one descending table.

use std::{fmt, num::NonZeroU16, str::FromStr};

/// A single Roman numeral atom: a plain digit or a subtractive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    /// The one or two letter symbol, e.g. `"M"` or `"CM"`.
    pub symbol: &'static str,
    /// The value the symbol stands for.
    pub value: u16,
}

impl Digit {
    const fn new(symbol: &'static str, value: u16) -> Self {
        Self { symbol, value }
    }
}

/// Every Roman atom, strictly descending by value.
///
/// Table order is significant: the decoder takes the first atom that
/// prefixes the input, so `CM` must come before `C`.
pub const DIGITS: [Digit; 13] = [
    Digit::new("M", 1000),
    Digit::new("CM", 900),
    Digit::new("D", 500),
    Digit::new("CD", 400),
    Digit::new("C", 100),
    Digit::new("XC", 90),
    Digit::new("L", 50),
    Digit::new("XL", 40),
    Digit::new("X", 10),
    Digit::new("IX", 9),
    Digit::new("V", 5),
    Digit::new("IV", 4),
    Digit::new("I", 1),
];

/// The smallest value with a Roman representation.
pub const MIN: u16 = 1;

/// The largest value with a Roman representation.
pub const MAX: u16 = 3999;

/// The most times the same atom may appear in a row.
const MAX_REPEAT: usize = 3;

/// Errors produced while decoding or encoding Roman numerals.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input contains characters that do not form a Roman atom.
    #[error("Malformed Roman numeral '{numeral}': unknown digits in '{remainder}'")]
    Malformed {
        /// The full input.
        numeral: String,
        /// The unparsed suffix starting at the offending position.
        remainder: String,
    },

    /// A smaller atom precedes a larger one.
    #[error("Invalid digit order in '{numeral}': {previous} stays before {digit}")]
    Ordering {
        /// The full input.
        numeral: String,
        /// Value of the preceding atom.
        previous: u16,
        /// Value of the atom that broke the ordering.
        digit: u16,
    },

    /// The same atom appears more than three times in a row.
    #[error("Invalid Roman numeral '{numeral}': there can't be more than 3 equal digits {digit} in a row")]
    Repetition {
        /// The full input.
        numeral: String,
        /// Value of the repeated atom.
        digit: u16,
    },

    /// The value has no Roman representation.
    #[error("{value} is beyond the Roman boundaries [{min}; {max}]")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest representable value.
        min: u16,
        /// Largest representable value.
        max: u16,
    },
}

impl Error {
    /// An [`Error::OutOfRange`] for `value` against the representable range.
    #[must_use]
    pub const fn out_of_range(value: i64) -> Self {
        Self::OutOfRange {
            value,
            min: MIN,
            max: MAX,
        }
    }
}

/// Decode a Roman numeral into its value.
///
/// Decoding is case-sensitive; callers normalise to upper case first.
///
/// The result is not range-checked against [`MAX`]: non-canonical inputs such
/// as `XCXC` are accepted and may sum past it. Use [`Roman::from_str`] when the
/// value must be representable.
///
/// # Errors
///
/// - [`Error::Malformed`] if the input is empty or contains anything other
///   than Roman atoms
/// - [`Error::Ordering`] if an atom is larger than the one before it
/// - [`Error::Repetition`] if an atom value appears four times in a row
pub fn decode(numeral: &str) -> Result<u32, Error> {
    if numeral.is_empty() {
        return Err(Error::Malformed {
            numeral: String::new(),
            remainder: String::new(),
        });
    }

    let mut total = 0;
    let mut rest = numeral;
    let mut previous = MAX;
    let mut repeated = 0;

    while !rest.is_empty() {
        let Some(digit) = DIGITS.iter().find(|digit| rest.starts_with(digit.symbol)) else {
            return Err(Error::Malformed {
                numeral: numeral.to_string(),
                remainder: rest.to_string(),
            });
        };

        if digit.value > previous {
            return Err(Error::Ordering {
                numeral: numeral.to_string(),
                previous,
                digit: digit.value,
            });
        }

        if digit.value == previous {
            repeated += 1;
        } else {
            repeated = 1;
        }
        if repeated > MAX_REPEAT {
            return Err(Error::Repetition {
                numeral: numeral.to_string(),
                digit: digit.value,
            });
        }

        previous = digit.value;
        total += u32::from(digit.value);
        rest = &rest[digit.symbol.len()..];
    }

    Ok(total)
}

/// Encode a value as a canonical Roman numeral.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `MIN <= value <= MAX`. Roman numerals
/// have no zero and no negative numbers.
pub fn encode(value: i64) -> Result<String, Error> {
    let roman = Roman::new(value)?;
    Ok(render(roman.value()))
}

/// Greedy atom selection: each atom is taken as often as it still fits.
///
/// One pass over the table; `I` ends the pass, so any remainder is consumed.
fn render(mut value: u16) -> String {
    let mut numeral = String::with_capacity(15);
    for digit in &DIGITS {
        while value >= digit.value {
            numeral.push_str(digit.symbol);
            value -= digit.value;
        }
    }
    numeral
}

/// A value guaranteed to have a Roman representation.
///
/// [`fmt::Display`] renders the canonical numeral and [`FromStr`] parses one,
/// so a `Roman` round-trips through its string form.
///
/// ```
/// use numcalc::numeral::roman::Roman;
///
/// let year: Roman = "MCMXCIV".parse().unwrap();
/// assert_eq!(year.value(), 1994);
/// assert_eq!(year.to_string(), "MCMXCIV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roman(NonZeroU16);

impl Roman {
    /// Create a `Roman` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the value is outside [`MIN`]..=[`MAX`].
    pub fn new(value: i64) -> Result<Self, Error> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN..=MAX).contains(v))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(Error::out_of_range(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self.value()))
    }
}

impl FromStr for Roman {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(i64::from(decode(s)?))
    }
}

impl TryFrom<i64> for Roman {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roman> for u16 {
    fn from(roman: Roman) -> Self {
        roman.value()
    }
}
