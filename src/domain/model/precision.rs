use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use super::error::{Error, InvalidPrecisionSnafu};

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 4;
pub const MAX_SIGNIFICANT_DIGITS: usize = 100;

// The exact decimal expansion of any f64 fits in 767 fractional digits once
// written in scientific notation.
const EXACT_FRACTION_DIGITS: usize = 767;

/// Number of significant digits (not decimal places) two coordinate values
/// must share to be considered the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Precision(usize);

impl Precision {
    pub fn new(digits: usize) -> Result<Self, Error> {
        if (1..=MAX_SIGNIFICANT_DIGITS).contains(&digits) {
            Ok(Precision(digits))
        } else {
            InvalidPrecisionSnafu { digits }.fail()
        }
    }

    pub fn digits(&self) -> usize {
        self.0
    }

    /// Renders `value` rounded to the configured number of significant digits,
    /// in scientific notation so that equal keys mean equal rounded values
    /// whatever the magnitude (`-23.55052` -> `-2.355e1` with 4 digits).
    ///
    /// Rounding works on the exact value of the float, and ties round away
    /// from zero (`-23.125` -> `-2.313e1`).
    pub fn key(&self, value: f64) -> String {
        // -0.0 and 0.0 must produce the same key.
        let value = if value == 0.0 { 0.0 } else { value };
        if !value.is_finite() {
            return value.to_string();
        }

        let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, value.abs());
        let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
        let mut exponent: i32 = exponent.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut kept = digits[..self.0].to_vec();
        // The expansion is exact, so the first dropped digit decides.
        if digits[self.0] >= 5 {
            match kept.iter().rposition(|d| *d != 9) {
                Some(pos) => {
                    kept[pos] += 1;
                    kept[pos + 1..].iter_mut().for_each(|d| *d = 0);
                }
                None => {
                    kept.iter_mut().for_each(|d| *d = 0);
                    kept[0] = 1;
                    exponent += 1;
                }
            }
        }

        let mut key = String::with_capacity(self.0 + 8);
        if value < 0.0 {
            key.push('-');
        }
        for (i, d) in kept.iter().enumerate() {
            if i == 1 {
                key.push('.');
            }
            key.push(char::from(b'0' + d));
        }
        format!("{}e{}", key, exponent)
    }

    pub fn matches(&self, lhs: f64, rhs: f64) -> bool {
        self.key(lhs) == self.key(rhs)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_SIGNIFICANT_DIGITS)
    }
}

impl TryFrom<usize> for Precision {
    type Error = Error;

    fn try_from(digits: usize) -> Result<Self, Self::Error> {
        Precision::new(digits)
    }
}

impl From<Precision> for usize {
    fn from(precision: Precision) -> usize {
        precision.0
    }
}
