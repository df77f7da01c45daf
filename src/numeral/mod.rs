//! Traditional Chinese numerals for non-negative integers.
//!
//! Digits are read in four-digit groups named 萬, 億, 兆 and so on up to 大數.
//! Runs of zeros collapse into a single 零, all-zero groups vanish along with
//! their unit, and a 1 in the tens place is written as a bare 十 when it opens
//! the number (`15` is 十五) or is its last non-zero digit (`110` is 一百十).

mod digits;
mod engine;
mod units;

#[cfg(test)]
mod tests;

pub use digits::MAX_DIGITS;

use digits::Digits;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("no digits given")]
    Empty,

    #[error("invalid character {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("negative numbers have no Chinese numeral here")]
    Negative,

    #[error("{digits} digits exceeds the largest unit ({max} digits)")]
    TooLarge { digits: usize, max: usize },

    #[error("failed to write numeral")]
    Sink(#[from] fmt::Error),
}

/// A non-negative integer that fits the unit table.
///
/// Formatting a `Numeral` with `{}` produces its Chinese form, so it can be
/// interpolated straight into any `fmt::Write` or `io::Write` sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    digits: Digits,
}

impl Numeral {
    pub fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        engine::emit(&self.digits, sink)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digits::parse(s).map(|digits| Self { digits })
    }
}

impl From<u128> for Numeral {
    fn from(n: u128) -> Self {
        Self {
            digits: Digits::segment(n),
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeral {
            fn from(n: $t) -> Self {
                Self::from(n as u128)
            }
        })*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);

impl TryFrom<i128> for Numeral {
    type Error = NumeralError;

    fn try_from(n: i128) -> Result<Self, Self::Error> {
        u128::try_from(n)
            .map(Self::from)
            .map_err(|_| NumeralError::Negative)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::try_from(i128::from(n))
    }
}

/// Write the Chinese numeral for `n` to `sink`.
pub fn convert<W: fmt::Write + ?Sized>(n: u128, sink: &mut W) -> fmt::Result {
    engine::emit(&Digits::segment(n), sink)
}

/// Like [`convert`], for decimal text of any length the unit table covers.
///
/// Input is validated in full before anything reaches the sink.
pub fn convert_decimal<W: fmt::Write + ?Sized>(
    text: &str,
    sink: &mut W,
) -> Result<(), NumeralError> {
    let numeral: Numeral = text.parse()?;
    numeral.write_to(sink)?;
    Ok(())
}

pub fn to_chinese(n: u128) -> String {
    Numeral::from(n).to_string()
}
