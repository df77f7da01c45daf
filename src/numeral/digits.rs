use super::NumeralError;

/// Largest supported digit count; the unit table tops out at position 73 (大數).
pub const MAX_DIGITS: usize = 73;

/// Decimal digits of a non-negative integer, indexed by position.
///
/// Position 1 is the ones place. There are never leading zeros, and zero
/// itself is the single digit `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    // digits[p - 1] is the digit at position p
    digits: Vec<u8>,
}

impl Digits {
    /// Split a machine integer into its decimal digits.
    pub fn segment(mut n: u128) -> Self {
        let mut digits = Vec::with_capacity(39);
        loop {
            digits.push((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        Self { digits }
    }

    /// Parse a decimal literal of arbitrary length (up to [`MAX_DIGITS`]).
    ///
    /// Accepts an optional sign and surrounding whitespace. Error indices are
    /// byte offsets into `text` as given. `-0` is zero; any
    /// other negative value is rejected rather than mangled.
    pub fn parse(text: &str) -> Result<Self, NumeralError> {
        let trimmed = text.trim();
        let indent = text.len() - text.trim_start().len();
        let (negative, body, offset) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..], indent + 1),
            Some(b'+') => (false, &trimmed[1..], indent + 1),
            _ => (false, trimmed, indent),
        };
        if body.is_empty() {
            return Err(NumeralError::Empty);
        }

        if let Some((index, ch)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(NumeralError::InvalidDigit {
                ch,
                index: index + offset,
            });
        }

        let significant = body.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self { digits: vec![0] });
        }
        if negative {
            return Err(NumeralError::Negative);
        }
        if significant.len() > MAX_DIGITS {
            return Err(NumeralError::TooLarge {
                digits: significant.len(),
                max: MAX_DIGITS,
            });
        }

        let digits = significant.bytes().rev().map(|b| b - b'0').collect();
        Ok(Self { digits })
    }

    pub fn count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Digit at a 1-based position; positions past the top read as zero.
    pub fn at(&self, position: usize) -> u8 {
        position
            .checked_sub(1)
            .and_then(|i| self.digits.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// The digits written in reverse order, as an integer (1234 -> 4321).
    ///
    /// Trailing zeros of the input vanish here, which is why the digit count
    /// travels alongside. `None` when the reversal does not fit in a `u128`.
    #[cfg(test)]
    pub fn reversed_value(&self) -> Option<u128> {
        self.digits
            .iter()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(u128::from(d)))
    }
}
