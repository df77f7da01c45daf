use super::digits::Digits;
use super::units::{self, Place, Slot};
use std::fmt;

const DIGIT_GLYPHS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const ZERO: &str = DIGIT_GLYPHS[0];

/// Scratch state for a single conversion. Built fresh by every call to [`emit`].
struct EmissionState {
    remaining: usize,
    /// Nothing non-zero has been written yet.
    leading: bool,
    /// A run of zeros was skipped since the last non-zero digit.
    zero_pending: bool,
    /// The current group has written at least one digit.
    group_live: bool,
}

impl EmissionState {
    fn new(digit_count: usize) -> Self {
        Self {
            remaining: digit_count,
            leading: true,
            zero_pending: false,
            group_live: false,
        }
    }

    fn step<W: fmt::Write + ?Sized>(
        &mut self,
        digits: &Digits,
        position: usize,
        sink: &mut W,
    ) -> fmt::Result {
        let digit = digits.at(position);
        let slot = units::locate(position);

        if digit == 0 {
            if !self.leading {
                self.zero_pending = true;
            }
        } else {
            if self.zero_pending {
                sink.write_str(ZERO)?;
                self.zero_pending = false;
            }
            if !self.drops_one(digits, position, digit, slot) {
                sink.write_str(DIGIT_GLYPHS[usize::from(digit)])?;
            }
            if let Some(unit) = slot.place.glyph() {
                sink.write_str(unit)?;
            }
            self.leading = false;
            self.group_live = true;
        }

        if slot.place == Place::Ones {
            if self.group_live {
                if let Some(unit) = units::group_unit(slot.group) {
                    sink.write_str(unit)?;
                }
            }
            self.group_live = false;
        }
        Ok(())
    }

    /// A 1 in the tens place reads as a bare 十 when it opens the number or
    /// when it is the last non-zero digit of the number.
    fn drops_one(&self, digits: &Digits, position: usize, digit: u8, slot: Slot) -> bool {
        digit == 1
            && slot.place == Place::Ten
            && (self.leading || (1..position).all(|p| digits.at(p) == 0))
    }
}

/// Write the Chinese numeral for `digits` to `sink`, most significant digit first.
pub fn emit<W: fmt::Write + ?Sized>(digits: &Digits, sink: &mut W) -> fmt::Result {
    if digits.is_zero() {
        return sink.write_str(ZERO);
    }

    let mut state = EmissionState::new(digits.count());
    while state.remaining > 0 {
        state.step(digits, state.remaining, sink)?;
        state.remaining -= 1;
    }
    Ok(())
}
