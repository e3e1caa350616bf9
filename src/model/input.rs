use std::fmt;

/// Text inputs the hub reads from the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Player1Name,
    Player2Name,
    Username,
    Multiplier,
    CipherKey,
    Plaintext,
    Ciphertext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Multiplicand,
}

/// Upper multiplicand of a multiplication table, always within
/// `TableBound::MIN..=TableBound::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TableBound(u8);

impl TableBound {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 24;
    pub const DEFAULT: u8 = 12;

    /// Clamps any slider reading into the valid range.
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(value as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for TableBound {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// An integer of any magnitude, held as its decimal digits.
///
/// Digits carry no leading zeros and zero is never negative, so `Display`
/// prints the canonical form (`"+007"` shows as `7`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplier {
    negative: bool,
    digits: String,
}

impl Multiplier {
    /// Parses an optionally signed run of ASCII digits. Surrounding
    /// whitespace is the caller's concern.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Some(Self::zero());
        }
        Some(Self {
            negative,
            digits: digits.to_string(),
        })
    }

    fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Long multiplication by a small factor.
    pub fn times(&self, factor: u8) -> Self {
        if factor == 0 || self.digits == "0" {
            return Self::zero();
        }

        let factor = u32::from(factor);
        let mut carry = 0u32;
        let mut reversed = String::with_capacity(self.digits.len() + 3);
        for digit in self.digits.bytes().rev() {
            let value = u32::from(digit - b'0') * factor + carry;
            reversed.push(decimal_char(value % 10));
            carry = value / 10;
        }
        while carry > 0 {
            reversed.push(decimal_char(carry % 10));
            carry /= 10;
        }

        Self {
            negative: self.negative,
            digits: reversed.chars().rev().collect(),
        }
    }
}

fn decimal_char(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{Multiplier, TableBound};

    #[test]
    fn multiplier_parses_any_length() {
        let big = Multiplier::parse("99999999999999999999").unwrap();
        assert_eq!(big.to_string(), "99999999999999999999");
        assert_eq!(big.times(2).to_string(), "199999999999999999998");
        assert_eq!(big.times(24).to_string(), "2399999999999999999976");
    }

    #[test]
    fn multiplier_canonical_form() {
        assert_eq!(Multiplier::parse("+007").unwrap().to_string(), "7");
        assert_eq!(Multiplier::parse("-0").unwrap().to_string(), "0");
        assert_eq!(Multiplier::parse("-12").unwrap().times(3).to_string(), "-36");
        assert_eq!(Multiplier::parse("0").unwrap().times(9).to_string(), "0");
    }

    #[test]
    fn multiplier_rejects_non_digits() {
        for text in ["", "-", "+", "1.5", "1_000", "12b", "--3", " 4", "٣"] {
            assert_eq!(Multiplier::parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn clamps_into_range() {
        assert_eq!(TableBound::clamped(0).get(), 1);
        assert_eq!(TableBound::clamped(-40).get(), 1);
        assert_eq!(TableBound::clamped(7).get(), 7);
        assert_eq!(TableBound::clamped(24).get(), 24);
        assert_eq!(TableBound::clamped(99).get(), 24);
    }
}
