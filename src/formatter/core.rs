//! Decimal digit handling shared by every notation
//!
//! Values are taken from the shortest round-trip representation of the
//! `f64`, so `0.1 + 0.2` rounds like the decimal `0.30000000000000004`
//! rather than like its binary expansion.

use crate::options::NumberFormatOptions;

/// A finite, non-negative decimal number as a digit string.
///
/// The value is `0.d1 d2 d3 ... × 10^int_len`: the first `int_len` digits are
/// the integer part. `int_len` may be negative (leading fraction zeros) or
/// larger than the digit count (trailing integer zeros).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DecimalDigits {
    digits: Vec<u8>,
    int_len: i32,
}

impl DecimalDigits {
    /// Digits of `|value|`; `value` must be finite
    pub fn from_f64(value: f64) -> Self {
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let mut result = DecimalDigits {
            digits: mantissa
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
            int_len: exponent + 1,
        };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.int_len -= leading as i32;
        }
        if self.digits.is_empty() {
            self.int_len = 0;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits before the decimal point, at least 1
    pub fn integer_digits(&self) -> i32 {
        self.int_len.max(1)
    }

    /// Decimal exponent of the leading digit, 0 for zero
    pub fn exponent(&self) -> i32 {
        if self.is_zero() { 0 } else { self.int_len - 1 }
    }

    /// Multiplies by `10^n`
    pub fn shift(&mut self, n: i32) {
        if !self.is_zero() {
            self.int_len += n;
        }
    }

    /// Keeps the first `keep` digits, rounding half away from zero
    fn round_at(&mut self, keep: i32) {
        if keep < 0 {
            *self = DecimalDigits::default();
            return;
        }
        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            loop {
                match self.digits.last_mut() {
                    Some(9) => {
                        self.digits.pop();
                    }
                    Some(d) => {
                        *d += 1;
                        break;
                    }
                    None => {
                        self.digits.push(1);
                        self.int_len += 1;
                        break;
                    }
                }
            }
        }
        self.normalize();
    }

    /// Rounds to at most `max` fraction digits
    pub fn round_fraction(&mut self, max: u32) {
        self.round_at(self.int_len + max as i32);
    }

    /// Rounds to at most `max` significant digits
    pub fn round_significant(&mut self, max: u32) {
        self.round_at(max as i32);
    }

    /// Renders integer and fraction digit strings, zero padded to the minimums
    pub fn render(&self, min_integer: u32, min_fraction: u32) -> (String, String) {
        let digit = |i: i32| -> char {
            let d = if i < 0 { None } else { self.digits.get(i as usize) };
            char::from(b'0' + d.copied().unwrap_or(0))
        };

        let mut integer: String = (0..self.int_len.max(0)).map(digit).collect();
        let width = min_integer.max(1) as usize;
        if integer.len() < width {
            integer.insert_str(0, &"0".repeat(width - integer.len()));
        }

        let frac_len = (self.digits.len() as i32 - self.int_len).max(min_fraction as i32);
        let fraction: String = (self.int_len..self.int_len + frac_len).map(digit).collect();
        (integer, fraction)
    }
}

/// Inserts `separator` between groups of three integer digits
pub(crate) fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.chars().count();
    let mut result = String::with_capacity(integer.len() + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Resolved rounding of the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    Fraction { min: u32, max: u32 },
    Significant { min: u32, max: u32 },
    /// Compact notation default: two significant digits below 100, else integers
    Compact,
}

/// Digit bounds after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitOptions {
    pub min_integer: u32,
    pub rounding: Rounding,
}

impl DigitOptions {
    /// Resolves digit options against the default fraction bounds of the style
    pub fn resolve(options: &NumberFormatOptions, default_min: u32, default_max: u32) -> Self {
        let min_integer = options.minimum_integer_digits.unwrap_or(1);
        let rounding = if options.minimum_significant_digits.is_some()
            || options.maximum_significant_digits.is_some()
        {
            let min = options.minimum_significant_digits.unwrap_or(1).clamp(1, 21);
            let max = options.maximum_significant_digits.unwrap_or(21).clamp(min, 21);
            Rounding::Significant { min, max }
        } else if options.minimum_fraction_digits.is_none()
            && options.maximum_fraction_digits.is_none()
            && options.notation == Some(crate::options::NotationStyle::Compact)
        {
            Rounding::Compact
        } else {
            let (min, max) = match (options.minimum_fraction_digits, options.maximum_fraction_digits) {
                (Some(min), Some(max)) => (min, max.max(min)),
                (Some(min), None) => (min, default_max.max(min)),
                (None, Some(max)) => (default_min.min(max), max),
                (None, None) => (default_min, default_max),
            };
            Rounding::Fraction { min: min.min(20), max: max.min(20) }
        };
        DigitOptions { min_integer, rounding }
    }

    /// Rounds `value` and renders its integer and fraction digits
    pub fn apply(&self, value: &mut DecimalDigits) -> (String, String) {
        let min_fraction = match self.rounding {
            Rounding::Fraction { min, max } => {
                value.round_fraction(max);
                min
            }
            Rounding::Significant { min, max } => {
                value.round_significant(max);
                (min as i32 - value.integer_digits_for_significant()).max(0) as u32
            }
            Rounding::Compact => {
                if value.int_len <= 2 {
                    value.round_significant(2);
                } else {
                    value.round_fraction(0);
                }
                0
            }
        };
        value.render(self.min_integer, min_fraction)
    }
}

impl DecimalDigits {
    /// Position of the leading significant digit, counting zero as one digit
    fn integer_digits_for_significant(&self) -> i32 {
        if self.is_zero() { 1 } else { self.int_len }
    }
}
