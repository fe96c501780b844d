use crate::formatter::core::{DecimalDigits, DigitOptions};
use crate::locale::LocaleSettings;

/// Format a number in scientific or engineering notation
///
/// Returns the mantissa digits and the exponent suffix, e.g. `4.2` and `E3`.
/// The mantissa has one integer digit, or one to three in engineering
/// notation where the exponent is a multiple of three.
pub(super) fn format_exponential(
    value: &mut DecimalDigits,
    digits: &DigitOptions,
    engineering: bool,
    locale: &LocaleSettings,
) -> (String, String) {
    let step = if engineering { 3 } else { 1 };
    let mut exponent = value.exponent().div_euclid(step) * step;
    value.shift(-exponent);

    let (mut integer, mut fraction) = digits.apply(value);

    // Rounding may carry the mantissa into the next power, e.g. 9.99 -> 10.0
    if value.exponent() >= step {
        value.shift(-step);
        exponent += step;
        (integer, fraction) = digits.apply(value);
    }

    let mut mantissa = integer;
    if !fraction.is_empty() {
        mantissa.push(locale.decimal_point);
        mantissa.push_str(&fraction);
    }

    let mut suffix = locale.exponent_symbol.clone();
    if exponent < 0 {
        suffix.push_str(&locale.minus_sign);
    }
    suffix.push_str(&exponent.unsigned_abs().to_string());
    (mantissa, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::core::Rounding;

    fn sci(value: f64, engineering: bool) -> String {
        let digits = DigitOptions {
            min_integer: 1,
            rounding: Rounding::Fraction { min: 0, max: 3 },
        };
        let (mantissa, suffix) = format_exponential(
            &mut DecimalDigits::from_f64(value),
            &digits,
            engineering,
            &LocaleSettings::default(),
        );
        mantissa + &suffix
    }

    #[test]
    fn test_scientific() {
        assert_eq!(sci(4200.0, false), "4.2E3");
        assert_eq!(sci(0.00042, false), "4.2E-4");
        assert_eq!(sci(0.0, false), "0E0");
        assert_eq!(sci(9.9999, false), "1E1");
    }

    #[test]
    fn test_engineering() {
        assert_eq!(sci(4200.0, true), "4.2E3");
        assert_eq!(sci(42000.0, true), "42E3");
        assert_eq!(sci(0.042, true), "42E-3");
    }
}
