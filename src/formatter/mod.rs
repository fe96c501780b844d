//! Locale-aware number formatting primitive
//!
//! The formatter compiler only ever calls the `NumberFormatter` trait.
//! `LocaleFormatter` is the built-in implementation over the embedded
//! locale tables; any other implementation can be plugged in instead.

mod affixes;
pub(crate) mod core;
mod compact;
mod exponential;

use std::collections::HashMap;

use crate::locale::{LocaleManager, LocaleSettings, resolve_locale_settings};
use crate::options::*;

use self::affixes::{SignMark, apply_sign, sign_mark};
use self::core::{DecimalDigits, DigitOptions, group_digits};

/// Formats a number for a locale according to an options record
pub trait NumberFormatter: Send + Sync {
    fn format(&self, locale: &str, options: &NumberFormatOptions, value: f64) -> String;
}

/// Built-in formatter over the embedded locale tables
///
/// # Examples
/// ```
/// use number_skeleton::{LocaleFormatter, NumberFormatOptions, NumberFormatter, Style};
///
/// let options = NumberFormatOptions {
///     style: Some(Style::Currency),
///     currency: Some("CAD".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(LocaleFormatter::new().format("en", &options, 42.0), "CA$42.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleFormatter {
    overrides: HashMap<String, LocaleSettings>,
}

impl LocaleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `settings` for the locale tag `tag` instead of the embedded data
    pub fn with_locale(mut self, tag: impl Into<String>, settings: LocaleSettings) -> Self {
        self.overrides.insert(tag.into(), settings);
        self
    }

    fn settings(&self, tag: &str) -> LocaleSettings {
        match self.overrides.get(tag) {
            Some(settings) => settings.clone(),
            None => resolve_locale_settings(tag),
        }
    }
}

/// Default fraction digit bounds of a style
fn default_fraction_digits(options: &NumberFormatOptions) -> (u32, u32) {
    match options.style {
        Some(Style::Currency) => {
            let digits = options
                .currency
                .as_deref()
                .and_then(|code| LocaleManager::get().currency(code))
                .map_or(2, |data| data.digits);
            (digits, digits)
        }
        Some(Style::Percent) => (0, 0),
        _ => (0, 3),
    }
}

/// Replaces ASCII digits with the digits of a numbering system
pub(crate) fn transliterate(text: &str, zero: char) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(zero as u32 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

impl NumberFormatter for LocaleFormatter {
    fn format(&self, locale: &str, options: &NumberFormatOptions, value: f64) -> String {
        let settings = self.settings(locale);
        let negative = value.is_sign_negative() && !value.is_nan();
        let style = options.style.unwrap_or(Style::Decimal);

        let mut zero = false;
        let number = if value.is_nan() {
            settings.nan_symbol.clone()
        } else if value.is_infinite() {
            settings.infinity_symbol.clone()
        } else {
            let mut digits = DecimalDigits::from_f64(value);
            if style == Style::Percent {
                digits.shift(2);
            }
            let (min, max) = default_fraction_digits(options);
            let digit_options = DigitOptions::resolve(options, min, max);
            let grouping = options.use_grouping.unwrap_or(true);

            let join = |integer: String, fraction: String| {
                let mut out = if grouping {
                    group_digits(&integer, settings.group_separator)
                } else {
                    integer
                };
                if !fraction.is_empty() {
                    out.push(settings.decimal_point);
                    out.push_str(&fraction);
                }
                out
            };

            let text = match options.notation {
                Some(NotationStyle::Scientific) | Some(NotationStyle::Engineering) => {
                    let engineering = options.notation == Some(NotationStyle::Engineering);
                    let (mantissa, exponent) = exponential::format_exponential(
                        &mut digits,
                        &digit_options,
                        engineering,
                        &settings,
                    );
                    mantissa + &exponent
                }
                Some(NotationStyle::Compact) => {
                    let display = options.compact_display.unwrap_or(CompactDisplay::Short);
                    let (integer, fraction, suffix) =
                        compact::format_compact(&mut digits, &digit_options, display, &settings);
                    join(integer, fraction) + &suffix
                }
                Some(NotationStyle::Standard) | None => {
                    let (integer, fraction) = digit_options.apply(&mut digits);
                    join(integer, fraction)
                }
            };
            zero = digits.is_zero();
            text
        };

        let number = match settings
            .numbering_system
            .as_deref()
            .and_then(|ns| LocaleManager::get().zero_digit(ns))
        {
            Some(zero_digit) => transliterate(&number, zero_digit),
            None => number,
        };

        let formatted = match (style, &options.currency, &options.unit) {
            (Style::Currency, Some(code), _) => affixes::currency(&number, code, options, &settings),
            (Style::Percent, _, _) => affixes::percent(&number, &settings),
            (Style::Unit, _, Some(unit)) => affixes::unit(&number, unit, options),
            _ => number,
        };

        let display = options.sign_display.unwrap_or(SignDisplay::Auto);
        let mark = sign_mark(negative, zero, display);
        let accounting = style == Style::Currency
            && options.currency_sign == Some(CurrencySign::Accounting)
            && mark == SignMark::Minus;
        apply_sign(formatted, mark, accounting, &settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(options: &NumberFormatOptions, value: f64) -> String {
        LocaleFormatter::new().format("en", options, value)
    }

    #[test]
    fn test_decimal_defaults() {
        let options = NumberFormatOptions::default();
        assert_eq!(fmt(&options, 42.0), "42");
        assert_eq!(fmt(&options, 4200.0), "4,200");
        assert_eq!(fmt(&options, 1.23456), "1.235");
        assert_eq!(fmt(&options, -0.5), "-0.5");
        assert_eq!(fmt(&options, f64::NAN), "NaN");
        assert_eq!(fmt(&options, f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_percent_multiplies_by_shifting() {
        let options = NumberFormatOptions {
            style: Some(Style::Percent),
            ..Default::default()
        };
        assert_eq!(fmt(&options, 0.42), "42%");
        assert_eq!(fmt(&options, 0.075), "8%");
    }

    #[test]
    fn test_currency_minor_digits() {
        let options = NumberFormatOptions {
            style: Some(Style::Currency),
            currency: Some("JPY".into()),
            ..Default::default()
        };
        assert_eq!(fmt(&options, 1234.5), "¥1,235");
    }

    #[test]
    fn test_sign_display() {
        let options = NumberFormatOptions {
            sign_display: Some(SignDisplay::ExceptZero),
            ..Default::default()
        };
        assert_eq!(fmt(&options, 42.0), "+42");
        assert_eq!(fmt(&options, 0.0), "0");
        assert_eq!(fmt(&options, -0.0001), "0");
    }

    #[test]
    fn test_grouping_off() {
        let options = NumberFormatOptions {
            use_grouping: Some(false),
            ..Default::default()
        };
        assert_eq!(fmt(&options, 4200.0), "4200");
    }

    #[test]
    fn test_other_locales() {
        let options = NumberFormatOptions {
            style: Some(Style::Currency),
            currency: Some("EUR".into()),
            ..Default::default()
        };
        let formatter = LocaleFormatter::new();
        assert_eq!(formatter.format("de", &options, 1234.5), "1.234,50\u{a0}€");
        assert_eq!(formatter.format("ar", &NumberFormatOptions::default(), 42.0), "٤٢");
    }

    #[test]
    fn test_locale_override() {
        let formatter = LocaleFormatter::new().with_locale(
            "x-custom",
            LocaleSettings::default().with_decimal_point(',').with_group_separator(' '),
        );
        let options = NumberFormatOptions::default();
        assert_eq!(formatter.format("x-custom", &options, 1234.5), "1 234,5");
    }
}
