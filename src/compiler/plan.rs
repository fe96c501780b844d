//! Resolved formatter pipeline
//!
//! A `FormatterPlan` is everything a formatter needs after the skeleton has
//! been parsed and mapped. Both the closure backend and the source backend
//! are built from it.

use tracing::debug;

use crate::errors::Diagnostic;
use crate::formatter::{NumberFormatter, transliterate};
use crate::locale::get_zero_digit;
use crate::mapper::get_number_format_options;
use crate::options::NumberFormatOptions;
use crate::types::{Affix, Precision, Skeleton, Unit};

use super::IntoSkeleton;

/// A numeric transformation applied before the primitive is called
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Multiply by the factor
    Scale(f64),
    /// Divide by 100; the primitive multiplies percent values back
    Percent,
}

impl Step {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Step::Scale(factor) => scale(value, factor),
            Step::Percent => percent(value),
        }
    }
}

pub(crate) fn scale(value: f64, factor: f64) -> f64 {
    value * factor
}

/// Divides by 100 by moving the exponent of the shortest decimal form,
/// so the primitive's shift by 2 restores the digits exactly
pub(crate) fn percent(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value / 100.0;
    }
    let text = format!("{value:e}");
    text.split_once('e')
        .and_then(|(mantissa, exponent)| {
            let exponent: i32 = exponent.parse().ok()?;
            format!("{mantissa}e{}", exponent - 2).parse().ok()
        })
        .unwrap_or(value / 100.0)
}

/// Wraps `number` in the affix pair selected by the sign of `value`
pub(crate) fn apply_affix(
    value: f64,
    number: &str,
    pos: &(String, String),
    neg: Option<&(String, String)>,
) -> String {
    let (prefix, suffix) = match neg {
        Some(neg) if value < 0.0 => neg,
        _ => pos,
    };
    format!("{prefix}{number}{suffix}")
}

/// Number of decimals in the shortest representation of `increment`
pub(crate) fn increment_decimals(increment: f64) -> u32 {
    let text = increment.to_string();
    text.split_once('.').map_or(0, |(_, fraction)| fraction.len() as u32)
}

/// The resolved pipeline of a formatter
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterPlan {
    pub locale: String,
    pub options: NumberFormatOptions,
    /// Applied in order to the input value
    pub steps: Vec<Step>,
    /// Zero digit of a numbering system to transliterate the output into
    pub zero_digit: Option<char>,
    pub affix: Option<Affix>,
}

impl FormatterPlan {
    pub fn apply_steps(&self, value: f64) -> f64 {
        self.steps.iter().fold(value, |v, step| step.apply(v))
    }

    /// Formats `value` through `formatter`
    pub fn format_with(&self, formatter: &dyn NumberFormatter, value: f64) -> String {
        let number = formatter.format(&self.locale, &self.options, self.apply_steps(value));
        let number = match self.zero_digit {
            Some(zero) => transliterate(&number, zero),
            None => number,
        };
        match &self.affix {
            Some(affix) => apply_affix(value, &number, &affix.pos, affix.neg.as_ref()),
            None => number,
        }
    }
}

/// Compile a skeleton into a formatter plan
///
/// Diagnostics of the skeleton parser are reported first, then those of
/// the options mapper, then numbering system lookups.
pub fn compile(
    locale: &str,
    skeleton: impl IntoSkeleton,
    mut on_error: impl FnMut(Diagnostic),
) -> FormatterPlan {
    let skeleton: Skeleton = skeleton.into_skeleton(&mut on_error);
    let mut options = get_number_format_options(&skeleton, &mut on_error);

    let mut steps = Vec::new();
    if let Some(factor) = skeleton.scale {
        steps.push(Step::Scale(factor));
    }
    // The value is left alone; only the rendered fraction width follows the increment
    if let Some(Precision::Increment(increment)) = skeleton.precision {
        let decimals = increment_decimals(increment);
        options.minimum_fraction_digits = Some(decimals);
        options.maximum_fraction_digits = Some(decimals);
    }
    if skeleton.unit == Some(Unit::Percent) {
        steps.push(Step::Percent);
    }

    let zero_digit = match skeleton.numbering_system.as_deref() {
        None | Some("latn") => None,
        Some(name) => {
            let zero = get_zero_digit(name);
            if zero.is_none() {
                on_error(Diagnostic::unsupported("numbering-system", Some(name.to_string())));
            }
            zero
        }
    };

    let plan = FormatterPlan {
        locale: locale.to_string(),
        options,
        steps,
        zero_digit,
        affix: skeleton.affix,
    };
    debug!(locale, steps = ?plan.steps, zero_digit = ?plan.zero_digit, "compiled formatter plan");
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::LocaleFormatter;

    #[test]
    fn test_percent_keeps_decimal_digits() {
        assert_eq!(percent(1.005).to_string(), "0.01005");
        assert_eq!(percent(0.285).to_string(), "0.00285");
        assert_eq!(percent(-42.0), -0.42);
        assert_eq!(percent(0.0), 0.0);
        assert!(percent(f64::NAN).is_nan());
        assert_eq!(percent(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_increment_decimals() {
        assert_eq!(increment_decimals(0.05), 2);
        assert_eq!(increment_decimals(50.0), 0);
        assert_eq!(increment_decimals(0.125), 3);
    }

    #[test]
    fn test_affix_selection() {
        let pos = ("".to_string(), "".to_string());
        let neg = ("(".to_string(), ")".to_string());
        assert_eq!(apply_affix(-1.0, "1", &pos, Some(&neg)), "(1)");
        assert_eq!(apply_affix(-0.0, "0", &pos, Some(&neg)), "0");
        assert_eq!(apply_affix(-1.0, "1", &pos, None), "1");
    }

    #[test]
    fn test_steps_order() {
        let plan = compile("en", "percent precision-increment/5 scale/100", |_| {});
        assert_eq!(plan.steps, vec![Step::Scale(100.0), Step::Percent]);
        assert_eq!(plan.options.maximum_fraction_digits, Some(0));
        assert_eq!(plan.format_with(&LocaleFormatter::new(), 0.42), "42%");
    }

    #[test]
    fn test_increment_does_not_move_the_value() {
        let mut errors = Vec::new();
        let plan = compile("en", "precision-increment/0.05", |e| errors.push(e));
        assert!(plan.steps.is_empty());
        assert_eq!(plan.format_with(&LocaleFormatter::new(), 0.42), "0.42");
        assert_eq!(plan.format_with(&LocaleFormatter::new(), 0.4), "0.40");
        assert_eq!(
            errors,
            vec![Diagnostic::unsupported("precision-increment", Some("0.05".into()))]
        );
    }

    #[test]
    fn test_unknown_numbering_system() {
        let mut errors = Vec::new();
        let plan = compile("en", "numbering-system/abcd", |e| errors.push(e));
        assert_eq!(plan.zero_digit, None);
        assert_eq!(
            errors,
            vec![Diagnostic::unsupported("numbering-system", Some("abcd".into()))]
        );
    }
}
