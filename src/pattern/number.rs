//! Numeric run of a legacy pattern
//!
//! Turns the digit, separator and exponent tokens of the positive
//! subpattern into grouping, integer width, precision and notation.

use tracing::trace;

use crate::errors::PatternError;
use crate::pattern::tokens::PatternToken;
use crate::types::*;

#[derive(Debug, Default)]
struct NumberRun {
    has_groups: bool,
    has_decimal: bool,
    int_optional: u32,
    int_digits: String,
    frac_digits: String,
    frac_optional: u32,
    significant: Option<(u32, u32)>,
    exponent: Option<(u32, bool)>,
}

impl NumberRun {
    fn push(&mut self, token: &PatternToken) -> Result<(), PatternError> {
        match token {
            PatternToken::Optional(n) if self.has_decimal => self.frac_optional += n,
            PatternToken::Optional(n) => {
                if !self.int_digits.is_empty() {
                    return Err(PatternError::HashAfterIntegerDigits);
                }
                self.int_optional += n;
            }
            PatternToken::Digits(digits) if self.has_decimal => {
                if self.frac_optional > 0 {
                    return Err(PatternError::DigitsAfterHashInFraction);
                }
                self.frac_digits.push_str(digits);
            }
            PatternToken::Digits(digits) => self.int_digits.push_str(digits),
            PatternToken::Significant { min, width } => {
                if self.significant.is_some() {
                    return Err(PatternError::MultiplePrecisions);
                }
                self.significant = Some((*min, *width));
            }
            PatternToken::Group => {
                if self.exponent.is_some() {
                    return Err(PatternError::GroupingInExponential);
                }
                self.has_groups = true;
            }
            PatternToken::DecimalPoint => {
                if self.has_decimal {
                    return Err(PatternError::MultipleDecimalSeparators);
                }
                self.has_decimal = true;
            }
            PatternToken::Exponent { digits, plus } => {
                if self.exponent.is_some() {
                    return Err(PatternError::MultipleExponents);
                }
                if self.has_groups {
                    return Err(PatternError::GroupingInExponential);
                }
                self.exponent = Some((*digits, *plus));
            }
            _ => {}
        }
        Ok(())
    }

    /// Value of the required digits read as a decimal, e.g. `0.05` for `#,##0.05`
    fn increment(&self) -> f64 {
        let int = if self.int_digits.is_empty() { "0" } else { &self.int_digits };
        let text = if self.frac_digits.is_empty() {
            int.to_string()
        } else {
            format!("{int}.{}", self.frac_digits)
        };
        text.parse().unwrap_or(0.0)
    }

    fn int_len(&self) -> u32 {
        self.int_digits.len() as u32
    }

    fn frac_len(&self) -> u32 {
        self.frac_digits.len() as u32
    }
}

/// Applies the numeric tokens of a subpattern to `skeleton`
pub(super) fn apply_number_run<'t>(
    tokens: impl IntoIterator<Item = &'t PatternToken>,
    skeleton: &mut Skeleton,
) -> Result<(), PatternError> {
    let mut run = NumberRun::default();
    for token in tokens {
        run.push(token)?;
    }
    trace!(?run, "pattern number run");

    let increment = run.increment();
    if run.significant.is_some() && (!run.frac_digits.is_empty() || increment != 0.0) {
        return Err(PatternError::MultiplePrecisions);
    }

    if run.has_groups {
        skeleton.group = Some(Group::Auto);
    } else if run.int_optional + run.int_len() > 3 {
        skeleton.group = Some(Group::Off);
    }

    if let Some((min, width)) = run.significant {
        skeleton.precision = Some(Precision::Fraction(FractionPrecision {
            min_significant: Some(min),
            max_significant: Some(width),
            ..Default::default()
        }));
    }
    if increment > 0.0 {
        skeleton.precision = Some(Precision::Increment(increment));
    }

    let Some((exp_digits, exp_plus)) = run.exponent else {
        if run.int_len() > 1 {
            skeleton.integer_width = Some(IntegerWidth {
                min: run.int_len(),
                ..Default::default()
            });
        }
        if skeleton.precision.is_none() && (run.frac_len() > 0 || run.frac_optional > 0) {
            skeleton.precision = Some(Precision::Fraction(FractionPrecision {
                min_fraction: Some(run.frac_len()),
                max_fraction: Some(run.frac_len() + run.frac_optional),
                ..Default::default()
            }));
        }
        return Ok(());
    };

    skeleton.notation = Some(Notation::Scientific(ExponentFormat {
        exp_digits: Some(exp_digits),
        exp_sign: Some(if exp_plus { Sign::Always } else { Sign::Auto }),
        source: None,
    }));

    match &skeleton.precision {
        Some(Precision::Fraction(_)) => {
            skeleton.integer_width = Some(IntegerWidth {
                min: 1,
                max: Some(1),
                source: None,
            });
        }
        precision => {
            skeleton.integer_width = Some(if run.int_optional > 0 {
                IntegerWidth {
                    min: 1,
                    max: Some(run.int_optional + run.int_len()),
                    source: None,
                }
            } else {
                IntegerWidth {
                    min: run.int_len().max(1),
                    ..Default::default()
                }
            });
            if precision.is_none() {
                let required = run.int_len() + run.frac_len();
                let digits = if run.has_decimal {
                    FractionPrecision {
                        min_significant: (required > 1).then_some(required),
                        max_significant: Some(required.max(1) + run.frac_optional),
                        ..Default::default()
                    }
                } else {
                    FractionPrecision {
                        max_significant: (required > 0).then_some(required),
                        ..Default::default()
                    }
                };
                if digits.has_significant() {
                    skeleton.precision = Some(Precision::Fraction(digits));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::tokens::tokenize;

    fn run(pattern: &str) -> Result<Skeleton, PatternError> {
        let mut skeleton = Skeleton::default();
        apply_number_run(&tokenize(pattern), &mut skeleton)?;
        Ok(skeleton)
    }

    #[test]
    fn test_increment_from_required_digits() {
        let sk = run("#,##0.05").unwrap();
        assert_eq!(sk.precision, Some(Precision::Increment(0.05)));
        assert_eq!(sk.integer_width, None);
        let sk = run("#,##0.00").unwrap();
        assert!(matches!(sk.precision, Some(Precision::Fraction(_))));
    }

    #[test]
    fn test_significant_conflicts() {
        assert_eq!(run("@.0"), Err(PatternError::MultiplePrecisions));
        assert_eq!(run("@5"), Err(PatternError::MultiplePrecisions));
        assert!(run("@.###").is_ok());
    }

    #[test]
    fn test_group_off_needs_four_positions() {
        assert_eq!(run("##0").unwrap().group, None);
        assert_eq!(run("###0").unwrap().group, Some(Group::Off));
    }
}
