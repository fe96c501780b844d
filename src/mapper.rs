//! Skeleton to formatting options
//!
//! The mapping is total: every field the primitive cannot express is
//! reported as `UNSUPPORTED` and left out of the options.

use crate::errors::Diagnostic;
use crate::options::*;
use crate::types::*;

/// Drops the category of a measure unit id, `length-meter` -> `meter`
fn simple_unit(id: &str) -> &str {
    id.split_once('-').map_or(id, |(_, unit)| unit)
}

/// Map a skeleton to the options of the formatting primitive
///
/// Diagnostics are reported in field order: unit, unit width, group,
/// integer width, precision, notation, sign, decimal, rounding mode.
///
/// # Examples
/// ```
/// use number_skeleton::{get_number_format_options, parse_skeleton, Style};
///
/// let skeleton = parse_skeleton("currency/EUR group-off", |_| {});
/// let options = get_number_format_options(&skeleton, |_| {});
/// assert_eq!(options.style, Some(Style::Currency));
/// assert_eq!(options.use_grouping, Some(false));
/// ```
pub fn get_number_format_options(
    skeleton: &Skeleton,
    mut on_error: impl FnMut(Diagnostic),
) -> NumberFormatOptions {
    let mut opt = NumberFormatOptions::default();
    let mut unsupported = |stem: &str, source: Option<String>| {
        on_error(Diagnostic::unsupported(stem, source));
    };

    match &skeleton.unit {
        Some(Unit::BaseUnit) => opt.style = Some(Style::Decimal),
        Some(Unit::Currency(code)) => {
            opt.style = Some(Style::Currency);
            opt.currency = Some(code.clone());
        }
        Some(Unit::MeasureUnit(id)) => {
            opt.style = Some(Style::Unit);
            opt.unit = Some(match &skeleton.unit_per {
                Some(per) => format!("{}-per-{}", simple_unit(id), simple_unit(per)),
                None => simple_unit(id).to_string(),
            });
        }
        Some(Unit::Percent) => opt.style = Some(Style::Percent),
        Some(unit @ Unit::Permille) => unsupported(unit.stem(), None),
        None => {}
    }

    match skeleton.unit_width {
        Some(UnitWidth::FullName) => {
            opt.currency_display = Some(CurrencyDisplay::Name);
            opt.unit_display = Some(UnitDisplay::Long);
        }
        Some(width @ UnitWidth::Hidden) => unsupported(width.stem(), None),
        Some(UnitWidth::IsoCode) => opt.currency_display = Some(CurrencyDisplay::Code),
        Some(UnitWidth::Narrow) => {
            opt.currency_display = Some(CurrencyDisplay::NarrowSymbol);
            opt.unit_display = Some(UnitDisplay::Narrow);
        }
        Some(UnitWidth::Short) => {
            opt.currency_display = Some(CurrencyDisplay::Symbol);
            opt.unit_display = Some(UnitDisplay::Short);
        }
        None => {}
    }

    match skeleton.group {
        Some(Group::Auto) => opt.use_grouping = Some(true),
        Some(Group::Off) => opt.use_grouping = Some(false),
        Some(group) => unsupported(group.stem(), None),
        None => {}
    }

    if let Some(width) = &skeleton.integer_width {
        if width.min > 0 {
            opt.minimum_integer_digits = Some(width.min);
        }
        if width.max.is_some() {
            unsupported("integer-width", Some(width.source_text()));
        }
    }

    match &skeleton.precision {
        Some(Precision::Fraction(fp)) => {
            opt.minimum_fraction_digits = fp.min_fraction;
            opt.maximum_fraction_digits = fp.max_fraction;
            opt.minimum_significant_digits = fp.min_significant;
            opt.maximum_significant_digits = fp.max_significant;
            if fp.has_fraction() && fp.has_significant() {
                unsupported("precision-fraction", Some(fp.source_text()));
            }
        }
        Some(Precision::Integer) => opt.maximum_fraction_digits = Some(0),
        Some(Precision::Unlimited) => opt.maximum_fraction_digits = Some(20),
        Some(Precision::CurrencyStandard) => {}
        Some(precision @ Precision::CurrencyCash) => unsupported(precision.stem(), None),
        Some(precision @ Precision::Increment(inc)) => {
            unsupported(precision.stem(), Some(inc.to_string()))
        }
        None => {}
    }

    match &skeleton.notation {
        Some(Notation::CompactShort) => {
            opt.notation = Some(NotationStyle::Compact);
            opt.compact_display = Some(CompactDisplay::Short);
        }
        Some(Notation::CompactLong) => {
            opt.notation = Some(NotationStyle::Compact);
            opt.compact_display = Some(CompactDisplay::Long);
        }
        Some(Notation::Standard) => opt.notation = Some(NotationStyle::Standard),
        Some(notation @ (Notation::Scientific(exp) | Notation::Engineering(exp))) => {
            opt.notation = Some(if matches!(notation, Notation::Scientific(_)) {
                NotationStyle::Scientific
            } else {
                NotationStyle::Engineering
            });
            if exp.is_customized() {
                unsupported(notation.stem(), Some(exp.source_text()));
            }
        }
        None => {}
    }

    if let Some(sign) = skeleton.sign {
        let (display, accounting) = match sign {
            Sign::Auto => (Some(SignDisplay::Auto), false),
            Sign::Always => (Some(SignDisplay::Always), false),
            Sign::Never => (Some(SignDisplay::Never), false),
            Sign::ExceptZero => (Some(SignDisplay::ExceptZero), false),
            Sign::Accounting => (None, true),
            Sign::AccountingAlways => (Some(SignDisplay::Always), true),
            Sign::AccountingExceptZero => (Some(SignDisplay::ExceptZero), true),
        };
        opt.sign_display = display;
        if accounting {
            opt.currency_sign = Some(CurrencySign::Accounting);
        }
    }

    if let Some(decimal @ Decimal::Always) = skeleton.decimal {
        unsupported(decimal.stem(), None);
    }

    if let Some(mode) = skeleton.rounding_mode {
        unsupported(mode.stem(), None);
    }

    opt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiagnosticCode;

    fn map(skeleton: &Skeleton) -> (NumberFormatOptions, Vec<Diagnostic>) {
        let mut errors = Vec::new();
        let opt = get_number_format_options(skeleton, |e| errors.push(e));
        (opt, errors)
    }

    #[test]
    fn test_compound_unit() {
        let skeleton = Skeleton {
            unit: Some(Unit::MeasureUnit("length-meter".into())),
            unit_per: Some("duration-second".into()),
            ..Default::default()
        };
        let (opt, errors) = map(&skeleton);
        assert_eq!(opt.unit.as_deref(), Some("meter-per-second"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_integer_width_max_regenerates_source() {
        let skeleton = Skeleton {
            integer_width: Some(IntegerWidth { min: 1, max: Some(3), source: None }),
            ..Default::default()
        };
        let (opt, errors) = map(&skeleton);
        assert_eq!(opt.minimum_integer_digits, Some(1));
        assert_eq!(errors, vec![Diagnostic::unsupported("integer-width", Some("##0".into()))]);
    }

    #[test]
    fn test_decimal_auto_is_silent() {
        let skeleton = Skeleton { decimal: Some(Decimal::Auto), ..Default::default() };
        let (opt, errors) = map(&skeleton);
        assert_eq!(opt, NumberFormatOptions::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_diagnostics_follow_field_order() {
        let skeleton = Skeleton {
            rounding_mode: Some(RoundingMode::Floor),
            unit: Some(Unit::Permille),
            group: Some(Group::Min2),
            ..Default::default()
        };
        let (_, errors) = map(&skeleton);
        let stems: Vec<_> = errors.iter().map(|e| e.stem.as_str()).collect();
        assert_eq!(stems, ["permille", "group-min2", "rounding-mode-floor"]);
        assert!(errors.iter().all(|e| e.code == DiagnosticCode::Unsupported));
    }
}
