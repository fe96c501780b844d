//! Option micro-grammars of skeleton stems

use winnow::ascii::float;
use winnow::combinator::{alt, preceded};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::{FractionPrecision, IntegerWidth, Sign};

/// One option of a `scientific` or `engineering` stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentOption {
    /// `+ee`: minimum exponent digits
    Digits(u32),
    /// `sign-always` and friends
    Sign(Sign),
}

/// Maps a `sign-*` stem to its variant
pub fn sign_stem(stem: &str) -> Option<Sign> {
    match stem {
        "sign-auto" => Some(Sign::Auto),
        "sign-always" => Some(Sign::Always),
        "sign-never" => Some(Sign::Never),
        "sign-accounting" => Some(Sign::Accounting),
        "sign-accounting-always" => Some(Sign::AccountingAlways),
        "sign-except-zero" => Some(Sign::ExceptZero),
        "sign-accounting-except-zero" => Some(Sign::AccountingExceptZero),
        _ => None,
    }
}

fn count(s: &str) -> u32 {
    s.chars().count() as u32
}

/// `+` or `*`: no upper bound
fn open_bound(input: &mut &str) -> ModalResult<Option<u32>> {
    one_of(['+', '*']).value(None).parse_next(input)
}

/// `.00##`, `.00+`: fraction digit bounds
pub fn parse_fraction_blueprint(input: &mut &str) -> ModalResult<FractionPrecision> {
    let _ = '.'.parse_next(input)?;
    let zeros = count(take_while(0.., '0').parse_next(input)?);
    let max = alt((
        open_bound,
        take_while(0.., '#').map(|hashes: &str| Some(zeros + count(hashes))),
    ))
    .parse_next(input)?;
    Ok(FractionPrecision {
        min_fraction: Some(zeros),
        max_fraction: max,
        ..Default::default()
    })
}

/// `@@##`, `@@+`: significant digit bounds
pub fn parse_significant_blueprint(input: &mut &str) -> ModalResult<(u32, Option<u32>)> {
    let ats = count(take_while(1.., '@').parse_next(input)?);
    let max = alt((
        open_bound,
        take_while(0.., '#').map(|hashes: &str| Some(ats + count(hashes))),
    ))
    .parse_next(input)?;
    Ok((ats, max))
}

/// Parses a whole precision shorthand stem keyword, `.00##` or `@@#`
pub fn fraction_stem(keyword: &str) -> Option<FractionPrecision> {
    if keyword.starts_with('@') {
        let (min, max) = parse_significant_blueprint.parse(keyword).ok()?;
        Some(FractionPrecision {
            min_significant: Some(min),
            max_significant: max,
            ..Default::default()
        })
    } else {
        parse_fraction_blueprint.parse(keyword).ok()
    }
}

/// `integer-width` option: `+000`, `*000` or `##0`
pub fn parse_integer_width(input: &mut &str) -> ModalResult<IntegerWidth> {
    alt((
        preceded(one_of(['+', '*']), take_while(0.., '0')).map(|zeros: &str| IntegerWidth {
            min: count(zeros),
            max: None,
            source: None,
        }),
        (take_while(0.., '#'), take_while(0.., '0')).map(|(hashes, zeros): (&str, &str)| {
            IntegerWidth {
                min: count(zeros),
                max: Some(count(hashes) + count(zeros)),
                source: None,
            }
        }),
    ))
    .parse_next(input)
}

/// `+ee` or a `sign-*` keyword
pub fn parse_exponent_option(input: &mut &str) -> ModalResult<ExponentOption> {
    alt((
        preceded('+', take_while(1.., 'e')).map(|es: &str| ExponentOption::Digits(count(es))),
        take_while(1.., |c: char| c.is_ascii_lowercase() || c == '-')
            .verify_map(sign_stem)
            .map(ExponentOption::Sign),
    ))
    .parse_next(input)
}

/// Decimal or scientific numeric literal, e.g. `0.05` or `1E2`
pub fn parse_number(input: &mut &str) -> ModalResult<f64> {
    float::<_, f64, _>
        .verify(|n: &f64| n.is_finite())
        .parse_next(input)
}

/// Lowercase identifier with hyphen-separated segments, e.g. `length-meter`
pub fn parse_unit_id<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        .verify(|id: &str| !id.starts_with('-') && !id.ends_with('-') && !id.contains("--"))
        .parse_next(input)
}

/// Three uppercase ASCII letters
pub fn parse_currency_code<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(3, |c: char| c.is_ascii_uppercase()).parse_next(input)
}

/// Numbering system name, e.g. `thai`
pub fn parse_numbering_system<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(3..=8, |c: char| c.is_ascii_lowercase() || c.is_ascii_digit()).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_blueprints() {
        let fp = fraction_stem(".00##").unwrap();
        assert_eq!((fp.min_fraction, fp.max_fraction), (Some(2), Some(4)));
        let fp = fraction_stem(".0+").unwrap();
        assert_eq!((fp.min_fraction, fp.max_fraction), (Some(1), None));
        let fp = fraction_stem(".").unwrap();
        assert_eq!((fp.min_fraction, fp.max_fraction), (Some(0), Some(0)));
        assert!(fraction_stem(".#0").is_none());
        assert!(fraction_stem(".00#+").is_none());
    }

    #[test]
    fn test_significant_blueprints() {
        let fp = fraction_stem("@@#").unwrap();
        assert_eq!((fp.min_significant, fp.max_significant), (Some(2), Some(3)));
        let fp = fraction_stem("@*").unwrap();
        assert_eq!((fp.min_significant, fp.max_significant), (Some(1), None));
        assert!(fraction_stem("@#@").is_none());
    }

    #[test]
    fn test_integer_width() {
        let w = parse_integer_width.parse("+000").unwrap();
        assert_eq!((w.min, w.max), (3, None));
        let w = parse_integer_width.parse("##0").unwrap();
        assert_eq!((w.min, w.max), (1, Some(3)));
        let w = parse_integer_width.parse("+").unwrap();
        assert_eq!((w.min, w.max), (0, None));
        assert!(parse_integer_width.parse("0#").is_err());
    }

    #[test]
    fn test_exponent_options() {
        assert_eq!(
            parse_exponent_option.parse("+ee").ok(),
            Some(ExponentOption::Digits(2))
        );
        assert_eq!(
            parse_exponent_option.parse("sign-always").ok(),
            Some(ExponentOption::Sign(Sign::Always))
        );
        assert!(parse_exponent_option.parse("foo").is_err());
        assert!(parse_exponent_option.parse("+").is_err());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number.parse("1E2").ok(), Some(100.0));
        assert_eq!(parse_number.parse("0.05").ok(), Some(0.05));
        assert!(parse_number.parse("inf").is_err());
        assert!(parse_number.parse("12x").is_err());
    }

    #[test]
    fn test_identifiers() {
        assert!(parse_unit_id.parse("length-meter").is_ok());
        assert!(parse_unit_id.parse("Length").is_err());
        assert!(parse_currency_code.parse("EUR").is_ok());
        assert!(parse_currency_code.parse("EURO").is_err());
        assert!(parse_numbering_system.parse("thai").is_ok());
    }
}
