//! Stem table
//!
//! Maps a stem keyword to what it sets and how many options it takes.

use crate::parser::tokens::{fraction_stem, sign_stem};
use crate::types::*;

/// A recognized stem keyword
#[derive(Debug, Clone, PartialEq)]
pub enum Stem {
    /// `compact-short`, `compact-long`
    Compact(Notation),
    /// `notation-simple`
    NotationSimple,
    /// `scientific`
    Scientific,
    /// `engineering`
    Engineering,
    /// `base-unit`, `percent`, `permille`
    Unit(Unit),
    Currency,
    MeasureUnit,
    PerMeasureUnit,
    UnitWidth(UnitWidth),
    Group(Group),
    /// Precision stems without options
    Precision(Precision),
    PrecisionIncrement,
    /// `.00##` or `@@#` shorthand, bounds already parsed from the keyword
    Fraction(FractionPrecision),
    RoundingMode(RoundingMode),
    IntegerWidth,
    Scale,
    Sign(Sign),
    Decimal(Decimal),
    /// `latin`, shorthand for `numbering-system/latn`
    Latin,
    NumberingSystem,
}

/// How many options a stem takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    const NONE: Arity = Arity { min: 0, max: 0 };
    const ONE: Arity = Arity { min: 1, max: 1 };
}

impl Stem {
    pub fn arity(&self) -> Arity {
        match self {
            Stem::Scientific | Stem::Engineering => Arity { min: 0, max: 2 },
            Stem::Fraction(fp) if fp.has_fraction() => Arity { min: 0, max: 1 },
            Stem::Currency
            | Stem::MeasureUnit
            | Stem::PerMeasureUnit
            | Stem::PrecisionIncrement
            | Stem::IntegerWidth
            | Stem::Scale
            | Stem::NumberingSystem => Arity::ONE,
            _ => Arity::NONE,
        }
    }

    /// Whether the stem still applies when it was given too many options
    pub fn keeps_on_excess(&self) -> bool {
        matches!(self, Stem::Fraction(_))
    }
}

/// Looks up a stem keyword
pub fn lookup(keyword: &str) -> Option<Stem> {
    let stem = match keyword {
        "compact-short" => Stem::Compact(Notation::CompactShort),
        "compact-long" => Stem::Compact(Notation::CompactLong),
        "notation-simple" => Stem::NotationSimple,
        "scientific" => Stem::Scientific,
        "engineering" => Stem::Engineering,

        "base-unit" => Stem::Unit(Unit::BaseUnit),
        "percent" => Stem::Unit(Unit::Percent),
        "permille" => Stem::Unit(Unit::Permille),
        "currency" => Stem::Currency,
        "measure-unit" => Stem::MeasureUnit,
        "per-measure-unit" => Stem::PerMeasureUnit,

        "unit-width-narrow" => Stem::UnitWidth(UnitWidth::Narrow),
        "unit-width-short" => Stem::UnitWidth(UnitWidth::Short),
        "unit-width-full-name" => Stem::UnitWidth(UnitWidth::FullName),
        "unit-width-iso-code" => Stem::UnitWidth(UnitWidth::IsoCode),
        "unit-width-hidden" => Stem::UnitWidth(UnitWidth::Hidden),

        "group-off" => Stem::Group(Group::Off),
        "group-min2" => Stem::Group(Group::Min2),
        "group-auto" => Stem::Group(Group::Auto),
        "group-on-aligned" => Stem::Group(Group::OnAligned),
        "group-thousands" => Stem::Group(Group::Thousands),

        "precision-integer" => Stem::Precision(Precision::Integer),
        "precision-unlimited" => Stem::Precision(Precision::Unlimited),
        "precision-currency-standard" => Stem::Precision(Precision::CurrencyStandard),
        "precision-currency-cash" => Stem::Precision(Precision::CurrencyCash),
        "precision-increment" => Stem::PrecisionIncrement,

        "rounding-mode-ceiling" => Stem::RoundingMode(RoundingMode::Ceiling),
        "rounding-mode-floor" => Stem::RoundingMode(RoundingMode::Floor),
        "rounding-mode-down" => Stem::RoundingMode(RoundingMode::Down),
        "rounding-mode-up" => Stem::RoundingMode(RoundingMode::Up),
        "rounding-mode-half-even" => Stem::RoundingMode(RoundingMode::HalfEven),
        "rounding-mode-half-down" => Stem::RoundingMode(RoundingMode::HalfDown),
        "rounding-mode-half-up" => Stem::RoundingMode(RoundingMode::HalfUp),
        "rounding-mode-unnecessary" => Stem::RoundingMode(RoundingMode::Unnecessary),

        "integer-width" => Stem::IntegerWidth,
        "scale" => Stem::Scale,

        "decimal-auto" => Stem::Decimal(Decimal::Auto),
        "decimal-always" => Stem::Decimal(Decimal::Always),

        "latin" => Stem::Latin,
        "numbering-system" => Stem::NumberingSystem,

        _ => {
            if let Some(sign) = sign_stem(keyword) {
                Stem::Sign(sign)
            } else if keyword.starts_with(['.', '@']) {
                Stem::Fraction(fraction_stem(keyword)?)
            } else {
                return None;
            }
        }
    };
    Some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("percent"), Some(Stem::Unit(Unit::Percent)));
        assert_eq!(lookup("sign-except-zero"), Some(Stem::Sign(Sign::ExceptZero)));
        assert!(matches!(lookup(".00"), Some(Stem::Fraction(_))));
        assert_eq!(lookup("foo"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup(".0x"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(lookup("currency").unwrap().arity(), Arity::ONE);
        assert_eq!(lookup(".00").unwrap().arity().max, 1);
        assert_eq!(lookup("@@").unwrap().arity().max, 0);
        assert_eq!(lookup("engineering").unwrap().arity().max, 2);
    }
}
