//! Type definitions for number skeletons
//!
//! This module defines the `Skeleton` record shared by the skeleton parser,
//! the pattern translator, the options mapper and the formatter compiler.
//! Every field is an independent formatting axis; the order in which the
//! source text set them carries no meaning.

use std::fmt;

/// The unit a number is formatted in
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// Plain number (`base-unit`)
    BaseUnit,
    /// Currency amount with an ISO 4217 code (`currency/EUR`)
    Currency(String),
    /// Measure unit identifier, e.g. `length-meter` (`measure-unit/length-meter`)
    MeasureUnit(String),
    /// Percent sign appended, value not multiplied (`percent`)
    Percent,
    /// Per-mille sign appended (`permille`)
    Permille,
}

/// Display width of a currency or measure unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitWidth {
    /// `unit-width-full-name`
    FullName,
    /// `unit-width-hidden`
    Hidden,
    /// `unit-width-iso-code`
    IsoCode,
    /// `unit-width-narrow`
    Narrow,
    /// `unit-width-short`
    Short,
}

/// Grouping strategy for integer digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// `group-auto`
    Auto,
    /// `group-off`
    Off,
    /// `group-min2`
    Min2,
    /// `group-on-aligned`
    OnAligned,
    /// `group-thousands`
    Thousands,
}

/// Minimum (and optionally maximum) count of integer digits
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerWidth {
    /// Digits are zero-padded up to this count
    pub min: u32,
    /// Recognized, never enforced
    pub max: Option<u32>,
    /// Option text the width was parsed from
    pub source: Option<String>,
}

/// Fraction and significant digit bounds of a `precision-fraction` stem.
///
/// All four bounds are independent; any combination may be present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FractionPrecision {
    pub min_fraction: Option<u32>,
    pub max_fraction: Option<u32>,
    pub min_significant: Option<u32>,
    pub max_significant: Option<u32>,
    /// Stem text the bounds were parsed from, e.g. `.00/@@#`
    pub source: Option<String>,
}

impl FractionPrecision {
    pub fn has_fraction(&self) -> bool {
        self.min_fraction.is_some() || self.max_fraction.is_some()
    }

    pub fn has_significant(&self) -> bool {
        self.min_significant.is_some() || self.max_significant.is_some()
    }
}

/// Rounding precision; exactly one style is active at a time
#[derive(Debug, Clone, PartialEq)]
pub enum Precision {
    /// `.00##`, `@@#` and friends
    Fraction(FractionPrecision),
    /// `precision-integer`
    Integer,
    /// `precision-unlimited`
    Unlimited,
    /// `precision-currency-standard`
    CurrencyStandard,
    /// `precision-currency-cash`
    CurrencyCash,
    /// `precision-increment/0.05`: round to the nearest multiple of the value
    Increment(f64),
}

/// Exponent settings of scientific and engineering notation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExponentFormat {
    /// Minimum number of exponent digits
    pub exp_digits: Option<u32>,
    /// Sign display of the exponent
    pub exp_sign: Option<Sign>,
    /// Option text, e.g. `+ee/sign-always`
    pub source: Option<String>,
}

impl ExponentFormat {
    /// Whether the exponent asks for anything beyond the default rendering
    pub fn is_customized(&self) -> bool {
        self.exp_digits.is_some_and(|d| d > 1)
            || self.exp_sign.is_some_and(|s| s != Sign::Auto)
    }
}

/// Notation style
#[derive(Debug, Clone, PartialEq)]
pub enum Notation {
    /// `notation-simple`
    Standard,
    /// `scientific`
    Scientific(ExponentFormat),
    /// `engineering`
    Engineering(ExponentFormat),
    /// `compact-short`
    CompactShort,
    /// `compact-long`
    CompactLong,
}

/// Sign display strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Auto,
    Always,
    Never,
    Accounting,
    AccountingAlways,
    ExceptZero,
    AccountingExceptZero,
}

/// Decimal separator display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimal {
    /// `decimal-auto`
    Auto,
    /// `decimal-always`
    Always,
}

/// Rounding mode requested by a `rounding-mode-*` stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    Ceiling,
    Floor,
    Down,
    Up,
    HalfEven,
    HalfDown,
    HalfUp,
    Unnecessary,
}

/// Literal text around the formatted number, selected by the sign of the value.
///
/// Only legacy patterns produce affixes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Affix {
    /// Prefix and suffix for non-negative values
    pub pos: (String, String),
    /// Prefix and suffix for negative values, if the pattern declared them
    pub neg: Option<(String, String)>,
}

/// A parsed number skeleton
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skeleton {
    pub unit: Option<Unit>,
    /// Secondary measure unit id; combined with `Unit::MeasureUnit` only
    pub unit_per: Option<String>,
    pub unit_width: Option<UnitWidth>,
    pub group: Option<Group>,
    pub integer_width: Option<IntegerWidth>,
    pub precision: Option<Precision>,
    pub notation: Option<Notation>,
    pub sign: Option<Sign>,
    pub decimal: Option<Decimal>,
    pub rounding_mode: Option<RoundingMode>,
    pub affix: Option<Affix>,
    /// Multiplier applied to the value before formatting
    pub scale: Option<f64>,
    /// Numbering system identifier, e.g. `thai`
    pub numbering_system: Option<String>,
}

impl Unit {
    /// Stem keyword of the unit
    pub fn stem(&self) -> &'static str {
        match self {
            Unit::BaseUnit => "base-unit",
            Unit::Currency(_) => "currency",
            Unit::MeasureUnit(_) => "measure-unit",
            Unit::Percent => "percent",
            Unit::Permille => "permille",
        }
    }
}

impl UnitWidth {
    pub fn stem(self) -> &'static str {
        match self {
            UnitWidth::FullName => "unit-width-full-name",
            UnitWidth::Hidden => "unit-width-hidden",
            UnitWidth::IsoCode => "unit-width-iso-code",
            UnitWidth::Narrow => "unit-width-narrow",
            UnitWidth::Short => "unit-width-short",
        }
    }
}

impl Group {
    pub fn stem(self) -> &'static str {
        match self {
            Group::Auto => "group-auto",
            Group::Off => "group-off",
            Group::Min2 => "group-min2",
            Group::OnAligned => "group-on-aligned",
            Group::Thousands => "group-thousands",
        }
    }
}

impl Precision {
    pub fn stem(&self) -> &'static str {
        match self {
            Precision::Fraction(_) => "precision-fraction",
            Precision::Integer => "precision-integer",
            Precision::Unlimited => "precision-unlimited",
            Precision::CurrencyStandard => "precision-currency-standard",
            Precision::CurrencyCash => "precision-currency-cash",
            Precision::Increment(_) => "precision-increment",
        }
    }
}

impl Notation {
    pub fn stem(&self) -> &'static str {
        match self {
            Notation::Standard => "notation-simple",
            Notation::Scientific(_) => "scientific",
            Notation::Engineering(_) => "engineering",
            Notation::CompactShort => "compact-short",
            Notation::CompactLong => "compact-long",
        }
    }
}

impl Sign {
    pub fn stem(self) -> &'static str {
        match self {
            Sign::Auto => "sign-auto",
            Sign::Always => "sign-always",
            Sign::Never => "sign-never",
            Sign::Accounting => "sign-accounting",
            Sign::AccountingAlways => "sign-accounting-always",
            Sign::ExceptZero => "sign-except-zero",
            Sign::AccountingExceptZero => "sign-accounting-except-zero",
        }
    }
}

impl Decimal {
    pub fn stem(self) -> &'static str {
        match self {
            Decimal::Auto => "decimal-auto",
            Decimal::Always => "decimal-always",
        }
    }
}

impl RoundingMode {
    pub fn stem(self) -> &'static str {
        match self {
            RoundingMode::Ceiling => "rounding-mode-ceiling",
            RoundingMode::Floor => "rounding-mode-floor",
            RoundingMode::Down => "rounding-mode-down",
            RoundingMode::Up => "rounding-mode-up",
            RoundingMode::HalfEven => "rounding-mode-half-even",
            RoundingMode::HalfDown => "rounding-mode-half-down",
            RoundingMode::HalfUp => "rounding-mode-half-up",
            RoundingMode::Unnecessary => "rounding-mode-unnecessary",
        }
    }
}

/// Regenerates a blueprint such as `+000` or `##0` from integer width bounds
fn integer_width_blueprint(width: &IntegerWidth) -> String {
    let zeros = "0".repeat(width.min as usize);
    match width.max {
        None => format!("+{zeros}"),
        Some(max) => format!("{}{zeros}", "#".repeat(max.saturating_sub(width.min) as usize)),
    }
}

fn digit_blueprint(lead: char, min: u32, max: Option<u32>) -> String {
    let mut s: String = std::iter::repeat_n(lead, min as usize).collect();
    match max {
        Some(max) => s.extend(std::iter::repeat_n('#', max.saturating_sub(min) as usize)),
        None => s.push('+'),
    }
    s
}

fn fraction_blueprint(fp: &FractionPrecision) -> String {
    let mut out = String::new();
    if fp.has_fraction() {
        out.push('.');
        let max = match fp.min_fraction {
            Some(_) => fp.max_fraction,
            None => fp.max_fraction.or(Some(0)),
        };
        out.push_str(&digit_blueprint('0', fp.min_fraction.unwrap_or(0), max));
    }
    if fp.has_significant() {
        if !out.is_empty() {
            out.push('/');
        }
        let min = fp.min_significant.unwrap_or(1).max(1);
        out.push_str(&digit_blueprint('@', min, fp.max_significant));
    }
    out
}

impl IntegerWidth {
    /// Option text the width came from, regenerated when not recorded
    pub fn source_text(&self) -> String {
        self.source.clone().unwrap_or_else(|| integer_width_blueprint(self))
    }
}

impl FractionPrecision {
    /// Stem text the bounds came from, regenerated when not recorded
    pub fn source_text(&self) -> String {
        self.source.clone().unwrap_or_else(|| fraction_blueprint(self))
    }
}

impl ExponentFormat {
    /// Option text, e.g. `+ee/sign-always`, regenerated when not recorded
    pub fn source_text(&self) -> String {
        let options = exponent_options(self);
        options.strip_prefix('/').unwrap_or(&options).to_string()
    }
}

fn exponent_options(exp: &ExponentFormat) -> String {
    if let Some(source) = &exp.source {
        return format!("/{source}");
    }
    let mut out = String::new();
    if let Some(digits) = exp.exp_digits.filter(|&d| d > 1) {
        out.push_str("/+");
        out.extend(std::iter::repeat_n('e', digits as usize));
    }
    if let Some(sign) = exp.exp_sign.filter(|&s| s != Sign::Auto) {
        out.push('/');
        out.push_str(sign.stem());
    }
    out
}

impl fmt::Display for Skeleton {
    /// Writes the skeleton back out as a skeleton string.
    ///
    /// Affixes have no skeleton syntax and are left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stems: Vec<String> = Vec::new();

        match &self.unit {
            Some(Unit::Currency(code)) => stems.push(format!("currency/{code}")),
            Some(Unit::MeasureUnit(unit)) => stems.push(format!("measure-unit/{unit}")),
            Some(unit) => stems.push(unit.stem().to_string()),
            None => {}
        }
        if let Some(per) = &self.unit_per {
            stems.push(format!("per-measure-unit/{per}"));
        }
        if let Some(width) = self.unit_width {
            stems.push(width.stem().to_string());
        }
        if let Some(group) = self.group {
            stems.push(group.stem().to_string());
        }
        if let Some(width) = &self.integer_width {
            stems.push(format!("integer-width/{}", width.source_text()));
        }
        match &self.precision {
            Some(Precision::Fraction(fp)) => stems.push(fp.source_text()),
            Some(Precision::Increment(inc)) => stems.push(format!("precision-increment/{inc}")),
            Some(precision) => stems.push(precision.stem().to_string()),
            None => {}
        }
        match &self.notation {
            Some(Notation::Scientific(exp)) => {
                stems.push(format!("scientific{}", exponent_options(exp)))
            }
            Some(Notation::Engineering(exp)) => {
                stems.push(format!("engineering{}", exponent_options(exp)))
            }
            Some(notation) => stems.push(notation.stem().to_string()),
            None => {}
        }
        if let Some(sign) = self.sign {
            stems.push(sign.stem().to_string());
        }
        if let Some(decimal) = self.decimal {
            stems.push(decimal.stem().to_string());
        }
        if let Some(mode) = self.rounding_mode {
            stems.push(mode.stem().to_string());
        }
        if let Some(scale) = self.scale {
            stems.push(format!("scale/{scale}"));
        }
        if let Some(ns) = &self.numbering_system {
            stems.push(format!("numbering-system/{ns}"));
        }

        f.write_str(&stems.join(" "))
    }
}
