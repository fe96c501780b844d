//! Skeleton string parsing module
//!
//! A skeleton is a whitespace-separated list of stems, each optionally
//! followed by `/`-separated options, e.g. `currency/EUR .00 sign-always`.
//! The main entry point is the `parse_skeleton` function.

mod stems;
mod tokens;

use tracing::trace;
use winnow::Parser;

use crate::errors::Diagnostic;
use crate::types::*;

use self::stems::{Stem, lookup};
use self::tokens::{
    ExponentOption, parse_currency_code, parse_exponent_option, parse_integer_width,
    parse_number, parse_numbering_system, parse_significant_blueprint, parse_unit_id,
};

/// Parse a skeleton string
///
/// Never fails: unknown stems and malformed options are reported through
/// `on_error` and skipped, leaving the rest of the skeleton usable.
///
/// # Examples
/// ```
/// use number_skeleton::{parse_skeleton, Unit};
///
/// let mut errors = Vec::new();
/// let skeleton = parse_skeleton("currency/EUR foo", |e| errors.push(e));
/// assert_eq!(skeleton.unit, Some(Unit::Currency("EUR".into())));
/// assert_eq!(errors.len(), 1);
/// ```
pub fn parse_skeleton(src: &str, mut on_error: impl FnMut(Diagnostic)) -> Skeleton {
    let mut parser = SkeletonParser {
        skeleton: Skeleton::default(),
        on_error: &mut on_error,
    };
    for token in src.split_whitespace() {
        parser.parse_token(token);
    }
    parser.skeleton
}

struct SkeletonParser<'a> {
    skeleton: Skeleton,
    on_error: &'a mut dyn FnMut(Diagnostic),
}

impl SkeletonParser<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        (self.on_error)(diagnostic);
    }

    fn parse_token(&mut self, token: &str) {
        let mut parts = token.split('/');
        let keyword = parts.next().unwrap_or_default();
        let mut options: Vec<&str> = parts.collect();
        trace!(keyword, ?options, "skeleton stem");

        let Some(stem) = lookup(keyword) else {
            self.report(Diagnostic::bad_stem(keyword));
            return;
        };

        let arity = stem.arity();
        if options.len() < arity.min {
            self.report(Diagnostic::missing_option(keyword));
            return;
        }
        if options.len() > arity.max {
            if stem == Stem::NotationSimple {
                self.report(Diagnostic::bad_option(keyword, options[0]));
                return;
            }
            self.report(Diagnostic::too_many_options(keyword, &options[arity.max..]));
            if !stem.keeps_on_excess() {
                return;
            }
            options.truncate(arity.max);
        }

        self.apply(stem, keyword, &options);
    }

    /// Option of a one-option stem, validated by `grammar`
    fn option<'o, T>(
        &mut self,
        keyword: &str,
        option: &'o str,
        mut grammar: impl FnMut(&mut &'o str) -> winnow::ModalResult<T>,
    ) -> Option<T> {
        match grammar.parse(option) {
            Ok(value) => Some(value),
            Err(_) => {
                self.report(Diagnostic::bad_option(keyword, option));
                None
            }
        }
    }

    fn apply(&mut self, stem: Stem, keyword: &str, options: &[&str]) {
        let sk = &mut self.skeleton;
        match stem {
            Stem::Compact(notation) => sk.notation = Some(notation),
            Stem::NotationSimple => sk.notation = Some(Notation::Standard),
            Stem::Scientific | Stem::Engineering => {
                let Some(exp) = self.exponent_format(keyword, options) else {
                    return;
                };
                self.skeleton.notation = Some(if stem == Stem::Scientific {
                    Notation::Scientific(exp)
                } else {
                    Notation::Engineering(exp)
                });
            }

            Stem::Unit(unit) => sk.unit = Some(unit),
            Stem::Currency => {
                if let Some(code) = self.option(keyword, options[0], parse_currency_code) {
                    self.skeleton.unit = Some(Unit::Currency(code.to_string()));
                }
            }
            Stem::MeasureUnit => {
                if let Some(id) = self.option(keyword, options[0], parse_unit_id) {
                    self.skeleton.unit = Some(Unit::MeasureUnit(id.to_string()));
                }
            }
            Stem::PerMeasureUnit => {
                if let Some(id) = self.option(keyword, options[0], parse_unit_id) {
                    self.skeleton.unit_per = Some(id.to_string());
                }
            }
            Stem::UnitWidth(width) => sk.unit_width = Some(width),
            Stem::Group(group) => sk.group = Some(group),

            Stem::Precision(precision) => sk.precision = Some(precision),
            Stem::PrecisionIncrement => {
                match self.option(keyword, options[0], parse_number) {
                    Some(inc) if inc > 0.0 => {
                        self.skeleton.precision = Some(Precision::Increment(inc))
                    }
                    Some(_) => self.report(Diagnostic::bad_option(keyword, options[0])),
                    None => {}
                }
            }
            Stem::Fraction(mut fp) => {
                if let Some(&option) = options.first() {
                    let Some((min, max)) =
                        self.option(keyword, option, parse_significant_blueprint)
                    else {
                        return;
                    };
                    fp.min_significant = Some(min);
                    fp.max_significant = max;
                }
                let mut source = keyword.to_string();
                for option in options {
                    source.push('/');
                    source.push_str(option);
                }
                fp.source = Some(source);
                self.skeleton.precision = Some(Precision::Fraction(fp));
            }
            Stem::RoundingMode(mode) => sk.rounding_mode = Some(mode),

            Stem::IntegerWidth => {
                let option = options[0];
                if option.is_empty() {
                    self.report(Diagnostic::bad_option(keyword, option));
                    return;
                }
                if let Some(mut width) = self.option(keyword, option, parse_integer_width) {
                    width.source = Some(option.to_string());
                    self.skeleton.integer_width = Some(width);
                }
            }
            Stem::Scale => {
                if let Some(scale) = self.option(keyword, options[0], parse_number) {
                    self.skeleton.scale = Some(scale);
                }
            }
            Stem::Sign(sign) => sk.sign = Some(sign),
            Stem::Decimal(decimal) => sk.decimal = Some(decimal),
            Stem::Latin => sk.numbering_system = Some("latn".to_string()),
            Stem::NumberingSystem => {
                if let Some(ns) = self.option(keyword, options[0], parse_numbering_system) {
                    self.skeleton.numbering_system = Some(ns.to_string());
                }
            }
        }
    }

    fn exponent_format(&mut self, keyword: &str, options: &[&str]) -> Option<ExponentFormat> {
        let mut exp = ExponentFormat::default();
        for &option in options {
            match self.option(keyword, option, parse_exponent_option)? {
                ExponentOption::Digits(digits) => exp.exp_digits = Some(digits),
                ExponentOption::Sign(sign) => exp.exp_sign = Some(sign),
            }
        }
        if !options.is_empty() {
            exp.source = Some(options.join("/"));
        }
        Some(exp)
    }
}
