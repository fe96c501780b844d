//! Unit symbols and signs around a formatted number

use crate::locale::{LocaleManager, LocaleSettings, UnitData};
use crate::options::{CurrencyDisplay, NumberFormatOptions, SignDisplay, UnitDisplay};

const NBSP: char = '\u{a0}';

/// Plural category of a rendered number; only English `one` is distinguished
fn is_one(number: &str) -> bool {
    number == "1"
}

/// Wraps `number` with the currency symbol, code or name
pub(super) fn currency(
    number: &str,
    code: &str,
    options: &NumberFormatOptions,
    locale: &LocaleSettings,
) -> String {
    let data = LocaleManager::get().currency(code);
    let symbol = match (options.currency_display, data) {
        (Some(CurrencyDisplay::Name), data) => {
            let name = match data {
                Some(data) if is_one(number) => data.one.as_str(),
                Some(data) => data.other.as_str(),
                None => code,
            };
            return format!("{number} {name}");
        }
        (Some(CurrencyDisplay::Code), _) | (_, None) => code,
        (Some(CurrencyDisplay::NarrowSymbol), Some(data)) => data.narrow.as_str(),
        (Some(CurrencyDisplay::Symbol) | None, Some(data)) => data.symbol.as_str(),
    };

    let pattern = &locale.currency_pattern;
    let mut result = String::with_capacity(pattern.len() + number.len() + symbol.len());
    let mut rest = pattern.as_str();
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("{0}") {
            // A letter symbol directly touching the number gets a space
            if result.chars().last().is_some_and(char::is_alphabetic) {
                result.push(NBSP);
            }
            result.push_str(number);
            if tail.starts_with('¤') && symbol.starts_with(char::is_alphabetic) {
                result.push(NBSP);
            }
            rest = tail;
        } else if c == '¤' {
            result.push_str(symbol);
            rest = &rest[c.len_utf8()..];
        } else {
            result.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    result
}

/// Wraps `number` with the percent sign of the locale
pub(super) fn percent(number: &str, locale: &LocaleSettings) -> String {
    locale.percent_pattern.replace("{0}", number)
}

fn unit_pattern(data: Option<&UnitData>, id: &str, display: UnitDisplay, number: &str) -> String {
    match (data, display) {
        (Some(data), UnitDisplay::Short) => data.short.clone(),
        (Some(data), UnitDisplay::Narrow) => data.narrow.clone(),
        (Some(data), UnitDisplay::Long) if is_one(number) => data.one.clone(),
        (Some(data), UnitDisplay::Long) => data.other.clone(),
        (None, _) => format!("{{0}} {id}"),
    }
}

/// Wraps `number` with a simple (`meter`) or compound (`meter-per-second`) unit
pub(super) fn unit(number: &str, id: &str, options: &NumberFormatOptions) -> String {
    let manager = LocaleManager::get();
    let display = options.unit_display.unwrap_or(UnitDisplay::Short);

    let pattern = match id.split_once("-per-") {
        None => unit_pattern(manager.unit(id), id, display, number),
        Some((numerator, denominator)) => {
            let pattern = unit_pattern(manager.unit(numerator), numerator, display, number);
            let per = manager.unit(denominator);
            match display {
                UnitDisplay::Long => {
                    let name = per
                        .map(|data| data.one.replace("{0}", "").trim().to_string())
                        .unwrap_or_else(|| denominator.to_string());
                    format!("{pattern} per {name}")
                }
                _ => {
                    let symbol = per
                        .map(UnitData::symbol)
                        .unwrap_or_else(|| denominator.to_string());
                    format!("{pattern}/{symbol}")
                }
            }
        }
    };
    pattern.replace("{0}", number)
}

/// Which sign, if any, goes in front of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SignMark {
    None,
    Plus,
    Minus,
}

pub(super) fn sign_mark(negative: bool, zero: bool, display: SignDisplay) -> SignMark {
    match display {
        SignDisplay::Never => SignMark::None,
        SignDisplay::Auto if negative => SignMark::Minus,
        SignDisplay::Auto => SignMark::None,
        SignDisplay::Always if negative => SignMark::Minus,
        SignDisplay::Always => SignMark::Plus,
        SignDisplay::ExceptZero if zero => SignMark::None,
        SignDisplay::ExceptZero if negative => SignMark::Minus,
        SignDisplay::ExceptZero => SignMark::Plus,
    }
}

/// Prefixes the sign, or wraps negative accounting amounts in parentheses
pub(super) fn apply_sign(
    formatted: String,
    mark: SignMark,
    accounting: bool,
    locale: &LocaleSettings,
) -> String {
    match mark {
        SignMark::None => formatted,
        SignMark::Minus if accounting => format!("({formatted})"),
        SignMark::Minus => format!("{}{formatted}", locale.minus_sign),
        SignMark::Plus => format!("{}{formatted}", locale.plus_sign),
    }
}
