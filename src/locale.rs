//! Locale support for number formatting
//!
//! This module loads the read-only tables the built-in formatter consumes:
//! number symbols per locale, currency display forms, unit patterns,
//! numbering system digits and compact suffixes. The tables are embedded
//! TOML, parsed once on first use and never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Number symbols and patterns of one locale
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    pub decimal_point: char,
    pub group_separator: char,
    pub minus_sign: String,
    pub plus_sign: String,
    pub exponent_symbol: String,
    pub nan_symbol: String,
    pub infinity_symbol: String,
    /// Placement of the currency symbol, e.g. `¤{0}` or `{0} ¤`
    pub currency_pattern: String,
    /// Placement of the percent sign, e.g. `{0}%`
    pub percent_pattern: String,
    /// Suffixes for thousands, millions, billions and trillions
    pub compact_short: Vec<String>,
    pub compact_long: Vec<String>,
    /// Digit set the locale formats with by default
    pub numbering_system: Option<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        let suffixes = |s: [&str; 4]| s.iter().map(|x| x.to_string()).collect();
        LocaleSettings {
            decimal_point: '.',
            group_separator: ',',
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            exponent_symbol: "E".to_string(),
            nan_symbol: "NaN".to_string(),
            infinity_symbol: "∞".to_string(),
            currency_pattern: "¤{0}".to_string(),
            percent_pattern: "{0}%".to_string(),
            compact_short: suffixes(["K", "M", "B", "T"]),
            compact_long: suffixes([" thousand", " million", " billion", " trillion"]),
            numbering_system: None,
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_group_separator(mut self, group_separator: char) -> Self {
        self.group_separator = group_separator;
        self
    }

    pub fn with_minus_sign(mut self, minus_sign: impl Into<String>) -> Self {
        self.minus_sign = minus_sign.into();
        self
    }

    pub fn with_currency_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.currency_pattern = pattern.into();
        self
    }

    pub fn with_percent_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.percent_pattern = pattern.into();
        self
    }

    pub fn with_numbering_system(mut self, numbering_system: impl Into<String>) -> Self {
        self.numbering_system = Some(numbering_system.into());
        self
    }
}

/// Locale table entry; unset fields inherit from `[locales.base]`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocaleEntry {
    decimal: Option<char>,
    group: Option<char>,
    minus: Option<String>,
    plus: Option<String>,
    exponent: Option<String>,
    nan: Option<String>,
    infinity: Option<String>,
    currency_pattern: Option<String>,
    percent_pattern: Option<String>,
    compact_short: Option<Vec<String>>,
    compact_long: Option<Vec<String>>,
    numbering_system: Option<String>,
}

impl LocaleEntry {
    fn apply(self, settings: &mut LocaleSettings) {
        if let Some(decimal) = self.decimal {
            settings.decimal_point = decimal;
        }
        if let Some(group) = self.group {
            settings.group_separator = group;
        }
        if let Some(minus) = self.minus {
            settings.minus_sign = minus;
        }
        if let Some(plus) = self.plus {
            settings.plus_sign = plus;
        }
        if let Some(exponent) = self.exponent {
            settings.exponent_symbol = exponent;
        }
        if let Some(nan) = self.nan {
            settings.nan_symbol = nan;
        }
        if let Some(infinity) = self.infinity {
            settings.infinity_symbol = infinity;
        }
        if let Some(pattern) = self.currency_pattern {
            settings.currency_pattern = pattern;
        }
        if let Some(pattern) = self.percent_pattern {
            settings.percent_pattern = pattern;
        }
        if let Some(suffixes) = self.compact_short {
            settings.compact_short = suffixes;
        }
        if let Some(suffixes) = self.compact_long {
            settings.compact_long = suffixes;
        }
        if self.numbering_system.is_some() {
            settings.numbering_system = self.numbering_system;
        }
    }
}

/// Display forms of a currency
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyData {
    pub symbol: String,
    pub narrow: String,
    /// Singular full name
    pub one: String,
    /// Plural full name
    pub other: String,
    /// Minor unit digits
    #[serde(default = "default_currency_digits")]
    pub digits: u32,
}

fn default_currency_digits() -> u32 {
    2
}

/// Display patterns of a measure unit; `{0}` stands for the number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitData {
    pub short: String,
    pub narrow: String,
    pub one: String,
    pub other: String,
    /// Symbol used as the denominator of a compound unit, defaults to the short symbol
    pub per: Option<String>,
}

impl UnitData {
    /// Short symbol without the number, e.g. `m`
    pub fn symbol(&self) -> String {
        match &self.per {
            Some(per) => per.clone(),
            None => self.short.replace("{0}", "").trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocaleData {
    #[serde(default)]
    locales: HashMap<String, LocaleEntry>,
    #[serde(default)]
    currencies: HashMap<String, CurrencyData>,
    #[serde(default)]
    units: HashMap<String, UnitData>,
    #[serde(default)]
    numbering_systems: HashMap<String, char>,
}

/// Provides access to the embedded locale tables
pub struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
    currencies: HashMap<String, CurrencyData>,
    units: HashMap<String, UnitData>,
    numbering_systems: HashMap<String, char>,
}

// Global read-only tables
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        match Self::from_toml(include_str!("locale/locale_data.toml")) {
            Ok(manager) => manager,
            Err(e) => {
                warn!(error = %e, "failed to load embedded locale data");
                Self::empty()
            }
        }
    }

    fn empty() -> Self {
        LocaleManager {
            locale_settings: HashMap::new(),
            currencies: HashMap::new(),
            units: HashMap::new(),
            numbering_systems: HashMap::new(),
        }
    }

    /// Parse locale tables from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut data: LocaleData =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        // First resolve the base settings, then layer each locale over them
        let mut base_settings = LocaleSettings::default();
        if let Some(base) = data.locales.remove("base") {
            base.apply(&mut base_settings);
        }

        let mut locale_settings = HashMap::new();
        for (locale_id, entry) in data.locales {
            let mut settings = base_settings.clone();
            entry.apply(&mut settings);
            locale_settings.insert(locale_id, settings);
        }

        Ok(LocaleManager {
            locale_settings,
            currencies: data.currencies,
            units: data.units,
            numbering_systems: data.numbering_systems,
        })
    }

    /// Get the global locale manager instance
    pub fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Look up a locale tag, exactly first and then by its language subtag
    pub fn locale_settings(&self, tag: &str) -> Result<&LocaleSettings> {
        if let Some(settings) = self.locale_settings.get(tag) {
            return Ok(settings);
        }
        let language = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();
        self.locale_settings
            .get(&language)
            .ok_or_else(|| LocaleError::NotFound(tag.to_string()))
    }

    pub fn currency(&self, code: &str) -> Option<&CurrencyData> {
        self.currencies.get(code)
    }

    pub fn unit(&self, id: &str) -> Option<&UnitData> {
        self.units.get(id)
    }

    /// Zero digit of a numbering system; the other nine follow it
    pub fn zero_digit(&self, numbering_system: &str) -> Option<char> {
        self.numbering_systems.get(numbering_system).copied()
    }
}

/// Get locale settings by locale tag (e.g., "en", "de-CH", "pt_BR")
pub fn get_locale_settings(tag: &str) -> Option<LocaleSettings> {
    LocaleManager::get().locale_settings(tag).ok().cloned()
}

/// Get locale settings, falling back to English for unknown tags
pub fn resolve_locale_settings(tag: &str) -> LocaleSettings {
    let manager = LocaleManager::get();
    match manager.locale_settings(tag) {
        Ok(settings) => settings.clone(),
        Err(e) => {
            debug!(error = %e, "falling back to en");
            manager.locale_settings("en").cloned().unwrap_or_default()
        }
    }
}

/// Get the display forms of an ISO 4217 currency code
pub fn get_currency(code: &str) -> Option<CurrencyData> {
    LocaleManager::get().currency(code).cloned()
}

/// Get the display patterns of a unit id such as `meter`
pub fn get_unit(id: &str) -> Option<UnitData> {
    LocaleManager::get().unit(id).cloned()
}

/// Get the zero digit of a numbering system such as `thai`
pub fn get_zero_digit(numbering_system: &str) -> Option<char> {
    LocaleManager::get().zero_digit(numbering_system)
}
