//! Error types
//!
//! Two disjoint tiers: `PatternError` aborts pattern translation, while
//! `Diagnostic` values are handed to a callback and never interrupt the
//! skeleton parser, the options mapper or the formatter compiler.

use std::fmt;

use thiserror::Error;

/// Kind of a non-fatal diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Unknown stem; the stem was ignored
    BadStem,
    /// Stem requires an option that was not given; the stem was ignored
    MissingOption,
    /// Stem was given more options than it accepts
    TooManyOptions,
    /// Option value failed its grammar; the stem was ignored
    BadOption,
    /// Stem was understood, but its behavior is only approximated
    Unsupported,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::BadStem => "BAD_STEM",
            DiagnosticCode::MissingOption => "MISSING_OPTION",
            DiagnosticCode::TooManyOptions => "TOO_MANY_OPTIONS",
            DiagnosticCode::BadOption => "BAD_OPTION",
            DiagnosticCode::Unsupported => "UNSUPPORTED",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal anomaly: the request was only partially honored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub stem: String,
    /// Offending option text, or the original text of an unsupported value
    pub source: Option<String>,
}

fn describe(d: &Diagnostic) -> String {
    let stem = &d.stem;
    match (d.code, &d.source) {
        (DiagnosticCode::BadStem, _) => format!("Unknown stem: {stem}"),
        (DiagnosticCode::MissingOption, _) => format!("A {stem} stem requires an option"),
        (DiagnosticCode::TooManyOptions, Some(extra)) => {
            format!("Too many options for {stem}, ignoring {extra}")
        }
        (DiagnosticCode::TooManyOptions, None) => format!("Too many options for {stem}"),
        (DiagnosticCode::BadOption, Some(option)) => format!("Bad option for {stem}: {option}"),
        (DiagnosticCode::BadOption, None) => format!("Bad option for {stem}"),
        (DiagnosticCode::Unsupported, Some(source)) => {
            format!("The stem {stem} is not supported with value {source}")
        }
        (DiagnosticCode::Unsupported, None) => format!("The stem {stem} is not supported"),
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

impl std::error::Error for Diagnostic {}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, stem: impl Into<String>, source: Option<String>) -> Self {
        Diagnostic {
            code,
            stem: stem.into(),
            source,
        }
    }

    pub fn bad_stem(stem: impl Into<String>) -> Self {
        Diagnostic::new(DiagnosticCode::BadStem, stem, None)
    }

    pub fn missing_option(stem: impl Into<String>) -> Self {
        Diagnostic::new(DiagnosticCode::MissingOption, stem, None)
    }

    pub fn too_many_options(stem: impl Into<String>, extra: &[&str]) -> Self {
        Diagnostic::new(DiagnosticCode::TooManyOptions, stem, Some(extra.join("/")))
    }

    pub fn bad_option(stem: impl Into<String>, option: impl Into<String>) -> Self {
        Diagnostic::new(DiagnosticCode::BadOption, stem, Some(option.into()))
    }

    pub fn unsupported(stem: impl Into<String>, source: Option<String>) -> Self {
        Diagnostic::new(DiagnosticCode::Unsupported, stem, source)
    }
}

/// Fatal legacy pattern syntax error.
///
/// The messages are stable; callers may match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern has # after integer digits")]
    HashAfterIntegerDigits,
    #[error("Pattern has digits after # in fraction")]
    DigitsAfterHashInFraction,
    #[error("Pattern sets multiple precisions")]
    MultiplePrecisions,
    #[error("Pattern has more than one decimal separator")]
    MultipleDecimalSeparators,
    #[error("Pattern has more than one exponent")]
    MultipleExponents,
    #[error("Exponential patterns may not contain grouping separators")]
    GroupingInExponential,
    #[error("The ¤ pattern requires a currency")]
    MissingCurrency,
    #[error("Invalid number ({0}) of ¤ chars in pattern")]
    CurrencyWidth(usize),
    #[error("Unterminated quoted literal in pattern: {0}")]
    UnterminatedQuote(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_messages() {
        assert_eq!(
            PatternError::CurrencyWidth(4).to_string(),
            "Invalid number (4) of ¤ chars in pattern"
        );
        assert_eq!(
            PatternError::UnterminatedQuote("foo".into()).to_string(),
            "Unterminated quoted literal in pattern: foo"
        );
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(Diagnostic::bad_stem("foo").to_string(), "Unknown stem: foo");
        assert_eq!(
            Diagnostic::unsupported("precision-increment", Some("0.05".into())).to_string(),
            "The stem precision-increment is not supported with value 0.05"
        );
        assert_eq!(DiagnosticCode::TooManyOptions.to_string(), "TOO_MANY_OPTIONS");
    }

    #[test]
    fn test_diagnostic_source_field_is_not_a_cause() {
        let diagnostic = Diagnostic::bad_option("scale", "abc");
        assert_eq!(diagnostic.source.as_deref(), Some("abc"));
        let error: Box<dyn std::error::Error> = Box::new(diagnostic);
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "Bad option for scale: abc");
    }
}
