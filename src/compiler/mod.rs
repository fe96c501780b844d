//! Formatter compiler
//!
//! A skeleton (or a legacy pattern, through the translator) is compiled into
//! a [`FormatterPlan`]. The plan has two backends: a closure that formats
//! values directly, and source text that can be stored and loaded again
//! with [`load_formatter_source`].

mod eval;
mod plan;
mod source;

use std::sync::Arc;

use crate::errors::{Diagnostic, PatternError};
use crate::formatter::{LocaleFormatter, NumberFormatter};
use crate::parser::parse_skeleton;
use crate::pattern::parse_pattern_as_skeleton;
use crate::types::Skeleton;

pub use self::eval::{SourceError, load_formatter_source};
pub use self::plan::{FormatterPlan, Step, compile};

/// A compiled formatter
pub type FormatFn = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Anything a formatter can be compiled from
pub trait IntoSkeleton {
    /// Resolve into a skeleton, reporting parse diagnostics to `on_error`
    fn into_skeleton(self, on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton;
}

impl IntoSkeleton for &str {
    fn into_skeleton(self, on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton {
        parse_skeleton(self, on_error)
    }
}

impl IntoSkeleton for String {
    fn into_skeleton(self, on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton {
        parse_skeleton(&self, on_error)
    }
}

impl IntoSkeleton for &String {
    fn into_skeleton(self, on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton {
        parse_skeleton(self, on_error)
    }
}

impl IntoSkeleton for Skeleton {
    fn into_skeleton(self, _on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton {
        self
    }
}

impl IntoSkeleton for &Skeleton {
    fn into_skeleton(self, _on_error: &mut dyn FnMut(Diagnostic)) -> Skeleton {
        self.clone()
    }
}

fn closure(plan: FormatterPlan, formatter: Arc<dyn NumberFormatter>) -> FormatFn {
    Box::new(move |value| plan.format_with(formatter.as_ref(), value))
}

/// Compile a formatter using the built-in [`LocaleFormatter`]
///
/// # Examples
/// ```
/// use number_skeleton::get_formatter;
///
/// let format = get_formatter("en", "sign-accounting currency/CAD", |_| {});
/// assert_eq!(format(-42.0), "(CA$42.00)");
/// ```
pub fn get_formatter(
    locale: &str,
    skeleton: impl IntoSkeleton,
    on_error: impl FnMut(Diagnostic),
) -> FormatFn {
    get_formatter_with(Arc::new(LocaleFormatter::new()), locale, skeleton, on_error)
}

/// Compile a formatter over a custom formatting primitive
pub fn get_formatter_with(
    formatter: Arc<dyn NumberFormatter>,
    locale: &str,
    skeleton: impl IntoSkeleton,
    on_error: impl FnMut(Diagnostic),
) -> FormatFn {
    closure(compile(locale, skeleton, on_error), formatter)
}

/// Compile a formatter into source text
///
/// The text is a closure expression calling `nf(locale, options, value)`
/// for the formatting primitive, with every datum inlined.
///
/// # Examples
/// ```
/// use number_skeleton::get_formatter_source;
///
/// let source = get_formatter_source("en", "currency/CAD", |_| {});
/// assert_eq!(source, r#"|x| nf("en", {"style":"currency","currency":"CAD"}, x)"#);
/// ```
pub fn get_formatter_source(
    locale: &str,
    skeleton: impl IntoSkeleton,
    on_error: impl FnMut(Diagnostic),
) -> String {
    source::emit(&compile(locale, skeleton, on_error))
}

/// Load source text with the built-in [`LocaleFormatter`] as `nf`
pub fn eval_formatter_source(source: &str) -> Result<FormatFn, SourceError> {
    load_formatter_source(source, Arc::new(LocaleFormatter::new()))
}

/// Compile a formatter from a legacy pattern such as `#,##0.00 ¤`
///
/// Pattern errors are fatal; diagnostics of the compilation that follows
/// go to `on_error`.
///
/// # Examples
/// ```
/// use number_skeleton::get_pattern_formatter;
///
/// let format = get_pattern_formatter("en", "#,##0.00;(#,##0.00)", None, |_| {}).unwrap();
/// assert_eq!(format(-1234.5), "(1,234.50)");
/// ```
pub fn get_pattern_formatter(
    locale: &str,
    pattern: &str,
    currency: Option<&str>,
    on_error: impl FnMut(Diagnostic),
) -> Result<FormatFn, PatternError> {
    let skeleton = parse_pattern_as_skeleton(pattern, currency)?;
    Ok(get_formatter(locale, skeleton, on_error))
}

/// Compile a legacy pattern into formatter source text
pub fn get_pattern_formatter_source(
    locale: &str,
    pattern: &str,
    currency: Option<&str>,
    on_error: impl FnMut(Diagnostic),
) -> Result<String, PatternError> {
    let skeleton = parse_pattern_as_skeleton(pattern, currency)?;
    Ok(get_formatter_source(locale, skeleton, on_error))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl NumberFormatter for Fixed {
        fn format(&self, locale: &str, _options: &crate::options::NumberFormatOptions, value: f64) -> String {
            format!("{locale}:{value}")
        }
    }

    #[test]
    fn test_skeleton_inputs_agree() {
        let text = "percent scale/100";
        let skeleton = parse_skeleton(text, |_| {});
        let expected = get_formatter("en", text, |_| {})(0.42);
        assert_eq!(get_formatter("en", text.to_string(), |_| {})(0.42), expected);
        assert_eq!(get_formatter("en", &skeleton, |_| {})(0.42), expected);
        assert_eq!(get_formatter("en", skeleton, |_| {})(0.42), expected);
        assert_eq!(expected, "42%");
    }

    #[test]
    fn test_custom_primitive() {
        let format = get_formatter_with(Arc::new(Fixed), "fi", "scale/2", |_| {});
        assert_eq!(format(21.0), "fi:42");

        let source = get_formatter_source("fi", "scale/2", |_| {});
        let loaded = load_formatter_source(&source, Arc::new(Fixed)).unwrap();
        assert_eq!(loaded(21.0), "fi:42");
    }

    #[test]
    fn test_pattern_errors_are_fatal() {
        let mut errors = Vec::new();
        let result = get_pattern_formatter("en", "¤0", None, |e| errors.push(e));
        assert!(matches!(result, Err(PatternError::MissingCurrency)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_pattern_source_round_trip() {
        let source = get_pattern_formatter_source("en", "#,##0.00 ¤", Some("EUR"), |_| {}).unwrap();
        let format = eval_formatter_source(&source).unwrap();
        let direct = get_pattern_formatter("en", "#,##0.00 ¤", Some("EUR"), |_| {}).unwrap();
        assert_eq!(format(1234.5), direct(1234.5));
    }
}
