//! Number skeletons and legacy number patterns, compiled into formatters
//!
//! ```
//! use number_skeleton::{get_formatter, parse_pattern_as_skeleton};
//!
//! let format = get_formatter("en", "compact-short currency/CAD", |_| {});
//! assert_eq!(format(42.0), "CA$42");
//!
//! let skeleton = parse_pattern_as_skeleton("#,##0.00", None).unwrap();
//! assert_eq!(skeleton.to_string(), "group-auto .00");
//! ```

pub mod errors;
pub mod locale;
pub mod options;
pub mod types;

mod compiler;
mod formatter;
mod mapper;
mod parser;
mod pattern;

// 导出主要 API
pub use compiler::{
    FormatFn, FormatterPlan, IntoSkeleton, SourceError, Step, compile, eval_formatter_source,
    get_formatter, get_formatter_source, get_formatter_with, get_pattern_formatter,
    get_pattern_formatter_source, load_formatter_source,
};
pub use errors::{Diagnostic, DiagnosticCode, PatternError};
pub use formatter::{LocaleFormatter, NumberFormatter};
pub use locale::{LocaleError, LocaleSettings};
pub use mapper::get_number_format_options;
pub use options::*;
pub use parser::parse_skeleton;
pub use pattern::parse_pattern_as_skeleton;
pub use types::*;
