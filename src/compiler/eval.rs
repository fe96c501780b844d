//! Evaluator for emitted formatter source
//!
//! Source text is parsed into an expression tree once, type checked while
//! it is turned into nested closures, and then runs without re-parsing.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::trace;
use winnow::ascii::{float, multispace0};
use winnow::combinator::{alt, cut_err, delimited, fail, peek, preceded, separated, terminated};
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::compiler::FormatFn;
use crate::compiler::plan::{apply_affix, percent, scale};
use crate::formatter::{NumberFormatter, transliterate};
use crate::options::NumberFormatOptions;

/// Failure to load formatter source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Invalid formatter source at offset {0}")]
    Syntax(usize),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("{function} expects {expected} arguments, found {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },
    #[error("{function} expects {expected} as argument {position}")]
    Type {
        function: String,
        position: usize,
        expected: &'static str,
    },
    #[error("Invalid options record: {0}")]
    Options(String),
}

/// Expression tree of formatter source
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    /// The formatted value, `x`
    Input,
    Number(f64),
    /// JSON string, list or record
    Json(Value),
    Call(String, Vec<Expr>),
}

fn ws<'s, O>(
    inner: impl Parser<&'s str, O, winnow::error::ErrMode<winnow::error::ContextError>>,
) -> impl Parser<&'s str, O, winnow::error::ErrMode<winnow::error::ContextError>> {
    delimited(multispace0, inner, multispace0)
}

fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c == '_').parse_next(input)
}

/// A JSON string, list or record; self-delimiting, so serde_json reads it in place
fn json_literal(input: &mut &str) -> ModalResult<Value> {
    let _ = peek(one_of(['"', '[', '{'])).parse_next(input)?;
    let text: &str = input;
    let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => {
            let offset = stream.byte_offset();
            *input = &text[offset..];
            Ok(value)
        }
        _ => fail.parse_next(input),
    }
}

fn call(input: &mut &str) -> ModalResult<Expr> {
    let name = terminated(identifier, ws('(')).parse_next(input)?;
    let args: Vec<Expr> = cut_err(terminated(separated(0.., ws(expr), ','), ')'))
        .parse_next(input)?;
    Ok(Expr::Call(name.to_string(), args))
}

fn expr(input: &mut &str) -> ModalResult<Expr> {
    alt((
        call,
        json_literal.map(Expr::Json),
        float::<_, f64, _>.map(Expr::Number),
        literal("x").value(Expr::Input),
    ))
    .parse_next(input)
}

/// `|x| EXPR`
fn lambda(input: &mut &str) -> ModalResult<Expr> {
    preceded(ws((literal("|"), ws("x"), literal("|"))), ws(expr)).parse_next(input)
}

type NumFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;
type StrFn = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Turns an expression tree into closures, checking argument types
struct Loader {
    formatter: Arc<dyn NumberFormatter>,
}

fn check_arity(function: &str, args: &[Expr], expected: &[usize]) -> Result<(), SourceError> {
    if expected.contains(&args.len()) {
        Ok(())
    } else {
        Err(SourceError::Arity {
            function: function.to_string(),
            expected: expected[0],
            found: args.len(),
        })
    }
}

fn type_error(function: &str, position: usize, expected: &'static str) -> SourceError {
    SourceError::Type {
        function: function.to_string(),
        position,
        expected,
    }
}

fn const_number(function: &str, position: usize, arg: &Expr) -> Result<f64, SourceError> {
    match arg {
        Expr::Number(n) => Ok(*n),
        _ => Err(type_error(function, position, "a number literal")),
    }
}

fn const_string(function: &str, position: usize, arg: &Expr) -> Result<String, SourceError> {
    match arg {
        Expr::Json(Value::String(s)) => Ok(s.clone()),
        _ => Err(type_error(function, position, "a string literal")),
    }
}

fn const_pair(function: &str, position: usize, arg: &Expr) -> Result<(String, String), SourceError> {
    match arg {
        Expr::Json(Value::Array(items)) => match items.as_slice() {
            [Value::String(prefix), Value::String(suffix)] => Ok((prefix.clone(), suffix.clone())),
            _ => Err(type_error(function, position, "a pair of strings")),
        },
        _ => Err(type_error(function, position, "a pair of strings")),
    }
}

impl Loader {
    fn number(&self, expr: &Expr) -> Result<NumFn, SourceError> {
        match expr {
            Expr::Input => Ok(Box::new(|x| x)),
            Expr::Number(n) => {
                let n = *n;
                Ok(Box::new(move |_| n))
            }
            Expr::Call(name, args) => match name.as_str() {
                "scale" => {
                    check_arity(name, args, &[2])?;
                    let value = self.number(&args[0])?;
                    let factor = const_number(name, 2, &args[1])?;
                    Ok(Box::new(move |x| scale(value(x), factor)))
                }
                "percent" => {
                    check_arity(name, args, &[1])?;
                    let value = self.number(&args[0])?;
                    Ok(Box::new(move |x| percent(value(x))))
                }
                "nf" | "digits" | "affix" => Err(type_error(name, 0, "a number")),
                _ => Err(SourceError::UnknownFunction(name.clone())),
            },
            Expr::Json(_) => Err(type_error("expression", 0, "a number")),
        }
    }

    fn string(&self, expr: &Expr) -> Result<StrFn, SourceError> {
        match expr {
            Expr::Json(Value::String(s)) => {
                let s = s.clone();
                Ok(Box::new(move |_| s.clone()))
            }
            Expr::Call(name, args) => match name.as_str() {
                "nf" => {
                    check_arity(name, args, &[3])?;
                    let locale = const_string(name, 1, &args[0])?;
                    let options: NumberFormatOptions = match &args[1] {
                        Expr::Json(record @ Value::Object(_)) => serde_json::from_value(record.clone())
                            .map_err(|e| SourceError::Options(e.to_string()))?,
                        _ => return Err(type_error(name, 2, "an options record")),
                    };
                    let value = self.number(&args[2])?;
                    let formatter = Arc::clone(&self.formatter);
                    Ok(Box::new(move |x| formatter.format(&locale, &options, value(x))))
                }
                "digits" => {
                    check_arity(name, args, &[2])?;
                    let text = self.string(&args[0])?;
                    let zero = const_string(name, 2, &args[1])?;
                    let mut chars = zero.chars();
                    let (Some(zero), None) = (chars.next(), chars.next()) else {
                        return Err(type_error(name, 2, "a single digit"));
                    };
                    Ok(Box::new(move |x| transliterate(&text(x), zero)))
                }
                "affix" => {
                    check_arity(name, args, &[3, 4])?;
                    let value = self.number(&args[0])?;
                    let text = self.string(&args[1])?;
                    let pos = const_pair(name, 3, &args[2])?;
                    let neg = match args.get(3) {
                        Some(arg) => Some(const_pair(name, 4, arg)?),
                        None => None,
                    };
                    Ok(Box::new(move |x| apply_affix(value(x), &text(x), &pos, neg.as_ref())))
                }
                "scale" | "percent" => Err(type_error(name, 0, "a string")),
                _ => Err(SourceError::UnknownFunction(name.clone())),
            },
            _ => Err(type_error("expression", 0, "a string")),
        }
    }
}

/// Load formatter source text, formatting through `formatter`
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use number_skeleton::{get_formatter_source, load_formatter_source, LocaleFormatter};
///
/// let source = get_formatter_source("en", "currency/CAD", |_| {});
/// let format = load_formatter_source(&source, Arc::new(LocaleFormatter::new())).unwrap();
/// assert_eq!(format(42.0), "CA$42.00");
/// ```
pub fn load_formatter_source(
    source: &str,
    formatter: Arc<dyn NumberFormatter>,
) -> Result<FormatFn, SourceError> {
    let tree = lambda
        .parse(source)
        .map_err(|e| SourceError::Syntax(e.offset()))?;
    trace!(?tree, "formatter source");
    let loader = Loader { formatter };
    loader.string(&tree)
}
