//! Legacy decimal pattern translation
//!
//! Patterns such as `#,##0.00;(#,##0.00)` are translated into the same
//! `Skeleton` the skeleton parser produces. Syntax errors are fatal.

mod number;
mod tokens;

use tracing::trace;

use crate::errors::PatternError;
use crate::types::*;

use self::tokens::{PatternToken, tokenize};

/// Literal text around the placeholders of one subpattern
#[derive(Debug, Default, PartialEq)]
struct Subpattern {
    prefix: String,
    suffix: String,
}

impl Subpattern {
    fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    fn into_pair(self) -> (String, String) {
        (self.prefix, self.suffix)
    }
}

/// Literal text a token contributes to an affix
fn literal_text(token: &PatternToken, negative: bool) -> Result<String, PatternError> {
    Ok(match token {
        PatternToken::Literal(c) => c.to_string(),
        PatternToken::Quoted(text) => text.clone(),
        PatternToken::Unterminated(text) => {
            return Err(PatternError::UnterminatedQuote(text.clone()));
        }
        PatternToken::Minus if negative => "-".to_string(),
        PatternToken::Separator => ";".to_string(),
        _ => String::new(),
    })
}

/// Collects prefix and suffix text; text between placeholders is dropped
fn subpattern(tokens: &[PatternToken], negative: bool) -> Result<Subpattern, PatternError> {
    let first = tokens.iter().position(PatternToken::is_placeholder);
    let last = tokens.iter().rposition(PatternToken::is_placeholder);
    let mut sub = Subpattern::default();
    for (i, token) in tokens.iter().enumerate() {
        let text = literal_text(token, negative)?;
        match (first, last) {
            (Some(first), _) if i < first => sub.prefix.push_str(&text),
            (_, Some(last)) if i > last => sub.suffix.push_str(&text),
            (None, _) => sub.prefix.push_str(&text),
            _ => {}
        }
    }
    Ok(sub)
}

fn apply_units(
    tokens: &[PatternToken],
    currency: Option<&str>,
    skeleton: &mut Skeleton,
) -> Result<(), PatternError> {
    for token in tokens {
        match token {
            PatternToken::Currency(count) => {
                let width = match count {
                    1 => None,
                    2 => Some(UnitWidth::IsoCode),
                    3 => Some(UnitWidth::FullName),
                    5 => Some(UnitWidth::Narrow),
                    n => return Err(PatternError::CurrencyWidth(*n)),
                };
                let code = currency.ok_or(PatternError::MissingCurrency)?;
                skeleton.unit = Some(Unit::Currency(code.to_string()));
                if width.is_some() {
                    skeleton.unit_width = width;
                }
            }
            PatternToken::Percent => skeleton.unit = Some(Unit::Percent),
            PatternToken::Permille => skeleton.unit = Some(Unit::Permille),
            _ => {}
        }
    }
    Ok(())
}

/// Translate a legacy decimal pattern into a skeleton
///
/// # Arguments
/// * `pattern` - Pattern such as `#,##0.00 ¤`
/// * `currency` - ISO 4217 code substituted for `¤` placeholders
///
/// # Examples
/// ```
/// use number_skeleton::{parse_pattern_as_skeleton, Group, Sign};
///
/// let skeleton = parse_pattern_as_skeleton("#,##0.00;(#,##0.00)", None).unwrap();
/// assert_eq!(skeleton.group, Some(Group::Auto));
/// assert_eq!(skeleton.sign, Some(Sign::Never));
/// ```
pub fn parse_pattern_as_skeleton(
    pattern: &str,
    currency: Option<&str>,
) -> Result<Skeleton, PatternError> {
    let tokens = tokenize(pattern);
    trace!(pattern, ?tokens, "pattern tokens");

    let (positive, negative) = match tokens.iter().position(|t| *t == PatternToken::Separator) {
        Some(i) => (&tokens[..i], &tokens[i + 1..]),
        None => (&tokens[..], &tokens[..0]),
    };

    let mut skeleton = Skeleton::default();
    apply_units(positive, currency, &mut skeleton)?;
    apply_units(negative, currency, &mut skeleton)?;
    number::apply_number_run(positive, &mut skeleton)?;

    let pos = subpattern(positive, false)?;
    let neg = subpattern(negative, true)?;
    if !negative.is_empty() {
        skeleton.sign = Some(Sign::Never);
        skeleton.affix = Some(Affix {
            pos: pos.into_pair(),
            neg: Some(neg.into_pair()),
        });
    } else if !pos.is_empty() {
        skeleton.affix = Some(Affix {
            pos: pos.into_pair(),
            neg: None,
        });
    }

    Ok(skeleton)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affix_text_between_placeholders_is_dropped() {
        let sk = parse_pattern_as_skeleton("%+#", None).unwrap();
        assert_eq!(sk.unit, Some(Unit::Percent));
        assert_eq!(sk.affix, None);
    }

    #[test]
    fn test_minus_is_literal_only_in_negative() {
        let sk = parse_pattern_as_skeleton("-0.0", None).unwrap();
        assert_eq!(sk.affix, None);
        let sk = parse_pattern_as_skeleton("0.00+;0.00-", None).unwrap();
        let affix = sk.affix.unwrap();
        assert_eq!(affix.pos, ("".into(), "+".into()));
        assert_eq!(affix.neg, Some(("".into(), "-".into())));
    }

    #[test]
    fn test_empty_negative_is_ignored() {
        let sk = parse_pattern_as_skeleton("0.00;", None).unwrap();
        assert_eq!(sk.sign, None);
        assert_eq!(sk.affix, None);
    }

    #[test]
    fn test_currency_checks_width_first() {
        assert_eq!(
            parse_pattern_as_skeleton("¤¤¤¤", None),
            Err(PatternError::CurrencyWidth(4))
        );
        assert_eq!(
            parse_pattern_as_skeleton("¤0", None),
            Err(PatternError::MissingCurrency)
        );
    }
}
