use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::token::{any, literal, none_of, take_while};
use winnow::{ModalResult, Parser};

/// A single token of a legacy decimal pattern
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    /// Unquoted literal character
    Literal(char),
    /// Quoted literal text, quotes removed
    Quoted(String),
    /// Quoted literal text with no closing quote
    Unterminated(String),
    /// Padding specifier `*x`
    Pad(char),
    /// Run of `¤` characters
    Currency(usize),
    /// `%`
    Percent,
    /// `‰`
    Permille,
    /// Unquoted `-`
    Minus,
    /// Subpattern separator `;`
    Separator,
    /// Run of `#` optional digits
    Optional(u32),
    /// Run of `0`-`9` required digits
    Digits(String),
    /// `@@##`: `min` required and `width` total significant digits
    Significant { min: u32, width: u32 },
    /// Grouping separator `,`
    Group,
    /// Decimal separator `.`
    DecimalPoint,
    /// `E`, `E+` followed by exponent digits
    Exponent { digits: u32, plus: bool },
}

impl PatternToken {
    /// Tokens that belong to the number or stand in for a value-dependent symbol
    pub fn is_placeholder(&self) -> bool {
        !matches!(
            self,
            PatternToken::Literal(_)
                | PatternToken::Quoted(_)
                | PatternToken::Unterminated(_)
                | PatternToken::Pad(_)
                | PatternToken::Minus
                | PatternToken::Separator
        )
    }
}

fn count(s: &str) -> u32 {
    s.chars().count() as u32
}

pub fn parse_escaped_quote(input: &mut &str) -> ModalResult<PatternToken> {
    literal("''").value(PatternToken::Literal('\'')).parse_next(input)
}

pub fn parse_quoted(input: &mut &str) -> ModalResult<PatternToken> {
    let _ = '\''.parse_next(input)?;
    let text: String =
        repeat(0.., alt((literal("''").value('\''), none_of('\'')))).parse_next(input)?;
    let closed = opt('\'').parse_next(input)?.is_some();
    Ok(if closed {
        PatternToken::Quoted(text)
    } else {
        PatternToken::Unterminated(text)
    })
}

pub fn parse_pad(input: &mut &str) -> ModalResult<PatternToken> {
    preceded('*', any).map(PatternToken::Pad).parse_next(input)
}

pub fn parse_currency(input: &mut &str) -> ModalResult<PatternToken> {
    take_while(1.., '¤')
        .map(|run: &str| PatternToken::Currency(run.chars().count()))
        .parse_next(input)
}

pub fn parse_symbol(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        '%'.value(PatternToken::Percent),
        '‰'.value(PatternToken::Permille),
        '-'.value(PatternToken::Minus),
        ';'.value(PatternToken::Separator),
        ','.value(PatternToken::Group),
        '.'.value(PatternToken::DecimalPoint),
    ))
    .parse_next(input)
}

pub fn parse_significant(input: &mut &str) -> ModalResult<PatternToken> {
    (take_while(1.., '@'), take_while(0.., '#'))
        .map(|(ats, hashes): (&str, &str)| PatternToken::Significant {
            min: count(ats),
            width: count(ats) + count(hashes),
        })
        .parse_next(input)
}

pub fn parse_optional_digits(input: &mut &str) -> ModalResult<PatternToken> {
    take_while(1.., '#')
        .map(|run: &str| PatternToken::Optional(count(run)))
        .parse_next(input)
}

pub fn parse_required_digits(input: &mut &str) -> ModalResult<PatternToken> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .map(|run: &str| PatternToken::Digits(run.to_string()))
        .parse_next(input)
}

pub fn parse_exponent(input: &mut &str) -> ModalResult<PatternToken> {
    preceded('E', (opt('+'), take_while(1.., '0')))
        .map(|(plus, zeros): (Option<char>, &str)| PatternToken::Exponent {
            digits: count(zeros),
            plus: plus.is_some(),
        })
        .parse_next(input)
}

pub fn parse_literal(input: &mut &str) -> ModalResult<PatternToken> {
    any.map(PatternToken::Literal).parse_next(input)
}

/// Parse a single pattern token
pub fn parse_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_escaped_quote,
        parse_quoted,
        parse_pad,
        parse_currency,
        parse_significant,
        parse_optional_digits,
        parse_required_digits,
        parse_exponent,
        parse_symbol,
        parse_literal,
    ))
    .parse_next(input)
}

/// Split a whole pattern into tokens
pub fn tokenize(pattern: &str) -> Vec<PatternToken> {
    // Every character is at least a literal, so this cannot fail.
    repeat(0.., parse_token)
        .parse(pattern)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PatternToken::*;

    #[test]
    fn test_number_tokens() {
        assert_eq!(
            tokenize("#,##0.00"),
            vec![
                Optional(1),
                Group,
                Optional(2),
                Digits("0".into()),
                DecimalPoint,
                Digits("00".into()),
            ]
        );
        assert_eq!(
            tokenize("@@#E+00"),
            vec![Significant { min: 2, width: 3 }, Exponent { digits: 2, plus: true }]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(tokenize("'#'"), vec![Quoted("#".into())]);
        assert_eq!(tokenize("o''c"), vec![Literal('o'), Literal('\''), Literal('c')]);
        assert_eq!(tokenize("'a''b'"), vec![Quoted("a'b".into())]);
        assert_eq!(
            tokenize("0'foo"),
            vec![Digits("0".into()), Unterminated("foo".into())]
        );
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(tokenize("E*"), vec![Literal('E'), Literal('*')]);
        assert_eq!(tokenize("E+x"), vec![Literal('E'), Literal('+'), Literal('x')]);
    }

    #[test]
    fn test_pad_and_currency() {
        assert_eq!(tokenize("*x¤¤"), vec![Pad('x'), Currency(2)]);
        assert_eq!(tokenize("‰;-"), vec![Permille, Separator, Minus]);
    }
}
