use number_skeleton::*;
use serde_json::{Value, json};

fn map(skeleton: Skeleton) -> (Value, Vec<Diagnostic>) {
    let mut errors = Vec::new();
    let options = get_number_format_options(&skeleton, |e| errors.push(e));
    (serde_json::to_value(options).unwrap(), errors)
}

fn unsupported(stem: &str, source: Option<&str>) -> Diagnostic {
    Diagnostic::unsupported(stem, source.map(str::to_string))
}

fn check(skeleton: Skeleton, expected: Value, diagnostics: Vec<Diagnostic>) {
    let description = format!("{skeleton:?}");
    let (options, errors) = map(skeleton);
    assert_eq!(options, expected, "{description}");
    assert_eq!(errors, diagnostics, "{description}");
}

#[test]
fn test_units() {
    let unit = |unit| Skeleton {
        unit: Some(unit),
        ..Default::default()
    };
    check(unit(Unit::BaseUnit), json!({"style": "decimal"}), vec![]);
    check(
        unit(Unit::Currency("EUR".into())),
        json!({"style": "currency", "currency": "EUR"}),
        vec![],
    );
    check(
        unit(Unit::MeasureUnit("length-meter".into())),
        json!({"style": "unit", "unit": "meter"}),
        vec![],
    );
    check(
        Skeleton {
            unit_per: Some("duration-second".into()),
            ..unit(Unit::MeasureUnit("length-meter".into()))
        },
        json!({"style": "unit", "unit": "meter-per-second"}),
        vec![],
    );
    check(unit(Unit::Percent), json!({"style": "percent"}), vec![]);
    check(unit(Unit::Permille), json!({}), vec![unsupported("permille", None)]);
}

#[test]
fn test_unit_widths() {
    let width = |width| Skeleton {
        unit_width: Some(width),
        ..Default::default()
    };
    check(
        width(UnitWidth::FullName),
        json!({"currencyDisplay": "name", "unitDisplay": "long"}),
        vec![],
    );
    check(
        width(UnitWidth::Hidden),
        json!({}),
        vec![unsupported("unit-width-hidden", None)],
    );
    check(width(UnitWidth::IsoCode), json!({"currencyDisplay": "code"}), vec![]);
    check(
        width(UnitWidth::Narrow),
        json!({"currencyDisplay": "narrowSymbol", "unitDisplay": "narrow"}),
        vec![],
    );
    check(
        width(UnitWidth::Short),
        json!({"currencyDisplay": "symbol", "unitDisplay": "short"}),
        vec![],
    );
}

#[test]
fn test_groups() {
    let group = |group| Skeleton {
        group: Some(group),
        ..Default::default()
    };
    check(group(Group::Auto), json!({"useGrouping": true}), vec![]);
    check(group(Group::Off), json!({"useGrouping": false}), vec![]);
    for (g, stem) in [
        (Group::Min2, "group-min2"),
        (Group::OnAligned, "group-on-aligned"),
        (Group::Thousands, "group-thousands"),
    ] {
        check(group(g), json!({}), vec![unsupported(stem, None)]);
    }
}

#[test]
fn test_integer_width() {
    check(
        Skeleton {
            integer_width: Some(IntegerWidth {
                min: 2,
                max: None,
                source: None,
            }),
            ..Default::default()
        },
        json!({"minimumIntegerDigits": 2}),
        vec![],
    );
    check(
        Skeleton {
            integer_width: Some(IntegerWidth {
                min: 0,
                max: Some(2),
                source: Some("SRC".into()),
            }),
            ..Default::default()
        },
        json!({}),
        vec![unsupported("integer-width", Some("SRC"))],
    );
}

#[test]
fn test_precision() {
    let precision = |precision| Skeleton {
        precision: Some(precision),
        ..Default::default()
    };
    check(
        precision(Precision::Fraction(FractionPrecision {
            min_fraction: Some(2),
            max_fraction: Some(4),
            ..Default::default()
        })),
        json!({"minimumFractionDigits": 2, "maximumFractionDigits": 4}),
        vec![],
    );
    check(
        precision(Precision::Fraction(FractionPrecision {
            min_significant: Some(2),
            max_significant: Some(4),
            ..Default::default()
        })),
        json!({"minimumSignificantDigits": 2, "maximumSignificantDigits": 4}),
        vec![],
    );
    check(
        precision(Precision::Fraction(FractionPrecision {
            min_fraction: Some(2),
            max_fraction: Some(4),
            min_significant: Some(3),
            max_significant: Some(6),
            source: Some("SRC".into()),
        })),
        json!({
            "minimumFractionDigits": 2,
            "maximumFractionDigits": 4,
            "minimumSignificantDigits": 3,
            "maximumSignificantDigits": 6
        }),
        vec![unsupported("precision-fraction", Some("SRC"))],
    );
    check(precision(Precision::Integer), json!({"maximumFractionDigits": 0}), vec![]);
    check(precision(Precision::Unlimited), json!({"maximumFractionDigits": 20}), vec![]);
    check(precision(Precision::CurrencyStandard), json!({}), vec![]);
    check(
        precision(Precision::CurrencyCash),
        json!({}),
        vec![unsupported("precision-currency-cash", None)],
    );
    check(
        precision(Precision::Increment(2.0)),
        json!({}),
        vec![unsupported("precision-increment", Some("2"))],
    );
}

#[test]
fn test_notation() {
    let notation = |notation| Skeleton {
        notation: Some(notation),
        ..Default::default()
    };
    check(
        notation(Notation::CompactShort),
        json!({"notation": "compact", "compactDisplay": "short"}),
        vec![],
    );
    check(
        notation(Notation::CompactLong),
        json!({"notation": "compact", "compactDisplay": "long"}),
        vec![],
    );
    check(notation(Notation::Standard), json!({"notation": "standard"}), vec![]);
    check(
        notation(Notation::Scientific(ExponentFormat::default())),
        json!({"notation": "scientific"}),
        vec![],
    );
    check(
        notation(Notation::Scientific(ExponentFormat {
            exp_sign: Some(Sign::Accounting),
            source: Some("SRC".into()),
            ..Default::default()
        })),
        json!({"notation": "scientific"}),
        vec![unsupported("scientific", Some("SRC"))],
    );
    check(
        notation(Notation::Engineering(ExponentFormat {
            source: Some("STR".into()),
            ..Default::default()
        })),
        json!({"notation": "engineering"}),
        vec![],
    );
    check(
        notation(Notation::Engineering(ExponentFormat {
            exp_digits: Some(2),
            source: Some("SRC".into()),
            ..Default::default()
        })),
        json!({"notation": "engineering"}),
        vec![unsupported("engineering", Some("SRC"))],
    );
}

#[test]
fn test_signs() {
    let sign = |sign| Skeleton {
        sign: Some(sign),
        ..Default::default()
    };
    check(sign(Sign::Auto), json!({"signDisplay": "auto"}), vec![]);
    check(sign(Sign::Always), json!({"signDisplay": "always"}), vec![]);
    check(sign(Sign::ExceptZero), json!({"signDisplay": "exceptZero"}), vec![]);
    check(sign(Sign::Never), json!({"signDisplay": "never"}), vec![]);
    check(sign(Sign::Accounting), json!({"currencySign": "accounting"}), vec![]);
    check(
        sign(Sign::AccountingAlways),
        json!({"currencySign": "accounting", "signDisplay": "always"}),
        vec![],
    );
    check(
        sign(Sign::AccountingExceptZero),
        json!({"currencySign": "accounting", "signDisplay": "exceptZero"}),
        vec![],
    );
}

#[test]
fn test_decimal_and_rounding_modes() {
    check(
        Skeleton {
            decimal: Some(Decimal::Always),
            ..Default::default()
        },
        json!({}),
        vec![unsupported("decimal-always", None)],
    );
    let modes = [
        (RoundingMode::Ceiling, "rounding-mode-ceiling"),
        (RoundingMode::Floor, "rounding-mode-floor"),
        (RoundingMode::Down, "rounding-mode-down"),
        (RoundingMode::Up, "rounding-mode-up"),
        (RoundingMode::HalfEven, "rounding-mode-half-even"),
        (RoundingMode::HalfDown, "rounding-mode-half-down"),
        (RoundingMode::HalfUp, "rounding-mode-half-up"),
        (RoundingMode::Unnecessary, "rounding-mode-unnecessary"),
    ];
    for (mode, stem) in modes {
        check(
            Skeleton {
                rounding_mode: Some(mode),
                ..Default::default()
            },
            json!({}),
            vec![unsupported(stem, None)],
        );
    }
}

#[test]
fn test_options_round_trip_through_json() {
    let skeleton = parse_skeleton("currency/EUR unit-width-narrow sign-accounting-always .00", |_| {});
    let options = get_number_format_options(&skeleton, |_| {});
    let text = serde_json::to_string(&options).unwrap();
    let back: NumberFormatOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(back, options);
}
