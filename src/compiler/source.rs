//! Source text backend
//!
//! Emits a plan as a closure expression with every datum inlined:
//!
//! ```text
//! |x| affix(x, digits(nf("en", {"style":"percent"}, percent(scale(x, 100))), "๐"), ["", ""], ["(", ")"])
//! ```
//!
//! Strings and records are JSON literals. `eval` reads the same language.

use crate::compiler::plan::{FormatterPlan, Step};

fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn pair(pair: &(String, String)) -> String {
    format!("[{}, {}]", json_string(&pair.0), json_string(&pair.1))
}

/// Emit the source text of a plan
pub fn emit(plan: &FormatterPlan) -> String {
    let mut value = String::from("x");
    for step in &plan.steps {
        value = match step {
            Step::Scale(factor) => format!("scale({value}, {factor})"),
            Step::Percent => format!("percent({value})"),
        };
    }

    // Serializing a plain options record cannot fail
    let options = serde_json::to_string(&plan.options).unwrap_or_else(|_| "{}".to_string());
    let mut body = format!("nf({}, {options}, {value})", json_string(&plan.locale));

    if let Some(zero) = plan.zero_digit {
        body = format!("digits({body}, {})", json_string(&zero.to_string()));
    }

    if let Some(affix) = &plan.affix {
        let mut call = format!("affix(x, {body}, {}", pair(&affix.pos));
        if let Some(neg) = &affix.neg {
            call.push_str(&format!(", {}", pair(neg)));
        }
        call.push(')');
        body = call;
    }

    format!("|x| {body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::types::{Affix, Skeleton};

    #[test]
    fn test_emit_plain() {
        let plan = compile("en", "currency/CAD", |_| {});
        assert_eq!(
            emit(&plan),
            r#"|x| nf("en", {"style":"currency","currency":"CAD"}, x)"#
        );
    }

    #[test]
    fn test_emit_all_steps() {
        let plan = compile("en", "percent scale/100 precision-increment/0.05 numbering-system/thai", |_| {});
        assert_eq!(
            emit(&plan),
            concat!(
                r#"|x| digits(nf("en", {"style":"percent","minimumFractionDigits":2,"#,
                r#""maximumFractionDigits":2}, percent(scale(x, 100))), "๐")"#
            )
        );
    }

    #[test]
    fn test_emit_affix() {
        let skeleton = Skeleton {
            affix: Some(Affix {
                pos: ("".into(), "\"".into()),
                neg: Some(("(".into(), ")".into())),
            }),
            ..Default::default()
        };
        let plan = compile("en", skeleton, |_| {});
        assert_eq!(
            emit(&plan),
            r#"|x| affix(x, nf("en", {}, x), ["", "\""], ["(", ")"])"#
        );
    }
}
