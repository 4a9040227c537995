use serde_json::Value;

use super::{Evaluator, date};
use crate::error::{Mismatch, Outcome};
use crate::regex_cache::REGEX_CACHE;
use crate::spec::MatchSpec;

pub(super) fn compare(evaluator: &Evaluator<'_>, spec: &MatchSpec, text: &str, value: &Value) -> Outcome {
    if let MatchSpec::Operators(ops) = spec {
        if ops.has_date_keys() {
            return date::compare(evaluator, ops, value);
        }
        if let Some(pattern) = &ops.regexp {
            return regexp(pattern, text);
        }
    }
    Err(Mismatch::unknown_operator(&spec.describe(), "string"))
}

fn regexp(pattern: &str, text: &str) -> Outcome {
    let regex = REGEX_CACHE
        .get_or_compile(pattern)
        .map_err(|e| Mismatch::invalid_operand(e.to_string()).with_operator("$regexp"))?;

    if regex.is_match(text) {
        Ok(())
    } else {
        Err(Mismatch::value_mismatch(format!("regexp /{pattern}/ did not match {text:?}"))
            .with_operator("$regexp"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::MatcherConfig;
    use crate::error::MismatchKind;
    use crate::evaluator::Evaluator;
    use crate::spec::{MatchSpec, Operators};

    fn eval(spec: impl Into<MatchSpec>, value: serde_json::Value) -> crate::error::Outcome {
        Evaluator::new(&MatcherConfig::default()).evaluate(&spec.into(), &value)
    }

    #[test]
    fn regexp_matches() {
        assert!(eval(Operators::new().regexp("^a.*z$"), json!("abz")).is_ok());
        let err = eval(Operators::new().regexp("^a.*z$"), json!("abc")).expect_err("no z");
        assert_eq!(err.kind, MismatchKind::ValueMismatch);
        assert_eq!(err.operator.as_deref(), Some("$regexp"));
    }

    #[test]
    fn regexp_is_multi_line() {
        assert!(eval(Operators::new().regexp("^two$"), json!("one\ntwo")).is_ok());
    }

    #[test]
    fn malformed_pattern_is_an_invalid_operand() {
        let err = eval(Operators::new().regexp("(open"), json!("x")).expect_err("bad pattern");
        assert_eq!(err.kind, MismatchKind::InvalidOperand);
    }

    #[test]
    fn strings_have_no_default_success() {
        assert_eq!(
            eval(Operators::new().gt(1), json!("x")).map_err(|m| m.kind),
            Err(MismatchKind::OperatorMismatch)
        );
        assert_eq!(eval(3, json!("3")).map_err(|m| m.kind), Err(MismatchKind::OperatorMismatch));
    }
}
