use serde_json::Value;

use super::{Evaluator, date, equality};
use crate::error::{Mismatch, MismatchKind, Outcome};
use crate::spec::{MatchSpec, OperatorSet};

pub(super) fn compare(evaluator: &Evaluator<'_>, spec: &MatchSpec, number: f64, value: &Value) -> Outcome {
    if let MatchSpec::Operators(ops) = spec {
        if ops.has_date_keys() {
            return date::compare(evaluator, ops, value);
        }
        if let Some(expected) = &ops.eq {
            return equality::equals(expected, value).map_err(|m| m.with_operator("$eq"));
        }
        if let Some(candidates) = &ops.one_of {
            return equality::member_of(value, candidates).map_err(|m| m.with_operator("$in"));
        }
        if ops.has_range() {
            return check_range(ops, number);
        }
    }

    if evaluator.config().permissive_numeric {
        Ok(())
    } else {
        Err(Mismatch::new(
            MismatchKind::OperatorMismatch,
            format!("no numeric operator in {}", spec.describe()),
        ))
    }
}

fn check_range(ops: &OperatorSet, number: f64) -> Outcome {
    if let Some(bound) = ops.gte {
        if number < bound {
            return Err(below(number, bound, "$gte"));
        }
    }
    if let Some(bound) = ops.gt {
        if number <= bound {
            return Err(below(number, bound, "$gt"));
        }
    }
    if let Some(bound) = ops.lte {
        if number > bound {
            return Err(above(number, bound, "$lte"));
        }
    }
    if let Some(bound) = ops.lt {
        if number >= bound {
            return Err(above(number, bound, "$lt"));
        }
    }
    Ok(())
}

fn below(number: f64, bound: f64, operator: &str) -> Mismatch {
    Mismatch::value_mismatch(format!("below lower boundary: {number} vs {operator} {bound}"))
        .with_operator(operator)
}

fn above(number: f64, bound: f64, operator: &str) -> Mismatch {
    Mismatch::value_mismatch(format!("above upper boundary: {number} vs {operator} {bound}"))
        .with_operator(operator)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::MatcherConfig;
    use crate::error::MismatchKind;
    use crate::evaluator::Evaluator;
    use crate::spec::{MatchSpec, Operators};

    fn eval_with(config: &MatcherConfig, spec: impl Into<MatchSpec>, value: serde_json::Value) -> crate::error::Outcome {
        Evaluator::new(config).evaluate(&spec.into(), &value)
    }

    fn eval(spec: impl Into<MatchSpec>, value: serde_json::Value) -> crate::error::Outcome {
        eval_with(&MatcherConfig::default(), spec, value)
    }

    #[test]
    fn inclusive_and_exclusive_bounds() {
        assert!(eval(Operators::new().gte(5), json!(5)).is_ok());
        assert!(eval(Operators::new().gt(5), json!(5)).is_err());
        assert!(eval(Operators::new().lte(5), json!(5)).is_ok());
        assert!(eval(Operators::new().lt(5), json!(5)).is_err());
        assert!(eval(Operators::new().gte(1).lt(10), json!(9.5)).is_ok());
    }

    #[test]
    fn range_violations_name_the_boundary() {
        let low = eval(Operators::new().gte(10), json!(3)).expect_err("too small");
        assert!(low.message.starts_with("below lower boundary"));
        assert_eq!(low.operator.as_deref(), Some("$gte"));

        let high = eval(Operators::new().lt(10), json!(30)).expect_err("too big");
        assert!(high.message.starts_with("above upper boundary"));
    }

    #[test]
    fn eq_and_in() {
        assert!(eval(Operators::new().equals(2), json!(2.0)).is_ok());
        assert!(eval(Operators::new().one_of([1, 2, 3]), json!(2)).is_ok());
        let err = eval(Operators::new().one_of([1, 2, 3]), json!(4)).expect_err("not listed");
        assert_eq!(err.operator.as_deref(), Some("$in"));
    }

    #[test]
    fn eq_wins_over_range() {
        assert!(eval(Operators::new().equals(3).gt(100), json!(3)).is_ok());
    }

    #[test]
    fn permissive_fallthrough_can_be_disabled() {
        assert!(eval("five", json!(5)).is_ok());
        assert!(eval(Operators::new().regexp("x"), json!(5)).is_ok());

        let strict = MatcherConfig::default().permissive_numeric(false);
        let err = eval_with(&strict, "five", json!(5)).expect_err("no numeric operator");
        assert_eq!(err.kind, MismatchKind::OperatorMismatch);
        assert!(eval_with(&strict, Operators::new().gt(1), json!(5)).is_ok());
    }
}
