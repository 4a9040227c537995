//! Date comparison for `$after` / `$before`

use serde_json::Value;

use super::Evaluator;
use crate::datetime::{DateParser, Instant};
use crate::error::{Mismatch, MismatchKind, Outcome};
use crate::spec::{DateOperand, OperatorSet};

pub(super) fn compare(evaluator: &Evaluator<'_>, ops: &OperatorSet, value: &Value) -> Outcome {
    if ops.after.is_none() && ops.before.is_none() {
        return Err(Mismatch::new(
            MismatchKind::OperatorMismatch,
            "unknown operator: a date spec needs $after or $before",
        )
        .with_operator("$date"));
    }

    let parser = DateParser::new(&evaluator.config().locale);
    let instant = subject_instant(&parser, ops, value)?;

    if let Some(operand) = &ops.after {
        let bound = operand_instant(&parser, operand, "$after")?;
        if instant <= bound {
            return Err(Mismatch::value_mismatch(format!(
                "date {instant} is not after $after {bound}"
            ))
            .with_operator("$after"));
        }
    }

    if let Some(operand) = &ops.before {
        let bound = operand_instant(&parser, operand, "$before")?;
        if instant >= bound {
            return Err(Mismatch::value_mismatch(format!(
                "date {instant} is not before $before {bound}"
            ))
            .with_operator("$before"));
        }
    }

    Ok(())
}

fn subject_instant(parser: &DateParser<'_>, ops: &OperatorSet, value: &Value) -> Outcome<Instant> {
    let instant = match value {
        Value::Number(n) => n.as_f64().and_then(DateParser::from_timestamp),
        Value::String(text) => parser.parse(text, ops.format.as_deref()),
        _ => None,
    };
    instant.ok_or_else(|| Mismatch::value_mismatch(format!("{value} is not a parseable date")))
}

fn operand_instant(parser: &DateParser<'_>, operand: &DateOperand, operator: &str) -> Outcome<Instant> {
    let instant = match operand {
        DateOperand::Text(text) => parser.parse(text, None),
        DateOperand::Timestamp(millis) => DateParser::from_timestamp(*millis),
        DateOperand::Formatted { date, format } => parser.parse(date, format.as_deref()),
    };
    instant.ok_or_else(|| {
        Mismatch::invalid_operand(format!("no date to parse in {operand:?}")).with_operator(operator)
    })
}
