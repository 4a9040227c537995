//! JSON spec validation
//!
//! Turns a JSON-shaped spec into a `MatchSpec`, checking operator payload
//! shapes up front so evaluation never has to.

use serde_json::{Map, Value};

use super::operators::{DateOperand, OperatorSet};
use super::{Literal, MatchSpec, OrBranch};
use crate::error::{QueryError, QueryResult};

pub(super) fn parse_spec(path: &str, value: &Value) -> QueryResult<MatchSpec> {
    match value {
        Value::Array(_) => Err(QueryError::unsupported_spec(
            path,
            "array literals never compare equal; use $contains to match array content",
        )),
        Value::Object(map) => parse_object(path, map),
        scalar => Literal::from_json(scalar).map(MatchSpec::Literal).ok_or_else(|| {
            QueryError::unsupported_spec(path, format!("number {scalar} is not representable"))
        }),
    }
}

fn parse_object(path: &str, map: &Map<String, Value>) -> QueryResult<MatchSpec> {
    // $not wins over every other key, then $or
    if let Some(inner) = map.get("$not") {
        return Ok(MatchSpec::Not(Box::new(parse_spec(path, inner)?)));
    }
    if let Some(branches) = map.get("$or") {
        return parse_or(path, branches);
    }
    parse_operators(path, map).map(MatchSpec::from)
}

fn parse_or(path: &str, payload: &Value) -> QueryResult<MatchSpec> {
    let Value::Object(entries) = payload else {
        return Err(QueryError::invalid_operand(
            path,
            "$or",
            "expected an object mapping operator names to specs",
        ));
    };

    let mut branches = Vec::with_capacity(entries.len());
    for (name, sub_spec) in entries {
        let mut singleton = Map::new();
        singleton.insert(name.clone(), sub_spec.clone());
        let spec = parse_object(path, &singleton)?;
        branches.push(OrBranch::new(name.clone(), spec));
    }
    Ok(MatchSpec::Or(branches))
}

fn parse_operators(path: &str, map: &Map<String, Value>) -> QueryResult<OperatorSet> {
    let mut ops = OperatorSet::new();

    for (op, payload) in map {
        match op.as_str() {
            "$eq" => ops.eq = Some(payload.clone()),
            "$in" => {
                let values = payload.as_array().ok_or_else(|| {
                    QueryError::invalid_operand(path, op, "$in requires an array")
                })?;
                ops.one_of = Some(values.clone());
            }
            "$gte" => ops.gte = Some(number_operand(path, op, payload)?),
            "$gt" => ops.gt = Some(number_operand(path, op, payload)?),
            "$lte" => ops.lte = Some(number_operand(path, op, payload)?),
            "$lt" => ops.lt = Some(number_operand(path, op, payload)?),
            "$after" => ops.after = Some(date_operand(path, op, payload)?),
            "$before" => ops.before = Some(date_operand(path, op, payload)?),
            "$date" => ops.date = Some(payload.clone()),
            "$format" => ops.format = Some(string_operand(path, op, payload)?),
            "$regexp" => ops.regexp = Some(string_operand(path, op, payload)?),
            "$contains" => ops.contains = Some(payload.clone()),
            _ => return Err(QueryError::unknown_operator(path, op)),
        }
    }

    Ok(ops)
}

fn number_operand(path: &str, op: &str, payload: &Value) -> QueryResult<f64> {
    payload
        .as_f64()
        .ok_or_else(|| QueryError::invalid_operand(path, op, format!("expected a number, got {payload}")))
}

fn string_operand(path: &str, op: &str, payload: &Value) -> QueryResult<String> {
    payload
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| QueryError::invalid_operand(path, op, format!("expected a string, got {payload}")))
}

fn date_operand(path: &str, op: &str, payload: &Value) -> QueryResult<DateOperand> {
    match payload {
        Value::String(text) => Ok(DateOperand::Text(text.clone())),
        Value::Number(n) => n
            .as_f64()
            .map(DateOperand::Timestamp)
            .ok_or_else(|| QueryError::invalid_operand(path, op, "timestamp out of range")),
        Value::Object(fields) => {
            let Some(Value::String(date)) = fields.get("date") else {
                return Err(QueryError::invalid_operand(path, op, "no date to parse"));
            };
            let format = match fields.get("format") {
                None | Some(Value::Null) => None,
                Some(Value::String(format)) => Some(format.clone()),
                Some(other) => {
                    return Err(QueryError::invalid_operand(
                        path,
                        op,
                        format!("format must be a string, got {other}"),
                    ));
                }
            };
            Ok(DateOperand::Formatted {
                date: date.clone(),
                format,
            })
        }
        _ => Err(QueryError::invalid_operand(path, op, "invalid match object")),
    }
}
