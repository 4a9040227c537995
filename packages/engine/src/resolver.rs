//! Path resolution
//!
//! Walks compiled segments through a subject one segment per step. Arrays
//! take one of three branches, checked in this order: a wildcard segment
//! searches every element, a numeric segment indexes, anything else is
//! rejected. Objects are indexed by the segment's raw text.

use serde_json::Value;

use crate::combinators::any_succeed;
use crate::error::{Mismatch, Outcome};
use crate::query::Segment;

pub struct PathResolver;

impl PathResolver {
    /// Every value the path reaches
    ///
    /// A wildcard yields the values of all elements whose remaining path
    /// resolved, in index order.
    pub fn resolve<'a>(segments: &[Segment], subject: &'a Value) -> Outcome<Vec<&'a Value>> {
        Self::resolve_with(segments, subject, &|_: &'a Value| Ok(()))
    }

    /// Resolve and run `visit` on each value the path reaches
    ///
    /// `visit` is the continuation of the path: a wildcard element only
    /// counts as found when both the rest of its path and `visit` succeed.
    pub fn resolve_with<'a, F>(
        segments: &[Segment],
        subject: &'a Value,
        visit: &F,
    ) -> Outcome<Vec<&'a Value>>
    where
        F: Fn(&'a Value) -> Outcome,
    {
        let Some((segment, rest)) = segments.split_first() else {
            visit(subject)?;
            return Ok(vec![subject]);
        };

        if let Value::Array(items) = subject {
            return match segment {
                Segment::Wildcard(_) => Self::search(rest, items, visit),
                Segment::Index { raw, index } => match index.and_then(|i| items.get(i)) {
                    Some(item) => Self::resolve_with(rest, item, visit),
                    None => Err(Mismatch::index_out_of_bounds(raw, items.len())),
                },
                Segment::Key(raw) => Err(Mismatch::invalid_path_segment(raw)),
            };
        }

        match subject {
            Value::Object(map) => match map.get(segment.as_str()) {
                Some(child) => Self::resolve_with(rest, child, visit),
                None => Err(Mismatch::path_not_found(segment.as_str())),
            },
            _ => Err(Mismatch::path_not_found(segment.as_str())),
        }
    }

    fn search<'a, F>(rest: &[Segment], items: &'a [Value], visit: &F) -> Outcome<Vec<&'a Value>>
    where
        F: Fn(&'a Value) -> Outcome,
    {
        tracing::trace!(
            target: "fltr::resolver",
            elements = items.len(),
            "wildcard search"
        );

        match any_succeed(items.iter().map(|item| Self::resolve_with(rest, item, visit))) {
            Ok(found) => Ok(found.into_iter().flatten().collect()),
            Err(mut mismatch) => {
                mismatch.message = format!(
                    "no element of {} matched the wildcard",
                    items.len()
                );
                Err(mismatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::MismatchKind;

    fn resolve(path: &str, subject: &Value) -> Outcome<Vec<Value>> {
        PathResolver::resolve(&Segment::split(path), subject)
            .map(|values| values.into_iter().cloned().collect())
    }

    #[test]
    fn walks_objects_and_indexes() {
        let subject = json!({ "items": [{ "name": "a" }, { "name": "b" }] });
        assert_eq!(resolve("items.1.name", &subject), Ok(vec![json!("b")]));
    }

    #[test]
    fn numeric_keys_on_objects_are_plain_keys() {
        let subject = json!({ "1": { "*": true } });
        assert_eq!(resolve("1.*", &subject), Ok(vec![json!(true)]));
    }

    #[test]
    fn array_branch_failures() {
        let subject = json!({ "items": [1, 2] });
        assert_eq!(
            resolve("items.9", &subject).map_err(|e| e.kind),
            Err(MismatchKind::IndexOutOfBounds)
        );
        assert_eq!(
            resolve("items.name", &subject).map_err(|e| e.kind),
            Err(MismatchKind::InvalidPathSegment)
        );
    }

    #[test]
    fn primitives_and_null_have_no_children() {
        let subject = json!({ "a": null, "b": 3 });
        assert_eq!(resolve("a.x", &subject).map_err(|e| e.kind), Err(MismatchKind::PathNotFound));
        assert_eq!(resolve("b.x", &subject).map_err(|e| e.kind), Err(MismatchKind::PathNotFound));
    }

    #[test]
    fn wildcard_collects_resolved_elements() {
        let subject = json!({ "arr": [{ "x": 1 }, { "y": 2 }, { "x": 3 }] });
        assert_eq!(resolve("arr.*.x", &subject), Ok(vec![json!(1), json!(3)]));
    }

    #[test]
    fn wildcard_failure_keeps_every_element_reason() {
        let subject = json!({ "arr": [{ "y": 1 }, [], 7] });
        let err = resolve("arr.*.x", &subject).expect_err("nothing has x");
        assert_eq!(err.kind, MismatchKind::AggregateFailure);
        let kinds: Vec<MismatchKind> = err.causes.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                MismatchKind::PathNotFound,
                MismatchKind::InvalidPathSegment,
                MismatchKind::PathNotFound
            ]
        );
    }

    #[test]
    fn continuation_filters_wildcard_elements() {
        let subject = json!([1, 5, 9]);
        let found = PathResolver::resolve_with(&Segment::split("*"), &subject, &|v: &Value| {
            if v.as_i64() > Some(4) { Ok(()) } else { Err(Mismatch::value_mismatch("small")) }
        })
        .expect("two elements pass");
        assert_eq!(found, vec![&json!(5), &json!(9)]);
    }
}
