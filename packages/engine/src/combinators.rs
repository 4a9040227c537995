//! Success combinators
//!
//! `all_succeed` joins the independent per-path outcomes of one match call.
//! `any_succeed` backs wildcard array search and `$or`; it always drains its
//! input so every failure reason is available to the caller.

use crate::config::FailurePolicy;
use crate::error::{Mismatch, Outcome};

/// At least one outcome must succeed
///
/// Every outcome is evaluated. Success carries the successful results in
/// input order; failure is an aggregate of every failure in input order. An
/// empty input fails.
pub fn any_succeed<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(value) => passed.push(value),
            Err(mismatch) => failed.push(mismatch),
        }
    }

    if passed.is_empty() {
        Err(Mismatch::aggregate(failed))
    } else {
        Ok(passed)
    }
}

/// Every outcome must succeed
///
/// Outcomes are pulled in order. Under `FailFast` nothing after the first
/// failure is pulled, so a lazy iterator skips the remaining work. The error
/// lists `(index, mismatch)` pairs in input order.
pub fn all_succeed<T, I>(outcomes: I, policy: FailurePolicy) -> Result<Vec<T>, Vec<(usize, Mismatch)>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();

    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => passed.push(value),
            Err(mismatch) => {
                failed.push((index, mismatch));
                if policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }
    }

    if failed.is_empty() { Ok(passed) } else { Err(failed) }
}
