//! Parallel path evaluation

use fltr_engine::prelude::*;
use serde_json::{Value, json};

fn query() -> Value {
    json!({
        "id": { "$gt": 100 },
        "name": { "$regexp": "^[a-z]+$" },
        "tags": { "$contains": "x" },
        "items.*.qty": { "$gte": 10 },
        "created": { "$after": "2024-01-01" },
        "owner.team": "core"
    })
}

fn subjects() -> Vec<Value> {
    vec![
        json!({
            "id": 101, "name": "alpha", "tags": ["x"], "items": [{ "qty": 12 }],
            "created": "2024-03-01", "owner": { "team": "core" }
        }),
        json!({
            "id": 7, "name": "Beta", "tags": [], "items": [{ "qty": 1 }, {}],
            "created": "2023-03-01", "owner": {}
        }),
        json!({ "id": 200 }),
        json!(null),
    ]
}

#[cfg(test)]
mod parallel_tests {
    use super::*;

    #[test]
    fn parallel_and_sequential_report_identical_failures() {
        env_logger::try_init().ok();

        for policy in [FailurePolicy::EvaluateAll, FailurePolicy::FailFast] {
            let base = MatcherConfig::default().failure_policy(policy);
            let sequential = Matcher::from_json_with_config(&query(), base.clone()).expect("valid query");
            let parallel = Matcher::from_json_with_config(&query(), base.parallel(true)).expect("valid query");

            for subject in subjects() {
                assert_eq!(
                    sequential.match_subject(&subject),
                    parallel.match_subject(&subject),
                    "subject {subject}"
                );
            }
        }
    }

    #[test]
    fn matcher_can_be_shared_across_threads() {
        let matcher = Matcher::from_json(&query()).expect("valid query");
        let matcher = &matcher;
        let subjects = subjects();

        let results: Vec<bool> = crossbeam_utils::thread::scope(|scope| {
            let handles: Vec<_> = subjects
                .iter()
                .map(|subject| scope.spawn(move |_| matcher.matches(subject)))
                .collect();
            handles.into_iter().map(|h| h.join().expect("worker")).collect()
        })
        .expect("scope");

        assert_eq!(results, [true, false, false, false]);
    }
}
