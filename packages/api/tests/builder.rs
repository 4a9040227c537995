//! Builder and facade tests

use fltr::{DateLocale, FailurePolicy, MatchSpec, MatcherConfig, Operators, QueryError};
use serde_json::json;

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn fluent_query_matches() {
        env_logger::try_init().ok();

        let matcher = fltr::query()
            .path("user.name", "ada")
            .path("user.age", Operators::new().gte(18).lt(65))
            .path("roles", Operators::new().contains("admin"))
            .debug()
            .build()
            .expect("valid query");

        assert!(matcher.matches(&json!({
            "user": { "name": "ada", "age": 36 },
            "roles": ["admin"]
        })));
        assert!(!matcher.matches(&json!({
            "user": { "name": "ada", "age": 70 },
            "roles": ["admin"]
        })));
    }

    #[test]
    fn typed_and_json_paths_mix() {
        let matcher = fltr::query()
            .path("kind", MatchSpec::any_of(["book", "magazine"]))
            .json_path("published", &json!({ "$after": "2020-01-01" }))
            .json(&json!({ "stock": { "$gt": 0 } }))
            .build()
            .expect("valid query");

        let sources: Vec<_> = matcher.paths().iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, ["kind", "published", "stock"]);
        assert!(matcher.matches(&json!({ "kind": "book", "published": "2021-05-01", "stock": 3 })));
        assert!(!matcher.matches(&json!({ "kind": "dvd", "published": "2021-05-01", "stock": 3 })));
    }

    #[test]
    fn first_spec_error_is_reported_by_build() {
        let err = fltr::query()
            .json_path("a", &json!({ "$bogus": 1 }))
            .json_path("b", &json!(["x"]))
            .build()
            .expect_err("bad spec");
        assert_eq!(err, QueryError::unknown_operator("a", "$bogus"));
    }

    #[test]
    fn configuration_setters() {
        let matcher = fltr::query()
            .path("d", Operators::new().after("01.01.2024"))
            .locale(DateLocale::de_de())
            .fail_fast()
            .parallel()
            .build()
            .expect("valid query");

        assert_eq!(matcher.config().failure_policy, FailurePolicy::FailFast);
        assert!(matcher.config().parallel);
        assert!(matcher.matches(&json!({ "d": "02.01.2024" })));
    }

    #[test]
    fn eager_pattern_errors_surface_at_build() {
        let result = fltr::query()
            .path("s", Operators::new().regexp("(oops"))
            .config(MatcherConfig::default().eager_patterns(true))
            .build();
        assert!(matches!(result, Err(QueryError::InvalidPattern { .. })));
    }
}

#[cfg(test)]
mod facade_tests {
    use super::*;

    #[test]
    fn one_shot_matches() {
        let query = json!({ "tags": { "$contains": "rust" }, "stars": { "$gte": 100 } });
        assert_eq!(fltr::matches(&query, &json!({ "tags": ["rust"], "stars": 120 })), Ok(true));
        assert_eq!(fltr::matches(&query, &json!({ "tags": ["go"], "stars": 120 })), Ok(false));
        assert!(fltr::matches(&json!("not an object"), &json!({})).is_err());
    }

    #[test]
    fn compile_reuses_the_matcher() {
        let matcher = fltr::Fltr::compile(&json!({ "n": { "$in": [1, 3, 5] } })).expect("valid query");
        let subjects = [json!({ "n": 1 }), json!({ "n": 2 }), json!({ "n": 5 })];
        assert_eq!(matcher.filter(subjects.iter()).count(), 2);
    }

    #[test]
    fn records_through_the_facade() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            active: bool,
        }

        let matcher = fltr::compile(&json!({ "active": true, "name": { "$regexp": "^a" } })).expect("valid query");
        assert!(matcher.matches_record(&User { name: "ada".into(), active: true }));
        assert!(!matcher.matches_record(&User { name: "ada".into(), active: false }));
    }
}
