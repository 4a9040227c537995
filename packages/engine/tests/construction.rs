//! Query and matcher construction

use fltr_engine::prelude::*;
use serde_json::json;

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn rejects_non_object_queries() {
        assert!(matches!(Matcher::from_json(&json!([1, 2])), Err(QueryError::InvalidQuery(_))));
        assert!(Matcher::from_json(&json!(null)).expect("empty query").paths().is_empty());
    }

    #[test]
    fn rejects_unknown_operators() {
        let err = Matcher::from_json(&json!({ "a": { "$near": 3 } })).expect_err("unknown");
        assert_eq!(err, QueryError::unknown_operator("a", "$near"));
    }

    #[test]
    fn rejects_array_literals() {
        let err = Matcher::from_json(&json!({ "tags": ["a"] })).expect_err("array literal");
        assert!(matches!(err, QueryError::UnsupportedSpec { .. }));
    }

    #[test]
    fn rejects_malformed_operands() {
        for query in [
            json!({ "n": { "$gt": "five" } }),
            json!({ "n": { "$in": 3 } }),
            json!({ "n": { "$or": [1, 2] } }),
            json!({ "d": { "$after": { "format": "YYYY" } } }),
            json!({ "d": { "$before": true } }),
        ] {
            assert!(
                matches!(Matcher::from_json(&query), Err(QueryError::InvalidOperand { .. })),
                "{query} should be rejected"
            );
        }
    }

    #[test]
    fn paths_keep_declaration_order() {
        let m = Matcher::from_json(&json!({ "z": 1, "a.b": 2, "m.*": 3 })).expect("valid query");
        let sources: Vec<_> = m.paths().iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, ["z", "a.b", "m.*"]);
        assert_eq!(m.paths()[1].segments.len(), 2);
    }

    #[test]
    fn eager_patterns() {
        let config = MatcherConfig::default().eager_patterns(true);
        let bad = Matcher::from_json_with_config(&json!({ "s": { "$not": { "$regexp": "[" } } }), config.clone());
        assert!(matches!(bad, Err(QueryError::InvalidPattern { .. })));

        let lazy = Matcher::from_json(&json!({ "s": { "$regexp": "[" } })).expect("compiled lazily");
        let failure = lazy.match_subject(&json!({ "s": "x" })).expect_err("bad pattern");
        assert_eq!(failure.first().mismatch.kind, MismatchKind::InvalidOperand);

        assert!(Matcher::from_json_with_config(&json!({ "s": { "$regexp": "^x" } }), config).is_ok());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut locale = DateLocale::iso();
        locale.date_format = String::new();
        let config = MatcherConfig::default().locale(locale);
        assert!(matches!(
            Matcher::with_config(Query::new(), config),
            Err(QueryError::Configuration(_))
        ));
    }

    #[test]
    fn config_from_json() {
        let config = MatcherConfig::from_json(json!({
            "failure_policy": "fail_fast",
            "parallel": true,
            "locale": { "name": "de-DE", "date_format": "%d.%m.%Y", "time_format": "%H:%M:%S" }
        }))
        .expect("valid config");
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert!(config.parallel);
        assert!(config.permissive_numeric);
        assert_eq!(config.locale, DateLocale::de_de());
    }
}
