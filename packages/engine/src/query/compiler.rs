//! Query compilation
//!
//! Runs once per matcher: splits every path into segments and pairs it with
//! its spec. Segment syntax is not validated; a path that cannot resolve
//! simply fails at evaluation.

use super::Query;
use super::segments::Segment;
use crate::spec::MatchSpec;

/// A path split into segments, with its spec
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPath {
    pub source: String,
    pub segments: Vec<Segment>,
    pub spec: MatchSpec,
}

/// The compiled form of a `Query`, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledQuery {
    paths: Vec<CompiledPath>,
}

impl CompiledQuery {
    #[must_use]
    pub fn paths(&self) -> &[CompiledPath] {
        &self.paths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

pub struct QueryCompiler;

impl QueryCompiler {
    #[must_use]
    pub fn compile(query: Query) -> CompiledQuery {
        let paths: Vec<CompiledPath> = query
            .into_entries()
            .into_iter()
            .map(|(source, spec)| CompiledPath {
                segments: Segment::split(&source),
                source,
                spec,
            })
            .collect();

        tracing::debug!(
            target: "fltr::compiler",
            paths = paths.len(),
            "compiled query"
        );

        CompiledQuery { paths }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_compiles_to_nothing() {
        assert!(QueryCompiler::compile(Query::new()).is_empty());
    }

    #[test]
    fn keeps_declaration_order() {
        let compiled = QueryCompiler::compile(Query::new().with("b.c", 1).with("a", 2).with("b.c", 3));
        let sources: Vec<&str> = compiled.paths().iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, ["b.c", "a"]);
        assert_eq!(compiled.paths()[0].spec, MatchSpec::from(3));
        assert_eq!(compiled.paths()[0].segments, vec![Segment::Key("b".into()), Segment::Key("c".into())]);
    }
}
