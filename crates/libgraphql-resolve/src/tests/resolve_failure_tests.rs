//! Tests for merging and flattening failures.

use crate::ResolveFailure;
use crate::tests::utils::TestError;

/// Merging splices both sides, so aggregates never nest.
#[test]
fn merge_flattens_aggregates() {
    let single = ResolveFailure::Single(TestError::Failed("a"));
    let aggregate = ResolveFailure::Aggregate(vec![
        TestError::Failed("b"),
        TestError::Failed("c"),
    ]);

    let merged = single.merge(aggregate).merge(ResolveFailure::Single(TestError::Panicked));
    assert_eq!(
        merged,
        ResolveFailure::Aggregate(vec![
            TestError::Failed("a"),
            TestError::Failed("b"),
            TestError::Failed("c"),
            TestError::Panicked,
        ]),
    );
    assert_eq!(merged.len(), 4);
}

/// A single failure exposes its one error.
#[test]
fn single_failure_errors() {
    let failure = ResolveFailure::Single(TestError::Cancelled);
    assert_eq!(failure.errors(), &[TestError::Cancelled]);
    assert!(!failure.is_empty());
    assert_eq!(failure.into_errors(), vec![TestError::Cancelled]);
}

/// Display shows the error, or the failure count for an aggregate.
#[test]
fn displays_failures() {
    assert_eq!(
        ResolveFailure::Single(TestError::Failed("name")).to_string(),
        "resolver `name` failed",
    );
    assert_eq!(
        ResolveFailure::Aggregate(vec![TestError::Panicked, TestError::Cancelled]).to_string(),
        "2 resolvers failed",
    );
}
