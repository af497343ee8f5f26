//! Tests for settling a set of resolver tasks.

use crate::ResolveFailure;
use crate::resolve_object;
use crate::tests::utils::TaskResult;
use crate::tests::utils::TestError;
use crate::tests::utils::spawn_after;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Values come back under their keys in the original order, whatever
/// order the tasks finish in.
#[tokio::test]
async fn resolves_all_values_in_key_order() {
    let mut tasks = IndexMap::new();
    tasks.insert("slowest", spawn_after(30, Ok(1)));
    tasks.insert("slow", spawn_after(15, Ok(2)));
    tasks.insert("fast", spawn_after(0, Ok(3)));

    let object = resolve_object(tasks).await.unwrap();
    let entries: Vec<(&str, i32)> = object.into_iter().collect();
    assert_eq!(entries, vec![("slowest", 1), ("slow", 2), ("fast", 3)]);
}

/// No tasks resolve to an empty object.
#[tokio::test]
async fn resolves_empty_object() {
    let tasks: IndexMap<String, _> = IndexMap::new();
    let object = resolve_object::<String, (), TestError>(tasks).await.unwrap();
    assert!(object.is_empty());
}

/// Every failure is collected, in key order, with aggregates spliced in.
#[tokio::test]
async fn aggregates_failures_in_key_order() {
    let mut tasks = IndexMap::new();
    tasks.insert("ok", spawn_after(0, Ok("value")));
    tasks.insert(
        "single",
        spawn_after(20, Err(ResolveFailure::Single(TestError::Failed("single")))),
    );
    tasks.insert(
        "nested",
        spawn_after(
            0,
            Err(ResolveFailure::Aggregate(vec![
                TestError::Failed("nested.a"),
                TestError::Failed("nested.b"),
            ])),
        ),
    );

    let failure = resolve_object(tasks).await.unwrap_err();
    assert_eq!(
        failure,
        ResolveFailure::Aggregate(vec![
            TestError::Failed("single"),
            TestError::Failed("nested.a"),
            TestError::Failed("nested.b"),
        ]),
    );
}

/// A single failing task still produces an aggregate.
#[tokio::test]
async fn single_failure_is_aggregated() {
    let mut tasks = IndexMap::new();
    tasks.insert("a", spawn_after(0, Err::<(), _>(ResolveFailure::Single(TestError::Failed("a")))));

    let failure = resolve_object(tasks).await.unwrap_err();
    assert_eq!(failure, ResolveFailure::Aggregate(vec![TestError::Failed("a")]));
}

/// An early failure does not stop the wait for slower tasks.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn waits_for_every_task_before_failing() {
    let finished = Arc::new(AtomicBool::new(false));
    let slow_finished = Arc::clone(&finished);

    let mut tasks: IndexMap<&str, JoinHandle<TaskResult<()>>> = IndexMap::new();
    tasks.insert("fails", spawn_after(0, Err(ResolveFailure::Single(TestError::Failed("fails")))));
    tasks.insert(
        "slow",
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            slow_finished.store(true, Ordering::SeqCst);
            Ok(())
        }),
    );

    let failure = resolve_object(tasks).await.unwrap_err();
    assert!(finished.load(Ordering::SeqCst));
    assert_eq!(failure.errors(), &[TestError::Failed("fails")]);
}

/// Panicked and aborted tasks fail through `From<JoinError>`.
#[tokio::test]
async fn join_errors_become_failures() {
    let panicking = tokio::spawn(async {
        if true {
            panic!("resolver blew up");
        }
        Ok(0)
    });
    let aborted = spawn_after(60_000, Ok(1));
    aborted.abort();

    let mut tasks = IndexMap::new();
    tasks.insert("ok", spawn_after(0, Ok(2)));
    tasks.insert("panicking", panicking);
    tasks.insert("aborted", aborted);

    let failure = resolve_object(tasks).await.unwrap_err();
    assert_eq!(failure.into_errors(), vec![TestError::Panicked, TestError::Cancelled]);
}
