use crate::ResolveFailure;
use indexmap::IndexMap;
use std::hash::Hash;
use tokio::task::JoinError;
use tokio::task::JoinHandle;

/// Waits for every task in `tasks`, then settles them together.
///
/// When every task succeeds, returns each value under the key its task was
/// given, in the original key order. Otherwise returns
/// [`ResolveFailure::Aggregate`] with the errors of every failed task in
/// key order, splicing in the contents of failures that are themselves
/// aggregates. A task that panicked or was aborted fails with
/// `E::from(JoinError)`.
///
/// The tasks are already running, so they make progress concurrently
/// while earlier ones are awaited. Dropping the returned future does not
/// cancel them. There is no timeout and nothing is retried.
///
/// ```
/// use indexmap::IndexMap;
/// use libgraphql_resolve::ResolveFailure;
/// use libgraphql_resolve::resolve_object;
///
/// #[derive(Debug)]
/// struct TaskFailed;
///
/// impl From<tokio::task::JoinError> for TaskFailed {
///     fn from(_: tokio::task::JoinError) -> Self {
///         TaskFailed
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut tasks = IndexMap::new();
/// tasks.insert("id", tokio::spawn(async { Ok::<_, ResolveFailure<TaskFailed>>("1") }));
/// tasks.insert("name", tokio::spawn(async { Ok("Luke") }));
///
/// let object = resolve_object(tasks).await.unwrap();
/// assert_eq!(object["id"], "1");
/// assert_eq!(object["name"], "Luke");
/// # });
/// ```
pub async fn resolve_object<K, T, E>(
    tasks: IndexMap<K, JoinHandle<Result<T, ResolveFailure<E>>>>,
) -> Result<IndexMap<K, T>, ResolveFailure<E>>
where
    K: Hash + Eq,
    E: From<JoinError>,
{
    let task_count = tasks.len();
    let mut values = IndexMap::with_capacity(task_count);
    let mut errors = Vec::new();

    for (key, handle) in tasks {
        match handle.await {
            Ok(Ok(value)) => {
                values.insert(key, value);
            },
            Ok(Err(failure)) => errors.extend(failure.into_errors()),
            Err(join_error) => errors.push(E::from(join_error)),
        }
    }

    if errors.is_empty() {
        return Ok(values);
    }
    tracing::debug!(
        tasks = task_count,
        failures = errors.len(),
        "resolve_object settled with failures",
    );
    Err(ResolveFailure::Aggregate(errors))
}
