//! Shared error type and task helpers for the resolve tests.

use crate::ResolveFailure;
use std::time::Duration;
use tokio::task::JoinError;
use tokio::task::JoinHandle;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TestError {
    #[error("resolver `{0}` failed")]
    Failed(&'static str),

    #[error("resolver task panicked")]
    Panicked,

    #[error("resolver task was cancelled")]
    Cancelled,
}

impl From<JoinError> for TestError {
    fn from(err: JoinError) -> Self {
        if err.is_panic() {
            TestError::Panicked
        } else {
            TestError::Cancelled
        }
    }
}

pub type TaskResult<T> = Result<T, ResolveFailure<TestError>>;

/// Spawns a task that yields `result` after `delay_ms` milliseconds.
pub fn spawn_after<T: Send + 'static>(
    delay_ms: u64,
    result: TaskResult<T>,
) -> JoinHandle<TaskResult<T>> {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        result
    })
}
