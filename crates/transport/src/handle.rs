//! RequestHandle - abortable handle around an in-flight request task

use std::future::Future;

use contracts::{ClientError, Result};
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to an in-flight request
///
/// The transfer runs on its own task; the caller may either `join` the
/// handle for the outcome or `abort` it. A join after abort yields
/// [`ClientError::Aborted`].
#[derive(Debug)]
pub struct RequestHandle<T> {
    task: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> RequestHandle<T> {
    /// Spawn the transfer onto the runtime and return its handle
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            task: tokio::spawn(fut),
        }
    }

    /// Abort the in-flight request
    ///
    /// Idempotent; a no-op once the transfer has completed.
    pub fn abort(&self) {
        debug!("Aborting in-flight request");
        self.task.abort();
    }

    /// True once the transfer has completed or been aborted
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the outcome
    pub async fn join(self) -> Result<T> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ClientError::Aborted),
            Err(e) => Err(ClientError::http(format!("request task failed: {e}"))),
        }
    }
}
