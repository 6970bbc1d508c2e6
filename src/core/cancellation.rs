use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::core::outcome::Failure;

/// Run one I/O step, abandoning it as soon as `cancel` fires.
pub async fn cancellable<T, F>(
    cancel: &CancellationToken,
    operation: &'static str,
    step: F,
) -> Result<T, Failure>
where
    F: Future<Output = Result<T, Failure>>,
{
    if cancel.is_cancelled() {
        tracing::warn!(operation, "Skipping cancelled operation");
        return Err(Failure::cancelled(operation));
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::warn!(operation, "Operation cancelled in flight");
            Err(Failure::cancelled(operation))
        }
        result = step => result,
    }
}
