use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::TimerOutcome;

/// Waits `delay`, or until `cancel` fires, whichever comes first.
pub async fn one_shot(delay: Duration, cancel: CancellationToken) -> TimerOutcome {
    tokio::select! {
        () = cancel.cancelled() => TimerOutcome::Cancelled,
        () = tokio::time::sleep(delay) => TimerOutcome::Elapsed,
    }
}
