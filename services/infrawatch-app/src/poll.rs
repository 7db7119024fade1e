//! Repeating timer for the dashboard's list refresh

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use tokio_util::sync::CancellationToken;

/// Call `tick` every `period` until `cancel` fires.
///
/// `sleep` supplies the timer so the loop runs on browser timers in the app
/// and on tokio's clock in tests. `tick` must not block; it is expected to
/// spawn whatever work it starts.
pub async fn poll_loop<S, F, T>(period: Duration, cancel: CancellationToken, mut sleep: S, mut tick: T)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    T: FnMut(),
{
    tracing::debug!("Polling every {:?}", period);

    loop {
        let wait = pin!(sleep(period));
        let cancelled = pin!(cancel.cancelled());

        match select(cancelled, wait).await {
            Either::Left(_) => break,
            Either::Right(_) => {
                if cancel.is_cancelled() {
                    break;
                }
                tick();
            }
        }
    }

    tracing::debug!("Polling stopped");
}
