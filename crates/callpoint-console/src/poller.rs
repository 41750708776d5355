/*
[INPUT]:  Callback id + CallpointClient, fixed refresh period.
[OUTPUT]: Latest task-list snapshots via `watch`, replaced wholesale per cycle.
[POS]:    Data layer - pull-based task synchronization (no dispatch logic).
[UPDATE]: When changing poll cadence, snapshot semantics, or shutdown behavior.
*/

use std::sync::Arc;
use std::time::Duration;

use callpoint_adapter::{CallpointClient, Task};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Fixed refresh period; the one externally observable timing contract.
pub const POLL_PERIOD: Duration = Duration::from_millis(1000);

/// The latest authoritative task list for a callback.
///
/// Tasks are held exactly as the backend returned them; the poller never
/// re-sorts, so an ordering violation is the backend's contract breach to fix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
}

/// Recurring fetch of the top-level task list for one callback.
///
/// Starts on construction and runs until shutdown. Each successful cycle
/// replaces the published snapshot wholesale; a failed cycle leaves the
/// previous snapshot intact and does not stop future cycles.
#[derive(Debug)]
pub struct TaskPoller {
    snapshot_tx: watch::Sender<TaskSnapshot>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl TaskPoller {
    /// Start polling a callback at the standard period.
    pub fn start(client: Arc<CallpointClient>, callback_id: i64) -> Self {
        Self::start_with_period(client, callback_id, POLL_PERIOD)
    }

    /// Start polling at a custom period.
    ///
    /// This is primarily intended for tests that cannot wait out the standard
    /// cadence.
    pub fn start_with_period(
        client: Arc<CallpointClient>,
        callback_id: i64,
        period: Duration,
    ) -> Self {
        let (snapshot_tx, _rx) = watch::channel(TaskSnapshot::default());
        let shutdown = CancellationToken::new();
        let worker = tokio::spawn(poll_loop(
            client,
            callback_id,
            period,
            snapshot_tx.clone(),
            shutdown.clone(),
        ));

        Self {
            snapshot_tx,
            shutdown,
            worker: Some(worker),
        }
    }

    /// Subscribe to task snapshots.
    ///
    /// The receiver always holds the latest snapshot; consumers re-render from
    /// it rather than diffing.
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Request the poll loop to stop.
    ///
    /// An in-flight fetch is abandoned, not awaited; a late result after this
    /// point is discarded harmlessly.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Stop polling and wait for the worker to exit.
    pub async fn shutdown_and_wait(mut self) {
        self.shutdown.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl Drop for TaskPoller {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn poll_loop(
    client: Arc<CallpointClient>,
    callback_id: i64,
    period: Duration,
    snapshot_tx: watch::Sender<TaskSnapshot>,
    shutdown: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(callback_id, "task poller shut down");
                return;
            }
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(callback_id, "task poller shut down mid-fetch");
                return;
            }
            result = client.get_tasking(callback_id) => result,
        };

        match fetched {
            Ok(tasks) => {
                debug!(callback_id, task_count = tasks.len(), "task snapshot refreshed");
                let _ = snapshot_tx.send(TaskSnapshot { tasks });
            }
            Err(err) => {
                warn!(
                    callback_id,
                    error = %err,
                    "task poll cycle failed; keeping previous snapshot"
                );
            }
        }
    }
}
