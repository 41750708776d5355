/*
[INPUT]:  A bound callback id, backend client, and notification sink.
[OUTPUT]: Dispatch outcomes per typed line plus a live task snapshot feed.
[POS]:    Orchestration layer - per-callback console session.
[UPDATE]: When session lifecycle or the line-handling flow changes.
*/

use std::sync::Arc;
use std::time::Duration;

use callpoint_adapter::CallpointClient;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::catalog::CommandCatalog;
use crate::dispatch::{
    Dispatch, ParameterResolver, PendingResolution, ResolutionToken, ResolverError,
};
use crate::notify::{Notification, NotificationSink};
use crate::poller::{POLL_PERIOD, TaskPoller, TaskSnapshot};
use crate::submitter::{SubmitOutcome, TaskSubmitter};

/// Result of handling one typed line.
#[derive(Debug)]
pub enum LineOutcome {
    /// A task-creation request went out; the outcome is attached.
    Submitted(SubmitOutcome),
    /// Dispatch suspended awaiting interactive parameter collection.
    AwaitingResolution(ResolutionToken),
    /// The typed token matched nothing; a warning was already published.
    UnknownCommand,
}

/// One operator session against a single callback.
///
/// Owns the loaded catalog, the suspended resolutions, and the task poller's
/// lifetime. Polling starts when the session opens and stops when it closes.
pub struct ConsoleSession {
    callback_id: i64,
    client: Arc<CallpointClient>,
    catalog: CommandCatalog,
    resolver: ParameterResolver,
    submitter: TaskSubmitter,
    sink: Arc<dyn NotificationSink>,
    poller: TaskPoller,
}

impl ConsoleSession {
    /// Open a session: load the catalog and start polling at the standard
    /// period.
    pub async fn open(
        client: Arc<CallpointClient>,
        callback_id: i64,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self::open_with_poll_period(client, callback_id, sink, POLL_PERIOD).await
    }

    /// Open a session with a custom poll period (test injection point).
    pub async fn open_with_poll_period(
        client: Arc<CallpointClient>,
        callback_id: i64,
        sink: Arc<dyn NotificationSink>,
        poll_period: Duration,
    ) -> Self {
        let catalog = Self::load_catalog(&client, callback_id).await;
        let submitter = TaskSubmitter::new(client.clone(), callback_id);
        let poller = TaskPoller::start_with_period(client.clone(), callback_id, poll_period);

        Self {
            callback_id,
            client,
            catalog,
            resolver: ParameterResolver::new(),
            submitter,
            sink,
            poller,
        }
    }

    async fn load_catalog(client: &CallpointClient, callback_id: i64) -> CommandCatalog {
        match CommandCatalog::load(client, callback_id).await {
            Ok(catalog) => {
                info!(
                    callback_id,
                    command_count = catalog.len(),
                    "command catalog loaded"
                );
                catalog
            }
            Err(err) => {
                // Degrade to an empty catalog; no tasking is possible until a
                // reload succeeds.
                error!(
                    callback_id,
                    error = %err,
                    "command catalog load failed; starting empty"
                );
                CommandCatalog::empty()
            }
        }
    }

    pub fn callback_id(&self) -> i64 {
        self.callback_id
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Re-fetch the loaded commands, replacing the catalog wholesale.
    ///
    /// On failure the previous catalog stays in place and the fault is only
    /// logged; returns whether the reload took effect.
    pub async fn reload_catalog(&mut self) -> bool {
        match CommandCatalog::load(&self.client, self.callback_id).await {
            Ok(catalog) => {
                info!(
                    callback_id = self.callback_id,
                    command_count = catalog.len(),
                    "command catalog reloaded"
                );
                self.catalog = catalog;
                true
            }
            Err(err) => {
                error!(
                    callback_id = self.callback_id,
                    error = %err,
                    "command catalog reload failed; keeping previous catalog"
                );
                false
            }
        }
    }

    /// Subscribe to the live task snapshot feed.
    pub fn tasks(&self) -> watch::Receiver<TaskSnapshot> {
        self.poller.subscribe()
    }

    /// Handle one typed operator line.
    pub async fn handle_line(&mut self, raw_line: &str) -> LineOutcome {
        match self.resolver.dispatch(&self.catalog, raw_line) {
            Dispatch::Submit { command, params } => {
                let outcome = self
                    .submitter
                    .submit(self.sink.as_ref(), &command, &params, None)
                    .await;
                LineOutcome::Submitted(outcome)
            }
            Dispatch::AwaitResolution { token } => {
                debug!(
                    callback_id = self.callback_id,
                    token = %token,
                    "dispatch suspended for parameter collection"
                );
                LineOutcome::AwaitingResolution(token)
            }
            Dispatch::UnknownCommand { command } => {
                debug!(
                    callback_id = self.callback_id,
                    command = %command,
                    "unknown command"
                );
                self.sink.publish(Notification::warning("Unknown command"));
                LineOutcome::UnknownCommand
            }
        }
    }

    /// The suspended resolution behind a token, if it is still open.
    pub fn pending_resolution(&self, token: ResolutionToken) -> Option<&PendingResolution> {
        self.resolver.pending(token)
    }

    /// Finish a suspended dispatch and submit with the collected values.
    pub async fn complete_resolution(
        &mut self,
        token: ResolutionToken,
        command: String,
        params: String,
        files: Option<String>,
    ) -> Result<SubmitOutcome, ResolverError> {
        let resolved = self.resolver.complete(token, command, params, files)?;
        Ok(self
            .submitter
            .submit(
                self.sink.as_ref(),
                &resolved.command,
                &resolved.params,
                resolved.files,
            )
            .await)
    }

    /// Abandon a suspended dispatch; no task, no error report.
    pub fn cancel_resolution(&mut self, token: ResolutionToken) -> bool {
        self.resolver.cancel(token)
    }

    /// Tear the session down, stopping the poller.
    pub async fn close(self) {
        self.poller.shutdown_and_wait().await;
        debug!(callback_id = self.callback_id, "console session closed");
    }
}
