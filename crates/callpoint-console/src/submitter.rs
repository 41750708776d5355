/*
[INPUT]:  Resolved command token, parameter payload, optional files payload.
[OUTPUT]: Task-creation outcome plus operator notifications.
[POS]:    Execution layer - task submission for one callback.
[UPDATE]: When the creation envelope or notification wording changes.
*/

use std::sync::Arc;

use callpoint_adapter::{CallpointClient, CreateStatus, CreateTaskRequest};

use crate::notify::{Notification, NotificationSink};

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { task_id: i64 },
    Rejected { reason: String },
}

/// Builds and issues task-creation requests for one callback.
///
/// Fire-and-forget: no retry, no queueing, and no speculative local task
/// record on either outcome.
#[derive(Debug, Clone)]
pub struct TaskSubmitter {
    client: Arc<CallpointClient>,
    callback_id: i64,
}

impl TaskSubmitter {
    pub fn new(client: Arc<CallpointClient>, callback_id: i64) -> Self {
        Self {
            client,
            callback_id,
        }
    }

    /// Issue one task-creation request and notify the operator of the result.
    pub async fn submit(
        &self,
        sink: &dyn NotificationSink,
        command: &str,
        params: &str,
        files: Option<String>,
    ) -> SubmitOutcome {
        let request = CreateTaskRequest {
            command: command.to_string(),
            params: params.to_string(),
            files,
        };

        match self.client.create_task(self.callback_id, request).await {
            Ok(response) => match response.status {
                CreateStatus::Success => match response.id {
                    Some(task_id) => {
                        tracing::info!(
                            callback_id = self.callback_id,
                            task_id,
                            command = %command,
                            "task created"
                        );
                        sink.publish(Notification::success("task created"));
                        SubmitOutcome::Created { task_id }
                    }
                    None => {
                        let reason = "task creation succeeded without a task id".to_string();
                        tracing::error!(
                            callback_id = self.callback_id,
                            command = %command,
                            "{reason}"
                        );
                        sink.publish(Notification::error(reason.clone()));
                        SubmitOutcome::Rejected { reason }
                    }
                },
                CreateStatus::Error => {
                    // Backend rejection: the carried error string reaches the
                    // operator verbatim.
                    let reason = response
                        .error
                        .unwrap_or_else(|| "task creation failed".to_string());
                    tracing::warn!(
                        callback_id = self.callback_id,
                        command = %command,
                        reason = %reason,
                        "task creation rejected"
                    );
                    sink.publish(Notification::error(reason.clone()));
                    SubmitOutcome::Rejected { reason }
                }
            },
            Err(err) => {
                tracing::error!(
                    callback_id = self.callback_id,
                    command = %command,
                    error = %err,
                    "task creation request failed"
                );
                let reason = err.to_string();
                sink.publish(Notification::error(reason.clone()));
                SubmitOutcome::Rejected { reason }
            }
        }
    }
}
