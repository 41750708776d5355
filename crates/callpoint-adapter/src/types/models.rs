/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::ParameterType;

/// A command loaded on a callback, with its declared parameter schema.
///
/// `cmd` is unique within the set of commands loaded on one callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDef {
    pub id: i64,
    pub cmd: String,
    pub help_cmd: String,
    pub description: String,
    pub needs_admin: bool,
    pub payload_type_id: i64,
    #[serde(rename = "commandparameters", default)]
    pub parameters: Vec<CommandParameter>,
}

/// One declared input a command accepts.
///
/// The type tag only decides whether interactive resolution is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandParameter {
    pub id: i64,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
}

/// Reference to the command a task was built from.
///
/// Absent from a task when the command was deleted server-side after dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCommandRef {
    pub cmd: String,
    pub id: i64,
}

/// Reference to one response row produced by a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRef {
    pub id: i64,
}

/// One dispatch of a command against a callback.
///
/// Immutable from the client's point of view once created; status, responses,
/// and opsec flags are only ever refreshed from poll results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub callback_id: i64,
    #[serde(default)]
    pub command: Option<TaskCommandRef>,
    pub original_params: String,
    pub display_params: String,
    pub comment: String,
    #[serde(default)]
    pub comment_operator_name: Option<String>,
    pub operator_name: String,
    pub status: String,
    pub completed: bool,
    pub timestamp: String,
    #[serde(default)]
    pub responses: Vec<ResponseRef>,
    pub opsec_pre_blocked: bool,
    pub opsec_pre_bypassed: bool,
    pub opsec_post_blocked: bool,
    pub opsec_post_bypassed: bool,
    #[serde(default)]
    pub parent_task_id: Option<i64>,
}

impl Task {
    /// Returns true for tasks dispatched directly by an operator.
    pub fn is_top_level(&self) -> bool {
        self.parent_task_id.is_none()
    }

    /// Returns true when either opsec gate is currently blocking the task.
    pub fn opsec_blocked(&self) -> bool {
        (self.opsec_pre_blocked && !self.opsec_pre_bypassed)
            || (self.opsec_post_blocked && !self.opsec_post_bypassed)
    }
}
