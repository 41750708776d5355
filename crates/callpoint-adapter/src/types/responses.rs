/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::CreateStatus;
use super::models::CommandDef;

/// One row of the loaded-commands listing for a callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedCommand {
    pub id: i64,
    pub command: CommandDef,
}

/// Envelope returned by task creation.
///
/// `id` is present on success; `error` carries the operator-visible reason on
/// rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub status: CreateStatus,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}
