/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of a task-creation request.
///
/// The callback id rides in the endpoint path. `files` is an opaque string
/// payload; its encoding is owned by whoever collected the attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub command: String,
    pub params: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
}
