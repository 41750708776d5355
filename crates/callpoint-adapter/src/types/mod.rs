/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::{CreateStatus, ParameterType};
pub use models::{CommandDef, CommandParameter, ResponseRef, Task, TaskCommandRef};
pub use requests::CreateTaskRequest;
pub use responses::{CreateTaskResponse, LoadedCommand};
