/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod commands;
pub mod error;
pub mod tasking;

pub use error::{CallpointError, Result};

pub use client::{CallpointClient, ClientConfig, Credentials};
