/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public callpoint adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    CallpointClient,
    CallpointError,
    ClientConfig,
    Credentials,
    Result,
};

// Re-export all types
pub use types::*;
