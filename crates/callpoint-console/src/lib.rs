/*
[INPUT]:  Public API exports for callpoint-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod line;
pub mod notify;
pub mod poller;
pub mod session;
pub mod submitter;

// Re-export main types for convenience
pub use catalog::CommandCatalog;
pub use config::ConsoleConfig;
pub use dispatch::{Dispatch, ParameterResolver, PendingResolution, ResolutionToken};
pub use notify::{Notification, NotificationSink, Severity, TracingSink};
pub use poller::{POLL_PERIOD, TaskPoller, TaskSnapshot};
pub use session::{ConsoleSession, LineOutcome};
pub use submitter::{SubmitOutcome, TaskSubmitter};
