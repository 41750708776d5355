/*
[INPUT]:  Engine events that the operator should see.
[OUTPUT]: Severity-tagged notifications delivered to a pluggable sink.
[POS]:    Boundary layer - operator notification surface.
[UPDATE]: When adding severities or changing sink delivery guarantees.
*/

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One operator-facing message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            at: Utc::now(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }
}

/// Delivery boundary for operator notifications.
///
/// Implementations must not block; the engine publishes from its own async
/// context and expects delivery to be fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, note: Notification);
}

/// Sink that routes notifications into the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn publish(&self, note: Notification) {
        match note.severity {
            Severity::Success => tracing::info!(at = %note.at, "{}", note.text),
            Severity::Warning => tracing::warn!(at = %note.at, "{}", note.text),
            Severity::Error => tracing::error!(at = %note.at, "{}", note.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_severity() {
        assert_eq!(Notification::success("ok").severity, Severity::Success);
        assert_eq!(Notification::warning("hm").severity, Severity::Warning);
        assert_eq!(Notification::error("no").severity, Severity::Error);
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
