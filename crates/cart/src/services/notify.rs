//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Trait for surfacing transient user-facing messages.
///
/// Calls are fire-and-forget: implementations must not fail and must not
/// block the caller.
pub trait NotificationSink: Send + Sync {
    /// Displays `message` to the user with the given severity.
    fn notify(&self, severity: Severity, message: &str);
}

/// Notification sink that forwards messages to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "notifications", "{message}"),
            Severity::Warning => tracing::warn!(target: "notifications", "{message}"),
            Severity::Error => tracing::error!(target: "notifications", "{message}"),
        }
    }
}

/// Notification sink that records messages for test inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotificationSink {
    /// Creates a new empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages, oldest first.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Returns the most recent message, if any.
    pub fn last(&self) -> Option<(Severity, String)> {
        self.messages.lock().unwrap().last().cloned()
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
