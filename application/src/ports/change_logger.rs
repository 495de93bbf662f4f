//! Port for structured change logging.
//!
//! Defines the [`ChangeLogger`] trait for recording applied configuration
//! changes (quorum option updates, quorum device additions, ...) to an
//! audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures what was
//! changed in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured change event for logging.
pub struct ChangeEvent {
    /// Event type identifier (e.g., "quorum_options_set", "qdevice_added").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ChangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging change events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a failure to write
/// the audit record never undoes or blocks a configuration change.
pub trait ChangeLogger: Send + Sync {
    /// Record a change event.
    fn log(&self, event: ChangeEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoChangeLogger;

impl ChangeLogger for NoChangeLogger {
    fn log(&self, _event: ChangeEvent) {}
}
