//! Load-event diagnostics.

use std::error::Error;
use std::sync::Mutex;

use serde::Serialize;

/// Diagnostic sink for loader events.
///
/// The loader reports every observable event here: cache hits, completed
/// loads, and swallowed storage or document failures. `error` is present
/// exactly when the event records a failure.
pub trait LoadLogger: Send + Sync {
    /// Record one event.
    fn report(&self, error: Option<&(dyn Error + 'static)>, message: &str);
}

/// Sink that drops everything; the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl LoadLogger for NoopLogger {
    fn report(&self, _error: Option<&(dyn Error + 'static)>, _message: &str) {}
}

/// Sink forwarding to the `tracing` macros.
///
/// Successes emit at info level, swallowed failures at warn; hosts running
/// a subscriber get structured events with the causing error attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LoadLogger for TracingLogger {
    fn report(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        match error {
            Some(error) => tracing::warn!(error = %error, "{}", message),
            None => tracing::info!("{}", message),
        }
    }
}

/// One recorded diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Stringified causing error, present for failure events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl LogRecord {
    /// Whether this event records a swallowed failure.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// Sink retaining every event, for tests and post-hoc inspection.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Drop all retained records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl LoadLogger for MemoryLogger {
    fn report(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        let record = LogRecord {
            error: error.map(|e| e.to_string()),
            message: message.to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}
