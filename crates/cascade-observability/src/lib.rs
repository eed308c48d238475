//! Diagnostic sink for the cascade stylesheet loader.
//!
//! This crate provides:
//! - `LoadLogger` trait - Sink the loader reports every event to
//! - `LogRecord` - One recorded event, serializable
//! - `NoopLogger` - Drops everything; the default
//! - `TracingLogger` - Forwards to the `tracing` macros
//! - `MemoryLogger` - Retains events for inspection

mod logging;

pub use logging::{LoadLogger, LogRecord, MemoryLogger, NoopLogger, TracingLogger};
