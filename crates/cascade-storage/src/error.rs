//! Storage error types.

use thiserror::Error;

/// Errors that can occur when touching a storage area.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage area does not exist in this environment.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Access to the storage area was denied by policy.
    #[error("Storage access denied: {0}")]
    AccessDenied(String),

    /// The area has no room left for the value.
    #[error("Storage quota exceeded")]
    QuotaExceeded,

    /// The backing store failed.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
