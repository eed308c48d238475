//! Non-blocking stylesheet loading with web-storage caching.
//!
//! This crate provides:
//! - `LoadRequest` - Per-load configuration
//! - `StylesheetLoader` - The loader entry point
//! - `LoadOutcome` - What a load call did
//! - `PendingLoad` - Completion handler for an in-flight load
//!
//! A load either injects previously cached CSS text synchronously as an
//! inline style element, or inserts a link element primed with a
//! non-matching media query so the fetch never blocks rendering. When the
//! host signals that the fetch finished, the completion handler makes the
//! sheet render-effective and, when caching was requested, writes the
//! sheet's concatenated rule text into web storage for the next visit.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use cascade_core::{LoadOutcome, LoadRequest, StylesheetLoader};
//! use cascade_dom::TreeDocument;
//! use cascade_observability::TracingLogger;
//! use cascade_storage::{MemoryStorage, StorageKind, StoragePair};
//!
//! let loader = StylesheetLoader::with_logger(Arc::new(TracingLogger));
//! let mut document = TreeDocument::new();
//! let storage = StoragePair::new(MemoryStorage::new(), MemoryStorage::new());
//!
//! let request = LoadRequest::new("/css/site.css")
//!     .with_media("screen")
//!     .with_storage(StorageKind::Local);
//!
//! if let LoadOutcome::Pending(pending) = loader.load(&mut document, &storage, &request) {
//!     // The host fires this once the browser finishes the fetch.
//!     pending.complete(&mut document, &storage);
//! }
//! ```

mod completion;
mod loader;
mod request;

pub use completion::PendingLoad;
pub use loader::{LoadOutcome, StylesheetLoader, NON_BLOCKING_MEDIA};
pub use request::LoadRequest;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LoadOutcome, LoadRequest, PendingLoad, StylesheetLoader};
}
