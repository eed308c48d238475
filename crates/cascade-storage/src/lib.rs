//! Web-storage capability surface for the cascade stylesheet loader.
//!
//! This crate provides:
//! - `StorageKind` - Closed enumeration of the two web-storage namespaces
//! - `StorageArea` - Fallible key-value storage trait
//! - `StorageProvider` - Mapping from namespace to backing area
//! - `StoragePair` - The usual local + session provider
//! - `MemoryStorage` - In-memory area for development/testing
//!
//! # Example
//!
//! ```rust,ignore
//! use cascade_storage::{MemoryStorage, StorageKind, StoragePair, StorageProvider};
//!
//! let storage = StoragePair::new(MemoryStorage::new(), MemoryStorage::new());
//!
//! let area = storage.area(StorageKind::Local);
//! area.set("https://example.com/site.css", "body{margin:0}")?;
//! let cached = area.get("https://example.com/site.css")?;
//! ```

mod area;
mod error;
mod memory;

pub use area::{StorageArea, StorageKind, StoragePair, StorageProvider};
pub use error::StorageError;
pub use memory::MemoryStorage;
