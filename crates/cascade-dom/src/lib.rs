//! Document capability surface for the cascade stylesheet loader.
//!
//! This crate provides:
//! - `NodeId` - Opaque handle to a document-owned node
//! - `LinkElement` - Attributes of a stylesheet link about to be created
//! - `DocumentHost` trait - What the loader needs from a document
//! - `TreeDocument` - In-memory host for development/testing
//!
//! The loader never talks to a real DOM or CSSOM. Hosts adapt their engine
//! behind [`DocumentHost`]; engine-specific details such as which accessor
//! exposes a loaded sheet's rule collection are decided inside the adapter,
//! not probed at call sites.

mod document;
mod error;
mod tree;

pub use document::{DocumentHost, LinkElement, NodeId};
pub use error::DomError;
pub use tree::{Node, TreeDocument};
