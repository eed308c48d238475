//! Document error types.

use thiserror::Error;

use crate::NodeId;

/// Errors surfaced by a document host.
#[derive(Error, Debug)]
pub enum DomError {
    /// The document has no script element to anchor an insertion on.
    #[error("No insertion anchor: document has no script element")]
    NoAnchor,

    /// The handle does not name a node in this document.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node has no loaded stylesheet attached.
    #[error("Node has no loaded stylesheet")]
    NoStyleSheet,

    /// The sheet's rules are not readable from this origin.
    #[error("Stylesheet rules are not readable: {0}")]
    RulesNotReadable(String),
}
