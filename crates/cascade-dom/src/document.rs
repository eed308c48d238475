//! The document capability trait and the handles it trades in.

use serde::{Deserialize, Serialize};

use crate::DomError;

/// Opaque handle to a node owned by a document.
///
/// Hosts hand these out when creating elements; callers only ever pass them
/// back. A handle says nothing about the node it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attributes of a stylesheet link element about to be created.
///
/// `rel` is always `stylesheet` and is not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkElement {
    /// Resource location.
    pub href: String,
    /// Initial media attribute value.
    pub media: String,
    /// CORS mode copied onto the element verbatim, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<String>,
}

impl LinkElement {
    /// Describe a link with the given href and initial media value.
    pub fn new(href: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media: media.into(),
            cross_origin: None,
        }
    }

    /// Set the CORS mode for the fetch.
    pub fn with_cross_origin(mut self, mode: impl Into<String>) -> Self {
        self.cross_origin = Some(mode.into());
        self
    }
}

/// A document the loader can create and insert elements in.
pub trait DocumentHost {
    /// Create a detached style element holding `css_text`.
    fn create_style(&mut self, css_text: &str) -> NodeId;

    /// Create a detached `rel="stylesheet"` link element.
    ///
    /// Creation does not fetch anything; hosts start the fetch once the
    /// element is attached via [`insert_before`](Self::insert_before).
    fn create_link(&mut self, link: &LinkElement) -> NodeId;

    /// First script element in document order.
    ///
    /// Synchronous script tags are reliably present during page parse,
    /// which makes this the default insertion anchor.
    fn first_script(&self) -> Option<NodeId>;

    /// Insert `node` immediately before `reference`.
    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<(), DomError>;

    /// Rewrite a node's media attribute.
    fn set_media(&mut self, node: NodeId, media: &str) -> Result<(), DomError>;

    /// Resolve `url` the way the document resolves an element href.
    ///
    /// Defaults to the identity; hosts with a base URL override this.
    fn resolve_url(&self, url: &str) -> String {
        url.to_string()
    }

    /// Serialized rule texts of the stylesheet loaded for `node`, in order.
    ///
    /// Fails for nodes without a loaded sheet and for sheets whose rules
    /// the host refuses to expose, such as cross-origin sheets fetched
    /// without CORS.
    fn css_rules(&self, node: NodeId) -> Result<Vec<String>, DomError>;
}
