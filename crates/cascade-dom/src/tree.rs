//! In-memory document host (for development/testing).

use std::collections::HashMap;

use crate::{DocumentHost, DomError, LinkElement, NodeId};

/// A node in a [`TreeDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Script element; only its position matters.
    Script,
    /// Inline style element.
    Style {
        /// The element's text content.
        css_text: String,
    },
    /// Stylesheet link element.
    Link {
        href: String,
        media: String,
        cross_origin: Option<String>,
    },
}

/// What rule access against a registered stylesheet yields.
#[derive(Debug, Clone)]
enum SheetRules {
    Readable(Vec<String>),
    /// Fetched without CORS from another origin; rules stay sealed.
    Opaque,
}

/// Flat in-memory document: an ordered sibling list plus a registry of
/// stylesheets the host has "fetched" for given hrefs.
///
/// The registry stands in for the network and the CSSOM. Tests and
/// development hosts declare up front what a given href resolves to;
/// rule access against an opaque registration fails the way a real engine
/// refuses cross-origin rule reads.
#[derive(Debug, Default)]
pub struct TreeDocument {
    nodes: HashMap<u64, Node>,
    /// Attached nodes in sibling order. Detached nodes live only in `nodes`.
    order: Vec<NodeId>,
    sheets: HashMap<String, SheetRules>,
    base_url: Option<String>,
    next_id: u64,
}

impl TreeDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that resolves relative URLs against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Append a script element at the end of the document.
    pub fn append_script(&mut self) -> NodeId {
        let id = self.allocate(Node::Script);
        self.order.push(id);
        id
    }

    /// Declare that `href` resolves to a stylesheet with the given rules.
    pub fn register_stylesheet(&mut self, href: impl Into<String>, rules: Vec<String>) {
        self.sheets.insert(href.into(), SheetRules::Readable(rules));
    }

    /// Declare that `href` resolves to a stylesheet whose rules cannot be
    /// read back.
    pub fn register_opaque_stylesheet(&mut self, href: impl Into<String>) {
        self.sheets.insert(href.into(), SheetRules::Opaque);
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id.as_u64())
    }

    /// Attached nodes in sibling order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id.as_u64(), node);
        id
    }
}

impl DocumentHost for TreeDocument {
    fn create_style(&mut self, css_text: &str) -> NodeId {
        self.allocate(Node::Style {
            css_text: css_text.to_string(),
        })
    }

    fn create_link(&mut self, link: &LinkElement) -> NodeId {
        self.allocate(Node::Link {
            href: link.href.clone(),
            media: link.media.clone(),
            cross_origin: link.cross_origin.clone(),
        })
    }

    fn first_script(&self) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| matches!(self.node(*id), Some(Node::Script)))
    }

    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<(), DomError> {
        if !self.nodes.contains_key(&node.as_u64()) {
            return Err(DomError::UnknownNode(node));
        }
        let position = self
            .order
            .iter()
            .position(|id| *id == reference)
            .ok_or(DomError::UnknownNode(reference))?;
        self.order.insert(position, node);
        Ok(())
    }

    fn set_media(&mut self, node: NodeId, media: &str) -> Result<(), DomError> {
        match self.nodes.get_mut(&node.as_u64()) {
            Some(Node::Link { media: current, .. }) => {
                *current = media.to_string();
                Ok(())
            }
            // Attribute writes on other elements are accepted and ignored,
            // as in a document.
            Some(_) => Ok(()),
            None => Err(DomError::UnknownNode(node)),
        }
    }

    fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.contains("://") => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }

    fn css_rules(&self, node: NodeId) -> Result<Vec<String>, DomError> {
        let href = match self.node(node) {
            Some(Node::Link { href, .. }) => href,
            Some(_) => return Err(DomError::NoStyleSheet),
            None => return Err(DomError::UnknownNode(node)),
        };
        match self.sheets.get(href) {
            Some(SheetRules::Readable(rules)) => Ok(rules.clone()),
            Some(SheetRules::Opaque) => Err(DomError::RulesNotReadable(
                "cross-origin stylesheet fetched without CORS".to_string(),
            )),
            None => Err(DomError::NoStyleSheet),
        }
    }
}
