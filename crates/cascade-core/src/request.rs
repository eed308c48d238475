//! Per-load configuration.

use cascade_dom::NodeId;
use cascade_storage::StorageKind;
use serde::{Deserialize, Serialize};

/// Configuration for a single stylesheet load.
///
/// Only `url` is required. The media query, when set, is applied at
/// load-completion time; until then the link carries a non-matching
/// placeholder so the fetch never blocks rendering. Absent `storage`
/// means the load is never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Resource location; once resolved against the document it is also
    /// the cache key.
    pub url: String,
    /// Target media query. Defaults to `"all"` at completion time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Storage namespace the resolved CSS text is cached in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageKind>,
    /// CORS mode copied onto the link element verbatim. Without it,
    /// cross-origin sheets load fine but their rules cannot be read back
    /// for caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<String>,
    /// Insertion anchor; absent means the document's first script element.
    #[serde(skip)]
    pub anchor: Option<NodeId>,
}

impl LoadRequest {
    /// Create a request for `url` with everything else off.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media: None,
            storage: None,
            cross_origin: None,
            anchor: None,
        }
    }

    /// Set the target media query.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Cache the resolved CSS text in `kind` storage.
    pub fn with_storage(mut self, kind: StorageKind) -> Self {
        self.storage = Some(kind);
        self
    }

    /// Set the CORS mode for the fetch.
    pub fn with_cross_origin(mut self, mode: impl Into<String>) -> Self {
        self.cross_origin = Some(mode.into());
        self
    }

    /// Insert before `anchor` instead of the first script element.
    pub fn with_anchor(mut self, anchor: NodeId) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_everything_off() {
        let request = LoadRequest::new("/css/site.css");

        assert_eq!(request.url, "/css/site.css");
        assert_eq!(request.media, None);
        assert_eq!(request.storage, None);
        assert_eq!(request.cross_origin, None);
        assert_eq!(request.anchor, None);
    }

    #[test]
    fn test_builder_sets_each_field() {
        let anchor = NodeId::new(7);
        let request = LoadRequest::new("/css/print.css")
            .with_media("print")
            .with_storage(StorageKind::Session)
            .with_cross_origin("anonymous")
            .with_anchor(anchor);

        assert_eq!(request.media.as_deref(), Some("print"));
        assert_eq!(request.storage, Some(StorageKind::Session));
        assert_eq!(request.cross_origin.as_deref(), Some("anonymous"));
        assert_eq!(request.anchor, Some(anchor));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&LoadRequest::new("/a.css")).unwrap();
        assert_eq!(json, r#"{"url":"/a.css"}"#);
    }

    #[test]
    fn test_deserialization_from_config_record() {
        let request: LoadRequest =
            serde_json::from_str(r#"{"url":"/a.css","media":"screen","storage":"local"}"#)
                .unwrap();

        assert_eq!(request.url, "/a.css");
        assert_eq!(request.media.as_deref(), Some("screen"));
        assert_eq!(request.storage, Some(StorageKind::Local));
        assert_eq!(request.anchor, None);
    }
}
