//! The loader entry point.

use std::sync::Arc;

use cascade_dom::{DocumentHost, DomError, LinkElement, NodeId};
use cascade_observability::{LoadLogger, NoopLogger};
use cascade_storage::{StorageKind, StorageProvider};

use crate::completion::PendingLoad;
use crate::request::LoadRequest;

/// Media value priming a link so its fetch never blocks rendering.
///
/// The query matches no environment, so the browser downloads the sheet
/// without holding up first paint; completion rewrites it to the real
/// target value.
pub const NON_BLOCKING_MEDIA: &str = "only x";

/// What a [`StylesheetLoader::load`] call did.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Cached text was injected synchronously as a style element.
    Injected(NodeId),
    /// A link element was inserted; the host fires the handler once the
    /// browser finishes loading the resource.
    Pending(PendingLoad),
    /// Nothing was inserted; the failure was reported to the logger.
    Failed,
}

impl LoadOutcome {
    /// The style node inserted synchronously, for cache hits.
    pub fn injected(&self) -> Option<NodeId> {
        match self {
            Self::Injected(node) => Some(*node),
            _ => None,
        }
    }

    /// The completion handler, for cache misses.
    pub fn into_pending(self) -> Option<PendingLoad> {
        match self {
            Self::Pending(pending) => Some(pending),
            _ => None,
        }
    }
}

/// Loads stylesheets without blocking rendering, preferring cached text
/// over a network fetch.
///
/// The loader holds nothing but its diagnostic sink; every call is
/// independent and collaborators are injected per call. No operation
/// returns an error to the caller: storage and document problems are
/// reported through the sink and degrade to the closest working behavior.
pub struct StylesheetLoader {
    logger: Arc<dyn LoadLogger>,
}

impl Default for StylesheetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetLoader {
    /// Create a loader that drops diagnostics.
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoopLogger),
        }
    }

    /// Create a loader reporting to `logger`.
    pub fn with_logger(logger: Arc<dyn LoadLogger>) -> Self {
        Self { logger }
    }

    /// Load a stylesheet.
    ///
    /// With a cached value present for the resolved URL, a style element
    /// holding the cached text is inserted immediately and no fetch
    /// happens. Otherwise a non-blocking link element is inserted and the
    /// returned [`LoadOutcome::Pending`] handler finishes the load when
    /// the host fires it.
    pub fn load<D, P>(&self, document: &mut D, storage: &P, request: &LoadRequest) -> LoadOutcome
    where
        D: DocumentHost,
        P: StorageProvider,
    {
        let url = document.resolve_url(&request.url);

        let anchor = match request.anchor.or_else(|| document.first_script()) {
            Some(anchor) => anchor,
            None => {
                self.logger.report(
                    Some(&DomError::NoAnchor),
                    &format!("{} could not be inserted", url),
                );
                return LoadOutcome::Failed;
            }
        };

        if let Some(kind) = request.storage {
            match storage.area(kind).get(&url) {
                Ok(Some(cached)) if !cached.is_empty() => {
                    return self.inject_cached(document, &url, kind, &cached, anchor);
                }
                // Absent and empty values are both misses.
                Ok(_) => {}
                Err(error) => {
                    self.logger.report(
                        Some(&error),
                        &format!("{} could not be retrieved from {} storage", url, kind),
                    );
                }
            }
        }

        let mut link = LinkElement::new(url.as_str(), NON_BLOCKING_MEDIA);
        if let Some(mode) = &request.cross_origin {
            link = link.with_cross_origin(mode.as_str());
        }
        let link = document.create_link(&link);

        // Browsers only start the fetch once the element is attached.
        if let Err(error) = document.insert_before(link, anchor) {
            self.logger
                .report(Some(&error), &format!("{} could not be inserted", url));
            return LoadOutcome::Failed;
        }

        LoadOutcome::Pending(PendingLoad {
            link,
            url,
            media: request.media.clone(),
            storage: request.storage,
            logger: Arc::clone(&self.logger),
        })
    }

    fn inject_cached<D: DocumentHost>(
        &self,
        document: &mut D,
        url: &str,
        kind: StorageKind,
        cached: &str,
        anchor: NodeId,
    ) -> LoadOutcome {
        let style = document.create_style(cached);
        if let Err(error) = document.insert_before(style, anchor) {
            self.logger
                .report(Some(&error), &format!("{} could not be inserted", url));
            return LoadOutcome::Failed;
        }
        self.logger
            .report(None, &format!("{} retrieved from {} storage", url, kind));
        LoadOutcome::Injected(style)
    }
}
