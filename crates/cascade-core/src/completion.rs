//! Load-completion handling.

use std::fmt;
use std::sync::Arc;

use cascade_dom::{DocumentHost, DomError, NodeId};
use cascade_observability::LoadLogger;
use cascade_storage::{StorageKind, StorageProvider};

/// Media applied at completion when the request set none.
const DEFAULT_MEDIA: &str = "all";

const SAVE_FAILED: &str = "Stylesheet could not be saved for future visits";

/// Completion handler for an in-flight stylesheet load.
///
/// Captures everything the completion step needs by value. Consuming
/// `self` makes the handler fire at most once.
pub struct PendingLoad {
    pub(crate) link: NodeId,
    pub(crate) url: String,
    pub(crate) media: Option<String>,
    pub(crate) storage: Option<StorageKind>,
    pub(crate) logger: Arc<dyn LoadLogger>,
}

impl fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("link", &self.link)
            .field("url", &self.url)
            .field("media", &self.media)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl PendingLoad {
    /// The link element the handler is attached to.
    pub fn link(&self) -> NodeId {
        self.link
    }

    /// The resolved URL being loaded.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Finish the load.
    ///
    /// Hosts call this once, when the environment signals that the link's
    /// resource finished loading. The media attribute is rewritten to the
    /// configured value (or `"all"`), which is the moment the stylesheet
    /// becomes render-effective. When caching was requested, the sheet's
    /// rule texts are concatenated in order, wrapped in a
    /// `@media <query> {…}` envelope iff a query was configured, and
    /// written to storage under the resolved URL. Rule access and write
    /// failures are swallowed and reported; the stylesheet stays loaded.
    pub fn complete<D, P>(self, document: &mut D, storage: &P)
    where
        D: DocumentHost,
        P: StorageProvider,
    {
        let media = self.media.as_deref().unwrap_or(DEFAULT_MEDIA);
        if let Err(error) = document.set_media(self.link, media) {
            self.logger.report(
                Some(&error),
                &format!("{} could not be made render-effective", self.url),
            );
            return;
        }
        self.logger
            .report(None, &format!("{} loaded asynchronously", self.url));

        if let Some(kind) = self.storage {
            match self.style_text(document) {
                Ok(text) => {
                    if let Err(error) = storage.area(kind).set(&self.url, &text) {
                        self.logger.report(Some(&error), SAVE_FAILED);
                    }
                }
                Err(error) => self.logger.report(Some(&error), SAVE_FAILED),
            }
        }
    }

    /// Concatenated rule texts, media-wrapped when a query was configured.
    fn style_text<D: DocumentHost>(&self, document: &D) -> Result<String, DomError> {
        let rules = document.css_rules(self.link)?;
        let mut text = rules.concat();
        if let Some(media) = &self.media {
            text = format!("@media {} {{{}}}", media, text);
        }
        Ok(text)
    }
}
