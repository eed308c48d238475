//! Storage namespaces and the capability traits backing them.

use serde::{Deserialize, Serialize};

use crate::StorageError;

/// Web-storage namespace selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Persistent per-origin storage, shared across sessions.
    Local,
    /// Tab-scoped storage, cleared when the browsing session ends.
    Session,
}

impl StorageKind {
    /// Short name used in diagnostics and serialized configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Session => "session",
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key-value storage area.
///
/// Both operations are fallible: hosts back this with storage that can be
/// disabled, denied by policy, or full. Callers treat every failure as
/// recoverable.
pub trait StorageArea: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Maps a [`StorageKind`] to the area backing it.
///
/// Resolution happens once per operation through an explicit match on the
/// closed enumeration; hosts decide what actually backs each namespace.
pub trait StorageProvider {
    /// Resolve the area for `kind`.
    fn area(&self, kind: StorageKind) -> &dyn StorageArea;
}

/// The usual provider: one local area, one session area.
pub struct StoragePair<L, S> {
    local: L,
    session: S,
}

impl<L: StorageArea, S: StorageArea> StoragePair<L, S> {
    /// Create a provider from the two areas.
    pub fn new(local: L, session: S) -> Self {
        Self { local, session }
    }

    /// The local area.
    pub fn local(&self) -> &L {
        &self.local
    }

    /// The session area.
    pub fn session(&self) -> &S {
        &self.session
    }
}

impl<L: StorageArea, S: StorageArea> StorageProvider for StoragePair<L, S> {
    fn area(&self, kind: StorageKind) -> &dyn StorageArea {
        match kind {
            StorageKind::Local => &self.local,
            StorageKind::Session => &self.session,
        }
    }
}
