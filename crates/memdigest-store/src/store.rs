use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bytes::Bytes;
use memdigest_location::LocationFormat;
use memdigest_types::{Algorithm, Content, Digest, MountError, MountPoint};
use tracing::{debug, trace};

use crate::config::StoreConfig;

type Entries = HashMap<Box<[u8]>, Bytes>;

/// Observable lifecycle state of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    /// Never written, or unmounted since the last write.
    Empty,
    /// Holds at least one entry.
    Populated,
}

/// In-memory content-addressable store keyed by digest.
///
/// Content is hashed with the configured [`Algorithm`] and kept under the
/// raw digest bytes. Not persisted across runs. The map is created on the
/// first write and dropped wholesale on [`unmount`](MountPoint::unmount);
/// a later write creates a fresh one.
///
/// # Concurrency
///
/// One [`RwLock`] guards the map and is held for a single map access.
/// `store` and `unmount` take the write lock; `load`, `open` and
/// `open_location` take the read lock, so readers never block each other.
/// Hashing happens before the lock is taken.
///
/// ```text
///   EMPTY ──store──▶ POPULATED ──store──▶ POPULATED
///     ▲                  │
///     └─────unmount──────┘      (unmount on EMPTY stays EMPTY)
/// ```
///
/// # Example
///
/// ```rust
/// use memdigest_store::MemoryDigestStore;
/// use memdigest_types::MountPoint;
///
/// let store = MemoryDigestStore::new();
/// let digest = store.store(b"Hello world!").unwrap();
/// assert_eq!(digest.to_string(), "d3486ae9136e7856bc42212385ea797094475802");
///
/// let content = store.open("SHA-1", digest.as_bytes()).unwrap();
/// assert_eq!(content.as_bytes(), b"Hello world!");
/// ```
#[derive(Debug)]
pub struct MemoryDigestStore {
    config: StoreConfig,
    location: LocationFormat,
    entries: RwLock<Option<Entries>>,
}

impl MemoryDigestStore {
    /// Create an empty SHA-1 store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            location: LocationFormat::new(config.algorithm.slug()),
            config,
            entries: RwLock::new(None),
        }
    }

    /// Build the store behind a well-known mount name such as
    /// `memdigest.SHA1`. Returns `None` for unknown names.
    #[must_use]
    pub fn mount(name: &str) -> Option<Self> {
        let config = StoreConfig::for_mount_name(name)?;
        debug!(name, algorithm = %config.algorithm, "mounting memory digest store");
        Some(Self::with_config(config))
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Location string naming `digest` in this store's format.
    #[must_use]
    pub fn location_of(&self, digest: &Digest) -> String {
        self.location.format(digest.as_bytes())
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().as_ref().map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total content bytes held, excluding keys and map overhead.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.read()
            .as_ref()
            .map_or(0, |entries| entries.values().map(Bytes::len).sum())
    }

    #[must_use]
    pub fn contains(&self, digest: &[u8]) -> bool {
        self.read()
            .as_ref()
            .is_some_and(|entries| entries.contains_key(digest))
    }

    #[must_use]
    pub fn state(&self) -> StoreState {
        if self.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }

    // Every critical section is a single map operation, so a panic in
    // another thread cannot leave the map half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Option<Entries>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Entries>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryDigestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MountPoint for MemoryDigestStore {
    fn store(&self, content: &[u8]) -> Result<Digest, MountError> {
        let digest = self.config.algorithm.digest(content);
        let value = Bytes::copy_from_slice(content);

        let mut guard = self.write();
        let entries = guard.get_or_insert_with(HashMap::new);
        entries.insert(digest.as_bytes().into(), value);
        debug!(
            algorithm = %self.config.algorithm,
            %digest,
            len = content.len(),
            entries = entries.len(),
            "stored content"
        );
        Ok(digest)
    }

    fn load(&self, digest: &[u8]) -> Option<Bytes> {
        if digest.len() != self.config.algorithm.digest_len() {
            trace!(len = digest.len(), "digest has wrong length");
            return None;
        }
        let found = self
            .read()
            .as_ref()
            .and_then(|entries| entries.get(digest))
            .cloned();
        trace!(digest = %hex::encode(digest), hit = found.is_some(), "load");
        found
    }

    fn open(&self, algorithm: &str, digest: &[u8]) -> Result<Content, MountError> {
        if Algorithm::from_name(algorithm) != Some(self.config.algorithm) {
            return Err(MountError::unsupported_algorithm(algorithm));
        }
        self.load(digest)
            .map(Content::new)
            .ok_or_else(|| MountError::not_found(algorithm, digest))
    }

    fn open_location(&self, location: &str) -> Result<Content, MountError> {
        let digest = self
            .location
            .parse(location)
            .map_err(|source| MountError::bad_location(location, source))?;
        self.open(self.config.algorithm.name(), &digest)
    }

    fn unmount(&self) -> Result<(), MountError> {
        let dropped = self.write().take().map_or(0, |entries| entries.len());
        debug!(algorithm = %self.config.algorithm, dropped, "unmounted");
        Ok(())
    }
}
