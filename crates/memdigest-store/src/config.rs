use memdigest_types::Algorithm;

/// Prefix shared by every well-known mount name.
pub const MOUNT_NAME_PREFIX: &str = "memdigest.";

/// Configuration for a [`MemoryDigestStore`](crate::MemoryDigestStore).
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────┐
/// │ Field     │ Purpose                                              │
/// ├───────────┼──────────────────────────────────────────────────────┤
/// │ algorithm │ The one digest algorithm the store hashes with,      │
/// │           │ accepts in `open`, and embeds in location strings    │
/// └───────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// Each algorithm has a well-known mount name a host can use to pick a
/// store without naming types:
///
/// ```text
/// memdigest.SHA1    ──▶ Algorithm::Sha1
/// memdigest.BLAKE3  ──▶ Algorithm::Blake3
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub algorithm: Algorithm,
}

impl StoreConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// The configuration behind a well-known mount name, if any.
    ///
    /// Matching is exact: `memdigest.sha1` is not a mount name.
    #[must_use]
    pub fn for_mount_name(name: &str) -> Option<Self> {
        Algorithm::ALL
            .into_iter()
            .map(Self::new)
            .find(|config| config.mount_name() == name)
    }

    /// The well-known mount name for this configuration.
    #[must_use]
    pub fn mount_name(&self) -> String {
        let suffix = match self.algorithm {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Blake3 => "BLAKE3",
        };
        format!("{MOUNT_NAME_PREFIX}{suffix}")
    }
}
