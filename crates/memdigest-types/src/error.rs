use memdigest_location::LocationError;

/// Errors surfaced by a mount point.
///
/// All of them are terminal for the call that produced them; a store is
/// a local map and has nothing transient to retry against. A host that
/// chains several mount points uses [`is_not_found`](Self::is_not_found)
/// and [`is_unsupported_algorithm`](Self::is_unsupported_algorithm) to
/// decide whether to move on to the next one.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────────┐
/// │ Variant              │ Cause                                        │
/// ├──────────────────────┼──────────────────────────────────────────────┤
/// │ Uninitialized        │ store called on an absent handle             │
/// │ UnsupportedAlgorithm │ algorithm name differs from the configured   │
/// │ ContentNotFound      │ digest absent, or of the wrong length        │
/// │ BadLocation          │ location prefix, suffix or hex is invalid    │
/// └──────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// A write reached a handle with no store behind it.
    ///
    /// Reads on such a handle degrade to "not found" instead.
    #[error("mount point is not initialized")]
    Uninitialized,

    #[error("unsupported algorithm {algorithm:?}")]
    UnsupportedAlgorithm { algorithm: String },

    /// `digest` is the requested digest in lowercase hex, exactly as
    /// given (it may have the wrong length).
    #[error("content not found for {algorithm} digest {digest:?}")]
    ContentNotFound { algorithm: String, digest: String },

    #[error("bad location {location:?}: {source}")]
    BadLocation {
        location: String,
        #[source]
        source: LocationError,
    },
}

impl MountError {
    /// `ContentNotFound` for a raw digest, rendering it as hex.
    #[must_use]
    pub fn not_found(algorithm: &str, digest: &[u8]) -> Self {
        Self::ContentNotFound {
            algorithm: algorithm.to_string(),
            digest: hex::encode(digest),
        }
    }

    #[must_use]
    pub fn unsupported_algorithm(algorithm: &str) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        }
    }

    #[must_use]
    pub fn bad_location(location: &str, source: LocationError) -> Self {
        Self::BadLocation {
            location: location.to_string(),
            source,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound { .. })
    }

    #[must_use]
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Self::UnsupportedAlgorithm { .. })
    }
}
