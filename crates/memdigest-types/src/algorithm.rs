use sha1::{Digest as _, Sha1};

use crate::digest::Digest;

/// Digest algorithms a store can be configured with.
///
/// A store instance serves exactly one algorithm. The algorithm fixes
/// three things: the name callers pass to `open`, the slug used inside
/// location strings, and the digest length every lookup is checked
/// against.
///
/// ```text
/// ┌─────────┬─────────┬─────────┬────────┐
/// │ Variant │ Name    │ Slug    │ Length │
/// ├─────────┼─────────┼─────────┼────────┤
/// │ Sha1    │ SHA-1   │ sha-1   │ 20     │
/// │ Blake3  │ BLAKE3  │ blake3  │ 32     │
/// └─────────┴─────────┴─────────┴────────┘
/// ```
///
/// Names and slugs are matched case-sensitively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Sha1,
    Blake3,
}

impl Algorithm {
    /// All supported algorithms, default first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha1, Algorithm::Blake3];

    /// Canonical name passed to `open`, e.g. `SHA-1`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Blake3 => "BLAKE3",
        }
    }

    /// Lowercase slug used in location strings, e.g. `sha-1`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Sha1 => "sha-1",
            Self::Blake3 => "blake3",
        }
    }

    /// Fixed digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Blake3 => blake3::OUT_LEN,
        }
    }

    /// Look up an algorithm by its exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Look up an algorithm by its exact slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }

    /// Hash `content` with this algorithm.
    #[must_use]
    pub fn digest(self, content: &[u8]) -> Digest {
        let bytes = match self {
            Self::Sha1 => Sha1::digest(content).to_vec(),
            Self::Blake3 => blake3::hash(content).as_bytes().to_vec(),
        };
        Digest::new(self, bytes)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
