use std::sync::Arc;

use bytes::Bytes;
use memdigest_location::{LocationError, split_location};

use crate::algorithm::Algorithm;
use crate::content::Content;
use crate::digest::Digest;
use crate::error::MountError;

/// The capability contract a content-addressable store offers to a
/// virtual-filesystem host.
///
/// A host mounts one or more implementations and treats them
/// interchangeably: it stores content, then reopens it by
/// `(algorithm, digest)` or by location string. When several mount points
/// are chained, `ContentNotFound` means "ask the next one" and
/// `UnsupportedAlgorithm` means "this one cannot serve this kind of
/// request".
///
/// ```text
/// store(bytes) ──▶ hash ──▶ map[digest] = bytes ──▶ Digest
///
/// open("SHA-1", digest) ──▶ name check ──▶ load(digest) ──▶ Content
///
/// open_location("memdigest:sha-1:hexadecimal(..)/0")
///     ──▶ parse ──▶ open(name, digest)
/// ```
///
/// All methods take `&self`; implementations use interior mutability and
/// must be `Send + Sync` so one mount point can serve many threads.
pub trait MountPoint: Send + Sync {
    /// Store `content` and return its digest.
    ///
    /// Storing the same bytes twice returns the same digest and leaves a
    /// single entry.
    ///
    /// # Errors
    ///
    /// [`MountError::Uninitialized`] when there is no store behind the
    /// handle. A live store never fails.
    fn store(&self, content: &[u8]) -> Result<Digest, MountError>;

    /// Look up raw digest bytes. Wrong-length digests are simply absent.
    fn load(&self, digest: &[u8]) -> Option<Bytes>;

    /// Open content by algorithm name and raw digest bytes.
    ///
    /// # Errors
    ///
    /// - [`MountError::UnsupportedAlgorithm`] if `algorithm` is not this
    ///   store's algorithm name (exact, case-sensitive), whatever the
    ///   digest.
    /// - [`MountError::ContentNotFound`] if the digest is absent or of
    ///   the wrong length.
    fn open(&self, algorithm: &str, digest: &[u8]) -> Result<Content, MountError>;

    /// Open content by location string.
    ///
    /// # Errors
    ///
    /// [`MountError::BadLocation`] if the location cannot be parsed, plus
    /// everything [`open`](Self::open) can return.
    fn open_location(&self, location: &str) -> Result<Content, MountError>;

    /// Discard all stored content.
    ///
    /// # Errors
    ///
    /// The in-memory store never fails; the `Result` leaves room for
    /// mount points backed by something that can.
    fn unmount(&self) -> Result<(), MountError>;
}

/// An absent handle: the explicit "initialized?" check.
///
/// Writes fail with [`MountError::Uninitialized`]; reads report not
/// found; unmount trivially succeeds. Locations are still parsed, so a
/// malformed one is a [`MountError::BadLocation`] and a well-formed one
/// reports not found under the algorithm it names.
impl<M: MountPoint> MountPoint for Option<M> {
    fn store(&self, content: &[u8]) -> Result<Digest, MountError> {
        match self {
            Some(inner) => inner.store(content),
            None => Err(MountError::Uninitialized),
        }
    }

    fn load(&self, digest: &[u8]) -> Option<Bytes> {
        self.as_ref().and_then(|inner| inner.load(digest))
    }

    fn open(&self, algorithm: &str, digest: &[u8]) -> Result<Content, MountError> {
        match self {
            Some(inner) => inner.open(algorithm, digest),
            None => Err(MountError::not_found(algorithm, digest)),
        }
    }

    fn open_location(&self, location: &str) -> Result<Content, MountError> {
        match self {
            Some(inner) => inner.open_location(location),
            None => {
                let (slug, digest) = split_location(location)
                    .map_err(|source| MountError::bad_location(location, source))?;
                let algorithm = Algorithm::from_slug(slug).ok_or_else(|| {
                    MountError::bad_location(
                        location,
                        LocationError::UnknownSlug {
                            slug: slug.to_string(),
                        },
                    )
                })?;
                Err(MountError::not_found(algorithm.name(), &digest))
            }
        }
    }

    fn unmount(&self) -> Result<(), MountError> {
        match self {
            Some(inner) => inner.unmount(),
            None => Ok(()),
        }
    }
}

impl<M: MountPoint + ?Sized> MountPoint for Arc<M> {
    fn store(&self, content: &[u8]) -> Result<Digest, MountError> {
        (**self).store(content)
    }

    fn load(&self, digest: &[u8]) -> Option<Bytes> {
        (**self).load(digest)
    }

    fn open(&self, algorithm: &str, digest: &[u8]) -> Result<Content, MountError> {
        (**self).open(algorithm, digest)
    }

    fn open_location(&self, location: &str) -> Result<Content, MountError> {
        (**self).open_location(location)
    }

    fn unmount(&self) -> Result<(), MountError> {
        (**self).unmount()
    }
}
