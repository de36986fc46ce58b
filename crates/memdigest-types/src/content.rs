use std::io::{self, Cursor};
use std::ops::RangeBounds;

use bytes::Bytes;

/// A random-access, read-only handle to stored content.
///
/// Returned by `open` and `open_location`. The handle shares the store's
/// buffer (`Bytes` is reference counted), so opening content never copies
/// it and the handle stays valid after the store is unmounted.
///
/// ```text
/// offset: 0                      len
///         ├──────────────────────┤
///         │ read_at(buf, off)    │  short read near the end,
///         │                      │  Ok(0) at or past the end
///         └──────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Content {
    bytes: Bytes,
}

impl Content {
    #[must_use]
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    /// Total length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy bytes starting at `offset` into `buf`.
    ///
    /// Returns the number of bytes copied, which is less than `buf.len()`
    /// when the read runs into the end of the content and `0` when
    /// `offset` is at or beyond the end.
    ///
    /// # Errors
    ///
    /// Never fails for in-memory content; the `io::Result` mirrors
    /// positional-read APIs so callers can treat any content source alike.
    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let Some(start) = usize::try_from(offset).ok().filter(|&s| s < self.len()) else {
            return Ok(0);
        };
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self.bytes[start..start + n]);
        Ok(n)
    }

    /// Fill `buf` entirely from `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] if fewer than `buf.len()`
    /// bytes are available at `offset`; `buf` is left untouched then.
    pub fn read_exact_at(&self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        let available = usize::try_from(offset)
            .ok()
            .and_then(|start| self.len().checked_sub(start))
            .unwrap_or(0);
        if available < buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "requested {} bytes at offset {offset}, only {available} available",
                    buf.len()
                ),
            ));
        }
        self.read_at(buf, offset).map(|_| ())
    }

    /// Zero-copy view of a byte range, or `None` if it is out of bounds.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<Bytes> {
        use std::ops::Bound;

        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1)?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        (start <= end && end <= self.len()).then(|| self.bytes.slice(start..end))
    }

    /// A sequential `Read + Seek` view over the content.
    #[must_use]
    pub fn reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.bytes.clone())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for Content {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Bytes> for Content {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}
