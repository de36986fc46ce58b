use crate::error::LocationError;

/// Scheme marker every location starts with.
pub const LOCATION_SCHEME: &str = "memdigest";

/// Literal suffix closing every location.
pub const LOCATION_SUFFIX: &str = ")/0";

/// The textual location format for one digest algorithm.
///
/// A location names a piece of content by its digest, rendered as
/// hexadecimal inside a fixed envelope:
///
/// ```text
/// memdigest:sha-1:hexadecimal(d3486ae9136e7856bc42212385ea797094475802)/0
/// └───────────── prefix ─────┘└──────────── hex digest ─────────────┘└┬┘
///                                                                  suffix
/// ```
///
/// Each format recognizes exactly one prefix, built from the algorithm
/// slug it was created with. Raw (non-hex) digest bytes are never
/// accepted. Hex digits may be upper or lower case on input; output is
/// always lower case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationFormat {
    prefix: String,
}

impl LocationFormat {
    /// Build the format for an algorithm slug such as `sha-1`.
    #[must_use]
    pub fn new(slug: &str) -> Self {
        Self {
            prefix: format!("{LOCATION_SCHEME}:{slug}:hexadecimal("),
        }
    }

    /// The literal prefix this format expects.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Decode a location into raw digest bytes.
    ///
    /// # Errors
    ///
    /// - [`LocationError::MissingPrefix`] if the prefix does not match
    ///   (including a location for a different algorithm).
    /// - [`LocationError::MissingSuffix`] if the `)/0` suffix is absent.
    /// - [`LocationError::InvalidHex`] if the payload is not hex.
    pub fn parse(&self, location: &str) -> Result<Vec<u8>, LocationError> {
        let rest = location
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| LocationError::MissingPrefix {
                expected: self.prefix.clone(),
            })?;
        let digest_hex = rest
            .strip_suffix(LOCATION_SUFFIX)
            .ok_or(LocationError::MissingSuffix {
                expected: LOCATION_SUFFIX,
            })?;
        Ok(hex::decode(digest_hex)?)
    }

    /// Render raw digest bytes as a location string.
    #[must_use]
    pub fn format(&self, digest: &[u8]) -> String {
        format!("{}{}{LOCATION_SUFFIX}", self.prefix, hex::encode(digest))
    }
}

/// Decode a location for any algorithm into `(slug, digest bytes)`.
///
/// Used where no single format is known up front, e.g. a handle with no
/// store behind it. The slug is returned as written; mapping it to an
/// algorithm is up to the caller.
///
/// # Errors
///
/// - [`LocationError::MissingPrefix`] if the `memdigest:` scheme or the
///   `:hexadecimal(` marker is missing.
/// - [`LocationError::MissingSuffix`] if the `)/0` suffix is absent.
/// - [`LocationError::InvalidHex`] if the payload is not hex.
pub fn split_location(location: &str) -> Result<(&str, Vec<u8>), LocationError> {
    const MARKER: &str = ":hexadecimal(";

    let scheme = format!("{LOCATION_SCHEME}:");
    let rest = location
        .strip_prefix(scheme.as_str())
        .ok_or(LocationError::MissingPrefix { expected: scheme.clone() })?;
    let (slug, rest) = rest.split_once(MARKER).ok_or_else(|| LocationError::MissingPrefix {
        expected: format!("{scheme}<slug>{MARKER}"),
    })?;
    let digest_hex = rest
        .strip_suffix(LOCATION_SUFFIX)
        .ok_or(LocationError::MissingSuffix {
            expected: LOCATION_SUFFIX,
        })?;
    Ok((slug, hex::decode(digest_hex)?))
}
