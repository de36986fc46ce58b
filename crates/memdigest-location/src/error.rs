/// Errors produced while decoding a location string.
///
/// The parser never looks at digest length; a well-formed location whose
/// hex payload decodes to the wrong number of bytes parses fine and is
/// rejected later by the store as "not found".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    /// The location did not start with the format's literal prefix.
    #[error("location does not start with {expected:?}")]
    MissingPrefix { expected: String },

    /// The location did not end with the literal `)/0` suffix.
    #[error("location does not end with {expected:?}")]
    MissingSuffix { expected: &'static str },

    /// The location is well-formed but names an algorithm slug nobody
    /// recognizes.
    #[error("unknown algorithm slug {slug:?}")]
    UnknownSlug { slug: String },

    /// The text between prefix and suffix is not valid hexadecimal.
    #[error("invalid hexadecimal digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
