#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod content;
pub mod digest;
pub mod error;
pub mod mount_point;

pub use algorithm::Algorithm;
pub use content::Content;
pub use digest::Digest;
pub use error::MountError;
pub use mount_point::MountPoint;
