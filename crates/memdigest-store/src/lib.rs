#![warn(clippy::pedantic)]

pub mod config;
pub mod store;

pub use config::{StoreConfig, MOUNT_NAME_PREFIX};
pub use store::{MemoryDigestStore, StoreState};
