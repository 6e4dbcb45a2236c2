//! Outbound ports - interfaces the client expects the platform to provide.

pub mod platform;

pub use platform::{storage_keys, StorageProvider};
