//! Platform ports for storage access.
//!
//! The concrete implementations live in `infrastructure::platform` and are
//! selected at compile time (file-backed storage on desktop, `localStorage`
//! in the browser). The UI accesses the active provider via Dioxus context.

/// Persistent key-value storage.
///
/// Absent keys resolve to `None`; providers never raise, they log and
/// degrade instead.
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage keys shared between the UI and the session tracker.
pub mod storage_keys {
    /// Credential token consulted by the login refresh.
    pub const TOKEN: &str = "token";
}
