//! Desktop storage provider.
//!
//! File-backed persistence so the credential token survives restarts the
//! same way the browser's `localStorage` does.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::ports::outbound::StorageProvider;

/// Desktop storage provider with file-based persistence.
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/gameroom/client/storage.json
/// - macOS: ~/Library/Application Support/io.gameroom.client/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\gameroom\client\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a provider rooted at the platform config directory.
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "gameroom", "client") {
            dirs.config_dir().join("storage.json")
        } else {
            // no home directory; fall back to the working directory
            PathBuf::from("gameroom_storage.json")
        };

        Self::with_path(storage_path)
    }

    /// Create a provider rooted at an explicit file path, loading whatever
    /// the file already holds.
    pub fn with_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Unreadable storage file, starting empty: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Cannot read storage file, starting empty: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage at {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Write the current cache contents back to the storage file.
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Cannot create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Storage lock poisoned: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Cannot write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Cannot serialize storage contents: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // release the lock before touching the disk
                self.persist();
            }
            Err(e) => {
                tracing::error!("Storage lock poisoned: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Storage lock poisoned: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard);
                self.persist();
            }
            Err(e) => {
                tracing::error!("Storage lock poisoned: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        let storage = DesktopStorageProvider::with_path(path.clone());

        assert_eq!(storage.load("token"), None);

        storage.save("token", "abc123");
        assert_eq!(storage.load("token"), Some("abc123".to_string()));

        storage.remove("token");
        assert_eq!(storage.load("token"), None);
        assert!(path.exists(), "storage file persisted");
    }

    #[test]
    fn test_values_survive_reload_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        DesktopStorageProvider::with_path(path.clone()).save("token", "abc123");

        let reloaded = DesktopStorageProvider::with_path(path);
        assert_eq!(reloaded.load("token"), Some("abc123".to_string()));
    }

    #[test]
    fn test_corrupt_storage_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").expect("write");

        let storage = DesktopStorageProvider::with_path(path);
        assert_eq!(storage.load("token"), None);
    }
}
