//! Browser storage provider backed by `window.localStorage`.

use crate::ports::outbound::StorageProvider;

/// Browser storage provider.
///
/// Every operation degrades to a no-op (with an error log) when
/// `localStorage` is unavailable, e.g. in a sandboxed iframe.
#[derive(Clone, Copy, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = self.local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to save {}: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {}: {:?}", key, e);
            }
        }
    }
}
