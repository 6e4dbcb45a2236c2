//! Platform-specific storage providers.
//!
//! - `desktop`: file-backed JSON store under the user config directory
//! - `wasm`: browser `localStorage`

#[cfg(not(target_arch = "wasm32"))]
pub mod desktop;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// Create the storage provider for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_platform() -> desktop::DesktopStorageProvider {
    desktop::DesktopStorageProvider::new()
}

/// Create the storage provider for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn create_platform() -> wasm::WasmStorageProvider {
    wasm::WasmStorageProvider::new()
}
