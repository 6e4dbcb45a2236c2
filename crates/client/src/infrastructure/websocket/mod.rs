//! WebSocket connection probe.
//!
//! Platform-specific socket handling lives in submodules:
//! - `desktop`: tokio-tungstenite based client
//! - `wasm`: web-sys WebSocket based client
//!
//! Both call into the runtime-agnostic state machine in `probe`.

mod probe;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use probe::{ProbeCore, ProbeError, ProbeState, PROBE_FRAME};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ProbeClient;

#[cfg(target_arch = "wasm32")]
pub use wasm::{start_connection_probe, ProbeClient};

/// Default game endpoint the probe dials.
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws/game/";
