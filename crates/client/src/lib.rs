//! Gameroom client crate.
//!
//! This crate contains the session phase tracker, the page router, and the
//! WebSocket connection probe. Multi-platform support is provided via
//! compile-time `cfg` selection.

pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, Route, SessionContext};
