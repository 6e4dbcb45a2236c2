//! Session state behind Dioxus signals.
//!
//! One explicitly constructed context object, injected at the root; the
//! tracker and holder themselves stay framework-free in `crate::state`.

use dioxus::prelude::*;

use crate::state::{ServerPhase, ServerPhaseHolder, SessionPhase, SessionTracker};

/// Shared session context for the component tree.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Derived client session state
    pub tracker: Signal<SessionTracker>,
    /// Latest server-announced phase
    pub server_phase: Signal<ServerPhaseHolder>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            tracker: Signal::new(SessionTracker::new()),
            server_phase: Signal::new(ServerPhaseHolder::new()),
        }
    }

    /// Current derived phase (recomputed on read).
    pub fn phase(&self) -> SessionPhase {
        self.tracker.read().phase()
    }

    /// Latest server-announced phase.
    pub fn announced_phase(&self) -> ServerPhase {
        self.server_phase.read().phase().clone()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
