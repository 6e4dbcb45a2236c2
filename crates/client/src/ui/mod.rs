//! Application shell: context provisioning and the router.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::StorageProvider;

pub mod routes;
pub mod state;

pub use routes::Route;
pub use state::SessionContext;

/// Type alias for the storage platform injected by the composition root.
pub type Platform = Arc<dyn StorageProvider>;

/// Hook returning the platform storage from context.
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/client/src/main.rs`).
    let platform = use_platform();

    // The session context must be created inside an active Dioxus runtime.
    let session = use_context_provider(state::SessionContext::new);

    // Pick up a token persisted by an earlier visit.
    use_effect(move || {
        let mut tracker = session.tracker;
        tracker.write().refresh_login(platform.as_ref());
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
