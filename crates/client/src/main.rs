//! Gameroom client - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameroom_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Gameroom client");

    // Platform
    let platform = gameroom_client::infrastructure::platform::create_platform();
    let platform: gameroom_client::Platform = std::sync::Arc::new(platform);

    // Launch Dioxus with the session platform in context
    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .launch(gameroom_client::app);
}
