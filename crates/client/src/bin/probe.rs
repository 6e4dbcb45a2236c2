//! Standalone connection probe.
//!
//! Dials the game endpoint, transmits the handshake frame when the socket
//! opens, and logs whatever the server sends back. Not wired into the
//! application; useful for exercising a raw socket against a running server.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use gameroom_client::infrastructure::websocket::{ProbeClient, DEFAULT_WS_URL};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameroom_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = std::env::var("GAMEROOM_WS_URL").unwrap_or_else(|_| DEFAULT_WS_URL.to_string());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(ProbeClient::new(url).run())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
