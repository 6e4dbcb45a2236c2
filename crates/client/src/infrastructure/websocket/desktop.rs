//! Desktop probe client using tokio-tungstenite.

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::probe::ProbeCore;

/// Connects to the game endpoint, transmits the probe frame once the socket
/// opens, and logs every inbound frame until the connection ends.
pub struct ProbeClient {
    url: String,
    core: ProbeCore,
}

impl ProbeClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            core: ProbeCore::new(),
        }
    }

    /// Drive the probe to completion.
    ///
    /// Resolves when the server closes the connection or the socket errors.
    pub async fn run(mut self) -> Result<()> {
        let (ws_stream, _) = connect_async(&self.url).await?;
        tracing::info!("Connected to game server at {}", self.url);

        let (mut write, mut read) = ws_stream.split();

        if let Some(frame) = self.core.on_open() {
            write.send(Message::Text(frame.to_string())).await?;
        }

        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => self.core.on_message(&text),
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }
}
