//! Browser probe client using the web-sys WebSocket.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};

use super::probe::ProbeCore;
use super::DEFAULT_WS_URL;

/// Browser probe client.
///
/// The open/message/error callbacks drive the shared [`ProbeCore`]; the
/// handshake frame goes out from the open callback.
pub struct ProbeClient {
    socket: WebSocket,
    core: Rc<RefCell<ProbeCore>>,
}

impl ProbeClient {
    /// Open the socket and install the callbacks.
    pub fn connect(url: &str) -> Result<Self, JsValue> {
        let socket = WebSocket::new(url)?;
        let core = Rc::new(RefCell::new(ProbeCore::new()));

        let onopen = {
            let core = Rc::clone(&core);
            let socket = socket.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(frame) = core.borrow_mut().on_open() {
                    if let Err(e) = socket.send_with_str(frame) {
                        tracing::error!("Failed to send probe frame: {:?}", e);
                    }
                }
            })
        };
        socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onmessage = {
            let core = Rc::clone(&core);
            Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                if let Some(text) = event.data().as_string() {
                    core.borrow().on_message(&text);
                }
            })
        };
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let onerror = Closure::<dyn FnMut(ErrorEvent)>::new(move |event: ErrorEvent| {
            tracing::error!("WebSocket error: {}", event.message());
        });
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        Ok(Self { socket, core })
    }

    /// Send a frame if the socket is open; otherwise report and drop it.
    pub fn send(&self, frame: &str) {
        if let Err(e) = self.core.borrow().check_send() {
            tracing::error!("{e}. readyState: {}", self.socket.ready_state());
            return;
        }
        if let Err(e) = self.socket.send_with_str(frame) {
            tracing::error!("Failed to send frame: {:?}", e);
        }
    }
}

/// Start a standalone probe against the game endpoint.
///
/// Exported so the probe can be launched from the page without going through
/// the application, matching its standalone nature.
#[wasm_bindgen(js_name = startConnectionProbe)]
pub fn start_connection_probe(url: Option<String>) {
    let url = url.unwrap_or_else(|| DEFAULT_WS_URL.to_string());
    match ProbeClient::connect(&url) {
        Ok(client) => {
            tracing::info!("Probe dialing {}", url);
            // The socket lives for the page's lifetime; callbacks keep the
            // core alive through their captured Rc.
            std::mem::forget(client);
        }
        Err(e) => tracing::error!("Failed to open probe socket: {:?}", e),
    }
}
