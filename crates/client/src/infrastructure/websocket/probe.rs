//! Platform-agnostic probe state machine.
//!
//! Deliberately free of any runtime / platform dependencies (tokio, web-sys,
//! etc). The platform clients own the actual socket and call into this core
//! for the open transition and outbound gating.

use thiserror::Error;

/// The single literal frame transmitted when the socket opens.
pub const PROBE_FRAME: &str = "0";

/// Probe connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    /// Socket created, open event not observed yet
    Pending,
    /// Socket reported open
    Open,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// A send was attempted before the socket opened. The frame is dropped;
    /// there is no retry and no queueing.
    #[error("socket is not open (state: {state:?}), frame dropped")]
    NotOpen { state: ProbeState },
}

/// Tracks the probe lifecycle and gates outbound frames on it.
#[derive(Debug)]
pub struct ProbeCore {
    state: ProbeState,
}

impl Default for ProbeCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeCore {
    pub fn new() -> Self {
        Self {
            state: ProbeState::Pending,
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Record the open transition.
    ///
    /// Returns the handshake frame to transmit the first time the socket
    /// opens; repeated open events yield nothing.
    pub fn on_open(&mut self) -> Option<&'static str> {
        match self.state {
            ProbeState::Pending => {
                self.state = ProbeState::Open;
                tracing::info!("Probe socket open, transmitting {:?}", PROBE_FRAME);
                Some(PROBE_FRAME)
            }
            ProbeState::Open => None,
        }
    }

    /// Gate an outbound frame on the connection state.
    pub fn check_send(&self) -> Result<(), ProbeError> {
        match self.state {
            ProbeState::Open => Ok(()),
            ProbeState::Pending => Err(ProbeError::NotOpen { state: self.state }),
        }
    }

    /// Log an inbound frame verbatim.
    ///
    /// No parsing and no dispatch yet; the payload schema is still owned by
    /// the server side.
    pub fn on_message(&self, text: &str) {
        tracing::info!(frame = %text, "probe received");
    }
}
