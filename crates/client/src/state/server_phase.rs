//! Server-announced game phase.
//!
//! The server reports its game state as a plain string on the wire. Known
//! states get typed variants; anything else is carried verbatim in
//! [`ServerPhase::Other`] so an unrecognized announcement is observable
//! rather than silently dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Game phase as announced by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerPhase {
    /// No announcement received yet
    #[default]
    Initial,
    /// Lobby is open, game has not started
    Wait,
    /// Game is running
    Game,
    /// Unrecognized announcement, kept verbatim
    Other(String),
}

impl ServerPhase {
    /// Wire/display name of the phase.
    pub fn as_str(&self) -> &str {
        match self {
            ServerPhase::Initial => "initial",
            ServerPhase::Wait => "wait",
            ServerPhase::Game => "game",
            ServerPhase::Other(raw) => raw,
        }
    }
}

impl From<&str> for ServerPhase {
    fn from(raw: &str) -> Self {
        match raw {
            "initial" => ServerPhase::Initial,
            "wait" => ServerPhase::Wait,
            "game" => ServerPhase::Game,
            other => ServerPhase::Other(other.to_string()),
        }
    }
}

impl From<String> for ServerPhase {
    fn from(raw: String) -> Self {
        raw.as_str().into()
    }
}

impl From<ServerPhase> for String {
    fn from(phase: ServerPhase) -> Self {
        phase.as_str().to_string()
    }
}

impl fmt::Display for ServerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the latest server-announced phase.
///
/// The holder performs no derivation and no cross-checking against the
/// session tracker; the caller owns the choice of value.
#[derive(Debug, Clone, Default)]
pub struct ServerPhaseHolder {
    current: ServerPhase,
}

impl ServerPhaseHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase as last announced.
    pub fn phase(&self) -> &ServerPhase {
        &self.current
    }

    /// Overwrite the announced phase wholesale.
    pub fn set_phase(&mut self, phase: ServerPhase) {
        tracing::debug!(phase = %phase, "server phase updated");
        self.current = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_defaults_to_initial() {
        let holder = ServerPhaseHolder::new();
        assert_eq!(*holder.phase(), ServerPhase::Initial);
        assert_eq!(holder.phase().as_str(), "initial");
    }

    #[test]
    fn test_set_phase_overwrites_wholesale() {
        let mut holder = ServerPhaseHolder::new();

        holder.set_phase(ServerPhase::from("connected"));
        assert_eq!(holder.phase().as_str(), "connected");

        holder.set_phase(ServerPhase::Game);
        assert_eq!(*holder.phase(), ServerPhase::Game);
    }

    #[test]
    fn test_unknown_phase_round_trips_verbatim() {
        let mut holder = ServerPhaseHolder::new();
        holder.set_phase(ServerPhase::from("bogus"));

        assert_eq!(*holder.phase(), ServerPhase::Other("bogus".to_string()));
        assert_eq!(holder.phase().as_str(), "bogus");
        assert_eq!(holder.phase().to_string(), "bogus");
    }

    #[test]
    fn test_known_phases_parse_to_typed_variants() {
        assert_eq!(ServerPhase::from("initial"), ServerPhase::Initial);
        assert_eq!(ServerPhase::from("wait"), ServerPhase::Wait);
        assert_eq!(ServerPhase::from("game"), ServerPhase::Game);
    }

    #[test]
    fn test_wire_string_round_trip() {
        for raw in ["initial", "wait", "game", "bogus"] {
            let phase = ServerPhase::from(raw);
            assert_eq!(String::from(phase.clone()), raw);

            let json = serde_json::to_string(&phase).expect("serialize");
            assert_eq!(json, format!("\"{raw}\""));

            let back: ServerPhase = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, phase);
        }
    }
}
