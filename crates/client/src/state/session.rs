//! Session phase derivation.
//!
//! The tracker holds the boolean inputs to the session lifecycle and derives
//! the current [`SessionPhase`] from them on every read. The flags change
//! only through the designated `refresh_*` operations; consumers never write
//! them directly.

use std::fmt;

use crate::ports::outbound::{storage_keys, StorageProvider};
use crate::state::server_phase::ServerPhase;

/// Named stage of the client session lifecycle.
///
/// Derived from the tracker flags in fixed priority order; earlier variants
/// win when several flags are unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not logged in yet
    New,
    /// Logged in, no live connection
    LoggedIn,
    /// Connected, game not announced yet
    Connected,
    /// Game announced, not seated as a participant
    Waiting,
    /// Seated in a running game
    Playing,
}

impl SessionPhase {
    /// Wire/display name of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::New => "new",
            SessionPhase::LoggedIn => "loggedIn",
            SessionPhase::Connected => "connected",
            SessionPhase::Waiting => "waiting",
            SessionPhase::Playing => "playing",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the session lifecycle flags and derives the current phase.
///
/// Constructed once at application start with all flags false, mutated for
/// the application's lifetime. All inputs are falsy-safe: an absent token,
/// an absent transport handle, or a missing roster entry resolve the
/// corresponding flag to `false` rather than raising.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    is_logged_in: bool,
    is_connected: bool,
    is_waiting: bool,
    is_playing: bool,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the login flag from the credential token in persistent storage.
    ///
    /// The flag is set iff the token key is present and non-empty.
    pub fn refresh_login(&mut self, storage: &dyn StorageProvider) {
        self.is_logged_in = storage
            .load(storage_keys::TOKEN)
            .is_some_and(|token| !token.is_empty());
        tracing::debug!(is_logged_in = self.is_logged_in, "refreshed login flag");
    }

    /// Re-derive the connection flag from a transport handle.
    ///
    /// The handle is opaque; only its presence is inspected.
    pub fn refresh_connection<T>(&mut self, transport: Option<&T>) {
        self.is_connected = transport.is_some();
        tracing::debug!(is_connected = self.is_connected, "refreshed connection flag");
    }

    /// Re-derive the waiting flag from the server-announced phase.
    ///
    /// Only a running game counts; every other announcement (including
    /// unrecognized ones) resolves to "not yet".
    pub fn refresh_waiting(&mut self, server_phase: &ServerPhase) {
        self.is_waiting = *server_phase == ServerPhase::Game;
        tracing::debug!(is_waiting = self.is_waiting, "refreshed waiting flag");
    }

    /// Re-derive the playing flag from the participant roster.
    ///
    /// The flag is set iff the local player is a member of the list.
    pub fn refresh_playing(&mut self, participants: &[String], player: &str) {
        self.is_playing = participants.iter().any(|p| p == player);
        tracing::debug!(is_playing = self.is_playing, "refreshed playing flag");
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn is_waiting(&self) -> bool {
        self.is_waiting
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current phase, recomputed from the flags on every call.
    ///
    /// Pure: no history dependence, no caching.
    pub fn phase(&self) -> SessionPhase {
        if !self.is_logged_in {
            SessionPhase::New
        } else if !self.is_connected {
            SessionPhase::LoggedIn
        } else if !self.is_waiting {
            SessionPhase::Connected
        } else if !self.is_playing {
            SessionPhase::Waiting
        } else {
            SessionPhase::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;

    /// In-memory storage used in place of the platform providers.
    #[derive(Default)]
    struct MemoryStorage {
        values: RwLock<HashMap<String, String>>,
    }

    impl StorageProvider for MemoryStorage {
        fn save(&self, key: &str, value: &str) {
            if let Ok(mut values) = self.values.write() {
                values.insert(key.to_string(), value.to_string());
            }
        }

        fn load(&self, key: &str) -> Option<String> {
            self.values.read().ok()?.get(key).cloned()
        }

        fn remove(&self, key: &str) {
            if let Ok(mut values) = self.values.write() {
                values.remove(key);
            }
        }
    }

    fn tracker_with(
        is_logged_in: bool,
        is_connected: bool,
        is_waiting: bool,
        is_playing: bool,
    ) -> SessionTracker {
        SessionTracker {
            is_logged_in,
            is_connected,
            is_waiting,
            is_playing,
        }
    }

    #[test]
    fn test_phase_priority_order_over_all_flag_combinations() {
        for bits in 0u8..16 {
            let is_logged_in = bits & 0b0001 != 0;
            let is_connected = bits & 0b0010 != 0;
            let is_waiting = bits & 0b0100 != 0;
            let is_playing = bits & 0b1000 != 0;

            let tracker = tracker_with(is_logged_in, is_connected, is_waiting, is_playing);

            let expected = if !is_logged_in {
                SessionPhase::New
            } else if !is_connected {
                SessionPhase::LoggedIn
            } else if !is_waiting {
                SessionPhase::Connected
            } else if !is_playing {
                SessionPhase::Waiting
            } else {
                SessionPhase::Playing
            };

            assert_eq!(tracker.phase(), expected, "flags: {bits:04b}");
            // Pure derivation: a second read observes the same phase.
            assert_eq!(tracker.phase(), expected);
        }
    }

    #[test]
    fn test_new_tracker_starts_in_new_phase() {
        assert_eq!(SessionTracker::new().phase(), SessionPhase::New);
    }

    #[test]
    fn test_refresh_login_requires_non_empty_token() {
        let storage = MemoryStorage::default();
        let mut tracker = SessionTracker::new();

        tracker.refresh_login(&storage);
        assert!(!tracker.is_logged_in(), "absent token");

        storage.save(storage_keys::TOKEN, "");
        tracker.refresh_login(&storage);
        assert!(!tracker.is_logged_in(), "empty token");

        storage.save(storage_keys::TOKEN, "abc123");
        tracker.refresh_login(&storage);
        assert!(tracker.is_logged_in());

        storage.remove(storage_keys::TOKEN);
        tracker.refresh_login(&storage);
        assert!(!tracker.is_logged_in(), "removed token");
    }

    #[test]
    fn test_refresh_connection_inspects_nullity_only() {
        let mut tracker = SessionTracker::new();

        tracker.refresh_connection(None::<&()>);
        assert!(!tracker.is_connected());

        let handle = ();
        tracker.refresh_connection(Some(&handle));
        assert!(tracker.is_connected());

        tracker.refresh_connection(None::<&()>);
        assert!(!tracker.is_connected());
    }

    #[test]
    fn test_refresh_waiting_recognizes_only_a_running_game() {
        let mut tracker = SessionTracker::new();

        tracker.refresh_waiting(&ServerPhase::Game);
        assert!(tracker.is_waiting());

        tracker.refresh_waiting(&ServerPhase::Wait);
        assert!(!tracker.is_waiting());

        tracker.refresh_waiting(&ServerPhase::Initial);
        assert!(!tracker.is_waiting());

        tracker.refresh_waiting(&ServerPhase::Other("bogus".to_string()));
        assert!(!tracker.is_waiting());
    }

    #[test]
    fn test_refresh_playing_checks_roster_membership() {
        let mut tracker = SessionTracker::new();

        tracker.refresh_playing(&[], "p1");
        assert!(!tracker.is_playing());

        let roster = vec!["p1".to_string(), "p2".to_string()];
        tracker.refresh_playing(&roster, "p1");
        assert!(tracker.is_playing());

        tracker.refresh_playing(&roster, "p3");
        assert!(!tracker.is_playing());
    }

    #[test]
    fn test_full_session_walkthrough() {
        let storage = MemoryStorage::default();
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.phase(), SessionPhase::New);

        storage.save(storage_keys::TOKEN, "abc123");
        tracker.refresh_login(&storage);
        assert_eq!(tracker.phase(), SessionPhase::LoggedIn);

        let socket = "handle";
        tracker.refresh_connection(Some(&socket));
        assert_eq!(tracker.phase(), SessionPhase::Connected);

        tracker.refresh_waiting(&ServerPhase::Game);
        assert_eq!(tracker.phase(), SessionPhase::Waiting);

        let roster = vec!["p1".to_string(), "p2".to_string()];
        tracker.refresh_playing(&roster, "p2");
        assert_eq!(tracker.phase(), SessionPhase::Playing);

        // Dropping the connection falls all the way back to LoggedIn,
        // regardless of the later flags.
        tracker.refresh_connection(None::<&()>);
        assert_eq!(tracker.phase(), SessionPhase::LoggedIn);
    }

    #[test]
    fn test_phase_display_names() {
        assert_eq!(SessionPhase::New.to_string(), "new");
        assert_eq!(SessionPhase::LoggedIn.to_string(), "loggedIn");
        assert_eq!(SessionPhase::Connected.to_string(), "connected");
        assert_eq!(SessionPhase::Waiting.to_string(), "waiting");
        assert_eq!(SessionPhase::Playing.to_string(), "playing");
    }
}
