use serde::{Deserialize, Serialize};

use crate::wire::CounterSnapshot;

/// Sentinel shown before any local or remote update has happened.
pub const NEVER_UPDATED: &str = "never";

/// Connectivity to the counter service, decided once by the mount-time probe.
///
/// Write-once: the probe is the only writer. A failed increment or reset after
/// a successful probe surfaces through `CounterState::error_message` and does
/// not downgrade this value, so transient errors never flap the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectivityStatus {
    /// Probe has not completed yet
    Checking,
    /// Probe reached the service
    Connected,
    /// Probe failed; every later operation stays local
    Error,
}

impl ConnectivityStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, ConnectivityStatus::Error)
    }
}

/// State owned by the counter view and mutated only by its own operations.
///
/// `last_updated` is kept as the opaque string the server sent (the service
/// uses the sentinels `"never"` and `"initialized"` alongside real RFC 3339
/// timestamps); interpretation happens at render time in
/// [`crate::util::format_timestamp`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: u64,
    pub last_updated: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self {
            count: 0,
            last_updated: NEVER_UPDATED.to_string(),
            is_loading: false,
            error_message: None,
        }
    }

    /// Replace local values with a server snapshot. A fresh snapshot also
    /// dismisses any earlier error message.
    pub fn apply_snapshot(&mut self, snapshot: &CounterSnapshot) {
        self.count = snapshot.count;
        self.last_updated = snapshot.timestamp.clone();
        self.error_message = None;
    }

    /// Local fallback for increment when the service is unreachable or the
    /// request failed: the click still lands.
    pub fn apply_local_increment(&mut self, now_iso: &str) {
        self.count += 1;
        self.last_updated = now_iso.to_string();
    }

    /// Local fallback for reset.
    pub fn apply_local_reset(&mut self, now_iso: &str) {
        self.count = 0;
        self.last_updated = now_iso.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_zero_and_never() {
        let state = CounterState::new();
        assert_eq!(state.count, 0);
        assert_eq!(state.last_updated, NEVER_UPDATED);
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn snapshot_replaces_count_and_clears_error() {
        let mut state = CounterState::new();
        state.error_message = Some("previous failure".to_string());

        state.apply_snapshot(&CounterSnapshot {
            count: 5,
            message: "ok".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        });

        assert_eq!(state.count, 5);
        assert_eq!(state.last_updated, "2024-01-01T00:00:00Z");
        assert!(state.error_message.is_none());
    }

    #[test]
    fn local_increment_steps_and_stamps() {
        let mut state = CounterState::new();
        state.apply_local_increment("2024-06-01T12:00:00Z");
        assert_eq!(state.count, 1);
        assert_eq!(state.last_updated, "2024-06-01T12:00:00Z");
    }

    #[test]
    fn local_increment_keeps_error_message() {
        // The failure that triggered the fallback must stay visible.
        let mut state = CounterState::new();
        state.error_message = Some("request failed".to_string());
        state.apply_local_increment("2024-06-01T12:00:00Z");
        assert!(state.error_message.is_some());
    }

    #[test]
    fn local_reset_zeroes_the_count() {
        let mut state = CounterState::new();
        state.count = 42;
        state.apply_local_reset("2024-06-01T12:00:00Z");
        assert_eq!(state.count, 0);
        assert_eq!(state.last_updated, "2024-06-01T12:00:00Z");
    }

    #[test]
    fn status_error_predicate() {
        assert!(ConnectivityStatus::Error.is_error());
        assert!(!ConnectivityStatus::Checking.is_error());
        assert!(!ConnectivityStatus::Connected.is_error());
    }
}
