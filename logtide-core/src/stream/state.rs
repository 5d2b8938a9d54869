use serde::Serialize;
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    /// First attempt, nothing received yet.
    Connecting,
    Connected,
    /// Lost; the transport will retry.
    Disconnected,
    /// Retrying after a previous connection was established.
    Reconnecting,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Reconnecting => "reconnecting",
        };
        f.write_str(label)
    }
}

/// Mirrors what the transport reports. Retry and backoff live in the
/// transport; this only records where it is.
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    state: ConnectionState,
    ever_connected: bool,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionStatus {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Connecting,
            ever_connected: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Still waiting for the very first connection.
    pub fn is_loading(&self) -> bool {
        !self.ever_connected && self.state == ConnectionState::Connecting
    }

    /// Returns the previous state when it changed.
    pub fn on_connecting(&mut self) -> Option<ConnectionState> {
        let next = if self.ever_connected {
            ConnectionState::Reconnecting
        } else {
            ConnectionState::Connecting
        };
        self.transition(next)
    }

    pub fn on_open(&mut self) -> Option<ConnectionState> {
        self.ever_connected = true;
        self.transition(ConnectionState::Connected)
    }

    pub fn on_lost(&mut self) -> Option<ConnectionState> {
        self.transition(ConnectionState::Disconnected)
    }

    fn transition(&mut self, next: ConnectionState) -> Option<ConnectionState> {
        if self.state == next {
            return None;
        }
        let previous = self.state;
        self.state = next;
        tracing::info!(from = %previous, to = %next, "connection state changed");
        Some(previous)
    }
}
