//! Runtime connection state and reconnect attempt bookkeeping.
//! None of this is persisted; the host regenerates it per session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ─── Status & Reason ──────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
    Error,
}

impl ConnectionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Reconnecting => "reconnecting",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disconnected" => Ok(Self::Disconnected),
            "connecting" => Ok(Self::Connecting),
            "connected" => Ok(Self::Connected),
            "reconnecting" => Ok(Self::Reconnecting),
            "error" => Ok(Self::Error),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

/// Why the transport dropped. Classified by the host from transport
/// callbacks; gates reconnect eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectReason {
    NetworkError,
    ServerClosed,
    AuthFailed,
    Timeout,
    UserDisconnect,
    Unknown,
}

impl DisconnectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "network_error",
            Self::ServerClosed => "server_closed",
            Self::AuthFailed => "auth_failed",
            Self::Timeout => "timeout",
            Self::UserDisconnect => "user_disconnect",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DisconnectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisconnectReason {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "network_error" => Ok(Self::NetworkError),
            "server_closed" => Ok(Self::ServerClosed),
            "auth_failed" => Ok(Self::AuthFailed),
            "timeout" => Ok(Self::Timeout),
            "user_disconnect" => Ok(Self::UserDisconnect),
            "unknown" => Ok(Self::Unknown),
            _ => Err(CoreError::UnknownDisconnectReason(s.to_string())),
        }
    }
}

// ─── Attempt history ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Success,
    Failed,
    Cancelled,
}

/// Outcome of a single reconnect attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    /// 1-based attempt number within the cycle.
    pub attempt_number: u32,
    pub attempted_at_ms: u64,
    pub result: AttemptOutcome,
    pub error: Option<String>,
}

/// Live view of an in-flight reconnect cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconnectAttempt {
    pub started_at_ms: u64,
    /// Current attempt number, starting at 1.
    pub attempt_number: u32,
    /// Copied from `Connection::max_reconnect_attempts` at cycle start.
    pub max_attempts: u32,
    /// Scheduled time of the next attempt, set only while waiting.
    pub next_attempt_at_ms: Option<u64>,
    pub history: Vec<AttemptResult>,
}

// ─── Connection state ─────────────────────────────────────────────

/// Runtime state for one connection, owned by the host and mutated
/// through reconnect engine callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub connection_id: String,
    pub status: ConnectionStatus,
    pub error: Option<String>,
    pub latency_ms: Option<u64>,
    pub disconnect_reason: Option<DisconnectReason>,
    pub reconnect_attempt: Option<ReconnectAttempt>,
}

impl ConnectionState {
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            ..Self::default()
        }
    }
}
