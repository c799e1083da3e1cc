//! Connection configuration and credential bundle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ─── Auth ─────────────────────────────────────────────────────────

/// How the transport authenticates against the remote host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Password,
    Key,
}

impl AuthMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "password" => Ok(Self::Password),
            "key" => Ok(Self::Key),
            _ => Err(CoreError::UnknownAuthMethod(s.to_string())),
        }
    }
}

/// Opaque credential bundle resolved by the host before a (re)connect.
///
/// The engine never inspects these; they pass straight through to the
/// transport's connect primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOptions {
    pub password: Option<String>,
    pub private_key: Option<String>,
    pub passphrase: Option<String>,
}

// ─── Connection ───────────────────────────────────────────────────

/// Persistent connection configuration, owned by the host.
///
/// Immutable for the duration of a reconnect cycle; the reconnect engine
/// reads `auto_reconnect`, `max_reconnect_attempts` and
/// `reconnect_interval_ms` and treats everything else as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    /// Display name, e.g. "Production Server".
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub auth_method: AuthMethod,
    /// Key identifier when `auth_method` is `Key`.
    pub key_id: Option<String>,
    /// Connect timeout in seconds. Enforced by the transport, not here.
    pub timeout_secs: u32,
    /// Keepalive interval in seconds; 0 disables keepalive.
    pub keep_alive_interval_secs: u32,
    pub auto_reconnect: bool,
    /// Attempt limit for one reconnect cycle. Must be at least 1.
    pub max_reconnect_attempts: u32,
    /// Fixed wait between attempts, in milliseconds.
    pub reconnect_interval_ms: u64,
    pub last_connected_ms: Option<u64>,
    pub created_at_ms: u64,
    pub updated_at_ms: u64,
}

impl Connection {
    /// A connection with library defaults: port 22, password auth,
    /// 30s timeout, 60s keepalive, auto-reconnect 3×5000ms.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let now = crate::time::now_ms();
        Self {
            id: id.into(),
            name: name.into(),
            host: host.into(),
            port: 22,
            username: username.into(),
            auth_method: AuthMethod::Password,
            key_id: None,
            timeout_secs: 30,
            keep_alive_interval_secs: 60,
            auto_reconnect: true,
            max_reconnect_attempts: 3,
            reconnect_interval_ms: 5000,
            last_connected_ms: None,
            created_at_ms: now,
            updated_at_ms: now,
        }
    }
}
