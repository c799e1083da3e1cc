//! Error types for core type parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown auth method: {0}")]
    UnknownAuthMethod(String),

    #[error("unknown connection status: {0}")]
    UnknownStatus(String),

    #[error("unknown disconnect reason: {0}")]
    UnknownDisconnectReason(String),
}
