//! Error types for the reconnect engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconnectError {
    /// A cycle is already running for this connection id. The active
    /// cycle is untouched; no second loop is spawned.
    #[error("reconnect already in progress for connection {0}")]
    AlreadyInProgress(String),
}
