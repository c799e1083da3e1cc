//! Error types for the control-protocol layer.

use thiserror::Error;

/// Substring the remote shell emits when the tmux binary is absent.
const NOT_INSTALLED_MARKER: &str = "command not found";

#[derive(Debug, Error)]
pub enum MuxError {
    /// The remote host has no tmux binary. Non-retryable; surfaced to
    /// the caller of the individual operation, never to a reconnect
    /// cycle.
    #[error("tmux is not installed on the remote host")]
    NotInstalled,

    /// The exec channel rejected the command for any other reason.
    #[error("remote command failed: {0}")]
    Channel(String),
}

impl MuxError {
    /// Promote a generic channel failure to [`MuxError::NotInstalled`]
    /// when the message indicates a missing binary.
    pub fn classify(self) -> Self {
        match self {
            Self::Channel(msg) if msg.contains(NOT_INSTALLED_MARKER) => Self::NotInstalled,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_classified() {
        let err = MuxError::Channel("bash: tmux: command not found".to_string()).classify();
        assert!(matches!(err, MuxError::NotInstalled));
    }

    #[test]
    fn other_failures_stay_generic() {
        let err = MuxError::Channel("connection reset by peer".to_string()).classify();
        assert!(matches!(err, MuxError::Channel(_)));
    }
}
