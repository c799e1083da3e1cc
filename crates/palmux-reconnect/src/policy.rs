//! Retry eligibility policy.

use palmux_core::{Connection, ConnectionState, DisconnectReason};

/// Disconnect reasons that must never trigger an automatic reconnect:
/// the user asked for the disconnect, or credentials are wrong and
/// retrying would only repeat the failure (and may lock the account).
pub const NON_RETRYABLE_REASONS: [DisconnectReason; 2] = [
    DisconnectReason::UserDisconnect,
    DisconnectReason::AuthFailed,
];

/// Decide whether a disconnection should start an automatic reconnect
/// cycle for this connection.
pub fn should_reconnect(connection: &Connection, state: &ConnectionState) -> bool {
    if !connection.auto_reconnect {
        return false;
    }
    if let Some(reason) = state.disconnect_reason
        && NON_RETRYABLE_REASONS.contains(&reason)
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(auto_reconnect: bool) -> Connection {
        Connection {
            auto_reconnect,
            ..Connection::new("c1", "Test", "example.com", "user")
        }
    }

    fn state(reason: Option<DisconnectReason>) -> ConnectionState {
        ConnectionState {
            disconnect_reason: reason,
            ..ConnectionState::new("c1")
        }
    }

    #[test]
    fn disabled_auto_reconnect_never_retries() {
        for reason in [
            None,
            Some(DisconnectReason::NetworkError),
            Some(DisconnectReason::UserDisconnect),
        ] {
            assert!(!should_reconnect(&connection(false), &state(reason)));
        }
    }

    #[test]
    fn user_disconnect_not_retried() {
        assert!(!should_reconnect(
            &connection(true),
            &state(Some(DisconnectReason::UserDisconnect))
        ));
    }

    #[test]
    fn auth_failure_not_retried() {
        assert!(!should_reconnect(
            &connection(true),
            &state(Some(DisconnectReason::AuthFailed))
        ));
    }

    #[test]
    fn transient_reasons_retried() {
        for reason in [
            DisconnectReason::NetworkError,
            DisconnectReason::ServerClosed,
            DisconnectReason::Timeout,
            DisconnectReason::Unknown,
        ] {
            assert!(
                should_reconnect(&connection(true), &state(Some(reason))),
                "{reason} should be retryable"
            );
        }
    }

    #[test]
    fn missing_reason_retried() {
        assert!(should_reconnect(&connection(true), &state(None)));
    }
}
