//! palmux-core: shared connection domain types.
//! Connection configuration, runtime connection state, reconnect attempt
//! bookkeeping, and the wall-clock helper. No IO — pure data.

pub mod connection;
pub mod error;
pub mod state;
pub mod time;

pub use connection::{AuthMethod, AuthOptions, Connection};
pub use error::CoreError;
pub use state::{
    AttemptOutcome, AttemptResult, ConnectionState, ConnectionStatus, DisconnectReason,
    ReconnectAttempt,
};
pub use time::now_ms;
