//! palmux-reconnect: keeps a logical session alive across transient
//! transport failures. Supervises per-connection reconnect cycles with
//! a fixed-interval, attempt-bounded retry loop and instant, advisory
//! cancellation. The transport's connect primitive is injected; the
//! engine owns only the supervision state machine.

pub mod engine;
pub mod error;
pub mod events;
pub mod policy;
pub mod transport;

pub use engine::ReconnectEngine;
pub use error::ReconnectError;
pub use events::{ReconnectEvents, ReconnectResult};
pub use policy::{NON_RETRYABLE_REASONS, should_reconnect};
pub use transport::{ConnectError, Transport};
