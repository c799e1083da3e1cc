//! Reconnect lifecycle events and the cycle result.

use palmux_core::AttemptResult;
use serde::{Deserialize, Serialize};

/// Observer for one connection's reconnect lifecycle. All methods have
/// no-op defaults so hosts implement only what they render.
///
/// Handlers are registered per connection id, independently of any
/// running cycle, and stay attached across cycles.
pub trait ReconnectEvents: Send + Sync {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}
    fn on_attempt_failed(&self, _attempt: u32, _error: &str) {}
    fn on_success(&self) {}
    fn on_give_up(&self, _total_attempts: u32, _last_error: &str) {}
    fn on_cancelled(&self) {}
}

/// Terminal outcome of one reconnect cycle. Exhaustion and cancellation
/// are reported here, never as errors, so the host can render state
/// without wrapping the whole cycle in error handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconnectResult {
    pub success: bool,
    /// Attempts actually made, including the successful one.
    pub attempt_count: u32,
    /// Last connect error when the cycle gave up.
    pub error: Option<String>,
    pub cancelled: bool,
    /// Per-attempt outcomes in order.
    pub history: Vec<AttemptResult>,
}
