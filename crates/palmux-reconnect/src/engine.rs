//! Per-connection reconnect supervision.
//!
//! One cycle per connection id at a time. The registry entry is created
//! when a cycle starts and removed on every exit path; cancellation is
//! advisory-cooperative and takes effect at the next checkpoint (after
//! a failed attempt, before the wait, or instantly during the wait).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use palmux_core::{AttemptOutcome, AttemptResult, AuthOptions, Connection, now_ms};

use crate::error::ReconnectError;
use crate::events::{ReconnectEvents, ReconnectResult};
use crate::transport::Transport;

/// Registry entry for one in-flight cycle.
struct CycleHandle {
    cancel: CancellationToken,
    /// Attempt counter, readable while the cycle runs.
    attempt: Arc<AtomicU32>,
}

/// Supervises reconnect cycles across connections. Connection ids are
/// fully independent: their cycles, counters and handlers share no
/// state beyond the two registry maps.
pub struct ReconnectEngine<T> {
    transport: T,
    cycles: Mutex<HashMap<String, CycleHandle>>,
    handlers: Mutex<HashMap<String, Arc<dyn ReconnectEvents>>>,
}

impl<T: Transport> ReconnectEngine<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cycles: Mutex::new(HashMap::new()),
            handlers: Mutex::new(HashMap::new()),
        }
    }

    /// Run one reconnect cycle to a terminal outcome.
    ///
    /// Attempts `connection.max_reconnect_attempts` connects, waiting
    /// `connection.reconnect_interval_ms` between failures. Exhaustion
    /// and cancellation are reported in the result, not as errors; the
    /// only error is starting a second cycle for an id that already has
    /// one.
    pub async fn start_reconnect(
        &self,
        connection: &Connection,
        auth: &AuthOptions,
    ) -> Result<ReconnectResult, ReconnectError> {
        let id = connection.id.clone();
        let cancel = CancellationToken::new();
        let attempt = Arc::new(AtomicU32::new(0));
        {
            let mut cycles = self.cycles.lock().expect("lock");
            if cycles.contains_key(&id) {
                return Err(ReconnectError::AlreadyInProgress(id));
            }
            cycles.insert(
                id.clone(),
                CycleHandle {
                    cancel: cancel.clone(),
                    attempt: Arc::clone(&attempt),
                },
            );
        }

        let result = self.run_cycle(connection, auth, &cancel, &attempt).await;
        self.cycles.lock().expect("lock").remove(&id);
        result
    }

    async fn run_cycle(
        &self,
        connection: &Connection,
        auth: &AuthOptions,
        cancel: &CancellationToken,
        attempt: &AtomicU32,
    ) -> Result<ReconnectResult, ReconnectError> {
        let id = connection.id.as_str();
        let max = connection.max_reconnect_attempts;
        let mut history: Vec<AttemptResult> = Vec::new();
        let mut last_error = String::new();
        let mut current = 0u32;

        while current < max && !cancel.is_cancelled() {
            current += 1;
            attempt.store(current, Ordering::Relaxed);
            info!(connection_id = id, attempt = current, max, "reconnect attempt");
            self.fire(id, |h| h.on_attempt_start(current, max));

            match self.transport.connect(connection, auth).await {
                Ok(()) => {
                    history.push(AttemptResult {
                        attempt_number: current,
                        attempted_at_ms: now_ms(),
                        result: AttemptOutcome::Success,
                        error: None,
                    });
                    info!(connection_id = id, attempt = current, "reconnect succeeded");
                    self.fire(id, |h| h.on_success());
                    return Ok(ReconnectResult {
                        success: true,
                        attempt_count: current,
                        error: None,
                        cancelled: false,
                        history,
                    });
                }
                Err(err) => {
                    last_error = err.to_string();
                    history.push(AttemptResult {
                        attempt_number: current,
                        attempted_at_ms: now_ms(),
                        result: AttemptOutcome::Failed,
                        error: Some(last_error.clone()),
                    });
                    warn!(
                        connection_id = id,
                        attempt = current,
                        error = %last_error,
                        "reconnect attempt failed"
                    );
                    self.fire(id, |h| h.on_attempt_failed(current, &last_error));

                    if cancel.is_cancelled() {
                        break;
                    }
                    if current < max {
                        debug!(
                            connection_id = id,
                            wait_ms = connection.reconnect_interval_ms,
                            "waiting before next attempt"
                        );
                        tokio::select! {
                            _ = tokio::time::sleep(Duration::from_millis(
                                connection.reconnect_interval_ms,
                            )) => {}
                            _ = cancel.cancelled() => {}
                        }
                    }
                }
            }
        }

        if cancel.is_cancelled() {
            history.push(AttemptResult {
                attempt_number: current,
                attempted_at_ms: now_ms(),
                result: AttemptOutcome::Cancelled,
                error: None,
            });
            info!(connection_id = id, attempts = current, "reconnect cancelled");
            self.fire(id, |h| h.on_cancelled());
            return Ok(ReconnectResult {
                success: false,
                attempt_count: current,
                error: None,
                cancelled: true,
                history,
            });
        }

        warn!(
            connection_id = id,
            attempts = current,
            error = %last_error,
            "reconnect gave up"
        );
        self.fire(id, |h| h.on_give_up(current, &last_error));
        Ok(ReconnectResult {
            success: false,
            attempt_count: current,
            error: Some(last_error),
            cancelled: false,
            history,
        })
    }

    /// Cancel the active cycle for `id`, resolving a pending wait
    /// immediately. No-op when no cycle is running.
    pub fn cancel_reconnect(&self, id: &str) {
        if let Some(handle) = self.cycles.lock().expect("lock").get(id) {
            handle.cancel.cancel();
        }
    }

    /// True while a cycle is running for `id`.
    pub fn is_reconnecting(&self, id: &str) -> bool {
        self.cycles.lock().expect("lock").contains_key(id)
    }

    /// Current attempt number of the active cycle, if any.
    pub fn current_attempt(&self, id: &str) -> Option<u32> {
        self.cycles
            .lock()
            .expect("lock")
            .get(id)
            .map(|handle| handle.attempt.load(Ordering::Relaxed))
    }

    /// Attach an event observer for `id`. Independent of the cycle
    /// registry: may be set before any cycle and survives across
    /// cycles.
    pub fn set_event_handlers(&self, id: &str, handlers: Arc<dyn ReconnectEvents>) {
        self.handlers
            .lock()
            .expect("lock")
            .insert(id.to_string(), handlers);
    }

    pub fn remove_event_handlers(&self, id: &str) {
        self.handlers.lock().expect("lock").remove(id);
    }

    fn fire(&self, id: &str, f: impl FnOnce(&dyn ReconnectEvents)) {
        let handler = self.handlers.lock().expect("lock").get(id).cloned();
        if let Some(handler) = handler {
            f(handler.as_ref());
        }
    }
}
