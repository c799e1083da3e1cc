//! Transport trait — the injected connect primitive.
//! The host owns the actual session object (connect/disconnect/exec/
//! shell); the engine only needs connect. Timeout of an individual
//! attempt is the transport's responsibility, not the engine's.

use std::future::Future;

use palmux_core::{AuthOptions, Connection};
use thiserror::Error;

/// Failure of a single connect attempt, carried into the attempt
/// history and the final result as a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConnectError(pub String);

impl ConnectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The host's transport session, reduced to the one primitive the
/// engine drives. Mock-injectable for testing.
pub trait Transport: Send + Sync {
    fn connect(
        &self,
        connection: &Connection,
        auth: &AuthOptions,
    ) -> impl Future<Output = Result<(), ConnectError>> + Send;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn connect(
        &self,
        connection: &Connection,
        auth: &AuthOptions,
    ) -> impl Future<Output = Result<(), ConnectError>> + Send {
        (**self).connect(connection, auth)
    }
}
