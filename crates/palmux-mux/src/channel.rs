//! CommandChannel trait — the injected remote exec seam.
//! Implemented by the host's transport session; enables mock injection
//! for testing. Calls are strictly sequential per connection: the
//! client awaits each result before issuing the next command.

use std::future::Future;

use crate::error::MuxError;

/// A channel that executes one remote command and returns its stdout.
pub trait CommandChannel: Send + Sync {
    fn exec(&self, command: &str) -> impl Future<Output = Result<String, MuxError>> + Send;
}

impl<T: CommandChannel + ?Sized> CommandChannel for &T {
    fn exec(&self, command: &str) -> impl Future<Output = Result<String, MuxError>> + Send {
        (**self).exec(command)
    }
}
