//! TmuxClient: domain operations over an injected exec channel.

use tracing::debug;

use crate::channel::CommandChannel;
use crate::command::{CaptureOptions, TmuxCommand};
use crate::error::MuxError;
use crate::pane::{TmuxPane, parse_panes};
use crate::session::{TmuxSession, parse_sessions};
use crate::window::{TmuxWindow, parse_windows};

/// Control-protocol client for one remote multiplexer.
///
/// Generic over the exec channel so hosts can plug in their transport
/// session and tests a mock. All operations are sequential: each awaits
/// its result before the caller can issue the next.
pub struct TmuxClient<C> {
    channel: C,
}

impl<C: CommandChannel> TmuxClient<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Enumerate remote sessions. Empty output (no server running)
    /// yields an empty vec, not an error.
    pub async fn list_sessions(&self) -> Result<Vec<TmuxSession>, MuxError> {
        let output = self.run(TmuxCommand::ListSessions).await?;
        Ok(parse_sessions(&output))
    }

    pub async fn list_windows(&self, session: &str) -> Result<Vec<TmuxWindow>, MuxError> {
        let output = self
            .run(TmuxCommand::ListWindows {
                session: session.to_string(),
            })
            .await?;
        Ok(parse_windows(&output))
    }

    pub async fn list_panes(&self, session: &str, window: u32) -> Result<Vec<TmuxPane>, MuxError> {
        let output = self
            .run(TmuxCommand::ListPanes {
                session: session.to_string(),
                window,
            })
            .await?;
        Ok(parse_panes(&output))
    }

    /// Capture pane text as raw lines, escapes included when
    /// `options.escapes` is set.
    pub async fn capture_pane(
        &self,
        session: &str,
        window: u32,
        pane: u32,
        options: CaptureOptions,
    ) -> Result<Vec<String>, MuxError> {
        let output = self
            .run(TmuxCommand::CapturePane {
                session: session.to_string(),
                window,
                pane,
                options,
            })
            .await?;
        Ok(split_capture(&output))
    }

    /// Send keys to a pane. With `literal` the remote treats `keys` as
    /// raw bytes instead of interpreting named-key syntax.
    pub async fn send_keys(
        &self,
        session: &str,
        window: u32,
        pane: u32,
        keys: &str,
        literal: bool,
    ) -> Result<(), MuxError> {
        self.run(TmuxCommand::SendKeys {
            session: session.to_string(),
            window,
            pane,
            keys: keys.to_string(),
            literal,
        })
        .await?;
        Ok(())
    }

    pub async fn select_pane(&self, session: &str, window: u32, pane: u32) -> Result<(), MuxError> {
        self.run(TmuxCommand::SelectPane {
            session: session.to_string(),
            window,
            pane,
        })
        .await?;
        Ok(())
    }

    pub async fn select_window(&self, session: &str, window: u32) -> Result<(), MuxError> {
        self.run(TmuxCommand::SelectWindow {
            session: session.to_string(),
            window,
        })
        .await?;
        Ok(())
    }

    pub async fn resize_pane(
        &self,
        session: &str,
        window: u32,
        pane: u32,
        width: u32,
        height: u32,
    ) -> Result<(), MuxError> {
        self.run(TmuxCommand::ResizePane {
            session: session.to_string(),
            window,
            pane,
            width,
            height,
        })
        .await?;
        Ok(())
    }

    async fn run(&self, command: TmuxCommand) -> Result<String, MuxError> {
        let rendered = command.render();
        debug!(command = %rendered, "executing tmux command");
        self.channel
            .exec(&rendered)
            .await
            .map_err(MuxError::classify)
    }
}

/// Split captured output on newlines; empty output means no lines, and
/// one trailing newline does not produce a phantom empty line.
fn split_capture(output: &str) -> Vec<String> {
    if output.is_empty() {
        return Vec::new();
    }
    output
        .strip_suffix('\n')
        .unwrap_or(output)
        .split('\n')
        .map(String::from)
        .collect()
}
