//! palmux-mux: tmux control-protocol layer.
//! Builds tmux invocations, runs them through an injected remote exec
//! channel, and parses the tab-delimited status output into typed
//! session/window/pane records. No transport of its own — pure protocol.

pub mod channel;
pub mod client;
pub mod command;
pub mod error;
pub mod keys;
pub mod pane;
pub mod session;
pub mod window;
mod wire;

pub use channel::CommandChannel;
pub use client::TmuxClient;
pub use command::{CaptureOptions, TmuxCommand};
pub use error::MuxError;
pub use keys::{SpecialKey, alt_key, ctrl_key};
pub use pane::{PANE_FORMAT, TmuxPane, parse_pane_line, parse_panes};
pub use session::{SESSION_FORMAT, TmuxSession, parse_session_line, parse_sessions};
pub use window::{WINDOW_FORMAT, TmuxWindow, parse_window_line, parse_windows};
