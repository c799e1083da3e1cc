//! Typed tmux command builder.
//! Commands are structured values rendered to a single shell string at
//! the last moment, so quoting is centralized and the wire contract is
//! testable without an exec channel.

use crate::pane::PANE_FORMAT;
use crate::session::SESSION_FORMAT;
use crate::window::WINDOW_FORMAT;

/// Options for `capture-pane`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureOptions {
    /// First line to capture; negative values reach into scrollback.
    pub start: Option<i64>,
    /// Last line to capture.
    pub end: Option<i64>,
    /// Keep ANSI escape sequences in the output (`-e`).
    pub escapes: bool,
}

/// One tmux invocation, addressed by session name, window index and
/// pane index as the remote multiplexer expects (`s`, `s:w`, `s:w.p`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmuxCommand {
    ListSessions,
    ListWindows {
        session: String,
    },
    ListPanes {
        session: String,
        window: u32,
    },
    CapturePane {
        session: String,
        window: u32,
        pane: u32,
        options: CaptureOptions,
    },
    SendKeys {
        session: String,
        window: u32,
        pane: u32,
        keys: String,
        literal: bool,
    },
    SelectPane {
        session: String,
        window: u32,
        pane: u32,
    },
    SelectWindow {
        session: String,
        window: u32,
    },
    ResizePane {
        session: String,
        window: u32,
        pane: u32,
        width: u32,
        height: u32,
    },
}

impl TmuxCommand {
    /// Render to the shell string handed to the exec channel.
    pub fn render(&self) -> String {
        let mut argv: Vec<String> = vec!["tmux".to_string()];
        match self {
            Self::ListSessions => {
                push(&mut argv, ["list-sessions", "-F", SESSION_FORMAT]);
            }
            Self::ListWindows { session } => {
                push(&mut argv, ["list-windows", "-t", session, "-F", WINDOW_FORMAT]);
            }
            Self::ListPanes { session, window } => {
                let target = format!("{session}:{window}");
                push(&mut argv, ["list-panes", "-t", &target, "-F", PANE_FORMAT]);
            }
            Self::CapturePane {
                session,
                window,
                pane,
                options,
            } => {
                let target = pane_target(session, *window, *pane);
                push(&mut argv, ["capture-pane", "-p", "-t", &target]);
                if let Some(start) = options.start {
                    push(&mut argv, ["-S", &start.to_string()]);
                }
                if let Some(end) = options.end {
                    push(&mut argv, ["-E", &end.to_string()]);
                }
                if options.escapes {
                    argv.push("-e".to_string());
                }
            }
            Self::SendKeys {
                session,
                window,
                pane,
                keys,
                literal,
            } => {
                let target = pane_target(session, *window, *pane);
                push(&mut argv, ["send-keys", "-t", &target]);
                if *literal {
                    argv.push("-l".to_string());
                }
                argv.push(keys.clone());
            }
            Self::SelectPane {
                session,
                window,
                pane,
            } => {
                let target = pane_target(session, *window, *pane);
                push(&mut argv, ["select-pane", "-t", &target]);
            }
            Self::SelectWindow { session, window } => {
                let target = format!("{session}:{window}");
                push(&mut argv, ["select-window", "-t", &target]);
            }
            Self::ResizePane {
                session,
                window,
                pane,
                width,
                height,
            } => {
                let target = pane_target(session, *window, *pane);
                push(&mut argv, ["resize-pane", "-t", &target]);
                push(&mut argv, ["-x", &width.to_string()]);
                push(&mut argv, ["-y", &height.to_string()]);
            }
        }
        shell_words::join(&argv)
    }
}

fn pane_target(session: &str, window: u32, pane: u32) -> String {
    format!("{session}:{window}.{pane}")
}

fn push<'a>(argv: &mut Vec<String>, args: impl IntoIterator<Item = &'a str>) {
    argv.extend(args.into_iter().map(String::from));
}
