//! TmuxPane record, list-panes format string, and parser.

use serde::{Deserialize, Serialize};

use crate::wire::{fields, parse_flag};

/// Tab-delimited format string for `tmux list-panes -F`.
pub const PANE_FORMAT: &str = "#{pane_index}\t#{pane_id}\t#{pane_active}\t#{pane_current_command}\t#{pane_title}\t#{pane_width}\t#{pane_height}\t#{cursor_x}\t#{cursor_y}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxPane {
    pub index: u32,
    /// tmux pane id, e.g. `%0`. Stable for the pane's lifetime.
    pub id: String,
    pub active: bool,
    pub current_command: String,
    pub title: String,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

/// Parse one `list-panes` line. Returns `None` for invalid lines.
pub fn parse_pane_line(line: &str) -> Option<TmuxPane> {
    let parts = fields(line, 9)?;
    Some(TmuxPane {
        index: parts[0].parse().ok()?,
        id: parts[1].to_string(),
        active: parse_flag(parts[2]),
        current_command: parts[3].to_string(),
        title: parts[4].to_string(),
        width: parts[5].parse().ok()?,
        height: parts[6].parse().ok()?,
        cursor_x: parts[7].parse().ok()?,
        cursor_y: parts[8].parse().ok()?,
    })
}

/// Parse full `list-panes` output, skipping invalid lines.
pub fn parse_panes(output: &str) -> Vec<TmuxPane> {
    output.lines().filter_map(parse_pane_line).collect()
}
