//! TmuxWindow record, list-windows format string, and parser.

use serde::{Deserialize, Serialize};

use crate::wire::{fields, parse_flag};

/// Tab-delimited format string for `tmux list-windows -F`.
pub const WINDOW_FORMAT: &str =
    "#{window_index}\t#{window_name}\t#{window_active}\t#{window_panes}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxWindow {
    pub index: u32,
    pub name: String,
    pub active: bool,
    pub pane_count: u32,
}

/// Parse one `list-windows` line. Returns `None` for invalid lines.
pub fn parse_window_line(line: &str) -> Option<TmuxWindow> {
    let parts = fields(line, 4)?;
    let index: u32 = parts[0].parse().ok()?;
    let pane_count: u32 = parts[3].parse().ok()?;
    Some(TmuxWindow {
        index,
        name: parts[1].to_string(),
        active: parse_flag(parts[2]),
        pane_count,
    })
}

/// Parse full `list-windows` output, skipping invalid lines.
pub fn parse_windows(output: &str) -> Vec<TmuxWindow> {
    output.lines().filter_map(parse_window_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_line() {
        let window = parse_window_line("0\teditor\t1\t2").expect("should parse");
        assert_eq!(window.index, 0);
        assert_eq!(window.name, "editor");
        assert!(window.active);
        assert_eq!(window.pane_count, 2);
    }

    #[test]
    fn invalid_lines_rejected() {
        assert!(parse_window_line("").is_none());
        assert!(parse_window_line("invalid").is_none());
        assert!(parse_window_line("x\teditor\t1\t2").is_none());
    }

    #[test]
    fn parse_multiple_windows() {
        let windows = parse_windows("0\teditor\t1\t2\n1\tserver\t0\t1\n");
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].name, "server");
        assert!(!windows[1].active);
    }
}
