//! TmuxSession record, list-sessions format string, and parser.

use serde::{Deserialize, Serialize};

use crate::wire::{fields, parse_flag};

/// Tab-delimited format string for `tmux list-sessions -F`.
pub const SESSION_FORMAT: &str =
    "#{session_name}\t#{session_created}\t#{session_attached}\t#{session_windows}";

/// One remote tmux session. Derived data — regenerated on every query,
/// no identity beyond the remote multiplexer's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxSession {
    pub name: String,
    /// Creation time in Unix milliseconds (tmux reports seconds).
    pub created_ms: u64,
    pub attached: bool,
    pub window_count: u32,
}

/// Parse one `list-sessions` line. Returns `None` for invalid lines.
pub fn parse_session_line(line: &str) -> Option<TmuxSession> {
    let parts = fields(line, 4)?;
    let created_secs: u64 = parts[1].parse().ok()?;
    let window_count: u32 = parts[3].parse().ok()?;
    Some(TmuxSession {
        name: parts[0].to_string(),
        created_ms: created_secs * 1000,
        attached: parse_flag(parts[2]),
        window_count,
    })
}

/// Parse full `list-sessions` output. Invalid lines are skipped;
/// relative order of valid lines is preserved. Empty output yields an
/// empty vec.
pub fn parse_sessions(output: &str) -> Vec<TmuxSession> {
    output.lines().filter_map(parse_session_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_line() {
        let session = parse_session_line("main\t1704067200\t1\t3").expect("should parse");
        assert_eq!(session.name, "main");
        assert_eq!(session.created_ms, 1_704_067_200_000);
        assert!(session.attached);
        assert_eq!(session.window_count, 3);
    }

    #[test]
    fn parse_detached() {
        let session = parse_session_line("dev\t1704067200\t0\t1").expect("should parse");
        assert!(!session.attached);
    }

    #[test]
    fn invalid_lines_rejected() {
        assert!(parse_session_line("").is_none());
        assert!(parse_session_line("invalid").is_none());
        assert!(parse_session_line("main\tnotanumber\t1\t3").is_none());
        assert!(parse_session_line("main\t1704067200\t1\t3\textra").is_none());
    }

    #[test]
    fn parse_multiple_sessions() {
        let output = "main\t1704067200\t1\t3\ndev\t1704153600\t0\t2\n";
        let sessions = parse_sessions(output);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].name, "main");
        assert_eq!(sessions[1].name, "dev");
    }

    #[test]
    fn malformed_lines_skipped_in_order() {
        let output = "main\t1704067200\t1\t3\ninvalid\ndev\t1704153600\t0\t2\n";
        let sessions = parse_sessions(output);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].name, "main");
        assert_eq!(sessions[1].name, "dev");
    }

    #[test]
    fn empty_output_empty_vec() {
        assert!(parse_sessions("").is_empty());
    }
}
