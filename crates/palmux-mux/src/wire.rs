//! Shared helpers for the tab-delimited status wire format.
//! A line is valid only when it has the exact expected field count and
//! every numeric field parses; anything else is skipped by the callers.

/// Split a status line and require an exact field count.
pub(crate) fn fields(line: &str, expected: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = line.split('\t').collect();
    (parts.len() == expected).then_some(parts)
}

/// tmux boolean flags: `"1"` is true, anything else is false.
pub(crate) fn parse_flag(s: &str) -> bool {
    s == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_field_count_required() {
        assert!(fields("a\tb\tc", 3).is_some());
        assert!(fields("a\tb", 3).is_none());
        // extra fields make the line invalid, not merely truncated
        assert!(fields("a\tb\tc\td", 3).is_none());
    }

    #[test]
    fn flag_variants() {
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("true"));
        assert!(!parse_flag(""));
    }
}
