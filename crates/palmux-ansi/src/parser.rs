//! Line scanner: raw text with escapes in, styled spans out.
//!
//! Total over arbitrary input — malformed or truncated sequences become
//! literal text or are dropped, never an error. Remote byte streams are
//! noisy; the parser must absorb whatever arrives.

use crate::pen::Pen;
use crate::span::{AnsiLine, AnsiSpan};

const ESC: char = '\u{1b}';

/// Parse one line into styled spans. The pen starts from the default
/// state on every call; feed whole buffers through [`parse_lines`] when
/// style must carry across line breaks.
///
/// Returns an empty vec for an empty string.
pub fn parse_line(raw: &str) -> Vec<AnsiSpan> {
    let mut pen = Pen::default();
    scan(raw, &mut pen)
}

/// Parse a batch of lines, one [`AnsiLine`] per input line, preserving
/// order and count. SGR state carries from line to line within the
/// batch, mirroring how a terminal would paint a captured region.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<AnsiLine> {
    let mut pen = Pen::default();
    lines
        .iter()
        .map(|line| AnsiLine {
            spans: scan(line.as_ref(), &mut pen),
        })
        .collect()
}

/// Remove every recognized `ESC [ … <letter>` sequence, keeping all
/// other characters verbatim and in order.
pub fn strip_ansi(text: &str) -> String {
    let mut pen = Pen::default();
    scan(text, &mut pen)
        .into_iter()
        .map(|span| span.text)
        .collect()
}

/// One left-to-right pass over `raw` with a caller-owned pen.
fn scan(raw: &str, pen: &mut Pen) -> Vec<AnsiSpan> {
    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESC {
            buf.push(ch);
            continue;
        }
        // Only the CSI form is a sequence; a lone ESC is ordinary text.
        if chars.peek() != Some(&'[') {
            buf.push(ch);
            continue;
        }
        chars.next();

        let mut params = String::new();
        let mut terminator = None;
        for ch in chars.by_ref() {
            if ch.is_ascii_digit() || ch == ';' {
                params.push(ch);
            } else {
                terminator = Some(ch);
                break;
            }
        }

        match terminator {
            Some('m') => {
                flush(&mut spans, &mut buf, pen);
                pen.apply_sgr(&parse_params(&params));
            }
            Some(t) if t.is_ascii_alphabetic() => {
                // Recognized non-SGR CSI (cursor, erase, …): discard.
            }
            _ => {
                // Truncated or garbled sequence. The introducer is
                // dropped; any collected parameter characters were plain
                // text after all.
                buf.push_str(&params);
            }
        }
    }

    flush(&mut spans, &mut buf, pen);
    spans
}

fn flush(spans: &mut Vec<AnsiSpan>, buf: &mut String, pen: &Pen) {
    if !buf.is_empty() {
        spans.push(pen.span(std::mem::take(buf)));
    }
}

/// Semicolon-separated integers; an empty list or empty element means 0.
fn parse_params(params: &str) -> Vec<u16> {
    if params.is_empty() {
        return vec![0];
    }
    params
        .split(';')
        .map(|p| {
            if p.is_empty() {
                0
            } else {
                // Oversized values saturate and fall through as
                // unrecognized codes.
                p.parse::<u16>().unwrap_or(u16::MAX)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_single_span() {
        let spans = parse_line("Hello, World!");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0], AnsiSpan::plain("Hello, World!"));
    }

    #[test]
    fn empty_string_no_spans() {
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn foreground_color() {
        let spans = parse_line("\x1b[32mgreen text\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "green text");
        assert_eq!(spans[0].fg, Some(2));
    }

    #[test]
    fn background_color() {
        let spans = parse_line("\x1b[41mred bg\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].bg, Some(1));
    }

    #[test]
    fn bold_text() {
        let spans = parse_line("\x1b[1mbold\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].bold);
    }

    #[test]
    fn multiple_segments() {
        let spans = parse_line("\x1b[31mred\x1b[0m normal \x1b[32mgreen\x1b[0m");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "red");
        assert_eq!(spans[0].fg, Some(1));
        assert_eq!(spans[1].text, " normal ");
        assert_eq!(spans[1].fg, None);
        assert_eq!(spans[2].text, "green");
        assert_eq!(spans[2].fg, Some(2));
    }

    #[test]
    fn segment_carries_pen_state_before_sequence() {
        // the flush happens with the old pen, the new codes apply after
        let spans = parse_line("a\x1b[1mb");
        assert_eq!(spans.len(), 2);
        assert!(!spans[0].bold);
        assert!(spans[1].bold);
    }

    #[test]
    fn color_256() {
        let spans = parse_line("\x1b[38;5;208morange\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].fg, Some(208));
    }

    #[test]
    fn bright_colors() {
        let spans = parse_line("\x1b[91mbright red\x1b[0m");
        assert_eq!(spans[0].fg, Some(9));
    }

    #[test]
    fn multiple_attributes_one_sequence() {
        let spans = parse_line("\x1b[1;31;4mbold red underline\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].bold);
        assert!(spans[0].underline);
        assert_eq!(spans[0].fg, Some(1));
    }

    #[test]
    fn empty_params_means_reset() {
        let spans = parse_line("\x1b[31mred\x1b[mplain");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].fg, None);
    }

    #[test]
    fn non_sgr_csi_discarded() {
        // cursor-up and erase-line vanish without touching the pen
        let spans = parse_line("a\x1b[2Ab\x1b[Kc");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "abc");
    }

    #[test]
    fn lone_esc_is_literal() {
        let spans = parse_line("a\x1bb");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "a\u{1b}b");
    }

    #[test]
    fn truncated_sequence_at_end_of_input() {
        let spans = parse_line("abc\x1b[31");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "abc31");
    }

    #[test]
    fn garbled_sequence_keeps_param_text() {
        let spans = parse_line("\x1b[12\u{1f600}x");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "12x");
    }

    #[test]
    fn parse_lines_preserves_order_and_count() {
        let lines = parse_lines(&["line 1", "\x1b[32mgreen line 2\x1b[0m", "line 3"]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].text, "line 1");
        assert_eq!(lines[1].spans[0].fg, Some(2));
        assert_eq!(lines[2].spans[0].text, "line 3");
    }

    #[test]
    fn parse_lines_keeps_empty_lines() {
        let lines = parse_lines(&["a", "", "b"]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }

    #[test]
    fn pen_carries_across_lines_within_batch() {
        let lines = parse_lines(&["\x1b[31mred start", "still red\x1b[0m done"]);
        assert_eq!(lines[1].spans[0].fg, Some(1));
        assert_eq!(lines[1].spans[1].fg, None);
    }

    #[test]
    fn pen_resets_between_parse_line_calls() {
        let _ = parse_line("\x1b[31mred with no reset");
        let spans = parse_line("plain");
        assert_eq!(spans[0].fg, None);
    }

    #[test]
    fn strip_ansi_removes_sequences() {
        assert_eq!(strip_ansi("\x1b[32mgreen text\x1b[0m"), "green text");
    }

    #[test]
    fn strip_ansi_plain_text_unchanged() {
        assert_eq!(strip_ansi("plain text"), "plain text");
    }

    #[test]
    fn strip_ansi_matches_span_concatenation() {
        let input = "\x1b[1;38;5;99mstyled\x1b[0m mid \x1b[2Kplain\x1b[4mtail";
        let joined: String = parse_line(input).into_iter().map(|s| s.text).collect();
        assert_eq!(strip_ansi(input), joined);
    }

    #[test]
    fn never_panics_on_noise() {
        for input in [
            "\x1b",
            "\x1b[",
            "\x1b[;;;",
            "\x1b[999999999999m",
            "\x1b[38;5m",
            "\x1b[38;5;mx",
            "\u{1b}[31;\u{1b}[m",
        ] {
            let _ = parse_line(input);
            let _ = strip_ansi(input);
        }
    }
}
