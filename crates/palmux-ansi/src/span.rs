//! Styled span and line types produced by the parser.

use serde::{Deserialize, Serialize};

/// A run of text rendered with one set of attributes.
///
/// Immutable once produced. Concatenating `text` over all spans of a
/// line reproduces the visible characters of that line in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiSpan {
    pub text: String,
    /// Foreground palette index (0-255); `None` = terminal default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<u8>,
    /// Background palette index (0-255); `None` = terminal default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blink: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub inverse: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl AnsiSpan {
    /// A span with default attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// One parsed line: an ordered list of spans. Empty input lines yield
/// a line with no spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiLine {
    pub spans: Vec<AnsiSpan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_span_has_no_attributes() {
        let span = AnsiSpan::plain("hello");
        assert_eq!(span.text, "hello");
        assert!(span.fg.is_none());
        assert!(span.bg.is_none());
        assert!(!span.bold);
    }

    #[test]
    fn serde_skips_unset_attributes() {
        let json = serde_json::to_string(&AnsiSpan::plain("x")).expect("should serialize");
        assert_eq!(json, "{\"text\":\"x\"}");
    }

    #[test]
    fn serde_round_trip_with_attributes() {
        let span = AnsiSpan {
            text: "warn".to_string(),
            fg: Some(208),
            bold: true,
            ..AnsiSpan::default()
        };
        let json = serde_json::to_string(&span).expect("should serialize");
        let back: AnsiSpan = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, span);
    }
}
