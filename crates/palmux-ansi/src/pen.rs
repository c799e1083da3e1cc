//! SGR attribute accumulator.

use crate::span::AnsiSpan;

/// The style state currently in effect while scanning a line.
///
/// Mutated by SGR parameter runs; snapshotted into a span whenever
/// pending text is flushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Pen {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl Pen {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stamp the current state onto `text`, producing one span.
    pub fn span(&self, text: String) -> AnsiSpan {
        AnsiSpan {
            text,
            fg: self.fg,
            bg: self.bg,
            bold: self.bold,
            dim: self.dim,
            italic: self.italic,
            underline: self.underline,
            blink: self.blink,
            inverse: self.inverse,
            hidden: self.hidden,
            strikethrough: self.strikethrough,
        }
    }

    /// Apply one SGR parameter list (the integers between `ESC [` and `m`).
    ///
    /// Extended color forms `38;5;N` / `48;5;N` consume two extra
    /// parameters. Unrecognized codes are ignored.
    pub fn apply_sgr(&mut self, params: &[u16]) {
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => self.reset(),
                1 => self.bold = true,
                2 => self.dim = true,
                3 => self.italic = true,
                4 => self.underline = true,
                5 => self.blink = true,
                7 => self.inverse = true,
                8 => self.hidden = true,
                9 => self.strikethrough = true,
                22 => {
                    self.bold = false;
                    self.dim = false;
                }
                23 => self.italic = false,
                24 => self.underline = false,
                25 => self.blink = false,
                27 => self.inverse = false,
                28 => self.hidden = false,
                29 => self.strikethrough = false,
                n @ 30..=37 => self.fg = Some((n - 30) as u8),
                38 => {
                    if params.get(i + 1) == Some(&5) {
                        if let Some(idx) = palette_index(params, i) {
                            self.fg = Some(idx);
                        }
                        i += 2;
                    }
                }
                39 => self.fg = None,
                n @ 40..=47 => self.bg = Some((n - 40) as u8),
                48 => {
                    if params.get(i + 1) == Some(&5) {
                        if let Some(idx) = palette_index(params, i) {
                            self.bg = Some(idx);
                        }
                        i += 2;
                    }
                }
                49 => self.bg = None,
                n @ 90..=97 => self.fg = Some((n - 90 + 8) as u8),
                n @ 100..=107 => self.bg = Some((n - 100 + 8) as u8),
                _ => {}
            }
            i += 1;
        }
    }
}

/// `38;5;N` / `48;5;N`: returns N when it is a valid palette index.
/// The selector and index params are consumed by the caller either way.
fn palette_index(params: &[u16], i: usize) -> Option<u8> {
    u8::try_from(*params.get(i + 2)?).ok()
}
