//! palmux-ansi: SGR escape-sequence parsing for captured pane text.
//! Converts raw byte streams containing ANSI color/style escapes into
//! ordered styled spans ready for rendering. Pure functions, no IO —
//! safe to call from hot render paths.
//!
//! Only SGR (`ESC [ … m`) is interpreted. Every other CSI sequence is
//! recognized and discarded; cursor addressing and erase controls are
//! not modeled.

pub mod color;
pub mod parser;
mod pen;
pub mod span;

pub use color::{ANSI_16_COLORS, ansi256_to_hex};
pub use parser::{parse_line, parse_lines, strip_ansi};
pub use span::{AnsiLine, AnsiSpan};
