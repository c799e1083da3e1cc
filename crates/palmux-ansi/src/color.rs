//! 256-color palette resolution.

/// The fixed 16-entry palette: standard colors 0-7, bright colors 8-15.
pub const ANSI_16_COLORS: [&str; 16] = [
    "#000000", // black
    "#CC0000", // red
    "#00CC00", // green
    "#CCCC00", // yellow
    "#0000CC", // blue
    "#CC00CC", // magenta
    "#00CCCC", // cyan
    "#CCCCCC", // white
    "#666666", // bright black
    "#FF0000", // bright red
    "#00FF00", // bright green
    "#FFFF00", // bright yellow
    "#0000FF", // bright blue
    "#FF00FF", // bright magenta
    "#00FFFF", // bright cyan
    "#FFFFFF", // bright white
];

/// Resolve a palette index to an `#rrggbb` color.
///
/// 0-15 use the fixed palette, 16-231 the 6×6×6 color cube, and
/// 232-255 the 24-step grayscale ramp.
pub fn ansi256_to_hex(index: u8) -> String {
    if index < 16 {
        return ANSI_16_COLORS[index as usize].to_string();
    }

    if index < 232 {
        let k = u32::from(index) - 16;
        let r = cube_channel(k / 36);
        let g = cube_channel((k % 36) / 6);
        let b = cube_channel(k % 6);
        return format!("#{r:02x}{g:02x}{b:02x}");
    }

    let gray = (u32::from(index) - 232) * 10 + 8;
    format!("#{gray:02x}{gray:02x}{gray:02x}")
}

/// Cube steps: 0, 95, 135, 175, 215, 255.
fn cube_channel(v: u32) -> u32 {
    if v == 0 { 0 } else { 55 + v * 40 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_palette() {
        assert_eq!(ansi256_to_hex(0), "#000000");
        assert_eq!(ansi256_to_hex(1), "#CC0000");
        assert_eq!(ansi256_to_hex(9), "#FF0000");
        assert_eq!(ansi256_to_hex(15), "#FFFFFF");
    }

    #[test]
    fn cube_corners() {
        assert_eq!(ansi256_to_hex(16), "#000000");
        assert_eq!(ansi256_to_hex(231), "#ffffff");
    }

    #[test]
    fn cube_orange_208() {
        // 208-16 = 192 → r=5, g=2, b=0 → 255,135,0
        assert_eq!(ansi256_to_hex(208), "#ff8700");
    }

    #[test]
    fn cube_mid_tone() {
        // 123-16 = 107 → r=2, g=5, b=5 → 135,255,255
        assert_eq!(ansi256_to_hex(123), "#87ffff");
    }

    #[test]
    fn grayscale_ramp() {
        assert_eq!(ansi256_to_hex(232), "#080808");
        assert_eq!(ansi256_to_hex(244), "#808080");
        assert_eq!(ansi256_to_hex(255), "#eeeeee");
    }
}
