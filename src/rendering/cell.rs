//! Terminal cell representation.
//!
//! A [`Cell`] is the unit the renderer produces: one lower-half-block glyph
//! standing for two vertically stacked source pixels.
//!
//! The glyph's filled lower half is drawn in the foreground color and shows the
//! lower pixel, while the unfilled upper half shows the cell's background color,
//! which carries the upper pixel.

use crossterm::Command;
use crossterm::style::{Print, ResetColor};
use std::fmt;

/// The glyph every cell is drawn with.
pub const HALF_BLOCK: char = '▄';

/// Represents a single rendered terminal cell.
///
/// # Example
///
/// ```rust
/// use blockpeek::rendering::cell::Cell;
///
/// let cell = Cell::new([255, 0, 0], [0, 0, 255]);
/// assert_eq!(cell.fg_color(), [0, 0, 255]);
/// assert_eq!(cell.bg_color(), [255, 0, 0]);
/// assert_eq!(cell.to_string(), "\x1b[38;2;0;0;255;48;2;255;0;0m▄\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Color of the upper source pixel.
    pub upper: [u8; 3],
    /// Color of the lower source pixel.
    pub lower: [u8; 3],
}

impl Cell {
    pub fn new(upper: [u8; 3], lower: [u8; 3]) -> Self {
        Self { upper, lower }
    }

    /// The foreground color the glyph is drawn with, i.e. the lower pixel.
    pub fn fg_color(&self) -> [u8; 3] {
        self.lower
    }

    /// The background color of the cell, i.e. the upper pixel.
    pub fn bg_color(&self) -> [u8; 3] {
        self.upper
    }

    /// The combined color change that precedes the glyph.
    pub fn set_colors(&self) -> SetTrueColors {
        SetTrueColors {
            foreground: self.fg_color(),
            background: self.bg_color(),
        }
    }
}

/// A `crossterm` command that sets a 24-bit foreground and background color in
/// a single SGR sequence.
///
/// The parameters are always written, regardless of `NO_COLOR`: previews assume a
/// truecolor terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetTrueColors {
    pub foreground: [u8; 3],
    pub background: [u8; 3],
}

impl Command for SetTrueColors {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let [fr, fg, fb] = self.foreground;
        let [br, bg, bb] = self.background;
        write!(f, "\x1b[38;2;{fr};{fg};{fb};48;2;{br};{bg};{bb}m")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        use crossterm::style::{Color, Colors, SetColors};
        let rgb = |[r, g, b]: [u8; 3]| Color::Rgb { r, g, b };
        SetColors(Colors {
            foreground: Some(rgb(self.foreground)),
            background: Some(rgb(self.background)),
        })
        .execute_winapi()
    }
}

/// Writes the escape sequences for a cell: the colors, the glyph, then a reset.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.set_colors().write_ansi(f)?;
        Print(HALF_BLOCK).write_ansi(f)?;
        ResetColor.write_ansi(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Colored;

    #[test]
    fn test_colors_survive_disabled_ansi_colors() {
        // same switch crossterm flips when NO_COLOR is set; nothing in this
        // crate reads it, so leaving it on does not affect other tests
        Colored::set_ansi_color_disabled(true);

        let cell = Cell::new([255, 0, 0], [0, 0, 0]);
        assert_eq!(cell.to_string(), "\x1b[38;2;0;0;0;48;2;255;0;0m▄\x1b[0m");

        let mut sink = Vec::new();
        crossterm::queue!(sink, cell.set_colors(), Print(HALF_BLOCK), ResetColor).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), cell.to_string());
    }
}
