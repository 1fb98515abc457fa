//! Half-block rendering of rasters.
//!
//! [`HalfBlockRenderer`] turns a [`Raster`] into terminal text at half the
//! vertical resolution: source rows `y` and `y + 1` share one output row, and
//! every source column maps to exactly one output column.
//!
//! Rendering happens in two steps:
//!
//! *   [`HalfBlockRenderer::encode`] walks the raster and builds a [`Grid`] of [`Cell`]s.
//! *   [`HalfBlockRenderer::render`] or [`HalfBlockRenderer::write_to`] serialize that grid
//!     with `crossterm` style commands, one newline after every row.
//!
//! The renderer holds no state besides the background color, so rendering the
//! same raster twice gives byte-identical output.

use crate::rendering::cell::{Cell, HALF_BLOCK};
use crate::rendering::color::{BackgroundColor, Color};
use crate::rendering::grid::Grid;
use crate::rendering::raster::Raster;
use crossterm::queue;
use crossterm::style::{Print, ResetColor};
use std::fmt::Write as _;
use std::io;
use std::io::Write;

/// Converts rasters into lower-half-block terminal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HalfBlockRenderer {
    background: BackgroundColor,
}

impl HalfBlockRenderer {
    pub fn new(background: BackgroundColor) -> Self {
        Self { background }
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    fn resolve<R: Raster + ?Sized>(&self, raster: &R, x: u32, y: u32) -> [u8; 3] {
        Color::from_rgba16(raster.sample(x, y)).unwrap_or(self.background.rgb())
    }

    /// Builds the cell grid for a raster.
    ///
    /// The grid is `width` cells wide and `ceil(height / 2)` rows high. When the
    /// height is odd, the lower half of the last row is always the background
    /// color.
    pub fn encode<R: Raster + ?Sized>(&self, raster: &R) -> Grid<Cell> {
        let width = raster.width();
        let height = raster.height();
        let rows = height.div_ceil(2);

        log::trace!("encoding {width}x{height} raster into {width}x{rows} cells");

        Grid::from_fn(width as usize, rows as usize, |x, row| {
            let x = x as u32;
            let y = row as u32 * 2;
            let upper = self.resolve(raster, x, y);
            let lower = if y + 1 < height {
                self.resolve(raster, x, y + 1)
            } else {
                self.background.rgb()
            };
            Cell::new(upper, lower)
        })
    }

    /// Renders a raster into a single string of escape sequences.
    ///
    /// Every output row is terminated by a newline, including the last one.
    pub fn render<R: Raster + ?Sized>(&self, raster: &R) -> String {
        let grid = self.encode(raster);
        // each cell is roughly 40 bytes of escape codes
        let mut out = String::with_capacity(grid.width() * grid.height() * 40 + grid.height());
        for row in grid.rows() {
            for cell in row {
                // writing into a String cannot fail
                let _ = write!(out, "{cell}");
            }
            out.push('\n');
        }
        out
    }

    /// Streams the rendering of a raster into `sink`.
    ///
    /// The bytes written are identical to what [`HalfBlockRenderer::render`] returns.
    pub fn write_to<R: Raster + ?Sized, W: Write>(&self, raster: &R, sink: &mut W) -> io::Result<()> {
        let grid = self.encode(raster);
        for row in grid.rows() {
            for cell in row {
                queue!(sink, cell.set_colors(), Print(HALF_BLOCK), ResetColor)?;
            }
            queue!(sink, Print('\n'))?;
        }
        sink.flush()
    }
}
