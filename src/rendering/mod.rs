//! Rendering of rasters as terminal text.
//!
//! **Sub-modules:**
//!
//! *   [`color`](crate::rendering::color): [`Color`](color::Color) samples, `#rrggbb` parsing and formatting.
//! *   [`grid`](crate::rendering::grid): [`Grid`](grid::Grid), a 2D buffer of cells.
//! *   [`cell`](crate::rendering::cell): [`Cell`](cell::Cell), one half-block glyph with two colors.
//! *   [`raster`](crate::rendering::raster): the [`Raster`](raster::Raster) trait the renderer reads pixels through.
//! *   [`renderer`](crate::rendering::renderer): [`HalfBlockRenderer`](renderer::HalfBlockRenderer).
//!
//! **Key Concepts:**
//!
//! *   **Half blocks:** Each cell is a `▄` glyph. Its foreground shows the lower of two
//!     source pixels and its background shows the upper one, so one text row covers
//!     two image rows.
//! *   **Transparency:** A pixel with zero alpha is replaced by the caller's background
//!     color. Any other alpha is drawn opaque.
//! *   **24-bit color:** Colors are always emitted as truecolor escape sequences.

pub mod cell;
pub mod color;
pub mod grid;
pub mod raster;
pub mod renderer;
