//! Render raster images as terminal text.
//!
//! Images are decoded, shrunk into a cell budget and drawn with the `▄` glyph in
//! 24-bit color, two image rows per line of text.
//!
//! # Example
//! ```rust ,no_run
//! let preview = blockpeek::image_preview("cat.png", 80, 48, "#000000").unwrap();
//! print!("{preview}");
//! ```

pub mod error;
pub mod loading;
pub mod options;
pub mod rendering;

use crate::error::{ConfigError, PreviewError};
use crate::loading::registry::FormatRegistry;
use crate::options::PreviewOptions;
use crate::rendering::color::BackgroundColor;
use crate::rendering::renderer::HalfBlockRenderer;
use std::path::Path;

/// Loads the image at `path` and renders it to fit within `max_width` columns
/// and `max_height` image rows.
///
/// `background_hex` is a `#rrggbb` color drawn in place of transparent pixels.
/// It is validated before the file is touched.
pub fn image_preview(
    path: impl AsRef<Path>,
    max_width: u32,
    max_height: u32,
    background_hex: &str,
) -> Result<String, PreviewError> {
    let background: BackgroundColor = background_hex.parse()?;
    let options = PreviewOptions::new(max_width, max_height).with_background(background);
    Previewer::new(options)?.preview_path(path)
}

/// A reusable preview pipeline: options plus the formats it can decode.
///
/// Previewers hold no mutable state, so one can be shared across threads and
/// used for many images.
#[derive(Debug, Default)]
pub struct Previewer {
    options: PreviewOptions,
    registry: FormatRegistry,
}

impl Previewer {
    /// Creates a previewer for the built-in formats.
    pub fn new(options: PreviewOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            registry: FormatRegistry::with_defaults(),
        })
    }

    /// Replaces the set of formats this previewer decodes.
    pub fn with_registry(self, registry: FormatRegistry) -> Self {
        Self { registry, ..self }
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> HalfBlockRenderer {
        HalfBlockRenderer::new(self.options.background)
    }

    /// Renders the image stored at `path`.
    pub fn preview_path(&self, path: impl AsRef<Path>) -> Result<String, PreviewError> {
        let raster = loading::load_and_scale_with(
            &self.registry,
            path,
            self.options.max_width,
            self.options.max_height,
            self.options.filter,
        )?;
        Ok(self.renderer().render(&raster))
    }

    /// Renders an image that is already in memory.
    pub fn preview_bytes(&self, bytes: &[u8]) -> Result<String, PreviewError> {
        let raster = loading::decode_and_scale(
            &self.registry,
            bytes,
            self.options.max_width,
            self.options.max_height,
            self.options.filter,
        )?;
        Ok(self.renderer().render(&raster))
    }
}
