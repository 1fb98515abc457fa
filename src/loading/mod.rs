//! Loading images and scaling them to a cell budget.
//!
//! The loader reads the whole file, lets the [`FormatRegistry`] sniff and decode
//! it, widens the result to 16-bit RGBA and shrinks it into the bounding box.
//! The file is read in one call, so no handle outlives the read, even when
//! decoding fails afterwards.

pub mod registry;
pub mod resize;

use crate::error::{ConfigError, PreviewError};
use crate::rendering::raster::Raster16;
use registry::FormatRegistry;
use resize::ResizeFilter;
use std::path::Path;

/// Rejects bounding boxes that could only ever produce an empty image.
pub fn check_bounds(max_width: u32, max_height: u32) -> Result<(), ConfigError> {
    if max_width == 0 || max_height == 0 {
        return Err(ConfigError::ZeroBound {
            max_width,
            max_height,
        });
    }
    Ok(())
}

/// Decodes `bytes` and scales the image to fit within `max_width x max_height`.
pub fn decode_and_scale(
    registry: &FormatRegistry,
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
    filter: ResizeFilter,
) -> Result<Raster16, PreviewError> {
    check_bounds(max_width, max_height)?;
    let image = registry.decode(bytes)?;
    Ok(resize::scale_to_fit(
        image.into_rgba16(),
        max_width,
        max_height,
        filter,
    ))
}

/// Like [`load_and_scale`], with an explicit registry and resampling filter.
pub fn load_and_scale_with(
    registry: &FormatRegistry,
    path: impl AsRef<Path>,
    max_width: u32,
    max_height: u32,
    filter: ResizeFilter,
) -> Result<Raster16, PreviewError> {
    let path = path.as_ref();
    check_bounds(max_width, max_height)?;
    let bytes = std::fs::read(path).map_err(|source| PreviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_and_scale(registry, &bytes, max_width, max_height, filter)
}

/// Loads the image at `path` and scales it to fit within `max_width x max_height`
/// using the built-in formats and Lanczos3 resampling.
pub fn load_and_scale(
    path: impl AsRef<Path>,
    max_width: u32,
    max_height: u32,
) -> Result<Raster16, PreviewError> {
    load_and_scale_with(
        &FormatRegistry::with_defaults(),
        path,
        max_width,
        max_height,
        ResizeFilter::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_load_and_scale_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(1000, 500, Rgba([0, 128, 255, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let raster = load_and_scale(&path, 10, 10).unwrap();
        assert_eq!(raster.dimensions(), (10, 5));
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.gif");
        RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]))
            .save_with_format(&path, ImageFormat::Gif)
            .unwrap();

        let raster = load_and_scale(&path, 80, 48).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.get_pixel(0, 0).0, [0xffff, 0, 0, 0xffff]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        match load_and_scale(&path, 10, 10) {
            Err(PreviewError::Io { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "just some text").unwrap();
        assert!(matches!(
            load_and_scale(&path, 10, 10),
            Err(PreviewError::Decode(DecodeError::UnknownFormat))
        ));
    }

    #[test]
    fn test_zero_bounds_rejected() {
        assert!(matches!(
            decode_and_scale(&FormatRegistry::default(), &[], 0, 10, ResizeFilter::default()),
            Err(PreviewError::Config(ConfigError::ZeroBound { .. }))
        ));
        assert!(check_bounds(1, 1).is_ok());
    }
}
