//! Bounding-box scaling.

use crate::rendering::raster::Raster16;
use image::imageops;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// The resampling filter used when an image has to shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Computes the thumbnail dimensions of a `width x height` image inside a
/// `max_width x max_height` box.
///
/// Returns `None` when the image already fits, since images are never scaled up.
/// Otherwise the result fits both bounds, keeps the aspect ratio up to integer
/// rounding, and never collapses a side to zero.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<(u32, u32)> {
    if width <= max_width && height <= max_height {
        return None;
    }

    let (mut new_width, mut new_height) = (u64::from(width), u64::from(height));
    let (max_width, max_height) = (u64::from(max_width), u64::from(max_height));

    if new_width > max_width {
        new_height = (new_height * max_width / new_width).max(1);
        new_width = max_width;
    }
    if new_height > max_height {
        new_width = (new_width * max_height / new_height).max(1);
        new_height = max_height;
    }

    // both values are now bounded by the u32 inputs
    Some((new_width as u32, new_height as u32))
}

/// Shrinks `raster` to fit within the bounds, or returns it untouched if it already fits.
pub fn scale_to_fit(raster: Raster16, max_width: u32, max_height: u32, filter: ResizeFilter) -> Raster16 {
    let (width, height) = raster.dimensions();
    match fit_within(width, height, max_width, max_height) {
        None => {
            log::debug!("{width}x{height} fits within {max_width}x{max_height}, not scaling");
            raster
        }
        Some((new_width, new_height)) => {
            log::debug!("scaling {width}x{height} to {new_width}x{new_height} with {filter:?}");
            imageops::resize(&raster, new_width, new_height, filter.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_fit_within_wide() {
        assert_eq!(fit_within(1000, 500, 10, 10), Some((10, 5)));
        assert_eq!(fit_within(500, 1000, 10, 10), Some((5, 10)));
    }

    #[test]
    fn test_fit_within_height_constrains() {
        // width fits but height does not
        assert_eq!(fit_within(8, 40, 10, 10), Some((2, 10)));
        // both shrink steps apply
        assert_eq!(fit_within(100, 80, 20, 8), Some((10, 8)));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(10, 5, 10, 10), None);
        assert_eq!(fit_within(3, 3, 80, 48), None);
        assert_eq!(fit_within(0, 0, 1, 1), None);
    }

    #[test]
    fn test_fit_within_keeps_a_pixel() {
        assert_eq!(fit_within(1000, 1, 10, 10), Some((10, 1)));
        assert_eq!(fit_within(1, 1000, 10, 10), Some((1, 10)));
    }

    #[test]
    fn test_fit_within_respects_bounds() {
        for (w, h) in [(1920, 1080), (1080, 1920), (333, 777), (4000, 3), (17, 17)] {
            for (mw, mh) in [(80, 48), (10, 10), (1, 1), (200, 3)] {
                let (nw, nh) = fit_within(w, h, mw, mh).unwrap_or((w, h));
                assert!(nw <= mw && nh <= mh, "{w}x{h} in {mw}x{mh} gave {nw}x{nh}");
                assert!(nw >= 1 && nh >= 1);
            }
        }
    }

    #[cfg(feature = "clap")]
    #[test]
    fn test_filter_names_match_config() {
        use clap::ValueEnum;

        for filter in ResizeFilter::value_variants() {
            let name = filter.to_possible_value().unwrap().get_name().to_string();
            let from_config: ResizeFilter =
                serde_json::from_value(serde_json::Value::String(name.clone())).unwrap();
            assert_eq!(from_config, *filter, "{name}");
        }
    }

    #[test]
    fn test_scale_to_fit() {
        let raster = Raster16::from_pixel(1000, 500, Rgba([0xffff, 0, 0, 0xffff]));
        let scaled = scale_to_fit(raster, 10, 10, ResizeFilter::Lanczos3);
        assert_eq!(scaled.dimensions(), (10, 5));
        // a flat color stays flat through the filter
        assert_eq!(scaled.get_pixel(4, 2).0[0] >> 8, 0xff);

        let small = Raster16::from_pixel(4, 2, Rgba([1, 2, 3, 4]));
        let unchanged = scale_to_fit(small.clone(), 10, 10, ResizeFilter::default());
        assert_eq!(unchanged, small);
    }
}
