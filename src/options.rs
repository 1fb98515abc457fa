//! Preview configuration.
//!
//! [`PreviewOptions`] is `serde`-friendly so it can live inside a host
//! application's own config file:
//!
//! ```rust
//! use blockpeek::options::PreviewOptions;
//!
//! let options: PreviewOptions =
//!     serde_json::from_str(r##"{ "max_width": 40, "background": "#1e1e2e" }"##).unwrap();
//! assert_eq!(options.max_width, 40);
//! assert_eq!(options.max_height, PreviewOptions::default().max_height);
//! assert_eq!(options.background.rgb(), [0x1e, 0x1e, 0x2e]);
//! ```

use crate::error::ConfigError;
use crate::loading::check_bounds;
use crate::loading::resize::ResizeFilter;
use crate::rendering::color::BackgroundColor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Maximum width of the preview, in terminal columns.
    pub max_width: u32,
    /// Maximum height of the preview, in image rows. The text is half as many lines.
    pub max_height: u32,
    /// Color drawn in place of transparent pixels.
    pub background: BackgroundColor,
    pub filter: ResizeFilter,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_width: 80,
            max_height: 48,
            background: BackgroundColor([0, 0, 0]),
            filter: ResizeFilter::Lanczos3,
        }
    }
}

impl PreviewOptions {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            ..Self::default()
        }
    }

    pub fn with_background(self, background: impl Into<BackgroundColor>) -> Self {
        Self {
            background: background.into(),
            ..self
        }
    }

    pub fn with_filter(self, filter: ResizeFilter) -> Self {
        Self { filter, ..self }
    }

    /// Checks the options that can't be enforced by their types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds(self.max_width, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form() {
        let options = PreviewOptions::new(20, 10)
            .with_background([255, 0, 128])
            .with_filter(ResizeFilter::CatmullRom);
        let json = serde_json::to_value(options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "max_width": 20,
                "max_height": 10,
                "background": "#ff0080",
                "filter": "catmull-rom",
            })
        );
        let back: PreviewOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_bad_background_fails_to_deserialize() {
        let err = serde_json::from_str::<PreviewOptions>(r##"{ "background": "#zz0000" }"##)
            .unwrap_err();
        assert!(err.to_string().contains("non-hex"), "{err}");
    }

    #[test]
    fn test_validate() {
        assert!(PreviewOptions::default().validate().is_ok());
        assert_eq!(
            PreviewOptions::new(0, 5).validate(),
            Err(ConfigError::ZeroBound {
                max_width: 0,
                max_height: 5
            })
        );
    }
}
