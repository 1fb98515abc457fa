use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while producing a preview.
///
/// No variant is ever accompanied by partial output: a preview is either
/// rendered completely or not at all.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unrecognized image format")]
    UnknownFormat,

    #[error("failed to decode {format} image: {source}")]
    Corrupt {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("background color {input:?} must be exactly 7 characters (#rrggbb)")]
    BackgroundLength { input: String },

    #[error("background color {input:?} must start with '#'")]
    BackgroundPrefix { input: String },

    #[error("background color {input:?} contains non-hex digits")]
    BackgroundDigits { input: String },

    #[error("preview bounds must be positive, got {max_width}x{max_height}")]
    ZeroBound { max_width: u32, max_height: u32 },
}
