//! Explicit registry of the image formats the loader understands.
//!
//! Nothing is registered implicitly. [`FormatRegistry::with_defaults`] enumerates
//! the built-in set (GIF, JPEG, PNG), and callers can [`register`](FormatRegistry::register)
//! further decoders. Decoding sniffs the bytes against each registered format in
//! registration order and hands them to the first one that claims them.

use crate::error::DecodeError;
use image::{DynamicImage, ImageFormat};
use std::fmt;

/// A single image format: recognizes its own bytes and decodes them.
pub trait FormatDecoder: Send + Sync {
    /// Short lowercase name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Returns whether `bytes` look like this format.
    fn sniff(&self, bytes: &[u8]) -> bool;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError>;
}

/// A format decoded by the `image` crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinFormat {
    name: &'static str,
    format: ImageFormat,
}

impl BuiltinFormat {
    pub const GIF: Self = Self::new("gif", ImageFormat::Gif);
    pub const JPEG: Self = Self::new("jpeg", ImageFormat::Jpeg);
    pub const PNG: Self = Self::new("png", ImageFormat::Png);

    pub const fn new(name: &'static str, format: ImageFormat) -> Self {
        Self { name, format }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl FormatDecoder for BuiltinFormat {
    fn name(&self) -> &'static str {
        self.name
    }

    fn sniff(&self, bytes: &[u8]) -> bool {
        image::guess_format(bytes).is_ok_and(|format| format == self.format)
    }

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
        image::load_from_memory_with_format(bytes, self.format)
    }
}

/// The set of formats available for decoding.
pub struct FormatRegistry {
    decoders: Vec<Box<dyn FormatDecoder>>,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.formats()).finish()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FormatRegistry {
    /// Creates a registry without any formats.
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Creates a registry with the built-in formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(BuiltinFormat::GIF);
        registry.register(BuiltinFormat::JPEG);
        registry.register(BuiltinFormat::PNG);
        registry
    }

    /// Adds a decoder. Earlier registrations win when several claim the same bytes.
    pub fn register(&mut self, decoder: impl FormatDecoder + 'static) {
        self.decoders.push(Box::new(decoder));
    }

    /// Names of the registered formats, in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.iter().map(|decoder| decoder.name())
    }

    /// Finds the decoder that claims `bytes`.
    pub fn detect(&self, bytes: &[u8]) -> Option<&dyn FormatDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.sniff(bytes))
            .map(|decoder| decoder.as_ref())
    }

    /// Sniffs and decodes `bytes`.
    pub fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
        let decoder = self.detect(bytes).ok_or(DecodeError::UnknownFormat)?;
        log::debug!("decoding {} bytes as {}", bytes.len(), decoder.name());
        decoder
            .decode(bytes)
            .map_err(|source| DecodeError::Corrupt {
                format: decoder.name(),
                source,
            })
    }
}
