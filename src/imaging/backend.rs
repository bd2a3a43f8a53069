//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations face extraction
//! needs: open (decode a source image) and crop_and_save (cut one face out of
//! it and encode it to disk).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::CropParams;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to write {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A decoded source image, read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: DynamicImage,
    /// Format detected from the file content, if any.
    pub format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }
}

/// Trait for image backends.
///
/// The rest of the crate never touches pixels directly; everything goes
/// through these two calls so tests can substitute a recording mock.
pub trait ImageBackend {
    /// Decode an image from disk.
    fn open(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Crop `params.rect` out of `source` and write it to `params.output`.
    fn crop_and_save(&self, source: &SourceImage, params: &CropParams)
    -> Result<(), BackendError>;
}
