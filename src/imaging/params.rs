//! Parameter types for face extraction.
//!
//! These structs describe *what* to write, not *how* to write it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides which faces to write and where) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock) without
//! changing operation logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 75). Clamped on construction.
//! - [`OutputFormat`] — Format name used for the file extension and encoder lookup.
//! - [`CropParams`] — Full specification for one face: rectangle, output path, format, quality.

use super::calculations::FaceRect;
use image::ImageFormat;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
///
/// Only constructible through [`Quality::new`], so the value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Format used when neither an override nor a detected source format exists.
pub const DEFAULT_FORMAT: &str = "png";

/// Output encoding shared by all six faces.
///
/// Stores the lowercase format name. The name doubles as the file extension,
/// so `jpg` stays `jpg` and `jpeg` stays `jpeg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    name: String,
}

impl OutputFormat {
    /// Use a user-supplied format name verbatim (case-normalized).
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
        }
    }

    /// Name a format detected from the source image's content.
    pub fn from_detected(format: ImageFormat) -> Self {
        let name = match format {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Tiff => "tiff",
            ImageFormat::WebP => "webp",
            ImageFormat::Avif => "avif",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            other => other.extensions_str().first().copied().unwrap_or(DEFAULT_FORMAT),
        };
        Self::from_name(name)
    }

    /// Resolve the output format: override → detected source format → default.
    pub fn resolve(format_override: Option<&str>, detected: Option<ImageFormat>) -> Self {
        match (format_override, detected) {
            (Some(name), _) => Self::from_name(name),
            (None, Some(format)) => Self::from_detected(format),
            (None, None) => Self::from_name(DEFAULT_FORMAT),
        }
    }

    /// Lowercase file extension.
    pub fn extension(&self) -> &str {
        &self.name
    }

    /// Uppercase name as shown to the user, e.g. `JPG`.
    pub fn encoder_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// The `image` encoder for this name, if one exists.
    pub fn image_format(&self) -> Option<ImageFormat> {
        ImageFormat::from_extension(&self.name)
    }
}

/// Parameters for cropping one face and writing it to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub rect: FaceRect,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub quality: Quality,
}
