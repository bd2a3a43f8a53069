//! Shared test utilities: synthetic cross-layout cubemaps.
//!
//! Every cell of the 4x3 grid gets its own flat color (see [`cell_color`]),
//! so a cropped face can be traced back to the cell it came from by sampling
//! its center pixel.
//!
//! ```text
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = tmp.path().join("cross.png");
//! write_cross(&path, 16, ImageFormat::Png); // 64x48 image
//! ```

use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Flat color of a grid cell. Distinct for all twelve cells.
pub fn cell_color(column: u32, row: u32) -> [u8; 3] {
    [(column * 60) as u8, (row * 100) as u8, 200]
}

/// Build a cross-layout image with `face_size` cells.
pub fn cross_image(face_size: u32) -> RgbImage {
    RgbImage::from_fn(face_size * 4, face_size * 3, |x, y| {
        Rgb(cell_color(x / face_size, y / face_size))
    })
}

/// Write a cross-layout image to `path` in the given format.
pub fn write_cross(path: &Path, face_size: u32, format: ImageFormat) {
    cross_image(face_size)
        .save_with_format(path, format)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

/// Write an arbitrary-size flat image, for aspect-ratio edge cases.
pub fn write_flat(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([90, 90, 90]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
