//! `image`-crate backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Crop | `image::DynamicImage::crop_imm`, zero-padded to the full face by `imageops::replace` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with quality |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |
//! | Encode → everything else | `DynamicImage::save_with_format` |

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::calculations::FaceRect;
use super::params::CropParams;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader, imageops};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, detecting its format from content.
fn load_image(path: &Path) -> Result<SourceImage, BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let pixels = reader.decode().map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(SourceImage { pixels, format })
}

/// Convert to a pixel layout the target encoder accepts.
///
/// JPEG has no alpha channel and only 8-bit samples; WebP and AVIF take
/// 8-bit RGB(A) only. Everything else is written as decoded.
fn prepare_for_encoder(img: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = img.color();
    match format {
        ImageFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(img),
            c if !c.has_color() => Cow::Owned(DynamicImage::ImageLuma8(img.to_luma8())),
            _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        },
        ImageFormat::WebP | ImageFormat::Avif => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(img),
            c if c.has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
            _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        },
        _ => Cow::Borrowed(img),
    }
}

/// Cut a `rect.size` square out of `source`.
///
/// Parts of the square that fall outside the source stay zero (black, or
/// transparent for alpha formats), so the face is always `size`x`size`.
fn crop_face(source: &DynamicImage, rect: FaceRect) -> DynamicImage {
    let visible = source.crop_imm(rect.x, rect.y, rect.size, rect.size);
    if visible.width() == rect.size && visible.height() == rect.size {
        return visible;
    }

    let mut face = DynamicImage::new(rect.size, rect.size, source.color());
    imageops::replace(&mut face, &visible, 0, 0);
    face
}

/// Encode a face to `params.output` in the requested format.
fn save_face(img: &DynamicImage, params: &CropParams) -> Result<(), BackendError> {
    let format = params
        .format
        .image_format()
        .filter(|f| f.writing_enabled())
        .ok_or_else(|| BackendError::UnsupportedFormat(params.format.encoder_name()))?;

    let encode_error = |reason: String| BackendError::Encode {
        path: params.output.clone(),
        reason,
    };
    let img = prepare_for_encoder(img, format);
    let quality = u8::try_from(params.quality.value()).unwrap_or(100);

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(&params.output).map_err(|e| encode_error(e.to_string()))?;
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(BufWriter::new(file), quality);
            img.write_with_encoder(encoder)
                .map_err(|e| encode_error(e.to_string()))
        }
        ImageFormat::Avif => {
            let file = File::create(&params.output).map_err(|e| encode_error(e.to_string()))?;
            let encoder = image::codecs::avif::AvifEncoder::new_with_speed_quality(
                BufWriter::new(file),
                6,
                quality,
            );
            img.write_with_encoder(encoder)
                .map_err(|e| encode_error(e.to_string()))
        }
        other => img
            .save_with_format(&params.output, other)
            .map_err(|e| encode_error(e.to_string())),
    }
}

impl ImageBackend for RustBackend {
    fn open(&self, path: &Path) -> Result<SourceImage, BackendError> {
        load_image(path)
    }

    fn crop_and_save(
        &self,
        source: &SourceImage,
        params: &CropParams,
    ) -> Result<(), BackendError> {
        let face = crop_face(&source.pixels, params.rect);
        save_face(&face, params)
    }
}
