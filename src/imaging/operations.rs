//! High-level face operations.
//!
//! These functions combine layout, calculations and backend execution.
//! Planning is pure; only [`write_face`] touches the backend.

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::calculations::face_rect;
use super::params::{CropParams, OutputFormat, Quality};
use crate::layout::{FACE_LAYOUT, Face, face_filename};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// One face to write: which face, under which filename, with which crop.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePlan {
    pub face: Face,
    /// Filename relative to the output directory, e.g. `scene_top.png`.
    pub filename: String,
    pub params: CropParams,
}

/// Settings shared by all six faces of a run.
#[derive(Debug, Clone)]
pub struct FaceConfig<'a> {
    pub output_dir: &'a Path,
    pub prefix: &'a str,
    pub face_size: u32,
    pub format: &'a OutputFormat,
    pub quality: Quality,
}

/// Plan all six faces in layout order without executing anything.
pub fn plan_faces(config: &FaceConfig<'_>) -> Vec<FacePlan> {
    FACE_LAYOUT
        .iter()
        .map(|&(face, cell)| {
            let filename = face_filename(config.prefix, face, config.format.extension());
            FacePlan {
                face,
                params: CropParams {
                    rect: face_rect(cell, config.face_size),
                    output: config.output_dir.join(&filename),
                    format: config.format.clone(),
                    quality: config.quality,
                },
                filename,
            }
        })
        .collect()
}

/// Crop and write a single planned face.
pub fn write_face(
    backend: &impl ImageBackend,
    source: &SourceImage,
    plan: &FacePlan,
) -> Result<()> {
    backend.crop_and_save(source, &plan.params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn config<'a>(format: &'a OutputFormat, prefix: &'a str, face_size: u32) -> FaceConfig<'a> {
        FaceConfig {
            output_dir: Path::new("/out"),
            prefix,
            face_size,
            format,
            quality: Quality::default(),
        }
    }

    #[test]
    fn plans_six_faces_in_layout_order() {
        let format = OutputFormat::from_name("png");
        let plans = plan_faces(&config(&format, "", 100));

        let names: Vec<&str> = plans.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "top.png",
                "left.png",
                "front.png",
                "right.png",
                "back.png",
                "bottom.png"
            ]
        );
    }

    #[test]
    fn plans_use_prefix_and_extension() {
        let format = OutputFormat::from_name("JPG");
        let plans = plan_faces(&config(&format, "scene_", 64));

        assert_eq!(plans[0].filename, "scene_top.jpg");
        assert_eq!(plans[0].params.output, Path::new("/out/scene_top.jpg"));
        assert!(plans.iter().all(|p| p.params.format.extension() == "jpg"));
    }

    #[test]
    fn plans_compute_rects() {
        let format = OutputFormat::from_name("png");
        let plans = plan_faces(&config(&format, "", 256));

        let rects: Vec<(u32, u32, u32)> = plans
            .iter()
            .map(|p| (p.params.rect.x, p.params.rect.y, p.params.rect.size))
            .collect();
        assert_eq!(
            rects,
            vec![
                (256, 0, 256),
                (0, 256, 256),
                (256, 256, 256),
                (512, 256, 256),
                (768, 256, 256),
                (256, 512, 256),
            ]
        );
    }

    #[test]
    fn write_face_uses_backend() {
        let backend = MockBackend::with_image(40, 30, None);
        let source = backend.open(Path::new("/cross.png")).unwrap();
        let format = OutputFormat::from_name("png");
        let plans = plan_faces(&config(&format, "", 10));

        write_face(&backend, &source, &plans[4]).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(
            &ops[1],
            RecordedOp::Crop { output, x: 30, y: 10, size: 10, .. } if output == "/out/back.png"
        ));
    }
}
