//! Face extraction pipeline.
//!
//! Takes one cross-layout cubemap and writes its six faces as separate files.
//! The run is strictly linear:
//!
//! ```text
//! check input → decode → face size → output format → six faces (crop + write)
//! ```
//!
//! ## Face size
//!
//! An explicit face size is used as given. Otherwise it is derived as
//! `width / 4` and must equal `height / 3`; a mismatch aborts the run before
//! any file is written.
//!
//! ## Output format
//!
//! Override → format detected from the source content → `png`. The lowercase
//! name is used as the file extension, so `--format jpg` writes `top.jpg`.
//!
//! ## Existing files
//!
//! Without `force`, a face whose output file already exists is skipped and
//! reported; with `force` it is overwritten. Skips are not errors.
//!
//! ## Failures
//!
//! Any decode or encode failure aborts the run at that point. Faces written
//! before the failure stay on disk.

use crate::imaging::{
    BackendError, Dimensions, FaceConfig, ImageBackend, NonSquareFace, OutputFormat, Quality,
    RustBackend, plan_faces, resolve_face_size, write_face,
};
use crate::layout::Face;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input file {} does not exist.", .0.display())]
    InputNotFound(PathBuf),
    #[error("Calculated face dimensions are not square: {width}x{height}")]
    NonSquareFace { width: u32, height: u32 },
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

impl From<NonSquareFace> for ExtractError {
    fn from(face: NonSquareFace) -> Self {
        ExtractError::NonSquareFace {
            width: face.width,
            height: face.height,
        }
    }
}

/// Everything one extraction run needs.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub input: PathBuf,
    /// Directory output filenames resolve against.
    pub output_dir: PathBuf,
    /// Prepended to every output filename; may be empty.
    pub prefix: String,
    /// Explicit face edge length. Bypasses the aspect-ratio check.
    pub face_size: Option<u32>,
    /// Explicit output format name, e.g. `jpg`.
    pub format: Option<String>,
    /// Overwrite existing output files instead of skipping them.
    pub force: bool,
    pub quality: Quality,
}

impl ExtractRequest {
    /// Request with defaults: working directory, no prefix, auto size and format.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            face_size: None,
            format: None,
            force: false,
            quality: Quality::default(),
        }
    }
}

/// What happened to a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceStatus {
    Saved,
    /// Output existed and `force` was off.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceOutcome {
    pub face: Face,
    pub filename: String,
    pub status: FaceStatus,
}

/// Progress events, emitted as the run happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractEvent {
    /// Source decoded and face geometry resolved; nothing written yet.
    Resolved {
        input: PathBuf,
        dimensions: Dimensions,
        face_size: u32,
        format: OutputFormat,
    },
    Face(FaceOutcome),
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub dimensions: Dimensions,
    pub face_size: u32,
    pub format: OutputFormat,
    /// One entry per face, in layout order.
    pub faces: Vec<FaceOutcome>,
}

impl ExtractReport {
    pub fn saved(&self) -> usize {
        self.count(FaceStatus::Saved)
    }

    pub fn skipped(&self) -> usize {
        self.count(FaceStatus::Skipped)
    }

    fn count(&self, status: FaceStatus) -> usize {
        self.faces.iter().filter(|f| f.status == status).count()
    }
}

/// Extract the six faces of `request.input` using the `image` crate backend.
pub fn extract(
    request: &ExtractRequest,
    on_event: impl FnMut(&ExtractEvent),
) -> Result<ExtractReport, ExtractError> {
    extract_with_backend(&RustBackend::new(), request, on_event)
}

/// Extract faces using a specific backend (allows testing with mock).
pub fn extract_with_backend(
    backend: &impl ImageBackend,
    request: &ExtractRequest,
    mut on_event: impl FnMut(&ExtractEvent),
) -> Result<ExtractReport, ExtractError> {
    if !request.input.exists() {
        return Err(ExtractError::InputNotFound(request.input.clone()));
    }

    let source = backend.open(&request.input)?;
    let dimensions = source.dimensions();
    let face_size = resolve_face_size((dimensions.width, dimensions.height), request.face_size)?;
    let format = OutputFormat::resolve(request.format.as_deref(), source.format);

    on_event(&ExtractEvent::Resolved {
        input: request.input.clone(),
        dimensions,
        face_size,
        format: format.clone(),
    });

    let plans = plan_faces(&FaceConfig {
        output_dir: &request.output_dir,
        prefix: &request.prefix,
        face_size,
        format: &format,
        quality: request.quality,
    });

    let mut faces = Vec::with_capacity(plans.len());
    for plan in &plans {
        let status = if plan.params.output.exists() && !request.force {
            FaceStatus::Skipped
        } else {
            write_face(backend, &source, plan)?;
            FaceStatus::Saved
        };

        let outcome = FaceOutcome {
            face: plan.face,
            filename: plan.filename.clone(),
            status,
        };
        on_event(&ExtractEvent::Face(outcome.clone()));
        faces.push(outcome);
    }

    Ok(ExtractReport {
        dimensions,
        face_size,
        format,
        faces,
    })
}
