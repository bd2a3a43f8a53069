//! CLI output formatting.
//!
//! Formatting is pure: every function returns display lines and `main`
//! decides where they go. Progress lines go to stdout, fatal errors to stderr.
//!
//! # Output Format
//!
//! ```text
//! skybox.png (4096x3072) → 6 faces of 1024px as PNG
//! Saved top.png
//! Skipping left.png (exists, use --force to overwrite)
//! Saved front.png
//! ...
//! 5 saved, 1 skipped
//! ```

use crate::extract::{ExtractEvent, ExtractReport, FaceStatus};
use crate::layout::FACE_LAYOUT;

/// Format a single extraction event as display lines.
pub fn format_extract_event(event: &ExtractEvent) -> Vec<String> {
    match event {
        ExtractEvent::Resolved {
            input,
            dimensions,
            face_size,
            format,
        } => vec![format!(
            "{} ({}x{}) \u{2192} {} faces of {}px as {}",
            input.display(),
            dimensions.width,
            dimensions.height,
            FACE_LAYOUT.len(),
            face_size,
            format.encoder_name()
        )],
        ExtractEvent::Face(outcome) => match outcome.status {
            FaceStatus::Saved => vec![format!("Saved {}", outcome.filename)],
            FaceStatus::Skipped => vec![format!(
                "Skipping {} (exists, use --force to overwrite)",
                outcome.filename
            )],
        },
    }
}

/// One-line run summary.
pub fn format_summary(report: &ExtractReport) -> String {
    format!("{} saved, {} skipped", report.saved(), report.skipped())
}

/// Fatal error line for stderr.
pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("Error: {error}")
}
