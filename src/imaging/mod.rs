//! Image handling for face extraction.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Crop** | `DynamicImage::crop_imm` |
//! | **Encode** | `image` codecs, format picked by name |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for face geometry (unit testable)
//! - **Parameters**: Data structures describing what to write
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Planning the six faces and writing one through a backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, SourceImage};
pub use calculations::{FaceRect, NonSquareFace, derive_face_size, face_rect, resolve_face_size};
pub use operations::{FaceConfig, FacePlan, plan_faces, write_face};
pub use params::{CropParams, DEFAULT_FORMAT, OutputFormat, Quality};
pub use rust_backend::RustBackend;
