//! # cubemap-faces
//!
//! Splits a cubemap stored as a single 4x3 cross-layout image into six
//! square face images.
//!
//! ```text
//!         +------+
//!         | top  |
//! +-------+------+-------+------+
//! | left  |front | right | back |
//! +-------+------+-------+------+
//!         |bottom|
//!         +------+
//! ```
//!
//! # Pipeline
//!
//! One linear pass, no state kept between runs:
//!
//! ```text
//! decode → face size → output format → for each face: crop → write
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | The fixed face → grid cell table and output filename convention |
//! | [`imaging`] | Face geometry, the [`imaging::ImageBackend`] trait and its `image`-crate implementation |
//! | [`extract`] | The extraction run: input checks, size/format resolution, skip-or-write per face |
//! | [`config`] | Optional `cubemap-faces.toml` with defaults for the CLI flags |
//! | [`output`] | CLI output formatting for progress events and errors |
//!
//! # Design Decisions
//!
//! ## Face Size
//!
//! Without an explicit size, the face edge is `width / 4` and must equal
//! `height / 3` (floor division on both). A mismatch is rejected before any
//! file is written. An explicit size is trusted as given, which makes it
//! possible to pull faces out of images with padding or odd borders.
//!
//! ## Format Naming
//!
//! The output format name is used twice: lowercased as the file extension
//! and looked up as an encoder. `--format jpg` therefore writes `top.jpg`
//! while a JPEG source without `--format` writes `top.jpeg`.
//!
//! ## Backend Trait
//!
//! All pixel work goes through [`imaging::ImageBackend`]. Pipeline tests use a
//! recording mock and never decode an image.

pub mod config;
pub mod extract;
pub mod imaging;
pub mod layout;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
