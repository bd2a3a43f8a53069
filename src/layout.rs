//! The 4x3 cross layout and the output filename convention.
//!
//! A cross-layout cubemap packs the six cube faces into a grid of four
//! columns and three rows. Only six of the twelve cells are used:
//!
//! ```text
//!         col 0    col 1    col 2    col 3
//! row 0            top
//! row 1   left     front    right    back
//! row 2            bottom
//! ```
//!
//! [`FACE_LAYOUT`] is the single source of truth for both the cell positions
//! and the order faces are written in.

use std::fmt;

/// Number of columns in the cross layout.
pub const GRID_COLUMNS: u32 = 4;

/// Number of rows in the cross layout.
pub const GRID_ROWS: u32 = 3;

/// One of the six faces of a cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

impl Face {
    /// Lowercase name used in output filenames.
    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Left => "left",
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(column, row)` position in the 4x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

impl GridCell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Face positions in the cross, in write order.
pub const FACE_LAYOUT: [(Face, GridCell); 6] = [
    (Face::Top, GridCell::new(1, 0)),
    (Face::Left, GridCell::new(0, 1)),
    (Face::Front, GridCell::new(1, 1)),
    (Face::Right, GridCell::new(2, 1)),
    (Face::Back, GridCell::new(3, 1)),
    (Face::Bottom, GridCell::new(1, 2)),
];

/// Build the output filename for a face: `<prefix><face>.<extension>`.
///
/// The extension is lowercased; the prefix is used verbatim and may be empty.
///
/// ```
/// # use cubemap_faces::layout::{Face, face_filename};
/// assert_eq!(face_filename("scene_", Face::Top, "PNG"), "scene_top.png");
/// assert_eq!(face_filename("", Face::Back, "jpg"), "back.jpg");
/// ```
pub fn face_filename(prefix: &str, face: Face, extension: &str) -> String {
    format!("{}{}.{}", prefix, face.name(), extension.to_lowercase())
}
