//! Pure geometry for the cross layout.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::layout::{GRID_COLUMNS, GRID_ROWS, GridCell};

/// Pixel rectangle of one face inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl FaceRect {
    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.size)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.size)
    }
}

/// Face dimensions derived from an image whose cells are not square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonSquareFace {
    pub width: u32,
    pub height: u32,
}

/// Derive the face edge length from the full image dimensions.
///
/// Uses floor division: `width / 4` must equal `height / 3`.
///
/// # Examples
/// ```
/// # use cubemap_faces::imaging::derive_face_size;
/// assert_eq!(derive_face_size((4096, 3072)), Ok(1024));
/// // Leftover pixels are ignored by the floor division
/// assert_eq!(derive_face_size((4099, 3074)), Ok(1024));
/// assert!(derive_face_size((4096, 2048)).is_err());
/// ```
pub fn derive_face_size(dimensions: (u32, u32)) -> Result<u32, NonSquareFace> {
    let (width, height) = dimensions;
    let face_width = width / GRID_COLUMNS;
    let face_height = height / GRID_ROWS;

    if face_width != face_height {
        return Err(NonSquareFace {
            width: face_width,
            height: face_height,
        });
    }
    Ok(face_width)
}

/// Resolve the face size: an explicit override wins and skips validation,
/// otherwise it is derived from the image dimensions.
pub fn resolve_face_size(
    dimensions: (u32, u32),
    face_size_override: Option<u32>,
) -> Result<u32, NonSquareFace> {
    match face_size_override {
        Some(size) => Ok(size),
        None => derive_face_size(dimensions),
    }
}

/// Compute the pixel rectangle of a grid cell for a given face size.
pub fn face_rect(cell: GridCell, face_size: u32) -> FaceRect {
    FaceRect {
        x: cell.column.saturating_mul(face_size),
        y: cell.row.saturating_mul(face_size),
        size: face_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FACE_LAYOUT, Face};

    // =========================================================================
    // derive_face_size
    // =========================================================================

    #[test]
    fn derive_exact_cross() {
        assert_eq!(derive_face_size((400, 300)), Ok(100));
    }

    #[test]
    fn derive_floors_both_axes() {
        // 403 / 4 = 100, 302 / 3 = 100
        assert_eq!(derive_face_size((403, 302)), Ok(100));
    }

    #[test]
    fn derive_rejects_wide_image() {
        assert_eq!(
            derive_face_size((800, 300)),
            Err(NonSquareFace {
                width: 200,
                height: 100
            })
        );
    }

    #[test]
    fn derive_rejects_tall_image() {
        assert_eq!(
            derive_face_size((400, 600)),
            Err(NonSquareFace {
                width: 100,
                height: 200
            })
        );
    }

    #[test]
    fn derive_tiny_image_gives_zero() {
        // 3x2 floors to 0x0: square, but empty
        assert_eq!(derive_face_size((3, 2)), Ok(0));
    }

    // =========================================================================
    // resolve_face_size
    // =========================================================================

    #[test]
    fn override_skips_validation() {
        assert_eq!(resolve_face_size((800, 300), Some(64)), Ok(64));
    }

    #[test]
    fn no_override_derives() {
        assert_eq!(resolve_face_size((1024, 768), None), Ok(256));
    }

    #[test]
    fn no_override_propagates_mismatch() {
        assert!(resolve_face_size((1000, 1000), None).is_err());
    }

    // =========================================================================
    // face_rect
    // =========================================================================

    #[test]
    fn rect_for_front_face() {
        let rect = face_rect(GridCell::new(1, 1), 256);
        assert_eq!(rect, FaceRect { x: 256, y: 256, size: 256 });
        assert_eq!(rect.right(), 512);
        assert_eq!(rect.bottom(), 512);
    }

    #[test]
    fn rects_tile_the_image() {
        let size = 100;
        for (face, cell) in FACE_LAYOUT {
            let rect = face_rect(cell, size);
            assert!(rect.right() <= 400, "{face} exceeds width");
            assert!(rect.bottom() <= 300, "{face} exceeds height");
        }
    }

    #[test]
    fn rect_for_back_face_touches_right_edge() {
        let (_, cell) = FACE_LAYOUT
            .iter()
            .find(|(f, _)| *f == Face::Back)
            .copied()
            .unwrap();
        let rect = face_rect(cell, 128);
        assert_eq!(rect.x, 384);
        assert_eq!(rect.right(), 512);
    }

    #[test]
    fn rect_saturates_instead_of_overflowing() {
        let rect = face_rect(GridCell::new(3, 2), u32::MAX);
        assert_eq!(rect.x, u32::MAX);
        assert_eq!(rect.right(), u32::MAX);
    }
}
