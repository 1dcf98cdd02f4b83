//! Background mask construction from face rectangles

use crate::detect::FaceRegion;
use crate::spatial::CellRect;
use ndarray::Array2;

/// Per-pixel background mask, `true` where no face was detected
///
/// Indexed `[row, col]`, matching image `(y, x)`.
pub type BackgroundMask = Array2<bool>;

/// Build the background mask for an image and its detected faces
///
/// Every pixel starts as background; pixels inside any face rectangle
/// (clamped to the image bounds) are cleared.
pub fn background_mask(width: u32, height: u32, faces: &[FaceRegion]) -> BackgroundMask {
    let mut mask = Array2::from_elem((height as usize, width as usize), true);

    for face in faces {
        let rect = face.clamped_rect(width, height);
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                if let Some(value) = mask.get_mut((y as usize, x as usize)) {
                    *value = false;
                }
            }
        }
    }

    mask
}

/// Whether any pixel of a cell is marked as background
///
/// Background cells fully inside a face rectangle return `false`; those are
/// left for the finer face sweep.
pub fn cell_touches_background(mask: &BackgroundMask, cell: &CellRect) -> bool {
    for y in cell.y0..cell.y1 {
        for x in cell.x0..cell.x1 {
            if mask.get((y as usize, x as usize)).copied().unwrap_or(false) {
                return true;
            }
        }
    }
    false
}
