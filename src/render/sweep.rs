//! Background and face grid sweeps
//!
//! The background sweep covers the whole image with coarse tiles, skipping
//! cells that lie entirely inside face rectangles. The face sweep then
//! covers each face's bounding box with finer tiles unconditionally, so face
//! tiles always win where the two grids overlap. Cells within one sweep
//! never overlap, so sweep order is the only ordering that matters.

use crate::detect::FaceRegion;
use crate::palette::index::Palette;
use crate::render::mask::{self, BackgroundMask};
use crate::render::placement::{self, PlacementOutcome};
use crate::spatial::{CellRect, grid};
use image::RgbImage;
use rand::rngs::StdRng;

/// Placement counters for one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Cells stamped with a tile
    pub placed: usize,
    /// Cells skipped because the palette had no colors
    pub no_match: usize,
    /// Cells skipped after every candidate failed to load
    pub exhausted: usize,
    /// Background cells skipped as fully face-covered
    pub masked: usize,
}

impl SweepStats {
    /// Cells for which placement was attempted
    pub const fn attempted(&self) -> usize {
        self.placed + self.no_match + self.exhausted
    }

    /// Fold another sweep's counters into this one
    pub const fn merge(&mut self, other: &Self) {
        self.placed += other.placed;
        self.no_match += other.no_match;
        self.exhausted += other.exhausted;
        self.masked += other.masked;
    }

    const fn record(&mut self, outcome: PlacementOutcome) {
        match outcome {
            PlacementOutcome::Placed => self.placed += 1,
            PlacementOutcome::NoMatch => self.no_match += 1,
            PlacementOutcome::CandidatesExhausted => self.exhausted += 1,
        }
    }
}

/// Sweep the full image with background tiles
///
/// Partitions the image by the background tile size and places a tile in
/// every cell that still contains at least one background pixel. Calls
/// `on_cell` once per visited cell for progress reporting.
#[allow(clippy::print_stderr)]
pub fn background_sweep(
    image: &mut RgbImage,
    background: &BackgroundMask,
    palette: &Palette,
    tile_size: u32,
    rng: &mut StdRng,
    mut on_cell: impl FnMut(),
) -> SweepStats {
    let full = CellRect::new(0, 0, image.width(), image.height());
    let mut stats = SweepStats::default();

    for cell in grid::partition(&full, tile_size, tile_size) {
        if mask::cell_touches_background(background, &cell) {
            let outcome = placement::place_tile(image, &cell, palette, rng);
            if outcome != PlacementOutcome::Placed {
                eprintln!(
                    "Failed to place tile at ({}, {}, {}, {})",
                    cell.y0, cell.y1, cell.x0, cell.x1
                );
            }
            stats.record(outcome);
        } else {
            stats.masked += 1;
        }
        on_cell();
    }

    stats
}

/// Sweep each detected face with fine tiles
///
/// Every cell inside a face's image-clamped bounding box is placed
/// unconditionally, overwriting whatever the background sweep left at the
/// face boundary.
pub fn face_sweep(
    image: &mut RgbImage,
    faces: &[FaceRegion],
    palette: &Palette,
    tile_size: u32,
    rng: &mut StdRng,
    mut on_cell: impl FnMut(),
) -> SweepStats {
    let mut stats = SweepStats::default();

    for face in faces {
        let rect = face.clamped_rect(image.width(), image.height());
        for cell in grid::partition(&rect, tile_size, tile_size) {
            let outcome = placement::place_tile(image, &cell, palette, rng);
            stats.record(outcome);
            on_cell();
        }
    }

    stats
}

/// Number of cells the two sweeps will visit, for progress bar sizing
pub fn total_cells(
    image_width: u32,
    image_height: u32,
    faces: &[FaceRegion],
    background_tile_size: u32,
    face_tile_size: u32,
) -> usize {
    let full = CellRect::new(0, 0, image_width, image_height);
    let mut total = grid::partition(&full, background_tile_size, background_tile_size).len();

    for face in faces {
        let rect = face.clamped_rect(image_width, image_height);
        total += grid::partition(&rect, face_tile_size, face_tile_size).len();
    }

    total
}
