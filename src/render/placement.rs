//! Single-cell tile placement
//!
//! A cell is matched to its nearest palette color, that color's candidate
//! list is shuffled, and the first candidate that loads is resized to the
//! cell's exact dimensions and stamped over it. Every failure mode degrades
//! to leaving the cell's original pixels in place.

use crate::palette::color::{self, Rgb};
use crate::palette::index::Palette;
use crate::palette::matcher;
use crate::spatial::CellRect;
use image::RgbImage;
use image::imageops::FilterType;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Result of attempting to fill one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A candidate tile was stamped over the cell
    Placed,
    /// The palette was empty, no color to match against
    NoMatch,
    /// Every candidate for the matched color failed to load
    CandidatesExhausted,
}

/// Stamp the best-matching tile over one cell of the target image
///
/// The cell's average color is quantized before matching, mirroring the key
/// form candidates were indexed under. Candidates are tried in shuffled
/// order so a popular color does not always repeat the same tile image;
/// unreadable candidates fall through to the next one.
#[allow(clippy::print_stderr)]
pub fn place_tile(
    image: &mut RgbImage,
    cell: &CellRect,
    palette: &Palette,
    rng: &mut StdRng,
) -> PlacementOutcome {
    let Some(average) = color::region_average(image, cell) else {
        return PlacementOutcome::NoMatch;
    };

    let Some(closest) = matcher::closest_color(&average, palette) else {
        eprintln!("No matching color found for {}", average.key());
        return PlacementOutcome::NoMatch;
    };

    let mut candidates: Vec<&PathBuf> = palette
        .candidates(&closest)
        .map(|paths| paths.iter().collect())
        .unwrap_or_default();
    candidates.shuffle(rng);

    for candidate in candidates {
        let Ok(tile) = image::open(candidate) else {
            continue;
        };

        let resized = image::imageops::resize(
            &tile.to_rgb8(),
            cell.width(),
            cell.height(),
            FilterType::Triangle,
        );
        image::imageops::replace(image, &resized, i64::from(cell.x0), i64::from(cell.y0));
        return PlacementOutcome::Placed;
    }

    eprintln!("Failed to place tile for color {}", closest.key());
    PlacementOutcome::CandidatesExhausted
}

/// Convenience wrapper naming a matched color without placing anything
///
/// Used by diagnostics and tests to ask "what would this cell match?".
pub fn matched_color(image: &RgbImage, cell: &CellRect, palette: &Palette) -> Option<Rgb> {
    let average = color::region_average(image, cell)?;
    matcher::closest_color(&average, palette)
}
