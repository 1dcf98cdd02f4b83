//! Brute-force nearest-color lookup over palette keys

use crate::palette::color::Rgb;
use crate::palette::index::Palette;

/// Find the palette color closest to `target` in Euclidean RGB distance
///
/// Linear scan over all keys; the palette holds at most a few thousand
/// entries. Ties go to the first key encountered in palette order. Returns
/// `None` only when the palette is empty.
pub fn closest_color(target: &Rgb, palette: &Palette) -> Option<Rgb> {
    let mut best: Option<(Rgb, u32)> = None;

    for candidate in palette.colors() {
        let distance = candidate.distance_squared(target);
        let closer = best.is_none_or(|(_, best_distance)| distance < best_distance);
        if closer {
            best = Some((*candidate, distance));
            if distance == 0 {
                break;
            }
        }
    }

    best.map(|(color, _)| color)
}
