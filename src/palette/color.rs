//! Quantized RGB triples and average-color computation
//!
//! Palette keys are average colors with each channel rounded to the nearest
//! multiple of 10. Channels are `u16` because an average close to white
//! rounds up to 260. Keys serialize as `"(r, g, b)"` strings in the cache
//! file and are parsed back with an explicit validating parser.

use crate::spatial::CellRect;
use image::RgbImage;

/// Channel rounding step for palette keys
pub const QUANTIZATION_STEP: u16 = 10;

/// A quantized RGB color used as a palette key
///
/// Ordering is lexicographic by channel, which fixes the palette iteration
/// order and therefore the tie-breaking of nearest-color matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    /// Red channel (multiple of the quantization step)
    pub r: u16,
    /// Green channel (multiple of the quantization step)
    pub g: u16,
    /// Blue channel (multiple of the quantization step)
    pub b: u16,
}

impl Rgb {
    /// Create a color from raw channel values
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Round each channel to the nearest multiple of the quantization step
    pub const fn quantize(r: u16, g: u16, b: u16) -> Self {
        Self {
            r: round_to_step(r),
            g: round_to_step(g),
            b: round_to_step(b),
        }
    }

    /// Squared Euclidean distance to another color
    pub const fn distance_squared(&self, other: &Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Render the cache-file key form, `"(r, g, b)"`
    pub fn key(&self) -> String {
        format!("({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse the cache-file key form back into a color
    ///
    /// Accepts exactly three comma-separated decimal integers wrapped in
    /// parentheses. Returns `None` for anything else; keys are data, never
    /// evaluated.
    pub fn parse_key(key: &str) -> Option<Self> {
        let inner = key.trim().strip_prefix('(')?.strip_suffix(')')?;
        let mut channels = inner.split(',').map(|part| part.trim().parse::<u16>());

        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;

        channels.next().is_none().then_some(Self::new(r, g, b))
    }
}

const fn round_to_step(value: u16) -> u16 {
    let step = QUANTIZATION_STEP;
    ((value + step / 2) / step) * step
}

/// Quantized average color of an entire image
///
/// Returns `None` for a zero-pixel image.
pub fn average_color(image: &RgbImage) -> Option<Rgb> {
    let region = CellRect::new(0, 0, image.width(), image.height());
    region_average(image, &region)
}

/// Quantized average color of a rectangular region of an image
///
/// The rectangle must lie within the image bounds. Returns `None` when the
/// rectangle covers no pixels.
pub fn region_average(image: &RgbImage, region: &CellRect) -> Option<Rgb> {
    if region.is_empty() || region.x1 > image.width() || region.y1 > image.height() {
        return None;
    }

    let mut sums = [0u64; 3];
    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            let pixel = image.get_pixel(x, y);
            sums[0] += u64::from(pixel.0[0]);
            sums[1] += u64::from(pixel.0[1]);
            sums[2] += u64::from(pixel.0[2]);
        }
    }

    let count = region.area();
    let mean = |sum: u64| ((sum as f64 / count as f64).round()) as u16;
    Some(Rgb::quantize(mean(sums[0]), mean(sums[1]), mean(sums[2])))
}
