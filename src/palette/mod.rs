//! Tile palettes: quantized colors, pool indexing, nearest-color matching

/// Quantized RGB triples and averaging
pub mod color;
/// Pool directory scanning and the palette map
pub mod index;
/// Nearest-color lookup
pub mod matcher;

pub use color::Rgb;
pub use index::Palette;
