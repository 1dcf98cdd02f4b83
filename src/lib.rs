//! Photo-mosaic builder with face-aware tile sizing
//!
//! Rebuilds a target photograph from small thumbnail tiles chosen by nearest
//! quantized average color, stamping fine tiles over detected faces and
//! coarse tiles over the background.

#![forbid(unsafe_code)]

/// Face location backends and the detector trait
pub mod detect;
/// Input/output operations and error handling
pub mod io;
/// Tile palettes: colors, indexing, and matching
pub mod palette;
/// Mask construction and the tile placement sweeps
pub mod render;
/// Cell rectangles and grid partitioning
pub mod spatial;

pub use io::error::{MosaicError, Result};
