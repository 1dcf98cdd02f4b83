//! Mosaic rendering: masks, per-cell placement, and grid sweeps

/// Background mask construction
pub mod mask;
/// Single-cell tile placement
pub mod placement;
/// Background and face grid sweeps
pub mod sweep;

pub use sweep::SweepStats;
