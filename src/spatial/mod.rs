//! Spatial primitives for cell-based mosaic rendering

/// Cell rectangles and region partitioning
pub mod grid;

pub use grid::CellRect;
