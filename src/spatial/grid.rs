//! Rectangular cells and grid partitioning of image regions
//!
//! The mosaic is stamped cell by cell. A cell is a half-open pixel rectangle;
//! partitioning steps through a region by the nominal tile size and clips the
//! trailing row and column so every cell stays inside the region.

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)` within the target image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge (inclusive)
    pub x0: u32,
    /// Top edge (inclusive)
    pub y0: u32,
    /// Right edge (exclusive)
    pub x1: u32,
    /// Bottom edge (exclusive)
    pub y1: u32,
}

impl CellRect {
    /// Create a rectangle from its corner coordinates
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Whether this rectangle lies entirely inside `other`
    pub const fn contained_in(&self, other: &Self) -> bool {
        self.x0 >= other.x0 && self.x1 <= other.x1 && self.y0 >= other.y0 && self.y1 <= other.y1
    }
}

/// Partition a region into tile-sized cells, clipping at the far edges
///
/// Cells step by `tile_width` x `tile_height` starting at the region origin.
/// The union of the returned cells covers the region exactly once; cells in
/// the last row or column may be smaller than the nominal tile size. An empty
/// region yields no cells.
pub fn partition(region: &CellRect, tile_width: u32, tile_height: u32) -> Vec<CellRect> {
    let mut cells = Vec::new();
    if region.is_empty() || tile_width == 0 || tile_height == 0 {
        return cells;
    }

    let mut y = region.y0;
    while y < region.y1 {
        let y_end = (y + tile_height).min(region.y1);
        let mut x = region.x0;
        while x < region.x1 {
            let x_end = (x + tile_width).min(region.x1);
            cells.push(CellRect::new(x, y, x_end, y_end));
            x += tile_width;
        }
        y += tile_height;
    }

    cells
}
