//! Obstacle regions stamped onto a [`GridMap`](crate::GridMap) during
//! construction.

use warren_core::Cell;

/// A region of cells to mark occupied.
///
/// Obstacles are construction-time data, not part of the query contract:
/// [`GridMap::place`](crate::GridMap::place) applies them in order, after
/// which the grid is read-only. Placement is an idempotent union —
/// overlapping regions and repeated placements leave cells blocked.
///
/// Region variants (`Disk`, `Rect`) are **clipped** against the grid:
/// cells of the region that fall outside the bounds are silently skipped.
/// Only the single-cell variant treats an out-of-bounds target as an
/// error, since a named cell outside the grid is a caller mistake rather
/// than a region overlapping the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstacle {
    /// A single blocked cell.
    ///
    /// Placement fails with [`MapError::OutOfRange`](crate::MapError) if
    /// the cell lies outside `[0, rows) × [0, cols)`.
    Cell {
        /// The cell to block.
        at: Cell,
    },
    /// A filled Euclidean disk: every in-bounds cell `(i, j)` with
    /// `(i - center.x)² + (j - center.y)² <= radius²`.
    Disk {
        /// Center cell; may itself be out of bounds (the region clips).
        center: Cell,
        /// Inclusive radius in cells.
        radius: u32,
    },
    /// A filled axis-aligned rectangle:
    /// `[center.x - half_width, center.x + half_width] ×
    /// [center.y - half_height, center.y + half_height]`.
    Rect {
        /// Center cell; may itself be out of bounds (the region clips).
        center: Cell,
        /// Half-extent along rows, inclusive.
        half_width: u32,
        /// Half-extent along columns, inclusive.
        half_height: u32,
    },
}

impl Obstacle {
    /// The inclusive `(x, y)` span a region variant iterates over, in
    /// widened `i64` coordinates so spans near the `i32` limits cannot
    /// overflow. The span is not yet clipped to any grid.
    pub(crate) fn span(&self) -> ((i64, i64), (i64, i64)) {
        match *self {
            Self::Cell { at } => {
                let (x, y) = (i64::from(at.x), i64::from(at.y));
                ((x, x), (y, y))
            }
            Self::Disk { center, radius } => {
                let (cx, cy) = (i64::from(center.x), i64::from(center.y));
                let r = i64::from(radius);
                ((cx - r, cx + r), (cy - r, cy + r))
            }
            Self::Rect {
                center,
                half_width,
                half_height,
            } => {
                let (cx, cy) = (i64::from(center.x), i64::from(center.y));
                let (hw, hh) = (i64::from(half_width), i64::from(half_height));
                ((cx - hw, cx + hw), (cy - hh, cy + hh))
            }
        }
    }

    /// Whether the span cell `(x, y)` belongs to the region.
    pub(crate) fn covers(&self, x: i64, y: i64) -> bool {
        match *self {
            Self::Cell { .. } | Self::Rect { .. } => true,
            Self::Disk { center, radius } => {
                let dx = x - i64::from(center.x);
                let dy = y - i64::from(center.y);
                let r = i64::from(radius);
                dx * dx + dy * dy <= r * r
            }
        }
    }
}
