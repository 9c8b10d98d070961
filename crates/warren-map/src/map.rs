//! The core [`SpatialMap`] trait.

use crate::error::MapError;
use warren_core::{MapPosition, Neighbours};

/// Central abstraction over traversable space.
///
/// A search algorithm holds a `SpatialMap` and repeatedly calls
/// [`neighbours`](Self::neighbours); it knows nothing about grid geometry
/// or adjacency storage. The concrete backends —
/// [`GridMap`](crate::GridMap) and [`GraphMap`](crate::GraphMap) — are
/// alternatives selected at construction time and never call each other.
/// Dispatch goes through this trait, either generically or as
/// `dyn SpatialMap<Position = _>`.
///
/// # Contract
///
/// - Extents are strictly positive, fixed at construction, and never
///   change afterwards.
/// - `neighbours` returns only positions that are in bounds and reachable
///   in one step under the backend's connectivity rule, never the queried
///   position itself, in a deterministic backend-defined order (required
///   for reproducible search behaviour).
/// - Queries are pure, synchronous and bounded-time. Maps are immutable
///   once constructed, so shared references may be read from multiple
///   threads without synchronization.
pub trait SpatialMap {
    /// Position type exchanged across the contract.
    type Position: MapPosition;

    /// Number of rows (the extent along `x`).
    fn rows(&self) -> u32;

    /// Number of columns (the extent along `y`).
    fn cols(&self) -> u32;

    /// The fixed `(rows, cols)` extents.
    fn bounds(&self) -> (u32, u32) {
        (self.rows(), self.cols())
    }

    /// `true` iff `0 <= x < rows` and `0 <= y < cols`. Pure.
    fn in_bounds(&self, p: &Self::Position) -> bool {
        let (x, y) = p.coords();
        x >= 0.0 && x < f64::from(self.rows()) && y >= 0.0 && y < f64::from(self.cols())
    }

    /// Enumerate the positions legally reachable from `p` in one step.
    fn neighbours(&self, p: &Self::Position) -> Result<Neighbours<Self::Position>, MapError>;
}
