//! Error types for map construction and spatial queries.

use std::fmt;
use warren_core::{Cell, Waypoint};

/// Errors arising from map construction or spatial queries.
///
/// Every variant is an immediate precondition violation reported to the
/// caller. The crate performs no I/O and has no transient-failure class,
/// so nothing is retried internally and there is no recovery path: supply
/// valid inputs or handle the reported kind. Region clipping during
/// obstacle placement is a policy, not an error (see
/// [`Obstacle`](crate::Obstacle)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Attempted to construct a map with a zero extent.
    EmptyMap,
    /// A grid extent exceeds what `i32` cell coordinates can address.
    DimensionTooLarge {
        /// Which extent ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// Maximum representable extent.
        max: u32,
    },
    /// An obstacle cell placement targeted a cell outside the grid.
    OutOfRange {
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// An adjacency matrix's dimensions do not match the node count, or a
    /// raw matrix is not square.
    ShapeMismatch {
        /// The dimension required.
        expected: usize,
        /// The dimension found.
        found: usize,
    },
    /// An edge endpoint is not a valid node index.
    EdgeOutOfRange {
        /// First endpoint.
        a: usize,
        /// Second endpoint.
        b: usize,
        /// Matrix order.
        order: usize,
    },
    /// Two nodes of a graph compare equal, making value-equality lookup
    /// ambiguous.
    DuplicateNode {
        /// The repeated waypoint.
        node: Waypoint,
    },
    /// A neighbour query named a waypoint absent from the node sequence.
    UnknownNode {
        /// The queried waypoint.
        node: Waypoint,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map extents must be positive"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum extent {max}")
            }
            Self::OutOfRange { cell, rows, cols } => {
                write!(f, "cell {cell} is outside the grid [0, {rows}) x [0, {cols})")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "adjacency shape mismatch: expected {expected}, found {found}")
            }
            Self::EdgeOutOfRange { a, b, order } => {
                write!(f, "edge ({a}, {b}) references a node index outside 0..{order}")
            }
            Self::DuplicateNode { node } => {
                write!(f, "node {node} appears more than once in the node sequence")
            }
            Self::UnknownNode { node } => {
                write!(f, "node {node} is not part of this map")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = MapError::OutOfRange {
            cell: Cell::new(20, 3),
            rows: 20,
            cols: 20,
        };
        assert_eq!(
            err.to_string(),
            "cell (20, 3) is outside the grid [0, 20) x [0, 20)"
        );
    }

    #[test]
    fn display_unknown_node() {
        let err = MapError::UnknownNode {
            node: Waypoint::new(1.5, 2.0),
        };
        assert_eq!(err.to_string(), "node (1.5, 2) is not part of this map");
    }
}
