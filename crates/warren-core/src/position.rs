//! Position value types and the [`Neighbours`] list alias.
//!
//! Positions are immutable value objects with no identity beyond their
//! coordinates. [`Cell`] is the integer position used by occupancy grids;
//! [`Waypoint`] is the real-valued position used by waypoint graphs. Both
//! implement [`MapPosition`], which gives the map contract a single way to
//! read coordinates for bounds checking.

use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Neighbour list returned by spatial queries.
///
/// Up to 8 entries stay inline (covering both grid neighbourhoods);
/// graph nodes with higher degree spill to the heap transparently.
pub type Neighbours<P> = SmallVec<[P; 8]>;

/// Coordinate access shared by all position types.
///
/// Lets the map contract define bounds checking once: extents are
/// compared against `coords()` regardless of whether the underlying
/// representation is integral or real-valued.
pub trait MapPosition: Copy + PartialEq + fmt::Debug {
    /// The `(x, y)` coordinates as reals. `x` runs along rows, `y` along
    /// columns. Exact for integer positions (`i32` fits in an `f64`).
    fn coords(&self) -> (f64, f64);
}

/// An integer cell position on an occupancy grid.
///
/// `x` indexes rows and `y` indexes columns; valid cells lie in
/// `[0, rows) × [0, cols)`, but a `Cell` itself may hold any coordinates
/// (maps filter, they do not constrain construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl MapPosition for Cell {
    fn coords(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

/// A real-valued position, used as a named node in a waypoint graph.
///
/// Equality and hashing compare the raw IEEE-754 bit patterns
/// (`f64::to_bits`), so two waypoints are equal iff both coordinates are
/// written identically — exact, never tolerance-based. This keeps
/// [`Eq`]/[`Hash`] lawful and makes `Waypoint` usable as a lookup key:
/// `NaN == NaN`, while `0.0` and `-0.0` are distinct.
///
/// ```
/// use warren_core::Waypoint;
///
/// assert_eq!(Waypoint::new(0.24, 1.36), Waypoint::new(0.24, 1.36));
/// assert_ne!(Waypoint::new(0.0, 0.0), Waypoint::new(-0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Waypoint {
    /// Position along the row axis.
    pub x: f64,
    /// Position along the column axis.
    pub y: f64,
}

impl Waypoint {
    /// Create a waypoint at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Waypoint {}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl MapPosition for Waypoint {
    fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn cell_value_equality() {
        assert_eq!(Cell::new(3, 16), Cell::new(3, 16));
        assert_ne!(Cell::new(3, 16), Cell::new(16, 3));
    }

    #[test]
    fn cell_coords_are_exact() {
        assert_eq!(Cell::new(-2, 7).coords(), (-2.0, 7.0));
    }

    #[test]
    fn waypoint_equality_is_bitwise() {
        assert_eq!(Waypoint::new(2.80, 0.83), Waypoint::new(2.80, 0.83));
        assert_ne!(Waypoint::new(2.80, 0.83), Waypoint::new(2.80, 0.8300001));
        // Bitwise semantics: distinct zero signs differ, NaN is reflexive.
        assert_ne!(Waypoint::new(0.0, 0.0), Waypoint::new(-0.0, 0.0));
        assert_eq!(Waypoint::new(f64::NAN, 0.0), Waypoint::new(f64::NAN, 0.0));
    }

    #[test]
    fn waypoint_hash_agrees_with_equality() {
        let a = Waypoint::new(0.24, 1.36);
        let b = Waypoint::new(0.24, 1.36);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Cell::new(14, 2).to_string(), "(14, 2)");
        assert_eq!(Waypoint::new(18.5, 18.5).to_string(), "(18.5, 18.5)");
    }

    proptest! {
        #[test]
        fn waypoint_copies_stay_equal(x in any::<f64>(), y in any::<f64>()) {
            let a = Waypoint::new(x, y);
            let b = a;
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        #[test]
        fn cell_coords_roundtrip(x in any::<i32>(), y in any::<i32>()) {
            let (fx, fy) = Cell::new(x, y).coords();
            prop_assert_eq!(fx as i32, x);
            prop_assert_eq!(fy as i32, y);
        }
    }
}
