//! Occupancy-grid backend with a selectable neighbourhood rule.

use crate::error::MapError;
use crate::map::SpatialMap;
use crate::obstacle::Obstacle;
use warren_core::{Cell, Neighbours};

/// The six hex offsets: the 8 surrounding cells minus `(-1,-1)` and
/// `(1,1)`, enumerated in row-major scan order (`Δx` −1→1 outer, `Δy`
/// −1→1 inner). Identical to an axial hex neighbourhood embedded in the
/// square lattice.
const HEX_OFFSETS: [(i32, i32); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

/// All 8 surrounding offsets, same row-major scan order.
const OCTILE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbourhood rule of a [`GridMap`], chosen at construction.
///
/// ```
/// use warren_core::Cell;
/// use warren_map::{Connectivity, GridMap, SpatialMap};
///
/// // Hex drops the two positive-slope diagonals: 6 neighbours inside.
/// let hex = GridMap::new(4, 4, Connectivity::Hex).unwrap();
/// assert_eq!(hex.neighbours(&Cell::new(1, 1)).unwrap().len(), 6);
///
/// // Octile keeps all 8 surrounding cells.
/// let oct = GridMap::new(4, 4, Connectivity::Octile).unwrap();
/// assert_eq!(oct.neighbours(&Cell::new(1, 1)).unwrap().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Six neighbours: the surrounding cells minus the `(-1,-1)` and
    /// `(1,1)` diagonals — an axial hex lattice on square storage.
    Hex,
    /// Eight neighbours: cardinals plus all four diagonals.
    Octile,
}

impl Connectivity {
    /// The candidate offsets, in the deterministic enumeration order
    /// used by [`GridMap::neighbours`].
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Hex => &HEX_OFFSETS,
            Self::Octile => &OCTILE_OFFSETS,
        }
    }

    /// Number of neighbours of an interior cell on a free grid.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }
}

/// A discretized occupancy grid.
///
/// Owns a `rows × cols` table of boolean cells (`true` = blocked).
/// The table is written only through [`place`](Self::place) during the
/// setup phase; afterwards the map is read-only and safe for
/// unsynchronized concurrent reads.
///
/// # Examples
///
/// ```
/// use warren_core::Cell;
/// use warren_map::{Connectivity, GridMap, Obstacle, SpatialMap};
///
/// let mut grid = GridMap::new(20, 20, Connectivity::Hex).unwrap();
/// grid.place(Obstacle::Disk { center: Cell::new(3, 16), radius: 2 }).unwrap();
///
/// assert_eq!(grid.bounds(), (20, 20));
/// assert_eq!(grid.occupancy(Cell::new(3, 16)), Some(true));
///
/// // Corner cell: only the in-bounds hex offsets survive.
/// let n = grid.neighbours(&Cell::new(0, 0)).unwrap();
/// assert_eq!(n.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridMap {
    rows: u32,
    cols: u32,
    connectivity: Connectivity,
    occupied: Vec<bool>,
}

impl GridMap {
    /// Maximum extent per axis: cell coordinates use `i32`, so each axis
    /// must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with all cells free.
    ///
    /// Returns [`MapError::EmptyMap`] if either extent is 0, or
    /// [`MapError::DimensionTooLarge`] if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(rows: u32, cols: u32, connectivity: Connectivity) -> Result<Self, MapError> {
        if rows == 0 || cols == 0 {
            return Err(MapError::EmptyMap);
        }
        if rows > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            connectivity,
            occupied: vec![false; (rows as usize) * (cols as usize)],
        })
    }

    /// Create a grid and apply an ordered sequence of obstacles.
    pub fn with_obstacles(
        rows: u32,
        cols: u32,
        connectivity: Connectivity,
        obstacles: &[Obstacle],
    ) -> Result<Self, MapError> {
        let mut grid = Self::new(rows, cols, connectivity)?;
        for obstacle in obstacles {
            grid.place(*obstacle)?;
        }
        Ok(grid)
    }

    /// Mark the cells of `obstacle` occupied.
    ///
    /// Region variants clip against the grid bounds; re-placing an
    /// obstacle is a no-op (idempotent union). A single-cell placement
    /// outside the grid fails with [`MapError::OutOfRange`].
    pub fn place(&mut self, obstacle: Obstacle) -> Result<(), MapError> {
        if let Obstacle::Cell { at } = obstacle {
            if !self.contains(at) {
                return Err(MapError::OutOfRange {
                    cell: at,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            let idx = self.index(at.x, at.y);
            self.occupied[idx] = true;
            return Ok(());
        }
        let ((x_lo, x_hi), (y_lo, y_hi)) = obstacle.span();
        for x in x_lo..=x_hi {
            for y in y_lo..=y_hi {
                if obstacle.covers(x, y) {
                    self.stamp(x, y);
                }
            }
        }
        Ok(())
    }

    /// Neighbourhood rule selected at construction.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Occupancy of one cell: `Some(true)` if blocked, `Some(false)` if
    /// free, `None` if the cell is outside the grid.
    pub fn occupancy(&self, cell: Cell) -> Option<bool> {
        if self.contains(cell) {
            Some(self.occupied[self.index(cell.x, cell.y)])
        } else {
            None
        }
    }

    /// Read-only snapshot of the occupancy table, row-major
    /// (`index = x * cols + y`). Intended for rendering collaborators.
    pub fn occupancy_table(&self) -> &[bool] {
        &self.occupied
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.rows && (cell.y as u32) < self.cols
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (x as usize) * (self.cols as usize) + (y as usize)
    }

    /// Block `(x, y)` if it lies inside the grid; silently skip otherwise.
    fn stamp(&mut self, x: i64, y: i64) {
        if x >= 0 && x < i64::from(self.rows) && y >= 0 && y < i64::from(self.cols) {
            let idx = (x as usize) * (self.cols as usize) + (y as usize);
            self.occupied[idx] = true;
        }
    }
}

impl SpatialMap for GridMap {
    type Position = Cell;

    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    /// Candidates are the connectivity offsets around `p`; each survives
    /// iff it lands in bounds on a free cell. An out-of-bounds `p` yields
    /// an empty list (policy: the query itself is rejected early rather
    /// than leaking in-bounds cells adjacent to an invalid position).
    fn neighbours(&self, p: &Cell) -> Result<Neighbours<Cell>, MapError> {
        let mut out = Neighbours::new();
        if !self.contains(*p) {
            return Ok(out);
        }
        for &(dx, dy) in self.connectivity.offsets() {
            let nx = p.x + dx;
            let ny = p.y + dy;
            if nx < 0 || ny < 0 || nx as u32 >= self.rows || ny as u32 >= self.cols {
                continue;
            }
            if !self.occupied[self.index(nx, ny)] {
                out.push(Cell::new(nx, ny));
            }
        }
        Ok(out)
    }
}
