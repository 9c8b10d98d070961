//! Explicit node/edge backend over named waypoints.

use crate::error::MapError;
use crate::map::SpatialMap;
use indexmap::IndexMap;
use warren_core::{Neighbours, Waypoint};

/// A square boolean adjacency matrix with a symmetry invariant.
///
/// Entry `(i, j)` marks whether nodes `i` and `j` are directly connected.
/// Every constructor produces a symmetric matrix: [`new`](Self::new)
/// starts empty, [`from_edges`](Self::from_edges) and [`set`](Self::set)
/// write both directions, and [`from_rows`](Self::from_rows) repairs
/// asymmetric input by OR-ing `(i, j)` into `(j, i)`. The diagonal is
/// storable but never consulted by neighbour queries.
///
/// Storage is row-major `Vec<bool>` (`index = i * order + j`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    bits: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create an `order × order` matrix with no connections.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            bits: vec![false; order * order],
        }
    }

    /// Build a matrix from undirected edges.
    ///
    /// Each `(a, b)` connects both directions. Returns
    /// [`MapError::EdgeOutOfRange`] if an endpoint is not below `order`.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self, MapError> {
        let mut matrix = Self::new(order);
        for &(a, b) in edges {
            matrix.set(a, b)?;
        }
        Ok(matrix)
    }

    /// Build a matrix from raw boolean rows.
    ///
    /// Returns [`MapError::ShapeMismatch`] if any row's length differs
    /// from the row count. Asymmetric input is accepted and repaired:
    /// `(i, j)` is OR-ed into `(j, i)`.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MapError> {
        let order = rows.len();
        let mut bits = Vec::with_capacity(order * order);
        for row in &rows {
            if row.len() != order {
                return Err(MapError::ShapeMismatch {
                    expected: order,
                    found: row.len(),
                });
            }
            bits.extend_from_slice(row);
        }
        let mut matrix = Self { order, bits };
        matrix.symmetrize();
        Ok(matrix)
    }

    /// Number of rows (equals the number of columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Whether nodes `i` and `j` are connected.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`order`](Self::order).
    pub fn get(&self, i: usize, j: usize) -> bool {
        assert!(i < self.order && j < self.order, "index exceeds matrix order");
        self.bits[i * self.order + j]
    }

    /// Connect nodes `i` and `j` (both directions).
    ///
    /// Returns [`MapError::EdgeOutOfRange`] if an index is not below
    /// [`order`](Self::order).
    pub fn set(&mut self, i: usize, j: usize) -> Result<(), MapError> {
        if i >= self.order || j >= self.order {
            return Err(MapError::EdgeOutOfRange {
                a: i,
                b: j,
                order: self.order,
            });
        }
        self.bits[i * self.order + j] = true;
        self.bits[j * self.order + i] = true;
        Ok(())
    }

    /// Whether `get(i, j) == get(j, i)` for all pairs. Holds by
    /// construction; exposed so tests and consumers can verify it.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.order {
            for j in (i + 1)..self.order {
                if self.bits[i * self.order + j] != self.bits[j * self.order + i] {
                    return false;
                }
            }
        }
        true
    }

    fn symmetrize(&mut self) {
        for i in 0..self.order {
            for j in (i + 1)..self.order {
                let forward = self.bits[i * self.order + j];
                let backward = self.bits[j * self.order + i];
                let connected = forward || backward;
                self.bits[i * self.order + j] = connected;
                self.bits[j * self.order + i] = connected;
            }
        }
    }
}

/// An explicit set of named positions with a precomputed adjacency
/// relation.
///
/// The bounding extents `(rows, cols)` feed [`bounds`](SpatialMap::bounds)
/// and [`in_bounds`](SpatialMap::in_bounds) for consumers that want a
/// viewport; waypoints are not validated against them, and adjacency
/// ignores them entirely. Node identity is value equality of
/// [`Waypoint`]s; the waypoint→index lookup is built once at
/// construction, so queries cost one hash lookup instead of a scan.
///
/// # Examples
///
/// ```
/// use warren_core::Waypoint;
/// use warren_map::{GraphMap, SpatialMap};
///
/// let nodes = vec![
///     Waypoint::new(0.0, 0.0),
///     Waypoint::new(0.24, 1.36),
///     Waypoint::new(2.80, 0.83),
/// ];
/// let graph = GraphMap::from_edges(20, 20, nodes, &[(0, 1), (1, 2), (0, 2)]).unwrap();
///
/// let n = graph.neighbours(&Waypoint::new(0.0, 0.0)).unwrap();
/// assert_eq!(n.as_slice(), [Waypoint::new(0.24, 1.36), Waypoint::new(2.80, 0.83)]);
/// ```
#[derive(Debug, Clone)]
pub struct GraphMap {
    rows: u32,
    cols: u32,
    nodes: Vec<Waypoint>,
    lookup: IndexMap<Waypoint, usize>,
    adjacency: AdjacencyMatrix,
}

impl GraphMap {
    /// Create a graph map from a node sequence and an adjacency matrix.
    ///
    /// Returns [`MapError::EmptyMap`] on a zero extent,
    /// [`MapError::ShapeMismatch`] if `adjacency.order() != nodes.len()`,
    /// and [`MapError::DuplicateNode`] if two nodes compare equal.
    pub fn new(
        rows: u32,
        cols: u32,
        nodes: Vec<Waypoint>,
        adjacency: AdjacencyMatrix,
    ) -> Result<Self, MapError> {
        if rows == 0 || cols == 0 {
            return Err(MapError::EmptyMap);
        }
        if adjacency.order() != nodes.len() {
            return Err(MapError::ShapeMismatch {
                expected: nodes.len(),
                found: adjacency.order(),
            });
        }
        let mut lookup = IndexMap::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            if lookup.insert(node, i).is_some() {
                return Err(MapError::DuplicateNode { node });
            }
        }
        Ok(Self {
            rows,
            cols,
            nodes,
            lookup,
            adjacency,
        })
    }

    /// Create a graph map directly from undirected edges.
    pub fn from_edges(
        rows: u32,
        cols: u32,
        nodes: Vec<Waypoint>,
        edges: &[(usize, usize)],
    ) -> Result<Self, MapError> {
        let adjacency = AdjacencyMatrix::from_edges(nodes.len(), edges)?;
        Self::new(rows, cols, nodes, adjacency)
    }

    /// The node sequence, in construction order.
    pub fn nodes(&self) -> &[Waypoint] {
        &self.nodes
    }

    /// Read-only view of the adjacency matrix. Intended for rendering
    /// collaborators.
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Index of `node` in the node sequence, if present.
    pub fn node_index(&self, node: &Waypoint) -> Option<usize> {
        self.lookup.get(node).copied()
    }
}

impl SpatialMap for GraphMap {
    type Position = Waypoint;

    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    /// Every node connected to `p`, in ascending node-index order.
    ///
    /// The diagonal is skipped, so a self-loop in the matrix never makes
    /// a position its own neighbour. Fails with
    /// [`MapError::UnknownNode`] if `p` is absent from the node sequence.
    fn neighbours(&self, p: &Waypoint) -> Result<Neighbours<Waypoint>, MapError> {
        let i = self
            .node_index(p)
            .ok_or(MapError::UnknownNode { node: *p })?;
        let mut out = Neighbours::new();
        for j in 0..self.adjacency.order() {
            if j != i && self.adjacency.get(i, j) {
                out.push(self.nodes[j]);
            }
        }
        Ok(out)
    }
}
