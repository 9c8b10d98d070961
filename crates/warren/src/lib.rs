//! Warren: spatial environments for pathfinding and search.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // A 10×10 grid with a round pillar in the middle.
//! let mut grid = GridMap::new(10, 10, Connectivity::Octile).unwrap();
//! grid.place(Obstacle::Disk { center: Cell::new(5, 5), radius: 1 }).unwrap();
//!
//! // Neighbour queries see only free, in-bounds cells.
//! let n = grid.neighbours(&Cell::new(3, 5)).unwrap();
//! assert!(n.iter().all(|c| grid.occupancy(*c) == Some(false)));
//! assert!(!n.contains(&Cell::new(4, 5)));
//!
//! // The same contract drives an explicit waypoint graph.
//! let roadmap = warren::map::presets::office_waypoints().unwrap();
//! let exits = roadmap.neighbours(&Waypoint::new(0.0, 0.0)).unwrap();
//! assert_eq!(exits.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Cell`, `Waypoint`, `MapPosition`, `Neighbours` |
//! | [`map`] | `warren-map` | `SpatialMap`, `GridMap`, `GraphMap`, obstacles, presets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Position vocabulary (`warren-core`).
///
/// The value types exchanged across every interface: [`types::Cell`],
/// [`types::Waypoint`], the [`types::MapPosition`] trait and the
/// [`types::Neighbours`] list alias.
pub use warren_core as types;

/// Map contract and backends (`warren-map`).
///
/// The [`map::SpatialMap`] trait with its two backends,
/// [`map::GridMap`] and [`map::GraphMap`], plus [`map::Obstacle`]
/// construction helpers and the [`map::presets`] demo environments.
pub use warren_map as map;

/// Common imports for typical warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use warren_core::{Cell, MapPosition, Neighbours, Waypoint};
    pub use warren_map::{
        AdjacencyMatrix, Connectivity, GraphMap, GridMap, MapError, Obstacle, SpatialMap,
    };
}
