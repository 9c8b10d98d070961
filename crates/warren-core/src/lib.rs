//! Position vocabulary for the warren map crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types exchanged across every interface in the workspace: integer
//! grid cells, real-valued graph waypoints, the coordinate-access trait
//! that unifies them, and the neighbour-list alias.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod position;

pub use position::{Cell, MapPosition, Neighbours, Waypoint};
