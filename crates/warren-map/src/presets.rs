//! Ready-made demo environments.
//!
//! Two hand-authored 20×20 maps over the same extents: an office floor as
//! an occupancy grid, and a waypoint roadmap as a graph. They exercise
//! every construction helper and give consumers (search demos,
//! renderers, tests) something non-trivial to walk.

use crate::error::MapError;
use crate::graph::GraphMap;
use crate::grid::{Connectivity, GridMap};
use crate::obstacle::Obstacle;
use warren_core::{Cell, Waypoint};

/// Wall segment along the left side of the floor.
const WALL: [(i32, i32); 8] = [
    (14, 2),
    (14, 3),
    (14, 4),
    (15, 4),
    (16, 4),
    (17, 4),
    (18, 4),
    (19, 4),
];

/// A 20×20 office floor: the wall segment, two round tables and two
/// rectangular tables. 96 of the 400 cells are blocked.
pub fn office_floor(connectivity: Connectivity) -> Result<GridMap, MapError> {
    let mut grid = GridMap::new(20, 20, connectivity)?;
    for (x, y) in WALL {
        grid.place(Obstacle::Cell { at: Cell::new(x, y) })?;
    }
    grid.place(Obstacle::Disk {
        center: Cell::new(3, 16),
        radius: 2,
    })?;
    grid.place(Obstacle::Disk {
        center: Cell::new(10, 14),
        radius: 1,
    })?;
    grid.place(Obstacle::Rect {
        center: Cell::new(10, 9),
        half_width: 5,
        half_height: 2,
    })?;
    grid.place(Obstacle::Rect {
        center: Cell::new(15, 17),
        half_width: 1,
        half_height: 2,
    })?;
    Ok(grid)
}

/// A 20×20 roadmap of 36 waypoints joined by 52 undirected edges. The
/// roadmap is connected: every waypoint is reachable from every other.
pub fn office_waypoints() -> Result<GraphMap, MapError> {
    let nodes = vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(0.24, 1.36),
        Waypoint::new(2.80, 0.83),
        Waypoint::new(0.74, 4.45),
        Waypoint::new(3.07, 3.11),
        Waypoint::new(5.0, 5.0),
        Waypoint::new(10.0, 0.0),
        Waypoint::new(7.0, 0.9),
        Waypoint::new(9.33, 4.0),
        Waypoint::new(15.0, 6.0),
        Waypoint::new(13.0, 1.0),
        Waypoint::new(15.5, 2.8),
        Waypoint::new(18.0, 0.4),
        Waypoint::new(5.0, 13.0),
        Waypoint::new(5.8, 15.0),
        Waypoint::new(8.0, 12.0),
        Waypoint::new(2.0, 7.0),
        Waypoint::new(1.3, 9.0),
        Waypoint::new(3.8, 10.0),
        Waypoint::new(2.12, 11.47),
        Waypoint::new(0.66, 13.07),
        Waypoint::new(0.01, 15.8),
        Waypoint::new(0.5, 18.5),
        Waypoint::new(2.88, 18.97),
        Waypoint::new(7.86, 16.59),
        Waypoint::new(5.91, 17.94),
        Waypoint::new(11.32, 18.00),
        Waypoint::new(12.35, 15.02),
        Waypoint::new(11.81, 12.26),
        Waypoint::new(16.14, 12.85),
        Waypoint::new(18.5, 18.5),
        Waypoint::new(18.3, 5.07),
        Waypoint::new(18.65, 6.96),
        Waypoint::new(16.46, 9.89),
        Waypoint::new(18.25, 12.24),
        Waypoint::new(17.76, 15.46),
    ];
    const EDGES: [(usize, usize); 52] = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 4),
        (2, 7),
        (7, 6),
        (6, 10),
        (3, 4),
        (4, 7),
        (10, 12),
        (12, 11),
        (7, 8),
        (8, 10),
        (8, 9),
        (9, 31),
        (9, 32),
        (31, 32),
        (3, 5),
        (4, 5),
        (7, 5),
        (8, 5),
        (3, 16),
        (5, 16),
        (16, 17),
        (16, 18),
        (32, 33),
        (33, 34),
        (29, 33),
        (29, 34),
        (29, 35),
        (34, 35),
        (35, 30),
        (17, 19),
        (18, 19),
        (19, 20),
        (19, 13),
        (20, 21),
        (21, 22),
        (22, 23),
        (23, 25),
        (13, 14),
        (14, 25),
        (13, 15),
        (15, 28),
        (28, 29),
        (28, 27),
        (27, 26),
        (26, 24),
        (14, 24),
        (25, 24),
    ];
    GraphMap::from_edges(20, 20, nodes, &EDGES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SpatialMap;

    #[test]
    fn office_floor_blocks_96_cells() {
        let grid = office_floor(Connectivity::Hex).unwrap();
        let blocked = grid.occupancy_table().iter().filter(|&&b| b).count();
        assert_eq!(blocked, 96);
    }

    #[test]
    fn office_floor_spot_checks() {
        let grid = office_floor(Connectivity::Hex).unwrap();
        // Wall segment.
        assert_eq!(grid.occupancy(Cell::new(14, 2)), Some(true));
        assert_eq!(grid.occupancy(Cell::new(19, 4)), Some(true));
        // Round table centres and a rectangular table corner.
        assert_eq!(grid.occupancy(Cell::new(3, 16)), Some(true));
        assert_eq!(grid.occupancy(Cell::new(10, 14)), Some(true));
        assert_eq!(grid.occupancy(Cell::new(5, 7)), Some(true));
        // Open floor.
        assert_eq!(grid.occupancy(Cell::new(0, 0)), Some(false));
        assert_eq!(grid.occupancy(Cell::new(19, 19)), Some(false));
    }

    #[test]
    fn office_floor_respects_connectivity() {
        let hex = office_floor(Connectivity::Hex).unwrap();
        assert_eq!(hex.neighbours(&Cell::new(0, 10)).unwrap().len(), 4);
        let octile = office_floor(Connectivity::Octile).unwrap();
        assert_eq!(octile.neighbours(&Cell::new(0, 10)).unwrap().len(), 5);
    }

    #[test]
    fn office_waypoints_shape() {
        let graph = office_waypoints().unwrap();
        assert_eq!(graph.nodes().len(), 36);
        assert_eq!(graph.bounds(), (20, 20));
        assert!(graph.adjacency().is_symmetric());
    }

    #[test]
    fn office_waypoints_entrance_neighbours() {
        let graph = office_waypoints().unwrap();
        let n = graph.neighbours(&Waypoint::new(0.0, 0.0)).unwrap();
        assert_eq!(
            n.as_slice(),
            [Waypoint::new(0.24, 1.36), Waypoint::new(2.80, 0.83)]
        );
    }

    #[test]
    fn office_waypoints_junction_degree() {
        let graph = office_waypoints().unwrap();
        // Node 19 joins the two west corridors: edges to 13, 17, 18, 20.
        let n = graph.neighbours(&Waypoint::new(2.12, 11.47)).unwrap();
        assert_eq!(n.len(), 4);
    }
}
