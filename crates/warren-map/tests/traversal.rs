//! Integration tests driving both backends through the `SpatialMap`
//! contract only, the way a search algorithm would: a generic flood fill
//! that knows nothing about grid geometry or adjacency storage.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use warren_core::{Cell, Waypoint};
use warren_map::{presets, Connectivity, SpatialMap};

/// Breadth-first flood fill over any map, in deterministic visit order.
fn reachable<M>(map: &M, start: M::Position) -> Vec<M::Position>
where
    M: SpatialMap,
    M::Position: Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        order.push(p);
        for n in map.neighbours(&p).expect("frontier positions are queryable") {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    order
}

#[test]
fn office_floor_flood_covers_exactly_the_free_region() {
    for connectivity in [Connectivity::Hex, Connectivity::Octile] {
        let grid = presets::office_floor(connectivity).unwrap();
        let visited = reachable(&grid, Cell::new(0, 0));
        // 400 cells minus the 96 blocked ones, all reachable from the corner.
        assert_eq!(visited.len(), 304);
        for cell in &visited {
            assert_eq!(grid.occupancy(*cell), Some(false));
        }
    }
}

#[test]
fn office_floor_flood_is_reproducible() {
    let grid = presets::office_floor(Connectivity::Hex).unwrap();
    let first = reachable(&grid, Cell::new(0, 0));
    let second = reachable(&grid, Cell::new(0, 0));
    assert_eq!(first, second);
}

#[test]
fn flood_seeded_on_a_wall_cell_spills_into_free_space_only() {
    let grid = presets::office_floor(Connectivity::Octile).unwrap();
    // A blocked cell still enumerates its free surroundings; the flood
    // then continues through free space only, so it covers the seed plus
    // the whole free region.
    assert_eq!(grid.occupancy(Cell::new(14, 2)), Some(true));
    let visited = reachable(&grid, Cell::new(14, 2));
    assert_eq!(visited.len(), 305);
    for cell in visited.iter().skip(1) {
        assert_eq!(grid.occupancy(*cell), Some(false));
    }
}

#[test]
fn flood_from_the_heart_of_a_table_goes_nowhere() {
    let grid = presets::office_floor(Connectivity::Octile).unwrap();
    // Every cell adjacent to the round table's centre is itself blocked.
    let visited = reachable(&grid, Cell::new(3, 16));
    assert_eq!(visited, vec![Cell::new(3, 16)]);
}

#[test]
fn waypoint_roadmap_is_fully_connected() {
    let graph = presets::office_waypoints().unwrap();
    let visited = reachable(&graph, Waypoint::new(0.0, 0.0));
    assert_eq!(visited.len(), graph.nodes().len());
    assert!(visited.contains(&Waypoint::new(18.5, 18.5)));
}

#[test]
fn waypoint_flood_is_reproducible() {
    let graph = presets::office_waypoints().unwrap();
    let first = reachable(&graph, Waypoint::new(0.0, 0.0));
    let second = reachable(&graph, Waypoint::new(0.0, 0.0));
    assert_eq!(first, second);
}
