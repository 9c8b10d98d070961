//! SpatialMap contract compliance helpers.
//!
//! These assertions verify that a backend satisfies the invariants
//! required by the [`SpatialMap`] contract. Reused across backend test
//! modules (GridMap, GraphMap). `probes` must be positions on which the
//! backend defines `neighbours` — the free cells of a grid, or the node
//! sequence of a graph.

use crate::map::SpatialMap;
use indexmap::IndexSet;
use std::hash::Hash;

/// Assert that every neighbour of every probe lies within bounds.
pub(crate) fn assert_neighbours_in_bounds<M: SpatialMap>(map: &M, probes: &[M::Position]) {
    for p in probes {
        for n in map.neighbours(p).expect("probe should be queryable") {
            assert!(
                map.in_bounds(&n),
                "neighbour {n:?} of {p:?} is out of bounds"
            );
        }
    }
}

/// Assert that no position is its own neighbour.
pub(crate) fn assert_neighbours_exclude_self<M: SpatialMap>(map: &M, probes: &[M::Position]) {
    for p in probes {
        let n = map.neighbours(p).expect("probe should be queryable");
        assert!(!n.contains(p), "{p:?} returned itself as a neighbour");
    }
}

/// Assert that repeated queries return identical sequences.
pub(crate) fn assert_neighbours_deterministic<M: SpatialMap>(map: &M, probes: &[M::Position]) {
    for p in probes {
        let first = map.neighbours(p).expect("probe should be queryable");
        let second = map.neighbours(p).expect("probe should be queryable");
        assert_eq!(first, second, "neighbours of {p:?} are non-deterministic");
    }
}

/// Assert that no neighbour list contains duplicates.
pub(crate) fn assert_neighbours_unique<M>(map: &M, probes: &[M::Position])
where
    M: SpatialMap,
    M::Position: Eq + Hash,
{
    for p in probes {
        let n = map.neighbours(p).expect("probe should be queryable");
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(
            unique.len(),
            n.len(),
            "neighbours of {p:?} contain duplicates"
        );
    }
}

/// Assert that `q in neighbours(p)` implies `p in neighbours(q)` over the
/// probe set.
pub(crate) fn assert_neighbours_symmetric<M: SpatialMap>(map: &M, probes: &[M::Position]) {
    for p in probes {
        for q in map.neighbours(p).expect("probe should be queryable") {
            let back = map.neighbours(&q).expect("neighbour should be queryable");
            assert!(
                back.contains(p),
                "neighbour symmetry violated: {q:?} in N({p:?}) but {p:?} not in N({q:?})"
            );
        }
    }
}

/// Run all five compliance checks.
pub(crate) fn run_full_compliance<M>(map: &M, probes: &[M::Position])
where
    M: SpatialMap,
    M::Position: Eq + Hash,
{
    assert_neighbours_in_bounds(map, probes);
    assert_neighbours_exclude_self(map, probes);
    assert_neighbours_deterministic(map, probes);
    assert_neighbours_unique(map, probes);
    assert_neighbours_symmetric(map, probes);
}
