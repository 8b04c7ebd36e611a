mod common;

use common::*;
use routegraph::errors::ValidationError;
use routegraph::store::GraphStore;
use routegraph::types::{GraphMode, UNREACHABLE};

#[test]
fn finds_the_cheapest_route_in_the_reference_graph() {
    // Candidate routes 1 -> 4: [1,2,4] = 9, [1,3,4] = 10, [1,2,3,4] = 13.
    let store = store_with_arcs(
        4,
        &[
            (1, 2, 4.0),
            (1, 3, 2.0),
            (2, 3, 1.0),
            (2, 4, 5.0),
            (3, 4, 8.0),
        ],
    );
    let route = store.shortest_path(1, 4).unwrap();
    assert_eq!(route.distance, 9.0);
    assert_eq!(route.path, vec![1, 2, 4]);
}

#[test]
fn repeated_queries_return_identical_results() {
    let store = store_with_arcs(
        4,
        &[
            (1, 2, 4.0),
            (1, 3, 2.0),
            (2, 3, 1.0),
            (2, 4, 5.0),
            (3, 4, 8.0),
        ],
    );
    let first = store.shortest_path(1, 4).unwrap();
    for _ in 0..5 {
        assert_eq!(store.shortest_path(1, 4).unwrap(), first);
    }
}

#[test]
fn equal_cost_frontier_ties_go_to_the_smallest_id() {
    // Diamond with two cost-2 routes; node 2 must win the tie against 3.
    let store = store_with_arcs(4, &[(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0), (3, 4, 1.0)]);
    let route = store.shortest_path(1, 4).unwrap();
    assert_eq!(route.distance, 2.0);
    assert_eq!(route.path, vec![1, 2, 4]);
}

#[test]
fn a_direct_but_heavier_edge_loses() {
    let store = store_with_arcs(3, &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);
    let route = store.shortest_path(1, 3).unwrap();
    assert_eq!(route.distance, 2.0);
    assert_eq!(route.path, vec![1, 2, 3]);
}

#[test]
fn unreachable_target_reports_the_sentinel_and_empty_path() {
    let store = store_with_arcs(4, &[(1, 2, 1.0)]);
    let route = store.shortest_path(1, 4).unwrap();
    assert!(!route.is_reachable());
    assert_eq!(route.distance, UNREACHABLE);
    assert!(route.path.is_empty());
}

#[test]
fn directed_arcs_are_not_traversable_backwards() {
    let store = store_with_arcs(2, &[(1, 2, 1.0)]);
    assert!(!store.shortest_path(2, 1).unwrap().is_reachable());
}

#[test]
fn undirected_edges_are_traversable_both_ways() {
    let mut store = GraphStore::new(3).unwrap();
    store.set_mode(GraphMode::Undirected);
    store.connect_nodes(1, 2, 2.0).unwrap();
    store.connect_nodes(2, 3, 2.0).unwrap();

    let route = store.shortest_path(3, 1).unwrap();
    assert_eq!(route.distance, 4.0);
    assert_eq!(route.path, vec![3, 2, 1]);
}

#[test]
fn start_equal_to_end_is_distance_zero() {
    let store = store_with_arcs(3, &[(1, 2, 1.0)]);
    let route = store.shortest_path(2, 2).unwrap();
    assert_eq!(route.distance, 0.0);
    assert_eq!(route.path, vec![2]);
}

#[test]
fn endpoints_outside_the_store_are_invalid_arguments() {
    let store = GraphStore::new(3).unwrap();
    for (start, end) in [(0, 2), (1, 9)] {
        let err = store.shortest_path(start, end).unwrap_err();
        assert!(matches!(err, ValidationError::NodeOutOfRange { .. }));
    }
}

#[test]
fn fractional_weights_accumulate_exactly_along_the_path() {
    let store = store_with_arcs(3, &[(1, 2, 0.5), (2, 3, 0.25)]);
    let route = store.shortest_path(1, 3).unwrap();
    assert_eq!(route.distance, 0.75);
    assert_eq!(route.path, vec![1, 2, 3]);
}

#[test]
fn longer_hop_count_wins_when_cheaper() {
    // Five cheap hops beat one expensive arc.
    let store = store_with_arcs(
        6,
        &[
            (1, 6, 10.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (5, 6, 1.0),
        ],
    );
    let route = store.shortest_path(1, 6).unwrap();
    assert_eq!(route.distance, 5.0);
    assert_eq!(route.path, vec![1, 2, 3, 4, 5, 6]);
}
