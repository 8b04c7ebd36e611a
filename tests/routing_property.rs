use proptest::prelude::*;

use routegraph::store::GraphStore;
use routegraph::types::{GraphMode, NodeId, UNREACHABLE};

const MAX_NODES: usize = 12;

// Arbitrary arc lists over a small id range; duplicates and self-loops are
// dropped at insertion the way any caller-driven session would drop them.
fn arcs_strategy() -> impl Strategy<Value = Vec<(NodeId, NodeId, f64)>> {
    prop::collection::vec(
        (1..=MAX_NODES, 1..=MAX_NODES, 0.1f64..10.0),
        0..40,
    )
}

fn store_from(arcs: &[(NodeId, NodeId, f64)], mode: GraphMode) -> GraphStore {
    let mut store = GraphStore::new(MAX_NODES).expect("positive capacity");
    store.set_mode(mode);
    for &(from, to, weight) in arcs {
        // Self-loops and duplicates are rejected; that is part of the contract.
        let _ = store.connect_nodes(from, to, weight);
    }
    store
}

proptest! {
    #[test]
    fn prop_repeated_queries_are_identical(
        arcs in arcs_strategy(),
        start in 1..=MAX_NODES,
        end in 1..=MAX_NODES,
    ) {
        let store = store_from(&arcs, GraphMode::Directed);
        let first = store.shortest_path(start, end).unwrap();
        let second = store.shortest_path(start, end).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_returned_paths_are_walkable_and_priced_correctly(
        arcs in arcs_strategy(),
        start in 1..=MAX_NODES,
        end in 1..=MAX_NODES,
    ) {
        let store = store_from(&arcs, GraphMode::Directed);
        let route = store.shortest_path(start, end).unwrap();

        if !route.is_reachable() {
            prop_assert_eq!(route.distance, UNREACHABLE);
            prop_assert!(route.path.is_empty());
            return Ok(());
        }

        prop_assert_eq!(*route.path.first().unwrap(), start);
        prop_assert_eq!(*route.path.last().unwrap(), end);

        let mut total = 0.0;
        for pair in route.path.windows(2) {
            let weight = store.arc_weight(pair[0], pair[1]);
            prop_assert!(weight.is_some(), "path uses a missing arc {:?}", pair);
            total += weight.unwrap();
        }
        prop_assert!((total - route.distance).abs() < 1e-9);
        if start == end {
            prop_assert_eq!(route.distance, 0.0);
            prop_assert_eq!(route.path.len(), 1);
        }
    }

    #[test]
    fn prop_no_walkable_route_beats_the_reported_distance(
        arcs in arcs_strategy(),
        start in 1..=MAX_NODES,
        end in 1..=MAX_NODES,
    ) {
        let store = store_from(&arcs, GraphMode::Directed);
        let route = store.shortest_path(start, end).unwrap();

        // Any single direct arc is itself a route; the result must not lose
        // to it.
        if let Some(direct) = store.arc_weight(start, end) {
            prop_assert!(route.is_reachable());
            prop_assert!(route.distance <= direct + 1e-9);
        }
    }

    #[test]
    fn prop_undirected_stores_answer_symmetrically(
        arcs in arcs_strategy(),
        start in 1..=MAX_NODES,
        end in 1..=MAX_NODES,
    ) {
        let store = store_from(&arcs, GraphMode::Undirected);
        for &(from, to, _) in &arcs {
            if store.edge_exists(from, to) {
                prop_assert!(store.edge_exists(to, from));
            }
        }

        let forward = store.shortest_path(start, end).unwrap();
        let backward = store.shortest_path(end, start).unwrap();
        prop_assert_eq!(forward.is_reachable(), backward.is_reachable());
        if forward.is_reachable() {
            prop_assert!((forward.distance - backward.distance).abs() < 1e-9);
        }
    }
}
