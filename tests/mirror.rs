mod common;

use common::*;
use routegraph::config::CanvasBounds;
use routegraph::errors::{NotFoundError, ValidationError};
use routegraph::mirror::nodes::{NODE_COLOR, NODE_SELECTED_COLOR};
use routegraph::mirror::{EdgeCollection, MirrorModel, NodeCollection, NodeOptions};

fn nodes() -> NodeCollection {
    NodeCollection::new(CanvasBounds::default())
}

#[test]
fn ids_are_auto_assigned_ascending() {
    let mut collection = nodes();
    for expected in 1..=3 {
        let node = collection.add(None, NodeOptions::new()).unwrap();
        assert_eq!(node.id, expected);
    }
}

#[test]
fn explicit_ids_advance_the_counter_past_themselves() {
    let mut collection = nodes();
    collection.add(Some(5), NodeOptions::new()).unwrap();
    let node = collection.add(None, NodeOptions::new()).unwrap();
    assert_eq!(node.id, 6);
}

#[test]
fn duplicate_ids_are_rejected_without_burning_the_counter() {
    let mut collection = nodes();
    collection.add(Some(1), NodeOptions::new()).unwrap();
    assert_eq!(
        collection.add(Some(1), NodeOptions::new()).unwrap_err(),
        ValidationError::DuplicateNode { id: 1 }
    );
    assert_eq!(collection.add(None, NodeOptions::new()).unwrap().id, 2);
}

#[test]
fn new_nodes_get_presentation_defaults() {
    let mut collection = nodes();
    let node = collection.add(Some(7), NodeOptions::new()).unwrap();
    assert_eq!(node.label, "7");
    assert_eq!(node.color, NODE_COLOR);
    assert_eq!(node.radius, 20.0);
    assert!(!node.selected);
}

#[test]
fn scatter_placement_stays_inside_the_canvas() {
    let bounds = CanvasBounds {
        width: 400.0,
        height: 300.0,
    };
    let mut collection = NodeCollection::new(bounds);
    for _ in 0..20 {
        let node = collection.add(None, NodeOptions::new()).unwrap();
        assert!(node.x >= 0.0 && node.x <= bounds.width);
        assert!(node.y >= 0.0 && node.y <= bounds.height);
    }
}

#[test]
fn explicit_attributes_override_defaults() {
    let mut collection = nodes();
    let node = collection
        .add(
            None,
            NodeOptions::new()
                .at(12.0, 34.0)
                .with_label("depot")
                .with_color("#ff0000")
                .with_radius(8.0),
        )
        .unwrap()
        .clone();
    assert_eq!((node.x, node.y), (12.0, 34.0));
    assert_eq!(node.label, "depot");
    assert_eq!(node.color, "#ff0000");
    assert_eq!(node.radius, 8.0);
}

#[test]
fn update_patches_only_the_set_fields() {
    let mut collection = nodes();
    collection.add(Some(1), opts_at(1.0, 2.0)).unwrap();
    let node = collection
        .update(1, NodeOptions::new().with_label("hub"))
        .unwrap();
    assert_eq!(node.label, "hub");
    assert_eq!((node.x, node.y), (1.0, 2.0));

    assert_eq!(
        collection
            .update(9, NodeOptions::new())
            .unwrap_err(),
        NotFoundError::Node { id: 9 }
    );
}

#[test]
fn selection_is_single_and_recolors() {
    let mut collection = nodes();
    collection.add(Some(1), NodeOptions::new()).unwrap();
    collection.add(Some(2), NodeOptions::new()).unwrap();

    assert!(collection.toggle_selection(1).unwrap());
    assert_eq!(collection.selected(), Some(1));
    assert_eq!(collection.get(1).unwrap().color, NODE_SELECTED_COLOR);

    // Selecting node 2 deselects node 1.
    assert!(collection.toggle_selection(2).unwrap());
    assert_eq!(collection.selected(), Some(2));
    let one = collection.get(1).unwrap();
    assert!(!one.selected);
    assert_eq!(one.color, NODE_COLOR);

    // Toggling the selected node clears the selection.
    assert!(!collection.toggle_selection(2).unwrap());
    assert_eq!(collection.selected(), None);
}

#[test]
fn removing_the_selected_node_clears_selection() {
    let mut collection = nodes();
    collection.add(Some(1), NodeOptions::new()).unwrap();
    collection.toggle_selection(1).unwrap();
    collection.remove(1).unwrap();
    assert_eq!(collection.selected(), None);
    assert_eq!(
        collection.remove(1).unwrap_err(),
        NotFoundError::Node { id: 1 }
    );
}

#[test]
fn edge_validation_matches_the_store_rules() {
    let mut edges = EdgeCollection::new();
    assert_eq!(
        edges.create(5, 5, 1.0, true).unwrap_err(),
        ValidationError::SelfLoop { id: 5 }
    );
    for weight in [0.0, -3.0] {
        assert!(matches!(
            edges.create(1, 2, weight, true).unwrap_err(),
            ValidationError::InvalidWeight { .. }
        ));
    }
    assert!(edges.is_empty());
}

#[test]
fn opposite_directed_edges_may_coexist() {
    let mut edges = EdgeCollection::new();
    edges.create(1, 2, 1.0, true).unwrap();
    edges.create(2, 1, 2.0, true).unwrap();
    assert_eq!(edges.stats().unique, 1); // same unordered pair
    assert_eq!(edges.stats().directed, 2);
}

#[test]
fn undirected_edge_blocks_both_orientations() {
    let mut edges = EdgeCollection::new();
    edges.create(1, 2, 1.0, false).unwrap();
    assert!(matches!(
        edges.create(2, 1, 9.0, true).unwrap_err(),
        ValidationError::DuplicateEdge { .. }
    ));
    assert!(matches!(
        edges.create(1, 2, 9.0, false).unwrap_err(),
        ValidationError::DuplicateEdge { .. }
    ));
}

#[test]
fn highlight_marks_consecutive_path_records_and_resets() {
    let mut edges = EdgeCollection::new();
    edges.create(1, 2, 1.0, true).unwrap();
    edges.create(2, 3, 1.0, true).unwrap();

    edges.highlight_path(&[1, 2, 3]);
    assert!(edges.get_all().iter().all(|edge| edge.highlighted));

    // A new highlight resets edges that left the path.
    edges.highlight_path(&[1, 2]);
    let highlighted: Vec<_> = edges
        .get_all()
        .iter()
        .filter(|edge| edge.highlighted)
        .collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!((highlighted[0].from, highlighted[0].to), (1, 2));
}

#[test]
fn highlight_matches_undirected_records_in_either_direction() {
    let mut edges = EdgeCollection::new();
    edges.create(2, 3, 1.0, false).unwrap();
    edges.highlight_path(&[3, 2]);
    // Both the forward record and its reverse twin light up.
    assert!(edges.get_all().iter().all(|edge| edge.highlighted));
}

#[test]
fn model_clear_resets_collections_and_counters() {
    let mut mirror = MirrorModel::new(CanvasBounds::default());
    mirror.nodes.add(None, NodeOptions::new()).unwrap();
    mirror.nodes.add(None, NodeOptions::new()).unwrap();
    mirror.edges.create(1, 2, 1.0, false).unwrap();

    mirror.clear();
    assert!(mirror.nodes.is_empty());
    assert!(mirror.edges.is_empty());
    let stats = mirror.stats();
    assert_eq!(stats.nodes.total, 0);
    assert_eq!(stats.nodes.next_id, 1);
    assert_eq!(stats.edges.total, 0);
}
