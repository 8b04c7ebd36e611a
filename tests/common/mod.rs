#![allow(dead_code)] // each suite pulls only the fixtures it needs

use routegraph::bridge::GraphBridge;
use routegraph::config::{CanvasBounds, EngineConfig};
use routegraph::mirror::NodeOptions;
use routegraph::store::GraphStore;
use routegraph::types::{GraphMode, NodeId};

/// Config with everything pinned so tests never read the environment.
pub fn test_config(max_nodes: usize) -> EngineConfig {
    EngineConfig::new(Some(max_nodes), Some(GraphMode::Directed))
        .with_canvas(CanvasBounds::default())
}

pub fn initialized_bridge(max_nodes: usize) -> GraphBridge {
    let mut bridge = GraphBridge::new(test_config(max_nodes));
    bridge.initialize().expect("capacity is positive");
    bridge
}

/// Initialized bridge with nodes `1..=count` placed on a fixed grid.
pub fn bridge_with_nodes(count: usize) -> GraphBridge {
    let mut bridge = initialized_bridge(count.max(8));
    for id in 1..=count {
        bridge
            .add_node(Some(id), opts_at(40.0 * id as f64, 60.0))
            .expect("fresh id");
    }
    bridge
}

pub fn opts_at(x: f64, y: f64) -> NodeOptions {
    NodeOptions::new().at(x, y)
}

/// Directed store preloaded with the given arcs.
pub fn store_with_arcs(max_nodes: usize, arcs: &[(NodeId, NodeId, f64)]) -> GraphStore {
    let mut store = GraphStore::new(max_nodes).expect("capacity is positive");
    for &(from, to, weight) in arcs {
        store.connect_nodes(from, to, weight).expect("valid arc");
    }
    store
}
