//! The consistency bridge between the graph store and the mirror.
//!
//! [`GraphBridge`] is the only mutation path for a session. Every command
//! validates against both models' invariants before applying to either,
//! then applies to the graph store first (authoritative) and the mirror
//! second, so a successful command is visible on both sides before it
//! returns and a failed validation mutates neither. If an application step
//! fails after validation passed, the command surfaces
//! [`BridgeError::Consistency`] and the session must be cleared.
//!
//! Queries are answered solely from the graph store; the bridge translates
//! the engine's node-id path into mirror highlight state.
//!
//! # Examples
//!
//! ```rust
//! use routegraph::bridge::GraphBridge;
//! use routegraph::config::EngineConfig;
//! use routegraph::mirror::NodeOptions;
//!
//! # fn main() -> Result<(), routegraph::errors::BridgeError> {
//! let mut bridge = GraphBridge::new(EngineConfig::default().with_max_nodes(16));
//! bridge.initialize()?;
//!
//! for id in 1..=3 {
//!     bridge.add_node(Some(id), NodeOptions::new().at(10.0 * id as f64, 40.0))?;
//! }
//! bridge.create_edge(1, 2, 4.0)?;
//! bridge.create_edge(2, 3, 1.5)?;
//!
//! let route = bridge.run_shortest_path(1, 3)?;
//! assert_eq!(route.path, vec![1, 2, 3]);
//! assert_eq!(route.distance, 5.5);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::config::EngineConfig;
use crate::errors::{BridgeError, NotFoundError, ValidationError};
use crate::mirror::{MirrorEdge, MirrorModel, MirrorNode, MirrorStats, NodeOptions};
use crate::store::{GraphStore, ShortestPath, StoreStats};
use crate::types::{GraphMode, NodeId};

/// Combined engine and mirror statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GraphStats {
    pub engine: StoreStats,
    pub mirror: MirrorStats,
}

/// Command/query surface sequencing mutations across both models.
///
/// The bridge starts uninitialized; commands issued before
/// [`initialize`](Self::initialize) fail fast with
/// [`BridgeError::NotInitialized`] rather than queuing.
#[derive(Debug)]
pub struct GraphBridge {
    config: EngineConfig,
    store: Option<GraphStore>,
    mirror: MirrorModel,
}

impl GraphBridge {
    /// Creates an uninitialized bridge for the given session config.
    pub fn new(config: EngineConfig) -> Self {
        let mirror = MirrorModel::new(config.canvas);
        Self {
            config,
            store: None,
            mirror,
        }
    }

    /// One-time initialization gate. Idempotent; a second call is a no-op.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ZeroCapacity`] when the configured capacity is 0.
    pub fn initialize(&mut self) -> Result<(), BridgeError> {
        if self.store.is_some() {
            return Ok(());
        }
        let store = GraphStore::from_config(&self.config)?;
        tracing::info!(
            capacity = store.capacity(),
            mode = %store.mode(),
            "graph engine initialized"
        );
        self.store = Some(store);
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&GraphStore, BridgeError> {
        self.store.as_ref().ok_or(BridgeError::NotInitialized)
    }

    fn store_mut(&mut self) -> Result<&mut GraphStore, BridgeError> {
        self.store.as_mut().ok_or(BridgeError::NotInitialized)
    }

    /// Discards the current graph and starts a fresh one with `max_nodes`
    /// capacity, keeping the session's current mode. Resets the mirror and
    /// all id counters.
    pub fn create_graph(&mut self, max_nodes: usize) -> Result<(), BridgeError> {
        let mode = self.store()?.mode();
        let mut store = GraphStore::new(max_nodes)?;
        store.set_mode(mode);
        self.config.max_nodes = max_nodes;
        self.config.mode = mode;
        self.store = Some(store);
        self.mirror.clear();
        tracing::info!(max_nodes, "graph recreated");
        Ok(())
    }

    /// Adds a node to the session. With `id` omitted the next unused
    /// ascending id is assigned. The engine's capacity bound applies to
    /// explicit and auto-assigned ids alike.
    pub fn add_node(
        &mut self,
        id: Option<NodeId>,
        options: NodeOptions,
    ) -> Result<MirrorNode, BridgeError> {
        let store = self.store()?;
        let candidate = id.unwrap_or_else(|| self.mirror.nodes.next_auto_id());
        if !store.node_exists(candidate) {
            return Err(ValidationError::NodeOutOfRange {
                id: candidate,
                max: store.capacity(),
            }
            .into());
        }
        if self.mirror.nodes.node_exists(candidate) {
            return Err(ValidationError::DuplicateNode { id: candidate }.into());
        }
        // Engine-side node existence is implicit in the id range, so the
        // mirror insert is the only application step.
        let node = self
            .mirror
            .nodes
            .add(Some(candidate), options)
            .map_err(|err| consistency("adding node", err))?
            .clone();
        tracing::debug!(id = node.id, "node added");
        Ok(node)
    }

    /// Creates a logical edge `from -> to`. Directedness comes from the
    /// session's current graph mode, so the store's materialization and the
    /// mirror record agree by construction.
    pub fn create_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<MirrorEdge, BridgeError> {
        let store = self.store()?;
        let directed = store.mode().is_directed();

        // Validate against both models before touching either.
        for id in [from, to] {
            if !self.mirror.nodes.node_exists(id) {
                return Err(NotFoundError::Node { id }.into());
            }
        }
        store.validate_connect(from, to, weight)?;
        self.mirror.edges.validate_create(from, to, weight, directed)?;

        // Apply: store first (authoritative), then mirror.
        self.store_mut()?
            .connect_nodes(from, to, weight)
            .map_err(|err| consistency("creating edge", err))?;
        let edge = self
            .mirror
            .edges
            .create(from, to, weight, directed)
            .map_err(|err| consistency("creating edge", err))?
            .clone();
        tracing::debug!(from, to, weight, directed, "edge created");
        Ok(edge)
    }

    /// Removes the logical edge covering `from -> to` from both models,
    /// including the paired reverse arc of an undirected edge.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), BridgeError> {
        let store = self.store()?;
        let record = self
            .mirror
            .edges
            .get(from, to)
            .cloned()
            .ok_or(NotFoundError::Edge { from, to })?;

        // The mirror record is the ledger of how the edge was materialized;
        // a missing store arc at this point is divergence, not user error.
        if !store.edge_exists(record.from, record.to) {
            return Err(consistency(
                "removing edge",
                NotFoundError::Edge {
                    from: record.from,
                    to: record.to,
                },
            ));
        }

        let store = self.store_mut()?;
        store
            .disconnect_nodes(record.from, record.to)
            .map_err(|err| consistency("removing edge", err))?;
        if !record.directed {
            store
                .disconnect_nodes(record.to, record.from)
                .map_err(|err| consistency("removing edge", err))?;
        }
        self.mirror
            .edges
            .remove(from, to)
            .map_err(|err| consistency("removing edge", err))?;
        tracing::debug!(from, to, "edge removed");
        Ok(())
    }

    /// Switches the mode governing future edge insertions. Existing edges
    /// keep the directedness they were created with.
    pub fn set_graph_mode(&mut self, mode: GraphMode) -> Result<(), BridgeError> {
        self.store_mut()?.set_mode(mode);
        self.config.mode = mode;
        tracing::info!(%mode, "graph mode changed");
        Ok(())
    }

    /// Resets both models to empty with all counters rewound. Idempotent.
    pub fn clear(&mut self) -> Result<(), BridgeError> {
        self.store()?;
        let store = GraphStore::from_config(&self.config)?;
        self.store = Some(store);
        self.mirror.clear();
        tracing::info!("session cleared");
        Ok(())
    }

    /// Computes the shortest path between two existing nodes and applies it
    /// to the mirror as highlight state. Distance and path come back in one
    /// call; repeated queries recompute rather than reuse hidden state.
    ///
    /// An unreachable target is a successful query: the sentinel result is
    /// returned and all previous highlights are cleared.
    pub fn run_shortest_path(
        &mut self,
        start: NodeId,
        end: NodeId,
    ) -> Result<ShortestPath, BridgeError> {
        let store = self.store()?;
        for id in [start, end] {
            if !self.mirror.nodes.node_exists(id) {
                return Err(NotFoundError::Node { id }.into());
            }
        }
        let route = store.shortest_path(start, end)?;
        self.mirror.edges.highlight_path(&route.path);
        Ok(route)
    }

    /// Mirror-scoped: patches a node's presentation attributes.
    pub fn update_node(
        &mut self,
        id: NodeId,
        patch: NodeOptions,
    ) -> Result<MirrorNode, BridgeError> {
        self.store()?;
        Ok(self.mirror.nodes.update(id, patch)?.clone())
    }

    /// Mirror-scoped: toggles node selection under the single-selection
    /// model. Returns the node's new selection state.
    pub fn toggle_node_selection(&mut self, id: NodeId) -> Result<bool, BridgeError> {
        self.store()?;
        Ok(self.mirror.nodes.toggle_selection(id)?)
    }

    /// Mirror-scoped: removes a node record. Engine arcs referencing the
    /// node are left in place; reconciling them is the caller's
    /// responsibility, and the command logs when mirror edges still point
    /// at the removed node.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), BridgeError> {
        self.store()?;
        let dangling = self.mirror.edges.edges_by_node(id).len();
        if dangling > 0 {
            tracing::warn!(id, dangling, "removing node still referenced by mirror edges");
        }
        self.mirror.nodes.remove(id)?;
        Ok(())
    }

    /// All mirror nodes, for the rendering collaborator.
    #[must_use]
    pub fn nodes_for_render(&self) -> &[MirrorNode] {
        self.mirror.nodes.get_all()
    }

    /// All mirror edge records including synthetic reverse arcs, for the
    /// rendering collaborator.
    #[must_use]
    pub fn edges_for_render(&self) -> &[MirrorEdge] {
        self.mirror.edges.get_all()
    }

    /// Pure lookup: `true` when `id` is a valid engine endpoint.
    pub fn node_exists(&self, id: NodeId) -> Result<bool, BridgeError> {
        Ok(self.store()?.node_exists(id))
    }

    /// Pure lookup: `true` when the store has an arc `from -> to`.
    pub fn edge_exists(&self, from: NodeId, to: NodeId) -> Result<bool, BridgeError> {
        Ok(self.store()?.edge_exists(from, to))
    }

    /// Combined engine and mirror statistics.
    pub fn stats(&self) -> Result<GraphStats, BridgeError> {
        Ok(GraphStats {
            engine: self.store()?.stats(),
            mirror: self.mirror.stats(),
        })
    }

    /// The mode future edge insertions will use.
    pub fn mode(&self) -> Result<GraphMode, BridgeError> {
        Ok(self.store()?.mode())
    }
}

fn consistency(action: &'static str, detail: impl std::fmt::Display) -> BridgeError {
    let error = BridgeError::Consistency {
        action,
        detail: detail.to_string(),
    };
    tracing::error!(action, %error, "store/mirror divergence");
    error
}
