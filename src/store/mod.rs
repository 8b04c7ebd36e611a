//! The authoritative graph store.
//!
//! [`GraphStore`] is a fixed-capacity container of outgoing-adjacency lists,
//! the single source of truth for shortest-path computation. Node existence
//! is implicit: every id in `1..=capacity` is a valid endpoint, exactly as
//! the engine the UI mirror synchronizes against defines it. The store owns
//! edge weights and the [`GraphMode`] flag that decides whether a future
//! insertion materializes one arc or a mirrored pair.
//!
//! All mutating operations validate first and only then apply; a returned
//! error guarantees the store did not change.
//!
//! # Examples
//!
//! ```rust
//! use routegraph::store::GraphStore;
//! use routegraph::types::GraphMode;
//!
//! # fn main() -> Result<(), routegraph::errors::ValidationError> {
//! let mut store = GraphStore::new(8)?;
//! store.set_mode(GraphMode::Undirected);
//! store.connect_nodes(1, 2, 3.5)?;
//!
//! // Undirected insertions are observable from both ends.
//! assert!(store.edge_exists(1, 2));
//! assert!(store.edge_exists(2, 1));
//! # Ok(())
//! # }
//! ```

mod dijkstra;

pub use dijkstra::ShortestPath;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::errors::{NotFoundError, ValidationError};
use crate::types::{GraphMode, NodeId};

/// One directed connection with a weight: the store's primitive unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct OutArc {
    pub(crate) to: NodeId,
    pub(crate) weight: f64,
}

/// Snapshot of the store's size and mode, for the stats query surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StoreStats {
    pub capacity: usize,
    pub arcs: usize,
    pub mode: GraphMode,
}

/// Fixed-capacity adjacency store keyed by node id.
#[derive(Clone, Debug)]
pub struct GraphStore {
    capacity: usize,
    mode: GraphMode,
    /// Outgoing arcs per node; index 0 is unused so ids index directly.
    adjacency: Vec<Vec<OutArc>>,
}

impl GraphStore {
    /// Creates an empty store for up to `max_nodes` nodes.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ZeroCapacity`] when `max_nodes` is zero.
    pub fn new(max_nodes: usize) -> Result<Self, ValidationError> {
        if max_nodes == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            capacity: max_nodes,
            mode: GraphMode::default(),
            adjacency: vec![Vec::new(); max_nodes + 1],
        })
    }

    /// Creates an empty store sized and moded from a session config.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ValidationError> {
        let mut store = Self::new(config.max_nodes)?;
        store.mode = config.mode;
        Ok(store)
    }

    /// The fixed node-id bound set at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The mode applied to subsequent [`connect_nodes`](Self::connect_nodes)
    /// calls.
    #[must_use]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Changes the materialization mode for future insertions only.
    ///
    /// Existing arcs are never reinterpreted: an edge created while the
    /// store was directed stays a single arc after switching to undirected,
    /// and vice versa. The UI's graph-type toggle reads as a whole-graph
    /// property, but retroactively rewriting edges would silently change
    /// already-computed routes, so the non-retroactive semantics are kept.
    pub fn set_mode(&mut self, mode: GraphMode) {
        self.mode = mode;
    }

    /// `true` when `id` is a valid endpoint for this store.
    #[must_use]
    pub fn node_exists(&self, id: NodeId) -> bool {
        id >= 1 && id <= self.capacity
    }

    /// `true` when an arc `from -> to` is materialized.
    ///
    /// For an edge inserted under undirected mode both orientations answer
    /// `true`, because both arcs exist.
    #[must_use]
    pub fn edge_exists(&self, from: NodeId, to: NodeId) -> bool {
        if !self.node_exists(from) || !self.node_exists(to) {
            return false;
        }
        self.adjacency[from].iter().any(|arc| arc.to == to)
    }

    /// Weight of the arc `from -> to`, if materialized.
    #[must_use]
    pub fn arc_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if !self.node_exists(from) || !self.node_exists(to) {
            return None;
        }
        self.adjacency[from]
            .iter()
            .find(|arc| arc.to == to)
            .map(|arc| arc.weight)
    }

    /// Total number of materialized arcs (an undirected edge counts twice).
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            capacity: self.capacity,
            arcs: self.arc_count(),
            mode: self.mode,
        }
    }

    /// Checks every invariant `connect_nodes` enforces, without mutating.
    ///
    /// The bridge calls this before touching either model so a rejected
    /// command leaves no visible effect anywhere.
    pub fn validate_connect(
        &self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<(), ValidationError> {
        for id in [from, to] {
            if !self.node_exists(id) {
                return Err(ValidationError::NodeOutOfRange {
                    id,
                    max: self.capacity,
                });
            }
        }
        if from == to {
            return Err(ValidationError::SelfLoop { id: from });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(ValidationError::InvalidWeight { weight });
        }
        if self.edge_exists(from, to) {
            return Err(ValidationError::DuplicateEdge { from, to });
        }
        // An undirected insertion also materializes the reverse arc, so a
        // pre-existing reverse arc is a duplicate too.
        if !self.mode.is_directed() && self.edge_exists(to, from) {
            return Err(ValidationError::DuplicateEdge { from: to, to: from });
        }
        Ok(())
    }

    /// Adds an arc `from -> to`; under undirected mode also `to -> from`
    /// with the same weight. The pair is inserted atomically: validation
    /// covers both arcs before either is pushed.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] from [`validate_connect`](Self::validate_connect);
    /// the store is unchanged on error.
    pub fn connect_nodes(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<(), ValidationError> {
        self.validate_connect(from, to, weight)?;
        self.adjacency[from].push(OutArc { to, weight });
        if !self.mode.is_directed() {
            self.adjacency[to].push(OutArc { to: from, weight });
        }
        tracing::debug!(from, to, weight, mode = %self.mode, "arc connected");
        Ok(())
    }

    /// Removes the single arc `from -> to`.
    ///
    /// The store cannot know under which mode an arc was materialized, so
    /// removal is arc-level; the bridge pairs up removals for undirected
    /// logical edges using the mirror record's directedness.
    ///
    /// # Errors
    ///
    /// [`NotFoundError::Node`] for out-of-range endpoints,
    /// [`NotFoundError::Edge`] when no such arc exists.
    pub fn disconnect_nodes(&mut self, from: NodeId, to: NodeId) -> Result<(), NotFoundError> {
        for id in [from, to] {
            if !self.node_exists(id) {
                return Err(NotFoundError::Node { id });
            }
        }
        let position = self.adjacency[from].iter().position(|arc| arc.to == to);
        match position {
            Some(index) => {
                self.adjacency[from].remove(index);
                tracing::debug!(from, to, "arc disconnected");
                Ok(())
            }
            None => Err(NotFoundError::Edge { from, to }),
        }
    }

    pub(crate) fn outgoing(&self, id: NodeId) -> &[OutArc] {
        &self.adjacency[id]
    }
}
