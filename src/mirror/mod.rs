//! The UI-facing mirror of the graph.
//!
//! The mirror carries everything the rendering collaborator needs that the
//! engine does not know about: positions, colors, labels, selection and
//! highlight state. It validates the same structural invariants as the
//! graph store independently, but it is never the source of truth for
//! computation; the bridge keeps it in step with the store on every
//! mutation.
//!
//! # Module layout
//!
//! - [`nodes`]: [`NodeCollection`] - node records, auto-assigned ids,
//!   single-selection model
//! - [`edges`]: [`EdgeCollection`] - edge records, synthetic reverse arcs,
//!   path highlighting
//! - [`MirrorModel`]: facade owning both collections

pub mod edges;
pub mod nodes;

pub use edges::{EdgeCollection, EdgeStats, MirrorEdge};
pub use nodes::{MirrorNode, NodeCollection, NodeOptions, NodeStats};

use serde::Serialize;

use crate::config::CanvasBounds;

/// Combined mirror statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MirrorStats {
    pub nodes: NodeStats,
    pub edges: EdgeStats,
}

/// Facade owning the node and edge collections of one session.
#[derive(Clone, Debug)]
pub struct MirrorModel {
    pub nodes: NodeCollection,
    pub edges: EdgeCollection,
}

impl MirrorModel {
    pub fn new(canvas: CanvasBounds) -> Self {
        Self {
            nodes: NodeCollection::new(canvas),
            edges: EdgeCollection::new(),
        }
    }

    /// Resets both collections to empty with all counters rewound.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    #[must_use]
    pub fn stats(&self) -> MirrorStats {
        MirrorStats {
            nodes: self.nodes.stats(),
            edges: self.edges.stats(),
        }
    }
}
