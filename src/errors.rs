//! Error taxonomy for the routegraph core.
//!
//! Three classes cover every failure the core can report:
//!
//! - [`ValidationError`]: a command was rejected before any mutation.
//!   Always recoverable; the caller fixes the input and retries.
//! - [`NotFoundError`]: a query, removal or selection referenced a node or
//!   logical edge that does not exist. Recoverable.
//! - [`BridgeError`]: the command-level wrapper. Adds the initialization
//!   gate ([`BridgeError::NotInitialized`]) and the one fatal class,
//!   [`BridgeError::Consistency`]: the graph store and the mirror diverged
//!   after validation passed, and the only safe recovery is a full
//!   [`clear`](crate::bridge::GraphBridge::clear) or
//!   [`create_graph`](crate::bridge::GraphBridge::create_graph).
//!
//! Every error is reported synchronously to the caller of the failing
//! command; nothing is swallowed at the core boundary.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NodeId;

/// A command was rejected by invariant checks before any mutation.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ValidationError {
    /// Graph capacity must allow at least one node.
    #[error("graph capacity must be at least 1")]
    #[diagnostic(code(routegraph::validation::zero_capacity))]
    ZeroCapacity,

    /// Node id falls outside the engine's fixed range `1..=max`.
    #[error("node {id} is outside the valid range 1..={max}")]
    #[diagnostic(
        code(routegraph::validation::node_out_of_range),
        help("Node ids are fixed at graph creation; recreate the graph with a larger capacity.")
    )]
    NodeOutOfRange { id: NodeId, max: usize },

    /// Self-loops carry no routing information and are rejected outright.
    #[error("self-loops are not allowed (node {id})")]
    #[diagnostic(code(routegraph::validation::self_loop))]
    SelfLoop { id: NodeId },

    /// Dijkstra requires strictly positive, finite weights.
    #[error("edge weight must be positive and finite, got {weight}")]
    #[diagnostic(code(routegraph::validation::invalid_weight))]
    InvalidWeight { weight: f64 },

    /// At most one logical edge may exist per (from, to, directedness).
    #[error("edge {from} -> {to} already exists")]
    #[diagnostic(
        code(routegraph::validation::duplicate_edge),
        help("Duplicate edges are rejected, not merged; remove the edge first to change its weight.")
    )]
    DuplicateEdge { from: NodeId, to: NodeId },

    /// Mirror node ids are unique within a session.
    #[error("node {id} already exists")]
    #[diagnostic(code(routegraph::validation::duplicate_node))]
    DuplicateNode { id: NodeId },
}

/// A command referenced a node or logical edge that is not present.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum NotFoundError {
    #[error("node {id} does not exist")]
    #[diagnostic(code(routegraph::not_found::node))]
    Node { id: NodeId },

    #[error("edge {from} -> {to} does not exist")]
    #[diagnostic(code(routegraph::not_found::edge))]
    Edge { from: NodeId, to: NodeId },
}

/// Command-level errors surfaced by [`GraphBridge`](crate::bridge::GraphBridge).
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum BridgeError {
    /// The engine has not been initialized yet. Callers should retry after
    /// [`initialize`](crate::bridge::GraphBridge::initialize) completes;
    /// commands are never queued.
    #[error("graph engine is not initialized")]
    #[diagnostic(
        code(routegraph::bridge::not_initialized),
        help("Call GraphBridge::initialize() before issuing commands.")
    )]
    NotInitialized,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NotFound(#[from] NotFoundError),

    /// The graph store and the mirror diverged after validation passed.
    /// Fatal to the session: force a full clear/reinitialize rather than
    /// attempting partial repair.
    #[error("graph store and mirror diverged while {action}: {detail}")]
    #[diagnostic(
        code(routegraph::bridge::consistency),
        help("The session state is no longer trustworthy; call clear() or create_graph().")
    )]
    Consistency {
        action: &'static str,
        detail: String,
    },
}

impl BridgeError {
    /// `true` for errors that invalidate the whole session.
    ///
    /// Everything except [`BridgeError::Consistency`] is recoverable by the
    /// caller of the failing command.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Consistency { .. })
    }
}
