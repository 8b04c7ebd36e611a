//! Core types for the routegraph engine.
//!
//! This module defines the small shared vocabulary used by the graph store,
//! the mirror model and the bridge: node identifiers, the graph mode that
//! governs how new edges are materialized, and the unreachable-distance
//! sentinel the UI contract expects.
//!
//! # Examples
//!
//! ```rust
//! use routegraph::types::GraphMode;
//!
//! let mode = GraphMode::from("undirected");
//! assert!(!mode.is_directed());
//! assert_eq!(mode.to_string(), "undirected");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a graph node.
///
/// Node identifiers are small positive integers assigned by the caller or
/// auto-assigned by the mirror model. The engine accepts ids in
/// `1..=max_nodes`; id `0` is never valid.
pub type NodeId = usize;

/// Distance reported for an unreachable target, as consumed by the UI layer.
///
/// Internally the engine works with `f64::INFINITY`; the sentinel only
/// appears in results crossing the core boundary.
pub const UNREACHABLE: f64 = -1.0;

/// Governs how future edge insertions are materialized in the graph store.
///
/// In [`GraphMode::Directed`] mode a logical edge is a single arc. In
/// [`GraphMode::Undirected`] mode each logical edge is stored as a mirrored
/// pair of arcs sharing one weight. Switching the mode never rewrites edges
/// that already exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// Each logical edge is one arc: `from -> to`.
    #[default]
    Directed,
    /// Each logical edge is a mirrored arc pair: `from -> to` and `to -> from`.
    Undirected,
}

impl GraphMode {
    /// Returns `true` for [`GraphMode::Directed`].
    #[must_use]
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}

// Developer experience: allow the UI's "graph type" strings where a mode is
// expected. Anything that is not "undirected" is treated as directed, which
// matches the source visualizer's select-box semantics.
impl From<&str> for GraphMode {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("undirected") {
            GraphMode::Undirected
        } else {
            GraphMode::Directed
        }
    }
}
