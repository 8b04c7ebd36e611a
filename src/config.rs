//! Session configuration for the graph engine and mirror.
//!
//! [`EngineConfig`] carries the fixed capacity bound, the initial graph
//! mode and the canvas bounds used for default node placement. Defaults are
//! resolved from the environment (`.env` supported via `dotenvy`) with coded
//! fallbacks, so embedders can tune the engine without threading settings
//! through every call site.
//!
//! Recognized variables:
//!
//! - `ROUTEGRAPH_MAX_NODES`: capacity bound, default `1000`
//! - `ROUTEGRAPH_MODE`: `directed` (default) or `undirected`

use serde::{Deserialize, Serialize};

use crate::types::GraphMode;

/// Default capacity bound when none is configured.
pub const DEFAULT_MAX_NODES: usize = 1000;

/// Drawing surface bounds used when a node is added without a position.
///
/// The mirror scatters such nodes uniformly inside these bounds, keeping a
/// margin so default-radius nodes stay fully visible.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Configuration for one graph session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of nodes the store accepts; fixed at graph creation.
    pub max_nodes: usize,
    /// Initial graph mode. Changing the mode later never rewrites
    /// already-materialized edges.
    pub mode: GraphMode,
    /// Bounds for default node scatter placement.
    pub canvas: CanvasBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_nodes: Self::resolve_max_nodes(None),
            mode: Self::resolve_mode(None),
            canvas: CanvasBounds::default(),
        }
    }
}

impl EngineConfig {
    fn resolve_max_nodes(provided: Option<usize>) -> usize {
        if let Some(max) = provided {
            return max;
        }
        dotenvy::dotenv().ok();
        std::env::var("ROUTEGRAPH_MAX_NODES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MAX_NODES)
    }

    fn resolve_mode(provided: Option<GraphMode>) -> GraphMode {
        if let Some(mode) = provided {
            return mode;
        }
        dotenvy::dotenv().ok();
        std::env::var("ROUTEGRAPH_MODE")
            .map(|raw| GraphMode::from(raw.as_str()))
            .unwrap_or_default()
    }

    /// Builds a config from explicit values, skipping environment lookups
    /// for anything provided.
    pub fn new(max_nodes: Option<usize>, mode: Option<GraphMode>) -> Self {
        Self {
            max_nodes: Self::resolve_max_nodes(max_nodes),
            mode: Self::resolve_mode(mode),
            canvas: CanvasBounds::default(),
        }
    }

    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GraphMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasBounds) -> Self {
        self.canvas = canvas;
        self
    }
}
