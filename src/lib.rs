//! # Routegraph: Graph Engine and Mirror Synchronization Core
//!
//! Routegraph is the computation-and-synchronization core of an interactive
//! shortest-path visualizer: an authoritative graph engine that stores
//! nodes and weighted edges and answers Dijkstra queries, a UI-facing
//! mirror carrying presentation state, and the consistency bridge that
//! keeps the two in step on every mutation.
//!
//! ## Core Concepts
//!
//! - **Graph Store**: fixed-capacity adjacency container, the single source
//!   of truth for computation
//! - **Shortest-Path Engine**: deterministic binary-heap Dijkstra with
//!   reconstructible paths
//! - **Mirror Model**: node/edge records with positions, colors, selection
//!   and highlight state
//! - **Bridge**: the command/query surface guaranteeing both models agree
//!   before any command returns
//!
//! ## Quick Start
//!
//! ```rust
//! use routegraph::bridge::GraphBridge;
//! use routegraph::config::EngineConfig;
//! use routegraph::mirror::NodeOptions;
//!
//! # fn main() -> Result<(), routegraph::errors::BridgeError> {
//! let mut bridge = GraphBridge::new(EngineConfig::default().with_max_nodes(32));
//! bridge.initialize()?;
//!
//! for id in 1..=4 {
//!     bridge.add_node(Some(id), NodeOptions::new())?;
//! }
//! bridge.create_edge(1, 2, 4.0)?;
//! bridge.create_edge(1, 3, 2.0)?;
//! bridge.create_edge(3, 4, 1.0)?;
//!
//! let route = bridge.run_shortest_path(1, 4)?;
//! assert_eq!(route.path, vec![1, 3, 4]);
//! assert_eq!(route.distance, 3.0);
//!
//! // The mirror now carries the route as highlight state.
//! assert!(bridge.edges_for_render().iter().any(|edge| edge.highlighted));
//! # Ok(())
//! # }
//! ```
//!
//! ## Consistency Model
//!
//! All mutations go through [`bridge::GraphBridge`], which validates against
//! both models' invariants before applying to either, applies to the store
//! first, and surfaces [`errors::BridgeError::Consistency`] (fatal to the
//! session) if the two ever diverge after validation. Rendering
//! collaborators read the mirror; computation always runs against the store.
//!
//! ## Module Guide
//!
//! - [`bridge`] - Command/query surface and the consistency protocol
//! - [`store`] - Authoritative adjacency store and Dijkstra engine
//! - [`mirror`] - UI-facing node/edge collections
//! - [`config`] - Session configuration with environment resolution
//! - [`errors`] - Error taxonomy
//! - [`types`] - Shared vocabulary (node ids, graph mode)
//! - [`telemetry`] - Opt-in tracing subscriber setup

pub mod bridge;
pub mod config;
pub mod errors;
pub mod mirror;
pub mod store;
pub mod telemetry;
pub mod types;
