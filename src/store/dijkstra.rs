//! Dijkstra shortest-path queries over the graph store.
//!
//! Classic binary-heap Dijkstra with two determinism guarantees on top of
//! the textbook algorithm: frontier ties are broken by smallest node id, and
//! the result carries distance and path together so repeated queries never
//! depend on hidden state from a previous call.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::GraphStore;
use crate::errors::ValidationError;
use crate::types::{NodeId, UNREACHABLE};

/// Result of one shortest-path query: total distance plus the node sequence
/// from start to end inclusive.
///
/// An unreachable target is reported with the [`UNREACHABLE`] sentinel
/// distance and an empty path, which is exactly the shape the UI contract
/// consumes. Use [`is_reachable`](Self::is_reachable) instead of comparing
/// floats.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Sum of arc weights along `path`, or [`UNREACHABLE`].
    pub distance: f64,
    /// Node ids from start to end inclusive; empty when unreachable.
    pub path: Vec<NodeId>,
}

impl ShortestPath {
    pub(crate) fn unreachable() -> Self {
        Self {
            distance: UNREACHABLE,
            path: Vec::new(),
        }
    }

    /// `true` when a path from start to end exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance >= 0.0
    }

    /// Human-readable path, e.g. `1 -> 3 -> 4`, for result displays.
    #[must_use]
    pub fn format(&self) -> String {
        if self.path.is_empty() {
            return "no path found".to_string();
        }
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Heap entry for the frontier. Ordered so the binary max-heap pops the
/// entry with the smallest tentative distance, ties going to the smallest
/// node id.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.node == other.node
    }
}

// Distances are sums of validated finite positive weights, so a total order
// exists; partial_cmp never observes NaN here.
impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl GraphStore {
    /// Computes the shortest path from `start` to `end`.
    ///
    /// Runs in `O((V + E) log V)` with a binary-heap frontier. Stale heap
    /// entries are skipped lazily, and extraction of `end` terminates the
    /// search early: with strictly positive weights its distance is final
    /// at that point.
    ///
    /// `start == end` is defined as distance `0` with path `[start]`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NodeOutOfRange`] when either endpoint is outside
    /// the store's range.
    pub fn shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> Result<ShortestPath, ValidationError> {
        for id in [start, end] {
            if !self.node_exists(id) {
                return Err(ValidationError::NodeOutOfRange {
                    id,
                    max: self.capacity(),
                });
            }
        }

        let mut distance = vec![f64::INFINITY; self.capacity() + 1];
        let mut predecessor: Vec<Option<NodeId>> = vec![None; self.capacity() + 1];
        let mut frontier = BinaryHeap::new();

        distance[start] = 0.0;
        frontier.push(FrontierEntry {
            distance: 0.0,
            node: start,
        });

        while let Some(entry) = frontier.pop() {
            if entry.distance > distance[entry.node] {
                continue; // stale entry superseded by a shorter relaxation
            }
            if entry.node == end {
                break;
            }
            for arc in self.outgoing(entry.node) {
                let candidate = distance[entry.node] + arc.weight;
                if candidate < distance[arc.to] {
                    distance[arc.to] = candidate;
                    predecessor[arc.to] = Some(entry.node);
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        node: arc.to,
                    });
                }
            }
        }

        if distance[end].is_infinite() {
            tracing::debug!(start, end, "no path");
            return Ok(ShortestPath::unreachable());
        }

        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = predecessor[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        tracing::debug!(start, end, distance = distance[end], hops = path.len(), "path found");
        Ok(ShortestPath {
            distance: distance[end],
            path,
        })
    }
}
