//! UI-facing edge records, including the synthetic reverse arcs that back
//! undirected edges.
//!
//! An undirected logical edge is stored as a forward record plus a reverse
//! twin tagged [`MirrorEdge::reverse`]. The twin exists so the renderer can
//! draw both arcs, but it is invisible to duplicate detection, unique-edge
//! counts and pair-addressed removal; those operate on logical edges.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::errors::{NotFoundError, ValidationError};
use crate::types::NodeId;

/// Resting edge stroke color.
pub const EDGE_COLOR: &str = "#4361ee";
/// Stroke color of highlighted path edges.
pub const EDGE_HIGHLIGHT_COLOR: &str = "#f72585";
/// Resting stroke width.
pub const EDGE_STROKE_WIDTH: f64 = 2.0;
/// Stroke width of highlighted path edges.
pub const EDGE_HIGHLIGHT_STROKE_WIDTH: f64 = 3.0;

/// Identifier of one stored edge record (reverse twins get their own).
pub type EdgeRecordId = u64;

/// One edge record as the rendering collaborator sees it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MirrorEdge {
    pub id: EdgeRecordId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    pub directed: bool,
    pub color: String,
    pub stroke_width: f64,
    pub highlighted: bool,
    /// Synthetic reverse arc of an undirected edge.
    pub reverse: bool,
    pub created_at: DateTime<Utc>,
}

/// Edge counts for the stats query surface. `unique` counts each undirected
/// pair once despite the two stored records.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeStats {
    pub total: usize,
    pub unique: usize,
    pub directed: usize,
    pub undirected: usize,
}

/// Ordered collection of edge records.
#[derive(Clone, Debug)]
pub struct EdgeCollection {
    edges: Vec<MirrorEdge>,
    next_record_id: EdgeRecordId,
}

impl Default for EdgeCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeCollection {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            next_record_id: 1,
        }
    }

    /// `true` when a logical edge covers `from -> to`: either a record with
    /// that exact orientation, or an undirected record of the opposite
    /// orientation. Reverse twins are never consulted.
    #[must_use]
    pub fn edge_exists(&self, from: NodeId, to: NodeId) -> bool {
        self.get(from, to).is_some()
    }

    /// The logical edge covering `from -> to`, if any.
    #[must_use]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<&MirrorEdge> {
        self.edges.iter().find(|edge| {
            !edge.reverse
                && ((edge.from == from && edge.to == to)
                    || (!edge.directed && edge.from == to && edge.to == from))
        })
    }

    /// Checks every invariant [`create`](Self::create) enforces, without
    /// mutating the collection.
    pub fn validate_create(
        &self,
        from: NodeId,
        to: NodeId,
        weight: f64,
        directed: bool,
    ) -> Result<(), ValidationError> {
        if from == to {
            return Err(ValidationError::SelfLoop { id: from });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(ValidationError::InvalidWeight { weight });
        }
        if self.edge_exists(from, to) {
            return Err(ValidationError::DuplicateEdge { from, to });
        }
        // Creating an undirected edge also claims the reverse orientation.
        if !directed && self.edge_exists(to, from) {
            return Err(ValidationError::DuplicateEdge { from: to, to: from });
        }
        Ok(())
    }

    /// Creates a logical edge. Undirected creation appends the forward
    /// record and its reverse twin together; they share the weight and are
    /// only ever removed together.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] from [`validate_create`](Self::validate_create);
    /// the collection is unchanged on error.
    pub fn create(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
        directed: bool,
    ) -> Result<&MirrorEdge, ValidationError> {
        self.validate_create(from, to, weight, directed)?;

        let created_at = Utc::now();
        let forward_index = self.edges.len();
        let forward_id = self.take_record_id();
        self.edges.push(MirrorEdge {
            id: forward_id,
            from,
            to,
            weight,
            directed,
            color: EDGE_COLOR.to_string(),
            stroke_width: EDGE_STROKE_WIDTH,
            highlighted: false,
            reverse: false,
            created_at,
        });
        if !directed {
            let reverse_id = self.take_record_id();
            self.edges.push(MirrorEdge {
                id: reverse_id,
                from: to,
                to: from,
                weight,
                directed,
                color: EDGE_COLOR.to_string(),
                stroke_width: EDGE_STROKE_WIDTH,
                highlighted: false,
                reverse: true,
                created_at,
            });
        }
        Ok(&self.edges[forward_index])
    }

    fn take_record_id(&mut self) -> EdgeRecordId {
        let id = self.next_record_id;
        self.next_record_id += 1;
        id
    }

    /// Removes the logical edge covering `from -> to`, taking its reverse
    /// twin with it. Returns the removed forward record so the caller can
    /// see its orientation and directedness.
    pub fn remove(&mut self, from: NodeId, to: NodeId) -> Result<MirrorEdge, NotFoundError> {
        let forward = self
            .edges
            .iter()
            .position(|edge| {
                !edge.reverse
                    && ((edge.from == from && edge.to == to)
                        || (!edge.directed && edge.from == to && edge.to == from))
            })
            .ok_or(NotFoundError::Edge { from, to })?;
        let record = self.edges.remove(forward);
        if !record.directed {
            self.edges.retain(|edge| {
                !(edge.reverse && edge.from == record.to && edge.to == record.from)
            });
        }
        Ok(record)
    }

    /// All records in insertion order, reverse twins included, for the
    /// rendering collaborator.
    #[must_use]
    pub fn get_all(&self) -> &[MirrorEdge] {
        &self.edges
    }

    /// Non-reverse records touching `id` in either role.
    #[must_use]
    pub fn edges_by_node(&self, id: NodeId) -> Vec<&MirrorEdge> {
        self.edges
            .iter()
            .filter(|edge| !edge.reverse && (edge.from == id || edge.to == id))
            .collect()
    }

    /// Resets all highlight state, then marks every record connecting
    /// consecutive nodes of `path`, matching either orientation for
    /// undirected records, so both twins of an undirected edge light up.
    pub fn highlight_path(&mut self, path: &[NodeId]) {
        for edge in &mut self.edges {
            edge.highlighted = false;
            edge.color = EDGE_COLOR.to_string();
            edge.stroke_width = EDGE_STROKE_WIDTH;
        }
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            for edge in &mut self.edges {
                let matches = (edge.from == from && edge.to == to)
                    || (!edge.directed && edge.from == to && edge.to == from);
                if matches {
                    edge.highlighted = true;
                    edge.color = EDGE_HIGHLIGHT_COLOR.to_string();
                    edge.stroke_width = EDGE_HIGHLIGHT_STROKE_WIDTH;
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resets the collection to empty with the record counter rewound.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.next_record_id = 1;
    }

    #[must_use]
    pub fn stats(&self) -> EdgeStats {
        let mut unique: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut directed = 0;
        let mut undirected = 0;
        for edge in self.edges.iter().filter(|edge| !edge.reverse) {
            unique.insert((edge.from.min(edge.to), edge.from.max(edge.to)));
            if edge.directed {
                directed += 1;
            } else {
                undirected += 1;
            }
        }
        EdgeStats {
            total: self.edges.len(),
            unique: unique.len(),
            directed,
            undirected,
        }
    }
}
