//! UI-facing node records and their collection.
//!
//! [`NodeCollection`] owns the presentation side of every node: position,
//! color, radius, label and the single-selection state. It never talks to
//! the graph store; the bridge keeps the two in step.

use rand::RngExt;
use serde::Serialize;

use crate::config::CanvasBounds;
use crate::errors::{NotFoundError, ValidationError};
use crate::types::NodeId;

/// Resting node fill color.
pub const NODE_COLOR: &str = "#4361ee";
/// Fill color of the selected node.
pub const NODE_SELECTED_COLOR: &str = "#f8961e";
/// Default node radius in canvas units.
pub const NODE_RADIUS: f64 = 20.0;

// Margin keeping default-radius nodes fully inside the canvas when placed
// by scatter.
const SCATTER_MARGIN: f64 = 50.0;

/// One node as the rendering collaborator sees it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MirrorNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
    pub radius: f64,
    pub selected: bool,
}

/// Optional presentation attributes for adding or patching a node.
///
/// Unset fields fall back to defaults on add and are left untouched on
/// update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeOptions {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub radius: Option<f64>,
}

impl NodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Node counts for the stats query surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeStats {
    pub total: usize,
    pub selected: usize,
    pub next_id: NodeId,
}

/// Ordered collection of mirror nodes with auto-assigned ids and a
/// single-selection model.
#[derive(Clone, Debug)]
pub struct NodeCollection {
    nodes: Vec<MirrorNode>,
    selected: Option<NodeId>,
    next_id: NodeId,
    canvas: CanvasBounds,
}

impl NodeCollection {
    pub fn new(canvas: CanvasBounds) -> Self {
        Self {
            nodes: Vec::new(),
            selected: None,
            next_id: 1,
            canvas,
        }
    }

    /// Adds a node, auto-assigning the next unused ascending id when none
    /// is given. An explicit id advances the counter to at least `id + 1`,
    /// so ids are never recycled within a session.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DuplicateNode`] when the id is already present.
    pub fn add(
        &mut self,
        id: Option<NodeId>,
        options: NodeOptions,
    ) -> Result<&MirrorNode, ValidationError> {
        if let Some(explicit) = id
            && self.node_exists(explicit)
        {
            return Err(ValidationError::DuplicateNode { id: explicit });
        }
        let id = match id {
            Some(explicit) => {
                self.next_id = self.next_id.max(explicit + 1);
                explicit
            }
            None => {
                let assigned = self.next_id;
                self.next_id += 1;
                assigned
            }
        };

        let (x, y) = match (options.x, options.y) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                let (sx, sy) = self.scatter_position();
                (options.x.unwrap_or(sx), options.y.unwrap_or(sy))
            }
        };
        self.nodes.push(MirrorNode {
            id,
            x,
            y,
            label: options.label.unwrap_or_else(|| id.to_string()),
            color: options.color.unwrap_or_else(|| NODE_COLOR.to_string()),
            radius: options.radius.unwrap_or(NODE_RADIUS),
            selected: false,
        });
        Ok(self.nodes.last().expect("node was just pushed"))
    }

    fn scatter_position(&self) -> (f64, f64) {
        let mut rng = rand::rng();
        let mut axis = |extent: f64| {
            if extent > SCATTER_MARGIN * 2.0 {
                rng.random_range(SCATTER_MARGIN..extent - SCATTER_MARGIN)
            } else {
                extent / 2.0
            }
        };
        let x = axis(self.canvas.width);
        let y = axis(self.canvas.height);
        (x, y)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&MirrorNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut MirrorNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// All nodes in insertion order, for the rendering collaborator.
    #[must_use]
    pub fn get_all(&self) -> &[MirrorNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node_exists(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The id the next auto-assignment would use.
    #[must_use]
    pub fn next_auto_id(&self) -> NodeId {
        self.next_id
    }

    /// Currently selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Applies the set fields of `patch` to an existing node.
    pub fn update(
        &mut self,
        id: NodeId,
        patch: NodeOptions,
    ) -> Result<&MirrorNode, NotFoundError> {
        let node = self.get_mut(id).ok_or(NotFoundError::Node { id })?;
        if let Some(x) = patch.x {
            node.x = x;
        }
        if let Some(y) = patch.y {
            node.y = y;
        }
        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(color) = patch.color {
            node.color = color;
        }
        if let Some(radius) = patch.radius {
            node.radius = radius;
        }
        Ok(self.get(id).expect("node exists"))
    }

    /// Toggles selection of `id` under the single-selection model: selecting
    /// a node deselects whichever node was selected before. Returns the new
    /// selection state of `id`.
    pub fn toggle_selection(&mut self, id: NodeId) -> Result<bool, NotFoundError> {
        if !self.node_exists(id) {
            return Err(NotFoundError::Node { id });
        }
        if let Some(previous) = self.selected
            && previous != id
            && let Some(node) = self.get_mut(previous)
        {
            node.selected = false;
            node.color = NODE_COLOR.to_string();
        }
        let node = self.get_mut(id).expect("existence checked above");
        node.selected = !node.selected;
        node.color = if node.selected {
            NODE_SELECTED_COLOR.to_string()
        } else {
            NODE_COLOR.to_string()
        };
        let selected = node.selected;
        self.selected = selected.then_some(id);
        Ok(selected)
    }

    /// Removes a node record. Mirror-side only: any engine arcs or mirror
    /// edges referencing the node are the caller's responsibility.
    pub fn remove(&mut self, id: NodeId) -> Result<(), NotFoundError> {
        let index = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or(NotFoundError::Node { id })?;
        self.nodes.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(())
    }

    /// Resets the collection to empty, selection cleared, counter rewound.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.selected = None;
        self.next_id = 1;
    }

    #[must_use]
    pub fn stats(&self) -> NodeStats {
        NodeStats {
            total: self.nodes.len(),
            selected: usize::from(self.selected.is_some()),
            next_id: self.next_id,
        }
    }
}
