//! Vertex module for tree representation.

use crate::model::node_data::NodeData;
use crate::model::tree::VertexIndex;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a [Tree](crate::model::Tree).
///
/// A vertex is either:
/// - **Root**: no parent
/// - **Internal**: has a parent and at least one child
/// - **Leaf**: has a parent (or is a lone root) and no children
///
/// Each vertex owns exactly one node data instance through a
/// `Box<dyn NodeData>`; the data lives as long as the vertex.
///
/// # Invariants
/// - `index` is the position of the vertex in the tree arena
/// - `parent` is `None` only for the root (and during construction)
/// - `children` keep their insertion order
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Index of the parent vertex, `None` for the root
    parent: Option<VertexIndex>,
    /// Indices of the child vertices, in insertion order
    children: Vec<VertexIndex>,
    /// Data attached to this vertex
    data: Box<dyn NodeData>,
}

impl Vertex {
    /// Creates a new vertex without parent or children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `data` - The data owned by this vertex
    pub fn new(index: VertexIndex, data: Box<dyn NodeData>) -> Self {
        Vertex {
            index,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent_index(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the indices of the children of this vertex.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the number of children of this vertex.
    pub fn degree_out(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this vertex has a parent and at least one child.
    pub fn is_internal(&self) -> bool {
        self.parent.is_some() && !self.children.is_empty()
    }

    /// Returns `true` if this vertex has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the data of this vertex.
    pub fn data(&self) -> &dyn NodeData {
        self.data.as_ref()
    }

    /// Returns the data of this vertex mutably.
    pub fn data_mut(&mut self) -> &mut dyn NodeData {
        self.data.as_mut()
    }

    /// Replaces the data of this vertex, returning the previous data.
    pub fn replace_data(&mut self, data: Box<dyn NodeData>) -> Box<dyn NodeData> {
        std::mem::replace(&mut self.data, data)
    }

    /// Returns a copy of this vertex (same index, parent and children)
    /// that owns `data` instead.
    pub(crate) fn with_data(&self, data: Box<dyn NodeData>) -> Vertex {
        Vertex {
            index: self.index,
            parent: self.parent,
            children: self.children.clone(),
            data,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: VertexIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}
