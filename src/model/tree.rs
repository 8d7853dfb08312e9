//! Provides a generic tree representation carrying polymorphic node data.
//!
//! Provides core data structures:
//! * [Tree] - Main tree structure using the arena pattern, agnostic of the
//!   concrete type of data its vertices carry
//! * [VertexIndex] as type used to index vertices in tree
//! * [PreOrderIter] and [PostOrderIter] for traversal

use crate::model::node_data::NodeData;
use crate::model::tree_error::{TreeError, TreeResult};
use crate::model::vertex::Vertex;
use std::fmt;
use tracing::{debug, instrument};

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Each vertex owns one `Box<dyn NodeData>`; the tree never
/// needs to know the concrete data types. Operations that copy or extend the
/// tree go through [NodeDataBase](crate::model::NodeDataBase), so copied and
/// newly added data always has the same dynamic type as its origin.
///
/// # Structure
/// - All vertices are stored in the arena; index of root is maintained.
/// - Vertices can have any number of children (kept in insertion order).
/// - Vertices are only ever added, so indices stay stable.
///
/// # Construction
/// Add a root with [`add_root()`](Tree::add_root), then children top-down with
/// [`add_child()`](Tree::add_child) or [`add_new_node()`](Tree::add_new_node).
/// Alternatively, use a [TreeBuilder](crate::model::TreeBuilder).
///
/// # Example
/// ```
/// use treedata::model::{DefaultNodeData, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.add_root(Box::new(DefaultNodeData::with_name("root"))).unwrap();
/// let kiwi = tree.add_child(root, Box::new(DefaultNodeData::with_name("kiwi"))).unwrap();
/// let blank = tree.add_new_node(root).unwrap();
///
/// assert_eq!(tree.data_as::<DefaultNodeData>(kiwi).unwrap().name, "kiwi");
/// assert_eq!(tree.data_as::<DefaultNodeData>(blank).unwrap().name, "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree, if set
    root_index: Option<VertexIndex>,

    /// Name of tree; optional
    name: Option<String>,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl Tree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Tree::default()
    }

    /// Creates a new empty tree with capacity for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        Tree {
            vertices: Vec::with_capacity(num_vertices),
            root_index: None,
            name: None,
        }
    }

    /// Attaches a name to this tree.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds the root to the tree, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `data` - Data owned by the root
    ///
    /// # Errors
    /// [TreeError::RootAlreadySet] if the tree already has a root.
    #[instrument(level = "trace", skip(self, data))]
    pub fn add_root(&mut self, data: Box<dyn NodeData>) -> TreeResult<VertexIndex> {
        if self.root_index.is_some() {
            return Err(TreeError::RootAlreadySet);
        }

        let index = self.push_vertex(data);
        self.root_index = Some(index);
        Ok(index)
    }

    /// Adds a new child below `parent`, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `parent` - Index of the parent vertex
    /// * `data` - Data owned by the new vertex
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `parent` is not a vertex of this tree.
    #[instrument(level = "trace", skip(self, data))]
    pub fn add_child(&mut self, parent: VertexIndex, data: Box<dyn NodeData>) -> TreeResult<VertexIndex> {
        self.checked(parent)?;

        let index = self.push_vertex(data);
        self.link(parent, index);
        Ok(index)
    }

    /// Adds a new child below `target` whose data is a blank instance of the
    /// same dynamic type as the data of `target`.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `target` is not a vertex of this tree.
    #[instrument(level = "trace", skip(self))]
    pub fn add_new_node(&mut self, target: VertexIndex) -> TreeResult<VertexIndex> {
        let data = self.checked(target)?.data().recreate();
        self.add_child(target, data)
    }

    /// Copies the tree `other` below `parent`, cloning all of its data.
    ///
    /// # Returns
    /// Index (in this tree) of the copy of the root of `other`.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `parent` is not a vertex of this tree,
    /// [TreeError::RootNotSet] if `other` has no root.
    pub fn graft(&mut self, parent: VertexIndex, other: &Tree) -> TreeResult<VertexIndex> {
        self.checked(parent)?;
        let other_root = other.root_index.ok_or(TreeError::RootNotSet)?;

        let num_before = self.vertices.len();
        let index = self.copy_subtree_from(other, other_root, Some(parent));
        debug!(
            parent,
            copied = self.vertices.len() - num_before,
            "Grafted tree"
        );
        Ok(index)
    }

    fn push_vertex(&mut self, data: Box<dyn NodeData>) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, data));
        index
    }

    /// Copies the subtree of `source` rooted at `source_index` into this tree,
    /// attaching it below `parent` (or making it the root if `None`).
    /// Children keep their order; data is cloned polymorphically.
    fn copy_subtree_from(&mut self, source: &Tree, source_index: VertexIndex, parent: Option<VertexIndex>) -> VertexIndex {
        let new_root = self.push_vertex(source.vertices[source_index].data().clone_box());
        match parent {
            Some(parent) => self.link(parent, new_root),
            None => self.root_index = Some(new_root),
        }

        // (index in source, index of new parent in self)
        let mut stack: Vec<(VertexIndex, VertexIndex)> = source.vertices[source_index]
            .children()
            .iter()
            .rev()
            .map(|&child| (child, new_root))
            .collect();

        while let Some((index, new_parent)) = stack.pop() {
            let vertex = &source.vertices[index];
            let new_index = self.push_vertex(vertex.data().clone_box());
            self.link(new_parent, new_index);

            // Push children (last first, so first is processed first)
            for &child in vertex.children().iter().rev() {
                stack.push((child, new_index));
            }
        }

        new_root
    }

    fn link(&mut self, parent: VertexIndex, child: VertexIndex) {
        self.vertices[child].set_parent(parent);
        self.vertices[parent].push_child(child);
    }
}

// ============================================================================
// Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Returns reference to name of this tree, or `None` if not set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set a name for this tree.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index.is_some()
    }

    /// Returns the index of the root, or `None` if not set.
    pub fn root_index(&self) -> Option<VertexIndex> {
        self.root_index
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Errors
    /// [TreeError::RootNotSet] if the tree has no root yet.
    pub fn root(&self) -> TreeResult<&Vertex> {
        let index = self.root_index.ok_or(TreeError::RootNotSet)?;
        Ok(&self.vertices[index])
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; see [`get()`](Tree::get).
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns a reference to the vertex at the given index, or `None` if out of bounds.
    pub fn get(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Returns all vertices in arena order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the data of the vertex at the given index.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree.
    pub fn data(&self, index: VertexIndex) -> TreeResult<&dyn NodeData> {
        Ok(self.checked(index)?.data())
    }

    /// Returns the data of the vertex at the given index mutably.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree.
    pub fn data_mut(&mut self, index: VertexIndex) -> TreeResult<&mut dyn NodeData> {
        Ok(self.checked_mut(index)?.data_mut())
    }

    /// Returns the data of the vertex at the given index as concrete type `T`.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree,
    /// [TreeError::DataTypeMismatch] if the data is not a `T`.
    pub fn data_as<T: NodeData>(&self, index: VertexIndex) -> TreeResult<&T> {
        let data = self.checked(index)?.data();
        data.downcast_ref::<T>()
            .ok_or_else(|| TreeError::DataTypeMismatch {
                index,
                expected: std::any::type_name::<T>(),
                found: data.type_name(),
            })
    }

    /// Returns the data of the vertex at the given index mutably as concrete type `T`.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree,
    /// [TreeError::DataTypeMismatch] if the data is not a `T`.
    pub fn data_as_mut<T: NodeData>(&mut self, index: VertexIndex) -> TreeResult<&mut T> {
        let data = self.checked_mut(index)?.data_mut();
        let found = data.type_name();
        data.downcast_mut::<T>()
            .ok_or(TreeError::DataTypeMismatch {
                index,
                expected: std::any::type_name::<T>(),
                found,
            })
    }

    /// Returns the data of the vertex at the given index as `T`,
    /// or `None` if the index is invalid or the data is of another type.
    pub fn data_cast<T: NodeData>(&self, index: VertexIndex) -> Option<&T> {
        self.get(index)?.data().downcast_ref::<T>()
    }

    /// Replaces the data of a vertex, returning the previous data.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree.
    pub fn replace_data(&mut self, index: VertexIndex, data: Box<dyn NodeData>) -> TreeResult<Box<dyn NodeData>> {
        Ok(self.checked_mut(index)?.replace_data(data))
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree.
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether this tree has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn checked(&self, index: VertexIndex) -> TreeResult<&Vertex> {
        self.vertices.get(index).ok_or(TreeError::InvalidVertex(index))
    }

    fn checked_mut(&mut self, index: VertexIndex) -> TreeResult<&mut Vertex> {
        self.vertices.get_mut(index).ok_or(TreeError::InvalidVertex(index))
    }
}

// ============================================================================
// Copying and converting (pub)
// ============================================================================
impl Tree {
    /// Returns a new tree consisting of a copy of the subtree rooted at `index`.
    ///
    /// The data of every copied vertex is cloned, preserving its dynamic type.
    /// Vertices of the new tree are indexed in pre-order. The name is kept.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `index` is not a vertex of this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn clone_subtree(&self, index: VertexIndex) -> TreeResult<Tree> {
        self.checked(index)?;

        let mut subtree = Tree::new();
        subtree.name = self.name.clone();
        subtree.copy_subtree_from(self, index, None);
        debug!(num_vertices = subtree.num_vertices(), "Cloned subtree");
        Ok(subtree)
    }

    /// Returns a new tree with the same topology and name,
    /// where the data of each vertex is produced by `convert` from the data
    /// of the corresponding vertex of this tree.
    ///
    /// # Example
    /// ```
    /// use treedata::model::{BaseNodeData, DefaultNodeData, NodeData, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.add_root(Box::new(BaseNodeData)).unwrap();
    /// tree.add_child(root, Box::new(BaseNodeData)).unwrap();
    ///
    /// let named = tree.convert(|_| Box::new(DefaultNodeData::with_name("x")));
    /// assert!(named.vertices().iter().all(|v| v.data().label() == Some("x")));
    /// ```
    pub fn convert<F>(&self, mut convert: F) -> Tree
    where
        F: FnMut(&dyn NodeData) -> Box<dyn NodeData>,
    {
        Tree {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.with_data(convert(v.data())))
                .collect(),
            root_index: self.root_index,
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// Validation and traversal (pub)
// ============================================================================
impl Tree {
    /// Checks if the tree is well-formed.
    ///
    /// Verifies that:
    /// - A root is set and it is the only vertex without parent
    /// - Each vertex index matches its arena position
    /// - Parent and child references are in bounds and mutually consistent
    /// - Every vertex is reachable from the root
    pub fn is_valid(&self) -> bool {
        let Some(root_index) = self.root_index else {
            return false;
        };
        if root_index >= self.vertices.len() || !self.vertices[root_index].is_root() {
            return false;
        }

        for (index, vertex) in self.vertices.iter().enumerate() {
            // Check vertex index matches its arena position
            if vertex.index() != index {
                return false;
            }

            // Check parent includes this vertex in its children
            match vertex.parent_index() {
                None => {
                    if index != root_index {
                        return false;
                    }
                }
                Some(parent_index) => {
                    if parent_index >= self.vertices.len()
                        || !self.vertices[parent_index].children().contains(&index)
                    {
                        return false;
                    }
                }
            }

            // Check children point back to this vertex as parent
            for &child in vertex.children() {
                if child >= self.vertices.len() || self.vertices[child].parent_index() != Some(index) {
                    return false;
                }
            }
        }

        self.pre_order_iter().count() == self.vertices.len()
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

impl std::ops::Index<VertexIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl std::ops::IndexMut<VertexIndex> for Tree {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
/// Renders the tree with one vertex per line, e.g.:
/// ```text
/// Tree 'kiwis' with 4 vertices (2 leaves):
/// [0] "Apteryx"
///   ├─ [1] "A. haastii"
///   └─ [2] -
///       └─ [3] "A. owenii"
/// ```
/// Vertices whose data has no [label](NodeData::label) are shown as `-`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Tree '{}'", name)?,
            None => write!(f, "Tree")?,
        }
        writeln!(f, " with {} vertices ({} leaves):", self.num_vertices(), self.num_leaves())?;

        match self.root_index {
            Some(root) => self.fmt_vertex(f, root, "", true),
            None => writeln!(f, "(No root set)"),
        }
    }
}

impl Tree {
    /// Helper function to recursively print a vertex and its children.
    fn fmt_vertex(&self, f: &mut fmt::Formatter<'_>, index: VertexIndex, prefix: &str, is_last: bool) -> fmt::Result {
        let vertex = &self.vertices[index];

        let connector = if prefix.is_empty() { "" } else if is_last { "└─ " } else { "├─ " };
        match vertex.data().label() {
            Some(label) => writeln!(f, "{}{}[{}] \"{}\"", prefix, connector, index, label)?,
            None => writeln!(f, "{}{}[{}] -", prefix, connector, index)?,
        }

        let new_prefix = if prefix.is_empty() {
            "  ".to_string()
        } else {
            format!("{}{}   ", prefix, if is_last { " " } else { "│" })
        };

        let children = vertex.children();
        for (i, &child) in children.iter().enumerate() {
            self.fmt_vertex(f, child, &new_prefix, i + 1 == children.len())?;
        }
        Ok(())
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index {
            stack.push((root, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_leaf() {
                // Either we've already processed children, or this is a leaf
                return Some(vertex);
            }

            // Mark this vertex as "children will be visited"
            self.stack.push((index, true));

            // Push children (last first, so first is processed first)
            for &child in vertex.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index {
            stack.push(root);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children onto stack (last first, so first is processed first)
        for &child in vertex.children().iter().rev() {
            self.stack.push(child);
        }

        Some(vertex)
    }
}
