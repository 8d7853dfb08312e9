//! Builder for assembling a [Tree] vertex by vertex.
//!
//! A [TreeBuilder] is configured with a *prototype* node data instance.
//! Vertices added without explicit data get a blank instance of the
//! prototype's dynamic type (via [recreate](crate::model::NodeDataBase::recreate)),
//! so the builder itself never needs to know which data type the tree carries.
//!
//! # Builder lifecycle
//! ```text
//! new()/for_data() ──→ with_* ──→ root()/root_with() ──→ child()/child_with() ──→ build()
//! ```
//!
//! # Example
//! ```
//! use treedata::model::{DefaultNodeData, TreeBuilder};
//!
//! let mut builder = TreeBuilder::for_data::<DefaultNodeData>().with_name("ratites");
//! let root = builder.root().unwrap();
//! let kiwi = builder.child_with(root, Box::new(DefaultNodeData::with_name("kiwi"))).unwrap();
//! let blank = builder.child(root).unwrap();
//! let tree = builder.build().unwrap();
//!
//! assert_eq!(tree.num_vertices(), 3);
//! assert_eq!(tree.data_as::<DefaultNodeData>(kiwi).unwrap().name, "kiwi");
//! assert!(!tree.data_as::<DefaultNodeData>(blank).unwrap().has_name());
//! ```

use crate::model::node_data::{BaseNodeData, NodeData};
use crate::model::tree::{Tree, VertexIndex};
use crate::model::tree_error::{TreeError, TreeResult};
use tracing::debug;

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Builder for [Tree], filling vertices with data modelled after a prototype.
#[derive(Debug)]
pub struct TreeBuilder {
    /// Data instance whose dynamic type is used for vertices without explicit data
    prototype: Box<dyn NodeData>,
    /// Tree under construction
    tree: Tree,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a builder whose default vertex data is [BaseNodeData].
    pub fn new() -> Self {
        TreeBuilder {
            prototype: Box::new(BaseNodeData),
            tree: Tree::new(),
        }
    }

    /// Creates a builder whose default vertex data is a default `T`.
    pub fn for_data<T: NodeData>() -> Self {
        Self::new().with_prototype(T::create())
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------
    /// Sets the prototype: vertices added without explicit data get a blank
    /// instance of the same dynamic type as `prototype`.
    /// The state of `prototype` is not copied.
    pub fn with_prototype(mut self, prototype: Box<dyn NodeData>) -> Self {
        self.prototype = prototype;
        self
    }

    /// Sets the name of the tree.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.tree.set_name(name);
        self
    }

    /// Reserves space for `num_vertices` vertices.
    ///
    /// Only has an effect before any vertex has been added.
    pub fn with_capacity(mut self, num_vertices: usize) -> Self {
        if self.tree.is_empty() {
            let name = self.tree.name().map(str::to_owned);
            self.tree = Tree::with_capacity(num_vertices);
            if let Some(name) = name {
                self.tree.set_name(name);
            }
        }
        self
    }

    // ------------------------------------------------------------------------
    // Building
    // ------------------------------------------------------------------------
    /// Adds the root with blank prototype data.
    ///
    /// # Errors
    /// [TreeError::RootAlreadySet] if a root has already been added.
    pub fn root(&mut self) -> TreeResult<VertexIndex> {
        let data = self.prototype.recreate();
        self.tree.add_root(data)
    }

    /// Adds the root with the given data.
    ///
    /// # Errors
    /// [TreeError::RootAlreadySet] if a root has already been added.
    pub fn root_with(&mut self, data: Box<dyn NodeData>) -> TreeResult<VertexIndex> {
        self.tree.add_root(data)
    }

    /// Adds a child of `parent` with blank prototype data.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `parent` has not been added.
    pub fn child(&mut self, parent: VertexIndex) -> TreeResult<VertexIndex> {
        let data = self.prototype.recreate();
        self.tree.add_child(parent, data)
    }

    /// Adds a child of `parent` with the given data.
    ///
    /// # Errors
    /// [TreeError::InvalidVertex] if `parent` has not been added.
    pub fn child_with(&mut self, parent: VertexIndex, data: Box<dyn NodeData>) -> TreeResult<VertexIndex> {
        self.tree.add_child(parent, data)
    }

    /// Returns the tree built so far.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Finishes construction.
    ///
    /// # Errors
    /// [TreeError::RootNotSet] if no root was added,
    /// [TreeError::IncompleteTree] if the tree is otherwise not valid.
    pub fn build(self) -> TreeResult<Tree> {
        if !self.tree.is_root_set() {
            return Err(TreeError::RootNotSet);
        }
        if !self.tree.is_valid() {
            return Err(TreeError::IncompleteTree);
        }

        debug!(
            num_vertices = self.tree.num_vertices(),
            data_type = self.prototype.type_name(),
            "Built tree"
        );
        Ok(self.tree)
    }
}
