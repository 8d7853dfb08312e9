//! Data model for trees carrying polymorphic node data.
//!
//! # Node data
//! Every vertex of a [Tree] owns one `Box<dyn NodeData>`. The tree is
//! agnostic of the concrete data type; it only relies on the operations of
//! [NodeDataBase]:
//!
//! | Operation | Returns | Used for |
//! |-----------|---------|----------|
//! | [`T::create()`](NodeDataBase::create) | default `T` | Starting data of a known type |
//! | [`recreate()`](NodeDataBase::recreate) | default of the dynamic type | [`Tree::add_new_node`], [TreeBuilder] |
//! | [`clone_box()`](NodeDataBase::clone_box) / `clone()` | deep copy of the dynamic type | [`Tree::clone_subtree`], [`Tree::graft`], `Tree::clone` |
//!
//! Provided data types:
//! - [BaseNodeData]: no content
//! - [DefaultNodeData]: a name
//! - [AttributeNodeData]: a name plus key/value attributes
//!
//! Own data types only need `Debug + Default + Clone` and an
//! `impl NodeData`; see [node_data] for details.
//!
//! # Tree representation
//! [Tree] uses the arena pattern to store [Vertex] nodes, referenced by
//! [VertexIndex]. Trees are built with [Tree] methods directly or with a
//! [TreeBuilder].

pub mod attribute_node_data;
pub mod default_node_data;
pub mod node_data;
pub mod tree;
pub mod tree_builder;
pub mod tree_error;
pub mod vertex;

// Node data
pub use attribute_node_data::AttributeNodeData;
pub use default_node_data::DefaultNodeData;
pub use node_data::BaseNodeData;
pub use node_data::NodeData;
pub use node_data::NodeDataBase;
// Tree
pub use tree::Tree;
pub use tree::VertexIndex;
pub use tree_builder::TreeBuilder;
pub use tree_error::TreeError;
pub use tree_error::TreeResult;
pub use vertex::Vertex;
