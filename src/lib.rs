//! Treedata is a library for attaching arbitrary, typed data to the vertices
//! of phylogenetic trees.
//!
//! The tree container is generic: it stores a `Box<dyn NodeData>` per vertex
//! and never needs to know the concrete data type. Still, operations that copy
//! or extend a tree keep the exact dynamic type of the data:
//! - Copying a tree or a subtree deep-copies each vertex's data.
//! - Adding a vertex next to an existing one fills it with blank data of the
//!   same kind as its neighbour.
//!
//! Core functionality provided:
//! - [NodeData] + [NodeDataBase]: the data contract with `create()`,
//!   `recreate()` and `clone_box()`/`clone()`, plus checked downcasts.
//! - Data types: [BaseNodeData] (empty), [DefaultNodeData] (name),
//!   [AttributeNodeData](model::AttributeNodeData) (name and attributes).
//! - [Tree]: arena-based rooted tree with subtree cloning, grafting and
//!   data conversion. See [crate::model] for more details.
//! - [TreeBuilder]: builds trees with data modelled after a prototype.
//!
//! Limitations:
//! - No edge data; only vertices carry data
//! - No reading or writing of tree files
//!
//! # Usage patterns
//!
//! ## Own data type
//! ```
//! use treedata::{NodeData, Tree};
//!
//! #[derive(Debug, Default, Clone)]
//! struct Support {
//!     posterior: f64,
//! }
//!
//! impl NodeData for Support {}
//!
//! let mut tree = Tree::new();
//! let root = tree.add_root(Box::new(Support { posterior: 1.0 }))?;
//! let child = tree.add_child(root, Box::new(Support { posterior: 0.87 }))?;
//! let blank = tree.add_new_node(child)?;
//!
//! let copy = tree.clone();
//! assert_eq!(copy.data_as::<Support>(child)?.posterior, 0.87);
//! assert_eq!(copy.data_as::<Support>(blank)?.posterior, 0.0);
//! # Ok::<(), treedata::TreeError>(())
//! ```
//!
//! ## Builder
//! ```
//! use treedata::{DefaultNodeData, TreeBuilder};
//!
//! let mut builder = TreeBuilder::for_data::<DefaultNodeData>();
//! let root = builder.root()?;
//! builder.child_with(root, Box::new(DefaultNodeData::with_name("Dinornis")))?;
//! builder.child_with(root, Box::new(DefaultNodeData::with_name("Emeus")))?;
//! let tree = builder.build()?;
//! assert_eq!(tree.num_leaves(), 2);
//! # Ok::<(), treedata::TreeError>(())
//! ```

pub mod model;

pub use crate::model::BaseNodeData;
pub use crate::model::DefaultNodeData;
pub use crate::model::NodeData;
pub use crate::model::NodeDataBase;
pub use crate::model::Tree;
pub use crate::model::TreeBuilder;
pub use crate::model::TreeError;
