//! Named node data, the payload most trees need.

use crate::model::node_data::NodeData;

// =#========================================================================#=
// DEFAULT NODE DATA
// =#========================================================================#=
/// Node data holding a name, e.g. the taxon label of a leaf
/// or the clade name of an internal vertex.
///
/// # Example
/// ```
/// use treedata::model::{DefaultNodeData, NodeData, NodeDataBase};
///
/// let data: Box<dyn NodeData> = Box::new(DefaultNodeData::with_name("Apteryx haastii"));
/// let copy = data.clone();
/// let blank = data.recreate();
///
/// assert_eq!(copy.label(), Some("Apteryx haastii"));
/// assert_eq!(blank.downcast_ref::<DefaultNodeData>().unwrap().name, "");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefaultNodeData {
    /// Name of the vertex; empty if unnamed
    pub name: String,
}

impl DefaultNodeData {
    /// Creates node data with the given name.
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        DefaultNodeData { name: name.into() }
    }

    /// Returns whether a non-empty name is set.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl NodeData for DefaultNodeData {
    fn label(&self) -> Option<&str> {
        if self.has_name() {
            Some(&self.name)
        } else {
            None
        }
    }
}
