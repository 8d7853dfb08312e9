//! Named node data with free-form key/value attributes.

use crate::model::node_data::NodeData;
use std::collections::BTreeMap;

// =#========================================================================#=
// ATTRIBUTE NODE DATA
// =#========================================================================#=
/// Node data holding a name together with string attributes,
/// e.g. values read from comments such as `[&rate=0.5,host=ferret]`.
///
/// Attributes are ordered by key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeNodeData {
    /// Name of the vertex; empty if unnamed
    pub name: String,
    /// Attributes by key
    pub attributes: BTreeMap<String, String>,
}

impl AttributeNodeData {
    /// Creates attribute data with the given name and no attributes.
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        AttributeNodeData {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets an attribute, returning the previous value for `key` if there was one.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Returns the value of an attribute, or `None` if not set.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl NodeData for AttributeNodeData {
    fn label(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}
