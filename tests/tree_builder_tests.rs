mod common;

use common::init_test_setup;
use treedata::model::{AttributeNodeData, BaseNodeData, DefaultNodeData, TreeBuilder, TreeError};

#[test]
fn test_default_builder_uses_base_data() {
    init_test_setup();
    let mut builder = TreeBuilder::new();
    let root = builder.root().unwrap();
    builder.child(root).unwrap();
    builder.child(root).unwrap();
    let tree = builder.build().unwrap();

    assert_eq!(tree.num_leaves(), 2);
    assert!(tree.vertices().iter().all(|v| v.data().is::<BaseNodeData>()));
}

#[test]
fn test_prototype_state_is_not_copied() {
    init_test_setup();
    let prototype = AttributeNodeData::with_name("template").with_attribute("k", "v");
    let mut builder = TreeBuilder::new()
        .with_prototype(Box::new(prototype))
        .with_name("tinamous")
        .with_capacity(4);

    let root = builder.root().unwrap();
    let child = builder.child(root).unwrap();
    let tree = builder.build().unwrap();

    assert_eq!(tree.name(), Some("tinamous"));
    assert_eq!(tree.data_as::<AttributeNodeData>(child).unwrap(), &AttributeNodeData::default());
}

#[test]
fn test_explicit_data_overrides_prototype() {
    let mut builder = TreeBuilder::for_data::<DefaultNodeData>();
    let root = builder.root_with(Box::new(BaseNodeData)).unwrap();
    let named = builder.child_with(root, Box::new(DefaultNodeData::with_name("Tinamus"))).unwrap();
    let blank = builder.child(root).unwrap();
    let tree = builder.build().unwrap();

    assert!(tree.data(root).unwrap().is::<BaseNodeData>());
    assert_eq!(tree.data_as::<DefaultNodeData>(named).unwrap().name, "Tinamus");
    assert!(!tree.data_as::<DefaultNodeData>(blank).unwrap().has_name());
}

#[test]
fn test_builder_errors() {
    let mut builder = TreeBuilder::new();
    assert_eq!(builder.child(0), Err(TreeError::InvalidVertex(0)));
    builder.root().unwrap();
    assert_eq!(builder.root(), Err(TreeError::RootAlreadySet));
    assert_eq!(builder.tree().num_vertices(), 1);
}
