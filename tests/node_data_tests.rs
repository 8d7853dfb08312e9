mod common;

use common::init_test_setup;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use treedata::model::{AttributeNodeData, BaseNodeData, DefaultNodeData, NodeData, NodeDataBase};

/// Node data type defined outside the crate, with mutable nested state.
#[derive(Debug, Default, Clone, PartialEq)]
struct TaxonData {
    name: String,
    rank: Option<String>,
    synonyms: Vec<String>,
}

impl NodeData for TaxonData {
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn taxon() -> TaxonData {
    TaxonData {
        name: "Apteryx mantelli".to_string(),
        rank: Some("species".to_string()),
        synonyms: vec!["Apteryx australis mantelli".to_string()],
    }
}

/// Observable state of node data, for comparing data of unknown type.
fn state(data: &dyn NodeData) -> String {
    format!("{:?}", data)
}

// ============= Create =============
#[test]
fn test_create_yields_exact_type() {
    init_test_setup();
    let base: Box<dyn NodeData> = BaseNodeData::create();
    let named: Box<dyn NodeData> = DefaultNodeData::create();
    let attributed: Box<dyn NodeData> = AttributeNodeData::create();
    let custom: Box<dyn NodeData> = TaxonData::create();

    assert!(base.is::<BaseNodeData>());
    assert!(named.is::<DefaultNodeData>());
    assert!(attributed.is::<AttributeNodeData>());
    assert!(custom.is::<TaxonData>());

    assert!(!named.is::<BaseNodeData>());
    assert!(!base.is::<DefaultNodeData>());
}

#[test]
fn test_create_is_default() {
    assert_eq!(*DefaultNodeData::create(), DefaultNodeData::default());
    assert_eq!(*TaxonData::create(), TaxonData::default());
}

// ============= Clone and Recreate =============
#[rstest]
#[case::base(Box::new(BaseNodeData))]
#[case::named(Box::new(DefaultNodeData::with_name("root")))]
#[case::attributed(Box::new(AttributeNodeData::with_name("kea").with_attribute("host", "alpine")))]
#[case::custom(Box::new(taxon()))]
fn test_clone_preserves_type_and_state(#[case] data: Box<dyn NodeData>) {
    init_test_setup();
    let copy = data.clone();
    assert_eq!(copy.type_name(), data.type_name());
    assert_eq!(state(&*copy), state(&*data));
}

#[rstest]
#[case::base(Box::new(BaseNodeData), Box::new(BaseNodeData))]
#[case::named(Box::new(DefaultNodeData::with_name("root")), Box::new(DefaultNodeData::default()))]
#[case::attributed(
    Box::new(AttributeNodeData::with_name("kea").with_attribute("host", "alpine")),
    Box::new(AttributeNodeData::default())
)]
#[case::custom(Box::new(taxon()), Box::new(TaxonData::default()))]
fn test_recreate_preserves_type_resets_state(
    #[case] data: Box<dyn NodeData>,
    #[case] expected: Box<dyn NodeData>,
) {
    init_test_setup();
    let blank = data.recreate();
    assert_eq!(blank.type_name(), data.type_name());
    assert_eq!(state(&*blank), state(&*expected));
}

#[rstest]
#[case::named(Box::new(DefaultNodeData::with_name("root")))]
#[case::custom(Box::new(taxon()))]
fn test_clone_twice_is_state_equal(#[case] data: Box<dyn NodeData>) {
    let once = data.clone();
    let twice = once.clone();
    assert_eq!(state(&*twice), state(&*once));
}

#[test]
fn test_base_and_named_scenario() {
    let base: Box<dyn NodeData> = BaseNodeData::create();
    let blank = base.recreate();
    assert_eq!(blank.downcast_ref::<BaseNodeData>(), Some(&BaseNodeData));

    let root: Box<dyn NodeData> = Box::new(DefaultNodeData::with_name("root"));
    let copy = root.clone();
    let blank = root.recreate();
    assert_eq!(copy.downcast_ref::<DefaultNodeData>().unwrap().name, "root");
    assert_eq!(blank.downcast_ref::<DefaultNodeData>().unwrap().name, "");
}

#[test]
fn test_clone_is_independent() {
    init_test_setup();
    let mut original: Box<dyn NodeData> = Box::new(taxon());
    let mut copy = original.clone();

    copy.downcast_mut::<TaxonData>().unwrap().synonyms.push("Apteryx bulleri".to_string());
    assert_eq!(original.downcast_ref::<TaxonData>().unwrap().synonyms.len(), 1);

    original.downcast_mut::<TaxonData>().unwrap().rank = None;
    assert_eq!(copy.downcast_ref::<TaxonData>().unwrap().rank.as_deref(), Some("species"));
}

#[test]
fn test_attribute_clone_is_deep() {
    let mut original = AttributeNodeData::with_name("kakapo").with_attribute("status", "critical");
    let copy: Box<dyn NodeData> = original.clone_box();

    original.set_attribute("status", "recovering");
    original.set_attribute("island", "Whenua Hou");

    let copy = copy.downcast::<AttributeNodeData>().unwrap();
    let expected = BTreeMap::from([("status".to_string(), "critical".to_string())]);
    assert_eq!(copy.attributes, expected);
    assert_eq!(original.attribute("status"), Some("recovering"));
}

// ============= Type inspection =============
#[test]
fn test_downcast_to_wrong_type_returns_data() {
    let data: Box<dyn NodeData> = Box::new(DefaultNodeData::with_name("takahe"));
    assert!(data.downcast_ref::<TaxonData>().is_none());

    let data = data.downcast::<AttributeNodeData>().unwrap_err();
    assert_eq!(data.label(), Some("takahe"));
}

#[test]
fn test_labels() {
    assert_eq!(BaseNodeData.label(), None);
    assert_eq!(DefaultNodeData::default().label(), None);
    assert_eq!(DefaultNodeData::with_name("weka").label(), Some("weka"));
    assert_eq!(AttributeNodeData::with_name("pukeko").label(), Some("pukeko"));
}

#[test]
fn test_node_data_is_send() {
    fn assert_send<T: Send>(_: &T) {}
    let data: Box<dyn NodeData> = Box::new(taxon());
    assert_send(&data);

    let copy = std::thread::spawn(move || data.clone()).join().unwrap();
    assert!(copy.is::<TaxonData>());
}

/// Node data with interior mutability, which is `Send` but not `Sync`.
#[derive(Debug, Default, Clone)]
struct VisitCounter {
    visits: Cell<u32>,
    notes: RefCell<Vec<String>>,
}

impl NodeData for VisitCounter {}

#[test]
fn test_interior_mutable_data() {
    let data: Box<dyn NodeData> = Box::new(VisitCounter::default());
    let counter = data.downcast_ref::<VisitCounter>().unwrap();
    counter.visits.set(2);
    counter.notes.borrow_mut().push("seen".to_string());

    let copy = data.clone();
    counter.visits.set(5);

    let copy = copy.downcast_ref::<VisitCounter>().unwrap();
    assert_eq!(copy.visits.get(), 2);
    assert_eq!(*copy.notes.borrow(), vec!["seen".to_string()]);
    assert!(data.recreate().downcast_ref::<VisitCounter>().unwrap().notes.borrow().is_empty());

    let moved = std::thread::spawn(move || data.type_name().to_string()).join().unwrap();
    assert!(moved.ends_with("VisitCounter"));
}
