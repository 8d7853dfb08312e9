//! Polymorphic data attached to the vertices of a [Tree](crate::model::Tree).
//!
//! A tree does not know which kind of data its vertices carry. Each vertex
//! owns exactly one `Box<dyn NodeData>`, and all generic tree code (copying
//! subtrees, adding vertices next to existing ones) only ever sees
//! `&dyn NodeData`. The [NodeDataBase] operations give such code access to
//! what a constructor and a copy constructor would provide for a known type:
//! - [`create()`](NodeDataBase::create) - default instance of a named type
//! - [`recreate()`](NodeDataBase::recreate) - default instance of the *dynamic* type
//! - [`clone_box()`](NodeDataBase::clone_box) - deep copy preserving the *dynamic* type
//!   (also available as `clone()` on `Box<dyn NodeData>`)
//!
//! # Implementing your own node data
//! Derive (or implement) [Default], [Clone] and [Debug], then implement the
//! (possibly empty) [NodeData] trait:
//! ```
//! use treedata::model::{NodeData, NodeDataBase};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct TaxonData {
//!     taxon: String,
//! }
//!
//! impl NodeData for TaxonData {}
//!
//! let data: Box<dyn NodeData> = Box::new(TaxonData { taxon: "Apteryx".into() });
//! let blank = data.recreate();
//! assert_eq!(blank.downcast_ref::<TaxonData>(), Some(&TaxonData::default()));
//! ```
//!
//! [NodeDataBase] is sealed and never implemented by hand. It is provided by
//! a blanket implementation for every `NodeData + Default + Clone` type, so
//! every variant gets `recreate` and `clone_box` returning its own type, and a
//! variant that is not `Default + Clone` does not compile.

use std::any::Any;
use std::fmt::Debug;

// =#========================================================================#=
// NODE DATA
// =#========================================================================#=
/// Data stored on a vertex of a [Tree](crate::model::Tree).
///
/// Vertices hold node data by `Box<dyn NodeData>`, so use it as trait object.
/// The trait itself only carries optional presentation hooks; the
/// construction and copy operations come from the [NodeDataBase] supertrait.
///
/// See [BaseNodeData] for the empty base variant and
/// [DefaultNodeData](crate::model::DefaultNodeData) for a named one.
/// Node data must be `Send` so that trees can move between threads. It need
/// not be `Sync`; callers sharing one instance serialise access themselves.
pub trait NodeData: NodeDataBase + Debug + Send {
    /// Returns a short label for displaying this data, if it has one.
    ///
    /// Used when rendering trees. Default: `None`.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// Construction, copying and type inspection for [NodeData].
///
/// Implemented automatically for every `T: NodeData + Default + Clone`.
/// The trait is sealed, so it cannot be implemented by hand.
///
/// A node data type that is not [Clone] (or not [Default]) is rejected:
/// ```compile_fail
/// use treedata::model::NodeData;
///
/// #[derive(Debug, Default)]
/// struct NoClone;
///
/// impl NodeData for NoClone {}
/// ```
///
/// So is a hand-written implementation, e.g. one whose `recreate` returns
/// another type:
/// ```compile_fail
/// use std::any::Any;
/// use treedata::model::{BaseNodeData, NodeData, NodeDataBase};
///
/// #[derive(Debug)]
/// struct Narrow;
///
/// impl NodeDataBase for Narrow {
///     fn create() -> Box<Self> { Box::new(Narrow) }
///     fn recreate(&self) -> Box<dyn NodeData> { Box::new(BaseNodeData) }
///     fn clone_box(&self) -> Box<dyn NodeData> { Box::new(BaseNodeData) }
///     fn type_name(&self) -> &'static str { "Narrow" }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
///     fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
/// }
///
/// impl NodeData for Narrow {}
/// ```
pub trait NodeDataBase: Any + private::Sealed {
    /// Creates a new default instance of this type. Use instead of
    /// [Default::default] when writing code generic over node data.
    fn create() -> Box<Self>
    where
        Self: Sized;

    /// Creates a default instance of the same dynamic type as `self`.
    ///
    /// The state of `self` is ignored. Allows generic tree code to produce
    /// blank data of the right kind for a new vertex, e.g. the same kind as
    /// that of a neighbouring vertex.
    fn recreate(&self) -> Box<dyn NodeData>;

    /// Creates a deep copy of `self`, preserving its dynamic type and state.
    fn clone_box(&self) -> Box<dyn NodeData>;

    /// Returns the name of the concrete type of this data.
    fn type_name(&self) -> &'static str;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;

    #[doc(hidden)]
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> NodeDataBase for T
where
    T: NodeData + Default + Clone + 'static,
{
    fn create() -> Box<Self> {
        Box::new(T::default())
    }

    fn recreate(&self) -> Box<dyn NodeData> {
        Box::new(T::default())
    }

    fn clone_box(&self) -> Box<dyn NodeData> {
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

mod private {
    /// Restricts [NodeDataBase](super::NodeDataBase) to the blanket implementation.
    pub trait Sealed {}

    impl<T: super::NodeData + Default + Clone + 'static> Sealed for T {}
}

impl Clone for Box<dyn NodeData> {
    /// Polymorphic deep copy, see [NodeDataBase::clone_box].
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

// ============================================================================
// Type inspection (pub)
// ============================================================================
impl<'a> dyn NodeData + 'a {
    /// Returns `true` if the dynamic type of this data is `T`.
    pub fn is<T: NodeData>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the data as `T`, or `None` if it is of another type.
    pub fn downcast_ref<T: NodeData>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns a mutable reference to the data as `T`, or `None` if it is of another type.
    pub fn downcast_mut<T: NodeData>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl dyn NodeData {
    /// Converts the owning handle into a handle of the concrete type `T`.
    ///
    /// # Returns
    /// The typed box, or the unchanged handle as `Err` if the data is not a `T`.
    pub fn downcast<T: NodeData>(self: Box<Self>) -> Result<Box<T>, Box<dyn NodeData>> {
        if !self.is::<T>() {
            return Err(self);
        }
        // as_any and into_any expose the same value, since NodeDataBase is sealed
        self.into_any()
            .downcast::<T>()
            .map_err(|_| unreachable!("dynamic type checked above"))
    }
}

// =#========================================================================#=
// BASE NODE DATA
// =#========================================================================#=
/// Node data without any content.
///
/// Used for trees that only need topology, and as the fallback payload
/// where no other data is given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseNodeData;

impl NodeData for BaseNodeData {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter {
        count: u32,
    }

    impl NodeData for Counter {}

    #[test]
    fn test_base_create_recreate_clone() {
        let data: Box<dyn NodeData> = BaseNodeData::create();
        assert!(data.is::<BaseNodeData>());
        assert!(data.recreate().is::<BaseNodeData>());
        assert!(data.clone().is::<BaseNodeData>());
    }

    #[test]
    fn test_recreate_ignores_state() {
        let data: Box<dyn NodeData> = Box::new(Counter { count: 7 });
        let blank = data.recreate();
        assert_eq!(blank.downcast_ref::<Counter>(), Some(&Counter { count: 0 }));
    }

    #[test]
    fn test_downcast_mismatch_returns_handle() {
        let data: Box<dyn NodeData> = Box::new(Counter { count: 3 });
        let data = data.downcast::<BaseNodeData>().unwrap_err();
        let counter = data.downcast::<Counter>().unwrap();
        assert_eq!(counter.count, 3);
    }

    #[test]
    fn test_type_name() {
        let data: Box<dyn NodeData> = Box::new(BaseNodeData);
        assert!(data.type_name().ends_with("BaseNodeData"));
    }
}
