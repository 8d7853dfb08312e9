//! Error type for tree construction and typed data access.

use crate::model::tree::VertexIndex;
use thiserror::Error;

/// Errors that can occur when building or querying a [Tree](crate::model::Tree).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("No vertex with index {0}")]
    InvalidVertex(VertexIndex),

    #[error("Tree already has a root")]
    RootAlreadySet,

    #[error("Tree has no root")]
    RootNotSet,

    #[error("Data of vertex {index} is {found}, not {expected}")]
    DataTypeMismatch {
        index: VertexIndex,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Tree structure is incomplete or inconsistent")]
    IncompleteTree,
}

pub type TreeResult<T> = Result<T, TreeError>;
