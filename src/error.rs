use thiserror::Error;

use crate::graph::{NodeId, Weight};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0:?} already exists")]
    DuplicateNode(String),

    #[error("node {0:?} not found")]
    NodeNotFound(String),

    #[error("node id {0} is out of range")]
    UnknownNode(NodeId),

    #[error("negative weight {weight} on edge {from} <-> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
