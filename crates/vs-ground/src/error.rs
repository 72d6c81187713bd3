//! Ground-subsystem error type.

use thiserror::Error;

use vs_core::NodeId;

/// Errors produced by `vs-ground`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroundError {
    #[error("no ground route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in layout")]
    NodeNotFound(NodeId),

    #[error("no node named {0:?}")]
    UnknownNode(String),

    #[error("node name {0:?} defined twice")]
    DuplicateNode(String),

    #[error("layout has no {0} pad")]
    MissingPad(&'static str),

    #[error("gate node {0} is invalid or listed twice")]
    InvalidGate(NodeId),
}

pub type GroundResult<T> = Result<T, GroundError>;
