use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown travel mode: {0}")]
    UnknownMode(String),
    #[error("Unknown ranking criterion: {0}")]
    UnknownCriterion(String),
    #[error("No coordinate known for node {node}; segment geometry cannot be resolved")]
    MissingCoordinate { node: NodeId },
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
