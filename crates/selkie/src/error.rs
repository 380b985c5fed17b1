//! Contract violations detected before positioning starts.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidGraph {
    #[error("node {id} has no rank")]
    MissingRank { id: String },

    #[error("node {id} has no order")]
    MissingOrder { id: String },

    #[error("node {id} has order {order} but sits at position {position} of its layer")]
    OrderMismatch {
        id: String,
        order: usize,
        position: usize,
    },

    #[error("separations must be finite and non-negative: nodesep={nodesep}, edgesep={edgesep}")]
    InvalidSeparation { nodesep: f64, edgesep: f64 },
}

pub type Result<T> = std::result::Result<T, InvalidGraph>;
