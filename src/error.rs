use thiserror::Error;

use crate::node::NodeId;

/// Modeling faults: violations of the [`Problem`](crate::Problem) contract.
///
/// A fault means the admissibility or completeness preconditions are already
/// broken, so no partial result can be trusted: `solve` aborts immediately
/// with `Err` instead of returning a half-labeled incumbent. Budget
/// exhaustion and cancellation are *not* faults; they produce a regular,
/// clearly labeled [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// `branch` returned no children for a node that is not complete.
    #[error("branching produced no children for incomplete node {id} at depth {depth}")]
    EmptyBranch { id: NodeId, depth: u32 },

    /// `bound` evaluated to NaN.
    #[error("bound is NaN for node {id} at depth {depth}")]
    InvalidBound { id: NodeId, depth: u32 },

    /// `objective` evaluated to NaN for a complete node.
    #[error("objective is NaN for complete node {id} at depth {depth}")]
    InvalidObjective { id: NodeId, depth: u32 },
}
