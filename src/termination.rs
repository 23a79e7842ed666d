//! Termination control: stopping conditions evaluated between node
//! evaluations.
//!
//! The controller is a stateless predicate over the current search state. A
//! worker polls it before claiming the next node, so a node evaluation is
//! never interrupted mid-branch and the node budget can never be exceeded.
//! Frontier exhaustion itself is not decided here; it is detected by worker
//! quiescence in the engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The stopping condition that ended the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier drained with every worker idle: the whole tree was
    /// enumerated or pruned, so the incumbent (or its absence) is proven.
    Exhausted,
    /// The optimality gap closed to within the configured tolerance.
    GapReached,
    /// The node budget ran out.
    NodeLimit,
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The frontier grew past the configured cap.
    FrontierLimit,
    /// The external cancellation token was observed.
    Cancelled,
}

impl TerminationReason {
    /// True iff the reason constitutes an optimality proof (possibly within
    /// the configured tolerance).
    pub fn is_proof(self) -> bool {
        matches!(self, Self::Exhausted | Self::GapReached)
    }
}

/// Budget part of the termination controller, built once per `solve` call.
pub(crate) struct Budget {
    deadline: Option<Instant>,
    max_nodes: Option<u64>,
    max_frontier: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Budget {
    pub(crate) fn new(
        start: Instant,
        time_limit: Option<Duration>,
        max_nodes: Option<u64>,
        max_frontier: Option<usize>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            deadline: time_limit.map(|limit| start + limit),
            max_nodes,
            max_frontier,
            cancel,
        }
    }

    /// Check all budgets; the declaration order fixes the precedence of the
    /// reported reason when several fire at once.
    pub(crate) fn check(&self, explored: u64, frontier_len: usize) -> Option<TerminationReason> {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Some(TerminationReason::Cancelled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(TerminationReason::TimeLimit);
            }
        }
        if let Some(max_nodes) = self.max_nodes {
            if explored >= max_nodes {
                return Some(TerminationReason::NodeLimit);
            }
        }
        if let Some(max_frontier) = self.max_frontier {
            if frontier_len >= max_frontier {
                return Some(TerminationReason::FrontierLimit);
            }
        }
        None
    }
}
