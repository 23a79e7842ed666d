//! Search outcome: status, statistics and the optional per-node trace.

use std::fmt;
use std::time::Duration;

use itertools::Itertools;

use crate::node::NodeId;
use crate::problem::Value;
use crate::termination::TerminationReason;

/// Final classification of a search outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The incumbent is proven optimal (within the configured tolerance).
    Optimal,
    /// A feasible incumbent was found but the search stopped on a budget
    /// before proving it optimal.
    Feasible,
    /// No feasible solution exists (proven by exhaustion) or none was found
    /// before the search stopped.
    Infeasible,
    /// The external cancellation token stopped the search; any incumbent
    /// found is still returned.
    Cancelled,
}

/// Counters collected during the search.
///
/// In a multi-worker run the counters are exact but the attribution of an
/// individual node to a category depends on scheduling (a node pruned at pop
/// time in one run may be pruned at insertion in another).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Nodes popped from the frontier and evaluated.
    pub explored: u64,
    /// Nodes that were branched (expanded into children).
    pub branched: u64,
    /// Complete feasible nodes reached.
    pub completed: u64,
    /// Nodes discarded at pop time because their bound could no longer beat
    /// the incumbent.
    pub pruned_bound: u64,
    /// Children discarded at insertion for the same reason.
    pub pruned_insert: u64,
    /// Nodes discarded because their bound marked an infeasible subtree.
    pub pruned_infeasible: u64,
    /// Largest number of simultaneously open nodes.
    pub peak_frontier: usize,
    /// Wall-clock time spent in `solve`.
    pub elapsed: Duration,
}

impl Stats {
    /// Total nodes discarded without branching, over all prune categories.
    pub fn pruned(&self) -> u64 {
        self.pruned_bound + self.pruned_insert + self.pruned_infeasible
    }
}

/// Non-fatal conditions observed during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The worker pool could not be fully allocated; the search ran degraded
    /// on fewer threads instead of failing.
    WorkerSpawn { requested: usize, spawned: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerSpawn { requested, spawned } => write!(
                f,
                "worker pool allocation fell short: {spawned} of {requested} workers"
            ),
        }
    }
}

/// One evaluated node, as recorded when
/// [`Config::keep_trace`](crate::Config::keep_trace) is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord<T: Value> {
    /// Evaluated node.
    pub node: NodeId,
    /// Parent lookup key for path reconstruction (`None` for the root).
    pub parent: Option<NodeId>,
    /// Depth of the node in the search tree.
    pub depth: u32,
    /// Relaxation bound of the node, as computed at its creation.
    pub bound: T,
    /// How many nodes had been explored when this one was popped.
    pub explored: u64,
    /// Open nodes right after this one was popped.
    pub frontier: usize,
    /// Incumbent objective right after this node was evaluated.
    pub incumbent: Option<T>,
    /// Time since the search started.
    pub elapsed: Duration,
}

/// Per-node telemetry of a whole search.
///
/// Records are appended in evaluation order; with multiple workers that order
/// is a valid interleaving but not deterministic.
#[derive(Debug, Clone)]
pub struct SearchTrace<T: Value> {
    records: Vec<TraceRecord<T>>,
}

impl<T: Value> SearchTrace<T> {
    pub(crate) fn new(records: Vec<TraceRecord<T>>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TraceRecord<T>] {
        &self.records
    }

    /// The incumbent progression over the run, consecutive duplicates
    /// collapsed. Monotonically improving under the configured direction.
    pub fn incumbents(&self) -> Vec<T> {
        self.records
            .iter()
            .filter_map(|record| record.incumbent)
            .dedup_by(|x, y| x == y)
            .collect()
    }
}

/// Everything `solve` has to say about a finished search.
#[derive(Debug)]
pub struct SearchResult<S, T: Value> {
    /// Best complete feasible assignment found, if any.
    pub solution: Option<S>,
    /// Objective value of [`solution`](SearchResult::solution).
    pub objective: Option<T>,
    /// Outcome classification.
    pub status: Status,
    /// The stopping condition that ended the search.
    pub reason: TerminationReason,
    /// Final absolute optimality gap (zero when proven, infinite without an
    /// incumbent).
    pub abs_gap: T,
    /// Final relative optimality gap.
    pub rel_gap: T,
    /// Search counters.
    pub stats: Stats,
    /// Non-fatal conditions, e.g. a degraded worker pool.
    pub warnings: Vec<Warning>,
    /// Per-node telemetry, present iff requested in the configuration.
    pub trace: Option<SearchTrace<T>>,
}

impl<S, T: Value> SearchResult<S, T> {
    /// True iff the returned incumbent is proven optimal.
    pub fn proved_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}
