//! Per-call search configuration.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use ordered_float::OrderedFloat;

use crate::problem::Value;

/// Frontier exploration order, fixed for the whole `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// LIFO frontier. Memory-bounded, finds feasible solutions early, weak
    /// global bound progress.
    DepthFirst,
    /// FIFO frontier. Exhaustive and fair but memory-heavy (the width grows
    /// with depth).
    BreadthFirst,
    /// Bound-priority frontier, ties broken by greater depth to prefer
    /// more-determined nodes. Strongest node-count bound, highest peak
    /// memory.
    BestFirst,
}

/// Optimization sense of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// True iff `candidate` strictly improves on `current`.
    pub(crate) fn improves<T: Value>(
        self,
        candidate: OrderedFloat<T>,
        current: OrderedFloat<T>,
    ) -> bool {
        match self {
            Self::Minimize => candidate < current,
            Self::Maximize => candidate > current,
        }
    }

    /// Heap priority of a bound: lower is more promising in both directions.
    pub(crate) fn priority<T: Value>(self, bound: OrderedFloat<T>) -> OrderedFloat<T> {
        match self {
            Self::Minimize => bound,
            Self::Maximize => -bound,
        }
    }

    /// The worst representable value: the bound of an infeasible subtree.
    pub(crate) fn worst<T: Value>(self) -> OrderedFloat<T> {
        match self {
            Self::Minimize => OrderedFloat(T::infinity()),
            Self::Maximize => OrderedFloat(T::neg_infinity()),
        }
    }
}

/// Configuration consumed by [`solve`](crate::solve).
///
/// Defaults to a single-threaded, best-first, minimizing search with zero
/// optimality tolerance and no budget. Fields compose through `with_*`
/// builders:
///
/// ```
/// use std::time::Duration;
/// use bnb::{Config, Direction, Strategy};
///
/// let config: Config<f64> = Config::default()
///     .with_strategy(Strategy::DepthFirst)
///     .with_direction(Direction::Maximize)
///     .with_time_limit(Duration::from_secs(30))
///     .with_workers(4);
/// ```
#[derive(Debug, Clone)]
pub struct Config<T: Value> {
    /// Frontier ordering policy.
    pub strategy: Strategy,
    /// Optimization sense.
    pub direction: Direction,
    /// Absolute optimality tolerance (`>= 0`; negatives are treated as zero).
    pub abs_tol: T,
    /// Relative optimality tolerance (`>= 0`; negatives are treated as zero).
    pub rel_tol: T,
    /// Node budget: stop once this many nodes have been explored.
    pub max_nodes: Option<u64>,
    /// Wall-clock budget.
    pub time_limit: Option<Duration>,
    /// Frontier size cap: stop once this many nodes are open at once.
    pub max_frontier: Option<usize>,
    /// Worker thread count (`>= 1`; `1` runs on the caller's thread).
    pub workers: usize,
    /// Record a per-node [`SearchTrace`](crate::SearchTrace) in the result.
    pub keep_trace: bool,
    /// External cancellation token, polled between node evaluations.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl<T: Value> Default for Config<T> {
    fn default() -> Self {
        Self {
            strategy: Strategy::BestFirst,
            direction: Direction::Minimize,
            abs_tol: T::zero(),
            rel_tol: T::zero(),
            max_nodes: None,
            time_limit: None,
            max_frontier: None,
            workers: 1,
            keep_trace: false,
            cancel: None,
        }
    }
}

impl<T: Value> Config<T> {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_abs_tol(mut self, tol: T) -> Self {
        self.abs_tol = tol;
        self
    }

    pub fn with_rel_tol(mut self, tol: T) -> Self {
        self.rel_tol = tol;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_max_frontier(mut self, max_frontier: usize) -> Self {
        self.max_frontier = Some(max_frontier);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_trace(mut self) -> Self {
        self.keep_trace = true;
        self
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}
