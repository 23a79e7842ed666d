//! # Search engine
//! Drives the branch-and-bound loop: pop a node per the strategy ordering,
//! evaluate it against the incumbent, branch survivors and push their
//! children back onto the frontier.
//!
//! ## Concurrency model
//! A fixed pool of workers shares one frontier and one incumbent, both scoped
//! to the `solve` call. Frontier access and node-budget accounting live under
//! a single mutex, so pop/push are serialized and the explored-node count can
//! never overshoot the budget. Incumbent commits re-check improvement at
//! commit time (the lock order is always frontier before incumbent).
//!
//! A worker finding the frontier empty parks on a condvar; the last worker to
//! go idle declares exhaustion and wakes the rest (quiescence detection), so
//! the engine never shuts down while a sibling is still mid-branch. Budgets
//! and the cancellation token are polled between node evaluations only; a
//! `branch` call is never interrupted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::Instant;

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use tracing::{debug, info, trace, warn};

use crate::config::{Config, Direction};
use crate::error::ModelError;
use crate::frontier::Frontier;
use crate::incumbent::Incumbent;
use crate::node::{Node, NodeId};
use crate::problem::Problem;
use crate::prune::{self, Tolerance};
use crate::result::{SearchResult, SearchTrace, Stats, Status, TraceRecord, Warning};
use crate::termination::{Budget, TerminationReason};

/// Run branch-and-bound on `problem` starting from the partial assignment
/// `root`.
///
/// Returns `Err` only on a [`ModelError`] (a broken `Problem` contract);
/// budget exhaustion and cancellation yield a regular [`SearchResult`] with
/// the corresponding [`Status`] and [`TerminationReason`]. Run to natural
/// exhaustion with an admissible bound and complete branching, the returned
/// incumbent is a global optimum.
///
/// Each call owns an isolated frontier and incumbent, so independent searches
/// may run concurrently in one process.
pub fn solve<P>(
    problem: &P,
    root: P::State,
    config: &Config<P::Value>,
) -> Result<SearchResult<P::State, P::Value>, ModelError>
where
    P: Problem + Sync,
    P::State: Send,
{
    let start = Instant::now();
    let workers = config.workers.max(1);
    info!(
        strategy = ?config.strategy,
        direction = ?config.direction,
        workers,
        "starting branch-and-bound search"
    );

    let root_bound = OrderedFloat(problem.bound(&root));
    if root_bound.into_inner().is_nan() {
        return Err(ModelError::InvalidBound {
            id: NodeId(0),
            depth: 0,
        });
    }

    let mut frontier = Frontier::new(config.strategy, config.direction);
    frontier.push(Node::root(root_bound, root));

    let shared = Shared {
        problem,
        direction: config.direction,
        tolerance: Tolerance::new(config.abs_tol, config.rel_tol),
        budget: Budget::new(
            start,
            config.time_limit,
            config.max_nodes,
            config.max_frontier,
            config.cancel.clone(),
        ),
        start,
        state: Mutex::new(SearchState {
            frontier,
            idle: 0,
            // pessimistic until the pool is up, so that no worker can declare
            // exhaustion against a partially spawned pool
            workers: usize::MAX,
            stop: None,
            fault: None,
            stats: Stats {
                peak_frontier: 1,
                ..Stats::default()
            },
        }),
        work: Condvar::new(),
        incumbent: Incumbent::new(config.direction),
        next_id: AtomicU64::new(1),
        trace: config.keep_trace.then(|| Mutex::new(Vec::new())),
    };

    let mut warnings = Vec::new();
    if workers == 1 {
        shared.lock_state().workers = 1;
        shared.run_worker();
    } else {
        thread::scope(|scope| {
            let mut spawned = 0;
            for i in 1..workers {
                let builder = thread::Builder::new().name(format!("bnb-worker-{i}"));
                match builder.spawn_scoped(scope, || shared.run_worker()) {
                    Ok(_) => spawned += 1,
                    Err(error) => {
                        warn!(%error, "failed to spawn worker thread, degrading");
                        break;
                    }
                }
            }
            if spawned + 1 < workers {
                warnings.push(Warning::WorkerSpawn {
                    requested: workers,
                    spawned: spawned + 1,
                });
            }
            shared.lock_state().workers = spawned + 1;
            shared.work.notify_all();
            shared.run_worker();
        });
    }

    let Shared {
        state,
        incumbent,
        trace,
        ..
    } = shared;
    let state = state.into_inner().expect("search state lock poisoned");
    if let Some(fault) = state.fault {
        return Err(fault);
    }

    let reason = state.stop.unwrap_or(TerminationReason::Exhausted);
    let mut stats = state.stats;
    stats.elapsed = start.elapsed();

    let incumbent = incumbent.into_parts();
    let zero = P::Value::zero();
    let (abs_gap, rel_gap) = match &incumbent {
        // no incumbent: nothing is proven about the remaining tree
        None => (P::Value::infinity(), P::Value::infinity()),
        Some((_, value)) => match state.frontier.best_bound() {
            None => (zero, zero),
            Some(bound) => {
                let (abs, rel) = prune::gaps(*value, bound, config.direction);
                (Float::max(abs, zero), Float::max(rel, zero))
            }
        },
    };

    let status = match (reason, &incumbent) {
        (TerminationReason::Cancelled, _) => Status::Cancelled,
        (reason, Some(_)) if reason.is_proof() => Status::Optimal,
        (_, Some(_)) => Status::Feasible,
        (_, None) => Status::Infeasible,
    };

    info!(
        ?status,
        ?reason,
        explored = stats.explored,
        pruned = stats.pruned(),
        elapsed = ?stats.elapsed,
        "search finished"
    );

    Ok(SearchResult {
        objective: incumbent.as_ref().map(|(_, value)| value.into_inner()),
        solution: incumbent.map(|(state, _)| state),
        status,
        reason,
        abs_gap,
        rel_gap,
        stats,
        warnings,
        trace: trace.map(|records| {
            SearchTrace::new(records.into_inner().expect("trace lock poisoned"))
        }),
    })
}

/// State shared by all workers of one `solve` call.
struct Shared<'a, P: Problem> {
    problem: &'a P,
    direction: Direction,
    tolerance: Tolerance<P::Value>,
    budget: Budget,
    start: Instant,
    state: Mutex<SearchState<P::State, P::Value>>,
    work: Condvar,
    incumbent: Incumbent<P::State, P::Value>,
    next_id: AtomicU64,
    trace: Option<Mutex<Vec<TraceRecord<P::Value>>>>,
}

/// Everything guarded by the frontier mutex.
struct SearchState<S, T: crate::problem::Value> {
    frontier: Frontier<S, T>,
    idle: usize,
    workers: usize,
    stop: Option<TerminationReason>,
    fault: Option<ModelError>,
    stats: Stats,
}

/// A claimed node together with the counters observed at pop time.
struct Popped<S, T: crate::problem::Value> {
    node: Node<S, T>,
    explored: u64,
    open: usize,
}

impl<P: Problem> Shared<'_, P> {
    fn run_worker(&self) {
        while let Some(popped) = self.next_node() {
            self.evaluate(popped);
        }
    }

    /// Claim the next open node, or `None` once the search is over.
    ///
    /// Stopping conditions are evaluated before a node is claimed, so a
    /// worker is never interrupted mid-evaluation and `stats.explored` stays
    /// within the node budget.
    fn next_node(&self) -> Option<Popped<P::State, P::Value>> {
        let mut state = self.lock_state();
        loop {
            if state.stop.is_some() || state.fault.is_some() {
                return None;
            }
            if let Some(reason) = self
                .budget
                .check(state.stats.explored, state.frontier.len())
            {
                debug!(?reason, "stopping: budget exhausted or cancelled");
                state.stop = Some(reason);
                self.work.notify_all();
                return None;
            }
            if let Some(reason) = self.gap_reached(&state) {
                debug!(?reason, "stopping: optimality gap within tolerance");
                state.stop = Some(reason);
                self.work.notify_all();
                return None;
            }
            if let Some(node) = state.frontier.pop() {
                state.stats.explored += 1;
                return Some(Popped {
                    explored: state.stats.explored,
                    open: state.frontier.len(),
                    node,
                });
            }
            state.idle += 1;
            if state.idle == state.workers {
                // quiescence: frontier empty and every worker idle
                state.stop = Some(TerminationReason::Exhausted);
                self.work.notify_all();
                return None;
            }
            state = self.work.wait(state).expect("search state lock poisoned");
            state.idle -= 1;
        }
    }

    fn evaluate(&self, popped: Popped<P::State, P::Value>) {
        let Popped {
            node,
            explored,
            open,
        } = popped;
        let (id, parent, depth, bound) = (node.id, node.parent, node.depth, node.bound);

        if self.problem.is_complete(&node.state) {
            // complete nodes are terminal: evaluate, never branch
            let value = OrderedFloat(self.problem.objective(&node.state));
            if value.into_inner().is_nan() {
                self.fail(ModelError::InvalidObjective { id, depth });
                return;
            }
            if self.incumbent.try_install(node.state, value) {
                debug!(node = %id, value = ?value.into_inner(), "new incumbent");
            }
            self.tally(|stats| stats.completed += 1);
        } else if prune::is_infeasible(bound, self.direction) {
            trace!(node = %id, "pruned: infeasible subtree");
            self.tally(|stats| stats.pruned_infeasible += 1);
        } else if self.prunable(bound) {
            // the incumbent may have improved since this node was pushed
            trace!(node = %id, "pruned: bound cannot beat incumbent");
            self.tally(|stats| stats.pruned_bound += 1);
        } else {
            self.branch(&node);
        }

        if let Some(records) = &self.trace {
            let record = TraceRecord {
                node: id,
                parent,
                depth,
                bound: bound.into_inner(),
                explored,
                frontier: open,
                incumbent: self.incumbent.value().map(OrderedFloat::into_inner),
                elapsed: self.start.elapsed(),
            };
            records.lock().expect("trace lock poisoned").push(record);
        }
    }

    /// Expand `node` and push the children that survive the insertion-time
    /// prune check.
    fn branch(&self, node: &Node<P::State, P::Value>) {
        let children = self.problem.branch(&node.state);
        if children.is_empty() {
            self.fail(ModelError::EmptyBranch {
                id: node.id,
                depth: node.depth,
            });
            return;
        }

        let incumbent = self.incumbent.value();
        let mut batch = Vec::with_capacity(children.len());
        let mut pruned_insert = 0;
        let mut pruned_infeasible = 0;
        for child in children {
            let child_id = NodeId(self.next_id.fetch_add(1, Ordering::Relaxed));
            let child_bound = OrderedFloat(self.problem.bound(&child));
            if child_bound.into_inner().is_nan() {
                self.fail(ModelError::InvalidBound {
                    id: child_id,
                    depth: node.depth + 1,
                });
                return;
            }
            if prune::is_infeasible(child_bound, self.direction) {
                pruned_infeasible += 1;
            } else if incumbent.is_some_and(|current| {
                prune::should_prune(child_bound, current, self.direction, self.tolerance)
            }) {
                pruned_insert += 1;
            } else {
                batch.push(node.child(child_id, child_bound, child));
            }
        }
        trace!(
            node = %node.id,
            pushed = batch.len(),
            pruned = pruned_insert + pruned_infeasible,
            "branched"
        );

        let pushed = batch.len();
        {
            let mut state = self.lock_state();
            state.stats.branched += 1;
            state.stats.pruned_insert += pruned_insert;
            state.stats.pruned_infeasible += pruned_infeasible;
            for child in batch {
                state.frontier.push(child);
            }
            state.stats.peak_frontier = state.stats.peak_frontier.max(state.frontier.len());
        }
        match pushed {
            0 => {}
            1 => self.work.notify_one(),
            _ => self.work.notify_all(),
        }
    }

    fn gap_reached(
        &self,
        state: &SearchState<P::State, P::Value>,
    ) -> Option<TerminationReason> {
        let incumbent = self.incumbent.value()?;
        let bound = state.frontier.best_bound()?;
        let (abs, rel) = prune::gaps(incumbent, bound, self.direction);
        (abs <= self.tolerance.abs || rel <= self.tolerance.rel)
            .then_some(TerminationReason::GapReached)
    }

    /// Lazy prune check against the incumbent current right now.
    fn prunable(&self, bound: OrderedFloat<P::Value>) -> bool {
        self.incumbent.value().is_some_and(|current| {
            prune::should_prune(bound, current, self.direction, self.tolerance)
        })
    }

    /// Record the first modeling fault and wake everyone up to abort.
    fn fail(&self, error: ModelError) {
        let mut state = self.lock_state();
        state.fault.get_or_insert(error);
        self.work.notify_all();
    }

    fn tally(&self, update: impl FnOnce(&mut Stats)) {
        update(&mut self.lock_state().stats);
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState<P::State, P::Value>> {
        self.state.lock().expect("search state lock poisoned")
    }
}
