//! # Problem contract
//! This module defines the interface between the search core and a concrete
//! optimization problem. The engine is fully generic: it never inspects a
//! partial assignment, it only asks the model to bound it, branch on it, or
//! evaluate it.
//!
//! ## Correctness preconditions
//! Two properties of a model are *preconditions* for the optimality guarantee
//! of [`solve`](crate::solve) and cannot be verified by the core at runtime:
//!
//!  1. **Admissibility** — [`bound`](Problem::bound) must never be worse than
//!     the true optimum reachable from the given state (never greater under
//!     [`Minimize`](crate::Direction::Minimize), never smaller under
//!     [`Maximize`](crate::Direction::Maximize)). Pruning against an
//!     inadmissible bound may discard the optimum.
//!  2. **Completeness** — the children returned by
//!     [`branch`](Problem::branch) must cover the parent's remaining decision
//!     space with no omission. Overlap between children is allowed, but
//!     deduplication is then the model's responsibility, not the core's.

use std::fmt::Debug;

use num_traits::Float;

/// Numeric type of bounds and objective values.
///
/// Blanket-implemented for every totally orderable float (notably `f32` and
/// `f64`) that can be shared across worker threads.
pub trait Value: Float + Debug + Send + Sync {}

impl<T> Value for T where T: Float + Debug + Send + Sync {}

/// A combinatorial optimization problem pluggable into the engine.
///
/// [`State`](Problem::State) is the problem-specific encoding of a partial
/// assignment (fixed and undetermined decisions). It is opaque to the core
/// and needs no `Clone`: every state is produced once by [`branch`] and moved
/// into exactly one tree node.
///
/// [`branch`]: Problem::branch
pub trait Problem {
    /// Partial assignment encoding.
    type State;

    /// Bound and objective value type.
    type Value: Value;

    /// Admissible relaxation bound on the best objective reachable from
    /// `state`.
    ///
    /// Return the worst infinity of the configured direction (`+inf` when
    /// minimizing, `-inf` when maximizing) for a state whose subtree contains
    /// no feasible solution at all; such nodes are discarded without
    /// branching. `NaN` is a modeling fault and aborts the search.
    fn bound(&self, state: &Self::State) -> Self::Value;

    /// Split an incomplete `state` into child states.
    ///
    /// Must return a finite, non-empty sequence for every state where
    /// [`is_complete`](Problem::is_complete) is `false`; an empty sequence is
    /// reported as [`ModelError::EmptyBranch`](crate::ModelError::EmptyBranch).
    fn branch(&self, state: &Self::State) -> Vec<Self::State>;

    /// True iff `state` is fully assigned *and* feasible.
    ///
    /// Complete states are terminal: they are evaluated via
    /// [`objective`](Problem::objective) and never branched.
    fn is_complete(&self, state: &Self::State) -> bool;

    /// Objective value of a complete state.
    ///
    /// Only called when [`is_complete`](Problem::is_complete) holds. `NaN` is
    /// a modeling fault and aborts the search.
    fn objective(&self, state: &Self::State) -> Self::Value;
}
