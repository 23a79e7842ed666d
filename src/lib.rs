//! # Generic branch-and-bound
//! This crate is an exact search engine for combinatorial optimization: it
//! enumerates a tree of partial solutions, pruning every subtree whose
//! relaxation bound proves it cannot beat the best solution found so far
//! (the *incumbent*). The engine is problem-agnostic; a concrete problem
//! plugs in through the [`Problem`] trait with four operations:
//!
//!  1. [`bound`](Problem::bound) — an admissible relaxation of the best
//!     objective reachable from a partial assignment
//!  2. [`branch`](Problem::branch) — split a partial assignment into child
//!     assignments covering its remaining decisions
//!  3. [`is_complete`](Problem::is_complete) — is the assignment fully and
//!     feasibly determined?
//!  4. [`objective`](Problem::objective) — the value of a complete assignment
//!
//! ## Search strategies
//! The frontier of open nodes is ordered by a [`Strategy`] fixed per
//! [`solve`] call:
//!  - [`Strategy::DepthFirst`] — LIFO; memory-bounded, reaches feasible
//!    solutions early
//!  - [`Strategy::BreadthFirst`] — FIFO; fair but memory-heavy
//!  - [`Strategy::BestFirst`] — bound-priority with ties broken by greater
//!    depth; fewest explored nodes, highest peak memory
//!
//! ## Parallelism
//! [`Config::workers`] selects a fixed pool of worker threads sharing one
//! frontier and one incumbent. Search results are reproducible with a single
//! worker; with several workers the objective value of a proven-optimal
//! result is the same, though a different optimal solution may be returned.
//!
//! ## Example
//! A 0/1 knapsack (capacity 5) solved to proven optimality:
//!
//! ```
//! use bnb::{solve, Config, Direction, Problem, Status, Strategy};
//!
//! struct Knapsack {
//!     weights: Vec<f64>,
//!     values: Vec<f64>,
//!     capacity: f64,
//! }
//!
//! /// Items `0..next` are decided; `weight`/`value` accumulate the taken ones.
//! #[derive(Clone, Copy)]
//! struct Pick {
//!     next: usize,
//!     weight: f64,
//!     value: f64,
//! }
//!
//! impl Problem for Knapsack {
//!     type State = Pick;
//!     type Value = f64;
//!
//!     // admissible: no completion can beat taking every remaining item
//!     fn bound(&self, pick: &Pick) -> f64 {
//!         pick.value + self.values[pick.next..].iter().sum::<f64>()
//!     }
//!
//!     fn branch(&self, pick: &Pick) -> Vec<Pick> {
//!         let mut children = vec![Pick { next: pick.next + 1, ..*pick }];
//!         if pick.weight + self.weights[pick.next] <= self.capacity {
//!             children.push(Pick {
//!                 next: pick.next + 1,
//!                 weight: pick.weight + self.weights[pick.next],
//!                 value: pick.value + self.values[pick.next],
//!             });
//!         }
//!         children
//!     }
//!
//!     fn is_complete(&self, pick: &Pick) -> bool {
//!         pick.next == self.weights.len()
//!     }
//!
//!     fn objective(&self, pick: &Pick) -> f64 {
//!         pick.value
//!     }
//! }
//!
//! let knapsack = Knapsack {
//!     weights: vec![2., 3., 4., 5.],
//!     values: vec![3., 4., 5., 6.],
//!     capacity: 5.,
//! };
//! let root = Pick { next: 0, weight: 0., value: 0. };
//! let config = Config::default()
//!     .with_strategy(Strategy::BestFirst)
//!     .with_direction(Direction::Maximize);
//!
//! let result = solve(&knapsack, root, &config).unwrap();
//! assert_eq!(result.status, Status::Optimal);
//! assert_eq!(result.objective, Some(7.)); // items of weight 2 and 3
//! ```
//!
//! ## Correctness preconditions
//! Optimality of the returned incumbent is contingent on the model:
//! [`bound`](Problem::bound) must be admissible and
//! [`branch`](Problem::branch) complete (see the [`Problem`] docs). These are
//! documented preconditions the core does not verify at runtime. Violations
//! of the structural contract that *are* detectable (an empty branch, a NaN
//! bound) abort the search with a [`ModelError`].

mod config;
mod engine;
mod error;
mod frontier;
mod incumbent;
mod node;
mod problem;
mod prune;
mod result;
mod termination;

pub use config::{Config, Direction, Strategy};
pub use engine::solve;
pub use error::ModelError;
pub use node::NodeId;
pub use problem::{Problem, Value};
pub use result::{SearchResult, SearchTrace, Stats, Status, TraceRecord, Warning};
pub use termination::TerminationReason;
