//! # Frontier
//! Strategy-ordered collection of open nodes. The ordering policy is the
//! *only* state a strategy carries:
//!
//!  - [`Strategy::DepthFirst`] — stack (`Vec`)
//!  - [`Strategy::BreadthFirst`] — queue (`VecDeque`)
//!  - [`Strategy::BestFirst`] — priority heap ordered by bound, ties broken
//!    by greater depth
//!
//! Every node in the frontier survived a prune check against the incumbent
//! current at its insertion time. The incumbent may improve afterwards, which
//! is handled lazily with a second check at pop time rather than by
//! re-scanning the frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use ordered_float::OrderedFloat;

use crate::config::{Direction, Strategy};
use crate::node::Node;
use crate::problem::Value;

pub(crate) struct Frontier<S, T: Value> {
    direction: Direction,
    store: Store<S, T>,
}

enum Store<S, T: Value> {
    Stack(Vec<Node<S, T>>),
    Queue(VecDeque<Node<S, T>>),
    Heap(BinaryHeap<OpenNode<S, T>>),
}

impl<S, T: Value> Frontier<S, T> {
    pub(crate) fn new(strategy: Strategy, direction: Direction) -> Self {
        let store = match strategy {
            Strategy::DepthFirst => Store::Stack(Vec::new()),
            Strategy::BreadthFirst => Store::Queue(VecDeque::new()),
            Strategy::BestFirst => Store::Heap(BinaryHeap::new()),
        };
        Self { direction, store }
    }

    pub(crate) fn push(&mut self, node: Node<S, T>) {
        match &mut self.store {
            Store::Stack(stack) => stack.push(node),
            Store::Queue(queue) => queue.push_back(node),
            Store::Heap(heap) => heap.push(OpenNode {
                priority: self.direction.priority(node.bound),
                node,
            }),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Node<S, T>> {
        match &mut self.store {
            Store::Stack(stack) => stack.pop(),
            Store::Queue(queue) => queue.pop_front(),
            Store::Heap(heap) => heap.pop().map(|open| open.node),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match &self.store {
            Store::Stack(stack) => stack.len(),
            Store::Queue(queue) => queue.len(),
            Store::Heap(heap) => heap.len(),
        }
    }

    /// The most promising bound among open nodes, used for the optimality
    /// gap. O(1) for the heap; the stack and queue are scanned, which mirrors
    /// their unordered nature.
    pub(crate) fn best_bound(&self) -> Option<OrderedFloat<T>> {
        let best = |bounds: &mut dyn Iterator<Item = OrderedFloat<T>>| match self.direction {
            Direction::Minimize => bounds.min(),
            Direction::Maximize => bounds.max(),
        };
        match &self.store {
            Store::Stack(stack) => best(&mut stack.iter().map(|n| n.bound)),
            Store::Queue(queue) => best(&mut queue.iter().map(|n| n.bound)),
            Store::Heap(heap) => heap.peek().map(|open| open.node.bound),
        }
    }
}

/// Heap entry wrapping a node with its direction-normalized priority.
struct OpenNode<S, T: Value> {
    priority: OrderedFloat<T>,
    node: Node<S, T>,
}

impl<S, T: Value> PartialEq for OpenNode<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.node.depth == other.node.depth
    }
}

impl<S, T: Value> Eq for OpenNode<S, T> {}

impl<S, T: Value> PartialOrd for OpenNode<S, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, T: Value> Ord for OpenNode<S, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse because `BinaryHeap` is a max-heap and a lower priority
        // means a more promising bound; ties prefer deeper nodes
        self.priority
            .cmp(&other.priority)
            .reverse()
            .then_with(|| self.node.depth.cmp(&other.node.depth))
    }
}
