//! Bounding and pruning policy: can a node still beat the incumbent?

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::config::Direction;
use crate::problem::Value;

/// Optimality tolerances, both `>= 0` (negatives are clamped to zero).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tolerance<T> {
    pub(crate) abs: T,
    pub(crate) rel: T,
}

impl<T: Value> Tolerance<T> {
    pub(crate) fn new(abs: T, rel: T) -> Self {
        Self {
            abs: Float::max(abs, T::zero()),
            rel: Float::max(rel, T::zero()),
        }
    }
}

/// Decide whether a node with the given `bound` may be discarded against the
/// incumbent.
///
/// The boundary is **non-strict**: a node whose bound merely ties the
/// incumbent (within either tolerance) is pruned, so ties are never explored.
/// This affects which of several optimal solutions is returned, not
/// optimality itself.
pub(crate) fn should_prune<T: Value>(
    bound: OrderedFloat<T>,
    incumbent: OrderedFloat<T>,
    direction: Direction,
    tolerance: Tolerance<T>,
) -> bool {
    let (abs, rel) = gaps(incumbent, bound, direction);
    abs <= tolerance.abs || rel <= tolerance.rel
}

/// True for the direction's worst infinity: the bound a model reports for a
/// subtree with no feasible completion.
pub(crate) fn is_infeasible<T: Value>(bound: OrderedFloat<T>, direction: Direction) -> bool {
    bound == direction.worst()
}

/// Absolute and relative optimality gap between the incumbent objective and
/// the most promising open bound.
///
/// Both may be negative when the bound no longer beats the incumbent; callers
/// clamp for reporting. The relative gap is scaled by
/// `max(min(|incumbent|, |bound|), epsilon)`.
pub(crate) fn gaps<T: Value>(
    incumbent: OrderedFloat<T>,
    bound: OrderedFloat<T>,
    direction: Direction,
) -> (T, T) {
    let (incumbent, bound) = (incumbent.into_inner(), bound.into_inner());
    let abs = match direction {
        Direction::Minimize => incumbent - bound,
        Direction::Maximize => bound - incumbent,
    };
    let scale = Float::max(
        Float::min(incumbent.abs(), bound.abs()),
        T::epsilon(),
    );
    (abs, abs / scale)
}
