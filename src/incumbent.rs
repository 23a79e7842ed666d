//! Incumbent tracking: the best complete feasible solution found so far.

use std::sync::Mutex;

use ordered_float::OrderedFloat;

use crate::config::Direction;
use crate::problem::Value;

/// Thread-safe incumbent slot, scoped to a single `solve` call.
///
/// The slot starts empty and only ever improves: [`try_install`] re-checks
/// the candidate against the value present *at commit time*, so of two
/// workers racing to install simultaneously discovered solutions the worse
/// one is discarded, never overwritten.
///
/// [`try_install`]: Incumbent::try_install
pub(crate) struct Incumbent<S, T: Value> {
    direction: Direction,
    slot: Mutex<Option<(S, OrderedFloat<T>)>>,
}

impl<S, T: Value> Incumbent<S, T> {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            slot: Mutex::new(None),
        }
    }

    /// Consistent snapshot of the current objective value, if any.
    pub(crate) fn value(&self) -> Option<OrderedFloat<T>> {
        self.lock().as_ref().map(|(_, value)| *value)
    }

    /// Commit `state` as the new incumbent iff it still strictly improves on
    /// the current value. Returns whether the candidate was installed.
    pub(crate) fn try_install(&self, state: S, value: OrderedFloat<T>) -> bool {
        let mut slot = self.lock();
        let improves = match slot.as_ref() {
            Some((_, current)) => self.direction.improves(value, *current),
            None => true,
        };
        if improves {
            *slot = Some((state, value));
        }
        improves
    }

    pub(crate) fn into_parts(self) -> Option<(S, OrderedFloat<T>)> {
        self.slot
            .into_inner()
            .expect("incumbent lock poisoned")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<(S, OrderedFloat<T>)>> {
        self.slot.lock().expect("incumbent lock poisoned")
    }
}
