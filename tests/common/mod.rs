#![allow(dead_code)]

use bnb::Problem;
use fixedbitset::FixedBitSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 0/1 knapsack test model: maximize the value of the taken items subject to
/// the capacity. Items are kept sorted by value density so the fractional
/// relaxation bound is admissible.
pub struct Knapsack {
    pub weights: Vec<f64>,
    pub values: Vec<f64>,
    pub capacity: f64,
}

/// Items `0..next` are decided; `taken` records which of them were packed.
#[derive(Debug, Clone)]
pub struct Selection {
    pub next: usize,
    pub taken: FixedBitSet,
    pub weight: f64,
    pub value: f64,
}

impl Knapsack {
    pub fn new(weights: Vec<f64>, values: Vec<f64>, capacity: f64) -> Self {
        assert_eq!(weights.len(), values.len());
        let mut items = weights.into_iter().zip(values).collect::<Vec<_>>();
        items.sort_by(|(wx, vx), (wy, vy)| (vy / wy).total_cmp(&(vx / wx)));
        let (weights, values) = items.into_iter().unzip();
        Self {
            weights,
            values,
            capacity,
        }
    }

    /// Deterministic pseudo-random instance with a capacity around half the
    /// total weight.
    pub fn random(seed: u64, items: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = (0..items)
            .map(|_| rng.gen_range(1..=12) as f64)
            .collect::<Vec<_>>();
        let values = (0..items)
            .map(|_| rng.gen_range(1..=12) as f64)
            .collect::<Vec<_>>();
        let capacity = (weights.iter().sum::<f64>() / 2.).floor();
        Self::new(weights, values, capacity)
    }

    pub fn root(&self) -> Selection {
        Selection {
            next: 0,
            taken: FixedBitSet::with_capacity(self.weights.len()),
            weight: 0.,
            value: 0.,
        }
    }

    /// Optimal objective by exhaustive enumeration; ground truth for small
    /// instances.
    pub fn brute_force(&self) -> f64 {
        let n = self.weights.len();
        assert!(n < u32::BITS as usize);
        let mut best = 0f64;
        for mask in 0u32..1 << n {
            let (mut weight, mut value) = (0., 0.);
            for i in 0..n {
                if mask & (1 << i) != 0 {
                    weight += self.weights[i];
                    value += self.values[i];
                }
            }
            if weight <= self.capacity && value > best {
                best = value;
            }
        }
        best
    }
}

impl Problem for Knapsack {
    type State = Selection;
    type Value = f64;

    /// Fractional (LP) relaxation over the remaining items: take whole items
    /// in density order while they fit, then a fraction of the next one.
    fn bound(&self, selection: &Selection) -> f64 {
        let mut slack = self.capacity - selection.weight;
        let mut bound = selection.value;
        for i in selection.next..self.weights.len() {
            if self.weights[i] <= slack {
                slack -= self.weights[i];
                bound += self.values[i];
            } else {
                bound += self.values[i] * slack / self.weights[i];
                break;
            }
        }
        bound
    }

    /// Skip or take the next undecided item; taking is only offered while it
    /// fits, so every complete state is feasible.
    fn branch(&self, selection: &Selection) -> Vec<Selection> {
        let skip = Selection {
            next: selection.next + 1,
            ..selection.clone()
        };
        let mut children = vec![skip];
        if selection.weight + self.weights[selection.next] <= self.capacity {
            let mut taken = selection.taken.clone();
            taken.insert(selection.next);
            children.push(Selection {
                next: selection.next + 1,
                taken,
                weight: selection.weight + self.weights[selection.next],
                value: selection.value + self.values[selection.next],
            });
        }
        children
    }

    fn is_complete(&self, selection: &Selection) -> bool {
        selection.next == self.weights.len()
    }

    fn objective(&self, selection: &Selection) -> f64 {
        selection.value
    }
}
