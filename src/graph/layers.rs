//! Candidate headcount layers.
//!
//! # Algorithm
//!
//! Layer 0 holds only the starting headcount. Each following layer is the
//! contiguous range `[lo, hi]` derived from the previous layer's endpoints:
//!
//! - `hi = min(prev_max + max_additions, overall_min_cap)`
//! - `lo = prev_min - floor(prev_min * max_reduction_fraction)`
//!   (unchanged when the floor is zero)
//!
//! Capping `hi` at the largest minimum keeps the graph from growing past
//! any requirement the plan could need to meet.
//!
//! Every value of a layer is reachable from some value of the previous
//! one: `lo` from `prev_min` (the real-valued shrink bound is looser than
//! the floored one), anything up to `prev_min + max_additions` from
//! `prev_min`, and anything above that from `value - max_additions`,
//! which lies inside the previous range. The shrink bound is evaluated in
//! floating point, so `lo` can miss by rounding; feasibility is decided by
//! a forward sweep rather than by this argument alone.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::trace;

use crate::models::{Headcount, ProblemDefinition, State};

/// Candidate headcounts for one period: the inclusive range `[lo, hi]`.
///
/// `lo > hi` denotes an empty layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
    /// Period this layer belongs to.
    pub period_index: usize,
    /// Smallest candidate headcount.
    pub lo: Headcount,
    /// Largest candidate headcount.
    pub hi: Headcount,
}

impl Layer {
    /// Creates a layer.
    pub fn new(period_index: usize, lo: Headcount, hi: Headcount) -> Self {
        Self {
            period_index,
            lo,
            hi,
        }
    }

    /// Whether the layer has no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Number of candidate headcounts.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.hi - self.lo) as usize + 1
        }
    }

    /// Whether `headcount` is a candidate.
    #[inline]
    pub fn contains(&self, headcount: Headcount) -> bool {
        self.lo <= headcount && headcount <= self.hi
    }

    /// Candidate headcounts in ascending order.
    pub fn headcounts(&self) -> RangeInclusive<Headcount> {
        self.lo..=self.hi
    }

    /// Candidate states in ascending headcount order.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.headcounts().map(|h| State::new(self.period_index, h))
    }
}

/// Generates one layer per period, stopping early after an empty layer.
///
/// Never fails: an empty layer is kept in the output and later reported as
/// infeasibility by the solver.
pub fn generate_layers(problem: &ProblemDefinition) -> Vec<Layer> {
    let allowance = problem.allowance();
    let cap = problem.overall_min_cap();
    let start = problem.first().min_headcount;

    let mut layers = Vec::with_capacity(problem.len());
    layers.push(Layer::new(0, start, start));

    for period_index in 1..problem.len() {
        let prev = layers[layers.len() - 1];
        if prev.is_empty() {
            break;
        }

        let hi = prev.hi.saturating_add(allowance.max_additions).min(cap);
        let reduction = allowance.max_reduction_from(prev.lo);
        let lo = if reduction >= 1 {
            prev.lo - reduction
        } else {
            prev.lo
        };

        trace!(period_index, lo, hi, "generated headcount layer");
        layers.push(Layer::new(period_index, lo, hi));
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodRequirement;

    fn problem(periods: Vec<PeriodRequirement>, add: Headcount, frac: f64) -> ProblemDefinition {
        ProblemDefinition::builder()
            .with_periods(periods)
            .with_allowance(add, frac)
            .with_costs(160.0, 200.0, 200.0)
            .with_overtime(0.25)
            .build()
            .unwrap()
    }

    fn ranges(layers: &[Layer]) -> Vec<(Headcount, Headcount)> {
        layers.iter().map(|l| (l.lo, l.hi)).collect()
    }

    #[test]
    fn test_layers_capped_by_largest_minimum() {
        let p = problem(
            vec![
                PeriodRequirement::new("Février", 3),
                PeriodRequirement::new("Mars", 4),
                PeriodRequirement::new("Avril", 7),
                PeriodRequirement::new("Mai", 7),
                PeriodRequirement::exact("Juin", 5),
            ],
            3,
            1.0 / 3.0,
        );
        let layers = generate_layers(&p);
        assert_eq!(
            ranges(&layers),
            vec![(3, 3), (2, 6), (2, 7), (2, 7), (2, 7)]
        );
    }

    #[test]
    fn test_small_headcount_cannot_shrink() {
        let p = problem(
            vec![
                PeriodRequirement::new("Février", 3),
                PeriodRequirement::exact("Mars", 7),
            ],
            3,
            0.33,
        );
        // floor(3 * 0.33) = 0
        assert_eq!(ranges(&generate_layers(&p)), vec![(3, 3), (3, 6)]);
    }

    #[test]
    fn test_half_reduction() {
        let p = problem(
            vec![
                PeriodRequirement::new("Février", 3),
                PeriodRequirement::new("Mars", 4),
                PeriodRequirement::exact("Avril", 2),
            ],
            1,
            0.5,
        );
        assert_eq!(ranges(&generate_layers(&p)), vec![(3, 3), (2, 4), (1, 4)]);
    }

    #[test]
    fn test_single_period() {
        let p = problem(vec![PeriodRequirement::exact("Janvier", 4)], 2, 0.5);
        let layers = generate_layers(&p);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].len(), 1);
        assert!(layers[0].contains(4));
    }

    #[test]
    fn test_zero_start_stays_at_zero_without_requirements() {
        let p = problem(
            vec![
                PeriodRequirement::new("Janvier", 0),
                PeriodRequirement::exact("Février", 0),
            ],
            5,
            0.5,
        );
        assert_eq!(ranges(&generate_layers(&p)), vec![(0, 0), (0, 0)]);
    }

    #[test]
    fn test_layer_accessors() {
        let layer = Layer::new(2, 3, 5);
        assert_eq!(layer.len(), 3);
        assert!(!layer.is_empty());
        assert_eq!(
            layer.states().collect::<Vec<_>>(),
            vec![State::new(2, 3), State::new(2, 4), State::new(2, 5)]
        );

        let empty = Layer::new(1, 4, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.states().count(), 0);
    }
}
