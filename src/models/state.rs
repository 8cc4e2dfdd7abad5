//! Graph nodes and edges.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Cost, CostBreakdown, Headcount};

/// A (period, headcount) node of the staffing graph.
///
/// Ordered by period first, then headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    /// Zero-based index of the period.
    pub period_index: usize,
    /// Staff present during the period.
    pub headcount: Headcount,
}

impl State {
    /// Creates a state.
    pub fn new(period_index: usize, headcount: Headcount) -> Self {
        Self {
            period_index,
            headcount,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}:{}", self.period_index, self.headcount)
    }
}

/// A priced move between states of adjacent periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Source state (period `i`).
    pub from: State,
    /// Destination state (period `i + 1`).
    pub to: State,
    /// Total cost, always non-negative.
    pub cost: Cost,
    /// Cost split by component. `breakdown.total() == cost`.
    pub breakdown: CostBreakdown,
}

impl Transition {
    /// Creates a transition priced by `breakdown`.
    pub fn new(from: State, to: State, breakdown: CostBreakdown) -> Self {
        Self {
            from,
            to,
            cost: breakdown.total(),
            breakdown,
        }
    }

    /// Signed headcount change (positive = additions).
    #[inline]
    pub fn delta(&self) -> i64 {
        i64::from(self.to.headcount) - i64::from(self.from.headcount)
    }
}
