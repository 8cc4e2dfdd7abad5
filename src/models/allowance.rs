//! Period-to-period headcount change allowance.

use serde::{Deserialize, Serialize};

use super::Headcount;

/// Bounds on how much the headcount may change between adjacent periods.
///
/// Growth is an absolute number of additions; shrinkage is a fraction of
/// the current headcount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeAllowance {
    /// Maximum number of staff added from one period to the next.
    pub max_additions: Headcount,
    /// Maximum fraction of the current staff removed in one step, in `[0, 1)`.
    pub max_reduction_fraction: f64,
}

impl ChangeAllowance {
    /// Creates a new allowance.
    pub fn new(max_additions: Headcount, max_reduction_fraction: f64) -> Self {
        Self {
            max_additions,
            max_reduction_fraction,
        }
    }

    /// Whole number of staff that may leave from `headcount`, rounded down.
    ///
    /// Small headcounts yield 0: a team of 2 with a one-third allowance
    /// cannot shrink.
    pub fn max_reduction_from(&self, headcount: Headcount) -> Headcount {
        let reduction = (f64::from(headcount) * self.max_reduction_fraction).floor();
        // fraction < 1 keeps the product below `headcount`
        (reduction.max(0.0) as Headcount).min(headcount)
    }

    /// Whether moving from `from` to `to` staff respects both bounds.
    ///
    /// The shrink bound is evaluated on the real-valued product, so it can
    /// admit a target that [`max_reduction_from`](Self::max_reduction_from)
    /// would not reach from the same headcount.
    pub fn permits(&self, from: Headcount, to: Headcount) -> bool {
        let shrink_floor = f64::from(from) * (1.0 - self.max_reduction_fraction);
        let growth_ceiling = u64::from(from) + u64::from(self.max_additions);
        f64::from(to) >= shrink_floor && u64::from(to) <= growth_ceiling
    }
}
