//! Cost model for staffing transitions.
//!
//! Three penalties shape a plan:
//!
//! | Component | Charged when | Amount |
//! |-----------|--------------|--------|
//! | Change | headcount differs from the previous period | per head moved |
//! | Understaffing | headcount below the minimum, after overtime | per missing head |
//! | Overstaffing | headcount above a bounded maximum | flat |

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::{Cost, Headcount, PeriodRequirement};

/// Unit costs of the staffing problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost per head added or removed between two periods.
    pub per_head_change_cost: Cost,
    /// Flat penalty for exceeding a period's maximum, regardless of the excess.
    pub flat_overstaff_cost: Cost,
    /// Cost per missing head not covered by overtime.
    pub per_head_understaff_cost: Cost,
}

/// Cost of one transition, split by component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Hiring/release cost.
    pub change: Cost,
    /// Residual shortfall penalty.
    pub understaff: Cost,
    /// Flat overcapacity penalty.
    pub overstaff: Cost,
}

impl CostModel {
    /// Creates a cost model.
    pub fn new(
        per_head_change_cost: Cost,
        flat_overstaff_cost: Cost,
        per_head_understaff_cost: Cost,
    ) -> Self {
        Self {
            per_head_change_cost,
            flat_overstaff_cost,
            per_head_understaff_cost,
        }
    }

    /// Prices a move from `from` to `to` staff landing in a period with
    /// requirement `requirement`.
    ///
    /// Overtime lets `to` staff cover `(1 + overtime_fraction) * to` heads;
    /// only the remaining shortfall is charged. Understaffing and
    /// overstaffing are mutually exclusive.
    pub fn breakdown(
        &self,
        from: Headcount,
        to: Headcount,
        requirement: &PeriodRequirement,
        overtime_fraction: f64,
    ) -> CostBreakdown {
        let change = f64::from(from.abs_diff(to)) * self.per_head_change_cost;

        let mut understaff = 0.0;
        let mut overstaff = 0.0;
        if requirement.is_understaffed(to) {
            let shortfall =
                f64::from(requirement.min_headcount) - (1.0 + overtime_fraction) * f64::from(to);
            if shortfall > 0.0 {
                understaff = self.per_head_understaff_cost * shortfall;
            }
        } else if requirement.is_overstaffed(to) {
            overstaff = self.flat_overstaff_cost;
        }

        CostBreakdown {
            change,
            understaff,
            overstaff,
        }
    }
}

impl CostBreakdown {
    /// Sum of all components.
    #[inline]
    pub fn total(&self) -> Cost {
        self.change + self.understaff + self.overstaff
    }
}

impl Add for CostBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            change: self.change + rhs.change,
            understaff: self.understaff + rhs.understaff,
            overstaff: self.overstaff + rhs.overstaff,
        }
    }
}

impl AddAssign for CostBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
