//! Plan quality metrics.
//!
//! Aggregates a ledger into the figures a planner usually reports.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total cost | Final cumulative cost |
//! | Change / understaff / overstaff cost | Per-component sums |
//! | Additions | Sum of positive headcount steps |
//! | Reductions | Sum of negative headcount steps (as a positive count) |
//! | Peak headcount | Largest planned headcount |
//! | Understaffed periods | Entries charged an understaffing penalty |

use serde::{Deserialize, Serialize};

use super::LedgerEntry;
use crate::models::{Cost, CostBreakdown, Headcount};

/// Aggregate figures of a staffing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of planned periods.
    pub periods: usize,
    /// Total plan cost.
    pub total_cost: Cost,
    /// Component totals.
    pub costs: CostBreakdown,
    /// Staff added over the horizon.
    pub additions: Headcount,
    /// Staff released over the horizon.
    pub reductions: Headcount,
    /// Largest headcount of the plan.
    pub peak_headcount: Headcount,
    /// Periods whose shortfall was not fully covered by overtime.
    pub understaffed_periods: usize,
}

impl PlanSummary {
    /// Computes the summary of a ledger.
    pub fn from_ledger(ledger: &[LedgerEntry]) -> Self {
        let mut costs = CostBreakdown::default();
        let mut additions: Headcount = 0;
        let mut reductions: Headcount = 0;
        let mut understaffed_periods = 0;

        for entry in ledger {
            costs += entry.breakdown;
            if entry.breakdown.understaff > 0.0 {
                understaffed_periods += 1;
            }
        }

        for pair in ledger.windows(2) {
            let (before, after) = (pair[0].headcount(), pair[1].headcount());
            if after > before {
                additions += after - before;
            } else {
                reductions += before - after;
            }
        }

        Self {
            periods: ledger.len(),
            total_cost: ledger.last().map_or(0.0, |e| e.cumulative_cost),
            costs,
            additions,
            reductions,
            peak_headcount: ledger.iter().map(LedgerEntry::headcount).max().unwrap_or(0),
            understaffed_periods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::State;

    fn entry(period: usize, headcount: Headcount, breakdown: CostBreakdown, cumulative: Cost) -> LedgerEntry {
        LedgerEntry {
            label: format!("P{period}"),
            state: State::new(period, headcount),
            step_cost: breakdown.total(),
            cumulative_cost: cumulative,
            breakdown,
        }
    }

    #[test]
    fn test_summary() {
        let change = |c: Cost| CostBreakdown {
            change: c,
            ..CostBreakdown::default()
        };
        let ledger = vec![
            entry(0, 3, CostBreakdown::default(), 0.0),
            entry(1, 5, change(320.0), 320.0),
            entry(
                2,
                5,
                CostBreakdown {
                    change: 0.0,
                    understaff: 150.0,
                    overstaff: 0.0,
                },
                470.0,
            ),
            entry(3, 4, change(160.0), 630.0),
        ];

        let s = PlanSummary::from_ledger(&ledger);
        assert_eq!(s.periods, 4);
        assert_eq!(s.total_cost, 630.0);
        assert_eq!(s.costs.change, 480.0);
        assert_eq!(s.costs.understaff, 150.0);
        assert_eq!(s.additions, 2);
        assert_eq!(s.reductions, 1);
        assert_eq!(s.peak_headcount, 5);
        assert_eq!(s.understaffed_periods, 1);
    }

    #[test]
    fn test_empty_ledger() {
        let s = PlanSummary::from_ledger(&[]);
        assert_eq!(s.periods, 0);
        assert_eq!(s.total_cost, 0.0);
        assert_eq!(s.peak_headcount, 0);
    }
}
