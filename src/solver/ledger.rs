//! Cost ledger of a staffing plan.

use serde::{Deserialize, Serialize};

use crate::graph::StateGraph;
use crate::models::{Cost, CostBreakdown, Headcount, ProblemDefinition, State};

/// One period of a plan: headcount, step cost and running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Period label.
    pub label: String,
    /// Planned state.
    pub state: State,
    /// Cost of the transition into this state (0 for the start).
    pub step_cost: Cost,
    /// Sum of step costs up to and including this entry.
    pub cumulative_cost: Cost,
    /// `step_cost` split by component.
    pub breakdown: CostBreakdown,
}

impl LedgerEntry {
    /// Planned headcount.
    #[inline]
    pub fn headcount(&self) -> Headcount {
        self.state.headcount
    }
}

/// Per-transition costs along `path`, in order. Length = `path.len() - 1`.
///
/// Returns `None` if two consecutive states are not connected in `graph`.
pub(crate) fn step_breakdowns(graph: &StateGraph, path: &[State]) -> Option<Vec<CostBreakdown>> {
    path.windows(2)
        .map(|pair| graph.transition(pair[0], pair[1]).map(|t| t.breakdown))
        .collect()
}

/// Zips `path` with its step costs and a running total starting at 0.
pub(crate) fn assemble(
    problem: &ProblemDefinition,
    path: &[State],
    steps: &[CostBreakdown],
) -> Vec<LedgerEntry> {
    let leading = std::iter::once(CostBreakdown::default());
    let mut cumulative = 0.0;

    path.iter()
        .zip(leading.chain(steps.iter().copied()))
        .map(|(&state, breakdown)| {
            let step_cost = breakdown.total();
            cumulative += step_cost;
            LedgerEntry {
                label: problem
                    .period(state.period_index)
                    .map(|p| p.label.clone())
                    .unwrap_or_default(),
                state,
                step_cost,
                cumulative_cost: cumulative,
                breakdown,
            }
        })
        .collect()
}
