//! Solver outcomes.
//!
//! Infeasibility is an ordinary result, not an error: callers branch on
//! [`Outcome`] the same way they would on `Option`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LedgerEntry, PlanSummary};
use crate::models::{Cost, Headcount, State};

/// Result of solving a staffing problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A cheapest plan exists.
    Planned(Plan),
    /// No plan reaches the mandated final headcount.
    Infeasible(Infeasibility),
}

/// A minimum-cost staffing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// One entry per period, start state first.
    pub ledger: Vec<LedgerEntry>,
    /// Aggregate figures of the ledger.
    pub summary: PlanSummary,
}

/// Why no plan was produced, with enough context for a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infeasibility {
    /// Label of the final period.
    pub final_label: String,
    /// Mandated headcount of the final period.
    pub final_headcount: Headcount,
    /// Failure category.
    pub reason: InfeasibilityReason,
}

/// Categories of infeasibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfeasibilityReason {
    /// No transition lands on the target state.
    TargetUnreachable,
    /// The search stopped at the configured settled-state limit.
    SearchLimitReached {
        /// States settled before stopping.
        settled: usize,
    },
}

impl Outcome {
    /// Whether a plan was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Outcome::Planned(_))
    }

    /// The plan, if any.
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            Outcome::Planned(plan) => Some(plan),
            Outcome::Infeasible(_) => None,
        }
    }

    /// The ledger, if any.
    pub fn ledger(&self) -> Option<&[LedgerEntry]> {
        self.plan().map(|p| p.ledger.as_slice())
    }

    /// The diagnostic, if infeasible.
    pub fn infeasibility(&self) -> Option<&Infeasibility> {
        match self {
            Outcome::Planned(_) => None,
            Outcome::Infeasible(info) => Some(info),
        }
    }

    /// Consumes the outcome, keeping only the plan.
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            Outcome::Planned(plan) => Some(plan),
            Outcome::Infeasible(_) => None,
        }
    }
}

impl Plan {
    /// Builds a plan and its summary from a ledger.
    pub fn from_ledger(ledger: Vec<LedgerEntry>) -> Self {
        let summary = PlanSummary::from_ledger(&ledger);
        Self { ledger, summary }
    }

    /// Planned states in period order.
    pub fn path(&self) -> Vec<State> {
        self.ledger.iter().map(|e| e.state).collect()
    }

    /// Planned headcounts in period order.
    pub fn headcounts(&self) -> Vec<Headcount> {
        self.ledger.iter().map(LedgerEntry::headcount).collect()
    }

    /// Total plan cost.
    pub fn total_cost(&self) -> Cost {
        self.summary.total_cost
    }
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            InfeasibilityReason::TargetUnreachable => write!(
                f,
                "no staffing plan reaches {} staff in {}",
                self.final_headcount, self.final_label
            ),
            InfeasibilityReason::SearchLimitReached { settled } => write!(
                f,
                "search for a plan reaching {} staff in {} stopped after {} states",
                self.final_headcount, self.final_label, settled
            ),
        }
    }
}
