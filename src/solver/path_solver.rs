//! Feasibility testing, path extraction and ledger assembly.
//!
//! # Pipeline
//!
//! ```text
//! ProblemDefinition ─▶ build graph ─▶ feasible? ─┬─▶ Dijkstra ─▶ ledger
//!                                                └─▶ Infeasible
//! ```
//!
//! Every entry point returns `Option`/[`Outcome`]; infeasibility never
//! surfaces as an error or a panic.

use std::borrow::Cow;
use std::sync::OnceLock;

use tracing::debug;

use super::dijkstra::{self, Search};
use super::ledger::{assemble, step_breakdowns};
use super::{Infeasibility, InfeasibilityReason, LedgerEntry, Outcome, Plan, SolverConfig};
use crate::graph::{StateGraph, StateGraphBuilder};
use crate::models::{Cost, ProblemDefinition, State};

/// Solves a staffing problem for its cheapest plan.
///
/// # Example
/// ```
/// use u_staffing::models::{PeriodRequirement, ProblemDefinition};
/// use u_staffing::solver::PathSolver;
///
/// let problem = ProblemDefinition::builder()
///     .with_period(PeriodRequirement::new("Février", 3))
///     .with_period(PeriodRequirement::new("Mars", 4))
///     .with_period(PeriodRequirement::exact("Avril", 2))
///     .with_allowance(1, 0.5)
///     .with_costs(90.0, 100.0, 300.0)
///     .with_overtime(0.25)
///     .build()
///     .unwrap();
///
/// let solver = PathSolver::new(&problem);
/// assert!(solver.is_feasible());
///
/// let ledger = solver.ledger().unwrap();
/// let headcounts: Vec<u32> = ledger.iter().map(|e| e.headcount()).collect();
/// assert_eq!(headcounts, vec![3, 3, 2]);
/// assert_eq!(ledger.last().unwrap().cumulative_cost, 165.0);
/// ```
#[derive(Debug)]
pub struct PathSolver<'a> {
    problem: &'a ProblemDefinition,
    config: SolverConfig,
    graph: OnceLock<StateGraph>,
}

impl<'a> PathSolver<'a> {
    /// Creates a solver with the default configuration.
    pub fn new(problem: &'a ProblemDefinition) -> Self {
        Self {
            problem,
            config: SolverConfig::default(),
            graph: OnceLock::new(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self.graph = OnceLock::new();
        self
    }

    /// The problem being solved.
    pub fn problem(&self) -> &'a ProblemDefinition {
        self.problem
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The state graph, cached or freshly built depending on the config.
    pub fn graph(&self) -> Cow<'_, StateGraph> {
        let builder = StateGraphBuilder::new(self.problem);
        if self.config.cache_graph {
            Cow::Borrowed(self.graph.get_or_init(|| builder.build_graph()))
        } else {
            Cow::Owned(builder.build_graph())
        }
    }

    /// Whether a transition reaches the mandated final state.
    pub fn is_feasible(&self) -> bool {
        let feasible = self.graph().is_target_reachable();
        debug!(feasible, target = %self.problem.target_state(), "feasibility check");
        feasible
    }

    /// Cheapest path from the start state to the target state.
    ///
    /// `None` when the problem is infeasible.
    pub fn shortest_path(&self) -> Option<Vec<State>> {
        self.found_path(&self.graph())
    }

    /// Cost of each transition along the cheapest path, in path order.
    pub fn step_costs(&self) -> Option<Vec<Cost>> {
        let graph = self.graph();
        let path = self.found_path(&graph)?;
        let steps = step_breakdowns(&graph, &path)?;
        Some(steps.iter().map(|b| b.total()).collect())
    }

    /// Per-period ledger of the cheapest plan.
    ///
    /// Entry 0 is the start state with step cost 0; every later entry
    /// carries the cost of the transition into it and the running total.
    pub fn ledger(&self) -> Option<Vec<LedgerEntry>> {
        let graph = self.graph();
        self.ledger_on(&graph).ok()
    }

    /// Runs the whole pipeline and reports a plan or a diagnostic.
    pub fn solve(&self) -> Outcome {
        let graph = self.graph();
        match self.ledger_on(&graph) {
            Ok(ledger) => Outcome::Planned(Plan::from_ledger(ledger)),
            Err(reason) => {
                let target = self.problem.target_state();
                Outcome::Infeasible(Infeasibility {
                    final_label: self.problem.last().label.clone(),
                    final_headcount: target.headcount,
                    reason,
                })
            }
        }
    }

    fn search(&self, graph: &StateGraph) -> Search {
        if !graph.is_target_reachable() {
            return Search::Unreachable;
        }
        dijkstra::shortest_path(graph, self.config.max_settled_states)
    }

    fn found_path(&self, graph: &StateGraph) -> Option<Vec<State>> {
        match self.search(graph) {
            Search::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    fn ledger_on(&self, graph: &StateGraph) -> Result<Vec<LedgerEntry>, InfeasibilityReason> {
        let path = match self.search(graph) {
            Search::Found { path, cost } => {
                debug!(cost, periods = path.len(), "assembling ledger");
                path
            }
            Search::Unreachable => return Err(InfeasibilityReason::TargetUnreachable),
            Search::LimitReached { settled } => {
                return Err(InfeasibilityReason::SearchLimitReached { settled })
            }
        };
        let steps = step_breakdowns(graph, &path).ok_or(InfeasibilityReason::TargetUnreachable)?;
        Ok(assemble(self.problem, &path, &steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodRequirement;

    fn small() -> ProblemDefinition {
        ProblemDefinition::builder()
            .with_period(PeriodRequirement::new("Février", 3))
            .with_period(PeriodRequirement::new("Mars", 4))
            .with_period(PeriodRequirement::exact("Avril", 2))
            .with_allowance(1, 0.5)
            .with_costs(90.0, 100.0, 300.0)
            .with_overtime(0.25)
            .build()
            .unwrap()
    }

    fn unreachable() -> ProblemDefinition {
        ProblemDefinition::builder()
            .with_period(PeriodRequirement::new("Février", 3))
            .with_period(PeriodRequirement::exact("Mars", 1))
            .with_allowance(3, 1.0 / 3.0)
            .with_costs(160.0, 200.0, 200.0)
            .with_overtime(0.25)
            .build()
            .unwrap()
    }

    #[test]
    fn test_feasible_pipeline() {
        let p = small();
        let solver = PathSolver::new(&p);
        assert!(solver.is_feasible());
        assert_eq!(
            solver.shortest_path().unwrap(),
            vec![State::new(0, 3), State::new(1, 3), State::new(2, 2)]
        );
        assert_eq!(solver.step_costs().unwrap(), vec![75.0, 90.0]);

        let ledger = solver.ledger().unwrap();
        let cumulative: Vec<Cost> = ledger.iter().map(|e| e.cumulative_cost).collect();
        assert_eq!(cumulative, vec![0.0, 75.0, 165.0]);
    }

    #[test]
    fn test_infeasible_pipeline() {
        let p = unreachable();
        let solver = PathSolver::new(&p);
        assert!(!solver.is_feasible());
        assert!(solver.shortest_path().is_none());
        assert!(solver.step_costs().is_none());
        assert!(solver.ledger().is_none());

        let info = solver.solve().infeasibility().cloned().unwrap();
        assert_eq!(info.final_label, "Mars");
        assert_eq!(info.final_headcount, 1);
        assert_eq!(info.reason, InfeasibilityReason::TargetUnreachable);
    }

    #[test]
    fn test_cache_does_not_change_results() {
        let p = small();
        let cached = PathSolver::new(&p);
        let fresh = PathSolver::new(&p).with_config(SolverConfig::new().with_cache_graph(false));
        assert!(matches!(cached.graph(), Cow::Borrowed(_)));
        assert!(matches!(fresh.graph(), Cow::Owned(_)));
        assert_eq!(cached.solve(), fresh.solve());
        assert_eq!(cached.ledger(), cached.ledger());
    }

    #[test]
    fn test_search_limit_is_infeasible() {
        let p = small();
        let solver = PathSolver::new(&p).with_config(SolverConfig::new().with_max_settled_states(2));
        assert!(solver.is_feasible());
        assert!(solver.ledger().is_none());
        match solver.solve() {
            Outcome::Infeasible(info) => {
                assert_eq!(info.reason, InfeasibilityReason::SearchLimitReached { settled: 2 })
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_single_period_plan() {
        let p = ProblemDefinition::builder()
            .with_period(PeriodRequirement::exact("Janvier", 4))
            .build()
            .unwrap();
        let solver = PathSolver::new(&p);
        assert!(solver.is_feasible());
        assert_eq!(solver.step_costs().unwrap(), Vec::<Cost>::new());
        let plan = solver.solve().into_plan().unwrap();
        assert_eq!(plan.headcounts(), vec![4]);
        assert_eq!(plan.total_cost(), 0.0);
    }
}
