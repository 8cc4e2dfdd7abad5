//! State graph construction.
//!
//! # Algorithm
//!
//! 1. Generate one candidate layer per period (see [`generate_layers`]).
//! 2. For every adjacent layer pair, keep each `u → v` pair the change
//!    allowance permits (full cross product, not just layer endpoints).
//! 3. Price each kept pair with the cost model of the destination period.
//!
//! # Complexity
//! O(Σ |L_i| · |L_{i+1}|) transitions; layer widths are bounded by the
//! largest minimum headcount.

use tracing::debug;

use super::{generate_layers, Layer, StateGraph};
use crate::models::{CostBreakdown, Headcount, ProblemDefinition, State, Transition};

/// Derives the layered transition graph from a [`ProblemDefinition`].
///
/// Every method is a pure function of the problem; calling one twice
/// yields identical results.
///
/// # Example
/// ```
/// use u_staffing::graph::StateGraphBuilder;
/// use u_staffing::models::{PeriodRequirement, ProblemDefinition, State};
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
/// let builder = StateGraphBuilder::new(&problem);
/// let graph = builder.build_graph();
/// assert!(builder.is_target_reachable());
/// assert_eq!(graph.transition_count(), 12);
/// assert_eq!(graph.cost(State::new(1, 4), State::new(2, 3)), Some(190.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StateGraphBuilder<'a> {
    problem: &'a ProblemDefinition,
}

impl<'a> StateGraphBuilder<'a> {
    /// Creates a builder over `problem`.
    pub fn new(problem: &'a ProblemDefinition) -> Self {
        Self { problem }
    }

    /// The problem this builder reads.
    pub fn problem(&self) -> &'a ProblemDefinition {
        self.problem
    }

    /// Candidate headcount layers, one per period.
    pub fn generate_layers(&self) -> Vec<Layer> {
        generate_layers(self.problem)
    }

    /// Unpriced `(from, to)` pairs between adjacent layers, sorted by
    /// source then destination.
    pub fn connect_layers(&self, layers: &[Layer]) -> Vec<(State, State)> {
        let allowance = self.problem.allowance();
        let mut pairs = Vec::new();

        for window in layers.windows(2) {
            let (current, next) = (&window[0], &window[1]);
            for from in current.states() {
                for to in next.states() {
                    if allowance.permits(from.headcount, to.headcount) {
                        pairs.push((from, to));
                    }
                }
            }
        }

        pairs
    }

    /// Cost of moving from `from` to `to` staff, landing in period
    /// `destination_period_index`.
    ///
    /// Returns a zero breakdown when the index is past the last period.
    pub fn cost_of(
        &self,
        from: Headcount,
        to: Headcount,
        destination_period_index: usize,
    ) -> CostBreakdown {
        match self.problem.period(destination_period_index) {
            Some(requirement) => self.problem.costs().breakdown(
                from,
                to,
                requirement,
                self.problem.overtime_fraction(),
            ),
            None => CostBreakdown::default(),
        }
    }

    /// Builds the priced graph.
    pub fn build_graph(&self) -> StateGraph {
        let layers = self.generate_layers();
        let transitions: Vec<Transition> = self
            .connect_layers(&layers)
            .into_iter()
            .map(|(from, to)| {
                Transition::new(
                    from,
                    to,
                    self.cost_of(from.headcount, to.headcount, to.period_index),
                )
            })
            .collect();

        let graph = StateGraph::new(
            layers,
            transitions,
            self.problem.start_state(),
            self.problem.target_state(),
            self.problem.len(),
        );

        debug!(
            periods = self.problem.len(),
            layers = graph.layers().len(),
            states = graph.state_count(),
            transitions = graph.transition_count(),
            "built staffing state graph"
        );

        graph
    }

    /// Whether the target state is reachable from the start state.
    pub fn is_target_reachable(&self) -> bool {
        self.build_graph().is_target_reachable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodRequirement;

    /// Three months, one hire or half the team per step.
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

    /// Target 1 is below every candidate of the last layer.
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

    fn headcounts(pairs: &[(State, State)]) -> Vec<(Headcount, Headcount)> {
        pairs
            .iter()
            .map(|(a, b)| (a.headcount, b.headcount))
            .collect()
    }

    #[test]
    fn test_connect_layers_cross_product() {
        let p = small();
        let b = StateGraphBuilder::new(&p);
        let pairs = b.connect_layers(&b.generate_layers());
        assert_eq!(
            headcounts(&pairs),
            vec![
                (3, 2),
                (3, 3),
                (3, 4),
                (2, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
                (3, 4),
                (4, 2),
                (4, 3),
                (4, 4),
            ]
        );
        assert!(pairs.iter().all(|(a, b)| b.period_index == a.period_index + 1));
    }

    #[test]
    fn test_graph_costs() {
        let p = small();
        let g = StateGraphBuilder::new(&p).build_graph();
        let costs: Vec<(Headcount, Headcount, f64)> = g
            .transitions()
            .iter()
            .map(|t| (t.from.headcount, t.to.headcount, t.cost))
            .collect();
        let expected = [
            (3, 2, 540.0),
            (3, 3, 75.0),
            (3, 4, 90.0),
            (2, 1, 315.0),
            (2, 2, 0.0),
            (2, 3, 190.0),
            (3, 2, 90.0),
            (3, 3, 100.0),
            (3, 4, 190.0),
            (4, 2, 180.0),
            (4, 3, 190.0),
            (4, 4, 100.0),
        ];
        assert_eq!(costs.len(), expected.len());
        for ((f, t, c), (ef, et, ec)) in costs.iter().zip(expected.iter()) {
            assert_eq!((f, t), (ef, et));
            assert!((c - ec).abs() < 1e-9, "{f}->{t}: {c} != {ec}");
        }
    }

    #[test]
    fn test_cost_of_overstaffed_final_period() {
        let p = small();
        let b = StateGraphBuilder::new(&p);
        let cost = b.cost_of(4, 3, 2);
        assert_eq!(cost.change, 90.0);
        assert_eq!(cost.understaff, 0.0);
        assert_eq!(cost.overstaff, 100.0);
        assert_eq!(cost.total(), 190.0);
    }

    #[test]
    fn test_cost_of_out_of_range_period() {
        let p = small();
        assert_eq!(StateGraphBuilder::new(&p).cost_of(1, 2, 9).total(), 0.0);
    }

    #[test]
    fn test_unreachable_target() {
        let p = unreachable();
        let b = StateGraphBuilder::new(&p);
        let g = b.build_graph();
        assert_eq!(headcounts(&b.connect_layers(g.layers())), vec![(3, 2), (3, 3)]);
        assert_eq!(g.cost(State::new(0, 3), State::new(1, 2)), Some(360.0));
        assert_eq!(g.cost(State::new(0, 3), State::new(1, 3)), Some(200.0));
        assert!(!b.is_target_reachable());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let p = small();
        let b = StateGraphBuilder::new(&p);
        assert_eq!(b.generate_layers(), b.generate_layers());
        assert_eq!(b.build_graph(), b.build_graph());
    }
}
