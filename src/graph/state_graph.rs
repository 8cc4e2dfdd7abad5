//! Built staffing graph.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use super::Layer;
use crate::models::{Cost, State, Transition};

/// Layered, priced transition graph of a staffing problem.
///
/// Transitions are stored grouped by source state, in ascending
/// `(from, to)` order, so two graphs built from the same problem compare
/// equal element by element.
#[derive(Debug, Clone, PartialEq)]
pub struct StateGraph {
    layers: Vec<Layer>,
    transitions: Vec<Transition>,
    outgoing: HashMap<State, Range<usize>>,
    start: State,
    target: State,
    period_count: usize,
}

impl StateGraph {
    /// Assembles a graph from layers and transitions sorted by `(from, to)`.
    pub(crate) fn new(
        layers: Vec<Layer>,
        transitions: Vec<Transition>,
        start: State,
        target: State,
        period_count: usize,
    ) -> Self {
        let mut outgoing: HashMap<State, Range<usize>> = HashMap::new();
        for (i, t) in transitions.iter().enumerate() {
            outgoing
                .entry(t.from)
                .and_modify(|r| r.end = i + 1)
                .or_insert(i..i + 1);
        }

        Self {
            layers,
            transitions,
            outgoing,
            start,
            target,
            period_count,
        }
    }

    /// Candidate layers, one per generated period.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// All transitions in `(from, to)` order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions leaving `state`, by ascending destination headcount.
    pub fn outgoing(&self, state: State) -> &[Transition] {
        match self.outgoing.get(&state) {
            Some(range) => &self.transitions[range.clone()],
            None => &[],
        }
    }

    /// The transition between two states, if the allowance permits it.
    pub fn transition(&self, from: State, to: State) -> Option<&Transition> {
        self.outgoing(from).iter().find(|t| t.to == to)
    }

    /// Cost of the transition between two states.
    pub fn cost(&self, from: State, to: State) -> Option<Cost> {
        self.transition(from, to).map(|t| t.cost)
    }

    /// The fixed starting state.
    pub fn start(&self) -> State {
        self.start
    }

    /// The mandated final state.
    pub fn target(&self) -> State {
        self.target
    }

    /// Whether `state` is a candidate of its period's layer.
    pub fn contains_state(&self, state: State) -> bool {
        self.layers
            .get(state.period_index)
            .is_some_and(|l| l.contains(state.headcount))
    }

    /// Total number of candidate states.
    pub fn state_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Whether some transition lands on the target state.
    ///
    /// With a single period there are no transitions and the start state is
    /// the target itself, which counts as reachable.
    pub fn has_edge_into_target(&self) -> bool {
        if self.period_count == 1 {
            return self.start == self.target;
        }
        self.transitions.iter().any(|t| t.to == self.target)
    }

    /// Whether the target state is reachable from the start state.
    ///
    /// A forward sweep over the transitions, which are ordered by source
    /// period. This agrees with [`has_edge_into_target`](Self::has_edge_into_target)
    /// whenever every layer candidate is reachable; the sweep also covers
    /// a shrink bound lost to floating-point rounding.
    pub fn is_target_reachable(&self) -> bool {
        if self.period_count == 1 {
            return self.start == self.target;
        }
        let mut reached: HashSet<State> = HashSet::new();
        reached.insert(self.start);
        for t in &self.transitions {
            if reached.contains(&t.from) {
                if t.to == self.target {
                    return true;
                }
                reached.insert(t.to);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostBreakdown;

    fn priced(from: State, to: State, change: Cost) -> Transition {
        Transition::new(
            from,
            to,
            CostBreakdown {
                change,
                ..CostBreakdown::default()
            },
        )
    }

    fn tiny() -> StateGraph {
        let s = State::new(0, 2);
        let a = State::new(1, 2);
        let b = State::new(1, 3);
        StateGraph::new(
            vec![Layer::new(0, 2, 2), Layer::new(1, 2, 3)],
            vec![priced(s, a, 0.0), priced(s, b, 10.0)],
            s,
            b,
            2,
        )
    }

    #[test]
    fn test_outgoing_lookup() {
        let g = tiny();
        assert_eq!(g.outgoing(State::new(0, 2)).len(), 2);
        assert!(g.outgoing(State::new(1, 2)).is_empty());
        assert_eq!(g.cost(State::new(0, 2), State::new(1, 3)), Some(10.0));
        assert_eq!(g.cost(State::new(0, 2), State::new(1, 4)), None);
    }

    #[test]
    fn test_counts_and_membership() {
        let g = tiny();
        assert_eq!(g.state_count(), 3);
        assert_eq!(g.transition_count(), 2);
        assert!(g.contains_state(State::new(1, 3)));
        assert!(!g.contains_state(State::new(1, 4)));
        assert!(!g.contains_state(State::new(2, 3)));
    }

    #[test]
    fn test_target_reachable_by_edge() {
        assert!(tiny().is_target_reachable());

        let s = State::new(0, 2);
        let unreachable = StateGraph::new(
            vec![Layer::new(0, 2, 2), Layer::new(1, 2, 2)],
            vec![priced(s, State::new(1, 2), 0.0)],
            s,
            State::new(1, 5),
            2,
        );
        assert!(!unreachable.is_target_reachable());
        assert!(!unreachable.has_edge_into_target());
    }

    #[test]
    fn test_edge_from_stranded_state_is_not_reachable() {
        let s = State::new(0, 2);
        let stranded = State::new(1, 3);
        let target = State::new(2, 3);
        let g = StateGraph::new(
            vec![Layer::new(0, 2, 2), Layer::new(1, 2, 3), Layer::new(2, 3, 3)],
            vec![priced(s, State::new(1, 2), 0.0), priced(stranded, target, 0.0)],
            s,
            target,
            3,
        );
        assert!(g.has_edge_into_target());
        assert!(!g.is_target_reachable());
    }

    #[test]
    fn test_single_period_is_reachable() {
        let s = State::new(0, 4);
        let g = StateGraph::new(vec![Layer::new(0, 4, 4)], Vec::new(), s, s, 1);
        assert!(g.is_target_reachable());
        assert!(g.has_edge_into_target());
    }
}
