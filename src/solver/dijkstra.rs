//! Dijkstra shortest path over the staffing graph.
//!
//! # Tie-breaking
//! The queue pops the lowest `(cost, period_index, headcount)` first and a
//! predecessor is only replaced on a strictly lower tentative cost. Among
//! equal-cost predecessors the one settled first therefore wins, which
//! makes the returned path deterministic.
//!
//! # Reference
//! Dijkstra (1959), "A note on two problems in connexion with graphs"

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::graph::StateGraph;
use crate::models::{Cost, State};

/// Result of a shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Search {
    /// A cheapest path from start to target, both included.
    Found { path: Vec<State>, cost: Cost },
    /// The queue ran dry before the target was settled.
    Unreachable,
    /// The settled-state limit was hit first.
    LimitReached { settled: usize },
}

/// Min-heap entry ordered by `(cost, state)`.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: Cost,
    state: State,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost path from the graph's start to its target.
pub(crate) fn shortest_path(graph: &StateGraph, max_settled: Option<usize>) -> Search {
    let start = graph.start();
    let target = graph.target();

    let mut dist: HashMap<State, Cost> = HashMap::with_capacity(graph.state_count());
    let mut parent: HashMap<State, State> = HashMap::with_capacity(graph.state_count());
    let mut settled: HashSet<State> = HashSet::with_capacity(graph.state_count());
    let mut queue = BinaryHeap::new();

    dist.insert(start, 0.0);
    queue.push(QueueEntry {
        cost: 0.0,
        state: start,
    });

    while let Some(QueueEntry { cost, state }) = queue.pop() {
        if !settled.insert(state) {
            continue;
        }

        if state == target {
            let path = reconstruct(&parent, start, target);
            debug!(settled = settled.len(), cost, "shortest staffing path found");
            return Search::Found { path, cost };
        }

        if max_settled.is_some_and(|limit| settled.len() >= limit) {
            debug!(settled = settled.len(), "settled-state limit reached");
            return Search::LimitReached {
                settled: settled.len(),
            };
        }

        for t in graph.outgoing(state) {
            if settled.contains(&t.to) {
                continue;
            }
            let tentative = cost + t.cost;
            let improves = dist.get(&t.to).map_or(true, |&known| tentative < known);
            if improves {
                trace!(from = %state, to = %t.to, tentative, "relaxed transition");
                dist.insert(t.to, tentative);
                parent.insert(t.to, state);
                queue.push(QueueEntry {
                    cost: tentative,
                    state: t.to,
                });
            }
        }
    }

    debug!(settled = settled.len(), "target state never settled");
    Search::Unreachable
}

fn reconstruct(parent: &HashMap<State, State>, start: State, target: State) -> Vec<State> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
