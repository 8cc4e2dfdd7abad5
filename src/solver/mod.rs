//! Shortest-path solving and cost ledgers.
//!
//! [`PathSolver`] runs the pipeline on a built state graph: feasibility
//! check, Dijkstra search from the start state to the target state, and
//! ledger assembly. [`PlanSummary`] aggregates a ledger into report
//! figures.
//!
//! # Determinism
//!
//! The graph and the search are pure functions of the problem. Equal-cost
//! alternatives are resolved by settling order (see the `dijkstra`
//! module), so repeated solves return the same plan.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.3

mod config;
mod dijkstra;
mod ledger;
mod outcome;
mod path_solver;
mod summary;

pub use config::SolverConfig;
pub use ledger::LedgerEntry;
pub use outcome::{Infeasibility, InfeasibilityReason, Outcome, Plan};
pub use path_solver::PathSolver;
pub use summary::PlanSummary;
