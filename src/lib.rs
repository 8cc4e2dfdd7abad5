//! Minimum-cost staffing plans for the U-Engine ecosystem.
//!
//! Given per-period headcount requirements, a bound on period-to-period
//! growth and shrinkage, and a cost model for changes, understaffing and
//! overstaffing, this crate decides whether the mandated final headcount
//! can be reached from the known starting headcount and, if so, returns the
//! cheapest plan with a per-period cost ledger.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PeriodRequirement`, `ChangeAllowance`,
//!   `CostModel`, `ProblemDefinition`, `State`, `Transition`
//! - **`validation`**: Input integrity checks (duplicate labels, ranges, costs)
//! - **`graph`**: Layered state graph construction (`StateGraphBuilder`)
//! - **`solver`**: Feasibility, Dijkstra path extraction, ledgers (`PathSolver`)
//! - **`parse`**: Line-oriented text ingestion
//!
//! # Example
//!
//! ```
//! use u_staffing::parse::parse_problem;
//! use u_staffing::solver::PathSolver;
//!
//! let problem = parse_problem(
//!     "Février / 3 /\nMars / 4 /\nAvril / 6 /\nMai / 7 /\n\
//!      Juin / 4 /\nJuillet / 4 /\nAoût / 2 /\nSeptembre / 3 / 3",
//!     "3 / .33",
//!     "160 / 200 / 200",
//!     ".25",
//! )
//! .unwrap();
//!
//! let plan = PathSolver::new(&problem).solve().into_plan().unwrap();
//! assert_eq!(plan.headcounts(), vec![3, 4, 5, 5, 5, 5, 4, 3]);
//! assert_eq!(plan.total_cost(), 790.0);
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem next to
//! `u-schedule`. It is purely computational: no I/O, no shared state, and
//! no rendering. Reports and charts consume the serializable ledger.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"
//! - Bellman (1957), "Dynamic Programming"

pub mod graph;
pub mod models;
pub mod parse;
pub mod solver;
pub mod validation;
