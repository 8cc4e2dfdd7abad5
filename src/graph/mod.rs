//! Layered state graph of a staffing problem.
//!
//! Each period contributes a layer of candidate headcounts; transitions
//! connect only adjacent layers and carry the cost of landing in the
//! destination period with the destination headcount.
//!
//! ```text
//! Février      Mars       Avril
//!    3 ──┬──▶   2  ──▶     1
//!        ├──▶   3  ──▶     2   ◀ target
//!        └──▶   4  ──▶     3
//! ```

mod builder;
mod layers;
mod state_graph;

pub use builder::StateGraphBuilder;
pub use layers::{generate_layers, Layer};
pub use state_graph::StateGraph;
