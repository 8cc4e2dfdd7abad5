//! Staffing domain models.
//!
//! Provides the data types describing a staffing problem and the nodes and
//! edges of the state graph derived from it.
//!
//! # Domain Mappings
//!
//! | u-staffing | Workforce planning | Seasonal retail | Support desk |
//! |------------|--------------------|-----------------|--------------|
//! | Period | Month | Week | Shift block |
//! | Headcount | Employees | Seasonal staff | Agents |
//! | Allowance | Hiring/attrition limits | Contract turnover | Rotation limits |
//! | State | Staffing level in a month | Store roster size | Desk coverage |

mod allowance;
mod cost;
mod period;
mod problem;
mod state;

pub use allowance::ChangeAllowance;
pub use cost::{CostBreakdown, CostModel};
pub use period::PeriodRequirement;
pub use problem::{ProblemBuilder, ProblemDefinition, RawProblem};
pub use state::{State, Transition};

/// Number of staff present during a period.
pub type Headcount = u32;

/// Monetary amount (currency-agnostic).
pub type Cost = f64;
