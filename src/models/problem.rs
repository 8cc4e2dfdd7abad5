//! Staffing problem definition.
//!
//! The immutable input of the solver: an ordered list of period
//! requirements plus the change allowance, unit costs and overtime
//! fraction. Construction validates every invariant once; downstream
//! code relies on them without re-checking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ChangeAllowance, CostModel, Headcount, PeriodRequirement, State};
use crate::validation::{validate_problem, InvalidProblem};

/// A validated staffing problem.
///
/// Periods keep their input order and can also be looked up by label.
///
/// # Example
/// ```
/// use u_staffing::models::{ChangeAllowance, CostModel, PeriodRequirement, ProblemDefinition};
///
/// let problem = ProblemDefinition::new(
///     vec![
///         PeriodRequirement::new("Février", 3),
///         PeriodRequirement::new("Mars", 4),
///         PeriodRequirement::exact("Avril", 2),
///     ],
///     ChangeAllowance::new(1, 0.5),
///     CostModel::new(90.0, 100.0, 300.0),
///     0.25,
/// )
/// .unwrap();
///
/// assert_eq!(problem.len(), 3);
/// assert_eq!(problem.index_of("Mars"), Some(1));
/// assert_eq!(problem.target_state().headcount, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem", into = "RawProblem")]
pub struct ProblemDefinition {
    periods: Vec<PeriodRequirement>,
    index: HashMap<String, usize>,
    allowance: ChangeAllowance,
    costs: CostModel,
    overtime_fraction: f64,
}

/// Unvalidated wire form of a [`ProblemDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProblem {
    /// Period requirements in chronological order.
    pub periods: Vec<PeriodRequirement>,
    /// Change allowance.
    pub allowance: ChangeAllowance,
    /// Unit costs.
    pub costs: CostModel,
    /// Overtime fraction.
    #[serde(default)]
    pub overtime_fraction: f64,
}

impl ProblemDefinition {
    /// Validates the inputs and builds a problem.
    ///
    /// # Errors
    /// Returns every detected [`ValidationError`](crate::validation::ValidationError)
    /// wrapped in an [`InvalidProblem`].
    pub fn new(
        periods: Vec<PeriodRequirement>,
        allowance: ChangeAllowance,
        costs: CostModel,
        overtime_fraction: f64,
    ) -> Result<Self, InvalidProblem> {
        validate_problem(&periods, &allowance, &costs, overtime_fraction)?;

        let index = periods
            .iter()
            .enumerate()
            .map(|(i, p)| (p.label.clone(), i))
            .collect();

        Ok(Self {
            periods,
            index,
            allowance,
            costs,
            overtime_fraction,
        })
    }

    /// Starts a builder.
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// Period requirements in chronological order.
    pub fn periods(&self) -> &[PeriodRequirement] {
        &self.periods
    }

    /// Requirement at `index`.
    pub fn period(&self, index: usize) -> Option<&PeriodRequirement> {
        self.periods.get(index)
    }

    /// Requirement with the given label.
    pub fn get(&self, label: &str) -> Option<&PeriodRequirement> {
        self.index_of(label).map(|i| &self.periods[i])
    }

    /// Position of the period with the given label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Labels in chronological order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.periods.iter().map(|p| p.label.as_str())
    }

    /// Number of periods (always at least one).
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always `false` for a validated problem.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// First period (the known starting headcount).
    pub fn first(&self) -> &PeriodRequirement {
        &self.periods[0]
    }

    /// Last period (the mandated final headcount).
    pub fn last(&self) -> &PeriodRequirement {
        &self.periods[self.periods.len() - 1]
    }

    /// Change allowance.
    pub fn allowance(&self) -> &ChangeAllowance {
        &self.allowance
    }

    /// Unit costs.
    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Fraction of extra capacity available through overtime.
    pub fn overtime_fraction(&self) -> f64 {
        self.overtime_fraction
    }

    /// Largest minimum headcount across all periods.
    ///
    /// Candidate headcounts never grow past this value.
    pub fn overall_min_cap(&self) -> Headcount {
        self.periods
            .iter()
            .map(|p| p.min_headcount)
            .max()
            .unwrap_or(0)
    }

    /// The fixed starting state: first period at its minimum headcount.
    pub fn start_state(&self) -> State {
        State::new(0, self.first().min_headcount)
    }

    /// The mandated final state: last period at its exact headcount.
    pub fn target_state(&self) -> State {
        let last = self.last();
        State::new(
            self.periods.len() - 1,
            last.max_headcount.unwrap_or(last.min_headcount),
        )
    }
}

impl TryFrom<RawProblem> for ProblemDefinition {
    type Error = InvalidProblem;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        Self::new(raw.periods, raw.allowance, raw.costs, raw.overtime_fraction)
    }
}

impl From<ProblemDefinition> for RawProblem {
    fn from(problem: ProblemDefinition) -> Self {
        Self {
            periods: problem.periods,
            allowance: problem.allowance,
            costs: problem.costs,
            overtime_fraction: problem.overtime_fraction,
        }
    }
}

/// Builder for [`ProblemDefinition`].
///
/// # Example
/// ```
/// use u_staffing::models::{PeriodRequirement, ProblemDefinition};
///
/// let problem = ProblemDefinition::builder()
///     .with_period(PeriodRequirement::new("Février", 3))
///     .with_period(PeriodRequirement::exact("Mars", 3))
///     .with_allowance(3, 0.33)
///     .with_costs(160.0, 200.0, 200.0)
///     .with_overtime(0.25)
///     .build()
///     .unwrap();
/// assert_eq!(problem.start_state().headcount, problem.target_state().headcount);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    periods: Vec<PeriodRequirement>,
    allowance: ChangeAllowance,
    costs: CostModel,
    overtime_fraction: f64,
}

impl ProblemBuilder {
    /// Creates a builder with no periods, no allowed change and zero costs.
    pub fn new() -> Self {
        Self {
            periods: Vec::new(),
            allowance: ChangeAllowance::new(0, 0.0),
            costs: CostModel::new(0.0, 0.0, 0.0),
            overtime_fraction: 0.0,
        }
    }

    /// Appends a period.
    pub fn with_period(mut self, period: PeriodRequirement) -> Self {
        self.periods.push(period);
        self
    }

    /// Appends several periods.
    pub fn with_periods(mut self, periods: impl IntoIterator<Item = PeriodRequirement>) -> Self {
        self.periods.extend(periods);
        self
    }

    /// Sets the change allowance.
    pub fn with_allowance(mut self, max_additions: Headcount, max_reduction_fraction: f64) -> Self {
        self.allowance = ChangeAllowance::new(max_additions, max_reduction_fraction);
        self
    }

    /// Sets the unit costs.
    pub fn with_costs(mut self, change: f64, overstaff: f64, understaff: f64) -> Self {
        self.costs = CostModel::new(change, overstaff, understaff);
        self
    }

    /// Sets the overtime fraction.
    pub fn with_overtime(mut self, overtime_fraction: f64) -> Self {
        self.overtime_fraction = overtime_fraction;
        self
    }

    /// Validates and builds the problem.
    pub fn build(self) -> Result<ProblemDefinition, InvalidProblem> {
        ProblemDefinition::new(
            self.periods,
            self.allowance,
            self.costs,
            self.overtime_fraction,
        )
    }
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
