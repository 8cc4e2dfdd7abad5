//! Text ingestion for staffing problems.
//!
//! Every record is a `/`-separated line:
//!
//! | Input | Format | Example |
//! |-------|--------|---------|
//! | Period | `label / min / max` | `Mars / 4 /` |
//! | Allowance | `max_additions / max_reduction_fraction` | `3 / .33` |
//! | Costs | `change / overstaff / understaff` | `160 / 200 / 200` |
//! | Overtime | `fraction` | `.25` |
//!
//! An empty or non-numeric `max` (e.g. `Inf`) means unbounded. Blank lines
//! between periods are skipped.

use crate::models::{ChangeAllowance, CostModel, Headcount, PeriodRequirement, ProblemDefinition};
use crate::validation::InvalidProblem;

/// Errors raised while reading a textual problem.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A line does not have the expected number of fields.
    #[error("line {line:?}: expected {expected}")]
    MalformedLine {
        /// Offending line, trimmed.
        line: String,
        /// Description of the expected layout.
        expected: &'static str,
    },
    /// A field is not a valid number.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber {
        /// Field name.
        field: &'static str,
        /// Raw text.
        value: String,
    },
    /// The parsed values violate a problem invariant.
    #[error(transparent)]
    Invalid(#[from] InvalidProblem),
}

/// Parses a full problem from its four textual parts.
///
/// # Example
/// ```
/// use u_staffing::parse::parse_problem;
///
/// let problem = parse_problem(
///     "Février / 3 /\nMars / 4 /\nAvril / 2 / 2",
///     "1 / .5",
///     "90 / 100 / 300",
///     ".25",
/// )
/// .unwrap();
/// assert_eq!(problem.len(), 3);
/// assert!(problem.last().is_exact());
/// ```
pub fn parse_problem(
    periods: &str,
    allowance: &str,
    costs: &str,
    overtime: &str,
) -> Result<ProblemDefinition, ParseError> {
    let periods = parse_periods(periods)?;
    let allowance = parse_allowance(allowance)?;
    let costs = parse_costs(costs)?;
    let overtime = parse_number("overtime fraction", overtime.trim())?;
    Ok(ProblemDefinition::new(periods, allowance, costs, overtime)?)
}

/// Parses one period per non-blank line.
pub fn parse_periods(text: &str) -> Result<Vec<PeriodRequirement>, ParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_period)
        .collect()
}

/// Parses a `label / min / max` line. The `max` field may be empty or
/// omitted.
pub fn parse_period(line: &str) -> Result<PeriodRequirement, ParseError> {
    let fields = split_fields(line);
    if !(2..=3).contains(&fields.len()) || fields[0].is_empty() {
        return Err(malformed(line, "`label / min / max`"));
    }

    let min = parse_headcount("minimum headcount", fields[1])?;
    let requirement = PeriodRequirement::new(fields[0], min);
    match fields.get(2).and_then(|max| max.parse::<Headcount>().ok()) {
        Some(max) => Ok(requirement.with_max(max)),
        None => Ok(requirement),
    }
}

/// Parses a `max_additions / max_reduction_fraction` line.
pub fn parse_allowance(text: &str) -> Result<ChangeAllowance, ParseError> {
    let line = text.trim();
    let fields = split_fields(line);
    if fields.len() != 2 {
        return Err(malformed(line, "`max_additions / max_reduction_fraction`"));
    }
    Ok(ChangeAllowance::new(
        parse_headcount("maximum additions", fields[0])?,
        parse_number("reduction fraction", fields[1])?,
    ))
}

/// Parses a `change / overstaff / understaff` line.
pub fn parse_costs(text: &str) -> Result<CostModel, ParseError> {
    let line = text.trim();
    let fields = split_fields(line);
    if fields.len() != 3 {
        return Err(malformed(line, "`change / overstaff / understaff`"));
    }
    Ok(CostModel::new(
        parse_number("change cost", fields[0])?,
        parse_number("overstaff cost", fields[1])?,
        parse_number("understaff cost", fields[2])?,
    ))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split('/').map(str::trim).collect()
}

fn malformed(line: &str, expected: &'static str) -> ParseError {
    ParseError::MalformedLine {
        line: line.trim().to_string(),
        expected,
    }
}

fn parse_headcount(field: &'static str, value: &str) -> Result<Headcount, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
