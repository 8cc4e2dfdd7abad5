//! Input validation for staffing problems.
//!
//! Checks structural integrity of a problem before any graph is built.
//! Detects:
//! - Empty period lists
//! - Duplicate period labels
//! - Inverted headcount ranges (min > max)
//! - A final period without an exact target
//! - Reduction fractions outside `[0, 1)`
//! - Negative or non-finite costs and overtime
//!
//! All detected issues are reported together; the solver itself never
//! re-validates.

use std::collections::HashSet;

use crate::models::{ChangeAllowance, CostModel, PeriodRequirement};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The problem has no periods.
    EmptyProblem,
    /// Two periods share the same label.
    DuplicateLabel,
    /// A period's minimum exceeds its maximum.
    InvertedRange,
    /// The last period does not pin an exact headcount.
    OpenFinalPeriod,
    /// The reduction fraction is not a finite value in `[0, 1)`.
    InvalidAllowance,
    /// A unit cost is negative or not finite.
    InvalidCost,
    /// The overtime fraction is negative or not finite.
    InvalidOvertime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A problem definition that failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid staffing problem: {}", join_messages(.errors))]
pub struct InvalidProblem {
    /// Every detected issue, in detection order.
    pub errors: Vec<ValidationError>,
}

impl InvalidProblem {
    /// Whether any error has the given kind.
    pub fn has_kind(&self, kind: &ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| &e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for InvalidProblem {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. At least one period
/// 2. No duplicate labels
/// 3. `min_headcount <= max_headcount` for every bounded period
/// 4. The last period has `max_headcount == Some(min_headcount)`
/// 5. `max_reduction_fraction` is finite and in `[0, 1)`
/// 6. All unit costs are finite and non-negative
/// 7. The overtime fraction is finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(
    periods: &[PeriodRequirement],
    allowance: &ChangeAllowance,
    costs: &CostModel,
    overtime_fraction: f64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if periods.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProblem,
            "At least one period is required",
        ));
    }

    let mut labels = HashSet::new();
    for period in periods {
        if !labels.insert(period.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("Period '{}' appears more than once", period.label),
            ));
        }

        if let Some(max) = period.max_headcount {
            if period.min_headcount > max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedRange,
                    format!(
                        "Period '{}' has minimum {} above maximum {}",
                        period.label, period.min_headcount, max
                    ),
                ));
            }
        }
    }

    if let Some(last) = periods.last() {
        if !last.is_exact() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OpenFinalPeriod,
                format!(
                    "Final period '{}' must have equal minimum and maximum headcount",
                    last.label
                ),
            ));
        }
    }

    let fraction = allowance.max_reduction_fraction;
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAllowance,
            format!("Reduction fraction must lie in [0, 1), got {fraction}"),
        ));
    }

    let named_costs = [
        ("change", costs.per_head_change_cost),
        ("overstaff", costs.flat_overstaff_cost),
        ("understaff", costs.per_head_understaff_cost),
    ];
    for (name, value) in named_costs {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCost,
                format!("The {name} cost must be a non-negative number, got {value}"),
            ));
        }
    }

    if !overtime_fraction.is_finite() || overtime_fraction < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOvertime,
            format!("Overtime fraction must be non-negative, got {overtime_fraction}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
