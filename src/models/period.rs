//! Period requirement model.
//!
//! A period is one scheduling unit (typically a month) with a minimum
//! headcount and an optional maximum. Periods are ordered chronologically
//! inside a [`ProblemDefinition`](super::ProblemDefinition).

use serde::{Deserialize, Serialize};

use super::Headcount;

/// Staffing requirement for a single period.
///
/// `max_headcount = None` means the period has no upper bound: any headcount
/// at or above the minimum is acceptable without an overstaffing penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRequirement {
    /// Period label (unique within a problem, e.g. "Mars").
    pub label: String,
    /// Minimum headcount required during the period.
    pub min_headcount: Headcount,
    /// Maximum headcount before the overstaffing penalty applies. `None` = unbounded.
    #[serde(default)]
    pub max_headcount: Option<Headcount>,
}

impl PeriodRequirement {
    /// Creates a requirement with a minimum and no upper bound.
    pub fn new(label: impl Into<String>, min_headcount: Headcount) -> Self {
        Self {
            label: label.into(),
            min_headcount,
            max_headcount: None,
        }
    }

    /// Creates a requirement with an exact headcount (min == max).
    ///
    /// The last period of every problem must be exact.
    pub fn exact(label: impl Into<String>, headcount: Headcount) -> Self {
        Self::new(label, headcount).with_max(headcount)
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max_headcount: Headcount) -> Self {
        self.max_headcount = Some(max_headcount);
        self
    }

    /// Whether the period has no upper bound.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_headcount.is_none()
    }

    /// Whether the period requires one exact headcount.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.max_headcount == Some(self.min_headcount)
    }

    /// Whether `headcount` is below the minimum.
    #[inline]
    pub fn is_understaffed(&self, headcount: Headcount) -> bool {
        headcount < self.min_headcount
    }

    /// Whether `headcount` exceeds a bounded maximum.
    #[inline]
    pub fn is_overstaffed(&self, headcount: Headcount) -> bool {
        self.max_headcount.is_some_and(|max| headcount > max)
    }
}
