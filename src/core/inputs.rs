use serde::{Deserialize, Serialize};

use crate::error::{EvmError, EvmResult};

/// Validated calculator inputs.
///
/// The original entry form also captures BAC, PV, EV, and AC directly, but
/// BAC and EV are superseded by values derived from these two fields before
/// any computation runs. PV and AC remain live measured scalars and are
/// supplied separately to [`EvmMetrics::compute`](crate::core::EvmMetrics::compute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvmInputs {
    performance_percentage: f64,
    total_project_value: f64,
}

impl EvmInputs {
    /// Builds validated inputs.
    ///
    /// `performance_percentage` must be finite and within `[0, 100]`;
    /// `total_project_value` must be finite and non-negative.
    pub fn new(performance_percentage: f64, total_project_value: f64) -> EvmResult<Self> {
        if !performance_percentage.is_finite() || !(0.0..=100.0).contains(&performance_percentage) {
            return Err(EvmError::InvalidData(format!(
                "performance percentage must be finite and in [0, 100], got {performance_percentage}"
            )));
        }
        if !total_project_value.is_finite() || total_project_value < 0.0 {
            return Err(EvmError::InvalidData(format!(
                "total project value must be finite and non-negative, got {total_project_value}"
            )));
        }

        Ok(Self {
            performance_percentage,
            total_project_value,
        })
    }

    #[must_use]
    pub fn performance_percentage(self) -> f64 {
        self.performance_percentage
    }

    #[must_use]
    pub fn total_project_value(self) -> f64 {
        self.total_project_value
    }

    /// Budget at Completion equals the total project value.
    #[must_use]
    pub fn budget_at_completion(self) -> f64 {
        self.total_project_value
    }

    /// Earned Value derived from completion percentage.
    ///
    /// A zero-value project always earns zero, regardless of percentage.
    #[must_use]
    pub fn earned_value(self) -> f64 {
        if self.total_project_value == 0.0 {
            return 0.0;
        }
        (self.performance_percentage / 100.0) * self.total_project_value
    }
}

/// Validates a measured cost or planned-value scalar supplied alongside the form inputs.
pub(crate) fn validate_measured(field: &str, value: f64) -> EvmResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(EvmError::InvalidData(format!(
            "{field} must be finite and non-negative, got {value}"
        )));
    }
    Ok(value)
}
