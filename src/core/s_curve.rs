use serde::{Deserialize, Serialize};

use crate::error::{EvmError, EvmResult};

/// Number of samples used for every plotted S-curve.
pub const S_CURVE_SAMPLES: usize = 100;

/// One sample of a progress curve over the normalized time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Normalized time in `[0, 1]`.
    pub t: f64,
    /// Cumulative value at `t`.
    pub value: f64,
}

/// Samples the quadratic progress curve `value(t) = max_value * t^2`.
///
/// `points` samples are spaced evenly over `[0, 1]` inclusive, so
/// `value(0) = 0` and `value(1) = max_value` hold exactly. The quadratic form
/// is a deliberate simplification carried over from the established chart, not
/// a physical S-curve model, and is reproduced as-is for compatibility.
pub fn sample_s_curve(max_value: f64, points: usize) -> EvmResult<Vec<CurvePoint>> {
    if !max_value.is_finite() || max_value < 0.0 {
        return Err(EvmError::InvalidData(format!(
            "curve max value must be finite and non-negative, got {max_value}"
        )));
    }
    if points < 2 {
        return Err(EvmError::InvalidData(format!(
            "curve needs at least 2 sample points, got {points}"
        )));
    }

    let last = (points - 1) as f64;
    let mut samples = Vec::with_capacity(points);
    for i in 0..points {
        let t = i as f64 / last;
        samples.push(CurvePoint {
            t,
            value: max_value * t * t,
        });
    }

    Ok(samples)
}
