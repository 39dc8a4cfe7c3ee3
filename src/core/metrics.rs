use serde::{Deserialize, Serialize};

use crate::core::inputs::{EvmInputs, validate_measured};
use crate::error::EvmResult;

/// Full set of derived Earned Value Management metrics.
///
/// Plain value object: recomputed fresh from the inputs on every request and
/// passed explicitly into rendering code. Ratio and estimate fields use a
/// zero-substitution policy for undefined divisions (see [`EvmMetrics::compute`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvmMetrics {
    /// Budget at Completion.
    pub bac: f64,
    /// Earned Value.
    pub ev: f64,
    /// Planned Value.
    pub pv: f64,
    /// Actual Cost.
    pub ac: f64,
    /// Cost Performance Index, `ev / ac`.
    pub cpi: f64,
    /// Schedule Performance Index, `ev / pv`.
    pub spi: f64,
    /// Cost Variance, `ev - ac`.
    pub cv: f64,
    /// Schedule Variance, `ev - pv`.
    pub sv: f64,
    /// Estimate at Completion based on CPI, `bac / cpi`.
    pub eac_cpi: f64,
    /// Estimate at Completion based on CPI and SPI, `ac + (bac - ev) / (cpi * spi)`.
    pub eac_cpi_spi: f64,
    /// Estimate to Complete, `eac_cpi - ac`.
    pub etc: f64,
    /// Variance at Completion, `bac - ev`.
    pub vac: f64,
}

impl EvmMetrics {
    /// Derives all twelve metrics from the form inputs plus measured AC and PV.
    ///
    /// Any ratio or estimate whose denominator is zero evaluates to `0.0`
    /// rather than raising an error or producing NaN/infinity. This hides the
    /// distinction between "zero" and "undefined" but matches the established
    /// calculator behavior and is preserved for compatibility.
    pub fn compute(inputs: EvmInputs, ac: f64, pv: f64) -> EvmResult<Self> {
        let ac = validate_measured("actual cost", ac)?;
        let pv = validate_measured("planned value", pv)?;

        let bac = inputs.budget_at_completion();
        let ev = inputs.earned_value();

        let cpi = if ac != 0.0 { ev / ac } else { 0.0 };
        let spi = if pv != 0.0 { ev / pv } else { 0.0 };
        let cv = ev - ac;
        let sv = ev - pv;
        let eac_cpi = if cpi != 0.0 { bac / cpi } else { 0.0 };
        let eac_cpi_spi = if cpi * spi != 0.0 {
            ac + (bac - ev) / (cpi * spi)
        } else {
            0.0
        };
        let etc = if cpi != 0.0 { eac_cpi - ac } else { 0.0 };
        let vac = bac - ev;

        Ok(Self {
            bac,
            ev,
            pv,
            ac,
            cpi,
            spi,
            cv,
            sv,
            eac_cpi,
            eac_cpi_spi,
            etc,
            vac,
        })
    }
}
