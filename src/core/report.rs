//! Plain-text report formatting for display and document export.
//!
//! Every numeric value renders as two-decimal fixed-point, matching the
//! on-screen results panel.

use crate::core::{EvmInputs, EvmMetrics};

/// Formats the twelve derived metrics as labeled lines.
#[must_use]
pub fn results_report(metrics: &EvmMetrics) -> String {
    let rows = [
        ("Budget at Completion (BAC)", metrics.bac),
        ("Earned Value (EV)", metrics.ev),
        ("Planned Value (PV)", metrics.pv),
        ("Actual Cost (AC)", metrics.ac),
        ("Cost Performance Index (CPI)", metrics.cpi),
        ("Schedule Performance Index (SPI)", metrics.spi),
        ("Cost Variance (CV)", metrics.cv),
        ("Schedule Variance (SV)", metrics.sv),
        ("Estimate at Completion (EAC) based on CPI", metrics.eac_cpi),
        (
            "Estimate at Completion (EAC) based on CPI and SPI",
            metrics.eac_cpi_spi,
        ),
        ("Estimate to Complete (ETC)", metrics.etc),
        ("Variance at Completion (VAC)", metrics.vac),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label}: {value:.2}\n"));
    }
    out
}

/// Formats the entry-form values for the input-data document.
#[must_use]
pub fn inputs_report(inputs: &EvmInputs, ac: f64, pv: f64) -> String {
    let rows = [
        ("Performance Percentage (%)", inputs.performance_percentage()),
        ("Total Project Value ($)", inputs.total_project_value()),
        ("Planned Value (PV)", pv),
        ("Actual Cost (AC)", ac),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label}: {value:.2}\n"));
    }
    out
}
