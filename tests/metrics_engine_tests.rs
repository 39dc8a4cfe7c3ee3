use approx::assert_relative_eq;
use evm_chart::{EvmError, EvmInputs, EvmMetrics};

fn scenario_metrics() -> EvmMetrics {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");
    EvmMetrics::compute(inputs, 250_000.0, 500_000.0).expect("compute")
}

#[test]
fn reference_scenario_derives_all_twelve_metrics() {
    let metrics = scenario_metrics();

    assert_eq!(metrics.bac, 1_000_000.0);
    assert_eq!(metrics.ev, 300_000.0);
    assert_eq!(metrics.pv, 500_000.0);
    assert_eq!(metrics.ac, 250_000.0);
    assert_relative_eq!(metrics.cpi, 1.2);
    assert_relative_eq!(metrics.spi, 0.6);
    assert_eq!(metrics.cv, 50_000.0);
    assert_eq!(metrics.sv, -200_000.0);
    assert_relative_eq!(metrics.eac_cpi, 833_333.333_333_333_3, max_relative = 1e-12);
    // ac + (bac - ev) / (cpi * spi)
    assert_relative_eq!(
        metrics.eac_cpi_spi,
        1_222_222.222_222_222,
        max_relative = 1e-12
    );
    assert_relative_eq!(metrics.etc, 583_333.333_333_333_3, max_relative = 1e-12);
    assert_eq!(metrics.vac, 700_000.0);
}

#[test]
fn zero_actual_cost_substitutes_zero_instead_of_failing() {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");
    let metrics = EvmMetrics::compute(inputs, 0.0, 500_000.0).expect("compute");

    assert_eq!(metrics.cpi, 0.0);
    assert_eq!(metrics.eac_cpi, 0.0);
    assert_eq!(metrics.eac_cpi_spi, 0.0);
    assert_eq!(metrics.etc, 0.0);
    // Variances are plain differences and stay live.
    assert_eq!(metrics.cv, 300_000.0);
    assert!(metrics.cpi.is_finite());
}

#[test]
fn zero_planned_value_zeros_schedule_ratio_only() {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");
    let metrics = EvmMetrics::compute(inputs, 250_000.0, 0.0).expect("compute");

    assert_eq!(metrics.spi, 0.0);
    assert_eq!(metrics.eac_cpi_spi, 0.0);
    assert_relative_eq!(metrics.cpi, 1.2);
    assert_eq!(metrics.sv, 300_000.0);
}

#[test]
fn zero_project_value_earns_nothing() {
    let inputs = EvmInputs::new(75.0, 0.0).expect("valid inputs");
    let metrics = EvmMetrics::compute(inputs, 0.0, 0.0).expect("compute");

    assert_eq!(metrics.ev, 0.0);
    assert_eq!(metrics.bac, 0.0);
    assert_eq!(metrics.vac, 0.0);
    assert_eq!(metrics.cpi, 0.0);
    assert_eq!(metrics.spi, 0.0);
}

#[test]
fn variance_identities_hold_exactly() {
    let metrics = scenario_metrics();
    assert_eq!(metrics.cv, metrics.ev - metrics.ac);
    assert_eq!(metrics.sv, metrics.ev - metrics.pv);
    assert_eq!(metrics.vac, metrics.bac - metrics.ev);
}

#[test]
fn out_of_range_percentage_is_rejected() {
    let err = EvmInputs::new(150.0, 1_000.0).unwrap_err();
    assert!(matches!(err, EvmError::InvalidData(_)));

    let err = EvmInputs::new(-1.0, 1_000.0).unwrap_err();
    assert!(matches!(err, EvmError::InvalidData(_)));
}

#[test]
fn non_finite_or_negative_values_are_rejected() {
    assert!(EvmInputs::new(f64::NAN, 1_000.0).is_err());
    assert!(EvmInputs::new(50.0, -1.0).is_err());
    assert!(EvmInputs::new(50.0, f64::INFINITY).is_err());

    let inputs = EvmInputs::new(50.0, 1_000.0).expect("valid inputs");
    assert!(EvmMetrics::compute(inputs, -5.0, 0.0).is_err());
    assert!(EvmMetrics::compute(inputs, 0.0, f64::NAN).is_err());
}

#[test]
fn recomputation_is_pure() {
    let first = scenario_metrics();
    let second = scenario_metrics();
    assert_eq!(first, second);
}
