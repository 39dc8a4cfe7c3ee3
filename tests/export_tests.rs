use evm_chart::core::report::{inputs_report, results_report};
use evm_chart::export::{
    DEFAULT_VIEWPORT, ExportBundle, GRAPH_FILE_NAME, INPUT_DATA_FILE_NAME, JPEG_MIME_TYPE,
    METRICS_JSON_SCHEMA_V1, RESULTS_FILE_NAME,
};
use evm_chart::render::Viewport;
use evm_chart::{EvmInputs, EvmMetrics};

fn scenario() -> (EvmInputs, f64, f64) {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");
    (inputs, 250_000.0, 500_000.0)
}

#[test]
fn results_report_lists_all_twelve_metrics_with_two_decimals() {
    let (inputs, ac, pv) = scenario();
    let metrics = EvmMetrics::compute(inputs, ac, pv).expect("compute");
    let report = results_report(&metrics);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Budget at Completion (BAC): 1000000.00");
    assert_eq!(lines[1], "Earned Value (EV): 300000.00");
    assert_eq!(lines[4], "Cost Performance Index (CPI): 1.20");
    assert_eq!(lines[5], "Schedule Performance Index (SPI): 0.60");
    assert_eq!(lines[7], "Schedule Variance (SV): -200000.00");
    assert_eq!(
        lines[8],
        "Estimate at Completion (EAC) based on CPI: 833333.33"
    );
    assert_eq!(lines[11], "Variance at Completion (VAC): 700000.00");
}

#[test]
fn inputs_report_lists_the_live_form_fields() {
    let (inputs, ac, pv) = scenario();
    let report = inputs_report(&inputs, ac, pv);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Performance Percentage (%): 30.00");
    assert_eq!(lines[1], "Total Project Value ($): 1000000.00");
    assert_eq!(lines[2], "Planned Value (PV): 500000.00");
    assert_eq!(lines[3], "Actual Cost (AC): 250000.00");
}

#[test]
fn bundle_carries_three_named_jpeg_artifacts() {
    let (inputs, ac, pv) = scenario();
    let bundle = ExportBundle::build(&inputs, ac, pv, Viewport::new(700, 500)).expect("bundle");

    assert_eq!(bundle.graph.file_name, GRAPH_FILE_NAME);
    assert_eq!(bundle.input_data.file_name, INPUT_DATA_FILE_NAME);
    assert_eq!(bundle.results.file_name, RESULTS_FILE_NAME);

    for artifact in bundle.artifacts() {
        assert_eq!(artifact.mime_type, JPEG_MIME_TYPE);
        assert!(!artifact.bytes.is_empty());
        assert_eq!(&artifact.bytes[..2], &[0xFF, 0xD8]);
    }
}

#[test]
fn default_viewport_matches_established_export_size() {
    assert_eq!(DEFAULT_VIEWPORT.width, 1400);
    assert_eq!(DEFAULT_VIEWPORT.height, 1000);
}

#[test]
fn metrics_json_contract_round_trips() {
    let (inputs, ac, pv) = scenario();
    let metrics = EvmMetrics::compute(inputs, ac, pv).expect("compute");

    let json = metrics.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\""));
    assert!(json.contains(&METRICS_JSON_SCHEMA_V1.to_string()));

    let parsed = EvmMetrics::from_json_compat_str(&json).expect("parse envelope");
    assert_eq!(parsed, metrics);
}

#[test]
fn metrics_json_contract_accepts_bare_metrics_payload() {
    let (inputs, ac, pv) = scenario();
    let metrics = EvmMetrics::compute(inputs, ac, pv).expect("compute");

    let bare = serde_json::to_string(&metrics).expect("serialize bare");
    let parsed = EvmMetrics::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, metrics);
}

#[test]
fn malformed_json_payload_is_rejected() {
    assert!(EvmMetrics::from_json_compat_str("{\"nope\": true}").is_err());
    assert!(EvmMetrics::from_json_compat_str("not json").is_err());
}
