//! Export surface: named JPEG artifacts plus a versioned JSON contract for
//! the numeric results. The core only produces in-memory buffers; persistence
//! and delivery belong to the hosting layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EvmInputs, EvmMetrics, report};
use crate::error::{EvmError, EvmResult};
use crate::render::{Viewport, render_chart_jpeg, render_document_jpeg};

pub const GRAPH_FILE_NAME: &str = "evm_graph.jpg";
pub const INPUT_DATA_FILE_NAME: &str = "evm_input_data.jpg";
pub const RESULTS_FILE_NAME: &str = "evm_results.jpg";
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Default raster size for both the chart and document exports.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1400,
    height: 1000,
};

pub const METRICS_JSON_SCHEMA_V1: u32 = 1;

/// One downloadable file: name, MIME type, and encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// The three downloadable artifacts produced from one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub graph: ExportArtifact,
    pub input_data: ExportArtifact,
    pub results: ExportArtifact,
}

impl ExportBundle {
    /// Computes metrics and renders all three export artifacts.
    pub fn build(inputs: &EvmInputs, ac: f64, pv: f64, viewport: Viewport) -> EvmResult<Self> {
        let metrics = EvmMetrics::compute(*inputs, ac, pv)?;
        debug!(?viewport, "building export bundle");

        let graph = ExportArtifact {
            file_name: GRAPH_FILE_NAME,
            mime_type: JPEG_MIME_TYPE,
            bytes: render_chart_jpeg(&metrics, viewport)?,
        };
        let input_data = ExportArtifact {
            file_name: INPUT_DATA_FILE_NAME,
            mime_type: JPEG_MIME_TYPE,
            bytes: render_document_jpeg(
                &report::inputs_report(inputs, ac, pv),
                "EVM CALCULATOR INPUT DATA",
                "Entered Values",
                viewport,
            )?,
        };
        let results = ExportArtifact {
            file_name: RESULTS_FILE_NAME,
            mime_type: JPEG_MIME_TYPE,
            bytes: render_document_jpeg(
                &report::results_report(&metrics),
                "EVM CALCULATOR RESULTS",
                "Detailed Results",
                viewport,
            )?,
        };

        Ok(Self {
            graph,
            input_data,
            results,
        })
    }

    /// Artifacts in presentation order.
    #[must_use]
    pub fn artifacts(&self) -> [&ExportArtifact; 3] {
        [&self.graph, &self.input_data, &self.results]
    }
}

/// Versioned machine-readable companion to the image exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsJsonContractV1 {
    pub schema_version: u32,
    pub metrics: EvmMetrics,
}

impl EvmMetrics {
    pub fn to_json_contract_v1_pretty(&self) -> EvmResult<String> {
        let payload = MetricsJsonContractV1 {
            schema_version: METRICS_JSON_SCHEMA_V1,
            metrics: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            EvmError::InvalidData(format!("failed to serialize metrics contract v1: {e}"))
        })
    }

    /// Accepts either a bare metrics object or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> EvmResult<Self> {
        if let Ok(metrics) = serde_json::from_str::<EvmMetrics>(input) {
            return Ok(metrics);
        }
        let payload: MetricsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            EvmError::InvalidData(format!("failed to parse metrics json payload: {e}"))
        })?;
        Ok(payload.metrics)
    }
}
