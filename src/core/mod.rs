pub mod inputs;
pub mod metrics;
pub mod report;
pub mod s_curve;

pub use inputs::EvmInputs;
pub use metrics::EvmMetrics;
pub use s_curve::{CurvePoint, S_CURVE_SAMPLES, sample_s_curve};
