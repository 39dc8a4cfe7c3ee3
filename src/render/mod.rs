mod bitmap_backend;
mod document;
mod frame;
mod null_renderer;
mod primitives;

pub use bitmap_backend::{BitmapJpegRenderer, render_chart_jpeg, render_frame_jpeg};
pub use document::render_document_jpeg;
pub use null_renderer::NullRenderer;
pub use frame::{
    CHART_TITLE, CHART_X_LABEL, CHART_Y_LABEL, ChartFrame, CurveTrace, ETC_LINE_TIME, LegendEntry,
    LegendMarker, ReferenceAxis, ReferenceLine, VarianceBand,
};
pub use primitives::{Color, LineStrokeStyle, Viewport, palette};

use crate::error::EvmResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartFrame` so
/// drawing code stays isolated from the metric formulas.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> EvmResult<()>;
}
