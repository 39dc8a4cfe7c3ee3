use crate::error::EvmResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless consumers.
///
/// It still validates frame content so tests can catch invalid geometry
/// without rasterizing anything.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_trace_count: usize,
    pub last_region_count: usize,
    pub last_reference_line_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> EvmResult<()> {
        frame.validate()?;
        self.last_trace_count = frame.traces.len();
        self.last_region_count = frame.bands.iter().map(|b| b.regions.len()).sum();
        self.last_reference_line_count = frame.reference_lines.len();
        Ok(())
    }
}
