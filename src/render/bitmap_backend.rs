use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
// Keep the plotters color trait nameable despite the local `Color` struct.
use plotters::style::Color as _;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::core::EvmMetrics;
use crate::error::{EvmError, EvmResult};
use crate::render::frame::{ChartFrame, LegendMarker, ReferenceAxis};
use crate::render::primitives::{Color, LineStrokeStyle, Viewport};
use crate::render::Renderer;

const JPEG_QUALITY: u8 = 90;

/// Pixel strip reserved below the plot for the legend.
const LEGEND_HEIGHT: u32 = 130;
const LEGEND_COLUMNS: usize = 3;
const LEGEND_ROW_HEIGHT: i32 = 28;
const LEGEND_SWATCH_WIDTH: i32 = 24;

fn to_rgba(color: Color) -> RGBAColor {
    RGBAColor(
        (color.red * 255.0).round() as u8,
        (color.green * 255.0).round() as u8,
        (color.blue * 255.0).round() as u8,
        color.alpha,
    )
}

/// Computes the chart frame for `metrics` and rasterizes it to a JPEG buffer.
pub fn render_chart_jpeg(metrics: &EvmMetrics, viewport: Viewport) -> EvmResult<Vec<u8>> {
    let frame = ChartFrame::from_metrics(metrics)?;
    render_frame_jpeg(&frame, viewport)
}

/// Rasterizes one chart frame into an in-memory JPEG.
///
/// The drawing surface is allocated per call and released on return; no
/// state survives between renders, so identical frames produce identical
/// buffers.
pub fn render_frame_jpeg(frame: &ChartFrame, viewport: Viewport) -> EvmResult<Vec<u8>> {
    viewport.validate()?;
    frame.validate()?;
    if viewport.height <= LEGEND_HEIGHT {
        return Err(EvmError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    debug!(
        width = viewport.width,
        height = viewport.height,
        traces = frame.traces.len(),
        "rendering chart frame"
    );

    let mut buffer = vec![0_u8; viewport.width as usize * viewport.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (viewport.width, viewport.height))
            .into_drawing_area();
        draw_frame(frame, &root).map_err(|e| EvmError::Render(e.to_string()))?;
    }
    encode_rgb_jpeg(&buffer, viewport)
}

fn draw_frame<DB: DrawingBackend>(
    frame: &ChartFrame,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (_, height) = root.dim_in_pixel();
    let (plot_area, legend_area) = root.split_vertically((height - LEGEND_HEIGHT) as i32);

    let (y_min, y_max) = frame.value_range();
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(
            frame.title.as_str(),
            ("sans-serif", 22)
                .into_font()
                .style(plotters::style::FontStyle::Bold),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..1.0_f64, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(frame.x_label.as_str())
        .y_desc(frame.y_label.as_str())
        .draw()?;

    // Shaded variance regions go under the curve strokes.
    for band in &frame.bands {
        let style = to_rgba(band.color).filled();
        for region in &band.regions {
            let vertices: Vec<(f64, f64)> = region.iter().map(|p| (p.t, p.value)).collect();
            chart.draw_series(std::iter::once(Polygon::new(vertices, style)))?;
        }
    }

    for trace in &frame.traces {
        let style = ShapeStyle::from(to_rgba(trace.color)).stroke_width(2);
        chart.draw_series(LineSeries::new(
            trace.points.iter().map(|p| (p.t, p.value)),
            style,
        ))?;
    }

    for line in &frame.reference_lines {
        let points = match line.axis {
            ReferenceAxis::Horizontal { value } => vec![(0.0, value), (1.0, value)],
            ReferenceAxis::Vertical { t } => vec![(t, y_min), (t, y_max)],
        };
        let style = ShapeStyle::from(to_rgba(line.color)).stroke_width(1);
        match line.stroke {
            LineStrokeStyle::Dashed => {
                chart.draw_series(DashedLineSeries::new(points, 8, 5, style))?;
            }
            LineStrokeStyle::Solid => {
                chart.draw_series(LineSeries::new(points, style))?;
            }
        }
    }

    draw_legend(frame, &legend_area)?;
    root.present()
}

/// Draws the legend strip below the plot, three columns wide.
fn draw_legend<DB: DrawingBackend>(
    frame: &ChartFrame,
    area: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (width, _) = area.dim_in_pixel();
    let column_width = width as i32 / LEGEND_COLUMNS as i32;
    let label_style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (index, entry) in frame.legend_entries().iter().enumerate() {
        let column = (index % LEGEND_COLUMNS) as i32;
        let row = (index / LEGEND_COLUMNS) as i32;
        let x = column * column_width + 12;
        let y = row * LEGEND_ROW_HEIGHT + LEGEND_ROW_HEIGHT / 2;

        match entry.marker {
            LegendMarker::Line => {
                area.draw(&PathElement::new(
                    vec![(x, y), (x + LEGEND_SWATCH_WIDTH, y)],
                    ShapeStyle::from(to_rgba(entry.color)).stroke_width(2),
                ))?;
            }
            LegendMarker::Patch => {
                area.draw(&Rectangle::new(
                    [(x, y - 6), (x + LEGEND_SWATCH_WIDTH, y + 6)],
                    to_rgba(entry.color).filled(),
                ))?;
            }
        }
        area.draw(&Text::new(
            entry.label.to_owned(),
            (x + LEGEND_SWATCH_WIDTH + 6, y),
            label_style.clone(),
        ))?;
    }
    Ok(())
}

pub(crate) fn encode_rgb_jpeg(buffer: &[u8], viewport: Viewport) -> EvmResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    encoder.encode(
        buffer,
        viewport.width,
        viewport.height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

/// Renderer that rasterizes frames to JPEG at a fixed viewport.
///
/// The most recent buffer is held until taken, so callers driving the
/// [`Renderer`] trait can fetch the encoded artifact after `render`.
#[derive(Debug)]
pub struct BitmapJpegRenderer {
    viewport: Viewport,
    last_jpeg: Option<Vec<u8>>,
}

impl BitmapJpegRenderer {
    pub fn new(viewport: Viewport) -> EvmResult<Self> {
        viewport.validate()?;
        Ok(Self {
            viewport,
            last_jpeg: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Takes the JPEG produced by the most recent `render` call, if any.
    pub fn take_jpeg(&mut self) -> Option<Vec<u8>> {
        self.last_jpeg.take()
    }
}

impl Renderer for BitmapJpegRenderer {
    fn render(&mut self, frame: &ChartFrame) -> EvmResult<()> {
        self.last_jpeg = Some(render_frame_jpeg(frame, self.viewport)?);
        Ok(())
    }
}
