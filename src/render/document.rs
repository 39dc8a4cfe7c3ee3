use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::{EvmError, EvmResult};
use crate::render::bitmap_backend::encode_rgb_jpeg;
use crate::render::primitives::Viewport;

const TITLE_FILL: RGBColor = RGBColor(255, 192, 203);
const SUBTITLE_FILL: RGBColor = RGBColor(255, 255, 0);

const TITLE_FONT_SIZE: u32 = 36;
const SUBTITLE_FONT_SIZE: u32 = 22;
const CONTENT_FONT_SIZE: u32 = 16;
const CONTENT_LINE_HEIGHT: i32 = 28;

/// Rasterizes a text document as an in-memory JPEG.
///
/// Layout mirrors the established export look: a pink bordered title block, a
/// yellow bordered subtitle block, and a white bordered content block holding
/// the supplied multi-line text. Pure formatting; no computation.
pub fn render_document_jpeg(
    content: &str,
    title: &str,
    subtitle: &str,
    viewport: Viewport,
) -> EvmResult<Vec<u8>> {
    viewport.validate()?;

    debug!(
        width = viewport.width,
        height = viewport.height,
        title,
        "rendering document jpeg"
    );

    let mut buffer = vec![0_u8; viewport.width as usize * viewport.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (viewport.width, viewport.height))
            .into_drawing_area();
        draw_document(content, title, subtitle, &root)
            .map_err(|e| EvmError::Render(e.to_string()))?;
    }
    encode_rgb_jpeg(&buffer, viewport)
}

fn draw_document<DB: DrawingBackend>(
    content: &str,
    title: &str,
    subtitle: &str,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let width = width as i32;
    let height = height as i32;
    let center_x = width / 2;

    let centered = |size: u32| {
        ("sans-serif", size)
            .into_font()
            .style(plotters::style::FontStyle::Bold)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center))
    };

    // Title block.
    draw_bordered_block(root, (width / 5, 30), (width * 4 / 5, 95), TITLE_FILL)?;
    root.draw(&Text::new(
        title.to_owned(),
        (center_x, 62),
        centered(TITLE_FONT_SIZE),
    ))?;

    // Subtitle block.
    draw_bordered_block(root, (width / 4, 115), (width * 3 / 4, 170), SUBTITLE_FILL)?;
    root.draw(&Text::new(
        subtitle.to_owned(),
        (center_x, 142),
        centered(SUBTITLE_FONT_SIZE),
    ))?;

    // Content block with left-aligned text lines.
    draw_bordered_block(root, (40, 200), (width - 40, height - 40), WHITE)?;
    let line_style = ("sans-serif", CONTENT_FONT_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Top));
    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = 220 + index as i32 * CONTENT_LINE_HEIGHT;
        if y > height - 60 {
            break;
        }
        root.draw(&Text::new(line.to_owned(), (60, y), line_style.clone()))?;
    }

    root.present()
}

fn draw_bordered_block<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    top_left: (i32, i32),
    bottom_right: (i32, i32),
    fill: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.draw(&Rectangle::new([top_left, bottom_right], fill.filled()))?;
    root.draw(&Rectangle::new(
        [top_left, bottom_right],
        ShapeStyle::from(&BLACK).stroke_width(2),
    ))?;
    Ok(())
}
