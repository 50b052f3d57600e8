//! Image file rendering with plotters
//!
//! Each page becomes one bitmap with a `1 x slots` panel layout. Slots without a
//! chart stay blank.

use super::layout::Page;
use super::series::{BoardChart, X_LABEL, Y_LABEL, tick_label};
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use std::path::Path;

/// Default image size in pixels
pub const DEFAULT_PAGE_SIZE: (u32, u32) = (1400, 600);

const METHOD_COLOR: RGBColor = BLUE;
const SMT_COLOR: RGBColor = RED;

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> anyhow::Error {
    anyhow!("Drawing failed: {err}")
}

/// Render one page and write it to `path`
///
/// The bitmap is flushed and released before returning.
///
/// # Errors
///
/// Returns an error if drawing fails or the image cannot be written.
pub fn render_page(page: &Page<'_>, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_page(&root, page)?;

    root.present()
        .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))?;
    log::debug!(
        "Rendered page {} ({} charts, {} empty slots)",
        page.number,
        page.charts.len(),
        page.empty_slots()
    );
    Ok(())
}

/// Draw a page's charts side by side on a white background
///
/// # Errors
///
/// Returns an error if the backend fails to draw.
pub fn draw_page<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, page: &Page<'_>) -> Result<()> {
    root.fill(&WHITE).map_err(draw_error)?;

    let panels = root.split_evenly((1, page.slots));
    for (panel, chart) in panels.iter().zip(page.charts) {
        draw_panel(panel, chart)?;
    }
    Ok(())
}

/// Draw one board size chart into `area`
///
/// # Errors
///
/// Returns an error if the backend fails to draw.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &BoardChart,
) -> Result<()> {
    let (x_low, x_high) = chart.x_bounds();
    let (y_low, y_high) = chart.y_bounds();

    let mut ctx = ChartBuilder::on(area)
        .caption(chart.title(), ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_low..x_high).with_key_points(chart.ticks.clone()),
            y_low..y_high,
        )
        .map_err(draw_error)?;

    ctx.configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(chart.ticks.len().max(1))
        .x_label_formatter(&|x| tick_label(*x))
        .draw()
        .map_err(draw_error)?;

    ctx.draw_series(LineSeries::new(
        chart.method.points.iter().copied(),
        METHOD_COLOR.stroke_width(2),
    ))
    .map_err(draw_error)?
    .label(chart.method.name)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], METHOD_COLOR.stroke_width(2)));
    ctx.draw_series(
        chart
            .method
            .points
            .iter()
            .map(|&point| Circle::new(point, 4, METHOD_COLOR.filled())),
    )
    .map_err(draw_error)?;

    ctx.draw_series(LineSeries::new(
        chart.smt.points.iter().copied(),
        SMT_COLOR.stroke_width(2),
    ))
    .map_err(draw_error)?
    .label(chart.smt.name)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SMT_COLOR.stroke_width(2)));
    ctx.draw_series(
        chart
            .smt
            .points
            .iter()
            .map(|&point| Cross::new(point, 5, SMT_COLOR.stroke_width(2))),
    )
    .map_err(draw_error)?;

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BenchmarkKey, BoardSize, JoinedRecord, Method};
    use crate::data::BoardGroup;
    use crate::render::layout::{CHARTS_PER_PAGE, PAGE_PREFIX, paginate};
    use crate::render::series::build_charts;

    fn chart(height: u32, width: u32) -> Vec<BoardChart> {
        let group = BoardGroup {
            size: BoardSize::new(height, width),
            records: vec![
                JoinedRecord {
                    key: BenchmarkKey::new(height, width, 1),
                    method_seconds: 0.5,
                    smt_seconds: 1.2,
                },
                JoinedRecord {
                    key: BenchmarkKey::new(height, width, 2),
                    method_seconds: 0.7,
                    smt_seconds: 1.1,
                },
            ],
        };
        build_charts(&[group], Method::Strategies)
    }

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[test]
    fn panel_has_labels_and_legend() {
        let charts = chart(9, 9);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (700, 500)).into_drawing_area();
            draw_panel(&root, &charts[0]).unwrap();
            root.present().unwrap();
        }

        for text in ["9x9", "Board Number", "Time (s)", "Strategies", "SMT"] {
            assert!(svg.contains(text), "missing {text}");
        }
    }

    #[test]
    fn writes_png_with_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let charts = chart(9, 9);
        let pages = paginate(&charts, CHARTS_PER_PAGE);
        let path = pages[0].path_in(dir.path(), PAGE_PREFIX);

        render_page(&pages[0], &path, (800, 300)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(png_dimensions(&bytes), (800, 300));
    }

    #[test]
    fn empty_slot_stays_blank() {
        let (width, height) = (400_u32, 200_u32);
        let charts = chart(9, 9);
        let pages = paginate(&charts, CHARTS_PER_PAGE);
        assert_eq!(pages[0].empty_slots(), 1);

        let mut pixels = vec![0_u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            draw_page(&root, &pages[0]).unwrap();
            root.present().unwrap();
        }

        let is_white = |x: u32, y: u32| {
            let idx = ((y * width + x) * 3) as usize;
            pixels[idx..idx + 3] == [255, 255, 255]
        };
        let left_drawn = (0..height).any(|y| (0..width / 2).any(|x| !is_white(x, y)));
        let right_blank = (0..height).all(|y| (width / 2..width).all(|x| is_white(x, y)));

        assert!(left_drawn);
        assert!(right_blank);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let charts = chart(4, 4);
        let pages = paginate(&charts, CHARTS_PER_PAGE);
        let path = dir.path().join("missing").join("page.png");

        assert!(render_page(&pages[0], &path, (400, 200)).is_err());
    }
}
