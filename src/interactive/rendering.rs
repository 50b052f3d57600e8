//! TUI rendering with ratatui
//!
//! One chart per board size, laid out in a fixed-width grid.

use super::app::App;
use crate::render::series::{BoardChart, X_LABEL, Y_LABEL, tick_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

/// Header plus status bar
const CHROME_HEIGHT: u16 = 4;

/// Smallest height a chart row is squeezed to before scrolling kicks in
pub const MIN_CHART_HEIGHT: u16 = 12;

/// Grid rows that fit in a terminal of `height` lines
#[must_use]
pub fn visible_rows(height: u16) -> usize {
    usize::from((height.saturating_sub(CHROME_HEIGHT) / MIN_CHART_HEIGHT).max(1))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Chart grid
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let visible = visible_rows(chunks[1].height + CHROME_HEIGHT);
    if app.charts.is_empty() {
        render_empty(f, chunks[1]);
    } else {
        render_grid(f, app, chunks[1], visible);
    }

    render_status(f, app, chunks[2], visible);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let notice = Paragraph::new("No matching benchmark instances")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect, visible: usize) {
    let layout = app.layout;
    // Only as many rows as remain, so a short grid fills the screen
    let shown = visible
        .min(layout.rows.saturating_sub(app.row_offset))
        .max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, shown as u32); shown])
        .split(area);

    for (slot, &row_area) in row_areas.iter().enumerate() {
        let row = app.row_offset + slot;
        let panels = layout.panels_in_row(row);
        if panels == 0 {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, layout.columns as u32);
                layout.columns
            ])
            .split(row_area);

        // Cells past the last panel stay blank
        for (col, &cell) in cells.iter().take(panels).enumerate() {
            let chart = &app.charts[row * layout.columns + col];
            render_chart(f, chart, cell);
        }
    }
}

fn render_chart(f: &mut Frame, chart: &BoardChart, area: Rect) {
    let (x_low, x_high) = chart.x_bounds();
    let (y_low, y_high) = chart.y_bounds();

    // Vertical grid lines at each instance, unnamed so they stay out of the legend
    let grid_lines: Vec<[(f64, f64); 2]> = chart
        .ticks
        .iter()
        .map(|&tick| [(tick, y_low), (tick, y_high)])
        .collect();

    let mut datasets: Vec<Dataset> = grid_lines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(chart.method.name)
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&chart.method.points),
    );
    datasets.push(
        Dataset::default()
            .name(chart.smt.name)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&chart.smt.points),
    );

    let label_width = chart.ticks.last().map_or(1, |&last| tick_label(last).len());
    let max_labels = usize::from(area.width.saturating_sub(10)) / (label_width + 2);
    let x_labels: Vec<Span> = x_axis_labels(&chart.ticks, max_labels)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = [y_low, (y_low + y_high) / 2.0, y_high]
        .iter()
        .map(|value| Span::raw(format!("{value:.2}")))
        .collect();

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", chart.title()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .x_axis(
            Axis::default()
                .title(X_LABEL)
                .style(Style::default().fg(Color::Gray))
                .bounds([x_low, x_high])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Y_LABEL)
                .style(Style::default().fg(Color::Gray))
                .bounds([y_low, y_high])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Percentage(60), Constraint::Percentage(60)));

    f.render_widget(widget, area);
}

/// X axis labels for ascending, distinct, integral `ticks`
///
/// ratatui spreads labels evenly over the axis, so there is one label per
/// integer from the first to the last instance, blank where no instance
/// exists. Wide ranges are thinned to the smallest step that divides the range
/// and fits in `max_labels`.
fn x_axis_labels(ticks: &[f64], max_labels: usize) -> Vec<String> {
    match ticks {
        [] => Vec::new(),
        // Centered between the padded bounds
        [only] => vec![String::new(), tick_label(*only), String::new()],
        [first, .., last] => {
            let first = *first as u64;
            let span = (*last as u64).saturating_sub(first).max(1);
            let max_steps = (max_labels.max(2) - 1) as u64;
            let step = (1..=span)
                .find(|step| span % step == 0 && span / step <= max_steps)
                .unwrap_or(span);

            (0..=span / step)
                .map(|i| {
                    let value = (first + i * step) as f64;
                    if ticks.binary_search_by(|tick| tick.total_cmp(&value)).is_ok() {
                        tick_label(value)
                    } else {
                        String::new()
                    }
                })
                .collect()
        }
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect, visible: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let rows = app.layout.rows;
    let position = if rows == 0 {
        "No board sizes".to_string()
    } else {
        let last = (app.row_offset + visible).min(rows);
        format!(
            "Board sizes: {} | Rows {}-{} of {}",
            app.charts.len(),
            app.row_offset + 1,
            last,
            rows
        )
    };
    f.render_widget(Paragraph::new(position).alignment(Alignment::Center), chunks[0]);

    let help_text = if rows > visible {
        "q: Quit | ↑/↓: Scroll | PgUp/PgDn: Page"
    } else {
        "q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
