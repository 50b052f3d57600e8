//! Grid command
//!
//! Shows every board size in one interactive window.

use super::compare::Comparison;
use crate::interactive::{App, DEFAULT_TITLE, run_tui};
use anyhow::Result;

/// Configuration for the interactive grid
pub struct GridConfig {
    pub title: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Build the window state for a comparison
#[must_use]
pub fn grid_app(comparison: &Comparison, config: GridConfig) -> App {
    let app = App::new(config.title, comparison.charts());
    log::info!(
        "Grid of {} charts: {} rows x {} columns, {} unused cells",
        app.layout.panels,
        app.layout.rows,
        app.layout.columns,
        app.layout.unused_cells()
    );
    app
}

/// Open the grid window and block until it is closed
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn, or restored.
pub fn run_grid(comparison: &Comparison, config: GridConfig) -> Result<()> {
    run_tui(grid_app(comparison, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::compare::build_comparison;
    use crate::core::Method;
    use crate::data::{MethodRow, SmtRow};

    #[test]
    fn grid_app_has_one_panel_per_board_size() {
        let sizes = [(3, 3), (4, 4), (5, 5), (6, 6)];
        let method_rows = sizes
            .iter()
            .map(|&(height, width)| MethodRow {
                height,
                width,
                boardnum: 1,
                time_s: 0.2,
            })
            .collect();
        let smt_rows = sizes
            .iter()
            .map(|&(height, width)| SmtRow {
                height,
                width,
                boardnum: 1,
                time_seconds: 0.4,
            })
            .collect();
        let comparison = build_comparison(method_rows, smt_rows, Method::Backtracking);

        let app = grid_app(&comparison, GridConfig::default());

        assert_eq!(app.title, DEFAULT_TITLE);
        assert_eq!(app.layout.panels, 4);
        assert_eq!(app.layout.rows, 2);
        assert_eq!(app.layout.unused_cells(), 2);
        assert_eq!(app.charts[3].title(), "6x6");
    }
}
