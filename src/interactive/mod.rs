//! Interactive chart grid
//!
//! Terminal window with one chart per board size, three to a row.

mod app;
mod rendering;

pub use app::{App, DEFAULT_TITLE, run_tui};
pub use rendering::{MIN_CHART_HEIGHT, ui, visible_rows};
