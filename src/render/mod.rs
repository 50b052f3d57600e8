//! Chart model, layout, and image output

pub mod layout;
pub mod png;
pub mod series;

pub use layout::{CHARTS_PER_PAGE, GRID_COLUMNS, GridLayout, PAGE_PREFIX, Page, paginate};
pub use png::{DEFAULT_PAGE_SIZE, draw_page, draw_panel, render_page};
pub use series::{BoardChart, Series, build_charts};
