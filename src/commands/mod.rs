//! Command implementations

pub mod compare;
pub mod grid;
pub mod pages;

pub use compare::{Comparison, InputConfig, build_comparison, load_comparison};
pub use grid::{GridConfig, grid_app, run_grid};
pub use pages::{PagesConfig, PagesResult, write_pages};
