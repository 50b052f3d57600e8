//! Fillomino solver timing comparison
//!
//! Joins backtracking/strategy timings with SMT timings per benchmark instance and
//! plots them per board size, either in an interactive terminal grid or as PNG pages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fillomino_plots::commands::{InputConfig, PagesConfig, load_comparison, write_pages};
//! use fillomino_plots::core::Method;
//!
//! let comparison = load_comparison(&InputConfig::new(Method::Strategies))?;
//! let result = write_pages(&comparison, &PagesConfig::default())?;
//! println!("Wrote {} files", result.files.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

// Core domain types
pub mod core;

// CSV loading, normalization, join, grouping
pub mod data;

// Chart model, layout, image output
pub mod render;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
