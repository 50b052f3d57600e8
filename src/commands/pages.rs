//! Pages command
//!
//! Saves board size charts in fixed-size batches to numbered PNG files.

use super::compare::Comparison;
use crate::render::layout::{CHARTS_PER_PAGE, PAGE_PREFIX, paginate};
use crate::render::png::{DEFAULT_PAGE_SIZE, render_page};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

/// Configuration for paginated image output
#[derive(Debug, Clone)]
pub struct PagesConfig {
    pub out_dir: PathBuf,
    pub per_page: usize,
    pub prefix: String,
    /// Image size in pixels
    pub size: (u32, u32),
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            per_page: CHARTS_PER_PAGE,
            prefix: PAGE_PREFIX.to_string(),
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Files written by a pages run
pub struct PagesResult {
    pub files: Vec<PathBuf>,
    pub board_sizes: usize,
}

/// Render every page of the comparison
///
/// An empty comparison writes nothing.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a page cannot
/// be drawn or written.
pub fn write_pages(comparison: &Comparison, config: &PagesConfig) -> Result<PagesResult> {
    let charts = comparison.charts();
    let pages = paginate(&charts, config.per_page);

    if pages.is_empty() {
        log::warn!("No board sizes to plot, nothing written");
        return Ok(PagesResult {
            files: Vec::new(),
            board_sizes: 0,
        });
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create {}", config.out_dir.display()))?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut files = Vec::with_capacity(pages.len());
    for page in &pages {
        let path = page.path_in(&config.out_dir, &config.prefix);
        pb.set_message(page.file_name(&config.prefix));

        render_page(page, &path, config.size)
            .with_context(|| format!("Failed to save page {}", page.number))?;
        log::info!("Saved {}", path.display());

        files.push(path);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(PagesResult {
        files,
        board_sizes: charts.len(),
    })
}
