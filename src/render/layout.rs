//! Panel layout math
//!
//! Grid placement for the interactive window and pagination for image files.

use super::series::BoardChart;
use std::path::{Path, PathBuf};

/// Columns in the interactive grid
pub const GRID_COLUMNS: usize = 3;

/// Charts per image file
pub const CHARTS_PER_PAGE: usize = 2;

/// File name prefix of saved pages
pub const PAGE_PREFIX: &str = "smt_vs_strategies_part";

/// A `rows x columns` grid holding `panels` charts in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub panels: usize,
}

impl GridLayout {
    /// Grid with `columns` columns and just enough rows for `panels`
    ///
    /// A column count of zero is treated as one.
    #[must_use]
    pub fn new(panels: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            columns,
            rows: panels.div_ceil(columns),
            panels,
        }
    }

    #[must_use]
    pub const fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Cells left empty in the last row
    #[must_use]
    pub const fn unused_cells(&self) -> usize {
        self.cells() - self.panels
    }

    /// `(row, column)` of panel `index`, or `None` past the last panel
    #[must_use]
    pub const fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.panels {
            Some((index / self.columns, index % self.columns))
        } else {
            None
        }
    }

    /// Panels in `row`; the last row may be partially filled
    #[must_use]
    pub fn panels_in_row(&self, row: usize) -> usize {
        if row >= self.rows {
            return 0;
        }
        (self.panels - row * self.columns).min(self.columns)
    }
}

/// One image file worth of charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,
    pub charts: &'a [BoardChart],
    pub slots: usize,
}

impl Page<'_> {
    /// Slots with no chart, removed from the saved figure
    #[must_use]
    pub const fn empty_slots(&self) -> usize {
        self.slots - self.charts.len()
    }

    #[must_use]
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{prefix}{}.png", self.number)
    }

    #[must_use]
    pub fn path_in(&self, dir: &Path, prefix: &str) -> PathBuf {
        dir.join(self.file_name(prefix))
    }
}

/// Batch charts into pages of `per_page`, numbered from 1
///
/// A page size of zero is treated as one.
#[must_use]
pub fn paginate(charts: &[BoardChart], per_page: usize) -> Vec<Page<'_>> {
    let per_page = per_page.max(1);
    charts
        .chunks(per_page)
        .enumerate()
        .map(|(idx, charts)| Page {
            number: idx + 1,
            charts,
            slots: per_page,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, Method};
    use crate::data::BoardGroup;
    use crate::render::series::build_charts;

    fn charts(count: u32) -> Vec<BoardChart> {
        let groups: Vec<BoardGroup> = (1..=count)
            .map(|n| BoardGroup {
                size: BoardSize::new(n, n),
                records: Vec::new(),
            })
            .collect();
        build_charts(&groups, Method::Strategies)
    }

    #[test]
    fn grid_rounds_rows_up() {
        let grid = GridLayout::new(7, GRID_COLUMNS);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cells(), 9);
        assert_eq!(grid.unused_cells(), 2);
    }

    #[test]
    fn full_grid_has_no_unused_cells() {
        let grid = GridLayout::new(6, GRID_COLUMNS);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.unused_cells(), 0);
        assert_eq!(grid.panels_in_row(1), 3);
    }

    #[test]
    fn grid_positions_are_row_major() {
        let grid = GridLayout::new(5, GRID_COLUMNS);
        assert_eq!(grid.position(0), Some((0, 0)));
        assert_eq!(grid.position(2), Some((0, 2)));
        assert_eq!(grid.position(4), Some((1, 1)));
        assert_eq!(grid.position(5), None);
        assert_eq!(grid.panels_in_row(1), 2);
        assert_eq!(grid.panels_in_row(2), 0);
    }

    #[test]
    fn empty_grid() {
        let grid = GridLayout::new(0, GRID_COLUMNS);
        assert_eq!(grid.rows, 0);
        assert_eq!(grid.unused_cells(), 0);
    }

    #[test]
    fn page_count_is_ceiling_of_half() {
        for count in 0..8 {
            let charts = charts(count);
            let pages = paginate(&charts, CHARTS_PER_PAGE);
            assert_eq!(pages.len(), (count as usize).div_ceil(2), "{count} charts");
        }
    }

    #[test]
    fn odd_count_leaves_one_empty_slot_on_last_page() {
        let charts = charts(5);
        let pages = paginate(&charts, CHARTS_PER_PAGE);

        let last = pages.last().unwrap();
        assert_eq!(last.charts.len(), 1);
        assert_eq!(last.empty_slots(), 1);
        assert!(pages[..pages.len() - 1].iter().all(|p| p.empty_slots() == 0));
    }

    #[test]
    fn even_count_fills_every_page() {
        let charts = charts(4);
        let pages = paginate(&charts, CHARTS_PER_PAGE);
        assert!(pages.iter().all(|p| p.charts.len() == 2));
    }

    #[test]
    fn pages_keep_chart_order_and_number_from_one() {
        let charts = charts(3);
        let pages = paginate(&charts, CHARTS_PER_PAGE);

        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[0].charts[1].title(), "2x2");
        assert_eq!(pages[1].charts[0].title(), "3x3");
    }

    #[test]
    fn file_names_are_numbered() {
        let charts = charts(3);
        let pages = paginate(&charts, CHARTS_PER_PAGE);

        assert_eq!(pages[0].file_name(PAGE_PREFIX), "smt_vs_strategies_part1.png");
        assert_eq!(
            pages[1].path_in(Path::new("out"), PAGE_PREFIX),
            Path::new("out").join("smt_vs_strategies_part2.png")
        );
    }
}
