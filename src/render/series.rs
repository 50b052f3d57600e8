//! Renderer-independent chart model
//!
//! One [`BoardChart`] per board size: two timing series plotted against instance
//! number, plus the axis ticks and bounds both renderers share.

use crate::core::{BoardSize, JoinedRecord, Method};
use crate::data::BoardGroup;

/// X axis label
pub const X_LABEL: &str = "Board Number";

/// Y axis label
pub const Y_LABEL: &str = "Time (s)";

/// Legend name of the SMT series
pub const SMT_LEGEND: &str = "SMT";

/// A named sequence of `(boardnum, seconds)` points
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one board size panel
#[derive(Debug, Clone, PartialEq)]
pub struct BoardChart {
    pub size: BoardSize,
    pub method: Series,
    pub smt: Series,
    /// Every instance number present, ascending and distinct
    pub ticks: Vec<f64>,
}

impl BoardChart {
    /// Build the chart for one board size group
    #[must_use]
    pub fn from_group(group: &BoardGroup, method: Method) -> Self {
        let points = |seconds: fn(&JoinedRecord) -> f64| -> Vec<(f64, f64)> {
            group
                .records
                .iter()
                .map(|record| (f64::from(record.key.boardnum), seconds(record)))
                .collect()
        };

        let mut ticks: Vec<f64> = group
            .records
            .iter()
            .map(|record| f64::from(record.key.boardnum))
            .collect();
        ticks.sort_by(f64::total_cmp);
        ticks.dedup();

        Self {
            size: group.size,
            method: Series {
                name: method.legend(),
                points: points(|r| r.method_seconds),
            },
            smt: Series {
                name: SMT_LEGEND,
                points: points(|r| r.smt_seconds),
            },
            ticks,
        }
    }

    /// Panel title, the board size label
    #[must_use]
    pub fn title(&self) -> String {
        self.size.to_string()
    }

    /// X range covering every tick
    ///
    /// A single instance is padded by half a step on each side so the point is
    /// not drawn on the frame.
    #[must_use]
    pub fn x_bounds(&self) -> (f64, f64) {
        match (self.ticks.first(), self.ticks.last()) {
            (Some(&first), Some(&last)) if first < last => (first, last),
            (Some(&only), _) => (only - 0.5, only + 0.5),
            _ => (0.0, 1.0),
        }
    }

    /// Y range from zero to 5% above the slowest time in either series
    #[must_use]
    pub fn y_bounds(&self) -> (f64, f64) {
        let max = self
            .method
            .points
            .iter()
            .chain(&self.smt.points)
            .map(|&(_, seconds)| seconds)
            .fold(0.0_f64, f64::max);

        if max > 0.0 { (0.0, max * 1.05) } else { (0.0, 1.0) }
    }
}

/// Build one chart per group, keeping group order
#[must_use]
pub fn build_charts(groups: &[BoardGroup], method: Method) -> Vec<BoardChart> {
    groups
        .iter()
        .map(|group| BoardChart::from_group(group, method))
        .collect()
}

/// Format a tick value as an instance number
#[must_use]
pub fn tick_label(value: f64) -> String {
    format!("{value:.0}")
}
