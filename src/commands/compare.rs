//! Shared load -> normalize -> join -> group pipeline

use crate::core::{BoardSize, Method};
use crate::data::loader::{METHOD_RESULTS_FILE, SMT_RESULTS_FILE};
use crate::data::{
    BoardGroup, MethodRow, SmtRow, group_by_board_size, inner_join, load_method_results,
    load_smt_results, normalize_method, normalize_smt, unmatched_rows,
};
use crate::render::series::{BoardChart, build_charts};
use anyhow::Result;
use std::path::PathBuf;

/// Where the result files live and how to label the non-SMT method
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub method_csv: PathBuf,
    pub smt_csv: PathBuf,
    pub method: Method,
}

impl InputConfig {
    /// Default file names in the working directory
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method_csv: PathBuf::from(METHOD_RESULTS_FILE),
            smt_csv: PathBuf::from(SMT_RESULTS_FILE),
            method,
        }
    }
}

/// Joined results grouped by board size
#[derive(Debug, Clone)]
pub struct Comparison {
    pub method: Method,
    pub method_rows: usize,
    pub smt_rows: usize,
    /// Method rows whose key is absent from the SMT results
    pub method_unmatched: usize,
    /// SMT rows whose key is absent from the method results
    pub smt_unmatched: usize,
    pub groups: Vec<BoardGroup>,
}

impl Comparison {
    /// Rows that survived the join
    #[must_use]
    pub fn joined_rows(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// Method rows that found at least one SMT partner
    #[must_use]
    pub fn method_matched(&self) -> usize {
        self.method_rows - self.method_unmatched
    }

    #[must_use]
    pub fn board_sizes(&self) -> Vec<BoardSize> {
        self.groups.iter().map(|g| g.size).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn charts(&self) -> Vec<BoardChart> {
        build_charts(&self.groups, self.method)
    }
}

/// Read both result files and build the comparison
///
/// # Errors
///
/// Returns an error if either file is missing, lacks a required column, or holds
/// an unparseable value.
pub fn load_comparison(config: &InputConfig) -> Result<Comparison> {
    let method_rows = load_method_results(&config.method_csv)?;
    let smt_rows = load_smt_results(&config.smt_csv)?;
    Ok(build_comparison(method_rows, smt_rows, config.method))
}

/// Normalize, join, and group already loaded rows
#[must_use]
pub fn build_comparison(
    method_rows: Vec<MethodRow>,
    smt_rows: Vec<SmtRow>,
    method: Method,
) -> Comparison {
    let method_table = normalize_method(method_rows, method);
    let smt_table = normalize_smt(smt_rows);

    let joined = inner_join(&method_table, &smt_table);
    let (method_unmatched, smt_unmatched) = unmatched_rows(&method_table, &smt_table);
    if method_unmatched > 0 {
        log::warn!(
            "{method_unmatched} {} rows have no {} counterpart",
            method_table.column,
            smt_table.column
        );
    }
    if smt_unmatched > 0 {
        log::warn!(
            "{smt_unmatched} {} rows have no {} counterpart",
            smt_table.column,
            method_table.column
        );
    }
    let groups = group_by_board_size(joined);
    log::info!("Found {} board sizes", groups.len());

    Comparison {
        method,
        method_rows: method_table.len(),
        smt_rows: smt_table.len(),
        method_unmatched,
        smt_unmatched,
        groups,
    }
}
