//! Inner equi-join on the benchmark key
//!
//! Rows whose `(height, width, boardnum)` appears in only one table are dropped.
//! Duplicate keys are not deduplicated: every left match pairs with every right
//! match, as in a relational join.

use super::normalize::TimingTable;
use crate::core::{BenchmarkKey, JoinedRecord};
use rustc_hash::{FxHashMap, FxHashSet};

/// Join the method table with the SMT table
///
/// Output follows the method table's row order; for a duplicated SMT key the
/// matches appear in SMT table order.
#[must_use]
pub fn inner_join(method: &TimingTable, smt: &TimingTable) -> Vec<JoinedRecord> {
    let mut smt_index: FxHashMap<BenchmarkKey, Vec<f64>> = FxHashMap::default();
    for record in &smt.records {
        smt_index.entry(record.key).or_default().push(record.seconds);
    }

    let joined: Vec<JoinedRecord> = method
        .records
        .iter()
        .flat_map(|left| {
            smt_index
                .get(&left.key)
                .map_or(&[][..], Vec::as_slice)
                .iter()
                .map(move |&smt_seconds| JoinedRecord {
                    key: left.key,
                    method_seconds: left.seconds,
                    smt_seconds,
                })
        })
        .collect();

    log::info!(
        "Joined {} {} rows with {} {} rows into {} rows",
        method.len(),
        method.column,
        smt.len(),
        smt.column,
        joined.len()
    );
    if joined.is_empty() && !(method.is_empty() && smt.is_empty()) {
        log::warn!("No benchmark instance appears in both result files");
    }

    joined
}

/// Rows with no partner in the other table, as `(method, smt)` counts
///
/// Counted per input row, independent of how many rows the join produces.
#[must_use]
pub fn unmatched_rows(method: &TimingTable, smt: &TimingTable) -> (usize, usize) {
    let method_keys: FxHashSet<BenchmarkKey> = method.records.iter().map(|r| r.key).collect();
    let smt_keys: FxHashSet<BenchmarkKey> = smt.records.iter().map(|r| r.key).collect();

    let method_only = method
        .records
        .iter()
        .filter(|r| !smt_keys.contains(&r.key))
        .count();
    let smt_only = smt
        .records
        .iter()
        .filter(|r| !method_keys.contains(&r.key))
        .count();
    (method_only, smt_only)
}
