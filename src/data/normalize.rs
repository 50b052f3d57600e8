//! Column normalization
//!
//! Maps each source-specific row type onto the shared schema
//! (`Height`, `Width`, `Boardnum`, plus one labeled timing column).

use super::loader::{MethodRow, SmtRow};
use crate::core::{BenchmarkKey, Method, TimingRecord};

/// Timing column label of the normalized SMT table
pub const SMT_COLUMN: &str = "SMTTime";

/// A normalized result table with a single labeled timing column
#[derive(Debug, Clone, PartialEq)]
pub struct TimingTable {
    pub column: &'static str,
    pub records: Vec<TimingRecord>,
}

impl TimingTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<MethodRow> for TimingRecord {
    fn from(row: MethodRow) -> Self {
        Self {
            key: BenchmarkKey::new(row.height, row.width, row.boardnum),
            seconds: row.time_s,
        }
    }
}

impl From<SmtRow> for TimingRecord {
    fn from(row: SmtRow) -> Self {
        Self {
            key: BenchmarkKey::new(row.height, row.width, row.boardnum),
            seconds: row.time_seconds,
        }
    }
}

/// Relabel backtracking/strategies rows under the method's timing column
#[must_use]
pub fn normalize_method(rows: Vec<MethodRow>, method: Method) -> TimingTable {
    TimingTable {
        column: method.column(),
        records: rows.into_iter().map(TimingRecord::from).collect(),
    }
}

/// Relabel SMT rows under [`SMT_COLUMN`]
#[must_use]
pub fn normalize_smt(rows: Vec<SmtRow>) -> TimingTable {
    TimingTable {
        column: SMT_COLUMN,
        records: rows.into_iter().map(TimingRecord::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn method_rows_keep_values() {
        let rows = vec![MethodRow {
            height: 6,
            width: 8,
            boardnum: 3,
            time_s: 0.42,
        }];
        let table = normalize_method(rows, Method::Strategies);

        assert_eq!(table.column, "StrategiesTime");
        assert_eq!(
            table.records,
            vec![TimingRecord {
                key: BenchmarkKey::new(6, 8, 3),
                seconds: 0.42,
            }]
        );
    }

    #[test]
    fn smt_rows_use_smt_column() {
        let rows = vec![
            SmtRow {
                height: 9,
                width: 9,
                boardnum: 1,
                time_seconds: 1.2,
            },
            SmtRow {
                height: 9,
                width: 9,
                boardnum: 2,
                time_seconds: 1.1,
            },
        ];
        let table = normalize_smt(rows);

        assert_eq!(table.column, SMT_COLUMN);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[1].key, BenchmarkKey::new(9, 9, 2));
        assert_eq!(table.records[1].seconds, 1.1);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = normalize_method(Vec::new(), Method::Backtracking);
        assert!(table.is_empty());
        assert_eq!(table.column, "BacktrackingTime");
    }
}
