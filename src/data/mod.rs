//! Result loading and shaping
//!
//! Straight-line pipeline: load both CSV files, normalize their columns,
//! inner-join on the benchmark key, then sort and group by board size.

pub mod group;
pub mod join;
pub mod loader;
pub mod normalize;

pub use group::{BoardGroup, board_sizes, group_by_board_size, sort_records};
pub use join::{inner_join, unmatched_rows};
pub use loader::{MethodRow, SmtRow, load_method_results, load_smt_results};
pub use normalize::{SMT_COLUMN, TimingTable, normalize_method, normalize_smt};
