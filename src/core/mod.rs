//! Core domain types for solver timing comparisons
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and cheap to copy.

mod board_size;
mod method;
mod record;

pub use board_size::{BoardSize, BoardSizeError};
pub use method::Method;
pub use record::{BenchmarkKey, JoinedRecord, TimingRecord};
