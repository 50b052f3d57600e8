//! Benchmark records
//!
//! Both result files describe the same benchmark instances, identified by board
//! dimensions and instance number. Rows are normalized into [`TimingRecord`]s and
//! joined into [`JoinedRecord`]s.

use super::BoardSize;

/// Identity of one benchmark instance: `(height, width, boardnum)`
///
/// Ordered by height, then width, then instance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BenchmarkKey {
    pub height: u32,
    pub width: u32,
    pub boardnum: u32,
}

impl BenchmarkKey {
    #[inline]
    #[must_use]
    pub const fn new(height: u32, width: u32, boardnum: u32) -> Self {
        Self {
            height,
            width,
            boardnum,
        }
    }

    /// Board size group this instance belongs to
    #[inline]
    #[must_use]
    pub const fn board_size(&self) -> BoardSize {
        BoardSize::new(self.height, self.width)
    }
}

/// One timing measurement in the shared schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub key: BenchmarkKey,
    pub seconds: f64,
}

/// A benchmark instance present in both result files
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedRecord {
    pub key: BenchmarkKey,
    /// Backtracking or strategies time
    pub method_seconds: f64,
    pub smt_seconds: f64,
}

impl JoinedRecord {
    #[inline]
    #[must_use]
    pub const fn board_size(&self) -> BoardSize {
        self.key.board_size()
    }
}
