//! Non-SMT solving methods
//!
//! The non-SMT result file is labeled differently depending on which comparison is
//! drawn: plain backtracking, or backtracking with deduction strategies.

use clap::ValueEnum;
use std::fmt;

/// Which non-SMT method the first result file measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Method {
    /// Plain backtracking search
    Backtracking,
    /// Backtracking with deduction strategies
    Strategies,
}

impl Method {
    /// Column name of the timing value in the shared schema
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Backtracking => "BacktrackingTime",
            Self::Strategies => "StrategiesTime",
        }
    }

    /// Series name shown in chart legends
    #[must_use]
    pub const fn legend(self) -> &'static str {
        match self {
            Self::Backtracking => "Backtracking",
            Self::Strategies => "Strategies",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.legend())
    }
}
