//! Board size labels
//!
//! A board size groups benchmark instances by their dimensions and renders as
//! `"{height}x{width}"`. Ordering is numeric on `(height, width)`, never lexical.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Dimensions of a Fillomino board
///
/// The derived ordering compares height first, then width, so `9x9` sorts
/// before `10x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize {
    height: u32,
    width: u32,
}

/// Error type for unparseable board size labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSizeError {
    MissingSeparator(String),
    InvalidHeight(ParseIntError),
    InvalidWidth(ParseIntError),
}

impl fmt::Display for BoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(label) => {
                write!(f, "Board size '{label}' is missing the 'x' separator")
            }
            Self::InvalidHeight(e) => write!(f, "Invalid board height: {e}"),
            Self::InvalidWidth(e) => write!(f, "Invalid board width: {e}"),
        }
    }
}

impl std::error::Error for BoardSizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator(_) => None,
            Self::InvalidHeight(e) | Self::InvalidWidth(e) => Some(e),
        }
    }
}

impl BoardSize {
    #[inline]
    #[must_use]
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    #[inline]
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    /// Parse a `"{height}x{width}"` label
    ///
    /// # Examples
    /// ```
    /// use fillomino_plots::core::BoardSize;
    ///
    /// let size: BoardSize = "10x2".parse().unwrap();
    /// assert_eq!((size.height(), size.width()), (10, 2));
    /// assert!("10-2".parse::<BoardSize>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (height, width) = s
            .split_once('x')
            .ok_or_else(|| BoardSizeError::MissingSeparator(s.to_string()))?;

        let height = height.parse().map_err(BoardSizeError::InvalidHeight)?;
        let width = width.parse().map_err(BoardSizeError::InvalidWidth)?;

        Ok(Self::new(height, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_has_no_padding() {
        assert_eq!(BoardSize::new(9, 9).to_string(), "9x9");
        assert_eq!(BoardSize::new(10, 2).to_string(), "10x2");
        assert_eq!(BoardSize::new(12, 100).to_string(), "12x100");
    }

    #[test]
    fn label_parses_back() {
        for size in [BoardSize::new(1, 1), BoardSize::new(9, 9), BoardSize::new(15, 7)] {
            let parsed: BoardSize = size.to_string().parse().unwrap();
            assert_eq!(parsed, size);
        }
    }

    #[test]
    fn numeric_not_lexical_order() {
        let small = BoardSize::new(9, 9);
        let large = BoardSize::new(10, 2);
        assert!(small < large);
        assert!("9x9" > "10x2", "string order would get this wrong");
    }

    #[test]
    fn width_breaks_height_ties() {
        assert!(BoardSize::new(5, 4) < BoardSize::new(5, 10));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(matches!(
            "99".parse::<BoardSize>(),
            Err(BoardSizeError::MissingSeparator(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_halves() {
        assert!(matches!(
            "ax9".parse::<BoardSize>(),
            Err(BoardSizeError::InvalidHeight(_))
        ));
        assert!(matches!(
            "9x".parse::<BoardSize>(),
            Err(BoardSizeError::InvalidWidth(_))
        ));
        assert!(matches!(
            "9x9x9".parse::<BoardSize>(),
            Err(BoardSizeError::InvalidWidth(_))
        ));
    }
}
