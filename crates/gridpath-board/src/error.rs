//! Error types for board construction and editing.

use gridpath_core::Point;
use std::fmt;

/// Errors arising from board construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate is outside the bounds of the board.
    CoordOutOfBounds {
        /// The offending coordinate.
        point: Point,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { point, bounds } => {
                write!(f, "coordinate {point} out of bounds: {bounds}")
            }
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
