//! Error taxonomy for search requests.
//!
//! "No path found" is deliberately absent: an unreachable goal is a
//! first-class result (an empty path), not an error.

use std::error::Error;
use std::fmt;

use crate::point::Point;

/// Why a search request could not run, or did not run to completion.
///
/// All variants are local, recoverable-by-caller conditions. There is
/// no retry policy: a search is deterministic and side-effect-free on
/// its inputs, so retrying without changing the board is meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The board has no start cell placed.
    StartNotSet,
    /// The board has no end cell placed.
    EndNotSet,
    /// A requested coordinate falls outside the board rectangle.
    OutOfBounds {
        /// The offending coordinate.
        point: Point,
    },
    /// The search was cancelled via its [`CancelToken`](crate::CancelToken)
    /// before reaching the goal.
    Cancelled,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNotSet => write!(f, "start cell is not set"),
            Self::EndNotSet => write!(f, "end cell is not set"),
            Self::OutOfBounds { point } => {
                write!(f, "coordinate {point} is outside the board")
            }
            Self::Cancelled => write!(f, "search cancelled"),
        }
    }
}

impl Error for SearchError {}
