//! The result of a completed run.

use std::fmt;
use std::time::Duration;

use gridpath_core::Point;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The goal was reached; the report carries the path.
    PathFound,
    /// The whole reachable region was explored without finding the
    /// goal. Not an error: the path is simply empty.
    NoPath,
    /// The run was cancelled before it could finish.
    Cancelled,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound => write!(f, "path found"),
            Self::NoPath => write!(f, "no path"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Summary of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Intermediate path cells from the node adjacent to the end back
    /// to (but excluding) the start; empty when no path was found.
    pub path: Vec<Point>,
    /// Number of edges the path traverses, 0 when no path was found or
    /// the start equals the end.
    pub path_edges: u32,
    /// Number of node expansions performed (0 for a cancelled run).
    pub expanded: u32,
    /// Wall-clock duration of the search and path reconstruction,
    /// measured around the invocation boundary.
    pub elapsed: Duration,
}
