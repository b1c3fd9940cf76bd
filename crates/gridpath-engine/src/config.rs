//! Run configuration.

use std::fmt;

/// Which search engine to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// A* with the Manhattan heuristic.
    #[default]
    AStar,
    /// Breadth-first search.
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar => write!(f, "A*"),
            Self::Bfs => write!(f, "BFS"),
        }
    }
}

/// Everything a single run needs beyond the board itself.
///
/// The default runs A* on a 4-connected graph with trace recording
/// enabled.
///
/// # Examples
///
/// ```
/// use gridpath_engine::{Algorithm, RunRequest};
///
/// let request = RunRequest {
///     algorithm: Algorithm::Bfs,
///     ..RunRequest::default()
/// };
/// assert!(!request.diagonals);
/// assert!(request.record_trace);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRequest {
    /// Which search engine to run.
    pub algorithm: Algorithm,
    /// Include the four diagonal neighbors in the graph.
    pub diagonals: bool,
    /// Record a snapshot after every expansion. Disabling this makes
    /// snapshot production a no-op with zero extra allocation.
    pub record_trace: bool,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            diagonals: false,
            record_trace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_astar_without_diagonals() {
        let request = RunRequest::default();
        assert_eq!(request.algorithm, Algorithm::AStar);
        assert!(!request.diagonals);
        assert!(request.record_trace);
    }

    #[test]
    fn algorithm_display_names() {
        assert_eq!(Algorithm::AStar.to_string(), "A*");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    }
}
