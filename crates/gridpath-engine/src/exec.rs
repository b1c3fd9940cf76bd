//! Shared execution path for synchronous and worker runs.

use std::time::Instant;

use gridpath_board::{Board, EdgeGraph};
use gridpath_core::{CancelToken, Point, SearchError};
use gridpath_search::{astar, bfs, path_edges, reconstruct, SearchCtx, TraceSink};

use crate::config::Algorithm;
use crate::report::{RunOutcome, RunReport};

/// Pull the configured endpoints off the board, or reject the request
/// before any computation happens.
pub(crate) fn endpoints(board: &Board) -> Result<(Point, Point), SearchError> {
    let start = board.start().ok_or(SearchError::StartNotSet)?;
    let end = board.end().ok_or(SearchError::EndNotSet)?;
    Ok((start, end))
}

/// Run the selected algorithm and summarize the result.
///
/// Elapsed wall-clock time is measured here, around the search and
/// path reconstruction, so both run modes report it identically.
/// Cancellation is folded into the report as
/// [`RunOutcome::Cancelled`]; only bounds violations surface as errors.
pub(crate) fn execute(
    graph: &EdgeGraph,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    trace: Option<&mut dyn TraceSink>,
    cancel: &CancelToken,
) -> Result<RunReport, SearchError> {
    let began = Instant::now();
    let mut ctx = SearchCtx {
        trace,
        cancel: cancel.clone(),
    };

    let searched = match algorithm {
        Algorithm::AStar => astar(graph, start, end, &mut ctx).map(|table| {
            let path = reconstruct(&table, start, end);
            let edges = path_edges(&table, end, &path);
            (path, edges, table.expanded())
        }),
        Algorithm::Bfs => bfs(graph, start, end, &mut ctx).map(|table| {
            let path = reconstruct(&table, start, end);
            let edges = path_edges(&table, end, &path);
            (path, edges, table.expanded())
        }),
    };
    let elapsed = began.elapsed();

    match searched {
        Ok((path, edges, expanded)) => {
            let outcome = if edges > 0 || start == end {
                RunOutcome::PathFound
            } else {
                RunOutcome::NoPath
            };
            Ok(RunReport {
                outcome,
                path,
                path_edges: edges,
                expanded,
                elapsed,
            })
        }
        Err(SearchError::Cancelled) => Ok(RunReport {
            outcome: RunOutcome::Cancelled,
            path: Vec::new(),
            path_edges: 0,
            expanded: 0,
            elapsed,
        }),
        Err(err) => Err(err),
    }
}
