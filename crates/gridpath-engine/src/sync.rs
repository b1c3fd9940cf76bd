//! Synchronous runs on the calling thread.

use gridpath_board::{Board, EdgeGraph};
use gridpath_core::{CancelToken, SearchError};
use gridpath_search::TraceBuffer;

use crate::config::RunRequest;
use crate::exec::{endpoints, execute};
use crate::report::RunReport;

/// Result of a [`run_sync`] call: the report plus the recorded trace.
///
/// The trace is a pollable FIFO; it is empty when the request disabled
/// recording.
#[derive(Clone, Debug)]
pub struct SyncRun {
    /// Summary of the run.
    pub report: RunReport,
    /// The recorded snapshot sequence, oldest first.
    pub trace: TraceBuffer,
}

/// Run a search to completion on the calling thread.
///
/// Validates that the board has both endpoints configured, rejecting
/// the request with [`SearchError::StartNotSet`] or
/// [`SearchError::EndNotSet`] before any computation. Then builds the
/// graph and runs the requested algorithm.
///
/// For a search that should not block the caller, use
/// [`spawn_run`](crate::worker::spawn_run) instead.
///
/// # Examples
///
/// ```
/// use gridpath_board::Board;
/// use gridpath_core::{Cell, Point};
/// use gridpath_engine::{run_sync, RunOutcome, RunRequest};
///
/// let mut board = Board::new(4, 4).unwrap();
/// board.place(Cell::Start, Point::new(0, 0)).unwrap();
/// board.place(Cell::End, Point::new(3, 3)).unwrap();
///
/// let run = run_sync(&board, &RunRequest::default()).unwrap();
/// assert_eq!(run.report.outcome, RunOutcome::PathFound);
/// assert_eq!(run.report.path_edges, 6);
/// ```
pub fn run_sync(board: &Board, request: &RunRequest) -> Result<SyncRun, SearchError> {
    let (start, end) = endpoints(board)?;
    let graph = EdgeGraph::build(board, request.diagonals);

    let mut trace = TraceBuffer::new();
    let cancel = CancelToken::new();
    let report = if request.record_trace {
        execute(&graph, start, end, request.algorithm, Some(&mut trace), &cancel)?
    } else {
        execute(&graph, start, end, request.algorithm, None, &cancel)?
    };

    Ok(SyncRun { report, trace })
}
