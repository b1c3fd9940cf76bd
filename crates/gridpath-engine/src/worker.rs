//! Background search worker streaming snapshots to a consumer.
//!
//! The worker owns its graph and table exclusively (moved in via
//! `thread::spawn`); the only shared state is the cancellation flag
//! and the two channels. The worker is the sole snapshot producer and
//! the [`RunHandle`] the sole consumer, so the trace arrives strictly
//! in append order and no frame is ever mutated after it is sent.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use gridpath_board::{Board, EdgeGraph};
use gridpath_core::{CancelToken, SearchError};
use gridpath_search::{Snapshot, TraceSink};

use crate::config::RunRequest;
use crate::exec::{endpoints, execute};
use crate::report::RunReport;

/// Trace sink that forwards each snapshot over a channel.
struct ChannelSink {
    tx: Sender<Snapshot>,
}

impl TraceSink for ChannelSink {
    fn record(&mut self, snapshot: Snapshot) {
        // Best-effort: the consumer may have dropped its handle.
        let _ = self.tx.send(snapshot);
    }
}

/// Consumer side of a background run started with [`spawn_run`].
///
/// Snapshots arrive in trace order and can be drained at the
/// consumer's own cadence while the search is still producing. The
/// snapshot stream closes once the worker finishes.
pub struct RunHandle {
    snapshots: Receiver<Snapshot>,
    report: Receiver<RunReport>,
    cancel: CancelToken,
    worker: Option<JoinHandle<()>>,
}

impl RunHandle {
    /// Take the next snapshot if one is ready, without blocking.
    ///
    /// Returns `None` both when the stream is momentarily empty and
    /// when it has closed; poll [`is_finished`](Self::is_finished) to
    /// tell the two apart.
    pub fn poll_snapshot(&self) -> Option<Snapshot> {
        self.snapshots.try_recv().ok()
    }

    /// Block until the next snapshot arrives.
    ///
    /// Returns `None` once the worker has finished and every buffered
    /// snapshot has been drained.
    pub fn next_snapshot(&self) -> Option<Snapshot> {
        self.snapshots.recv().ok()
    }

    /// Ask the running search to stop at its next expansion.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Join the worker and return its report.
    ///
    /// Consumes the handle, so drain the snapshot stream first if the
    /// trace matters. Returns `None` only if the worker panicked.
    pub fn wait(mut self) -> Option<RunReport> {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
        self.report.try_recv().ok()
    }
}

/// Start a search on a dedicated worker thread.
///
/// Validates that the board has both endpoints configured (rejecting
/// the request before spawning anything), then builds the graph on the
/// calling thread and hands it to the worker. The graph is an
/// immutable snapshot of the board, so edits made after this call
/// cannot race the search.
///
/// # Examples
///
/// ```
/// use gridpath_board::Board;
/// use gridpath_core::{Cell, Point};
/// use gridpath_engine::{spawn_run, RunOutcome, RunRequest};
///
/// let mut board = Board::new(8, 8).unwrap();
/// board.place(Cell::Start, Point::new(0, 0)).unwrap();
/// board.place(Cell::End, Point::new(7, 7)).unwrap();
///
/// let handle = spawn_run(&board, &RunRequest::default()).unwrap();
/// let mut frames = 0;
/// while let Some(_snapshot) = handle.next_snapshot() {
///     frames += 1;
/// }
/// let report = handle.wait().unwrap();
/// assert_eq!(report.outcome, RunOutcome::PathFound);
/// assert_eq!(frames, report.expanded);
/// ```
pub fn spawn_run(board: &Board, request: &RunRequest) -> Result<RunHandle, SearchError> {
    let (start, end) = endpoints(board)?;
    let graph = EdgeGraph::build(board, request.diagonals);
    let algorithm = request.algorithm;
    let record_trace = request.record_trace;

    let (snapshot_tx, snapshot_rx) = unbounded();
    let (report_tx, report_rx) = bounded(1);
    let cancel = CancelToken::new();
    let token = cancel.clone();

    let worker = thread::spawn(move || {
        log::debug!("search worker started: {algorithm} from {start} to {end}");
        let mut sink = ChannelSink { tx: snapshot_tx };
        let trace: Option<&mut dyn TraceSink> = if record_trace {
            Some(&mut sink)
        } else {
            None
        };
        match execute(&graph, start, end, algorithm, trace, &token) {
            Ok(report) => {
                log::info!(
                    "search worker finished: {} in {:?} ({} expansions)",
                    report.outcome,
                    report.elapsed,
                    report.expanded
                );
                let _ = report_tx.send(report);
            }
            // Unreachable with endpoints taken from the board, but the
            // worker must not panic regardless.
            Err(err) => log::warn!("search worker aborted: {err}"),
        }
    });

    Ok(RunHandle {
        snapshots: snapshot_rx,
        report: report_rx,
        cancel,
        worker: Some(worker),
    })
}
