//! gridpath: grid shortest-path search with step-by-step playback traces.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all gridpath sub-crates. For most users, adding `gridpath` as
//! a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridpath::prelude::*;
//!
//! // Paint a board: start, end, and a wall column with one gap.
//! let mut board = Board::new(5, 5).unwrap();
//! board.place(Cell::Start, Point::new(0, 2)).unwrap();
//! board.place(Cell::End, Point::new(4, 2)).unwrap();
//! for y in 0..4 {
//!     board.place(Cell::Wall, Point::new(2, y)).unwrap();
//! }
//!
//! // Run A* synchronously, recording the trace.
//! let mut run = run_sync(&board, &RunRequest::default()).unwrap();
//! assert_eq!(run.report.outcome, RunOutcome::PathFound);
//! assert_eq!(run.report.path_edges, 8);
//!
//! // Play the search back frame by frame.
//! while let Some(frame) = run.trace.pop() {
//!     let _ = (frame.open, frame.closed);
//! }
//! ```
//!
//! For a search that should not block the caller, use
//! [`engine::spawn_run`] and drain snapshots through the returned
//! [`engine::RunHandle`] while the worker computes.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridpath-core` | Coordinates, cells, cancellation, errors |
//! | [`board`] | `gridpath-board` | The editable board and the graph builder |
//! | [`search`] | `gridpath-search` | A*, BFS, node tables, trace recording |
//! | [`engine`] | `gridpath-engine` | Sync and background-worker run modes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridpath-core`).
///
/// Contains [`types::Point`], [`types::Cell`], [`types::CancelToken`],
/// and the [`types::SearchError`] taxonomy.
pub use gridpath_core as types;

/// Board model and graph construction (`gridpath-board`).
///
/// The editable [`board::Board`] and the [`board::EdgeGraph`] adjacency
/// structure the search engines consume.
pub use gridpath_board as board;

/// Search engines and trace recording (`gridpath-search`).
///
/// [`search::astar`] and [`search::bfs`] over an edge graph, the
/// per-cell result tables, and the [`search::TraceSink`] contract.
pub use gridpath_search as search;

/// Run orchestration (`gridpath-engine`).
///
/// [`engine::run_sync`] for lockstep runs, [`engine::spawn_run`] for
/// background workers streaming snapshots to a consumer.
pub use gridpath_engine as engine;

/// Common imports for typical gridpath usage.
///
/// ```rust
/// use gridpath::prelude::*;
/// ```
pub mod prelude {
    pub use gridpath_board::{Board, BoardError, Edge, EdgeGraph};
    pub use gridpath_core::{CancelToken, Cell, Point, SearchError};
    pub use gridpath_engine::{
        run_sync, spawn_run, Algorithm, RunHandle, RunOutcome, RunReport, RunRequest, SyncRun,
    };
    pub use gridpath_search::{
        astar, bfs, path_edges, reconstruct, SearchCtx, Snapshot, TraceBuffer, TraceSink,
    };
}
