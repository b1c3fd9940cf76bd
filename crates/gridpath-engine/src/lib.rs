//! Run orchestration for gridpath searches.
//!
//! This crate turns a painted [`Board`](gridpath_board::Board) and a
//! [`RunRequest`] into a finished [`RunReport`], in one of two modes:
//!
//! - [`run_sync`]: the search runs to completion on the calling thread
//!   and the recorded trace comes back as an in-process buffer.
//! - [`spawn_run`]: the search runs on a dedicated worker thread while
//!   the caller drains snapshots through a [`RunHandle`] at its own
//!   cadence, and can cancel the run cooperatively.
//!
//! Both modes validate the board configuration up front (a missing
//! start or end rejects the request before any computation), build the
//! graph as an immutable snapshot of the board, and measure the
//! elapsed wall-clock time around the search invocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod exec;
pub mod report;
pub mod sync;
pub mod worker;

pub use config::{Algorithm, RunRequest};
pub use report::{RunOutcome, RunReport};
pub use sync::{run_sync, SyncRun};
pub use worker::{spawn_run, RunHandle};
