//! Shortest-path search engines with incremental trace recording.
//!
//! This crate implements the algorithmic core of gridpath:
//!
//! - **A\*** with the Manhattan heuristic and node reopening ([`astar`])
//! - **BFS** with tri-color bookkeeping and early goal exit ([`bfs`])
//! - **Path reconstruction** from parent pointers ([`reconstruct`])
//! - **Trace recording** of the open/closed-set evolution, one
//!   [`Snapshot`] per expansion, into any [`TraceSink`]
//!
//! Both engines consume an immutable
//! [`EdgeGraph`](gridpath_board::EdgeGraph) and return a per-cell node
//! table ([`AstarTable`] / [`BfsTable`]). The tables implement
//! [`ParentMap`], the seam [`reconstruct`] works through, so callers
//! can treat either result uniformly.
//!
//! Searches are synchronous and run to completion on the calling
//! thread; cooperative cancellation and trace delivery are injected
//! through [`SearchCtx`]. The engines never touch threads or channels
//! themselves; see `gridpath-engine` for background execution.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod ctx;
pub mod path;
mod recorder;
pub mod table;
pub mod trace;

pub use astar::astar;
pub use bfs::bfs;
pub use ctx::SearchCtx;
pub use path::{path_edges, reconstruct};
pub use table::{
    AstarNode, AstarTable, BfsColor, BfsNode, BfsTable, NodeState, ParentMap, UNREACHABLE,
};
pub use trace::{Snapshot, TraceBuffer, TraceSink};
