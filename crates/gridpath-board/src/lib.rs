//! Board model and weighted-graph construction for gridpath.
//!
//! This crate holds the editable grid ([`Board`]) and the pure function
//! that turns a finished board into the weighted adjacency structure
//! the search engines consume ([`EdgeGraph`]).
//!
//! The board is the mutable editing surface: cells are painted one at a
//! time and the start/end uniqueness invariant is enforced here. The
//! graph is the immutable snapshot handed to a search: it is rebuilt in
//! full for every run, so board edits made while a search is in flight
//! can never affect that search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod graph;

pub use board::Board;
pub use error::BoardError;
pub use graph::{Edge, EdgeGraph};
