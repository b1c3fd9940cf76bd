//! Live open/closed bookkeeping behind the trace contract.

use gridpath_core::Point;
use indexmap::IndexSet;

use crate::trace::{Snapshot, TraceSink};

/// Maintains the live open and closed sets during a search and copies
/// them into value [`Snapshot`]s at each capture point.
///
/// Insertion order is preserved (`IndexSet`), so snapshot lists come
/// out in discovery order and identical runs produce identical traces.
/// Engines only construct one of these when tracing is requested; with
/// no recorder, recording is a true no-op with zero allocation.
pub(crate) struct Recorder<'a, 'sink> {
    open: IndexSet<Point>,
    closed: IndexSet<Point>,
    sink: &'a mut (dyn TraceSink + 'sink),
}

impl<'a, 'sink> Recorder<'a, 'sink> {
    pub(crate) fn new(sink: &'a mut (dyn TraceSink + 'sink)) -> Self {
        Self {
            open: IndexSet::new(),
            closed: IndexSet::new(),
            sink,
        }
    }

    /// A cell entered the open set (first discovery or re-relaxation
    /// while still open).
    pub(crate) fn mark_open(&mut self, p: Point) {
        self.open.insert(p);
    }

    /// A closed cell was reopened by a cheaper path.
    pub(crate) fn mark_reopened(&mut self, p: Point) {
        self.closed.shift_remove(&p);
        self.open.insert(p);
    }

    /// A cell finished expansion.
    pub(crate) fn mark_closed(&mut self, p: Point) {
        self.open.shift_remove(&p);
        self.closed.insert(p);
    }

    /// Append a full value copy of both sets to the sink.
    pub(crate) fn capture(&mut self) {
        self.sink.record(Snapshot {
            open: self.open.iter().copied().collect(),
            closed: self.closed.iter().copied().collect(),
        });
    }
}
