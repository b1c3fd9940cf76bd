//! A* shortest-path search with node reopening.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_board::EdgeGraph;
use gridpath_core::{Point, SearchError};

use crate::ctx::SearchCtx;
use crate::recorder::Recorder;
use crate::table::{AstarTable, NodeState};

/// Reference into the node table, ordered by `f` for use in `BinaryHeap`.
///
/// The heap uses lazy deletion: relaxing a node pushes a fresh entry
/// and leaves the old one in place. An entry is stale, and skipped on
/// pop, when the node is no longer open or its `f` has moved on.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    idx: usize,
    f: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (a max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest paths from `start` toward `end` using A* with the
/// Manhattan heuristic.
///
/// Returns the full node table whether or not the goal was reached;
/// an unset parent on the end node means no path exists. The search
/// terminates as soon as the goal is popped from the open queue, so
/// the goal itself is never closed.
///
/// A closed node is reopened when a cheaper path to it is discovered
/// later. The Manhattan heuristic is consistent on 4-connected boards,
/// where this cannot trigger, but the engine does not rely on that.
///
/// If `ctx.trace` is set, a [`Snapshot`](crate::trace::Snapshot) of the
/// open and closed sets is recorded after every completed expansion.
///
/// # Errors
///
/// - [`SearchError::OutOfBounds`] if `start` or `end` falls outside the
///   graph rectangle.
/// - [`SearchError::Cancelled`] if `ctx.cancel` fires between
///   expansions.
pub fn astar(
    graph: &EdgeGraph,
    start: Point,
    end: Point,
    ctx: &mut SearchCtx<'_>,
) -> Result<AstarTable, SearchError> {
    let start_idx = graph
        .index_of(start)
        .ok_or(SearchError::OutOfBounds { point: start })?;
    let end_idx = graph
        .index_of(end)
        .ok_or(SearchError::OutOfBounds { point: end })?;

    let cancel = ctx.cancel.clone();
    let mut recorder = ctx.trace.as_deref_mut().map(Recorder::new);

    let mut table = AstarTable::new(graph, end);
    {
        let node = &mut table.nodes[start_idx];
        node.g = 0;
        node.f = node.h;
        node.state = NodeState::Open;
    }

    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    open.push(OpenRef {
        idx: start_idx,
        f: table.nodes[start_idx].f,
    });
    if let Some(r) = recorder.as_mut() {
        r.mark_open(start);
    }

    while let Some(entry) = open.pop() {
        let ci = entry.idx;

        // Skip stale lazy-deleted entries.
        if table.nodes[ci].state != NodeState::Open || table.nodes[ci].f != entry.f {
            continue;
        }

        if ci == end_idx {
            break;
        }

        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let cur = graph.point_at(ci);
        let cur_g = table.nodes[ci].g;

        for edge in graph.edges(cur) {
            if edge.weight == 0 {
                continue;
            }
            let Some(ni) = graph.index_of(edge.target) else {
                continue;
            };

            let new_g = cur_g + 1;
            let new_f = table.nodes[ni].h + new_g;
            if new_f >= table.nodes[ni].f {
                continue;
            }

            let was = table.nodes[ni].state;
            let n = &mut table.nodes[ni];
            n.g = new_g;
            n.f = new_f;
            n.parent = Some(cur);
            n.state = NodeState::Open;
            open.push(OpenRef { idx: ni, f: new_f });

            if let Some(r) = recorder.as_mut() {
                if was == NodeState::Closed {
                    r.mark_reopened(edge.target);
                } else {
                    r.mark_open(edge.target);
                }
            }
        }

        table.nodes[ci].state = NodeState::Closed;
        table.expanded += 1;
        if let Some(r) = recorder.as_mut() {
            r.mark_closed(cur);
            r.capture();
        }
    }

    Ok(table)
}
