//! Breadth-first search over the board graph.

use std::collections::VecDeque;

use gridpath_board::EdgeGraph;
use gridpath_core::{Point, SearchError};

use crate::ctx::SearchCtx;
use crate::recorder::Recorder;
use crate::table::{BfsColor, BfsNode, BfsTable};

/// Compute shortest unweighted paths from `start` toward `end` using
/// breadth-first search.
///
/// Standard tri-color BFS: a white neighbor is grayed (depth = parent
/// depth + 1) on first discovery, and a node turns black once all its
/// neighbors have been scanned. Because every edge costs 1, the first
/// discovery of a node is already its shortest route, so the search
/// stops as soon as the end node has a parent. The check runs after
/// each close, which can leave the final trace step covering less than
/// a full frontier wave.
///
/// `start == end` returns immediately: zero expansions, empty trace,
/// no parent on the end node.
///
/// If `ctx.trace` is set, a [`Snapshot`](crate::trace::Snapshot) of the
/// gray and black sets is recorded after every completed expansion.
///
/// # Errors
///
/// - [`SearchError::OutOfBounds`] if `start` or `end` falls outside the
///   graph rectangle.
/// - [`SearchError::Cancelled`] if `ctx.cancel` fires between
///   expansions.
pub fn bfs(
    graph: &EdgeGraph,
    start: Point,
    end: Point,
    ctx: &mut SearchCtx<'_>,
) -> Result<BfsTable, SearchError> {
    let start_idx = graph
        .index_of(start)
        .ok_or(SearchError::OutOfBounds { point: start })?;
    let end_idx = graph
        .index_of(end)
        .ok_or(SearchError::OutOfBounds { point: end })?;

    let mut table = BfsTable::new(graph);
    if start_idx == end_idx {
        return Ok(table);
    }

    let cancel = ctx.cancel.clone();
    let mut recorder = ctx.trace.as_deref_mut().map(Recorder::new);

    table.nodes[start_idx] = BfsNode {
        color: BfsColor::Gray,
        depth: 0,
        parent: None,
    };
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(start_idx);
    if let Some(r) = recorder.as_mut() {
        r.mark_open(start);
    }

    while let Some(ci) = queue.pop_front() {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let cur = graph.point_at(ci);
        let cur_depth = table.nodes[ci].depth;

        for edge in graph.edges(cur) {
            if edge.weight == 0 {
                continue;
            }
            let Some(ni) = graph.index_of(edge.target) else {
                continue;
            };
            if table.nodes[ni].color != BfsColor::White {
                continue;
            }

            table.nodes[ni] = BfsNode {
                color: BfsColor::Gray,
                depth: cur_depth + 1,
                parent: Some(cur),
            };
            queue.push_back(ni);
            if let Some(r) = recorder.as_mut() {
                r.mark_open(edge.target);
            }
        }

        table.nodes[ci].color = BfsColor::Black;
        table.expanded += 1;
        if let Some(r) = recorder.as_mut() {
            r.mark_closed(cur);
            r.capture();
        }

        // First discovery is shortest on unweighted edges: once the end
        // node has a parent there is nothing left to improve.
        if table.nodes[end_idx].parent.is_some() {
            break;
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::UNREACHABLE;
    use crate::trace::TraceBuffer;
    use gridpath_board::Board;
    use gridpath_core::Cell;

    fn open_graph(w: u32, h: u32, diagonals: bool) -> EdgeGraph {
        EdgeGraph::build(&Board::new(w, h).unwrap(), diagonals)
    }

    // ── Basic search ────────────────────────────────────────────

    #[test]
    fn depth_equals_manhattan_on_open_grid() {
        let graph = open_graph(7, 7, false);
        let end = Point::new(6, 3);
        let table = bfs(&graph, Point::new(0, 0), end, &mut SearchCtx::new()).unwrap();
        assert_eq!(table.node(end).unwrap().depth, 9);
        assert_eq!(table.node(end).unwrap().color, BfsColor::Gray);
    }

    #[test]
    fn diagonal_shortcut_halves_the_depth() {
        let start = Point::new(0, 0);
        let end = Point::new(5, 5);
        let with = bfs(&open_graph(6, 6, true), start, end, &mut SearchCtx::new()).unwrap();
        assert_eq!(with.node(end).unwrap().depth, 5);

        let without = bfs(&open_graph(6, 6, false), start, end, &mut SearchCtx::new()).unwrap();
        assert_eq!(without.node(end).unwrap().depth, 10);
    }

    #[test]
    fn stops_early_once_end_is_discovered() {
        // On a long open row the end is discovered well before the
        // whole board would flood.
        let graph = open_graph(9, 3, false);
        let table = bfs(
            &graph,
            Point::new(0, 1),
            Point::new(3, 1),
            &mut SearchCtx::new(),
        )
        .unwrap();
        assert!(table.expanded() < 27);
    }

    // ── Edge cases ──────────────────────────────────────────────

    #[test]
    fn start_equals_end_expands_nothing() {
        let graph = open_graph(5, 5, false);
        let p = Point::new(1, 3);
        let mut buffer = TraceBuffer::new();
        let mut ctx = SearchCtx {
            trace: Some(&mut buffer),
            ..SearchCtx::new()
        };
        let table = bfs(&graph, p, p, &mut ctx).unwrap();
        assert_eq!(table.expanded(), 0);
        assert_eq!(table.node(p).unwrap().parent, None);
        assert_eq!(table.node(p).unwrap().color, BfsColor::White);
        assert!(buffer.is_empty());
    }

    #[test]
    fn walled_off_goal_stays_white() {
        let mut board = Board::new(5, 1).unwrap();
        for x in 1..4 {
            board.place(Cell::Wall, Point::new(x, 0)).unwrap();
        }
        let graph = EdgeGraph::build(&board, false);
        let end = Point::new(4, 0);
        let table = bfs(&graph, Point::new(0, 0), end, &mut SearchCtx::new()).unwrap();
        let goal = table.node(end).unwrap();
        assert_eq!(goal.color, BfsColor::White);
        assert_eq!(goal.depth, UNREACHABLE);
        assert_eq!(goal.parent, None);
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let graph = open_graph(4, 4, false);
        let bad = Point::new(-1, 2);
        assert!(matches!(
            bfs(&graph, bad, Point::new(0, 0), &mut SearchCtx::new()),
            Err(SearchError::OutOfBounds { point }) if point == bad
        ));
        assert!(matches!(
            bfs(&graph, Point::new(0, 0), bad, &mut SearchCtx::new()),
            Err(SearchError::OutOfBounds { point }) if point == bad
        ));
    }

    #[test]
    fn cancelled_token_aborts_before_expanding() {
        let graph = open_graph(16, 16, false);
        let mut ctx = SearchCtx::new();
        ctx.cancel.cancel();
        let result = bfs(&graph, Point::new(0, 0), Point::new(15, 15), &mut ctx);
        assert!(matches!(result, Err(SearchError::Cancelled)));
    }

    // ── Trace ───────────────────────────────────────────────────

    #[test]
    fn one_snapshot_per_expansion() {
        let graph = open_graph(5, 5, false);
        let mut buffer = TraceBuffer::new();
        let mut ctx = SearchCtx {
            trace: Some(&mut buffer),
            ..SearchCtx::new()
        };
        let table = bfs(&graph, Point::new(0, 0), Point::new(4, 4), &mut ctx).unwrap();
        assert_eq!(buffer.len(), table.expanded() as usize);
    }

    #[test]
    fn final_snapshot_blacks_match_expansions() {
        let graph = open_graph(6, 4, false);
        let mut buffer = TraceBuffer::new();
        let mut ctx = SearchCtx {
            trace: Some(&mut buffer),
            ..SearchCtx::new()
        };
        let table = bfs(&graph, Point::new(0, 0), Point::new(5, 3), &mut ctx).unwrap();
        let last = buffer.iter().last().unwrap().clone();
        assert_eq!(last.closed.len(), table.expanded() as usize);
    }
}
