//! Path reconstruction from parent pointers.

use gridpath_core::Point;

use crate::table::ParentMap;

/// Walk the parent chain from `end` back toward `start`.
///
/// The returned sequence runs from the node adjacent to `end` back to
/// (but excluding) `start`, in parent-chain order, which is the
/// reverse of travel direction. It is empty when no path exists (`end` has no
/// parent), when `start == end`, and when `start` is directly adjacent
/// to `end`; [`path_edges`] disambiguates those cases.
pub fn reconstruct<M: ParentMap>(result: &M, start: Point, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let Some(mut node) = result.parent_of(end) else {
        return path;
    };
    while node != start {
        path.push(node);
        match result.parent_of(node) {
            Some(parent) => node = parent,
            None => break,
        }
    }
    path
}

/// Number of edges the reconstructed path traverses, for display.
///
/// `path` must be the output of [`reconstruct`] for the same `result`
/// and `end`. Returns 0 when the goal was never reached (and for the
/// trivial `start == end` case, where the end node has no parent).
pub fn path_edges<M: ParentMap>(result: &M, end: Point, path: &[Point]) -> u32 {
    if result.parent_of(end).is_some() {
        path.len() as u32 + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::bfs::bfs;
    use crate::ctx::SearchCtx;
    use gridpath_board::{Board, EdgeGraph};
    use gridpath_core::Cell;

    fn open_graph(w: u32, h: u32) -> EdgeGraph {
        EdgeGraph::build(&Board::new(w, h).unwrap(), false)
    }

    #[test]
    fn path_excludes_both_endpoints() {
        let graph = open_graph(4, 1);
        let start = Point::new(0, 0);
        let end = Point::new(3, 0);
        let table = astar(&graph, start, end, &mut SearchCtx::new()).unwrap();
        let path = reconstruct(&table, start, end);
        assert_eq!(path, vec![Point::new(2, 0), Point::new(1, 0)]);
        assert_eq!(path_edges(&table, end, &path), 3);
    }

    #[test]
    fn adjacent_endpoints_give_empty_path_with_one_edge() {
        let graph = open_graph(2, 1);
        let start = Point::new(0, 0);
        let end = Point::new(1, 0);
        let table = bfs(&graph, start, end, &mut SearchCtx::new()).unwrap();
        let path = reconstruct(&table, start, end);
        assert!(path.is_empty());
        assert_eq!(path_edges(&table, end, &path), 1);
    }

    #[test]
    fn unreachable_goal_gives_empty_path_and_zero_edges() {
        let mut board = Board::new(3, 1).unwrap();
        board.place(Cell::Wall, Point::new(1, 0)).unwrap();
        let graph = EdgeGraph::build(&board, false);
        let start = Point::new(0, 0);
        let end = Point::new(2, 0);

        let table = astar(&graph, start, end, &mut SearchCtx::new()).unwrap();
        let path = reconstruct(&table, start, end);
        assert!(path.is_empty());
        assert_eq!(path_edges(&table, end, &path), 0);
    }

    #[test]
    fn start_equals_end_is_empty_with_zero_edges() {
        let graph = open_graph(3, 3);
        let p = Point::new(1, 1);
        let table = bfs(&graph, p, p, &mut SearchCtx::new()).unwrap();
        let path = reconstruct(&table, p, p);
        assert!(path.is_empty());
        assert_eq!(path_edges(&table, p, &path), 0);
    }

    #[test]
    fn bfs_and_astar_agree_on_path_length() {
        let mut board = Board::new(6, 6).unwrap();
        for y in 0..5 {
            board.place(Cell::Wall, Point::new(2, y)).unwrap();
        }
        let graph = EdgeGraph::build(&board, false);
        let start = Point::new(0, 0);
        let end = Point::new(5, 0);

        let a = astar(&graph, start, end, &mut SearchCtx::new()).unwrap();
        let b = bfs(&graph, start, end, &mut SearchCtx::new()).unwrap();
        let ap = reconstruct(&a, start, end);
        let bp = reconstruct(&b, start, end);
        assert_eq!(path_edges(&a, end, &ap), path_edges(&b, end, &bp));
        // Detour around the wall column: down to row 5, across, back up.
        assert_eq!(path_edges(&a, end, &ap), 15);
    }
}
