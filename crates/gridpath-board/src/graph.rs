//! Weighted adjacency graph built from a finished board.

use gridpath_core::Point;
use smallvec::SmallVec;

use crate::board::Board;

/// Cardinal neighbor offsets: W, E, N, S.
///
/// Enumeration order is part of the engine contract: snapshot
/// sequences and tie-breaking depend on it, so it must stay fixed.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal neighbor offsets: NW, SW, NE, SE.
const OFFSETS_DIAG: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A directed edge to a geometric neighbor.
///
/// `weight == 0` means "no traversable edge" (the target is out of
/// bounds, or either endpoint is a wall); `weight == 1` means
/// traversable. The target coordinates are recorded even for weight-0
/// edges, so every cell carries a fixed-size edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The neighbor this edge points at.
    pub target: Point,
    /// 0 = blocked, 1 = traversable.
    pub weight: u32,
}

/// The weighted adjacency structure of a board.
///
/// Every cell has exactly 4 edges (or 8 with diagonals enabled), one
/// per geometric neighbor, in the fixed order W, E, N, S (then NW, SW,
/// NE, SE). Diagonal edges are not corner-cut-checked: a diagonal move
/// is allowed even when both orthogonal neighbors are walls.
///
/// The graph is immutable once built and is rebuilt in full for every
/// run, so it acts as a point-in-time snapshot of the board: edits made
/// to the board afterwards cannot affect a search already holding the
/// graph.
///
/// # Examples
///
/// ```
/// use gridpath_board::{Board, EdgeGraph};
/// use gridpath_core::{Cell, Point};
///
/// let mut board = Board::new(3, 3).unwrap();
/// board.place(Cell::Wall, Point::new(1, 1)).unwrap();
/// let graph = EdgeGraph::build(&board, false);
///
/// // Every edge into the wall has weight 0.
/// let into_wall: u32 = graph
///     .edges(Point::new(1, 0))
///     .iter()
///     .filter(|e| e.target == Point::new(1, 1))
///     .map(|e| e.weight)
///     .sum();
/// assert_eq!(into_wall, 0);
/// ```
#[derive(Clone, Debug)]
pub struct EdgeGraph {
    width: u32,
    height: u32,
    diagonals: bool,
    edges: Vec<SmallVec<[Edge; 8]>>,
}

impl EdgeGraph {
    /// Build the adjacency structure for `board`.
    ///
    /// Pure function of its inputs: no side effects, deterministic,
    /// `O(width · height · k)` for `k ∈ {4, 8}`.
    pub fn build(board: &Board, diagonals: bool) -> Self {
        let width = board.width();
        let height = board.height();
        let mut edges = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let from = Point::new(x, y);
                let from_is_wall = board.tile(from).is_some_and(|c| c.is_wall());

                let edge_to = |dx: i32, dy: i32| {
                    let target = Point::new(x + dx, y + dy);
                    let traversable =
                        !from_is_wall && board.tile(target).is_some_and(|c| !c.is_wall());
                    Edge {
                        target,
                        weight: traversable as u32,
                    }
                };

                let mut list: SmallVec<[Edge; 8]> = SmallVec::new();
                for (dx, dy) in OFFSETS_4 {
                    list.push(edge_to(dx, dy));
                }
                if diagonals {
                    for (dx, dy) in OFFSETS_DIAG {
                        list.push(edge_to(dx, dy));
                    }
                }
                edges.push(list);
            }
        }

        Self {
            width,
            height,
            diagonals,
            edges,
        }
    }

    /// Graph width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Graph height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether diagonal edges were included.
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `p` lies inside the graph rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u32) < self.width && p.y >= 0 && (p.y as u32) < self.height
    }

    /// The outgoing edges of `p`, or an empty slice if `p` is out of
    /// bounds.
    pub fn edges(&self, p: Point) -> &[Edge] {
        match self.index_of(p) {
            Some(i) => &self.edges[i],
            None => &[],
        }
    }

    /// Flat row-major index of `p`. Returns `None` if out of bounds.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// The inverse of [`index_of`](Self::index_of) for in-range indices.
    pub fn point_at(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Cell;
    use proptest::prelude::*;

    fn open_board(w: u32, h: u32) -> Board {
        Board::new(w, h).unwrap()
    }

    // ── Shape tests ─────────────────────────────────────────────

    #[test]
    fn every_cell_has_four_edges_without_diagonals() {
        let graph = EdgeGraph::build(&open_board(4, 3), false);
        for i in 0..graph.cell_count() {
            assert_eq!(graph.edges(graph.point_at(i)).len(), 4);
        }
    }

    #[test]
    fn every_cell_has_eight_edges_with_diagonals() {
        let graph = EdgeGraph::build(&open_board(4, 3), true);
        for i in 0..graph.cell_count() {
            assert_eq!(graph.edges(graph.point_at(i)).len(), 8);
        }
    }

    #[test]
    fn edge_order_is_w_e_n_s() {
        let graph = EdgeGraph::build(&open_board(3, 3), false);
        let targets: Vec<Point> = graph
            .edges(Point::new(1, 1))
            .iter()
            .map(|e| e.target)
            .collect();
        assert_eq!(
            targets,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
    }

    // ── Weight tests ────────────────────────────────────────────

    #[test]
    fn interior_edges_are_traversable() {
        let graph = EdgeGraph::build(&open_board(3, 3), false);
        assert!(graph
            .edges(Point::new(1, 1))
            .iter()
            .all(|e| e.weight == 1));
    }

    #[test]
    fn corner_keeps_placeholder_edges_out_of_bounds() {
        let graph = EdgeGraph::build(&open_board(3, 3), false);
        let edges = graph.edges(Point::new(0, 0));
        assert_eq!(edges.len(), 4);
        assert_eq!(edges.iter().filter(|e| e.weight == 1).count(), 2);
        // The out-of-bounds targets are recorded with weight 0.
        assert!(edges
            .iter()
            .any(|e| e.target == Point::new(-1, 0) && e.weight == 0));
    }

    #[test]
    fn wall_blocks_in_both_directions() {
        let mut board = open_board(3, 1);
        board.place(Cell::Wall, Point::new(1, 0)).unwrap();
        let graph = EdgeGraph::build(&board, false);

        // Into the wall.
        assert!(graph
            .edges(Point::new(0, 0))
            .iter()
            .all(|e| e.weight == 0 || e.target != Point::new(1, 0)));
        // Out of the wall: a wall cell has no traversable edges at all.
        assert!(graph
            .edges(Point::new(1, 0))
            .iter()
            .all(|e| e.weight == 0));
    }

    #[test]
    fn start_and_end_cells_are_traversable() {
        let mut board = open_board(2, 1);
        board.place(Cell::Start, Point::new(0, 0)).unwrap();
        board.place(Cell::End, Point::new(1, 0)).unwrap();
        let graph = EdgeGraph::build(&board, false);
        assert!(graph
            .edges(Point::new(0, 0))
            .iter()
            .any(|e| e.target == Point::new(1, 0) && e.weight == 1));
    }

    #[test]
    fn diagonal_edges_ignore_corner_cutting() {
        // Both orthogonal neighbors of the diagonal move are walls; the
        // diagonal edge must still be traversable.
        let mut board = open_board(2, 2);
        board.place(Cell::Wall, Point::new(1, 0)).unwrap();
        board.place(Cell::Wall, Point::new(0, 1)).unwrap();
        let graph = EdgeGraph::build(&board, true);
        assert!(graph
            .edges(Point::new(0, 0))
            .iter()
            .any(|e| e.target == Point::new(1, 1) && e.weight == 1));
    }

    // ── Index tests ─────────────────────────────────────────────

    #[test]
    fn index_round_trips() {
        let graph = EdgeGraph::build(&open_board(5, 4), false);
        for i in 0..graph.cell_count() {
            assert_eq!(graph.index_of(graph.point_at(i)), Some(i));
        }
    }

    #[test]
    fn out_of_bounds_has_no_index_and_no_edges() {
        let graph = EdgeGraph::build(&open_board(5, 4), false);
        assert_eq!(graph.index_of(Point::new(5, 0)), None);
        assert_eq!(graph.index_of(Point::new(0, -1)), None);
        assert!(graph.edges(Point::new(99, 99)).is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_walled_board() -> impl Strategy<Value = Board> {
        (2u32..8, 2u32..8)
            .prop_flat_map(|(w, h)| {
                let cells = (w * h) as usize;
                (
                    Just(w),
                    Just(h),
                    proptest::collection::vec(prop::bool::weighted(0.3), cells),
                )
            })
            .prop_map(|(w, h, walls)| {
                let mut board = Board::new(w, h).unwrap();
                for (i, is_wall) in walls.into_iter().enumerate() {
                    if is_wall {
                        let p = Point::new((i as u32 % w) as i32, (i as u32 / w) as i32);
                        board.place(Cell::Wall, p).unwrap();
                    }
                }
                board
            })
    }

    proptest! {
        #[test]
        fn traversable_edges_are_symmetric(board in arb_walled_board()) {
            // weight(a -> b) == weight(b -> a): the wall rule blocks both
            // endpoints, so traversability cannot be one-directional.
            let graph = EdgeGraph::build(&board, true);
            for i in 0..graph.cell_count() {
                let a = graph.point_at(i);
                for e in graph.edges(a) {
                    if e.weight == 0 {
                        continue;
                    }
                    let back = graph
                        .edges(e.target)
                        .iter()
                        .find(|r| r.target == a)
                        .map(|r| r.weight);
                    prop_assert_eq!(back, Some(1));
                }
            }
        }

        #[test]
        fn build_is_deterministic(board in arb_walled_board()) {
            let a = EdgeGraph::build(&board, true);
            let b = EdgeGraph::build(&board, true);
            for i in 0..a.cell_count() {
                let p = a.point_at(i);
                prop_assert_eq!(a.edges(p), b.edges(p));
            }
        }
    }
}
