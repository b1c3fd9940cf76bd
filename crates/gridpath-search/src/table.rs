//! Per-cell search state tables.
//!
//! Each search invocation owns a fresh table sized to the graph; tables
//! are never shared between runs. The tables are also the search
//! result: the parent pointers they hold drive
//! [`reconstruct`](crate::path::reconstruct), and a missing parent on
//! the end node is the "no path" signal.

use gridpath_board::EdgeGraph;
use gridpath_core::Point;

/// Sentinel cost meaning "not yet discovered".
pub const UNREACHABLE: i32 = i32::MAX;

// ── A* ──────────────────────────────────────────────────────────

/// Lifecycle of a cell during an A* search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
    /// Never discovered.
    #[default]
    Unvisited,
    /// Discovered, waiting in the open queue.
    Open,
    /// Fully expanded. May return to `Open` if a cheaper path appears.
    Closed,
}

/// A* search state for one cell.
///
/// `h` is fixed at table creation (Manhattan distance to the goal) and
/// never changes; `f = g + h` holds whenever `g` is finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AstarNode {
    /// Where the cell sits in the open/closed lifecycle.
    pub state: NodeState,
    /// Best known cost from the start, or [`UNREACHABLE`].
    pub g: i32,
    /// `g + h`, or [`UNREACHABLE`] until first discovered.
    pub f: i32,
    /// Heuristic distance to the goal.
    pub h: i32,
    /// Predecessor on the best known path, unset for the start cell.
    pub parent: Option<Point>,
}

/// The full A* node table for one search invocation.
#[derive(Clone, Debug)]
pub struct AstarTable {
    width: u32,
    height: u32,
    pub(crate) nodes: Vec<AstarNode>,
    pub(crate) expanded: u32,
}

impl AstarTable {
    /// Fresh table for `graph`, with every cell's heuristic set to its
    /// Manhattan distance to `goal`.
    pub(crate) fn new(graph: &EdgeGraph, goal: Point) -> Self {
        let nodes = (0..graph.cell_count())
            .map(|i| AstarNode {
                state: NodeState::Unvisited,
                g: UNREACHABLE,
                f: UNREACHABLE,
                h: graph.point_at(i).manhattan(goal),
                parent: None,
            })
            .collect();
        Self {
            width: graph.width(),
            height: graph.height(),
            nodes,
            expanded: 0,
        }
    }

    /// The node for `p`, or `None` if `p` is out of bounds.
    pub fn node(&self, p: Point) -> Option<&AstarNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Number of cells this search fully expanded (closed at least once).
    pub fn expanded(&self) -> u32 {
        self.expanded
    }

    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        table_idx(self.width, self.height, p)
    }
}

// ── BFS ─────────────────────────────────────────────────────────

/// Tri-color lifecycle of a cell during a BFS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BfsColor {
    /// Never discovered.
    #[default]
    White,
    /// Discovered, waiting in the FIFO queue.
    Gray,
    /// Fully expanded.
    Black,
}

/// BFS search state for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BfsNode {
    /// Where the cell sits in the white/gray/black lifecycle.
    pub color: BfsColor,
    /// BFS tree depth (unweighted hop count from the start), or
    /// [`UNREACHABLE`].
    pub depth: i32,
    /// Predecessor in the BFS tree, unset for the start cell.
    pub parent: Option<Point>,
}

/// The full BFS node table for one search invocation.
#[derive(Clone, Debug)]
pub struct BfsTable {
    width: u32,
    height: u32,
    pub(crate) nodes: Vec<BfsNode>,
    pub(crate) expanded: u32,
}

impl BfsTable {
    /// Fresh all-white table for `graph`.
    pub(crate) fn new(graph: &EdgeGraph) -> Self {
        let nodes = vec![
            BfsNode {
                color: BfsColor::White,
                depth: UNREACHABLE,
                parent: None,
            };
            graph.cell_count()
        ];
        Self {
            width: graph.width(),
            height: graph.height(),
            nodes,
            expanded: 0,
        }
    }

    /// The node for `p`, or `None` if `p` is out of bounds.
    pub fn node(&self, p: Point) -> Option<&BfsNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Number of cells this search fully expanded (colored black).
    pub fn expanded(&self) -> u32 {
        self.expanded
    }

    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        table_idx(self.width, self.height, p)
    }
}

// ── Reconstruction seam ─────────────────────────────────────────

/// Parent-pointer lookup, the seam between the search engines and path
/// reconstruction.
///
/// Both table types implement it, so
/// [`reconstruct`](crate::path::reconstruct) works on either result
/// without knowing which algorithm produced it.
pub trait ParentMap {
    /// The recorded predecessor of `p`, if any.
    fn parent_of(&self, p: Point) -> Option<Point>;
}

impl ParentMap for AstarTable {
    fn parent_of(&self, p: Point) -> Option<Point> {
        self.node(p).and_then(|n| n.parent)
    }
}

impl ParentMap for BfsTable {
    fn parent_of(&self, p: Point) -> Option<Point> {
        self.node(p).and_then(|n| n.parent)
    }
}

fn table_idx(width: u32, height: u32, p: Point) -> Option<usize> {
    if p.x < 0 || (p.x as u32) >= width || p.y < 0 || (p.y as u32) >= height {
        return None;
    }
    Some(p.y as usize * width as usize + p.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_board::Board;

    fn graph(w: u32, h: u32) -> EdgeGraph {
        EdgeGraph::build(&Board::new(w, h).unwrap(), false)
    }

    #[test]
    fn astar_table_initializes_manhattan_heuristic() {
        let table = AstarTable::new(&graph(4, 4), Point::new(3, 3));
        assert_eq!(table.node(Point::new(0, 0)).unwrap().h, 6);
        assert_eq!(table.node(Point::new(3, 3)).unwrap().h, 0);
        assert_eq!(table.node(Point::new(0, 0)).unwrap().g, UNREACHABLE);
        assert_eq!(table.expanded(), 0);
    }

    #[test]
    fn bfs_table_starts_all_white() {
        let table = BfsTable::new(&graph(3, 3));
        for y in 0..3 {
            for x in 0..3 {
                let n = table.node(Point::new(x, y)).unwrap();
                assert_eq!(n.color, BfsColor::White);
                assert_eq!(n.depth, UNREACHABLE);
                assert_eq!(n.parent, None);
            }
        }
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let table = BfsTable::new(&graph(3, 3));
        assert!(table.node(Point::new(3, 0)).is_none());
        assert!(table.node(Point::new(0, -1)).is_none());
    }
}
