//! Grid coordinates and the Manhattan metric.

use std::fmt;

/// A cell position on the board.
///
/// `x` is the column (0 at the left edge), `y` the row (0 at the top).
/// Coordinates use `i32` so that neighbor arithmetic at the board edge
/// can go negative without wrapping; bounds checks happen at the board
/// and graph layer.
///
/// # Examples
///
/// ```
/// use gridpath_core::Point;
///
/// let a = Point::new(2, 3);
/// let b = Point::new(5, 7);
/// assert_eq!(a.manhattan(b), 7);
/// assert_eq!(a.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// Create a point from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`: `|dx| + |dy|`.
    ///
    /// This is the admissible A* heuristic for 4-connected grids where
    /// every step costs 1.
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
