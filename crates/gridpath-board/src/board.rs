//! The editable grid of cells.

use gridpath_core::{Cell, Point};

use crate::error::BoardError;

/// A fixed-size `width × height` rectangle of [`Cell`]s.
///
/// Valid coordinates satisfy `0 <= x < width` and `0 <= y < height`.
/// The board tracks where the unique start and end cells sit; placing a
/// new start or end frees the previous one, and painting over the
/// current start or end un-registers it. Out-of-bounds access is an
/// error, never a clamp.
///
/// # Examples
///
/// ```
/// use gridpath_board::Board;
/// use gridpath_core::{Cell, Point};
///
/// let mut board = Board::new(8, 8).unwrap();
/// board.place(Cell::Start, Point::new(0, 0)).unwrap();
/// board.place(Cell::Start, Point::new(3, 3)).unwrap();
///
/// // The first start cell was freed when the second was placed.
/// assert_eq!(board.tile(Point::new(0, 0)), Some(Cell::Free));
/// assert_eq!(board.start(), Some(Point::new(3, 3)));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Board {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a board of `width × height` free cells.
    ///
    /// Returns `Err(BoardError::EmptyBoard)` if either dimension is 0, or
    /// `Err(BoardError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if width > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Free; width as usize * height as usize],
            start: None,
            end: None,
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` lies inside the board rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u32) < self.width && p.y >= 0 && (p.y as u32) < self.height
    }

    /// The cell at `p`, or `None` if `p` is out of bounds.
    pub fn tile(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Position of the start cell, if one has been placed.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the end cell, if one has been placed.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Reset every cell to [`Cell::Free`] and un-register start and end.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Free);
        self.start = None;
        self.end = None;
    }

    /// Paint `cell` at `p`.
    ///
    /// Placing a start or end frees the previously placed one, keeping
    /// at most one of each on the board. Painting anything else over the
    /// current start or end un-registers it.
    pub fn place(&mut self, cell: Cell, p: Point) -> Result<(), BoardError> {
        let i = self.idx(p).ok_or_else(|| self.out_of_bounds(p))?;

        // Whatever role the overwritten cell had, it no longer holds it.
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }

        match cell {
            Cell::Start => {
                if let Some(oi) = self.start.take().and_then(|old| self.idx(old)) {
                    self.cells[oi] = Cell::Free;
                }
                self.start = Some(p);
            }
            Cell::End => {
                if let Some(oi) = self.end.take().and_then(|old| self.idx(old)) {
                    self.cells[oi] = Cell::Free;
                }
                self.end = Some(p);
            }
            Cell::Free | Cell::Wall => {}
        }

        self.cells[i] = cell;
        Ok(())
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    fn out_of_bounds(&self, p: Point) -> BoardError {
        BoardError::CoordOutOfBounds {
            point: p,
            bounds: format!("0..{} x 0..{}", self.width, self.height),
        }
    }
}
