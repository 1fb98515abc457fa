//! 2D buffer for terminal cells.
//!
//! The `Grid` is a row-major grid with a fixed width and height. It is what the
//! renderer fills in before anything is serialized, which keeps the half-block
//! conversion inspectable independently of the escape sequences it turns into.

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

/// A 2D buffer of values with a fixed `width` and `height`.
///
/// # Example
///
/// ```rust
/// use blockpeek::rendering::grid::Grid;
///
/// let grid = Grid::from_fn(4, 2, |x, y| x + 10 * y);
///
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid[(3, 1)], 13);
/// assert_eq!(grid.get(4, 1), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Grid {{ width: {}, height: {}, cells: {:?} }}",
            self.width, self.height, self.cells
        )
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f(x, y)` for every position in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn get_index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Gets the height of the grid (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the width of the grid (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets a reference to the cell at the given (x, y) coordinates.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.get_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // a zero-width grid still yields `height` empty rows
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Returns an iterator over the cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, cell)
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        match self.get(x, y) {
            Some(cell) => cell,
            None => panic!(
                "grid index ({x}, {y}) out of bounds for {}x{}",
                self.width, self.height
            ),
        }
    }
}
