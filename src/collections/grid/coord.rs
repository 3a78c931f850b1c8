use std::fmt;
use std::fmt::Debug;

/// A `Coord` struct represents coordinates of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self([col, row])
    }

    pub fn col(self) -> usize {
        self.0[0]
    }

    pub fn row(self) -> usize {
        self.0[1]
    }

    /// The coordinate `cols` columns to the right and `rows` rows below this one
    pub fn offset(self, cols: usize, rows: usize) -> Self {
        Self::new(self.col() + cols, self.row() + rows)
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}
