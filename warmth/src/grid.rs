// grid.rs - Bounds-checked placement grid

use std::fmt;

use serde::Serialize;

use crate::cell::Cell;
use crate::error::{Result, WarmthError};

// Largest accepted extent along either axis
pub const MAX_EXTENT: usize = 100;

/// 1-indexed grid coordinate. Row 0 and column 0 never hold a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Rectangular grid of cells, row-major. Reads outside the declared extent
/// return `None` instead of touching a padding border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows > MAX_EXTENT || cols > MAX_EXTENT {
            return Err(WarmthError::GridTooLarge { rows, cols, max: MAX_EXTENT });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 1 && pos.row <= self.rows && pos.col >= 1 && pos.col <= self.cols
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.row - 1) * self.cols + (pos.col - 1))
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<()> {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                Ok(())
            }
            None => Err(WarmthError::OutOfRange {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// In-bounds cells of the 3x3 block centred on `center`, row-major.
    /// The centre itself is included when it is in bounds.
    pub fn neighborhood(&self, center: Pos) -> impl Iterator<Item = Pos> + '_ {
        let rows = center.row.saturating_sub(1)..=center.row + 1;
        rows.flat_map(move |row| {
            (center.col.saturating_sub(1)..=center.col + 1).map(move |col| Pos::new(row, col))
        })
        .filter(move |&pos| self.contains(pos)) // row/col 0 and the far edge fall out here
    }

    /// Every coordinate of the grid, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Pos::new(row, col)))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|c| c.marker()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
