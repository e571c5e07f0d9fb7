//! Snapshot tile grid.
//!
//! A [`Grid`] is never edited in place. [`Grid::with_cell`] returns a new
//! snapshot that shares every untouched row with its parent, so observers can
//! detect a change by identity ([`Grid::same_snapshot`]) instead of comparing
//! cells.

use std::rc::Rc;

use super::tile::TileSymbol;

/// A cell coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An immutable R×C matrix of tile symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: Rc<[Rc<[TileSymbol]>]>,
}

impl Grid {
    /// Create a `rows`×`cols` grid filled with the empty tile.
    pub fn new(rows: usize, cols: usize) -> Self {
        let row: Rc<[TileSymbol]> = vec![TileSymbol::EMPTY; cols].into();
        Self {
            cols,
            rows: (0..rows).map(|_| Rc::clone(&row)).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows() && pos.col < self.cols
    }

    pub fn get(&self, pos: CellPos) -> Option<TileSymbol> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[TileSymbol]> {
        self.rows.iter().map(AsRef::as_ref)
    }

    /// Every cell as `(row, col, symbol)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileSymbol)> + '_ {
        self.iter_rows().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &symbol)| (r, c, symbol))
        })
    }

    /// Return a new snapshot with `pos` set to `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid. Callers only ever pass
    /// coordinates of rendered cells.
    pub fn with_cell(&self, pos: CellPos, symbol: TileSymbol) -> Self {
        assert!(
            self.contains(pos),
            "cell {pos:?} outside {}x{} grid",
            self.rows(),
            self.cols
        );
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                if r == pos.row {
                    let mut edited = row.to_vec();
                    edited[pos.col] = symbol;
                    Rc::from(edited)
                } else {
                    Rc::clone(row)
                }
            })
            .collect();
        Self {
            cols: self.cols,
            rows,
        }
    }

    /// True when both values are the same snapshot, not merely equal.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rows, &other.rows)
    }
}
