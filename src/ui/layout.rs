//! Screen layout and hit testing.
//!
//! Rendering and mouse translation both go through [`EditorLayout`], so a
//! click always lands on the cell that was drawn under it.

use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::editor::{CellPos, Grid, Palette, TileSymbol};

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 2;
/// Terminal columns per palette slot.
pub const PALETTE_SLOT_WIDTH: u16 = 4;

const PALETTE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    /// Palette block, including border
    pub palette: Rect,
    /// Grid block, including border
    pub grid: Rect,
    /// Export block, including border
    pub export: Rect,
    /// Status bar row
    pub status: Rect,
}

impl EditorLayout {
    /// Lay out the editor for a `rows`×`cols` grid inside `area`.
    pub fn new(area: Rect, rows: usize, cols: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PALETTE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
        let body = chunks[1];

        let grid_width = to_u16(cols)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2)
            .min(body.width);
        let grid_height = to_u16(rows).saturating_add(2).min(body.height);
        let grid = Rect::new(body.x, body.y, grid_width, grid_height);
        let export = Rect::new(
            body.x + grid_width,
            body.y,
            body.width - grid_width,
            body.height,
        );

        Self {
            palette: chunks[0],
            grid,
            export,
            status: chunks[2],
        }
    }

    pub fn palette_inner(&self) -> Rect {
        Block::bordered().inner(self.palette)
    }

    pub fn grid_inner(&self) -> Rect {
        Block::bordered().inner(self.grid)
    }

    /// Grid cell drawn at terminal position (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16, grid: &Grid) -> Option<CellPos> {
        let inner = self.grid_inner();
        if !point_in_rect(column, row, inner) {
            return None;
        }
        let pos = CellPos::new(
            usize::from(row - inner.y),
            usize::from((column - inner.x) / CELL_WIDTH),
        );
        grid.contains(pos).then_some(pos)
    }

    /// Palette symbol drawn at terminal position (`column`, `row`).
    pub fn palette_symbol_at(
        &self,
        column: u16,
        row: u16,
        palette: &Palette,
    ) -> Option<TileSymbol> {
        let inner = self.palette_inner();
        if !point_in_rect(column, row, inner) {
            return None;
        }
        palette.get(usize::from((column - inner.x) / PALETTE_SLOT_WIDTH))
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
