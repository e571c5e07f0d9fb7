//! Tile-map editing core.
//!
//! [`Editor`] ties together the three pieces of editing state:
//! - [`Palette`]: the brush, changed only by explicit selection
//! - [`Grid`]: the map, replaced by a new snapshot on every mutation
//! - [`PaintSession`]: the drag state, whose [`Action`] is fixed at pointer-down
//!
//! The pointer operations are the only way the grid changes.

mod export;
mod grid;
mod palette;
mod session;
mod tile;

pub use export::{ExportCache, serialize};
pub use grid::{CellPos, Grid};
pub use palette::{PALETTE, Palette};
pub use session::{Action, PaintSession, PointerButton, SessionState};
pub use tile::{ALPHABET, TileSymbol, UnknownTile};

pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 16;

#[derive(Debug, Clone)]
pub struct Editor {
    palette: Palette,
    grid: Grid,
    session: PaintSession,
    mutations: u64,
}

impl Editor {
    /// Create an editor over an empty `rows`×`cols` grid with the default palette.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            palette: Palette::default(),
            grid: Grid::new(rows, cols),
            session: PaintSession::default(),
            mutations: 0,
        }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn session(&self) -> &PaintSession {
        &self.session
    }

    pub const fn brush(&self) -> TileSymbol {
        self.palette.brush()
    }

    /// Number of grid snapshots produced so far.
    pub const fn mutations(&self) -> u64 {
        self.mutations
    }

    pub const fn select_brush(&mut self, symbol: TileSymbol) {
        self.palette.select_brush(symbol);
    }

    pub fn cycle_brush(&mut self, forward: bool) {
        self.palette.cycle_brush(forward);
    }

    /// Start a drag on `pos` and apply its action once.
    ///
    /// Always produces a new snapshot, even if the cell already holds the
    /// written value.
    pub fn pointer_down(&mut self, pos: CellPos, button: PointerButton) -> Action {
        let action = self.session.begin(button);
        self.write(pos, action.fill(self.palette.brush()));
        action
    }

    /// Continue a drag into `pos`. Returns whether the grid changed.
    ///
    /// Ignored while idle. Uses the action fixed at pointer-down and the brush
    /// selected now; re-entering a cell that already holds the value is skipped.
    pub fn pointer_enter(&mut self, pos: CellPos) -> bool {
        let Some(action) = self.session.action() else {
            return false;
        };
        let value = action.fill(self.palette.brush());
        if self.grid.get(pos) == Some(value) {
            return false;
        }
        self.write(pos, value);
        true
    }

    /// End any drag. Returns whether one was in progress.
    pub const fn pointer_up(&mut self) -> bool {
        self.session.end()
    }

    pub fn export(&self) -> String {
        serialize(&self.grid)
    }

    fn write(&mut self, pos: CellPos, symbol: TileSymbol) {
        self.grid = self.grid.with_cell(pos, symbol);
        self.mutations += 1;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
