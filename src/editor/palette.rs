//! The selectable tile set and the current brush.

use super::tile::TileSymbol;

/// Selectable symbols in display order. `V` is intentionally not offered.
pub const PALETTE: &[char] = &['.', 'w', 'h', 'p', 'k', 'd', '<', '^', '>', 'v', 'c', 'r'];

/// The selectable tile set and the current brush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<TileSymbol>,
    brush: TileSymbol,
}

impl Palette {
    /// Create a palette over `entries` with the empty tile as brush.
    pub const fn new(entries: Vec<TileSymbol>) -> Self {
        Self {
            entries,
            brush: TileSymbol::EMPTY,
        }
    }

    pub fn entries(&self) -> &[TileSymbol] {
        &self.entries
    }

    pub const fn brush(&self) -> TileSymbol {
        self.brush
    }

    /// Set the brush. Never touches the grid or a running paint session.
    pub const fn select_brush(&mut self, symbol: TileSymbol) {
        self.brush = symbol;
    }

    /// Palette slot of `symbol`, if it is offered.
    pub fn position(&self, symbol: TileSymbol) -> Option<usize> {
        self.entries.iter().position(|&s| s == symbol)
    }

    /// Symbol at a palette slot.
    pub fn get(&self, index: usize) -> Option<TileSymbol> {
        self.entries.get(index).copied()
    }

    /// Move the brush to the next (or previous) entry, wrapping around.
    ///
    /// A brush that is not in the palette restarts at the first entry.
    pub fn cycle_brush(&mut self, forward: bool) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let next = match self.position(self.brush) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.brush = self.entries[next];
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = PALETTE
            .iter()
            .filter_map(|&c| TileSymbol::try_from(c).ok())
            .collect();
        Self::new(entries)
    }
}
