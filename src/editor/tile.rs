//! Tile symbols.
//!
//! A [`TileSymbol`] is one character from a closed alphabet. Every other
//! editor API takes the validated type, so a grid can only ever hold
//! symbols from [`ALPHABET`].

use std::fmt;

/// Every symbol a cell may hold, including the hidden `V` alias.
pub const ALPHABET: &[char] = &[
    '.', 'w', 'h', 'p', 'k', 'd', '<', '^', '>', 'v', 'V', 'c', 'r',
];

/// A char outside [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown tile symbol {0:?}")]
pub struct UnknownTile(pub char);

/// One cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileSymbol(char);

impl TileSymbol {
    /// The empty floor tile, written by erase and used to fill new grids.
    pub const EMPTY: Self = Self('.');

    pub const fn as_char(self) -> char {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == '.'
    }
}

impl Default for TileSymbol {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TryFrom<char> for TileSymbol {
    type Error = UnknownTile;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if ALPHABET.contains(&c) {
            Ok(Self(c))
        } else {
            Err(UnknownTile(c))
        }
    }
}

impl From<TileSymbol> for char {
    fn from(symbol: TileSymbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for TileSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
