//! Tile sprite mapping.
//!
//! Maps tile symbols to opaque resource identifiers (image paths) and decides
//! what a cell or palette slot shows when no resource is mapped. The terminal
//! never loads the images; a mapped symbol is drawn as a styled glyph.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::editor::{TileSymbol, UnknownTile};

/// Built-in sprite table. `V` shares the `v` sprite.
const DEFAULT_SPRITES: &[(char, &str)] = &[
    ('w', "/w.png"),
    ('h', "/h.png"),
    ('p', "/p.png"),
    ('k', "/k.png"),
    ('d', "/d.png"),
    ('<', "/left.png"),
    ('^', "/up.png"),
    ('>', "/right.png"),
    ('v', "/down.png"),
    ('V', "/down.png"),
    ('c', "/c.png"),
    ('r', "/r.png"),
];

/// On-disk layout: a flat JSON object.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SpriteFile {
    sprites: BTreeMap<String, Option<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SpriteMapError {
    #[error("failed to read sprite map {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sprite map {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite key {0:?} is not a single character")]
    BadKey(String),
    #[error(transparent)]
    UnknownTile(#[from] UnknownTile),
}

/// How a grid cell should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVisual<'a> {
    /// A mapped resource.
    Sprite(&'a str),
    /// Unmapped empty tile.
    Empty,
    /// Any other unmapped tile.
    Missing,
}

/// How a palette slot should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteLabel<'a> {
    Sprite(&'a str),
    Text(char),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteMap {
    entries: BTreeMap<TileSymbol, String>,
}

impl SpriteMap {
    /// A map with no resources; everything renders with fallbacks.
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a JSON object of `"symbol": "resource"` pairs.
    /// A `null` resource leaves the symbol unmapped.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, a key is not exactly one
    /// character, or a key is not a known tile symbol.
    pub fn from_json(json: &str) -> Result<Self, SpriteMapError> {
        let file: SpriteFile =
            serde_json::from_str(json).map_err(|source| SpriteMapError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            })?;
        Self::from_file(file)
    }

    /// Load a sprite map file (see [`SpriteMap::from_json`]).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, SpriteMapError> {
        let content = std::fs::read_to_string(path).map_err(|source| SpriteMapError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SpriteFile =
            serde_json::from_str(&content).map_err(|source| SpriteMapError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_file(file)
    }

    fn from_file(file: SpriteFile) -> Result<Self, SpriteMapError> {
        let mut entries = BTreeMap::new();
        for (key, resource) in file.sprites {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(SpriteMapError::BadKey(key));
            };
            let symbol = TileSymbol::try_from(c)?;
            if let Some(resource) = resource {
                entries.insert(symbol, resource);
            }
        }
        Ok(Self { entries })
    }

    pub fn resource(&self, symbol: TileSymbol) -> Option<&str> {
        self.entries.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visual(&self, symbol: TileSymbol) -> CellVisual<'_> {
        match self.resource(symbol) {
            Some(resource) => CellVisual::Sprite(resource),
            None if symbol.is_empty() => CellVisual::Empty,
            None => CellVisual::Missing,
        }
    }

    pub fn palette_label(&self, symbol: TileSymbol) -> PaletteLabel<'_> {
        match self.resource(symbol) {
            Some(resource) => PaletteLabel::Sprite(resource),
            None if symbol.is_empty() => PaletteLabel::Blank,
            None => PaletteLabel::Text(symbol.as_char()),
        }
    }
}

impl Default for SpriteMap {
    fn default() -> Self {
        let entries = DEFAULT_SPRITES
            .iter()
            .filter_map(|&(c, path)| Some((TileSymbol::try_from(c).ok()?, path.to_string())))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sym(c: char) -> TileSymbol {
        TileSymbol::try_from(c).unwrap()
    }

    #[test]
    fn test_default_map_leaves_floor_unmapped() {
        let map = SpriteMap::default();
        assert_eq!(map.resource(TileSymbol::EMPTY), None);
        assert_eq!(map.visual(TileSymbol::EMPTY), CellVisual::Empty);
        assert_eq!(map.visual(sym('<')), CellVisual::Sprite("/left.png"));
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn test_hidden_alias_shares_sprite() {
        let map = SpriteMap::default();
        assert_eq!(map.resource(sym('V')), map.resource(sym('v')));
    }

    #[test]
    fn test_unmapped_symbol_is_missing_not_empty() {
        let map = SpriteMap::empty();
        assert_eq!(map.visual(sym('w')), CellVisual::Missing);
        assert_eq!(map.visual(TileSymbol::EMPTY), CellVisual::Empty);
    }

    #[test]
    fn test_palette_labels() {
        let map = SpriteMap::from_json(r#"{"w": "wall.png"}"#).unwrap();
        assert_eq!(map.palette_label(sym('w')), PaletteLabel::Sprite("wall.png"));
        assert_eq!(map.palette_label(sym('h')), PaletteLabel::Text('h'));
        assert_eq!(map.palette_label(TileSymbol::EMPTY), PaletteLabel::Blank);
    }

    #[test]
    fn test_null_resource_leaves_symbol_unmapped() {
        let map = SpriteMap::from_json(r#"{".": null, "k": "key.png"}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.resource(sym('k')), Some("key.png"));
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(matches!(
            SpriteMap::from_json(r#"{"wall": "w.png"}"#),
            Err(SpriteMapError::BadKey(key)) if key == "wall"
        ));
        assert!(matches!(
            SpriteMap::from_json(r#"{"x": "x.png"}"#),
            Err(SpriteMapError::UnknownTile(UnknownTile('x')))
        ));
        assert!(matches!(
            SpriteMap::from_json("[1, 2]"),
            Err(SpriteMapError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sprites.json");
        std::fs::write(&path, r#"{"d": "door.png", "V": "down.png"}"#).unwrap();

        let map = SpriteMap::load(&path).unwrap();
        assert_eq!(map.resource(sym('d')), Some("door.png"));
        assert_eq!(map.resource(sym('V')), Some("down.png"));
        assert_eq!(map.resource(sym('v')), None);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = SpriteMap::load(&path).unwrap_err();
        assert!(matches!(err, SpriteMapError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
