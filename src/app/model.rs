use std::path::PathBuf;

use crate::editor::{CellPos, Editor, ExportCache};
use crate::sprites::SpriteMap;

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Palette, grid and paint session
    pub editor: Editor,
    /// Symbol to sprite resource mapping used by the renderer
    pub sprites: SpriteMap,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Grid cell under the pointer, if any
    pub hovered: Option<CellPos>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
    export_cache: ExportCache,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("editor", &self.editor)
            .field("size", &(self.width, self.height))
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(editor: Editor, sprites: SpriteMap, terminal_size: (u16, u16)) -> Self {
        Self {
            editor,
            sprites,
            width: terminal_size.0,
            height: terminal_size.1,
            hovered: None,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
            export_cache: ExportCache::default(),
        }
    }

    /// The level string for the current grid, recomputed only after a change.
    pub fn export_text(&mut self) -> &str {
        self.export_cache.get(self.editor.grid())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Editor::default(), SpriteMap::default(), (80, 24))
    }
}
