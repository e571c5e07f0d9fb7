//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use event_loop::MouseCapture;
pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

use crate::editor::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::sprites::SpriteMap;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    rows: usize,
    cols: usize,
    sprites: SpriteMap,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an application with the default grid size and sprite map.
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            sprites: SpriteMap::default(),
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the grid dimensions.
    pub const fn with_grid_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Replace the sprite map used for rendering.
    pub fn with_sprites(mut self, sprites: SpriteMap) -> Self {
        self.sprites = sprites;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
