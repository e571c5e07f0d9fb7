// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. sprites::SpriteMap)
    clippy::module_name_repetitions
)]

//! # Tilepaint
//!
//! A terminal tile-map editor with a live level-string export.
//!
//! Tilepaint edits a fixed-size grid of tile symbols:
//! - Left drag paints the selected brush, right drag erases
//! - A palette bar for picking the brush
//! - The grid exported as one `"<row>",` literal per line, updated live
//!
//! ## Architecture
//!
//! Tilepaint uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Palette, grid snapshots, paint sessions and export
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`sprites`]: Symbol to sprite mapping and fallbacks
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;
pub mod sprites;
pub mod ui;
