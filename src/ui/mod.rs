//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions and mouse hit testing
//! - [`style`]: Tile colors and fallbacks

pub mod layout;
pub mod style;

mod overlays;
mod render;
mod status;

pub use layout::EditorLayout;
pub use render::render;
