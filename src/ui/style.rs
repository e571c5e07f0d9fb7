//! Theming and color definitions.
//!
//! Terminal stand-ins for tile sprites. A mapped symbol is drawn as its own
//! glyph in a per-symbol color; unmapped cells fall back to a flat color.

use ratatui::style::{Color, Modifier, Style};

use crate::editor::TileSymbol;

/// Background for an unmapped empty cell.
pub const FALLBACK_EMPTY: Color = Color::Black;
/// Background for an unmapped non-empty cell (missing sprite).
pub const FALLBACK_MISSING: Color = Color::Magenta;

/// Style for a symbol that has a sprite.
pub fn sprite_style(symbol: TileSymbol) -> Style {
    let base = Style::default().bg(Color::Indexed(236));
    match symbol.as_char() {
        'w' => base.fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        'h' => base.fg(Color::Red).add_modifier(Modifier::BOLD),
        'p' => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        'k' => base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        'd' => base.fg(Color::Indexed(130)).add_modifier(Modifier::BOLD),
        // Arrow tiles share one color
        '<' | '^' | '>' | 'v' | 'V' => base.fg(Color::Green),
        'c' => base.fg(Color::LightBlue),
        'r' => base.fg(Color::LightRed),
        _ => base.fg(Color::Gray),
    }
}

/// Style for an unmapped cell.
pub fn fallback_style(symbol: TileSymbol) -> Style {
    if symbol.is_empty() {
        Style::default().bg(FALLBACK_EMPTY)
    } else {
        Style::default().bg(FALLBACK_MISSING).fg(Color::White)
    }
}

/// Extra emphasis for the hovered cell.
pub fn hover_style(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

/// Style for the selected palette slot.
pub fn selected_slot_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
