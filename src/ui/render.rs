use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;
use crate::editor::{CellPos, TileSymbol};
use crate::sprites::{CellVisual, PaletteLabel};

use super::layout::EditorLayout;
use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let grid = model.editor.grid();
    let layout = EditorLayout::new(area, grid.rows(), grid.cols());

    render_palette(model, frame, layout.palette);
    render_grid(model, frame, layout.grid);
    render_export(model, frame, layout.export);
    status::render_status_bar(model, frame, layout.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_palette(model: &Model, frame: &mut Frame, area: Rect) {
    let palette = model.editor.palette();
    let brush = palette.brush();
    let spans: Vec<Span> = palette
        .entries()
        .iter()
        .flat_map(|&symbol| {
            let (glyph, glyph_style) = match model.sprites.palette_label(symbol) {
                PaletteLabel::Sprite(_) => (symbol.as_char(), style::sprite_style(symbol)),
                PaletteLabel::Text(c) => (c, Style::default()),
                PaletteLabel::Blank => (' ', Style::default()),
            };
            let slot_style = if symbol == brush {
                style::selected_slot_style()
            } else {
                glyph_style
            };
            [Span::styled(format!(" {glyph} "), slot_style), Span::raw(" ")]
        })
        .collect();

    let block = Block::default().title("Palette").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_grid(model: &Model, frame: &mut Frame, area: Rect) {
    let grid = model.editor.grid();
    let lines: Vec<Line> = grid
        .iter_rows()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, &symbol)| cell_span(model, CellPos::new(r, c), symbol))
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!("Map {}x{}", grid.rows(), grid.cols());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if model.editor.session().is_drawing() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_span(model: &Model, pos: CellPos, symbol: TileSymbol) -> Span<'static> {
    let (text, cell_style) = match model.sprites.visual(symbol) {
        CellVisual::Sprite(_) => (format!("{symbol} "), style::sprite_style(symbol)),
        CellVisual::Empty => ("  ".to_string(), style::fallback_style(symbol)),
        CellVisual::Missing => (format!("{symbol} "), style::fallback_style(symbol)),
    };
    let cell_style = if model.hovered == Some(pos) {
        style::hover_style(cell_style)
    } else {
        cell_style
    };
    Span::styled(text, cell_style)
}

fn render_export(model: &mut Model, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let text = model.export_text().to_string();
    let block = Block::default().title("Level string").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
