use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::editor::{Action, SessionState};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let brush = model.editor.brush();
    let session = match model.editor.session().state() {
        SessionState::Idle => "",
        SessionState::Drawing(Action::Paint) => " [painting]",
        SessionState::Drawing(Action::Erase) => " [erasing]",
    };
    let hover = model
        .hovered
        .map(|pos| format!("  ({}, {})", pos.row, pos.col))
        .unwrap_or_default();

    let edits = model.editor.mutations();
    let status = format!(" brush: {brush}{session}{hover}  edits: {edits}  ?:help");

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}
