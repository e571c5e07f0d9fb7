use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::editor::{PointerButton, TileSymbol};
use crate::ui::EditorLayout;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        // A release ends the drag wherever it happens, even under the help overlay.
        if let MouseEventKind::Up(_) = mouse.kind {
            return model
                .editor
                .session()
                .is_drawing()
                .then_some(Message::PointerUp);
        }

        if model.help_visible {
            return None;
        }

        let layout = editor_layout(model);
        let grid = model.editor.grid();
        let cell = layout.cell_at(mouse.column, mouse.row, grid);

        match mouse.kind {
            MouseEventKind::Down(button) => {
                if let Some(pos) = cell {
                    return Some(Message::PointerDown(pos, pointer_button(button)));
                }
                if button == MouseButton::Left {
                    return layout
                        .palette_symbol_at(mouse.column, mouse.row, model.editor.palette())
                        .map(Message::SelectBrush);
                }
                None
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => match cell {
                Some(pos) if model.hovered != Some(pos) => Some(Message::PointerEnter(pos)),
                Some(_) => None,
                None => model.hovered.is_some().then_some(Message::PointerLeave),
            },
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            KeyCode::Char('c' | 'q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::Tab => Some(Message::NextBrush),
            KeyCode::BackTab => Some(Message::PrevBrush),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char(c) => palette_symbol(model, c).map(Message::SelectBrush),
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn editor_layout(model: &Model) -> EditorLayout {
    let grid = model.editor.grid();
    EditorLayout::new(
        Rect::new(0, 0, model.width, model.height),
        grid.rows(),
        grid.cols(),
    )
}

/// Only symbols the palette offers are reachable from the keyboard.
fn palette_symbol(model: &Model, c: char) -> Option<TileSymbol> {
    let symbol = TileSymbol::try_from(c).ok()?;
    model
        .editor
        .palette()
        .position(symbol)
        .map(|_| symbol)
}

const fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}
