use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::editor::{Action, CellPos, Editor, PointerButton, SessionState, TileSymbol};
use crate::perf::EditStep;
use crate::sprites::SpriteMap;

use super::event_loop::edit_step;
use super::{App, Message, Model, update};

fn create_test_model() -> Model {
    // 80x24 terminal: grid inner area starts at column 1, row 4
    Model::new(Editor::new(15, 16), SpriteMap::default(), (80, 24))
}

fn sym(c: char) -> TileSymbol {
    TileSymbol::try_from(c).unwrap()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Terminal position of grid cell (row, col) in the 80x24 test layout.
const fn cell_point(row: u16, col: u16) -> (u16, u16) {
    (1 + col * 2, 4 + row)
}

fn feed(mut model: Model, events: &[MouseEvent]) -> Model {
    for event in events {
        if let Some(msg) = App::handle_mouse(*event, &model) {
            model = update(model, msg);
        }
    }
    model
}

fn first_row(model: &Model) -> String {
    model.editor.export().lines().next().unwrap().to_string()
}

#[test]
fn test_pointer_down_message_paints_and_hovers() {
    let mut model = create_test_model();
    model.editor.select_brush(sym('k'));
    let model = update(
        model,
        Message::PointerDown(CellPos::new(2, 3), PointerButton::Primary),
    );
    assert_eq!(model.editor.grid().get(CellPos::new(2, 3)), Some(sym('k')));
    assert_eq!(model.hovered, Some(CellPos::new(2, 3)));
    assert_eq!(
        model.editor.session().state(),
        SessionState::Drawing(Action::Paint)
    );
}

#[test]
fn test_pointer_up_message_ends_session() {
    let model = create_test_model();
    let model = update(
        model,
        Message::PointerDown(CellPos::new(0, 0), PointerButton::Secondary),
    );
    let model = update(model, Message::PointerUp);
    assert_eq!(model.editor.session().state(), SessionState::Idle);
    assert_eq!(model.editor.mutations(), 1);
}

#[test]
fn test_pointer_leave_clears_hover_only() {
    let model = create_test_model();
    let model = update(model, Message::PointerEnter(CellPos::new(1, 1)));
    assert_eq!(model.hovered, Some(CellPos::new(1, 1)));
    assert_eq!(model.editor.mutations(), 0);

    let model = update(model, Message::PointerLeave);
    assert_eq!(model.hovered, None);
}

#[test]
fn test_brush_messages() {
    let model = create_test_model();
    let model = update(model, Message::SelectBrush(sym('d')));
    assert_eq!(model.editor.brush(), sym('d'));
    let model = update(model, Message::NextBrush);
    assert_eq!(model.editor.brush(), sym('<'));
    let model = update(model, Message::PrevBrush);
    let model = update(model, Message::PrevBrush);
    assert_eq!(model.editor.brush(), sym('k'));
}

#[test]
fn test_toggle_help_and_quit() {
    let model = create_test_model();
    let model = update(model, Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_resize_updates_terminal_size() {
    let model = update(create_test_model(), Message::Resize(120, 40));
    assert_eq!((model.width, model.height), (120, 40));
}

#[test]
fn test_left_drag_across_cells_paints_row() {
    let mut model = create_test_model();
    model.editor.select_brush(sym('w'));
    let (x0, y) = cell_point(0, 0);
    let (x1, _) = cell_point(0, 1);
    let (x2, _) = cell_point(0, 2);

    let model = feed(
        model,
        &[
            mouse(MouseEventKind::Down(MouseButton::Left), x0, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), x0 + 1, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), x1, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), x1 + 1, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), x2, y),
            mouse(MouseEventKind::Up(MouseButton::Left), x2, y),
        ],
    );

    assert_eq!(first_row(&model), "\"www.............\",");
    assert_eq!(model.editor.mutations(), 3);
    assert_eq!(model.editor.session().state(), SessionState::Idle);
}

#[test]
fn test_right_drag_erases() {
    let mut model = create_test_model();
    model.editor.select_brush(sym('h'));
    let (x0, y) = cell_point(0, 0);
    let (x1, _) = cell_point(0, 1);
    let model = feed(
        model,
        &[
            mouse(MouseEventKind::Down(MouseButton::Left), x0, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), x1, y),
            mouse(MouseEventKind::Up(MouseButton::Left), x1, y),
            mouse(MouseEventKind::Down(MouseButton::Right), x1, y),
            mouse(MouseEventKind::Up(MouseButton::Right), x1, y),
        ],
    );
    assert_eq!(first_row(&model), "\"h...............\",");
}

#[test]
fn test_release_outside_grid_ends_session() {
    let model = create_test_model();
    let (x, y) = cell_point(3, 3);
    let model = feed(
        model,
        &[
            mouse(MouseEventKind::Down(MouseButton::Left), x, y),
            mouse(MouseEventKind::Drag(MouseButton::Left), 70, 20),
            mouse(MouseEventKind::Up(MouseButton::Left), 70, 20),
        ],
    );
    assert_eq!(model.editor.session().state(), SessionState::Idle);
    assert_eq!(model.hovered, None);

    // Hovering back over the grid afterwards does not paint
    let (hx, hy) = cell_point(4, 4);
    let model = feed(model, &[mouse(MouseEventKind::Moved, hx, hy)]);
    assert_eq!(model.hovered, Some(CellPos::new(4, 4)));
    assert_eq!(model.editor.mutations(), 1);
}

#[test]
fn test_release_while_idle_produces_no_message() {
    let model = create_test_model();
    let msg = App::handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), &model);
    assert_eq!(msg, None);
}

#[test]
fn test_release_reaches_session_under_help_overlay() {
    let model = create_test_model();
    let (x, y) = cell_point(0, 0);
    let model = feed(model, &[mouse(MouseEventKind::Down(MouseButton::Left), x, y)]);
    let model = update(model, Message::ToggleHelp);
    let msg = App::handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y), &model);
    assert_eq!(msg, Some(Message::PointerUp));
}

#[test]
fn test_mouse_ignored_under_help_overlay() {
    let model = update(create_test_model(), Message::ToggleHelp);
    let (x, y) = cell_point(0, 0);
    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &model);
    assert_eq!(msg, None);
}

#[test]
fn test_reentering_same_cell_after_leaving_is_an_enter() {
    let model = create_test_model();
    let (x, y) = cell_point(1, 1);
    let model = feed(model, &[mouse(MouseEventKind::Moved, x, y)]);
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, x + 1, y), &model),
        None
    );
    let model = feed(model, &[mouse(MouseEventKind::Moved, 0, 0)]);
    assert_eq!(model.hovered, None);
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, x, y), &model),
        Some(Message::PointerEnter(CellPos::new(1, 1)))
    );
}

#[test]
fn test_click_on_palette_selects_brush() {
    let model = create_test_model();
    // palette inner row is 1; slot 2 ('h') starts at column 9
    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 1), &model);
    assert_eq!(msg, Some(Message::SelectBrush(sym('h'))));

    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 9, 1), &model);
    assert_eq!(msg, None);
}

#[test]
fn test_key_selects_palette_symbols_only() {
    let model = create_test_model();
    let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
    assert_eq!(
        App::handle_key(key('>'), &model),
        Some(Message::SelectBrush(sym('>')))
    );
    assert_eq!(App::handle_key(key('V'), &model), None);
    assert_eq!(App::handle_key(key('z'), &model), None);
}

#[test]
fn test_key_bindings() {
    let model = create_test_model();
    let press = |code, modifiers| KeyEvent::new(code, modifiers);
    assert_eq!(
        App::handle_key(press(KeyCode::Tab, KeyModifiers::NONE), &model),
        Some(Message::NextBrush)
    );
    assert_eq!(
        App::handle_key(press(KeyCode::BackTab, KeyModifiers::SHIFT), &model),
        Some(Message::PrevBrush)
    );
    assert_eq!(
        App::handle_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &model),
        Some(Message::Quit)
    );
    assert_eq!(
        App::handle_key(press(KeyCode::Esc, KeyModifiers::NONE), &model),
        Some(Message::Quit)
    );
    assert_eq!(
        App::handle_key(press(KeyCode::F(1), KeyModifiers::NONE), &model),
        Some(Message::ToggleHelp)
    );
}

#[test]
fn test_any_key_closes_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(App::handle_key(key, &model), Some(Message::HideHelp));
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model();
    let mut key = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(App::handle_key(key, &model), None);
}

#[test]
fn test_resize_event_maps_to_message() {
    let model = create_test_model();
    assert_eq!(
        App::handle_event(&Event::Resize(100, 30), &model),
        Some(Message::Resize(100, 30))
    );
}

#[test]
fn test_view_renders_export_panel() {
    let mut model = create_test_model();
    model.editor.select_brush(sym('p'));
    let model = update(
        model,
        Message::PointerDown(CellPos::new(0, 0), PointerButton::Primary),
    );
    let mut model = update(model, Message::PointerUp);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| App::view(&mut model, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("Level string"));
    assert!(content.contains("\"p...............\","));
}

#[test]
fn test_edit_step_uses_pressed_button_and_session_action() {
    let model = create_test_model();
    let pos = CellPos::new(2, 5);
    let down = Message::PointerDown(pos, PointerButton::Secondary);
    assert_eq!(
        edit_step(&down, model.editor.session(), &model.editor),
        Some(EditStep::Down {
            pos,
            action: Action::Erase
        })
    );

    let model = update(model, down);
    let session = *model.editor.session();
    let enter = Message::PointerEnter(CellPos::new(2, 6));
    assert_eq!(
        edit_step(&enter, &session, &model.editor),
        Some(EditStep::Enter {
            pos: CellPos::new(2, 6),
            action: Action::Erase
        })
    );
    assert_eq!(
        edit_step(&Message::PointerUp, &session, &model.editor),
        Some(EditStep::Up)
    );
}

#[test]
fn test_edit_step_skips_idle_pointer_and_ui_messages() {
    let model = create_test_model();
    let session = *model.editor.session();
    let enter = Message::PointerEnter(CellPos::new(0, 0));
    assert_eq!(edit_step(&enter, &session, &model.editor), None);
    assert_eq!(edit_step(&Message::PointerUp, &session, &model.editor), None);
    assert_eq!(edit_step(&Message::ToggleHelp, &session, &model.editor), None);
}

#[test]
fn test_edit_step_reports_brush_after_cycling() {
    let model = update(create_test_model(), Message::NextBrush);
    let session = *model.editor.session();
    assert_eq!(
        edit_step(&Message::NextBrush, &session, &model.editor),
        Some(EditStep::Brush(sym('w')))
    );
}
