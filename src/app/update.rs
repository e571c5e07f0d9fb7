use crate::app::Model;
use crate::editor::{CellPos, PointerButton, TileSymbol};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Pointer
    /// Button pressed over a grid cell
    PointerDown(CellPos, PointerButton),
    /// Pointer moved into a different grid cell
    PointerEnter(CellPos),
    /// Pointer moved off the grid
    PointerLeave,
    /// Button released anywhere
    PointerUp,

    // Palette
    /// Set the brush
    SelectBrush(TileSymbol),
    /// Select the next palette entry
    NextBrush,
    /// Select the previous palette entry
    PrevBrush,

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Pointer
        Message::PointerDown(pos, button) => {
            model.hovered = Some(pos);
            model.editor.pointer_down(pos, button);
        }
        Message::PointerEnter(pos) => {
            model.hovered = Some(pos);
            model.editor.pointer_enter(pos);
        }
        Message::PointerLeave => {
            model.hovered = None;
        }
        Message::PointerUp => {
            model.editor.pointer_up();
        }

        // Palette
        Message::SelectBrush(symbol) => {
            model.editor.select_brush(symbol);
        }
        Message::NextBrush => {
            model.editor.cycle_brush(true);
        }
        Message::PrevBrush => {
            model.editor.cycle_brush(false);
        }

        // Overlays
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}
