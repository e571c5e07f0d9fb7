//! Paint session state machine.
//!
//! A session is [`SessionState::Idle`] until a pointer goes down on a cell.
//! The pressed button fixes the [`Action`] for the whole drag; the brush is
//! *not* captured here and is read from the palette at every mutation.

use super::tile::TileSymbol;

/// Which pointer button started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What a drag writes into each visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the current brush.
    Paint,
    /// Write the empty tile.
    Erase,
}

impl Action {
    /// The secondary button erases, every other button paints.
    pub const fn for_button(button: PointerButton) -> Self {
        match button {
            PointerButton::Secondary => Self::Erase,
            PointerButton::Primary | PointerButton::Middle => Self::Paint,
        }
    }

    /// Symbol this action writes given the brush in force right now.
    pub const fn fill(self, brush: TileSymbol) -> TileSymbol {
        match self {
            Self::Paint => brush,
            Self::Erase => TileSymbol::EMPTY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Drawing(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintSession {
    state: SessionState,
}

impl PaintSession {
    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub const fn is_drawing(&self) -> bool {
        matches!(self.state, SessionState::Drawing(_))
    }

    /// Action in force, or `None` while idle.
    pub const fn action(&self) -> Option<Action> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Drawing(action) => Some(action),
        }
    }

    /// Start a drag. A press while already drawing restarts with the new button.
    pub const fn begin(&mut self, button: PointerButton) -> Action {
        let action = Action::for_button(button);
        self.state = SessionState::Drawing(action);
        action
    }

    /// End the drag. Returns whether a drag was in progress.
    pub const fn end(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.state = SessionState::Idle;
        was_drawing
    }
}
