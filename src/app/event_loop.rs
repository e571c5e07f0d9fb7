use std::io::{self, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::editor::{Action, Editor, PaintSession};
use crate::perf::{EditStep, Record};

/// Terminal-wide mouse reporting, held for the lifetime of the event loop.
///
/// While held, button releases are reported wherever the pointer is, and the
/// terminal's own right-click handling is bypassed so secondary presses reach
/// the editor. Dropping the guard hands the mouse back to the terminal.
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    /// Enable mouse capture with any-event motion tracking.
    ///
    /// # Errors
    ///
    /// Returns an error if the escape sequences cannot be written.
    pub fn acquire() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        set_mouse_motion_tracking(true)?;
        crate::perf::record(&Record::Capture { held: true });
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = set_mouse_motion_tracking(false);
        let _ = execute!(stdout(), DisableMouseCapture);
        crate::perf::record(&Record::Capture { held: false });
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// Returns the final level string.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<String> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - tilepaint requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);
        crate::perf::record(&Record::Startup {
            terminal: (size.width, size.height),
            grid: (self.rows, self.cols),
            sprites: self.sprites.len(),
        });

        let mut model = Model::new(
            Editor::new(self.rows, self.cols),
            self.sprites.clone(),
            (size.width, size.height),
        );
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        let result = MouseCapture::acquire()
            .context("Failed to enable mouse capture")
            .and_then(|capture| {
                let result = Self::event_loop(&mut terminal, &mut model);
                drop(capture);
                result
            });

        ratatui::restore();

        result.map(|()| model.editor.export())
    }

    fn apply(model: &mut Model, msg: Message) {
        let _scope = crate::perf::scope("app.update");
        let session = *model.editor.session();
        let before = model.editor.mutations();
        let kind = ui_name(&msg);
        *model = update(std::mem::take(model), msg.clone());
        let after = model.editor.mutations();
        if after != before {
            tracing::debug!(mutations = after, "grid updated");
        }

        let record = match edit_step(&msg, &session, &model.editor) {
            Some(step) => Record::Edit {
                step,
                mutations: after,
            },
            None => Record::Ui(kind),
        };
        crate::perf::record(&record);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::apply(model, msg);
                    needs_render = true;
                }

                // Drain queued events in order before drawing once.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::apply(model, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::record(&Record::Drain {
                        frame: frame_idx,
                        count: drained,
                    });
                }
            }

            if model.should_quit {
                break;
            }

            if needs_render {
                frame_idx += 1;
                let draw_scope = crate::perf::scope("app.draw");
                terminal.draw(|frame| Self::view(model, frame))?;
                drop(draw_scope);
                crate::perf::record(&Record::Frame {
                    index: frame_idx,
                    mutations: model.editor.mutations(),
                });
                needs_render = false;
            }
        }
        Ok(())
    }
}

/// The journal step for `msg`, given the session it arrived in and the editor
/// it produced. Enters and ups while idle are not edits.
pub(super) fn edit_step(
    msg: &Message,
    session: &PaintSession,
    editor: &Editor,
) -> Option<EditStep> {
    match *msg {
        Message::PointerDown(pos, button) => Some(EditStep::Down {
            pos,
            action: Action::for_button(button),
        }),
        Message::PointerEnter(pos) => session
            .action()
            .map(|action| EditStep::Enter { pos, action }),
        Message::PointerUp => session.is_drawing().then_some(EditStep::Up),
        Message::SelectBrush(_) | Message::NextBrush | Message::PrevBrush => {
            Some(EditStep::Brush(editor.brush()))
        }
        _ => None,
    }
}

const fn ui_name(msg: &Message) -> &'static str {
    match msg {
        Message::PointerDown(..) => "pointer-down",
        Message::PointerEnter(_) => "pointer-enter",
        Message::PointerLeave => "pointer-leave",
        Message::PointerUp => "pointer-up",
        Message::SelectBrush(_) | Message::NextBrush | Message::PrevBrush => "brush",
        Message::ToggleHelp | Message::HideHelp => "help",
        Message::Resize(..) => "resize",
        Message::Quit => "quit",
    }
}

fn set_mouse_motion_tracking(enable: bool) -> io::Result<()> {
    // Request any-event mouse motion reporting (1003) with SGR encoding (1006).
    // Hover over cells is reported even with no button held.
    let mut out = stdout();
    if enable {
        out.write_all(b"\x1b[?1003h\x1b[?1006h")?;
    } else {
        out.write_all(b"\x1b[?1003l\x1b[?1006l")?;
    }
    out.flush()
}
