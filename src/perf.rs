//! Scope timings for `--perf` and the `--debug-log` edit journal.
//!
//! The journal is a plain text file with one timestamped [`Record`] per line,
//! enough to replay what a paint session did to the grid.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

use crate::editor::{Action, CellPos, TileSymbol};

static ENABLED: AtomicBool = AtomicBool::new(false);
static JOURNAL: LazyLock<Mutex<Option<Journal>>> = LazyLock::new(|| Mutex::new(None));

/// Times a region until dropped; reported only while `--perf` is on.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: "tilepaint::perf", scope = self.name, elapsed_ms, "timing");
    }
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// One step of a paint session as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStep {
    Down { pos: CellPos, action: Action },
    Enter { pos: CellPos, action: Action },
    Up,
    Brush(TileSymbol),
}

impl fmt::Display for EditStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down { pos, action } => {
                write!(f, "down ({}, {}) {}", pos.row, pos.col, action_name(*action))
            }
            Self::Enter { pos, action } => {
                write!(f, "enter ({}, {}) {}", pos.row, pos.col, action_name(*action))
            }
            Self::Up => f.write_str("up"),
            Self::Brush(symbol) => write!(f, "brush {symbol}"),
        }
    }
}

const fn action_name(action: Action) -> &'static str {
    match action {
        Action::Paint => "paint",
        Action::Erase => "erase",
    }
}

/// A journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Startup {
        terminal: (u16, u16),
        grid: (usize, usize),
        sprites: usize,
    },
    Capture { held: bool },
    Edit { step: EditStep, mutations: u64 },
    /// A message that changed neither the grid nor the brush.
    Ui(&'static str),
    Drain { frame: u64, count: u32 },
    Frame { index: u64, mutations: u64 },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Startup {
                terminal,
                grid,
                sprites,
            } => write!(
                f,
                "startup terminal={}x{} grid={}x{} sprites={sprites}",
                terminal.0, terminal.1, grid.0, grid.1
            ),
            Self::Capture { held: true } => f.write_str("mouse capture acquired"),
            Self::Capture { held: false } => f.write_str("mouse capture released"),
            Self::Edit { step, mutations } => write!(f, "edit {step} mutations={mutations}"),
            Self::Ui(name) => write!(f, "ui {name}"),
            Self::Drain { frame, count } => write!(f, "drain frame={frame} count={count}"),
            Self::Frame { index, mutations } => {
                write!(f, "frame {index} mutations={mutations}")
            }
        }
    }
}

#[derive(Debug)]
struct Journal {
    start: Instant,
    writer: BufWriter<File>,
}

/// Start a journal at `path`, or stop journaling with `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut journal = JOURNAL.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    *journal = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "tilepaint edit journal")?;
        writer.flush()?;
        *journal = Some(Journal {
            start: Instant::now(),
            writer,
        });
    }
    Ok(())
}

/// Append `record` to the journal, if one is open.
pub fn record(record: &Record) {
    let mut journal = JOURNAL.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let Some(journal) = journal.as_mut() else {
        return;
    };
    let elapsed_ms = journal.start.elapsed().as_secs_f64() * 1000.0;
    let _ = writeln!(journal.writer, "[{elapsed_ms:>10.3} ms] {record}");
    let _ = journal.writer.flush();
}
