use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{DEFAULT_COLS, DEFAULT_ROWS};

/// Largest accepted grid dimension.
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub sprites: Option<PathBuf>,
    pub print: bool,
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            sprites: other.sprites.clone().or_else(|| self.sprites.clone()),
            print: self.print || other.print,
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (
            self.rows.unwrap_or(DEFAULT_ROWS),
            self.cols.unwrap_or(DEFAULT_COLS),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("tilepaint").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("tilepaint")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("tilepaint").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("tilepaint")
                .join("config");
        }
    }

    PathBuf::from(".tilepaintrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".tilepaintrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# tilepaint defaults (saved with --save)".to_string());
    if let Some(rows) = flags.rows {
        lines.push(format!("--rows {rows}"));
    }
    if let Some(cols) = flags.cols {
        lines.push(format!("--cols {cols}"));
    }
    if let Some(path) = &flags.sprites {
        lines.push(format!("--sprites {}", path.display()));
    }
    if flags.print {
        lines.push("--print".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--print" {
            flags.print = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if token == "--rows" {
            if let Some(next) = tokens.get(i + 1) {
                flags.rows = parse_dimension(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--rows=") {
            flags.rows = parse_dimension(value);
        } else if token == "--cols" {
            if let Some(next) = tokens.get(i + 1) {
                flags.cols = parse_dimension(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--cols=") {
            flags.cols = parse_dimension(value);
        } else if token == "--sprites" {
            if let Some(next) = tokens.get(i + 1) {
                flags.sprites = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--sprites=") {
            flags.sprites = Some(PathBuf::from(value));
        } else if token == "--debug-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.debug_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--debug-log=") {
            flags.debug_log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

/// Parse a grid dimension in `1..=MAX_DIMENSION`.
pub fn parse_dimension(s: &str) -> Option<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_DIMENSION).contains(n))
}
