//! Tilepaint - A terminal tile-map editor.
//!
//! # Usage
//!
//! ```bash
//! tilepaint
//! tilepaint --rows 20 --cols 32 --print
//! tilepaint --sprites tiles.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tilepaint::app::App;
use tilepaint::config::{
    ConfigFlags, MAX_DIMENSION, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use tilepaint::perf;
use tilepaint::sprites::SpriteMap;

/// A terminal tile-map editor with live level-string export
#[derive(Parser, Debug)]
#[command(name = "tilepaint", version, about, long_about = None)]
struct Cli {
    /// Number of grid rows
    #[arg(long, value_parser = parse_dimension)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long, value_parser = parse_dimension)]
    cols: Option<usize>,

    /// JSON file mapping tile symbols to sprite resources
    #[arg(long, value_name = "PATH")]
    sprites: Option<PathBuf>,

    /// Print the level string to stdout on exit
    #[arg(long)]
    print: bool,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write every applied event and drawn frame to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    tilepaint::config::parse_dimension(s)
        .ok_or_else(|| format!("expected a number between 1 and {MAX_DIMENSION}"))
}

fn load_sprites(path: Option<&PathBuf>) -> SpriteMap {
    let Some(path) = path else {
        return SpriteMap::default();
    };
    match SpriteMap::load(path) {
        Ok(map) => map,
        Err(err) => {
            let err = anyhow::Error::from(err);
            tracing::warn!("{err:#}; using built-in sprites");
            SpriteMap::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        rows: cli.rows,
        cols: cli.cols,
        sprites: cli.sprites.clone(),
        print: cli.print,
        perf: cli.perf,
        debug_log: cli.debug_log.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("TILEPAINT_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        tracing::warn!(
            "Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let sprites = load_sprites(effective.sprites.as_ref());
    let (rows, cols) = effective.grid_size();

    // Run the application
    let mut app = App::new()
        .with_grid_size(rows, cols)
        .with_sprites(sprites)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    let level = app.run().context("Application error")?;
    if effective.print {
        println!("{level}");
    }
    Ok(())
}
