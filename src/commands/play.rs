//! `play` and `setlist` subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use cuesheet::cli::DisplayArgs;
use cuesheet::player::{play_song, PlayOptions, PlaybackResult};
use cuesheet::song::{JsonSongStore, SongStore};
use cuesheet::theme::current_theme;
use cuesheet::{Config, Song};

use super::load_song;

/// Prompter options from the config file with command line overrides.
fn play_options(config: &Config, display: &DisplayArgs) -> PlayOptions {
    let mut options = PlayOptions::from_config(&config.display);
    if let Some(line_height) = display.line_height {
        options.geometry.line_height = line_height;
    }
    if let Some(anchor) = display.anchor {
        options.geometry.anchor_ratio = anchor;
    }
    options.autoplay = display.autoplay;
    options
}

/// A song argument is a file path, or an id looked up in the library.
fn resolve_song(config: &Config, song: &str) -> Result<Song> {
    let path = Path::new(song);
    if path.exists() || path.extension().is_some_and(|ext| ext == "json") {
        return load_song(path);
    }

    let store = JsonSongStore::new(config.library_dir()?);
    store
        .song(song)
        .with_context(|| format!("No song file or library entry named '{}'", song))
}

#[cfg(not(tarpaulin_include))]
pub fn handle_play(song: &str, display: &DisplayArgs) -> Result<()> {
    let config = Config::load()?;
    let song = resolve_song(&config, song)?;
    let result = play_song(&song, &play_options(&config, display))?;
    println!("{}", current_theme().primary_text(&result.message()));
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_setlist(file: &Path, library: Option<&PathBuf>, display: &DisplayArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    let setlist = JsonSongStore::load_setlist(file)
        .with_context(|| format!("Cannot load setlist {}", file.display()))?;

    let dir = match library {
        Some(dir) => dir.clone(),
        None => config.library_dir()?,
    };
    let store = JsonSongStore::new(dir);
    let options = play_options(&config, display);

    println!(
        "{}",
        theme.primary_text(&format!(
            "Setlist '{}': {} song(s)",
            setlist.name,
            setlist.songs.len()
        ))
    );

    for (position, id) in setlist.songs.iter().enumerate() {
        let song = match store.song(id) {
            Ok(song) => song,
            Err(e) => {
                warn!(id = %id, error = %e, "skipping setlist entry");
                eprintln!("{}", theme.error_text(&format!("Skipping {}: {}", id, e)));
                continue;
            }
        };

        let result = play_song(&song, &options)?;
        println!(
            "{}",
            theme.secondary_text(&format!("{}. {}", position + 1, result.message()))
        );
        if matches!(result, PlaybackResult::Quit { .. }) {
            break;
        }
    }
    Ok(())
}
