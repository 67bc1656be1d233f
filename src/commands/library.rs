//! `library` subcommands: list and add songs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use cuesheet::song::{JsonSongStore, SongStore};
use cuesheet::theme::current_theme;
use cuesheet::Config;

use super::load_song;

fn open_store(library: Option<&PathBuf>) -> Result<JsonSongStore> {
    let dir = match library {
        Some(dir) => dir.clone(),
        None => Config::load()?.library_dir()?,
    };
    Ok(JsonSongStore::new(dir))
}

/// Print the song ids in the library, one per line.
pub fn handle_list(library: Option<&PathBuf>) -> Result<()> {
    let store = open_store(library)?;
    let ids = store
        .ids()
        .with_context(|| format!("Cannot read library {}", store.dir().display()))?;

    if ids.is_empty() {
        eprintln!(
            "{}",
            current_theme().secondary_text(&format!(
                "No songs in {}",
                store.dir().display()
            ))
        );
    }
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

/// Validate a song file and store it in the library under its id.
pub fn handle_add(file: &Path, library: Option<&PathBuf>) -> Result<()> {
    let song = load_song(file)?;
    let store = open_store(library)?;
    let replaced = store.ids()?.contains(&song.id);

    store
        .save(&song)
        .with_context(|| format!("Cannot add {} to {}", song.id, store.dir().display()))?;
    info!(id = %song.id, dir = %store.dir().display(), replaced, "library add");

    let verb = if replaced { "Replaced" } else { "Added" };
    println!(
        "{}",
        current_theme().success_text(&format!(
            "{} {} in {}",
            verb,
            song.id,
            store.dir().display()
        ))
    );
    Ok(())
}
