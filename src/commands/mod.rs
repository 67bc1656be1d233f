//! Subcommand handlers for the `cuesheet` binary.

pub mod config;
pub mod library;
pub mod offset;
pub mod play;
pub mod times;

use std::path::Path;

use anyhow::{Context, Result};

use cuesheet::song::JsonSongStore;
use cuesheet::Song;

/// Load and validate a song file, with the path in the error.
pub fn load_song(path: &Path) -> Result<Song> {
    JsonSongStore::load_song(path).with_context(|| format!("Cannot load song {}", path.display()))
}
