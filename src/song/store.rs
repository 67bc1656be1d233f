//! Song persistence.
//!
//! The prompter only needs to look songs up by id and to read/write single
//! song files. `JsonSongStore` keeps one `<id>.json` file per song in a
//! library directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Setlist, Song, SongError};

/// Lookup of songs by id.
pub trait SongStore {
    /// Load the song with the given id.
    fn song(&self, id: &str) -> Result<Song, SongError>;

    /// Persist a song, replacing any previous version with the same id.
    fn save(&self, song: &Song) -> Result<(), SongError>;

    /// Ids of every song in the store, sorted.
    fn ids(&self) -> Result<Vec<String>, SongError>;
}

/// Directory of `<id>.json` song files.
#[derive(Debug, Clone)]
pub struct JsonSongStore {
    dir: PathBuf,
}

impl JsonSongStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Read a song file, validating its timing invariants.
    pub fn load_song(path: &Path) -> Result<Song, SongError> {
        let song: Song = read_json(path)?;
        song.validate()?;
        debug!(path = %path.display(), lines = song.lines.len(), "loaded song");
        Ok(song)
    }

    /// Read a setlist file.
    pub fn load_setlist(path: &Path) -> Result<Setlist, SongError> {
        read_json(path)
    }

    /// Write a song as pretty-printed JSON.
    pub fn write_song(path: &Path, song: &Song) -> Result<(), SongError> {
        let json = serde_json::to_string_pretty(song).map_err(|source| SongError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(|source| SongError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SongStore for JsonSongStore {
    fn song(&self, id: &str) -> Result<Song, SongError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(SongError::NotFound { id: id.to_string() });
        }
        Self::load_song(&path)
    }

    fn save(&self, song: &Song) -> Result<(), SongError> {
        song.validate()?;
        fs::create_dir_all(&self.dir).map_err(|source| SongError::Io {
            path: self.dir.clone(),
            source,
        })?;
        Self::write_song(&self.path_for(&song.id), song)
    }

    fn ids(&self) -> Result<Vec<String>, SongError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(SongError::Io {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable library entry");
                    continue;
                }
            };
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SongError> {
    let content = fs::read_to_string(path).map_err(|source| SongError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SongError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
