//! Configuration file handling.
//!
//! Settings live in `<config dir>/cuesheet/config.toml`. A missing file
//! means defaults, and any missing field falls back to its default, so old
//! config files keep loading after new settings are added.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub library: LibraryConfig,
}

/// Prompter display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal rows per lyric line (text row plus spacing)
    pub line_height: u16,
    /// Where the active line is held, as a fraction of the lyric area height
    pub anchor_ratio: f64,
    /// Clock tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Minimum milliseconds between redraws
    pub frame_interval_ms: u64,
    /// Show section titles above the first line of each section
    pub show_sections: bool,
    /// Seconds jumped by the seek keys
    pub seek_step_secs: f64,
    /// Color theme: "stage", "classic" or "ocean"
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_height: 2,
            anchor_ratio: 0.35,
            tick_interval_ms: 50,
            frame_interval_ms: 16,
            show_sections: true,
            seek_step_secs: 5.0,
            theme: "stage".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Song library settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory of `<id>.json` song files (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cuesheet").join("config.toml"))
    }

    /// Directory for the song library and log file.
    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_local_dir().context("Could not determine data directory")?;
        Ok(dir.join("cuesheet"))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Song library directory, from the config or the default data dir.
    pub fn library_dir(&self) -> Result<PathBuf> {
        match &self.library.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::data_dir()?.join("songs")),
        }
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct MigrateResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before and gained fields
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, comments and formatting are left untouched.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Config file is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Default config is not valid TOML")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        // Tables with nothing to add (e.g. `[library]` without a dir) are skipped
        let Some(default_table) = default_item.as_table().filter(|t| !t.is_empty()) else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
