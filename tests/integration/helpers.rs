//! Shared fixtures for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use cuesheet::song::JsonSongStore;
use cuesheet::{LyricLine, SectionRef, SectionType, Song};

pub fn song(id: &str, lines: Vec<LyricLine>) -> Song {
    Song {
        id: id.to_string(),
        title: format!("Song {}", id),
        artist: None,
        duration_seconds: None,
        lines,
    }
}

/// Three lines at 0, 5 and 10 seconds.
pub fn three_line_song() -> Song {
    song(
        "three",
        vec![
            LyricLine::new("l1", "one").at(0.0),
            LyricLine::new("l2", "two").at(5.0),
            LyricLine::new("l3", "three").at(10.0),
        ],
    )
}

/// Anchors at 10s and 40s with two untimed lines between them.
pub fn anchored_song() -> Song {
    song(
        "anchored",
        vec![
            LyricLine::new("l1", "first").at(10.0),
            LyricLine::new("l2", "second"),
            LyricLine::new("l3", "third"),
            LyricLine::new("l4", "fourth").at(40.0),
        ],
    )
}

/// A verse spanning 0..9s and a chorus spanning 9..15s, no line times.
pub fn sectioned_song() -> Song {
    let verse = SectionRef::new(SectionType::Verse)
        .with_number(1)
        .with_bounds(0.0, 9.0);
    let chorus = SectionRef::new(SectionType::Chorus).with_bounds(9.0, 15.0);
    song(
        "sectioned",
        vec![
            LyricLine::new("v1", "verse a").in_section(verse.clone()),
            LyricLine::new("v2", "verse b").in_section(verse.clone()),
            LyricLine::new("v3", "verse c").in_section(verse.clone()),
            LyricLine::new("v4", "verse d").in_section(verse),
            LyricLine::new("c1", "chorus a").in_section(chorus.clone()),
            LyricLine::new("c2", "chorus b").in_section(chorus),
        ],
    )
}

/// Write `song` as `<dir>/<id>.json`.
pub fn write_song(dir: &Path, song: &Song) -> PathBuf {
    let path = dir.join(format!("{}.json", song.id));
    JsonSongStore::write_song(&path, song).expect("write song fixture");
    path
}

pub fn times(song: &Song) -> Vec<Option<f64>> {
    song.lines.iter().map(|l| l.time_seconds).collect()
}

/// The cuesheet binary with config, data and log files kept inside `home`.
pub fn cuesheet(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cuesheet").expect("cuesheet binary");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("NO_COLOR", "1");
    cmd
}
