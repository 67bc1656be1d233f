//! Song library and file loading

use std::fs;

use cuesheet::song::{JsonSongStore, SongStore};
use cuesheet::SongError;
use tempfile::TempDir;

use crate::helpers::{anchored_song, three_line_song, write_song};

#[test]
fn saved_songs_are_listed_and_loaded_by_id() {
    let dir = TempDir::new().unwrap();
    let store = JsonSongStore::new(dir.path().join("songs"));

    store.save(&three_line_song()).unwrap();
    store.save(&anchored_song()).unwrap();

    assert_eq!(store.ids().unwrap(), vec!["anchored", "three"]);
    assert_eq!(store.song("three").unwrap(), three_line_song());
}

#[test]
fn missing_song_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = JsonSongStore::new(dir.path());

    match store.song("nope") {
        Err(SongError::NotFound { id }) => assert_eq!(id, "nope"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn empty_library_has_no_ids() {
    let dir = TempDir::new().unwrap();
    let store = JsonSongStore::new(dir.path().join("not-created-yet"));
    assert!(store.ids().unwrap().is_empty());
}

#[test]
fn written_file_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_song(dir.path(), &three_line_song());

    let json = fs::read_to_string(path).unwrap();
    assert!(json.contains("\"timeSeconds\": 5.0"));
    assert!(!json.contains("time_seconds"));
}

#[test]
fn negative_line_time_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"id":"bad","title":"Bad","lines":[{"id":"a","text":"x","timeSeconds":-2}]}"#,
    )
    .unwrap();

    let err = JsonSongStore::load_song(&path).unwrap_err();
    assert!(matches!(err, SongError::InvalidTime { line: 0, .. }), "{}", err);
}

#[test]
fn setlist_lists_song_ids_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gig.json");
    fs::write(
        &path,
        r#"{"id":"gig","name":"Friday","songs":["three","anchored"]}"#,
    )
    .unwrap();

    let setlist = JsonSongStore::load_setlist(&path).unwrap();
    assert_eq!(setlist.name, "Friday");
    assert_eq!(setlist.songs, vec!["three", "anchored"]);
}
