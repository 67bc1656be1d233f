//! Integration tests for the cuesheet CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use cuesheet::song::JsonSongStore;

use crate::helpers::{anchored_song, cuesheet, sectioned_song, three_line_song, times, write_song};

// ============================================================================
// times
// ============================================================================

#[test]
fn times_anchors_prints_indices() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &anchored_song());

    cuesheet(home.path())
        .args(["times", "anchors"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0\n3\n");
}

#[test]
fn times_interpolate_prints_song_json() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &anchored_song());

    cuesheet(home.path())
        .args(["times", "interpolate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeSeconds\": 20.0"))
        .stdout(predicate::str::contains("\"timeSeconds\": 30.0"));
}

#[test]
fn times_propagate_writes_output_file() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &sectioned_song());
    let out = home.path().join("out.json");

    cuesheet(home.path())
        .args(["times", "propagate"])
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated 6 line(s)"));

    let song = JsonSongStore::load_song(&out).unwrap();
    assert_eq!(
        times(&song),
        vec![
            Some(0.0),
            Some(3.0),
            Some(6.0),
            Some(9.0),
            Some(9.0),
            Some(15.0)
        ]
    );
    // Input untouched
    assert_eq!(JsonSongStore::load_song(&path).unwrap(), sectioned_song());
}

#[test]
fn times_in_place_rewrites_input() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &anchored_song());

    cuesheet(home.path())
        .args(["times", "interpolate", "--in-place"])
        .arg(&path)
        .assert()
        .success();

    let song = JsonSongStore::load_song(&path).unwrap();
    assert_eq!(song.lines[1].time_seconds, Some(20.0));
}

#[test]
fn times_bounds_sets_every_line_of_the_section() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &sectioned_song());

    cuesheet(home.path())
        .args(["times", "bounds", "--in-place", "--section", "chorus"])
        .args(["--start", "10", "--end", "16"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated 2 line(s)"));

    let song = JsonSongStore::load_song(&path).unwrap();
    let bounds: Vec<_> = song
        .lines
        .iter()
        .map(|l| l.section.as_ref().and_then(|s| s.bounds()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            Some((0.0, 9.0)),
            Some((0.0, 9.0)),
            Some((0.0, 9.0)),
            Some((0.0, 9.0)),
            Some((10.0, 16.0)),
            Some((10.0, 16.0))
        ]
    );
    // Line times are only filled in with --propagate
    assert_eq!(times(&song), vec![None; 6]);
}

#[test]
fn times_bounds_with_propagate_fills_line_times() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &sectioned_song());

    cuesheet(home.path())
        .args(["times", "bounds", "--section", "verse", "--number", "1"])
        .args(["--start", "2", "--end", "8", "--propagate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeSeconds\": 4.0"))
        .stdout(predicate::str::contains("\"startTime\": 2.0"));
}

#[test]
fn times_bounds_unknown_section_fails() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &sectioned_song());

    cuesheet(home.path())
        .args(["times", "bounds", "--section", "bridge", "--start", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No section 'Bridge'"));
}

#[test]
fn invalid_song_file_fails_with_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    cuesheet(home.path())
        .args(["times", "anchors"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load song"))
        .stderr(predicate::str::contains("broken.json"));
}

// ============================================================================
// library
// ============================================================================

#[test]
fn library_add_then_list() {
    let home = TempDir::new().unwrap();
    let library = home.path().join("songs");
    let anchored = write_song(home.path(), &anchored_song());
    let three = write_song(home.path(), &three_line_song());

    for path in [&three, &anchored] {
        cuesheet(home.path())
            .args(["library", "add"])
            .arg(path)
            .arg("--library")
            .arg(&library)
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));
    }

    cuesheet(home.path())
        .args(["library", "list", "--library"])
        .arg(&library)
        .assert()
        .success()
        .stdout("anchored\nthree\n");

    assert_eq!(
        JsonSongStore::load_song(&library.join("three.json")).unwrap(),
        three_line_song()
    );
}

#[test]
fn library_add_twice_replaces() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &three_line_song());

    cuesheet(home.path()).args(["library", "add"]).arg(&path).assert().success();
    cuesheet(home.path())
        .args(["library", "add"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced three"));
}

#[test]
fn library_list_defaults_to_the_configured_dir() {
    let home = TempDir::new().unwrap();

    cuesheet(home.path())
        .args(["library", "list"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No songs in"));

    let path = write_song(home.path(), &anchored_song());
    cuesheet(home.path()).args(["library", "add"]).arg(&path).assert().success();

    cuesheet(home.path())
        .args(["library", "list"])
        .assert()
        .success()
        .stdout("anchored\n");
}

#[test]
fn library_add_rejects_invalid_songs() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.json");
    fs::write(
        &path,
        r#"{"id":"bad","title":"Bad","lines":[{"id":"a","text":"x","timeSeconds":-2}]}"#,
    )
    .unwrap();

    cuesheet(home.path())
        .args(["library", "add"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load song"));
}

// ============================================================================
// offset
// ============================================================================

#[test]
fn offset_matches_the_three_line_scenario() {
    let home = TempDir::new().unwrap();
    let path = write_song(home.path(), &three_line_song());

    for (time, expected) in [("2.5", "-170\n"), ("-1", "-200\n"), ("12", "-80\n")] {
        cuesheet(home.path())
            .arg("offset")
            .arg(&path)
            .args(["--time", time, "--line-height", "60", "--anchor-y", "200"])
            .assert()
            .success()
            .stdout(expected);
    }
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    cuesheet(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cuesheet"));
}

#[test]
fn config_path_points_at_config_toml() {
    let home = TempDir::new().unwrap();
    cuesheet(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    cuesheet(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cuesheet 0.1.0"));
}

#[test]
fn no_arguments_shows_usage() {
    let home = TempDir::new().unwrap();
    cuesheet(home.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
