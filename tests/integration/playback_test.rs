//! Clock driven playback: clock time mapped to scroll positions

use std::time::Duration;

use cuesheet::clock::{Clock, ManualTimeSource};
use cuesheet::player::playback::{collect_section_markers, ScrollGeometry};
use cuesheet::scroll::compute_scroll_offset;
use cuesheet::timing::propagate_section_times;

use crate::helpers::{sectioned_song, three_line_song};

/// Advance the source in tick-sized steps, polling like the event loop does.
fn run_for(clock: &mut Clock<ManualTimeSource>, time: &ManualTimeSource, ms: u64) {
    let tick = clock.tick_interval().as_millis() as u64;
    for _ in 0..ms / tick {
        time.advance_ms(tick);
        clock.poll();
    }
}

#[test]
fn scroll_follows_the_clock() {
    let song = three_line_song();
    let time = ManualTimeSource::new();
    let mut clock = Clock::new(time.clone()).with_duration(song.duration_seconds);

    assert_eq!(
        compute_scroll_offset(clock.current_time(), &song.lines, 60.0, 200.0),
        -200.0
    );

    clock.play();
    run_for(&mut clock, &time, 2500);

    assert!((clock.current_time() - 2.5).abs() < 1e-9);
    let offset = compute_scroll_offset(clock.current_time(), &song.lines, 60.0, 200.0);
    assert!((offset - -170.0).abs() < 1e-6, "offset {}", offset);
}

#[test]
fn pause_and_resume_keep_position() {
    let song = three_line_song();
    let time = ManualTimeSource::new();
    let mut clock = Clock::new(time.clone()).with_duration(song.duration_seconds);

    clock.play();
    run_for(&mut clock, &time, 1000);
    clock.pause();
    let paused_at = clock.current_time();

    time.advance(Duration::from_secs(30));
    assert_eq!(clock.current_time(), paused_at);

    clock.play();
    run_for(&mut clock, &time, 1000);
    assert!((clock.current_time() - 2.0).abs() < 1e-9);
}

#[test]
fn set_duration_stops_the_clock_on_the_last_line() {
    let mut song = three_line_song();
    song.duration_seconds = Some(10.0);
    let time = ManualTimeSource::new();
    let mut clock = Clock::new(time.clone()).with_duration(song.duration_seconds);

    clock.play();
    run_for(&mut clock, &time, 12_000);

    assert_eq!(clock.current_time(), 10.0);
    assert!(!clock.is_playing());

    // The last line stays at the anchor
    let geometry = ScrollGeometry {
        line_height: 60,
        anchor_ratio: 0.5,
    };
    let position = geometry.position(clock.current_time(), &song.lines, 400);
    assert_eq!(position.offset, 120.0 - 200.0);
    assert_eq!(position.active_line, Some(2));
}

#[test]
fn without_duration_the_clock_runs_past_the_last_line() {
    let song = three_line_song();
    assert_eq!(song.duration_seconds, None);
    let time = ManualTimeSource::new();
    let mut clock = Clock::new(time.clone()).with_duration(song.duration_seconds);

    clock.play();
    run_for(&mut clock, &time, 12_000);

    assert!((clock.current_time() - 12.0).abs() < 1e-6, "{}", clock.current_time());
    assert!(clock.is_playing());

    // Scrolling holds the last line at the anchor while time goes on
    let geometry = ScrollGeometry {
        line_height: 60,
        anchor_ratio: 0.5,
    };
    let position = geometry.position(clock.current_time(), &song.lines, 400);
    assert_eq!(position.offset, 120.0 - 200.0);
    assert_eq!(position.active_line, Some(2));
}

#[test]
fn seeking_moves_the_active_line() {
    let song = three_line_song();
    let mut clock = Clock::new(ManualTimeSource::new());
    let geometry = ScrollGeometry {
        line_height: 2,
        anchor_ratio: 0.0,
    };

    clock.seek(7.0);
    assert_eq!(geometry.position(clock.current_time(), &song.lines, 20).active_line, Some(1));

    clock.seek_by(-100.0);
    assert_eq!(clock.current_time(), 0.0);
    assert_eq!(geometry.position(clock.current_time(), &song.lines, 20).active_line, Some(0));
}

#[test]
fn section_markers_for_a_propagated_song() {
    let mut song = sectioned_song();
    song.lines = propagate_section_times(&song.lines);

    let markers = collect_section_markers(&song.lines);
    let summary: Vec<(f64, &str)> = markers
        .iter()
        .map(|m| (m.time, m.label.as_str()))
        .collect();
    assert_eq!(summary, vec![(0.0, "Verse 1"), (9.0, "Chorus")]);
}
