//! Timing transforms on whole songs

use cuesheet::scroll::compute_scroll_offset;
use cuesheet::timing::{
    find_anchor_points, interpolate_anchor_times, propagate_section_times, set_section_bounds,
};
use cuesheet::{LyricLine, SectionRef, SectionType};

use crate::helpers::{anchored_song, sectioned_song, times};

#[test]
fn propagate_spreads_section_bounds_over_lines() {
    let mut song = sectioned_song();
    song.lines = propagate_section_times(&song.lines);

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
}

#[test]
fn propagate_twice_changes_nothing() {
    let once = propagate_section_times(&sectioned_song().lines);
    let twice = propagate_section_times(&once);
    assert_eq!(once, twice);
}

#[test]
fn interpolate_fills_between_anchors() {
    let song = anchored_song();
    let anchors = find_anchor_points(&song.lines);
    assert_eq!(anchors, vec![0, 3]);

    let lines = interpolate_anchor_times(&song.lines, &anchors);
    let filled: Vec<Option<f64>> = lines.iter().map(|l| l.time_seconds).collect();
    assert_eq!(filled, vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0)]);
}

#[test]
fn interpolated_times_are_monotonic_between_anchors() {
    let lines: Vec<LyricLine> = (0..12)
        .map(|i| {
            let line = LyricLine::new(format!("l{}", i), "la");
            match i {
                2 => line.at(4.0),
                7 => line.at(19.0),
                11 => line.at(31.5),
                _ => line,
            }
        })
        .collect();

    let result = interpolate_anchor_times(&lines, &find_anchor_points(&lines));
    let filled: Vec<f64> = result.iter().filter_map(|l| l.time_seconds).collect();

    assert_eq!(filled.len(), 12);
    assert!(filled.windows(2).all(|w| w[0] <= w[1]), "{:?}", filled);
    assert_eq!(filled[2], 4.0);
    assert_eq!(filled[7], 19.0);
    assert_eq!(filled[11], 31.5);
}

#[test]
fn edited_bounds_flow_through_to_scroll_offset() {
    let song = sectioned_song();
    let chorus = SectionRef::new(SectionType::Chorus).key();

    // Stretch the chorus, then re-time the lines
    let lines = set_section_bounds(&song.lines, &chorus, Some(9.0), Some(21.0));
    let lines = propagate_section_times(&lines);
    assert_eq!(lines[5].time_seconds, Some(21.0));

    // Halfway through the chorus: between rows 4 and 5 of a 2-row layout
    let offset = compute_scroll_offset(15.0, &lines, 2.0, 0.0);
    assert_eq!(offset, 9.0);
}
