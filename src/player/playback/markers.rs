//! Section markers for the progress bar.
//!
//! Every section run becomes a marker at the time the section starts: its
//! explicit start time if set, otherwise the time of its first line.

use crate::player::state::SectionMarker;
use crate::song::LyricLine;
use crate::timing::section_runs;

/// Collect one marker per timed section run, in line order.
///
/// Runs of lines outside any section, and sections with no time at all,
/// produce no marker.
pub fn collect_section_markers(lines: &[LyricLine]) -> Vec<SectionMarker> {
    section_runs(lines)
        .into_iter()
        .filter(|run| run.key.is_some())
        .filter_map(|run| {
            let first = &lines[run.range.start];
            let section = first.section.as_ref()?;
            let time = section.start_time.or(first.time_seconds)?;
            Some(SectionMarker {
                time,
                label: section.title(),
            })
        })
        .collect()
}

/// Title of the section the line at `index` belongs to.
pub fn section_title_at(lines: &[LyricLine], index: usize) -> Option<String> {
    lines
        .get(index)
        .and_then(|line| line.section.as_ref())
        .map(|section| section.title())
}
