//! Section-based time propagation.
//!
//! Consecutive lines sharing a [`SectionKey`] form a run. When the run's
//! section carries both a start and an end time, the run's lines are spaced
//! evenly over that interval, both endpoints included.

use std::ops::Range;

use crate::song::{LyricLine, SectionKey};

/// A maximal run of consecutive lines with the same section identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRun {
    /// Section identity, `None` for a line outside any section
    pub key: Option<SectionKey>,
    /// Line indices covered by the run
    pub range: Range<usize>,
}

impl SectionRun {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Group lines into section runs, left to right.
///
/// A line without a section is always a run of its own, so it both ends the
/// preceding section run and never joins the next one.
pub fn section_runs(lines: &[LyricLine]) -> Vec<SectionRun> {
    let mut runs: Vec<SectionRun> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let key = SectionKey::of(line);
        match runs.last_mut() {
            Some(run) if key.is_some() && run.key == key => run.range.end = index + 1,
            _ => runs.push(SectionRun {
                key,
                range: index..index + 1,
            }),
        }
    }

    runs
}

/// Overwrite line times from section bounds.
///
/// For each run whose section has both bounds, a single line gets the start
/// time and N > 1 lines get `start + (end - start) * i / (N - 1)`. All other
/// lines keep their existing time. The result depends only on the bounds, so
/// applying it twice gives the same list.
pub fn propagate_section_times(lines: &[LyricLine]) -> Vec<LyricLine> {
    let mut result = lines.to_vec();

    for run in section_runs(lines) {
        if run.key.is_none() {
            continue;
        }
        let Some((start, end)) = lines[run.range.start]
            .section
            .as_ref()
            .and_then(|s| s.bounds())
        else {
            continue;
        };

        let count = run.len();
        for (position, index) in run.range.clone().enumerate() {
            let time = if count == 1 {
                start
            } else if position == count - 1 {
                end
            } else {
                start + (end - start) * position as f64 / (count - 1) as f64
            };
            result[index].time_seconds = Some(time);
        }
    }

    result
}

/// Whether the line at `index` opens a new section run.
///
/// Lines without a section never open one.
pub fn is_first_line_of_section(lines: &[LyricLine], index: usize) -> bool {
    let Some(key) = lines.get(index).and_then(SectionKey::of) else {
        return false;
    };
    match index.checked_sub(1).and_then(|prev| lines.get(prev)) {
        Some(prev) => SectionKey::of(prev).as_ref() != Some(&key),
        None => true,
    }
}

/// Set the bounds of every line belonging to the section `key`.
///
/// Bounds are a per-identity attribute, so all lines sharing the key are
/// updated, even when they are not contiguous. `None` clears a bound.
pub fn set_section_bounds(
    lines: &[LyricLine],
    key: &SectionKey,
    start: Option<f64>,
    end: Option<f64>,
) -> Vec<LyricLine> {
    lines
        .iter()
        .cloned()
        .map(|mut line| {
            if let Some(section) = line.section.as_mut() {
                if &section.key() == key {
                    section.start_time = start.map(|t| t.max(0.0));
                    section.end_time = end;
                }
            }
            line
        })
        .collect()
}
