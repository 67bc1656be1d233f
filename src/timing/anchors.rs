//! Anchor-based time interpolation.
//!
//! An anchor is a line whose time was placed explicitly (defined and > 0).
//! Lines between two anchors are interpolated linearly; lines before the
//! first anchor are back-filled evenly from zero. Lines after the last
//! anchor are left as they are until another anchor is placed.

use crate::song::LyricLine;

/// Indices of lines with an explicit time greater than zero, ascending.
pub fn find_anchor_points(lines: &[LyricLine]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.time_seconds.is_some_and(|t| t > 0.0))
        .map(|(index, _)| index)
        .collect()
}

/// Fill in the times of non-anchor lines.
///
/// `anchor_indices` may be unsorted and may contain duplicates. Indices that
/// are out of range or name a line without a positive time are ignored.
///
/// Before the first anchor `a0`, line `i` gets `T(a0) / (a0 + 1) * (i + 1)`:
/// the sequence approaches but never reaches the anchor's own time.
pub fn interpolate_anchor_times(lines: &[LyricLine], anchor_indices: &[usize]) -> Vec<LyricLine> {
    let mut result = lines.to_vec();

    let mut anchors: Vec<(usize, f64)> = anchor_indices
        .iter()
        .filter_map(|&index| {
            lines
                .get(index)
                .and_then(|line| line.time_seconds)
                .filter(|&time| time > 0.0)
                .map(|time| (index, time))
        })
        .collect();
    anchors.sort_by_key(|&(index, _)| index);
    anchors.dedup_by_key(|&mut (index, _)| index);

    let Some(&(first_index, first_time)) = anchors.first() else {
        return result;
    };

    for pair in anchors.windows(2) {
        let (a, time_a) = pair[0];
        let (b, time_b) = pair[1];
        let span = (b - a) as f64;
        // Endpoints keep their own value
        for (j, line) in result.iter_mut().enumerate().take(b).skip(a + 1) {
            line.time_seconds = Some(time_a + (time_b - time_a) * (j - a) as f64 / span);
        }
    }

    if first_index > 0 {
        let time_per_line = first_time / (first_index + 1) as f64;
        for (i, line) in result.iter_mut().enumerate().take(first_index) {
            line.time_seconds = Some(time_per_line * (i + 1) as f64);
        }
    }

    result
}
