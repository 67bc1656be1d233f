//! Lyric line timing transforms.
//!
//! Pure functions used by the lyric editor to fill in per-line times:
//!
//! - [`sections`]: spread a section's start/end bounds over its lines
//! - [`anchors`]: interpolate between explicitly timed ("anchor") lines
//!
//! Both take the line list by reference and return a new list. Missing or
//! partial timing data is never an error; the affected lines pass through.

pub mod anchors;
pub mod sections;

pub use anchors::{find_anchor_points, interpolate_anchor_times};
pub use sections::{
    is_first_line_of_section, propagate_section_times, section_runs, set_section_bounds,
    SectionRun,
};
