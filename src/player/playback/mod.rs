//! Playback logic for the prompter.
//!
//! This module handles section markers and the mapping from the clock's
//! time to the prompter's scroll position.

mod markers;
mod position;

pub use markers::{collect_section_markers, section_title_at};
pub use position::{ScrollGeometry, ScrollPosition};
