//! cuesheet - terminal teleprompter for musicians
//!
//! Lyric lines scroll past a fixed anchor in step with an elapsed-time
//! clock. The library holds the song model, the timing transforms that
//! fill in missing line times, the clock, the time to scroll-offset
//! mapping and the full-screen prompter built on top of them.

pub mod cli;
pub mod clock;
pub mod config;
pub mod player;
pub mod scroll;
pub mod song;
pub mod theme;
pub mod timing;

pub use clock::{Clock, ClockState};
pub use config::Config;
pub use scroll::compute_scroll_offset;
pub use song::{LyricLine, SectionRef, SectionType, Setlist, Song, SongError};
pub use timing::{find_anchor_points, interpolate_anchor_times, propagate_section_times};
