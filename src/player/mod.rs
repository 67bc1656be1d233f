//! Full-screen lyric prompter
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PrompterState struct and shared types (SectionMarker, InputResult)
//! - `input/`: Keyboard and mouse input handling
//! - `playback/`: Clock time to scroll position, section markers
//! - `render/`: UI rendering (lyrics, progress bar, status bar, help)
//! - `prompter`: Terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use cuesheet::player::{play_song, PlayOptions, PlaybackResult};
//! use cuesheet::song::JsonSongStore;
//! use std::path::Path;
//!
//! let song = JsonSongStore::load_song(Path::new("song.json")).unwrap();
//! match play_song(&song, &PlayOptions::default()).unwrap() {
//!     PlaybackResult::Quit { title, .. } => println!("Stopped: {}", title),
//!     PlaybackResult::Next { .. } => println!("Next song"),
//! }
//! ```

pub(crate) mod input;
pub mod playback;
mod prompter;
pub mod render;
pub mod state;

pub use prompter::{play_song, PlayOptions, PlaybackResult};
pub use state::{InputResult, PrompterState, SectionMarker};
