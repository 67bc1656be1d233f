//! `offset` subcommand: scroll offset of a song at a given time.

use std::path::Path;

use anyhow::Result;

use cuesheet::compute_scroll_offset;

use super::load_song;

pub fn handle_offset(file: &Path, time: f64, line_height: f64, anchor_y: f64) -> Result<()> {
    let song = load_song(file)?;
    let offset = compute_scroll_offset(time, &song.lines, line_height, anchor_y);
    println!("{}", offset);
    Ok(())
}
