//! `times` subcommands: fill in line times and list anchors.

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use cuesheet::cli::{BoundsArgs, TransformArgs};
use cuesheet::song::{JsonSongStore, SectionKey};
use cuesheet::timing::{
    find_anchor_points, interpolate_anchor_times, propagate_section_times, set_section_bounds,
};
use cuesheet::{LyricLine, Song};

use super::load_song;

/// Spread section bounds over each section's lines.
pub fn handle_propagate(args: &TransformArgs) -> Result<()> {
    transform(args, "propagate", propagate_section_times)
}

/// Fill the lines between anchors, using the song's own anchor lines.
pub fn handle_interpolate(args: &TransformArgs) -> Result<()> {
    transform(args, "interpolate", |lines| {
        interpolate_anchor_times(lines, &find_anchor_points(lines))
    })
}

/// Print anchor line indices, one per line.
pub fn handle_anchors(file: &Path) -> Result<()> {
    let song = load_song(file)?;
    for index in find_anchor_points(&song.lines) {
        println!("{}", index);
    }
    Ok(())
}

/// Set one section's bounds, optionally spreading them over its lines.
pub fn handle_bounds(args: &BoundsArgs) -> Result<()> {
    let key = args.key();
    let song = load_song(&args.transform.file)?;
    if !song
        .lines
        .iter()
        .any(|line| SectionKey::of(line).as_ref() == Some(&key))
    {
        bail!(
            "No section '{}' in {}",
            key,
            args.transform.file.display()
        );
    }

    transform(&args.transform, "bounds", |lines| {
        let bounded = set_section_bounds(lines, &key, args.start, args.end);
        if args.propagate {
            propagate_section_times(&bounded)
        } else {
            bounded
        }
    })
}

fn transform(
    args: &TransformArgs,
    name: &str,
    apply: impl Fn(&[LyricLine]) -> Vec<LyricLine>,
) -> Result<()> {
    let song = load_song(&args.file)?;
    let updated = Song {
        lines: apply(&song.lines),
        ..song.clone()
    };

    let changed = song
        .lines
        .iter()
        .zip(&updated.lines)
        .filter(|(before, after)| before != after)
        .count();
    info!(file = %args.file.display(), transform = name, changed, "times transform");

    let target = if args.in_place {
        Some(args.file.as_path())
    } else {
        args.output.as_deref()
    };

    match target {
        Some(path) => {
            if let Err(e) = updated.validate() {
                bail!("{} produced an invalid song: {}", name, e);
            }
            JsonSongStore::write_song(path, &updated)?;
            eprintln!("Updated {} line(s), wrote {}", changed, path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&updated)?),
    }
    Ok(())
}
