//! Command line interface definitions.
//!
//! Kept in the library so the `xtask` crate can render man pages from the
//! same definitions the binary parses.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::song::{SectionKey, SectionType};

/// Version string; development builds carry the git SHA.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let base = env!("CARGO_PKG_VERSION");
        let date = env!("CUESHEET_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if sha != "unknown" => {
                let short = &sha[..sha.len().min(7)];
                format!("{}-{} ({})", base, short, date)
            }
            _ => format!("{} ({})", base, date),
        }
    })
}

#[derive(Debug, Parser)]
#[command(name = "cuesheet")]
#[command(version = version())]
#[command(about = "Terminal teleprompter for musicians", long_about = None)]
#[command(after_help = "\
Songs are JSON files with timestamped lyric lines. Use `cuesheet times` to
fill in line times from section bounds or from a few anchor lines, then
`cuesheet play` to run the auto-scrolling prompter.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a song in the full-screen prompter
    Play {
        /// Song file (.json), or a song id from the library
        song: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Play the songs of a setlist one after another
    Setlist {
        /// Setlist file (.json)
        file: PathBuf,

        /// Song library directory (defaults to the configured one)
        #[arg(long)]
        library: Option<PathBuf>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Fill in or inspect lyric line times
    #[command(subcommand)]
    Times(TimesCommands),

    /// Manage the song library
    #[command(subcommand)]
    Library(LibraryCommands),

    /// Print the scroll offset of a song at a given time
    Offset {
        /// Song file (.json)
        file: PathBuf,

        /// Playback time in seconds
        #[arg(short, long, allow_hyphen_values = true)]
        time: f64,

        /// Height of one lyric row
        #[arg(long, default_value_t = 1.0)]
        line_height: f64,

        /// Vertical position the active line is held at
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        anchor_y: f64,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum TimesCommands {
    /// Spread section start/end times evenly over each section's lines
    Propagate(TransformArgs),

    /// Interpolate line times between anchor lines
    Interpolate(TransformArgs),

    /// List the indices of anchor lines (explicit time > 0)
    Anchors {
        /// Song file (.json)
        file: PathBuf,
    },

    /// Set or clear the start/end time of a section
    Bounds(BoundsArgs),
}

#[derive(Debug, Args)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub transform: TransformArgs,

    /// Section type
    #[arg(long, value_enum)]
    pub section: SectionType,

    /// Section number, e.g. 2 for the second verse
    #[arg(long)]
    pub number: Option<u32>,

    /// Custom section label
    #[arg(long)]
    pub label: Option<String>,

    /// Section start in seconds (omit to clear)
    #[arg(long)]
    pub start: Option<f64>,

    /// Section end in seconds (omit to clear)
    #[arg(long)]
    pub end: Option<f64>,

    /// Spread the new bounds over the song's lines afterwards
    #[arg(long)]
    pub propagate: bool,
}

impl BoundsArgs {
    /// Identity of the section named on the command line.
    pub fn key(&self) -> SectionKey {
        SectionKey {
            section_type: self.section,
            number: self.number,
            label: self.label.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum LibraryCommands {
    /// List the ids of the songs in the library
    List {
        /// Song library directory (defaults to the configured one)
        #[arg(long)]
        library: Option<PathBuf>,
    },

    /// Copy a song file into the library, stored under its id
    Add {
        /// Song file (.json)
        file: PathBuf,

        /// Song library directory (defaults to the configured one)
        #[arg(long)]
        library: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Song file (.json)
    pub file: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,
}

#[derive(Debug, Args, Clone, Default)]
pub struct DisplayArgs {
    /// Terminal rows per lyric line
    #[arg(long)]
    pub line_height: Option<u16>,

    /// Active line position as a fraction of the screen height (0.0 - 1.0)
    #[arg(long)]
    pub anchor: Option<f64>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open configuration in $EDITOR
    Edit,

    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the config file path
    Path,
}
