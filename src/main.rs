//! cuesheet CLI entry point

mod commands;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cuesheet::cli::{Cli, Commands, ConfigCommands, LibraryCommands, TimesCommands};
use cuesheet::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The prompter owns the terminal, so logs go to a file
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Commands::Play { song, display } => commands::play::handle_play(&song, &display),
        Commands::Setlist {
            file,
            library,
            display,
        } => commands::play::handle_setlist(&file, library.as_ref(), &display),
        Commands::Times(cmd) => match cmd {
            TimesCommands::Propagate(args) => commands::times::handle_propagate(&args),
            TimesCommands::Interpolate(args) => commands::times::handle_interpolate(&args),
            TimesCommands::Anchors { file } => commands::times::handle_anchors(&file),
            TimesCommands::Bounds(args) => commands::times::handle_bounds(&args),
        },
        Commands::Library(cmd) => match cmd {
            LibraryCommands::List { library } => commands::library::handle_list(library.as_ref()),
            LibraryCommands::Add { file, library } => {
                commands::library::handle_add(&file, library.as_ref())
            }
        },
        Commands::Offset {
            file,
            time,
            line_height,
            anchor_y,
        } => commands::offset::handle_offset(&file, time, line_height, anchor_y),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cuesheet", &mut io::stdout());
            Ok(())
        }
    }
}

/// Send `tracing` output to `<data dir>/cuesheet.log`.
///
/// The filter comes from `CUESHEET_LOG`, then `RUST_LOG`, defaulting to `info`.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("CUESHEET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = Config::data_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let file = open_log(&dir.join("cuesheet.log"))?;
    let writer = Arc::new(Mutex::new(file));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || FileLogWriter::new(Arc::clone(&writer)))
        .try_init();
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

struct FileLogWriter {
    file: Arc<Mutex<File>>,
}

impl FileLogWriter {
    fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl Write for FileLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => {
                file.write_all(buf)?;
                Ok(buf.len())
            }
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }
}
