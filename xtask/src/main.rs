//! Development tasks for cuesheet.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for cuesheet")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for cuesheet and its subcommands
    GenMan {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::GenMan { out_dir } => gen_man(&out_dir),
    }
}

fn gen_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut cmd = cuesheet::cli::Cli::command();
    cmd.build();

    let mut written = Vec::new();
    write_pages(&cmd, "cuesheet", out_dir, &mut written)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Write the page for `cmd` and, recursively, one per subcommand
/// (`cuesheet-times-propagate.1`, ...).
fn write_pages(
    cmd: &clap::Command,
    name: &str,
    out_dir: &Path,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone())
        .title(name.to_uppercase())
        .render(&mut buffer)?;

    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    written.push(path);

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        if sub.get_name() == "help" {
            continue;
        }
        let sub_name = format!("{}-{}", name, sub.get_name());
        write_pages(sub, &sub_name, out_dir, written)?;
    }
    Ok(())
}
