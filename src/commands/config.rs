//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use cuesheet::config::migrate_config;
use cuesheet::theme::{ansi, current_theme};
use cuesheet::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Catch typos before the next prompter session does
    Config::load()?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation unless `yes`.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    // Run migration
    let result = migrate_config(&content)?;

    // Case 1: No changes needed
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    // Case 2: Config file doesn't exist - offer to create with full defaults
    if !file_exists {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        println!();
        print_diff_preview(&result.content, &[], true);
        println!();

        if !yes && !prompt_confirmation(&format!("Create {}?", config_path.display()))? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }

        // Create config directory and write file
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_config(&config_path, &result.content)?;
        println!(
            "{}",
            theme.success_text("Config file created successfully.")
        );
        return Ok(());
    }

    // Case 3: Config exists but has missing fields - show diff and confirm
    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();

    // Print summary
    if total_sections > 0 {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("Found {} missing field(s):", total_fields))
        );
    }
    println!();

    // Show diff preview - compare old content with new content
    print_diff_preview(&result.content, &result.added_fields, false);
    println!();

    // Prompt for confirmation
    if !yes
        && !prompt_confirmation(&format!(
            "Apply these changes to {}?",
            config_path.display()
        ))?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    write_config(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));

    Ok(())
}

/// Print a diff-style preview of the config changes.
fn print_diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    for line in diff_preview(new_content, added_fields, is_new_file) {
        println!("{}", line);
    }
}

/// Lines of the diff preview.
///
/// Added fields get a green `+` prefix under their section header; a
/// section header is only shown when something below it was added. For a
/// new file every non-empty line counts as added.
fn diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) -> Vec<String> {
    let mut out = Vec::new();
    let mut section = String::new();
    let mut pending_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name.to_string();
            pending_header = Some(line.to_string());
            continue;
        }

        let added = match trimmed.split_once('=') {
            Some((key, _)) => {
                is_new_file || added_fields.contains(&format!("{}.{}", section, key.trim()))
            }
            None => is_new_file && !trimmed.is_empty(),
        };
        if !added {
            continue;
        }

        if let Some(header) = pending_header.take() {
            out.push(format!("{}+ {}{}", ansi::GREEN, header, ansi::RESET));
        }
        out.push(format!("{}+ {}{}", ansi::GREEN, line, ansi::RESET));
    }
    out
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
