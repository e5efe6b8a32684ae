//! Command handlers for the reeltidy CLI.
//!
//! Each submodule handles one subcommand. Dispatch lives in main.rs.

pub mod check;
pub mod clean;
pub mod completions;
pub mod config;
pub mod episodes;
pub mod move_files;
pub mod scan;

use anyhow::Result;
use std::path::{Path, PathBuf};

use reeltidy::theme::Theme;
use reeltidy::{Config, RenameDecision, RenameReport};

/// Load the config from `--config` when given, otherwise the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_with(path)
}

/// The config file that `--config` points at, or the default location.
pub fn config_file(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// One line for a rename: `old -> new`.
pub fn format_rename(decision: &RenameDecision) -> String {
    format!("{} -> {}", decision.original_name(), decision.new_name())
}

/// One line for a file left alone, with the reason when there is one.
pub fn format_kept(decision: &RenameDecision) -> String {
    match &decision.reason {
        Some(reason) => format!("{} (left unchanged: {})", decision.original_name(), reason),
        None => format!("{} (unchanged)", decision.original_name()),
    }
}

/// Print every entry of a rename report followed by a summary line.
pub fn print_rename_report(report: &RenameReport, dry_run: bool, theme: &Theme) {
    let verb = if dry_run { "Would rename" } else { "Renamed" };

    for decision in &report.renamed {
        println!("{}", theme.primary_text(&format_rename(decision)));
    }
    for decision in &report.unsalvageable {
        println!("{}", theme.warning_text(&format_kept(decision)));
    }
    for (decision, err) in &report.failures {
        println!(
            "{}",
            theme.error_text(&format!("{} (skipped: {})", decision.original_name(), err))
        );
    }

    println!();
    let summary = format!(
        "{} {} file(s), {} already clean, {} unsalvageable, {} failed",
        verb,
        report.renamed.len(),
        report.unchanged.len(),
        report.unsalvageable.len(),
        report.failures.len()
    );
    if report.failures.is_empty() {
        println!("{}", theme.success_text(&summary));
    } else {
        println!("{}", theme.error_text(&summary));
    }
    if report.interrupted {
        println!("{}", theme.warning_text("Interrupted before all files were processed."));
    }
}
