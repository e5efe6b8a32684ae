//! Move command handler

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use reeltidy::files::{find_video_files, move_files_to_folder, MoveKind, MoveOptions};
use reeltidy::state::{self, LAST_DST, LAST_SRC};
use reeltidy::theme::current_theme;
use reeltidy::Interrupt;

use super::load_config;

/// Move every video under `src` into `dst`, falling back to remembered folders.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    src: Option<PathBuf>,
    dst: Option<PathBuf>,
    remember: bool,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();

    let src = resolve_folder(src, LAST_SRC, "source")?;
    let dst = resolve_folder(dst, LAST_DST, "destination")?;

    if !src.is_dir() {
        bail!("Source is not a directory: {}", src.display());
    }

    // Compare resolved paths so `move . Movies` never picks up Movies/ itself.
    let src = fs::canonicalize(&src)
        .with_context(|| format!("Failed to resolve {}", src.display()))?;
    let dst = resolved(&dst);

    let mut files = find_video_files(&src, &config.video_extensions());
    files.retain(|f| !f.starts_with(&dst));
    files.sort();

    if files.is_empty() {
        println!("{}", theme.primary_text("No video files found."));
        if remember {
            remember_folders(&src, &dst)?;
        }
        return Ok(());
    }

    let options = MoveOptions {
        duplicate_prefix: config.moves.duplicate_prefix.clone(),
        dry_run,
    };
    let interrupt = Interrupt::install();
    let report = move_files_to_folder(&files, &dst, &options, &interrupt)?;

    let arrow = if dry_run { "would move to" } else { "->" };
    for outcome in &report.moved {
        let line = format!(
            "{} {} {}",
            outcome.source.display(),
            arrow,
            outcome.target.display()
        );
        match outcome.kind {
            MoveKind::Plain => println!("{}", theme.primary_text(&line)),
            MoveKind::Duplicate => println!("{}", theme.warning_text(&line)),
        }
    }
    for (path, err) in &report.failures {
        println!(
            "{}",
            theme.error_text(&format!("{} (failed: {})", path.display(), err))
        );
    }

    println!();
    let summary = format!(
        "{} {} file(s) ({} duplicate(s), {}), {} failed",
        if dry_run { "Would move" } else { "Moved" },
        report.moved.len(),
        report.duplicate_count(),
        report.size_human(),
        report.failures.len()
    );
    if report.failures.is_empty() {
        println!("{}", theme.success_text(&summary));
    } else {
        println!("{}", theme.error_text(&summary));
    }
    if report.interrupted {
        println!("{}", theme.warning_text("Interrupted before all files were moved."));
    }

    if !report.failures.is_empty() {
        bail!("{} file(s) could not be moved", report.failures.len());
    }
    if remember && !report.interrupted {
        remember_folders(&src, &dst)?;
    }
    Ok(())
}

/// Store both folders for the next run without arguments.
fn remember_folders(src: &Path, dst: &Path) -> Result<()> {
    let mut paths = BTreeMap::new();
    paths.insert(LAST_SRC.to_string(), src.to_string_lossy().into_owned());
    paths.insert(LAST_DST.to_string(), dst.to_string_lossy().into_owned());
    state::save_paths(&paths).context("Failed to remember folders")
}

/// Use the given folder or the one remembered under `key`.
fn resolve_folder(given: Option<PathBuf>, key: &str, label: &str) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path);
    }
    match state::load_saved_path(key).context("Failed to read remembered folders")? {
        Some(saved) => {
            tracing::info!("Using remembered {} {}", label, saved);
            Ok(PathBuf::from(saved))
        }
        None => bail!(
            "No {} folder given and none remembered (run once with --remember)",
            label
        ),
    }
}

/// Canonical path when it exists, otherwise absolute.
fn resolved(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
