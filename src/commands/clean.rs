//! Clean command handler

use anyhow::{bail, Result};
use std::path::Path;

use reeltidy::files::clean_folder;
use reeltidy::theme::current_theme;
use reeltidy::Interrupt;

use super::{load_config, print_rename_report};

/// Rename the video files directly inside `folder`.
#[cfg(not(tarpaulin_include))]
pub fn handle(folder: &Path, dry_run: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();
    let interrupt = Interrupt::install();

    let report = clean_folder(
        folder,
        &config.normalizer(),
        &config.video_extensions(),
        dry_run,
        &interrupt,
    )?;

    print_rename_report(&report, dry_run, &theme);

    if !report.failures.is_empty() {
        bail!("{} file(s) could not be renamed", report.failures.len());
    }
    Ok(())
}
